// Delimited property paths and the per-call options that go with them.
// - `Path::parse` splits on a separator string; segments are opaque keys.
// - `SetOptions` / `GetOptions` mirror `JsonOpts`: plain structs with a `Default`.
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_SEPARATOR: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Splits `raw` on `separator`. The empty string yields no segments; every
    /// other input keeps empty segments as literal `""` keys.
    pub fn parse(raw: &str, separator: &str) -> Self {
        let segments = if raw.is_empty() {
            Vec::new()
        } else if separator.is_empty() {
            vec![raw.to_string()]
        } else {
            raw.split(separator).map(str::to_string).collect()
        };
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Splits off the last segment, if any.
    pub fn split_last(&self) -> Option<(&String, &[String])> {
        self.segments.split_last()
    }
}

/// Strict index parse used when a segment addresses a sequence: plain decimal
/// digits with no leading zero, so `"01"` stays an ordinary key.
pub fn segment_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}

/// Base-10 integer prefix test: optional leading whitespace and sign, then a digit.
/// `"7"`, `"12abc"` and `"-1"` are numeric; `"x1"` and `""` are not.
pub fn is_numeric_segment(segment: &str) -> bool {
    let s = segment.trim_start();
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    s.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetOptions {
    pub separator: String,
    /// Create sequences instead of mappings for numeric intermediate segments.
    pub numeric_path_as_array: bool,
}

impl Default for SetOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            numeric_path_as_array: false,
        }
    }
}

impl SetOptions {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn numeric_path_as_array(mut self, enabled: bool) -> Self {
        self.numeric_path_as_array = enabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetOptions {
    pub separator: String,
    /// Returned when the path is missing or resolves to `null`.
    pub default_value: Option<Value>,
}

impl Default for GetOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            default_value: None,
        }
    }
}

impl GetOptions {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_empty_segments() {
        let p = Path::parse(".a.", ".");
        assert_eq!(p.segments(), &["", "a", ""]);
    }

    #[test]
    fn parse_empty_is_root() {
        assert!(Path::parse("", ".").is_empty());
        assert_eq!(Path::parse("a", ".").len(), 1);
    }

    #[test]
    fn parse_multi_char_separator() {
        let p = Path::parse("a::b.c::d", "::");
        assert_eq!(p.segments(), &["a", "b.c", "d"]);
    }

    #[test]
    fn numeric_segments_follow_integer_prefix() {
        assert!(is_numeric_segment("0"));
        assert!(is_numeric_segment("12abc"));
        assert!(is_numeric_segment(" -3"));
        assert!(!is_numeric_segment("x1"));
        assert!(!is_numeric_segment(""));
        assert!(!is_numeric_segment("-"));
    }

    #[test]
    fn index_is_strict() {
        assert_eq!(segment_index("3"), Some(3));
        assert_eq!(segment_index("0"), Some(0));
        assert_eq!(segment_index("10"), Some(10));
        assert_eq!(segment_index("01"), None);
        assert_eq!(segment_index("007"), None);
        assert_eq!(segment_index("12abc"), None);
        assert_eq!(segment_index("-1"), None);
        assert_eq!(segment_index("+1"), None);
        assert_eq!(segment_index(""), None);
    }

    #[test]
    fn options_defaults() {
        let s = SetOptions::default();
        assert_eq!(s.separator, ".");
        assert!(!s.numeric_path_as_array);
        let g = GetOptions::default().with_default(42);
        assert_eq!(g.default_value, Some(serde_json::json!(42)));
    }

    #[test]
    fn options_load_from_json_with_defaults() {
        let s: SetOptions =
            serde_json::from_value(serde_json::json!({"numeric_path_as_array": true})).unwrap();
        assert_eq!(s, SetOptions::default().numeric_path_as_array(true));
        let g: GetOptions =
            serde_json::from_value(serde_json::json!({"separator": "/", "default_value": [1]}))
                .unwrap();
        assert_eq!(g, GetOptions::default().with_separator("/").with_default(serde_json::json!([1])));
        let back = serde_json::to_value(&g).unwrap();
        assert_eq!(back["separator"], "/");
    }
}
