use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{PropError, Result};

pub fn read_json_file(path: &Path) -> Result<Value> {
    let data = fs::read(path)?;
    if data.iter().all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r')) {
        return Err(PropError::EmptyInput);
    }
    let value = serde_json::from_slice(&data)?;
    debug!(path = %path.display(), bytes = data.len(), "loaded json");
    Ok(value)
}

pub fn write_json_file(path: &Path, value: &Value) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    fs::write(path, s)?;
    debug!(path = %path.display(), "wrote json");
    Ok(())
}
