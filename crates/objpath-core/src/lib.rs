//! objpath-core: path-based access to JSON-shaped data
//!
//! - Dotted (configurable separator) get/set over `serde_json::Value`,
//!   creating intermediate containers on write
//! - Immutable set on a structural deep copy
//! - Form input event to `{name: value}` mapping
//! - Tree browsing helpers and JSON file load/save for the CLI
//!
pub mod access;
pub mod clone;
pub mod error;
pub mod event;
pub mod io;
pub mod path;

pub use access::{
    ChildInfo, ValueKind, get_prop, get_prop_owned, list_children, remove_prop, set_prop,
    set_prop_immutable,
};
pub use clone::{clone_deep, to_plain};
pub use error::{PropError, Result};
pub use event::{EventTarget, InputEvent, map_input_event_data, map_input_event_value};
pub use io::{read_json_file, write_json_file};
pub use path::{GetOptions, Path, SetOptions};
