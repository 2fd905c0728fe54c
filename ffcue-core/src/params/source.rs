//! Loading of the host-provided JSON parameter documents.
//!
//! The host nests the system parameter map under a `plugin_config` key; the
//! optional user document nests its override map under `user_config.x265`.
//! Both maps stay string-keyed and untyped here; typing happens in
//! [`crate::params::system`].

use std::path::Path;

use serde_json::{Map, Value};

use crate::foundation::error::{CueError, CueResult, ParamScope};

#[derive(serde::Deserialize)]
struct SystemDoc {
    plugin_config: Option<Map<String, Value>>,
}

#[derive(serde::Deserialize)]
struct UserDoc {
    user_config: Option<UserConfig>,
}

#[derive(serde::Deserialize)]
struct UserConfig {
    x265: Option<Map<String, Value>>,
}

fn read_document(path: &Path) -> CueResult<String> {
    if !path.is_file() {
        return Err(CueError::MissingSource(path.display().to_string()));
    }
    std::fs::read_to_string(path).map_err(|_| CueError::MissingSource(path.display().to_string()))
}

fn parse_error(path: &Path, source: serde_json::Error) -> CueError {
    CueError::Parse {
        path: path.display().to_string(),
        source,
    }
}

/// Load the system parameter map from the host document at `path`.
pub fn load_system_map(path: &Path) -> CueResult<Map<String, Value>> {
    let text = read_document(path)?;
    let doc: SystemDoc = serde_json::from_str(&text).map_err(|e| parse_error(path, e))?;
    doc.plugin_config
        .ok_or_else(|| CueError::missing_key(ParamScope::System, "plugin_config"))
}

/// Load the raw user override map from the document at `path`.
///
/// Entries come back in document order, which is the order normalization
/// and rendering must preserve.
pub fn load_user_map(path: &Path) -> CueResult<Map<String, Value>> {
    let text = read_document(path)?;
    let doc: UserDoc = serde_json::from_str(&text).map_err(|e| parse_error(path, e))?;
    let user = doc
        .user_config
        .ok_or_else(|| CueError::missing_key(ParamScope::User, "user_config"))?;
    user.x265
        .ok_or_else(|| CueError::missing_key(ParamScope::User, "x265"))
}

/// Render a JSON scalar the way the tool expects it on the command line.
///
/// Strings pass through without quotes; numbers and booleans keep their
/// JSON spelling. No numeric validation happens anywhere downstream.
pub(crate) fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/source.rs"]
mod tests;
