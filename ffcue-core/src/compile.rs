//! Top-level compile pipeline: load, normalize, validate, render.

use std::path::Path;

use crate::command::decode::render_decode_command;
use crate::command::encode::render_encode_command;
use crate::foundation::error::CueResult;
use crate::params::source;
use crate::params::system::{DecodeParams, EncodeParams};
use crate::params::user::UserOverrides;
use crate::params::validate::check_conflicts;

/// Compile the encode command line from the host document at `system_path`
/// and an optional user overrides document.
///
/// Fails fast on the first missing key or override conflict; rendering only
/// runs once both parameter sets are valid.
#[tracing::instrument]
pub fn compile_encode(system_path: &Path, user_path: Option<&Path>) -> CueResult<String> {
    let sys = EncodeParams::from_map(&source::load_system_map(system_path)?)?;

    let user = match user_path {
        Some(path) => UserOverrides::from_map(&source::load_user_map(path)?),
        None => UserOverrides::empty(),
    };
    check_conflicts(&user, EncodeParams::required_keys())?;

    let command = render_encode_command(&sys, &user);
    tracing::debug!(len = command.len(), "rendered encode command");
    Ok(command)
}

/// Compile the decode command line from the host document at `system_path`.
#[tracing::instrument]
pub fn compile_decode(system_path: &Path) -> CueResult<String> {
    let sys = DecodeParams::from_map(&source::load_system_map(system_path)?)?;

    let command = render_decode_command(&sys);
    tracing::debug!(len = command.len(), "rendered decode command");
    Ok(command)
}

#[cfg(test)]
#[path = "../tests/unit/compile.rs"]
mod tests;
