//! Conflict validation of user overrides against host-owned parameters.

use crate::foundation::error::{CueError, CueResult};
use crate::params::user::UserOverrides;

/// Keys that duplicate host-controlled geometry/timing and may never be
/// set by the user under any circumstances.
pub const ALWAYS_FORBIDDEN: &[&str] = &["input-csp", "input-res", "fps"];

/// Flags mandated by the downstream stream-conformance profile.
///
/// The renderer asserts these unconditionally; users may neither set nor
/// negate them.
pub const COMPLIANCE_FLAGS: &[&str] = &["aud", "annexb", "repeat-headers", "hrd"];

/// Run the three conflict checks against a normalized override set.
///
/// The checks run fail-fast in a fixed order (always-forbidden, host-owned
/// shadow, conformance): when several violations coexist, the first check
/// to hit produces the one diagnostic the host sees. `required_keys` is the
/// host-owned set in underscore style, as the system schema declares it.
pub fn check_conflicts<'a>(
    user: &UserOverrides,
    required_keys: impl IntoIterator<Item = &'a str>,
) -> CueResult<()> {
    for key in ALWAYS_FORBIDDEN {
        if user.contains(key) {
            return Err(CueError::forbidden(*key));
        }
    }

    for key in required_keys {
        let key = key.replace('_', "-");
        if user.contains(&key) {
            return Err(CueError::host_owned(key));
        }
    }

    for flag in COMPLIANCE_FLAGS {
        if user.contains(flag) {
            return Err(CueError::compliance(*flag, *flag));
        }
        let negated = format!("no-{flag}");
        if user.contains(&negated) {
            return Err(CueError::compliance(*flag, negated));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/params/validate.rs"]
mod tests;
