//! ffcue compiles host encoder configuration into a validated ffmpeg
//! command line.
//!
//! An encoding host hands over a system parameters document (and, for
//! encode runs, an optional user overrides document); ffcue merges them
//! under a strict precedence policy and reports one command line back on
//! the host channel.
//!
//! # Pipeline overview
//!
//! 1. **Load**: read the system document (`plugin_config` namespace) and,
//!    when supplied, the user document (`user_config.x265` namespace).
//! 2. **Normalize**: rewrite user keys to the tool-native hyphen style and
//!    fold the `"True"`/`"False"` sentinels into the tool's `no-` prefix
//!    convention.
//! 3. **Validate**: reject user overrides of forbidden, host-owned, or
//!    conformance-mandated parameters, failing fast on the first violation.
//! 4. **Render**: deterministically assemble the command line from the
//!    merged parameter sets.
//! 5. **Report**: emit exactly one headered success line, or one plain
//!    diagnostic line on failure.
//!
//! The key design constraints:
//!
//! - **No encoding**: ffcue builds a command line; running ffmpeg is the
//!   host's business.
//! - **Deterministic-by-default**: rendering is a pure function of its two
//!   parameter sets, byte-stable across invocations.
//! - **Values pass through verbatim**: no unit conversion and no numeric
//!   validation; the host owns value semantics.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod command;
mod compile;
mod foundation;
mod params;
mod report;

pub use command::decode::render_decode_command;
pub use command::encode::render_encode_command;
pub use compile::{compile_decode, compile_encode};
pub use foundation::error::{CueError, CueResult, ParamScope};
pub use params::source::{load_system_map, load_user_map};
pub use params::system::{DecodeParams, EncodeParams};
pub use params::user::{OverrideValue, SEPARATE_PARAMETERS, UserOverrides};
pub use params::validate::{ALWAYS_FORBIDDEN, COMPLIANCE_FLAGS, check_conflicts};
pub use report::{Direction, host_line, report};
