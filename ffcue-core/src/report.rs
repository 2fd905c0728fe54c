//! Host reporting protocol.
//!
//! The host watches a single text channel. Exactly one headered line means
//! success; any line without a header is read as the complete error report.

use std::io::Write;

/// Which command-generation direction an invocation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Raw video in, HEVC elementary stream out.
    Encode,
    /// HEVC elementary stream in, raw video out.
    Decode,
}

impl Direction {
    /// The fixed literal the host scans for on the success line.
    pub fn header(self) -> &'static str {
        match self {
            Self::Encode => "FFMPEG ENCODING CMD",
            Self::Decode => "FFMPEG DECODING CMD",
        }
    }
}

/// Format the single success line the host reads.
pub fn host_line(direction: Direction, command: &str) -> String {
    format!("{}: {}", direction.header(), command)
}

/// Write the headered success line to the host channel.
pub fn report(out: &mut impl Write, direction: Direction, command: &str) -> std::io::Result<()> {
    writeln!(out, "{}", host_line(direction, command))
}

#[cfg(test)]
#[path = "../tests/unit/report.rs"]
mod tests;
