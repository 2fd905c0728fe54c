//! Encode command rendering.
//!
//! Pure string assembly: no IO, no numeric validation, and byte-stable
//! output for a given parameter pair. Segment order and spacing are part of
//! the host contract and must not be reordered.

use crate::params::system::EncodeParams;
use crate::params::user::{SEPARATE_PARAMETERS, UserOverrides};

/// x265 settings the conformance profile mandates unconditionally.
const CONFORMANCE_PARAMS: &str = "aud=1:annexb=1:repeat-headers=1:hrd=1:hash=1:chromaloc=2:sar=1";

/// Render the full encode command line.
///
/// The override set must already have passed
/// [`crate::params::validate::check_conflicts`]; rendering itself never
/// rejects anything.
pub fn render_encode_command(sys: &EncodeParams, user: &UserOverrides) -> String {
    let pass_segment = if sys.multipass == "off" {
        String::new()
    } else {
        let num_pass = if sys.multipass == "1st" { "1" } else { "2" };
        format!(
            " -pass {num_pass} -passlogfile \"{stats}\" ",
            stats = sys.stats_file
        )
    };

    let bit_suffix = if sys.bit_depth == "10" { "10le" } else { "" };

    format!(
        "{bin} -f rawvideo -s {width}x{height} -pix_fmt {color_space}{bit_suffix} \
         -framerate {frame_rate} -i {input} {config} {pass_segment}-an -y -f hevc {output}",
        bin = sys.ffmpeg_bin,
        width = sys.width,
        height = sys.height,
        color_space = sys.color_space,
        frame_rate = sys.frame_rate,
        input = sys.input_file,
        config = x265_config(sys, user),
        output = sys.output_file,
    )
}

/// Assemble the codec selection flag, separate user flags, and the
/// combined `-x265-params` string.
fn x265_config(sys: &EncodeParams, user: &UserOverrides) -> String {
    let mut separate = String::new();
    for name in SEPARATE_PARAMETERS {
        if let Some(value) = user.get(name) {
            separate.push_str(&format!(" -{name} {value}"));
        }
    }

    let color = if sys.color_description_present == "1" {
        format!(
            "colorprim={}:transfer={}:colormatrix={}:",
            sys.color_primaries, sys.transfer_characteristics, sys.matrix_coefficients
        )
    } else {
        String::new()
    };

    let light = if sys.light_level_information_sei_present == "1" {
        format!(
            "max-cll={},{}:",
            sys.light_level_max_content, sys.light_level_max_frame_average
        )
    } else {
        String::new()
    };

    let mastering = if sys.mastering_display_sei_present == "1" {
        format!(
            "master-display=G({},{})B({},{})R({},{})WP({},{})L({},{}):",
            sys.mastering_display_sei_x1,
            sys.mastering_display_sei_y1,
            sys.mastering_display_sei_x2,
            sys.mastering_display_sei_y2,
            sys.mastering_display_sei_x3,
            sys.mastering_display_sei_y3,
            sys.mastering_display_sei_wx,
            sys.mastering_display_sei_wy,
            sys.mastering_display_sei_max_lum,
            sys.mastering_display_sei_min_lum
        )
    } else {
        String::new()
    };

    // has_any() drives the tail even when every entry is a separate flag,
    // so such sets leave a lone ':' before the closing quote. Hosts accept
    // it; keep the behavior.
    let user_tail = if user.has_any() {
        format!(":{}", user.combined(SEPARATE_PARAMETERS))
    } else {
        String::new()
    };

    format!(
        "-c:v libx265{separate} -x265-params \"{color}{light}{mastering}range={range}:\
         {CONFORMANCE_PARAMS}:bitrate={bitrate}:vbv-maxrate={maxrate}:vbv-bufsize={bufsize}{user_tail}\"",
        range = sys.range,
        bitrate = sys.data_rate,
        maxrate = sys.max_vbv_data_rate,
        bufsize = sys.vbv_buffer_size,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/command/encode.rs"]
mod tests;
