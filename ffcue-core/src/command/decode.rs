//! Decode command rendering: the reduced variant of the encode renderer.
//!
//! Output is always yuv420p raw video, scaled to fit the target geometry
//! and padded to center. The escaped parentheses in the pad expression are
//! literal bytes of the rendered line.

use crate::params::system::DecodeParams;

/// Render the full decode command line.
pub fn render_decode_command(sys: &DecodeParams) -> String {
    let bit_suffix = if sys.output_bitdepth == "8" { "" } else { "10le" };

    format!(
        "{bin} -y -f hevc -i {input} -f rawvideo -pix_fmt yuv420p{bit_suffix} \
         -vf scale={width}:{height}:force_original_aspect_ratio=decrease,\
         pad={width}:{height}:\\(ow-iw\\)/2:\\(oh-ih\\)/2 {output}",
        bin = sys.ffmpeg_bin,
        input = sys.input_file,
        width = sys.width,
        height = sys.height,
        output = sys.output_file,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/command/decode.rs"]
mod tests;
