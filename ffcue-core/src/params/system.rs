//! Typed system parameter sets, populated by one pass over an ordered
//! field schema.
//!
//! The schema order is host-visible: when several required keys are absent,
//! the first one in schema order is the one named in the diagnostic.

use serde_json::{Map, Value};

use crate::foundation::error::{CueError, CueResult, ParamScope};
use crate::params::source::scalar_string;

/// One entry of a load schema: the document key, whether it must be
/// present, and the field it populates.
struct FieldSpec<P> {
    key: &'static str,
    required: bool,
    slot: fn(&mut P) -> &mut String,
}

fn load_schema<P: Default>(schema: &[FieldSpec<P>], map: &Map<String, Value>) -> CueResult<P> {
    let mut params = P::default();
    for field in schema {
        match map.get(field.key) {
            Some(value) => *(field.slot)(&mut params) = scalar_string(value),
            None if field.required => {
                return Err(CueError::missing_key(ParamScope::System, field.key));
            }
            None => {}
        }
    }
    Ok(params)
}

/// Host-supplied parameters for the encode direction.
///
/// All values are carried as strings; the host owns their semantics and the
/// renderer passes them through verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeParams {
    /// Source bit depth; `"10"` selects the 10-bit pixel format suffix.
    pub bit_depth: String,
    /// Frame width in pixels.
    pub width: String,
    /// Frame height in pixels.
    pub height: String,
    /// Input pixel format name, e.g. `yuv420p`.
    pub color_space: String,
    /// Input frame rate.
    pub frame_rate: String,
    /// Target bitrate in kbit/s.
    pub data_rate: String,
    /// VBV maximum rate in kbit/s.
    pub max_vbv_data_rate: String,
    /// VBV buffer size in kbit.
    pub vbv_buffer_size: String,
    /// Path or name of the ffmpeg binary.
    pub ffmpeg_bin: String,
    /// Raw video input path.
    pub input_file: String,
    /// Elementary stream output path.
    pub output_file: String,
    /// Multi-pass mode: `off`, `1st`, or a later-pass mode.
    pub multipass: String,
    /// Video range signalling (`full`/`limited`).
    pub range: String,
    /// Rate-control statistics file shared between passes.
    pub stats_file: String,
    /// `"1"` when the color description block is rendered.
    pub color_description_present: String,
    /// Color primaries code.
    pub color_primaries: String,
    /// Transfer characteristics code.
    pub transfer_characteristics: String,
    /// Matrix coefficients code.
    pub matrix_coefficients: String,
    /// `"1"` when the content light level block is rendered.
    pub light_level_information_sei_present: String,
    /// Maximum content light level.
    pub light_level_max_content: String,
    /// Maximum frame-average light level. Not on the required list (a host
    /// quirk kept for compatibility), so it defaults to empty.
    pub light_level_max_frame_average: String,
    /// `"1"` when the mastering display block is rendered.
    pub mastering_display_sei_present: String,
    /// Green primary x.
    pub mastering_display_sei_x1: String,
    /// Green primary y.
    pub mastering_display_sei_y1: String,
    /// Blue primary x.
    pub mastering_display_sei_x2: String,
    /// Blue primary y.
    pub mastering_display_sei_y2: String,
    /// Red primary x.
    pub mastering_display_sei_x3: String,
    /// Red primary y.
    pub mastering_display_sei_y3: String,
    /// White point x.
    pub mastering_display_sei_wx: String,
    /// White point y.
    pub mastering_display_sei_wy: String,
    /// Maximum display luminance.
    pub mastering_display_sei_max_lum: String,
    /// Minimum display luminance.
    pub mastering_display_sei_min_lum: String,
}

const ENCODE_SCHEMA: &[FieldSpec<EncodeParams>] = &[
    FieldSpec {
        key: "bit_depth",
        required: true,
        slot: |p| &mut p.bit_depth,
    },
    FieldSpec {
        key: "width",
        required: true,
        slot: |p| &mut p.width,
    },
    FieldSpec {
        key: "height",
        required: true,
        slot: |p| &mut p.height,
    },
    FieldSpec {
        key: "color_space",
        required: true,
        slot: |p| &mut p.color_space,
    },
    FieldSpec {
        key: "frame_rate",
        required: true,
        slot: |p| &mut p.frame_rate,
    },
    FieldSpec {
        key: "data_rate",
        required: true,
        slot: |p| &mut p.data_rate,
    },
    FieldSpec {
        key: "max_vbv_data_rate",
        required: true,
        slot: |p| &mut p.max_vbv_data_rate,
    },
    FieldSpec {
        key: "vbv_buffer_size",
        required: true,
        slot: |p| &mut p.vbv_buffer_size,
    },
    FieldSpec {
        key: "ffmpeg_bin",
        required: true,
        slot: |p| &mut p.ffmpeg_bin,
    },
    FieldSpec {
        key: "input_file",
        required: true,
        slot: |p| &mut p.input_file,
    },
    FieldSpec {
        key: "output_file",
        required: true,
        slot: |p| &mut p.output_file,
    },
    FieldSpec {
        key: "multipass",
        required: true,
        slot: |p| &mut p.multipass,
    },
    FieldSpec {
        key: "range",
        required: true,
        slot: |p| &mut p.range,
    },
    FieldSpec {
        key: "stats_file",
        required: true,
        slot: |p| &mut p.stats_file,
    },
    FieldSpec {
        key: "color_description_present",
        required: true,
        slot: |p| &mut p.color_description_present,
    },
    FieldSpec {
        key: "color_primaries",
        required: true,
        slot: |p| &mut p.color_primaries,
    },
    FieldSpec {
        key: "transfer_characteristics",
        required: true,
        slot: |p| &mut p.transfer_characteristics,
    },
    FieldSpec {
        key: "matrix_coefficients",
        required: true,
        slot: |p| &mut p.matrix_coefficients,
    },
    FieldSpec {
        key: "light_level_information_sei_present",
        required: true,
        slot: |p| &mut p.light_level_information_sei_present,
    },
    FieldSpec {
        key: "light_level_max_content",
        required: true,
        slot: |p| &mut p.light_level_max_content,
    },
    FieldSpec {
        key: "light_level_max_frame_average",
        required: false,
        slot: |p| &mut p.light_level_max_frame_average,
    },
    FieldSpec {
        key: "mastering_display_sei_present",
        required: true,
        slot: |p| &mut p.mastering_display_sei_present,
    },
    FieldSpec {
        key: "mastering_display_sei_x1",
        required: true,
        slot: |p| &mut p.mastering_display_sei_x1,
    },
    FieldSpec {
        key: "mastering_display_sei_y1",
        required: true,
        slot: |p| &mut p.mastering_display_sei_y1,
    },
    FieldSpec {
        key: "mastering_display_sei_x2",
        required: true,
        slot: |p| &mut p.mastering_display_sei_x2,
    },
    FieldSpec {
        key: "mastering_display_sei_y2",
        required: true,
        slot: |p| &mut p.mastering_display_sei_y2,
    },
    FieldSpec {
        key: "mastering_display_sei_x3",
        required: true,
        slot: |p| &mut p.mastering_display_sei_x3,
    },
    FieldSpec {
        key: "mastering_display_sei_y3",
        required: true,
        slot: |p| &mut p.mastering_display_sei_y3,
    },
    FieldSpec {
        key: "mastering_display_sei_wx",
        required: true,
        slot: |p| &mut p.mastering_display_sei_wx,
    },
    FieldSpec {
        key: "mastering_display_sei_wy",
        required: true,
        slot: |p| &mut p.mastering_display_sei_wy,
    },
    FieldSpec {
        key: "mastering_display_sei_max_lum",
        required: true,
        slot: |p| &mut p.mastering_display_sei_max_lum,
    },
    FieldSpec {
        key: "mastering_display_sei_min_lum",
        required: true,
        slot: |p| &mut p.mastering_display_sei_min_lum,
    },
];

impl EncodeParams {
    /// Populate from a loaded system map, failing on the first required key
    /// absent in schema order.
    pub fn from_map(map: &Map<String, Value>) -> CueResult<Self> {
        load_schema(ENCODE_SCHEMA, map)
    }

    /// Required encode keys, in schema order and underscore style.
    ///
    /// The conflict validator uses these (hyphen-normalized) as the
    /// host-owned set users may not shadow.
    pub fn required_keys() -> impl Iterator<Item = &'static str> {
        ENCODE_SCHEMA.iter().filter(|f| f.required).map(|f| f.key)
    }
}

/// Host-supplied parameters for the decode direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeParams {
    /// Output bit depth; anything but `"8"` selects the 10-bit suffix.
    pub output_bitdepth: String,
    /// Target width for the scale+pad filter.
    pub width: String,
    /// Target height for the scale+pad filter.
    pub height: String,
    /// Elementary stream input path.
    pub input_file: String,
    /// Raw video output path.
    pub output_file: String,
    /// Path or name of the ffmpeg binary.
    pub ffmpeg_bin: String,
}

const DECODE_SCHEMA: &[FieldSpec<DecodeParams>] = &[
    FieldSpec {
        key: "output_bitdepth",
        required: true,
        slot: |p| &mut p.output_bitdepth,
    },
    FieldSpec {
        key: "width",
        required: true,
        slot: |p| &mut p.width,
    },
    FieldSpec {
        key: "height",
        required: true,
        slot: |p| &mut p.height,
    },
    FieldSpec {
        key: "input_file",
        required: true,
        slot: |p| &mut p.input_file,
    },
    FieldSpec {
        key: "output_file",
        required: true,
        slot: |p| &mut p.output_file,
    },
    FieldSpec {
        key: "ffmpeg_bin",
        required: true,
        slot: |p| &mut p.ffmpeg_bin,
    },
];

impl DecodeParams {
    /// Populate from a loaded system map, failing on the first required key
    /// absent in schema order.
    pub fn from_map(map: &Map<String, Value>) -> CueResult<Self> {
        load_schema(DECODE_SCHEMA, map)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/system.rs"]
mod tests;
