// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! The fixed parameter tables of the drumkv1 preset format.
//!
//! These tables are a file-format contract with the drumkv1 sampler: indices,
//! names and default values must be emitted exactly as listed here. Treat any
//! edit as a format change, not a tuning tweak.

/// The drumkv1 preset format version emitted in the root element.
pub const PRESET_VERSION: &str = "0.9.3";

/// One parameter line of the preset document.
pub struct Param {
    pub index: u32,
    pub name: &'static str,
    pub value: &'static str,
}

/// Per-element parameter whose value is the element's key number rather than
/// the listed default.
pub const SAMPLE_PARAM_INDEX: u32 = 0;

/// Per-element parameter carrying the choke-group flag.
pub const GROUP_PARAM_INDEX: u32 = 5;

/// Keys placed in the choke group: the GM hi-hat notes (closed, pedal, open),
/// which the sampler treats as mutually exclusive.
pub const CHOKE_GROUP_KEYS: [i32; 3] = [42, 44, 46];

/// Parameters written for every element, in emission order. The values for
/// `SAMPLE_PARAM_INDEX` and `GROUP_PARAM_INDEX` listed here are placeholders;
/// the writer substitutes the element's key and choke-group flag.
pub const ELEMENT_PARAMS: [Param; 42] = [
    Param { index: 0, name: "GEN1_SAMPLE", value: "0" },
    Param { index: 1, name: "GEN1_REVERSE", value: "0" },
    Param { index: 2, name: "GEN1_OFFSET", value: "0" },
    Param { index: 3, name: "GEN1_OFFSET_1", value: "0" },
    Param { index: 4, name: "GEN1_OFFSET_2", value: "0" },
    Param { index: 5, name: "GEN1_GROUP", value: "0" },
    Param { index: 6, name: "GEN1_COARSE", value: "0" },
    Param { index: 7, name: "GEN1_FINE", value: "0" },
    Param { index: 8, name: "GEN1_ENVTIME", value: "1.0" },
    Param { index: 9, name: "DCF1_CUTOFF", value: "1" },
    Param { index: 10, name: "DCF1_RESO", value: "0" },
    Param { index: 11, name: "DCF1_TYPE", value: "0" },
    Param { index: 12, name: "DCF1_SLOPE", value: "0" },
    Param { index: 13, name: "DCF1_ENVELOPE", value: "1" },
    Param { index: 14, name: "DCF1_ATTACK", value: "0" },
    Param { index: 15, name: "DCF1_DECAY1", value: "0.5" },
    Param { index: 16, name: "DCF1_LEVEL2", value: "0.2" },
    Param { index: 17, name: "DCF1_DECAY2", value: "0.5" },
    Param { index: 18, name: "LFO1_SHAPE", value: "1" },
    Param { index: 19, name: "LFO1_WIDTH", value: "1" },
    Param { index: 20, name: "LFO1_BPM", value: "180" },
    Param { index: 21, name: "LFO1_RATE", value: "0.5" },
    Param { index: 22, name: "LFO1_SYNC", value: "0" },
    Param { index: 23, name: "LFO1_SWEEP", value: "0" },
    Param { index: 24, name: "LFO1_PITCH", value: "0" },
    Param { index: 25, name: "LFO1_CUTOFF", value: "0" },
    Param { index: 26, name: "LFO1_RESO", value: "0" },
    Param { index: 27, name: "LFO1_PANNING", value: "0" },
    Param { index: 28, name: "LFO1_VOLUME", value: "0" },
    Param { index: 29, name: "LFO1_ATTACK", value: "0" },
    Param { index: 30, name: "LFO1_DECAY1", value: "0.5" },
    Param { index: 31, name: "LFO1_LEVEL2", value: "0.2" },
    Param { index: 32, name: "LFO1_DECAY2", value: "0.5" },
    Param { index: 33, name: "DCA1_VOLUME", value: "1" },
    Param { index: 34, name: "DCA1_ATTACK", value: "0" },
    Param { index: 35, name: "DCA1_DECAY1", value: "1" },
    Param { index: 36, name: "DCA1_LEVEL2", value: "1" },
    Param { index: 37, name: "DCA1_DECAY2", value: "0.5" },
    Param { index: 38, name: "OUT1_WIDTH", value: "0" },
    Param { index: 39, name: "OUT1_PANNING", value: "0" },
    Param { index: 40, name: "OUT1_FXSEND", value: "1" },
    Param { index: 41, name: "OUT1_VOLUME", value: "0.5" },
];

/// Global parameters written once after the element list: controller
/// defaults, effects sends and dynamics.
pub const GLOBAL_PARAMS: [Param; 31] = [
    Param { index: 42, name: "DEF1_PITCHBEND", value: "0" },
    Param { index: 43, name: "DEF1_MODWHEEL", value: "0" },
    Param { index: 44, name: "DEF1_PRESSURE", value: "0.2" },
    Param { index: 45, name: "DEF1_VELOCITY", value: "0.2" },
    Param { index: 46, name: "DEF1_CHANNEL", value: "0" },
    Param { index: 47, name: "DEF1_NOTEOFF", value: "1" },
    Param { index: 48, name: "CHO1_WET", value: "0" },
    Param { index: 49, name: "CHO1_DELAY", value: "0.5" },
    Param { index: 50, name: "CHO1_FEEDB", value: "0.5" },
    Param { index: 51, name: "CHO1_RATE", value: "0.5" },
    Param { index: 52, name: "CHO1_MOD", value: "0.5" },
    Param { index: 53, name: "FLA1_WET", value: "0" },
    Param { index: 54, name: "FLA1_DELAY", value: "0.5" },
    Param { index: 55, name: "FLA1_FEEDB", value: "0.5" },
    Param { index: 56, name: "FLA1_DAFT", value: "0" },
    Param { index: 57, name: "PHA1_WET", value: "0" },
    Param { index: 58, name: "PHA1_RATE", value: "0.5" },
    Param { index: 59, name: "PHA1_FEEDB", value: "0.5" },
    Param { index: 60, name: "PHA1_DEPTH", value: "0.5" },
    Param { index: 61, name: "PHA1_DAFT", value: "0" },
    Param { index: 62, name: "DEL1_WET", value: "0" },
    Param { index: 63, name: "DEL1_DELAY", value: "0.5" },
    Param { index: 64, name: "DEL1_FEEDB", value: "0.5" },
    Param { index: 65, name: "DEL1_BPM", value: "180" },
    Param { index: 66, name: "REV1_WET", value: "0" },
    Param { index: 67, name: "REV1_ROOM", value: "0.5" },
    Param { index: 68, name: "REV1_DAMP", value: "0.5" },
    Param { index: 69, name: "REV1_FEEDB", value: "0.5" },
    Param { index: 70, name: "REV1_WIDTH", value: "0" },
    Param { index: 71, name: "DYN1_COMPRESS", value: "0" },
    Param { index: 72, name: "DYN1_LIMITER", value: "1" },
];
