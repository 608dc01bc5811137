//! Xbox One Wired Controller input report parsing (USB, 14 bytes).
//!
//! # Report layout
//! | Offset | Size | Field          | Encoding                                   |
//! |--------|------|----------------|--------------------------------------------|
//! | 0–1    | 2    | header         | always `0x00 0x14`                         |
//! | 2      | u8   | D-pad / system | bit flags, see [`dpad_bits`]               |
//! | 3      | u8   | face / bumpers | bit flags, see [`button_bits`]             |
//! | 4      | u8   | left trigger   | 0–255, linear                              |
//! | 5      | u8   | right trigger  | 0–255, linear                              |
//! | 6–7    | i16  | left stick X   | LE, ÷32767                                 |
//! | 8–9    | i16  | left stick Y   | LE, ÷32767                                 |
//! | 10–11  | i16  | right stick X  | LE, ÷32767                                 |
//! | 12–13  | i16  | right stick Y  | LE, ÷32767                                 |
//!
//! Triggers here are 8-bit and linear, unlike the 10-bit quarter scheme of
//! the wireless report. Both are kept as observed on hardware.

use tracing::trace;
use xbox_hid_common::{bit_mask, ReportParser};

use crate::config::CodecConfig;
use crate::state::{ControllerState, StateChange};
use crate::types::ControllerKind;
use crate::{ReportError, ReportResult};

/// Wired input report length in bytes.
pub const WIRED_REPORT_LEN: usize = 14;

/// Leading two bytes of every wired input report.
pub const WIRED_REPORT_HEADER: [u8; 2] = [0x00, 0x14];

/// Stick normalisation divisor (`i16::MAX`).
const STICK_SCALE: f32 = 32767.0;

/// Trigger normalisation divisor.
const TRIGGER_SCALE: f32 = 255.0;

/// Byte 2 bit masks.
pub mod dpad_bits {
    pub const D_UP: u8 = 0b0000_0001;
    pub const D_DOWN: u8 = 0b0000_0010;
    pub const D_LEFT: u8 = 0b0000_0100;
    pub const D_RIGHT: u8 = 0b0000_1000;
    pub const HAMBUGER: u8 = 0b0001_0000;
    pub const WINDOWS: u8 = 0b0010_0000;
    pub const THUMB_LEFT: u8 = 0b0100_0000;
    pub const THUMB_RIGHT: u8 = 0b1000_0000;
}

/// Byte 3 bit masks.
pub mod button_bits {
    pub const LEFT_BUMPER: u8 = 0b0000_0001;
    pub const RIGHT_BUMPER: u8 = 0b0000_0010;
    pub const XBOX: u8 = 0b0000_0100;
    /// Reserved. No current hardware sets it; it is never mapped to a field.
    pub const RESERVED: u8 = 0b0000_1000;
    pub const A: u8 = 0b0001_0000;
    pub const B: u8 = 0b0010_0000;
    pub const X: u8 = 0b0100_0000;
    pub const Y: u8 = 0b1000_0000;
}

/// Returns `true` if `data` carries the wired input header.
pub fn is_wired_report(data: &[u8]) -> bool {
    data.starts_with(&WIRED_REPORT_HEADER)
}

/// Parse a wired report into a full snapshot, without diffing.
///
/// Every call recomputes all 21 fields from scratch, so the same bytes always
/// yield the same state.
///
/// # Errors
///
/// - [`ReportError::Empty`] for an empty payload
/// - [`ReportError::UnrecognizedHeader`] unless the report starts `0x00 0x14`
/// - [`ReportError::TooShort`] for fewer than [`WIRED_REPORT_LEN`] bytes
pub fn parse_wired_report(data: &[u8]) -> ReportResult<ControllerState> {
    if !is_wired_report(data) {
        return Err(match data {
            [] => ReportError::Empty,
            [first, rest @ ..] => ReportError::UnrecognizedHeader {
                first: *first,
                second: rest.first().copied(),
            },
        });
    }
    if data.len() < WIRED_REPORT_LEN {
        return Err(ReportError::TooShort {
            got: data.len(),
            need: WIRED_REPORT_LEN,
        });
    }

    let mut parser = ReportParser::at(data, WIRED_REPORT_HEADER.len());
    let dpad = parser.read_u8()?;
    let buttons = parser.read_u8()?;
    let left_trigger = parser.read_u8()?;
    let right_trigger = parser.read_u8()?;
    let left_x = parser.read_i16_le()?;
    let left_y = parser.read_i16_le()?;
    let right_x = parser.read_i16_le()?;
    let right_y = parser.read_i16_le()?;

    Ok(ControllerState {
        left_thumb_horizontal: normalize_stick(left_x),
        left_thumb_vertical: normalize_stick(left_y),
        right_thumb_horizontal: normalize_stick(right_x),
        right_thumb_vertical: normalize_stick(right_y),
        left_trigger: f32::from(left_trigger) / TRIGGER_SCALE,
        right_trigger: f32::from(right_trigger) / TRIGGER_SCALE,
        d_up: bit_mask(dpad, dpad_bits::D_UP),
        d_down: bit_mask(dpad, dpad_bits::D_DOWN),
        d_left: bit_mask(dpad, dpad_bits::D_LEFT),
        d_right: bit_mask(dpad, dpad_bits::D_RIGHT),
        a: bit_mask(buttons, button_bits::A),
        b: bit_mask(buttons, button_bits::B),
        x: bit_mask(buttons, button_bits::X),
        y: bit_mask(buttons, button_bits::Y),
        left_bumper: bit_mask(buttons, button_bits::LEFT_BUMPER),
        right_bumper: bit_mask(buttons, button_bits::RIGHT_BUMPER),
        hambuger: bit_mask(dpad, dpad_bits::HAMBUGER),
        thumb_left_pressed: bit_mask(dpad, dpad_bits::THUMB_LEFT),
        thumb_right_pressed: bit_mask(dpad, dpad_bits::THUMB_RIGHT),
        windows: bit_mask(dpad, dpad_bits::WINDOWS),
        xbox: bit_mask(buttons, button_bits::XBOX),
    })
}

/// `i16` → approximately [−1.0, +1.0]. `i16::MIN` lands slightly below −1.0.
fn normalize_stick(raw: i16) -> f32 {
    f32::from(raw) / STICK_SCALE
}

/// Stateful decoder for one wired connection.
#[derive(Debug, Clone)]
pub struct WiredCodec {
    state: ControllerState,
    config: CodecConfig,
}

impl WiredCodec {
    pub fn new() -> Self {
        Self::with_config(CodecConfig::for_kind(ControllerKind::Wired))
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            state: ControllerState::default(),
            config,
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Forget all stored values, as if freshly connected.
    pub fn reset(&mut self) {
        self.state = ControllerState::default();
    }

    /// Decode one report and return the fields it changed, in emission order.
    ///
    /// Reports that are not wired input reports are dropped and leave the
    /// stored state untouched.
    pub fn decode(&mut self, data: &[u8]) -> Vec<StateChange> {
        match parse_wired_report(data) {
            Ok(next) => {
                let changes = self.state.merge(next.fields());
                trace!("Wired report changed {} field(s)", changes.len());
                changes
            }
            Err(err) => {
                self.config
                    .unrecognized_reports
                    .observe(ControllerKind::Wired, data, &err);
                Vec::new()
            }
        }
    }
}

impl Default for WiredCodec {
    fn default() -> Self {
        Self::new()
    }
}
