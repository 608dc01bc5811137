//! Xbox Wireless Controller report parsing (Bluetooth).
//!
//! Two input reports are understood. Anything else (the controller also sends
//! periodic reports whose meaning is unknown) is dropped.
//!
//! ## Xbox-button report (ID `0x02`)
//! | Offset | Field   | Encoding                      |
//! |--------|---------|-------------------------------|
//! | 0      | ID      | `0x02`                        |
//! | 1      | pressed | `0x01` pressed, else released |
//!
//! ## Main report (ID `0x01`, 17 bytes)
//! | Offset | Size | Field           | Encoding                               |
//! |--------|------|-----------------|----------------------------------------|
//! | 1–2    | u16  | left stick X    | LE, `v / 65535 * 2 − 1`                |
//! | 3–4    | u16  | left stick Y    | LE, same                               |
//! | 5–6    | u16  | right stick X   | LE, same                               |
//! | 7–8    | u16  | right stick Y   | LE, same                               |
//! | 9      | u8   | left trigger    | base, see [`decode_trigger`]           |
//! | 10     | u8   | left quarter    | low 2 bits                             |
//! | 11     | u8   | right trigger   | base                                   |
//! | 12     | u8   | right quarter   | low 2 bits                             |
//! | 13     | u8   | D-pad           | low nibble clock code, see [`DPad`]    |
//! | 14     | u8   | face / bumpers  | see [`button_bits`]                    |
//! | 15     | u8   | menu / sticks   | see [`system_bits`]                    |
//! | 16     | u8   | view            | bit 0                                  |
//!
//! The Xbox button is never part of the main report.

use serde::{Deserialize, Serialize};
use tracing::trace;
use xbox_hid_common::{bit_mask, map_range, ReportParser};

use crate::config::CodecConfig;
use crate::output::{encode_vibration, VibrationIntent, VIBRATION_REPORT_LEN};
use crate::state::{ControllerState, StateChange};
use crate::types::ControllerKind;
use crate::{ReportError, ReportResult};

/// Report ID of the main input report.
pub const MAIN_REPORT_ID: u8 = 0x01;

/// Report ID of the Xbox-button report.
pub const XBOX_BUTTON_REPORT_ID: u8 = 0x02;

/// Second byte of a pressed Xbox-button report.
pub const XBOX_BUTTON_PRESSED: u8 = 0x01;

/// Minimum main report length in bytes.
pub const WIRELESS_MAIN_REPORT_LEN: usize = 17;

/// Number of fields a main report carries (everything except `xbox`).
pub const MAIN_FIELD_COUNT: usize = 20;

/// Low two bits of the trigger extension byte.
pub const TRIGGER_QUARTER_MASK: u8 = 0b0000_0011;

/// Full-scale trigger value after extension.
const TRIGGER_SCALE: f32 = 1024.0;

/// Low nibble of byte 13.
pub const DPAD_MASK: u8 = 0b0000_1111;

/// Byte 14 bit masks. Bits 2 and 5 are unused.
pub mod button_bits {
    pub const A: u8 = 0b0000_0001;
    pub const B: u8 = 0b0000_0010;
    pub const X: u8 = 0b0000_1000;
    pub const Y: u8 = 0b0001_0000;
    pub const LEFT_BUMPER: u8 = 0b0100_0000;
    pub const RIGHT_BUMPER: u8 = 0b1000_0000;
}

/// Byte 15 and 16 bit masks.
pub mod system_bits {
    pub const HAMBUGER: u8 = 0b0000_1000;
    pub const THUMB_LEFT: u8 = 0b0010_0000;
    pub const THUMB_RIGHT: u8 = 0b0100_0000;
    /// Byte 16.
    pub const WINDOWS: u8 = 0b0000_0001;
}

/// Combine a trigger base byte with its quarter-extension byte into 0.0 … ~1.0.
///
/// The quarter code adds `256 * q + 1` for `q` in 1..=3, giving a 10-bit
/// reading over 1024.
pub fn decode_trigger(base: u8, extension: u8) -> f32 {
    let quarter: u16 = match extension & TRIGGER_QUARTER_MASK {
        0b01 => 256 + 1,
        0b10 => 256 * 2 + 1,
        0b11 => 256 * 3 + 1,
        _ => 0,
    };
    (f32::from(base) + f32::from(quarter)) / TRIGGER_SCALE
}

fn normalize_stick(raw: u16) -> f32 {
    map_range(f32::from(raw), 0.0, f32::from(u16::MAX), -1.0, 1.0)
}

/// Four-way view of the eight-direction clock-position D-pad.
///
/// Code 1 is up, continuing clockwise to 8 (up-left). Diagonals set two
/// directions; 0 and 9–15 are neutral.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DPad {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

impl DPad {
    pub fn from_clock(code: u8) -> Self {
        let code = code & DPAD_MASK;
        Self {
            up: matches!(code, 1 | 2 | 8),
            right: matches!(code, 2..=4),
            down: matches!(code, 4..=6),
            left: matches!(code, 6..=8),
        }
    }

    pub fn is_neutral(&self) -> bool {
        !(self.up || self.right || self.down || self.left)
    }
}

/// Decoded wireless main report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WirelessMainReport {
    pub left_thumb_horizontal: f32,
    pub left_thumb_vertical: f32,
    pub right_thumb_horizontal: f32,
    pub right_thumb_vertical: f32,
    pub left_trigger: f32,
    pub right_trigger: f32,
    pub dpad: DPad,
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
    pub left_bumper: bool,
    pub right_bumper: bool,
    pub hambuger: bool,
    pub thumb_left_pressed: bool,
    pub thumb_right_pressed: bool,
    pub windows: bool,
}

impl WirelessMainReport {
    /// Every carried field in emission order.
    pub fn fields(&self) -> [StateChange; MAIN_FIELD_COUNT] {
        [
            StateChange::LeftThumbHorizontal(self.left_thumb_horizontal),
            StateChange::LeftThumbVertical(self.left_thumb_vertical),
            StateChange::RightThumbHorizontal(self.right_thumb_horizontal),
            StateChange::RightThumbVertical(self.right_thumb_vertical),
            StateChange::LeftTrigger(self.left_trigger),
            StateChange::RightTrigger(self.right_trigger),
            StateChange::DUp(self.dpad.up),
            StateChange::DDown(self.dpad.down),
            StateChange::DLeft(self.dpad.left),
            StateChange::DRight(self.dpad.right),
            StateChange::A(self.a),
            StateChange::B(self.b),
            StateChange::X(self.x),
            StateChange::Y(self.y),
            StateChange::LeftBumper(self.left_bumper),
            StateChange::RightBumper(self.right_bumper),
            StateChange::Hambuger(self.hambuger),
            StateChange::ThumbLeftPressed(self.thumb_left_pressed),
            StateChange::ThumbRightPressed(self.thumb_right_pressed),
            StateChange::Windows(self.windows),
        ]
    }

    fn parse(data: &[u8]) -> ReportResult<Self> {
        if data.len() < WIRELESS_MAIN_REPORT_LEN {
            return Err(ReportError::TooShort {
                got: data.len(),
                need: WIRELESS_MAIN_REPORT_LEN,
            });
        }

        let mut parser = ReportParser::at(data, 1);
        let left_x = parser.read_u16_le()?;
        let left_y = parser.read_u16_le()?;
        let right_x = parser.read_u16_le()?;
        let right_y = parser.read_u16_le()?;
        let left_trigger = decode_trigger(parser.read_u8()?, parser.read_u8()?);
        let right_trigger = decode_trigger(parser.read_u8()?, parser.read_u8()?);
        let dpad = DPad::from_clock(parser.read_u8()?);
        let buttons = parser.read_u8()?;
        let system = parser.read_u8()?;
        let view = parser.read_u8()?;

        Ok(Self {
            left_thumb_horizontal: normalize_stick(left_x),
            left_thumb_vertical: normalize_stick(left_y),
            right_thumb_horizontal: normalize_stick(right_x),
            right_thumb_vertical: normalize_stick(right_y),
            left_trigger,
            right_trigger,
            dpad,
            a: bit_mask(buttons, button_bits::A),
            b: bit_mask(buttons, button_bits::B),
            x: bit_mask(buttons, button_bits::X),
            y: bit_mask(buttons, button_bits::Y),
            left_bumper: bit_mask(buttons, button_bits::LEFT_BUMPER),
            right_bumper: bit_mask(buttons, button_bits::RIGHT_BUMPER),
            hambuger: bit_mask(system, system_bits::HAMBUGER),
            thumb_left_pressed: bit_mask(system, system_bits::THUMB_LEFT),
            thumb_right_pressed: bit_mask(system, system_bits::THUMB_RIGHT),
            windows: bit_mask(view, system_bits::WINDOWS),
        })
    }
}

/// A recognised wireless input report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WirelessReport {
    XboxButton { pressed: bool },
    Main(WirelessMainReport),
}

/// Parse a wireless input report.
///
/// # Errors
///
/// - [`ReportError::Empty`] for an empty payload
/// - [`ReportError::UnknownReportId`] for IDs other than `0x01` / `0x02`
/// - [`ReportError::TooShort`] for a main report under 17 bytes
pub fn parse_wireless_report(data: &[u8]) -> ReportResult<WirelessReport> {
    match data {
        [] => Err(ReportError::Empty),
        [XBOX_BUTTON_REPORT_ID, rest @ ..] => Ok(WirelessReport::XboxButton {
            pressed: rest.first() == Some(&XBOX_BUTTON_PRESSED),
        }),
        [MAIN_REPORT_ID, ..] => WirelessMainReport::parse(data).map(WirelessReport::Main),
        [id, ..] => Err(ReportError::UnknownReportId(*id)),
    }
}

/// Stateful codec for one wireless connection.
#[derive(Debug, Clone)]
pub struct WirelessCodec {
    state: ControllerState,
    config: CodecConfig,
}

impl WirelessCodec {
    pub fn new() -> Self {
        Self::with_config(CodecConfig::for_kind(ControllerKind::Wireless))
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

    pub fn reset(&mut self) {
        self.state = ControllerState::default();
    }

    /// Decode one report and return the fields it changed, in emission order.
    ///
    /// An Xbox-button report yields at most one `Xbox` change. Unrecognized or
    /// malformed reports are dropped (and logged, per config) without touching
    /// the stored state.
    pub fn decode(&mut self, data: &[u8]) -> Vec<StateChange> {
        match parse_wireless_report(data) {
            Ok(WirelessReport::XboxButton { pressed }) => {
                self.state.merge([StateChange::Xbox(pressed)])
            }
            Ok(WirelessReport::Main(report)) => {
                let changes = self.state.merge(report.fields());
                trace!("Wireless report changed {} field(s)", changes.len());
                changes
            }
            Err(err) => {
                self.config
                    .unrecognized_reports
                    .observe(ControllerKind::Wireless, data, &err);
                Vec::new()
            }
        }
    }

    /// Encode a vibration command for this controller.
    pub fn encode_vibration(&self, intent: &VibrationIntent) -> [u8; VIBRATION_REPORT_LEN] {
        encode_vibration(intent)
    }
}

impl Default for WirelessCodec {
    fn default() -> Self {
        Self::new()
    }
}
