//! Wireless vibration output report encoding.
//!
//! All functions are pure and allocation-free.
//!
//! # Report layout (9 bytes)
//!
//! ```text
//! Byte 0: 0x03          report ID
//! Byte 1: 0xFF          activation mask (all four motors)
//! Byte 2: lt  * 0x65    left impulse trigger motor
//! Byte 3: rt  * 0x65    right impulse trigger motor
//! Byte 4: left  * 0x65  left (heavy) grip motor
//! Byte 5: right * 0x65  right (light) grip motor
//! Byte 6: duration      0–255
//! Byte 7: start delay   0–255
//! Byte 8: loop count    0–255
//! ```
//!
//! `0x65` (101) is the controller's maximum motor strength. Magnitudes are
//! not clamped to [0, 1] before scaling, so values above 1 overdrive the
//! motor up to the byte limit.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Vibration output report ID.
pub const VIBRATION_REPORT_ID: u8 = 0x03;

/// Wire size of a vibration output report.
pub const VIBRATION_REPORT_LEN: usize = 9;

/// Activation mask enabling all four motors.
pub const ACTIVATION_MASK_ALL: u8 = 0xFF;

/// Raw motor value for magnitude 1.0.
pub const MOTOR_MAGNITUDE_MAX: u8 = 0x65;

/// One vibration command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VibrationIntent {
    /// Left trigger motor, nominally 0.0 … 1.0.
    pub lt_magnitude: f32,
    /// Right trigger motor, nominally 0.0 … 1.0.
    pub rt_magnitude: f32,
    /// Left grip motor, nominally 0.0 … 1.0.
    pub left_magnitude: f32,
    /// Right grip motor, nominally 0.0 … 1.0.
    pub right_magnitude: f32,
    pub duration: u8,
    pub start_delay: u8,
    pub loop_count: u8,
}

/// Encode a vibration command into the 9-byte output report.
pub fn encode_vibration(intent: &VibrationIntent) -> [u8; VIBRATION_REPORT_LEN] {
    let report = [
        VIBRATION_REPORT_ID,
        ACTIVATION_MASK_ALL,
        scale_magnitude(intent.lt_magnitude),
        scale_magnitude(intent.rt_magnitude),
        scale_magnitude(intent.left_magnitude),
        scale_magnitude(intent.right_magnitude),
        intent.duration,
        intent.start_delay,
        intent.loop_count,
    ];
    trace!("Encoded vibration report {:02X?}", report);
    report
}

/// Encode an all-motors-off command.
pub fn encode_vibration_stop() -> [u8; VIBRATION_REPORT_LEN] {
    encode_vibration(&VibrationIntent::default())
}

/// Truncates toward zero and saturates at the `u8` bounds; NaN encodes as 0.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "float-to-int `as` saturates, which is the intended overdrive limit"
)]
fn scale_magnitude(magnitude: f32) -> u8 {
    (magnitude * f32::from(MOTOR_MAGNITUDE_MAX)) as u8
}
