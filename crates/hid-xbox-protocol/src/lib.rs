//! Xbox One controller HID protocol: input decoding and vibration encoding.
//!
//! Two report layouts are supported:
//!
//! - **Wired** (USB, PID `0x02EA`): 14-byte reports tagged `0x00 0x14`,
//!   8-bit linear triggers and signed 16-bit sticks.
//! - **Wireless** (Bluetooth, PID `0x02FD`): a two-byte Xbox-button report
//!   (ID `0x02`) and a 17-byte main report (ID `0x01`) with unsigned 16-bit
//!   sticks, 10-bit quarter-extended triggers and a clock-position D-pad.
//!   Vibration is sent as a 9-byte output report (ID `0x03`).
//!
//! Decoders keep the previous [`ControllerState`] and emit only the fields a
//! report actually changed, as [`StateChange`] events in a fixed order.
//! The crate is I/O-free: a transport hands in byte slices and takes
//! encoded buffers back out.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod codec;
pub mod config;
pub mod discovery;
pub mod ids;
pub mod output;
pub mod state;
pub mod types;
pub mod wired;
pub mod wireless;

pub use codec::XboxCodec;
pub use config::{CodecConfig, UnrecognizedReportPolicy, UNRECOGNIZED_REPORTS_ENV};
pub use discovery::{accepts_discovery_hint, candidate_id, CANDIDATE_TYPE};
pub use ids::{product_name, PRODUCT_WIRED, PRODUCT_WIRELESS, VENDOR_ID};
pub use output::{
    encode_vibration, encode_vibration_stop, VibrationIntent, ACTIVATION_MASK_ALL,
    MOTOR_MAGNITUDE_MAX, VIBRATION_REPORT_ID, VIBRATION_REPORT_LEN,
};
pub use state::{ControllerState, StateChange, FIELD_COUNT};
pub use types::{is_wired_controller, is_wireless_controller, ControllerKind};
pub use wired::{parse_wired_report, WiredCodec, WIRED_REPORT_LEN};
pub use wireless::{
    decode_trigger, parse_wireless_report, DPad, WirelessCodec, WirelessMainReport,
    WirelessReport, WIRELESS_MAIN_REPORT_LEN,
};

pub use xbox_hid_common::HidDeviceInfo;

use thiserror::Error;
use xbox_hid_common::HidCommonError;

/// Why a raw report was not decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Empty report payload")]
    Empty,

    #[error("Report too short: got {got} bytes, need {need}")]
    TooShort { got: usize, need: usize },

    #[error("Unknown report ID: {0:#04x}")]
    UnknownReportId(u8),

    #[error("Unrecognized report header: {first:#04x} {second:?}")]
    UnrecognizedHeader { first: u8, second: Option<u8> },

    #[error("HID error: {0}")]
    Hid(#[from] HidCommonError),
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Errors surfaced to whoever owns the connection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XboxError {
    #[error(
        "Unsupported device: vendor={vendor_id:#06x}, product={product_id:#06x}, name={product_name:?}"
    )]
    UnsupportedDevice {
        vendor_id: u16,
        product_id: u16,
        product_name: Option<String>,
    },

    #[error("Vibration is not supported by {0} controllers")]
    VibrationUnsupported(ControllerKind),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

pub type XboxResult<T> = Result<T, XboxError>;
