//! Helpers for the discovery layer that sits in front of the codecs.
//!
//! The hint filter is deliberately looser than [`crate::ControllerKind::classify`]:
//! it lets a device through on VID/PID alone or on the product string alone,
//! and the strict classifier decides later.

use xbox_hid_common::HidDeviceInfo;

use crate::ids::{PRODUCT_WIRELESS, VENDOR_ID, WIRELESS_PRODUCT_NAME};

/// Metadata `type` attached to every device candidate.
pub const CANDIDATE_TYPE: &str = "Xbox Wireless Controller";

/// Prefix of the stable per-device identifier.
pub const CANDIDATE_ID_PREFIX: &str = "xbox-one-controller-";

/// Whether a discovered HID device is worth handing to a controller connection.
pub fn accepts_discovery_hint(info: &HidDeviceInfo) -> bool {
    info.matches(VENDOR_ID, PRODUCT_WIRELESS) || info.product_is(WIRELESS_PRODUCT_NAME)
}

/// Stable identifier for a device candidate, derived from its serial number.
///
/// Returns `None` when the device did not report a serial.
pub fn candidate_id(info: &HidDeviceInfo) -> Option<String> {
    info.serial_number
        .as_deref()
        .map(|serial| format!("{CANDIDATE_ID_PREFIX}{serial}"))
}
