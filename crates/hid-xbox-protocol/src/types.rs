//! Controller variant classification.

use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use xbox_hid_common::HidDeviceInfo;

use crate::ids::{
    PRODUCT_WIRED, PRODUCT_WIRELESS, VENDOR_ID, WIRED_PRODUCT_NAME, WIRELESS_PRODUCT_NAME,
};
use crate::{XboxError, XboxResult};

/// Which report layout a connected controller speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerKind {
    /// USB controller, `0x00 0x14` reports, input only.
    Wired,
    /// Bluetooth controller, `0x01`/`0x02` reports plus `0x03` vibration output.
    Wireless,
}

impl ControllerKind {
    /// Construct a kind from a USB product ID, returning `None` for unknown PIDs.
    pub fn from_pid(pid: u16) -> Option<Self> {
        match pid {
            PRODUCT_WIRED => Some(Self::Wired),
            PRODUCT_WIRELESS => Some(Self::Wireless),
            _ => None,
        }
    }

    pub fn product_id(self) -> u16 {
        match self {
            Self::Wired => PRODUCT_WIRED,
            Self::Wireless => PRODUCT_WIRELESS,
        }
    }

    pub fn product_name(self) -> &'static str {
        match self {
            Self::Wired => WIRED_PRODUCT_NAME,
            Self::Wireless => WIRELESS_PRODUCT_NAME,
        }
    }

    /// Only the wireless layout has an output report.
    pub fn supports_vibration(self) -> bool {
        matches!(self, Self::Wireless)
    }

    /// Pick the codec variant for a discovered device.
    ///
    /// # Errors
    ///
    /// Returns [`XboxError::UnsupportedDevice`] when the device is neither
    /// controller. There is no safe default layout, so callers must treat
    /// this as fatal for the connection.
    pub fn classify(info: &HidDeviceInfo) -> XboxResult<Self> {
        let kind = if is_wireless_controller(info) {
            Self::Wireless
        } else if is_wired_controller(info) {
            Self::Wired
        } else {
            return Err(XboxError::UnsupportedDevice {
                vendor_id: info.vendor_id,
                product_id: info.product_id,
                product_name: info.product_name.clone(),
            });
        };
        debug!(
            "Classified {} ({:04x}:{:04x}) as {}",
            info.display_name(),
            info.vendor_id,
            info.product_id,
            kind
        );
        Ok(kind)
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wired => f.write_str("wired"),
            Self::Wireless => f.write_str("wireless"),
        }
    }
}

/// Exact VID, PID and product-string match for the Bluetooth controller.
pub fn is_wireless_controller(info: &HidDeviceInfo) -> bool {
    info.matches(VENDOR_ID, PRODUCT_WIRELESS) && info.product_is(WIRELESS_PRODUCT_NAME)
}

/// Exact VID, PID and product-string match for the USB controller.
pub fn is_wired_controller(info: &HidDeviceInfo) -> bool {
    info.matches(VENDOR_ID, PRODUCT_WIRED) && info.product_is(WIRED_PRODUCT_NAME)
}
