//! Microsoft Xbox One controller USB vendor and product ID constants.
//!
//! Both controllers enumerate under Microsoft's VID `0x045E` (1118). The
//! classifier also requires the exact USB product string, since Microsoft
//! reuses PIDs across firmware revisions that speak different report layouts.
//!
//! | Controller                 | PID      | Product string               |
//! |----------------------------|----------|------------------------------|
//! | Xbox Wireless (Bluetooth)  | `0x02FD` | `Xbox Wireless Controller`   |
//! | Xbox One Wired (USB)       | `0x02EA` | `Xbox One Wired Controller`  |

/// Microsoft Corp. USB Vendor ID (1118).
pub const VENDOR_ID: u16 = 0x045E;

/// Xbox Wireless Controller over Bluetooth (765).
pub const PRODUCT_WIRELESS: u16 = 0x02FD;

/// Xbox One Wired Controller over USB (746).
pub const PRODUCT_WIRED: u16 = 0x02EA;

/// Product string reported by the Bluetooth controller.
pub const WIRELESS_PRODUCT_NAME: &str = "Xbox Wireless Controller";

/// Product string reported by the USB controller.
pub const WIRED_PRODUCT_NAME: &str = "Xbox One Wired Controller";

/// Returns `true` if the VID/PID pair identifies one of the supported controllers.
///
/// This ignores the product string; use [`crate::ControllerKind::classify`]
/// to pick a codec.
pub fn is_xbox(vid: u16, pid: u16) -> bool {
    vid == VENDOR_ID && matches!(pid, PRODUCT_WIRELESS | PRODUCT_WIRED)
}

/// Returns the canonical product string for a known PID, or `None`.
pub fn product_name(pid: u16) -> Option<&'static str> {
    match pid {
        PRODUCT_WIRELESS => Some(WIRELESS_PRODUCT_NAME),
        PRODUCT_WIRED => Some(WIRED_PRODUCT_NAME),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_values() {
        assert_eq!(VENDOR_ID, 1118);
        assert_eq!(PRODUCT_WIRELESS, 765);
        assert_eq!(PRODUCT_WIRED, 746);
    }

    #[test]
    fn known_products_recognised() {
        assert!(is_xbox(VENDOR_ID, PRODUCT_WIRELESS));
        assert!(is_xbox(VENDOR_ID, PRODUCT_WIRED));
    }

    #[test]
    fn unknown_product_not_recognised() {
        assert!(!is_xbox(VENDOR_ID, 0x0B13));
        assert!(!is_xbox(0x0000, PRODUCT_WIRELESS));
    }

    #[test]
    fn product_names() {
        assert_eq!(product_name(PRODUCT_WIRELESS), Some("Xbox Wireless Controller"));
        assert_eq!(product_name(PRODUCT_WIRED), Some("Xbox One Wired Controller"));
        assert_eq!(product_name(0xFFFF), None);
    }
}
