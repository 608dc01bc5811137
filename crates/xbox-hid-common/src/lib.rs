//! Common HID utilities for the Xbox One controller codecs
//!
//! Everything here is pure and I/O-free: bit extraction, range remapping,
//! a bounds-checked little-endian report reader, and the identification
//! record a discovery layer hands to the device classifier.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod bits;
pub mod device_info;
pub mod report_parser;

pub use bits::*;
pub use device_info::*;
pub use report_parser::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HidCommonError {
    #[error("Read past end of report: offset {offset}, width {width}, report length {len}")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },

    #[error("Invalid report format: {0}")]
    InvalidReport(String),
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HidCommonError::OutOfBounds {
            offset: 12,
            width: 2,
            len: 13,
        };
        assert_eq!(
            err.to_string(),
            "Read past end of report: offset 12, width 2, report length 13"
        );

        let err = HidCommonError::InvalidReport("bad header".to_string());
        assert_eq!(err.to_string(), "Invalid report format: bad header");
    }
}
