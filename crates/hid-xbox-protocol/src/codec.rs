//! Per-connection codec, selected once from the device classification.

use tracing::debug;
use xbox_hid_common::HidDeviceInfo;

use crate::config::CodecConfig;
use crate::output::{VibrationIntent, VIBRATION_REPORT_LEN};
use crate::state::{ControllerState, StateChange};
use crate::types::ControllerKind;
use crate::wired::WiredCodec;
use crate::wireless::WirelessCodec;
use crate::{XboxError, XboxResult};

/// The codec for one connected controller.
#[derive(Debug, Clone)]
pub enum XboxCodec {
    Wired(WiredCodec),
    Wireless(WirelessCodec),
}

impl XboxCodec {
    /// Classify `info` and build the matching codec.
    ///
    /// # Errors
    ///
    /// Returns [`XboxError::UnsupportedDevice`] when `info` is not a
    /// supported controller.
    pub fn for_device(info: &HidDeviceInfo) -> XboxResult<Self> {
        let kind = ControllerKind::classify(info)?;
        Ok(Self::new(kind))
    }

    pub fn new(kind: ControllerKind) -> Self {
        Self::with_config(kind, CodecConfig::for_kind(kind))
    }

    pub fn with_config(kind: ControllerKind, config: CodecConfig) -> Self {
        debug!(
            "Creating {} codec ({:?} unrecognized reports)",
            kind, config.unrecognized_reports
        );
        match kind {
            ControllerKind::Wired => Self::Wired(WiredCodec::with_config(config)),
            ControllerKind::Wireless => Self::Wireless(WirelessCodec::with_config(config)),
        }
    }

    pub fn kind(&self) -> ControllerKind {
        match self {
            Self::Wired(_) => ControllerKind::Wired,
            Self::Wireless(_) => ControllerKind::Wireless,
        }
    }

    pub fn state(&self) -> &ControllerState {
        match self {
            Self::Wired(codec) => codec.state(),
            Self::Wireless(codec) => codec.state(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Self::Wired(codec) => codec.reset(),
            Self::Wireless(codec) => codec.reset(),
        }
    }

    /// Decode one input report; see [`WiredCodec::decode`] and [`WirelessCodec::decode`].
    pub fn decode(&mut self, data: &[u8]) -> Vec<StateChange> {
        match self {
            Self::Wired(codec) => codec.decode(data),
            Self::Wireless(codec) => codec.decode(data),
        }
    }

    /// Encode a vibration command.
    ///
    /// # Errors
    ///
    /// Returns [`XboxError::VibrationUnsupported`] for wired controllers.
    pub fn encode_vibration(
        &self,
        intent: &VibrationIntent,
    ) -> XboxResult<[u8; VIBRATION_REPORT_LEN]> {
        match self {
            Self::Wired(_) => Err(XboxError::VibrationUnsupported(ControllerKind::Wired)),
            Self::Wireless(codec) => Ok(codec.encode_vibration(intent)),
        }
    }
}
