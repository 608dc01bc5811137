//! Codec configuration.
//!
//! Per-variant defaults: the wired codec drops unrecognized reports silently,
//! the wireless codec logs them (the wireless controller emits periodic
//! reports of its own that are not yet understood). The process-wide default
//! can be overridden with `XBOX_HID_UNRECOGNIZED_REPORTS=silent|log`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::ControllerKind;
use crate::ReportError;

/// Environment variable overriding [`UnrecognizedReportPolicy`] for every codec.
pub const UNRECOGNIZED_REPORTS_ENV: &str = "XBOX_HID_UNRECOGNIZED_REPORTS";

/// What a codec does with a report it cannot decode. It never errors either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnrecognizedReportPolicy {
    /// Drop without a trace.
    Silent,
    /// Drop and emit a `debug!` event with the raw bytes.
    Log,
}

impl UnrecognizedReportPolicy {
    pub fn default_for(kind: ControllerKind) -> Self {
        match kind {
            ControllerKind::Wired => Self::Silent,
            ControllerKind::Wireless => Self::Log,
        }
    }

    pub(crate) fn observe(self, kind: ControllerKind, data: &[u8], err: &ReportError) {
        if matches!(self, Self::Log) {
            debug!("Discarding {} report {:02X?}: {}", kind, data, err);
        }
    }
}

fn parse_policy(value: &str) -> Option<UnrecognizedReportPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "silent" | "quiet" | "off" | "0" | "false" | "no" => Some(UnrecognizedReportPolicy::Silent),
        "log" | "debug" | "on" | "1" | "true" | "yes" => Some(UnrecognizedReportPolicy::Log),
        _ => None,
    }
}

/// Policy requested through [`UNRECOGNIZED_REPORTS_ENV`], if set and valid.
pub fn policy_override() -> Option<UnrecognizedReportPolicy> {
    let value = std::env::var(UNRECOGNIZED_REPORTS_ENV).ok()?;
    let policy = parse_policy(&value);
    if policy.is_none() {
        warn!(
            "Ignoring {}={:?}: expected `silent` or `log`",
            UNRECOGNIZED_REPORTS_ENV, value
        );
    }
    policy
}

/// Settings for one codec instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    pub unrecognized_reports: UnrecognizedReportPolicy,
}

impl CodecConfig {
    /// Built-in defaults for `kind`, ignoring the environment.
    pub fn defaults_for(kind: ControllerKind) -> Self {
        Self {
            unrecognized_reports: UnrecognizedReportPolicy::default_for(kind),
        }
    }

    /// Defaults for `kind` with the environment override applied.
    pub fn for_kind(kind: ControllerKind) -> Self {
        Self {
            unrecognized_reports: policy_override()
                .unwrap_or_else(|| UnrecognizedReportPolicy::default_for(kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_kind_defaults() {
        assert_eq!(
            CodecConfig::defaults_for(ControllerKind::Wired).unrecognized_reports,
            UnrecognizedReportPolicy::Silent
        );
        assert_eq!(
            CodecConfig::defaults_for(ControllerKind::Wireless).unrecognized_reports,
            UnrecognizedReportPolicy::Log
        );
    }

    #[test]
    fn parse_policy_values() {
        assert_eq!(parse_policy("silent"), Some(UnrecognizedReportPolicy::Silent));
        assert_eq!(parse_policy(" OFF "), Some(UnrecognizedReportPolicy::Silent));
        assert_eq!(parse_policy("0"), Some(UnrecognizedReportPolicy::Silent));
        assert_eq!(parse_policy("Log"), Some(UnrecognizedReportPolicy::Log));
        assert_eq!(parse_policy("true"), Some(UnrecognizedReportPolicy::Log));
        assert_eq!(parse_policy("verbose"), None);
        assert_eq!(parse_policy(""), None);
    }

    #[test]
    fn config_deserializes_lowercase() -> Result<(), serde_json::Error> {
        let config: CodecConfig = serde_json::from_str(r#"{"unrecognized_reports":"silent"}"#)?;
        assert_eq!(config.unrecognized_reports, UnrecognizedReportPolicy::Silent);
        Ok(())
    }
}
