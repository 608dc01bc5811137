//! Snapshot tests for the Xbox One controller protocol.
//!
//! These lock in wire formats and emitted field names to catch accidental
//! protocol regressions.

use hid_xbox_protocol::{
    encode_vibration, encode_vibration_stop, CodecConfig, ControllerKind, HidDeviceInfo,
    StateChange, UnrecognizedReportPolicy, VibrationIntent, WiredCodec, WirelessCodec,
};
use insta::assert_snapshot;

fn render(changes: &[StateChange]) -> String {
    changes
        .iter()
        .map(|change| match (change.analog(), change.pressed()) {
            (Some(v), _) => format!("{}={v:.4}", change.key()),
            (_, Some(p)) => format!("{}={p}", change.key()),
            (None, None) => change.key().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn silent() -> CodecConfig {
    CodecConfig {
        unrecognized_reports: UnrecognizedReportPolicy::Silent,
    }
}

#[test]
fn test_snapshot_vibration_stop() {
    assert_snapshot!(
        format!("{:02X?}", encode_vibration_stop()),
        @"[03, FF, 00, 00, 00, 00, 00, 00, 00]"
    );
}

#[test]
fn test_snapshot_vibration_full() {
    let report = encode_vibration(&VibrationIntent {
        lt_magnitude: 1.0,
        rt_magnitude: 1.0,
        left_magnitude: 1.0,
        right_magnitude: 1.0,
        duration: 0x10,
        start_delay: 0x00,
        loop_count: 0x00,
    });
    assert_snapshot!(format!("{report:02X?}"), @"[03, FF, 65, 65, 65, 65, 10, 00, 00]");
}

#[test]
fn test_snapshot_wired_capture() {
    let mut codec = WiredCodec::with_config(silent());
    let changes = codec.decode(&[
        0x00, 0x14, 0x00, 0x00, 0xFF, 0x00, 0x13, 0x01, 0x29, 0x01, 0xEA, 0x02, 0x55, 0x06,
    ]);
    assert_snapshot!(
        render(&changes),
        @"leftThumbHorizontal=0.0084, leftThumbVertical=0.0091, rightThumbHorizontal=0.0228, rightThumbVertical=0.0495, leftTrigger=1.0000"
    );
}

#[test]
fn test_snapshot_wired_buttons() {
    let mut codec = WiredCodec::with_config(silent());
    let mut data = [0u8; 14];
    data[1] = 0x14;
    data[2] = 0b1001_0101;
    data[3] = 0b0101_0110;
    let changes = codec.decode(&data);
    assert_snapshot!(
        render(&changes),
        @"dUp=true, dLeft=true, a=true, x=true, rightBumper=true, hambuger=true, thumbRightPressed=true, xbox=true"
    );
}

#[test]
fn test_snapshot_wireless_main() {
    let mut codec = WirelessCodec::with_config(silent());
    let mut data = [0u8; 17];
    data[0] = 0x01;
    data[1..3].copy_from_slice(&u16::MAX.to_le_bytes());
    data[11] = 0xFF;
    data[12] = 0b11;
    data[13] = 8;
    data[14] = 0b1000_0010;
    data[15] = 0b0010_1000;
    let changes = codec.decode(&data);
    assert_snapshot!(
        render(&changes),
        @"leftThumbHorizontal=1.0000, leftThumbVertical=-1.0000, rightThumbHorizontal=-1.0000, rightThumbVertical=-1.0000, rightTrigger=1.0000, dUp=true, dLeft=true, b=true, rightBumper=true, hambuger=true, thumbLeftPressed=true"
    );
}

#[test]
fn test_snapshot_state_change_json() -> Result<(), serde_json::Error> {
    assert_snapshot!(
        serde_json::to_string(&StateChange::DUp(true))?,
        @r#"{"field":"dUp","value":true}"#
    );
    assert_snapshot!(
        serde_json::to_string(&StateChange::LeftTrigger(0.5))?,
        @r#"{"field":"leftTrigger","value":0.5}"#
    );
    Ok(())
}

#[test]
fn test_snapshot_unsupported_device_error() {
    let err = ControllerKind::classify(
        &HidDeviceInfo::new(0x045E, 0x02EA).with_product_name("Xbox Wireless Controller"),
    );
    assert_snapshot!(
        err.map(|kind| kind.to_string()).unwrap_or_else(|e| e.to_string()),
        @r#"Unsupported device: vendor=0x045e, product=0x02ea, name=Some("Xbox Wireless Controller")"#
    );
}
