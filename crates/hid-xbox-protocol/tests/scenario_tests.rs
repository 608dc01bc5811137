//! End-to-end scenarios: device classification, then decoding through the
//! selected codec as a transport would drive it.

use hid_xbox_protocol::{
    accepts_discovery_hint, candidate_id, CodecConfig, ControllerKind, HidDeviceInfo,
    StateChange, UnrecognizedReportPolicy, VibrationIntent, XboxCodec, XboxError, XboxResult,
};

/// Wired report captured from a real controller: left trigger fully pressed,
/// sticks resting slightly off centre.
const WIRED_CAPTURE: [u8; 14] = [
    0x00, 0x14, 0x00, 0x00, 0xFF, 0x00, 0x13, 0x01, 0x29, 0x01, 0xEA, 0x02, 0x55, 0x06,
];

fn wireless_info() -> HidDeviceInfo {
    HidDeviceInfo::new(1118, 765)
        .with_product_name("Xbox Wireless Controller")
        .with_serial("98:7a:14:00:00:01")
}

fn wired_info() -> HidDeviceInfo {
    HidDeviceInfo::new(1118, 746).with_product_name("Xbox One Wired Controller")
}

fn codec(kind: ControllerKind) -> XboxCodec {
    XboxCodec::with_config(
        kind,
        CodecConfig {
            unrecognized_reports: UnrecognizedReportPolicy::Silent,
        },
    )
}

fn wireless_main(mutate: impl FnOnce(&mut [u8; 17])) -> [u8; 17] {
    let mut data = [0u8; 17];
    data[0] = 0x01;
    mutate(&mut data);
    data
}

#[test]
fn classifies_known_devices() -> XboxResult<()> {
    assert_eq!(ControllerKind::classify(&wireless_info())?, ControllerKind::Wireless);
    assert_eq!(ControllerKind::classify(&wired_info())?, ControllerKind::Wired);
    Ok(())
}

#[test]
fn wired_ids_with_wireless_name_is_unsupported() {
    let info = HidDeviceInfo::new(1118, 746).with_product_name("Xbox Wireless Controller");
    assert_eq!(
        ControllerKind::classify(&info),
        Err(XboxError::UnsupportedDevice {
            vendor_id: 1118,
            product_id: 746,
            product_name: Some("Xbox Wireless Controller".to_string()),
        })
    );
}

#[test]
fn missing_product_name_is_unsupported() {
    assert!(ControllerKind::classify(&HidDeviceInfo::new(1118, 765)).is_err());
    assert!(XboxCodec::for_device(&HidDeviceInfo::new(1118, 746)).is_err());
}

#[test]
fn wired_capture_emits_axes_and_left_trigger() {
    let mut codec = codec(ControllerKind::Wired);
    let changes = codec.decode(&WIRED_CAPTURE);

    let keys: Vec<&str> = changes.iter().map(StateChange::key).collect();
    assert_eq!(
        keys,
        vec![
            "leftThumbHorizontal",
            "leftThumbVertical",
            "rightThumbHorizontal",
            "rightThumbVertical",
            "leftTrigger",
        ]
    );
    assert_eq!(changes.get(4), Some(&StateChange::LeftTrigger(1.0)));

    let state = codec.state();
    assert!(state.right_trigger.abs() < f32::EPSILON);
    assert!(!state.d_up && !state.d_down && !state.d_left && !state.d_right);
    assert!((state.left_thumb_horizontal - 0.0084).abs() < 1e-4);

    assert!(codec.decode(&WIRED_CAPTURE).is_empty());
}

#[test]
fn wired_trigger_release_emits_single_change() {
    let mut codec = codec(ControllerKind::Wired);
    codec.decode(&WIRED_CAPTURE);
    let mut released = WIRED_CAPTURE;
    released[4] = 0x00;
    assert_eq!(codec.decode(&released), vec![StateChange::LeftTrigger(0.0)]);
}

#[test]
fn wireless_xbox_button_press_and_release() {
    let mut codec = codec(ControllerKind::Wireless);
    assert_eq!(codec.decode(&[0x02, 0x01]), vec![StateChange::Xbox(true)]);
    assert_eq!(codec.decode(&[0x02, 0x00]), vec![StateChange::Xbox(false)]);
    // Released on a fresh connection is no change.
    codec.reset();
    assert!(codec.decode(&[0x02, 0x00]).is_empty());
}

#[test]
fn wireless_trigger_quarter_extension() {
    let mut codec = codec(ControllerKind::Wireless);
    let changes = codec.decode(&wireless_main(|d| d[10] = 0b01));
    let trigger = changes
        .iter()
        .find_map(|c| match c {
            StateChange::LeftTrigger(v) => Some(*v),
            _ => None,
        })
        .unwrap_or(f32::NAN);
    assert!((trigger - 0.2510).abs() < 1e-4, "left trigger was {trigger}");
}

#[test]
fn wireless_dpad_diagonal_sets_two_directions() {
    let mut codec = codec(ControllerKind::Wireless);
    codec.decode(&wireless_main(|_| {}));
    let changes = codec.decode(&wireless_main(|d| d[13] = 4));
    assert_eq!(
        changes,
        vec![StateChange::DDown(true), StateChange::DRight(true)]
    );
}

#[test]
fn wireless_ignores_unknown_report() {
    let mut codec = codec(ControllerKind::Wireless);
    codec.decode(&wireless_main(|d| d[14] = 0x01));
    let before = *codec.state();
    assert!(codec.decode(&[0x20, 0x00, 0x00, 0x64]).is_empty());
    assert_eq!(*codec.state(), before);
}

#[test]
fn discovered_device_flows_into_codec() -> XboxResult<()> {
    let info = wireless_info();
    assert!(accepts_discovery_hint(&info));
    assert_eq!(
        candidate_id(&info).as_deref(),
        Some("xbox-one-controller-98:7a:14:00:00:01")
    );

    let mut codec = XboxCodec::for_device(&info)?;
    assert_eq!(codec.kind(), ControllerKind::Wireless);
    assert_eq!(
        codec.decode(&wireless_main(|d| d[14] = 0x01)).last(),
        Some(&StateChange::A(true))
    );
    let report = codec.encode_vibration(&VibrationIntent {
        left_magnitude: 1.0,
        right_magnitude: 1.0,
        duration: 100,
        ..VibrationIntent::default()
    })?;
    assert_eq!(report, [0x03, 0xFF, 0x00, 0x00, 0x65, 0x65, 100, 0x00, 0x00]);
    Ok(())
}

#[test]
fn wired_codec_refuses_vibration() -> XboxResult<()> {
    let codec = XboxCodec::for_device(&wired_info())?;
    assert!(!codec.kind().supports_vibration());
    assert!(matches!(
        codec.encode_vibration(&VibrationIntent::default()),
        Err(XboxError::VibrationUnsupported(ControllerKind::Wired))
    ));
    Ok(())
}
