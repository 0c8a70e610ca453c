//! End-to-end behaviour of the facades against the mock hosts.

use dlbridge_core::catalog::{InsertState, LedAction, LockAction, ScanMode};
use dlbridge_core::{HostValue, PropertyId, PropertyValue, SdkConfig, SymbologyId};
use dlbridge_hardware::mock::{self, MockHosts};
use dlbridge_hardware::{
    BarcodeManager, ChannelState, CradleManager, Environment, KeyboardManager,
};
use dlbridge_protocol::{HostEvent, ScanResult};
use rstest::rstest;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

struct Fixture {
    env: Environment,
    hosts: MockHosts,
    barcode: Rc<BarcodeManager>,
    cradle: CradleManager,
    keyboard: KeyboardManager,
}

fn fixture() -> Fixture {
    let env = Environment::new();
    let hosts = mock::install(&env);
    Fixture {
        barcode: Rc::new(BarcodeManager::new(&env)),
        cradle: CradleManager::new(&env),
        keyboard: KeyboardManager::new(&env),
        env,
        hosts,
    }
}

#[test]
fn test_configuration_round() {
    let f = fixture();
    f.hosts.barcode.set_range(PropertyId::CODE39_LENGTH1, 0, 255);

    let ids = [
        PropertyId::CODE39_ENABLE,
        PropertyId::SCAN_MODE,
        PropertyId::LABEL_SUFFIX,
    ];
    let values = [
        PropertyValue::from(true),
        PropertyValue::from(ScanMode::HoldMultiple),
        PropertyValue::from("\n"),
    ];

    assert!(f.barcode.set_properties(&ids, &values).unwrap());
    assert!(f.barcode.commit_properties().unwrap());
    assert_eq!(f.hosts.barcode.commit_count(), 1);

    assert_eq!(f.barcode.get_property(PropertyId::SCAN_MODE).unwrap(), HostValue::Int(1));
    assert_eq!(
        f.barcode.get_property(PropertyId::LABEL_SUFFIX).unwrap(),
        HostValue::Str("\n".into())
    );
    assert_eq!(f.barcode.get_min(PropertyId::CODE39_LENGTH1).unwrap(), HostValue::Int(0));
    assert_eq!(f.barcode.get_max(PropertyId::CODE39_LENGTH1).unwrap(), HostValue::Int(255));
    assert!(f.barcode.is_available(PropertyId::CODE39_ENABLE).unwrap());

    assert!(f.barcode.set_defaults().unwrap());
    assert!(f.barcode.get_property(PropertyId::SCAN_MODE).unwrap().is_undefined());
}

#[test]
fn test_enable_all_symbologies_and_initialized() {
    let f = fixture();
    assert!(f.barcode.enable_all_symbologies(false).unwrap());
    assert_eq!(f.hosts.barcode.symbologies_enabled(), Some(false));

    assert!(f.barcode.is_initialized().unwrap());
    f.hosts.barcode.set_initialized(false);
    assert!(!f.barcode.is_initialized().unwrap());
}

#[test]
fn test_scan_flow() {
    let f = fixture();
    let scans = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&scans);
    assert!(f.barcode.on_scan(move |scan| sink.borrow_mut().push(scan)).unwrap());
    assert!(f.barcode.start_decode(None).unwrap());
    assert!(f.hosts.barcode.is_decoding());

    let scan = ScanResult::new(SymbologyId::QRCODE, "https://example.com");
    assert!(f.hosts.barcode.simulate_scan(scan.clone()));

    // delivered on the dispatch turn, not synchronously
    assert!(scans.borrow().is_empty());
    f.env.events().dispatch_pending();
    assert_eq!(scans.borrow().as_slice(), [scan]);

    assert!(f.barcode.ignore_scan().unwrap());
    assert!(!f.hosts.barcode.read_listener_enabled());
}

#[test]
fn test_host_event_from_raw_detail() {
    let f = fixture();
    let texts = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&texts);
    f.barcode.on_scan(move |scan| sink.borrow_mut().push((scan.id, scan.raw_data))).unwrap();

    f.env.events().post(HostEvent::new(
        "scan",
        json!({ "scan": { "id": 17, "rawData": "978", "text": "978" } }),
    ));
    f.env.events().dispatch_pending();

    assert_eq!(texts.borrow().as_slice(), [(SymbologyId::EAN13, b"978".to_vec())]);
}

#[test]
fn test_scan_with_signed_bytes_and_missing_text_is_delivered() {
    let f = fixture();
    let scans = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&scans);
    f.barcode.on_scan(move |scan| sink.borrow_mut().push((scan.raw_data, scan.text))).unwrap();

    f.env.events().post(HostEvent::new(
        "scan",
        json!({ "scan": { "id": 7, "rawData": [-61, -124], "text": "Ä" } }),
    ));
    f.env.events().post(HostEvent::new(
        "scan",
        json!({ "scan": { "id": 7, "rawData": "x", "text": null } }),
    ));
    f.env.events().dispatch_pending();

    assert_eq!(
        scans.borrow().as_slice(),
        [
            ("Ä".as_bytes().to_vec(), "Ä".to_string()),
            (b"x".to_vec(), String::new()),
        ]
    );
}

#[test]
fn test_ignore_scan_from_inside_callback() {
    let f = fixture();
    let count = Rc::new(RefCell::new(0));

    let barcode = Rc::clone(&f.barcode);
    let counter = Rc::clone(&count);
    f.barcode
        .on_scan(move |_| {
            *counter.borrow_mut() += 1;
            barcode.ignore_scan().unwrap();
        })
        .unwrap();

    f.hosts.barcode.simulate_scan(ScanResult::new(SymbologyId::CODE128, "1"));
    f.env.events().dispatch_pending();

    assert_eq!(*count.borrow(), 1);
    assert_eq!(f.barcode.scan_channel().state(), ChannelState::Unregistered);
    assert!(!f.hosts.barcode.simulate_scan(ScanResult::new(SymbologyId::CODE128, "2")));
}

#[test]
fn test_replace_callback_from_inside_callback() {
    let f = fixture();
    let log = Rc::new(RefCell::new(Vec::new()));

    let barcode = Rc::clone(&f.barcode);
    let outer = Rc::clone(&log);
    f.barcode
        .on_scan(move |scan| {
            outer.borrow_mut().push(format!("first:{}", scan.text));
            let inner = Rc::clone(&outer);
            barcode
                .on_scan(move |scan| inner.borrow_mut().push(format!("second:{}", scan.text)))
                .unwrap();
        })
        .unwrap();

    f.hosts.barcode.simulate_scan(ScanResult::new(SymbologyId::CODE128, "a"));
    f.hosts.barcode.simulate_scan(ScanResult::new(SymbologyId::CODE128, "b"));
    f.env.events().dispatch_pending();

    assert_eq!(log.borrow().as_slice(), ["first:a", "second:b"]);
}

#[test]
fn test_channels_reusable_after_ignore() {
    let f = fixture();
    let seen = Rc::new(RefCell::new(Vec::new()));

    for round in 0..3 {
        let sink = Rc::clone(&seen);
        f.cradle
            .on_cradle_insertion(move |state| sink.borrow_mut().push((round, state.id)))
            .unwrap();
        f.hosts.cradle.simulate_insertion(InsertState::InsertedCorrectly);
        f.env.events().dispatch_pending();
        assert!(f.cradle.ignore_cradle_insertion().unwrap());
    }

    assert_eq!(seen.borrow().as_slice(), [(0, 2), (1, 2), (2, 2)]);
}

#[test]
fn test_docking_flow() {
    let f = fixture();
    let states = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&states);
    f.cradle
        .on_cradle_insertion(move |state| sink.borrow_mut().push(state.insert_state()))
        .unwrap();

    f.hosts.cradle.set_slot_index(2);
    f.hosts.cradle.simulate_insertion(InsertState::InsertedCorrectly);
    f.env.events().dispatch_pending();

    assert_eq!(states.borrow().as_slice(), [Some(InsertState::InsertedCorrectly)]);
    assert!(f.cradle.get_insertion_state().unwrap().is_inserted());
    assert_eq!(f.cradle.get_slot_index().unwrap(), 2);

    assert!(f.cradle.control_lock(LockAction::Lock).unwrap());
    assert!(f.cradle.control_led(LedAction::Toggle).unwrap());
    assert!(f.cradle.write_custom_area("asset 42").unwrap());
    assert_eq!(f.cradle.read_custom_area().unwrap().as_deref(), Some("asset 42"));
}

#[test]
fn test_keyboard_triggers() {
    let f = fixture();
    assert!(f.keyboard.enable_triggers(false).unwrap());
    assert!(!f.hosts.keyboard.triggers_enabled());
}

#[rstest]
#[case("barcode", "_DLBarcodeMgr")]
#[case("cradle", "_DLCradleMgr")]
#[case("keyboard", "_DLKeyboardMgr")]
fn test_absent_host_names_symbol(#[case] facade: &str, #[case] symbol: &str) {
    let env = Environment::new();
    let err = match facade {
        "barcode" => BarcodeManager::new(&env).is_initialized().unwrap_err(),
        "cradle" => CradleManager::new(&env).is_device_in_trolley().unwrap_err(),
        _ => KeyboardManager::new(&env).enable_triggers(true).unwrap_err(),
    };

    assert!(err.is_host_not_injected());
    assert_eq!(
        err.to_string(),
        format!("{symbol} has not been injected by Datalogic Enterprise Browser")
    );
}

#[test]
fn test_host_injected_after_facade_creation() {
    let env = Environment::new();
    let keyboard = KeyboardManager::new(&env);
    assert!(keyboard.enable_triggers(true).is_err());

    let _hosts = mock::install(&env);
    assert!(keyboard.enable_triggers(true).unwrap());

    env.keyboard_slot().eject();
    assert!(keyboard.enable_triggers(true).is_err());
}

#[test]
fn test_custom_area_limit_from_config() {
    let env = Environment::with_config(SdkConfig::default().custom_area_limit(8));
    let _hosts = mock::install(&env);
    let cradle = CradleManager::new(&env);

    assert!(cradle.write_custom_area("12345678").unwrap());
    assert!(!cradle.write_custom_area("123456789").unwrap());
}
