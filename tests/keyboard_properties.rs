use std::sync::{Arc, Mutex};

use orbit_keyboard::{
    KeyCodeTable, KeyEventKind, KeyName, KeyStateExt, KeyboardController, SyntheticKeyEvent,
    key_name,
};
use proptest::prelude::*;

type Log = Arc<Mutex<Vec<(KeyEventKind, KeyName)>>>;

fn recording_keyboard() -> (KeyboardController<SyntheticKeyEvent>, Log) {
    let log: Log = Arc::default();
    let mut keyboard: KeyboardController<SyntheticKeyEvent> = KeyboardController::new();
    for kind in [KeyEventKind::KeyDown, KeyEventKind::KeyUp] {
        let log = Arc::clone(&log);
        keyboard.on(kind, move |event| {
            log.lock().unwrap().push((event.kind, event.key));
        });
    }
    (keyboard, log)
}

fn count(log: &Log, kind: KeyEventKind) -> usize {
    log.lock().unwrap().iter().filter(|(k, _)| *k == kind).count()
}

fn known_code() -> impl Strategy<Value = u32> {
    let codes: Vec<u32> = KeyCodeTable::entries().map(|(code, _)| code).collect();
    proptest::sample::select(codes)
}

#[test]
fn test_two_keydowns_for_a_publish_once() {
    let (mut keyboard, log) = recording_keyboard();
    keyboard.keydown(&mut SyntheticKeyEvent::new(65));
    keyboard.keydown(&mut SyntheticKeyEvent::new(65));

    assert_eq!(count(&log, KeyEventKind::KeyDown), 1);
    assert!(keyboard.is_pressed("a".parse().unwrap()));
}

#[test]
fn test_stray_keyup_still_publishes() {
    let (mut keyboard, log) = recording_keyboard();
    let a: KeyName = "a".parse().unwrap();
    assert!(!keyboard.is_pressed(a));

    keyboard.keyup(&mut SyntheticKeyEvent::new(65));

    assert_eq!(*log.lock().unwrap(), vec![(KeyEventKind::KeyUp, a)]);
    assert!(!keyboard.is_pressed(a));
}

#[test]
fn test_shift_bypass_keeps_f1_default() {
    let (mut keyboard, _) = recording_keyboard();
    assert!(keyboard.suppresses_default());
    assert!(keyboard.bypass_keys().contains(KeyName::SHIFT));

    keyboard.keydown(&mut SyntheticKeyEvent::from_key(KeyName::SHIFT));
    assert!(keyboard.is_pressed(KeyName::SHIFT));

    let mut f1 = SyntheticKeyEvent::from_key(KeyName::F1);
    keyboard.keydown(&mut f1);
    assert!(!f1.default_prevented());
    assert!(!f1.propagation_stopped());
}

#[test]
fn test_f1_is_suppressed_on_focused_root() {
    let mut keyboard = KeyboardController::<SyntheticKeyEvent>::new().with_focus(|| true);
    assert!(!keyboard.bypass_keys().contains(KeyName::F1));

    let mut f1 = SyntheticKeyEvent::from_key(KeyName::F1);
    keyboard.keydown(&mut f1);
    assert!(f1.default_prevented());
    assert!(f1.propagation_stopped());
}

#[test]
fn test_bypass_keys_can_be_edited_at_runtime() {
    let (mut keyboard, _) = recording_keyboard();
    keyboard.bypass_keys_mut().insert(KeyName::F1);

    let mut f1 = SyntheticKeyEvent::from_key(KeyName::F1);
    keyboard.keydown(&mut f1);
    assert!(!f1.default_prevented());

    keyboard.keyup(&mut SyntheticKeyEvent::from_key(KeyName::F1));
    keyboard.bypass_keys_mut().remove(KeyName::F1);
    let mut f1 = SyntheticKeyEvent::from_key(KeyName::F1);
    keyboard.keydown(&mut f1);
    assert!(f1.default_prevented());
}

proptest! {
    #[test]
    fn prop_resolver_is_total_and_deterministic(code in any::<u32>()) {
        let name = key_name(code);
        prop_assert_eq!(name, key_name(code));
        if (48..=90).contains(&code) {
            let expected = char::from_u32(code).unwrap().to_ascii_lowercase().to_string();
            prop_assert_eq!(name.as_str(), expected.as_str());
        } else if KeyCodeTable::code_of(name).is_none() {
            prop_assert_eq!(name, KeyName::UNKNOWN);
        } else {
            prop_assert_eq!(KeyCodeTable::code_of(name), Some(code));
        }
    }

    #[test]
    fn prop_disabled_keyboard_changes_nothing(
        warmup in proptest::collection::vec(known_code(), 0..8),
        events in proptest::collection::vec((known_code(), any::<bool>()), 1..32),
    ) {
        let (mut keyboard, log) = recording_keyboard();
        for code in warmup {
            keyboard.keydown(&mut SyntheticKeyEvent::new(code));
        }
        let snapshot = keyboard.keys().clone();
        let published = log.lock().unwrap().len();

        keyboard.set_enabled(false);
        for (code, down) in events {
            let mut event = SyntheticKeyEvent::new(code);
            if down {
                keyboard.keydown(&mut event);
            } else {
                keyboard.keyup(&mut event);
            }
            prop_assert!(!event.default_prevented());
        }

        prop_assert_eq!(keyboard.keys(), &snapshot);
        prop_assert_eq!(log.lock().unwrap().len(), published);
    }

    #[test]
    fn prop_press_release_cycles_alternate(code in known_code(), cycles in 1usize..50) {
        let (mut keyboard, log) = recording_keyboard();
        let key = key_name(code);

        for _ in 0..cycles {
            keyboard.keydown(&mut SyntheticKeyEvent::new(code));
            prop_assert!(keyboard.is_pressed(key));
            keyboard.keyup(&mut SyntheticKeyEvent::new(code));
            prop_assert!(!keyboard.is_pressed(key));
        }

        prop_assert_eq!(count(&log, KeyEventKind::KeyDown), cycles);
        prop_assert_eq!(count(&log, KeyEventKind::KeyUp), cycles);
        let log = log.lock().unwrap();
        for (i, (kind, name)) in log.iter().enumerate() {
            let expected = if i % 2 == 0 { KeyEventKind::KeyDown } else { KeyEventKind::KeyUp };
            prop_assert_eq!(*kind, expected);
            prop_assert_eq!(*name, key);
        }
    }

    #[test]
    fn prop_key_repeat_collapses(code in known_code(), repeats in 1usize..20) {
        let (mut keyboard, log) = recording_keyboard();
        for _ in 0..repeats {
            keyboard.keydown(&mut SyntheticKeyEvent::new(code));
        }
        prop_assert_eq!(count(&log, KeyEventKind::KeyDown), 1);
        prop_assert_eq!(keyboard.keys().pressed_keys(), vec![key_name(code)]);
    }
}
