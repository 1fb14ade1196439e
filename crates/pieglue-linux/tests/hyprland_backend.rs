//! Integration tests for the Hyprland backend.
//!
//! These tests drive `HyprlandBackend` end-to-end through the public
//! `Backend` trait, with the recording native module standing in for the
//! compositor protocols and scripted or real processes standing in for
//! `hyprctl`.

use std::os::unix::fs::PermissionsExt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pieglue_core::{KeySequence, KeyStroke, KeyTable, KeymapError, Shortcut, WmInfo};
use pieglue_linux::application::control_tool::{ControlTool, QueryError};
use pieglue_linux::application::native::NativeCapabilities;
use pieglue_linux::application::virtual_input::WlrVirtualInput;
use pieglue_linux::infrastructure::control_tool::{hyprctl::HyprctlTool, mock::StaticControlTool};
use pieglue_linux::infrastructure::native::mock::{NativeCall, RecordingNative};
use pieglue_linux::{Backend, BackendError, HyprlandBackend};
use tokio::time::Instant;
use tokio_test::{assert_err, assert_ok};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A backend whose key table only knows `a` (30) and `Enter` (28).
fn small_table_backend(control: Arc<dyn ControlTool>) -> (HyprlandBackend, Arc<RecordingNative>) {
    let native = Arc::new(RecordingNative::new());
    let table = Arc::new(KeyTable::from_pairs([("a", 30), ("Enter", 28)]));
    let input = WlrVirtualInput::with_key_table(
        Arc::clone(&native) as Arc<dyn NativeCapabilities>,
        table,
    );
    let backend = HyprlandBackend::with_input(
        input,
        Arc::clone(&native) as Arc<dyn NativeCapabilities>,
        control,
    );
    (backend, native)
}

fn sample_control() -> Arc<dyn ControlTool> {
    Arc::new(StaticControlTool::hyprland_sample())
}

// ── Key simulation ────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_scenario_sequence_plays_in_order_with_delays() {
    // Arrange
    let (backend, native) = small_table_backend(sample_control());
    assert_ok!(backend.init().await);
    let sequence: KeySequence = serde_json::from_str(
        r#"[
            {"name": "a",     "down": true,  "delay": 0},
            {"name": "a",     "down": false, "delay": 50},
            {"name": "Enter", "down": true,  "delay": 0},
            {"name": "Enter", "down": false, "delay": 10}
        ]"#,
    )
    .expect("valid sequence JSON");
    let start = Instant::now();

    // Act
    assert_ok!(backend.simulate_keys(&sequence).await);

    // Assert
    let calls = native.timed_calls();
    let events: Vec<NativeCall> = calls.iter().map(|(_, c)| c.clone()).collect();
    assert_eq!(
        events,
        vec![
            NativeCall::SimulateKey { code: 30, down: true },
            NativeCall::SimulateKey { code: 30, down: false },
            NativeCall::SimulateKey { code: 28, down: true },
            NativeCall::SimulateKey { code: 28, down: false },
        ]
    );
    assert!(calls[1].0 - calls[0].0 >= Duration::from_millis(50));
    assert!(calls[3].0 - calls[2].0 >= Duration::from_millis(10));
    assert!(start.elapsed() >= Duration::from_millis(60));
}

#[tokio::test]
async fn test_unknown_key_yields_zero_native_calls() {
    // Arrange
    let (backend, native) = small_table_backend(sample_control());
    let sequence: KeySequence = vec![KeyStroke::press("UnknownKey123", 0)].into();

    // Act
    let err = assert_err!(backend.simulate_keys(&sequence).await);

    // Assert
    assert!(matches!(
        err,
        BackendError::UnknownKey(KeymapError::UnknownKey(ref name)) if name == "UnknownKey123"
    ));
    assert!(native.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_hotkey_expansion_plays_through_default_table() {
    // Arrange
    let native = Arc::new(RecordingNative::new());
    let backend = HyprlandBackend::new(
        Arc::clone(&native) as Arc<dyn NativeCapabilities>,
        sample_control(),
    );
    let copy = KeySequence::from_hotkey("ControlLeft+KeyC", 10).expect("valid hotkey");

    // Act
    assert_ok!(backend.simulate_keys(&copy).await);

    // Assert
    assert_eq!(
        native.calls(),
        vec![
            NativeCall::SimulateKey { code: 29, down: true },
            NativeCall::SimulateKey { code: 46, down: true },
            NativeCall::SimulateKey { code: 46, down: false },
            NativeCall::SimulateKey { code: 29, down: false },
        ]
    );
}

// ── Pointer ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_move_pointer_never_fails_even_when_native_does() {
    let native = Arc::new(RecordingNative::failing());
    let backend = HyprlandBackend::new(
        Arc::clone(&native) as Arc<dyn NativeCapabilities>,
        sample_control(),
    );

    // Returns `()`; the failure is only logged.
    backend.move_pointer(10, 10).await;

    assert!(native.calls().is_empty());
}

// ── Window manager info ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_wm_info_scenario_merges_both_queries() {
    // Arrange
    let control = StaticControlTool::new()
        .with_reply("activewindow", r#"{"initialTitle":"Terminal","initialClass":"kitty"}"#)
        .with_reply("cursorpos", r#"{"x":120,"y":340}"#);
    let (backend, _) = small_table_backend(Arc::new(control));

    // Act
    let info = assert_ok!(backend.wm_info().await);

    // Assert
    assert_eq!(
        info,
        WmInfo {
            window_name: "Terminal".to_string(),
            app_name: "kitty".to_string(),
            pointer_x: 120,
            pointer_y: 340,
        }
    );
}

#[tokio::test]
async fn test_wm_info_reports_non_zero_exit() {
    // `false` exits with status 1 regardless of its arguments.
    let control = Arc::new(HyprctlTool::new("false", Duration::from_secs(5)));
    let (backend, _) = small_table_backend(control);

    let err = assert_err!(backend.wm_info().await);

    assert!(matches!(err, BackendError::Query(QueryError::Exit { .. })));
}

#[tokio::test]
async fn test_wm_info_reports_hung_control_tool_as_timeout() {
    // Arrange: a control tool that sleeps far longer than the query bound
    let dir = std::env::temp_dir().join(format!("pieglue-hung-hyprctl-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("mkdir");
    let program = dir.join("hyprctl");
    std::fs::write(&program, "#!/bin/sh\nexec sleep 30\n").expect("write script");
    std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).expect("chmod");
    let control = Arc::new(HyprctlTool::new(
        program.to_string_lossy(),
        Duration::from_millis(200),
    ));
    let (backend, _) = small_table_backend(control);
    let start = std::time::Instant::now();

    // Act
    let mut result = backend.wm_info().await;
    for _ in 0..5 {
        // A just-written script is briefly busy if another test forks meanwhile.
        match &result {
            Err(BackendError::Query(QueryError::Launch { source, .. }))
                if source.raw_os_error() == Some(26) =>
            {
                tokio::time::sleep(Duration::from_millis(50)).await;
                result = backend.wm_info().await;
            }
            _ => break,
        }
    }

    // Assert
    let err = assert_err!(result);
    assert!(matches!(err, BackendError::Query(QueryError::Timeout { .. })));
    assert!(start.elapsed() < Duration::from_secs(10));
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_wm_info_reports_malformed_output() {
    let control = StaticControlTool::new()
        .with_reply("activewindow", r#"{"initialTitle":"Terminal"}"#)
        .with_reply("cursorpos", "120,340");
    let (backend, _) = small_table_backend(Arc::new(control));

    let err = assert_err!(backend.wm_info().await);

    assert!(matches!(err, BackendError::Query(QueryError::Parse { .. })));
}

// ── Shortcuts ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_bound_shortcut_fires_callback_until_unbound() {
    // Arrange
    let native = Arc::new(RecordingNative::new());
    let backend = HyprlandBackend::new(
        Arc::clone(&native) as Arc<dyn NativeCapabilities>,
        sample_control(),
    );
    let opened = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&opened);
    let shortcut = Shortcut::new("main-menu", "Super+Space", move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Act
    assert_ok!(backend.bind_shortcut(&shortcut).await);
    assert!(native.fire("main-menu"));
    assert!(native.fire("main-menu"));
    assert_ok!(backend.unbind_shortcut(&shortcut).await);
    let fired_after_unbind = native.fire("main-menu");

    // Assert
    assert!(!fired_after_unbind);
    assert_eq!(opened.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_supports_shortcuts_stays_false_across_bind_activity() {
    let (backend, _) = small_table_backend(sample_control());
    let a = Shortcut::new("a", "Alt+A", || {});
    let b = Shortcut::new("b", "Alt+B", || {});

    assert!(!backend.backend_info().supports_shortcuts);
    assert_ok!(backend.bind_shortcut(&a).await);
    assert!(!backend.backend_info().supports_shortcuts);
    assert_ok!(backend.bind_shortcut(&b).await);
    assert_ok!(backend.unbind_shortcut(&a).await);
    assert!(!backend.backend_info().supports_shortcuts);
    backend.unbind_all_shortcuts().await;
    assert!(!backend.backend_info().supports_shortcuts);
}

// ── Trait object use ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_backend_is_usable_as_trait_object() {
    let backend: Box<dyn Backend> = Box::new(HyprlandBackend::new(
        Arc::new(RecordingNative::new()),
        sample_control(),
    ));

    assert_ok!(backend.init().await);
    assert_err!(backend.init().await);
    backend.restore_focus().await;
}
