//! Backend for the Hyprland compositor.
//!
//! Hyprland is wlroots-based, so pointer movement and key simulation come from
//! [`WlrVirtualInput`].  What the generic protocols cannot provide is filled in
//! two ways:
//!
//! - **Window and pointer information** comes from `hyprctl -j activewindow`
//!   and `hyprctl -j cursorpos`, run concurrently through a [`ControlTool`].
//! - **Shortcuts** are registered through Hyprland's global-shortcut protocol
//!   by the native module.  That path is experimental: the backend still
//!   reports `supports_shortcuts == false` and tells the user to bind the menu
//!   in `hyprland.conf` instead.
//!
//! # Shortcut bookkeeping
//!
//! The backend remembers which ids it has bound so that a second bind of the
//! same id, or an unbind of an id it never bound, is reported as an error
//! instead of reaching the compositor.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use pieglue_core::{BackendInfo, KeySequence, Shortcut, WindowType, WmInfo};
use tracing::{debug, warn};

use crate::application::backend::{Backend, BackendError};
use crate::application::control_tool::{coordinate_field, text_field, ControlTool};
use crate::application::native::NativeCapabilities;
use crate::application::virtual_input::WlrVirtualInput;

const ACTIVE_WINDOW: &str = "activewindow";
const CURSOR_POS: &str = "cursorpos";

/// Shown instead of a shortcut editor: Hyprland binds are made in its config.
pub const SHORTCUT_HINT: &str = "Use your hyprland.conf to bind this.";

const SETUP_NOTICE: &str = "The Hyprland backend is still a bit experimental! \
You have to add window rules for the menu and bind its shortcuts in hyprland.conf \
for it to work properly.";

/// Host integration for Hyprland.
pub struct HyprlandBackend {
    input: WlrVirtualInput,
    native: Arc<dyn NativeCapabilities>,
    control: Arc<dyn ControlTool>,
    initialized: AtomicBool,
    bound: Mutex<HashSet<String>>,
}

impl HyprlandBackend {
    /// Creates a backend using the default Linux key table.
    pub fn new(native: Arc<dyn NativeCapabilities>, control: Arc<dyn ControlTool>) -> Self {
        Self::with_input(WlrVirtualInput::new(Arc::clone(&native)), native, control)
    }

    /// Creates a backend around an already configured [`WlrVirtualInput`].
    ///
    /// `input` must wrap the same native module as `native`.
    pub fn with_input(
        input: WlrVirtualInput,
        native: Arc<dyn NativeCapabilities>,
        control: Arc<dyn ControlTool>,
    ) -> Self {
        Self {
            input,
            native,
            control,
            initialized: AtomicBool::new(false),
            bound: Mutex::new(HashSet::new()),
        }
    }

    /// Returns `true` once `init` has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Ids of the shortcuts currently bound through this backend, sorted.
    pub fn bound_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.bound().iter().cloned().collect();
        ids.sort();
        ids
    }

    fn bound(&self) -> MutexGuard<'_, HashSet<String>> {
        self.bound.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Backend for HyprlandBackend {
    async fn init(&self) -> Result<(), BackendError> {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return Err(BackendError::AlreadyInitialized);
        }

        warn!("{SETUP_NOTICE}");
        Ok(())
    }

    fn backend_info(&self) -> BackendInfo {
        BackendInfo {
            window_type: WindowType::Splash,
            supports_shortcuts: false,
            shortcut_hint: SHORTCUT_HINT.to_string(),
        }
    }

    async fn wm_info(&self) -> Result<WmInfo, BackendError> {
        let (window, cursor) = tokio::try_join!(
            self.control.query(ACTIVE_WINDOW),
            self.control.query(CURSOR_POS),
        )?;

        let info = WmInfo {
            window_name: text_field(&window, "initialTitle"),
            app_name: text_field(&window, "initialClass"),
            pointer_x: coordinate_field(&cursor, CURSOR_POS, "x")?,
            pointer_y: coordinate_field(&cursor, CURSOR_POS, "y")?,
        };
        debug!(?info, "queried window manager");
        Ok(info)
    }

    async fn bind_shortcut(&self, shortcut: &Shortcut) -> Result<(), BackendError> {
        let mut bound = self.bound();
        if bound.contains(&shortcut.id) {
            return Err(BackendError::DuplicateShortcut(shortcut.id.clone()));
        }

        self.native
            .bind_shortcut(shortcut)
            .map_err(|source| BackendError::Bind {
                id: shortcut.id.clone(),
                source,
            })?;
        bound.insert(shortcut.id.clone());
        debug!(id = %shortcut.id, trigger = %shortcut.trigger, "bound shortcut");
        Ok(())
    }

    async fn unbind_shortcut(&self, shortcut: &Shortcut) -> Result<(), BackendError> {
        let mut bound = self.bound();
        if !bound.contains(&shortcut.id) {
            return Err(BackendError::NotBound(shortcut.id.clone()));
        }

        self.native
            .unbind_shortcut(shortcut)
            .map_err(|source| BackendError::Bind {
                id: shortcut.id.clone(),
                source,
            })?;
        bound.remove(&shortcut.id);
        debug!(id = %shortcut.id, "unbound shortcut");
        Ok(())
    }

    async fn unbind_all_shortcuts(&self) {
        let mut bound = self.bound();
        self.native.unbind_all_shortcuts();
        bound.clear();
    }

    async fn move_pointer(&self, dx: i32, dy: i32) {
        self.input.move_pointer(dx, dy).await;
    }

    async fn simulate_keys(&self, keys: &KeySequence) -> Result<(), BackendError> {
        self.input.simulate_keys(keys).await
    }

    async fn restore_focus(&self) {
        self.input.restore_focus().await;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::control_tool::QueryError;
    use crate::application::native::NativeError;
    use crate::infrastructure::control_tool::mock::StaticControlTool;
    use crate::infrastructure::native::mock::{NativeCall, RecordingNative};
    use pieglue_core::KeyStroke;
    use std::time::Duration;
    use tokio::time::Instant;

    fn make_backend(
        native: RecordingNative,
        control: StaticControlTool,
    ) -> (HyprlandBackend, Arc<RecordingNative>, Arc<StaticControlTool>) {
        let native = Arc::new(native);
        let control = Arc::new(control);
        let backend = HyprlandBackend::new(
            Arc::clone(&native) as Arc<dyn NativeCapabilities>,
            Arc::clone(&control) as Arc<dyn ControlTool>,
        );
        (backend, native, control)
    }

    fn default_backend() -> (HyprlandBackend, Arc<RecordingNative>, Arc<StaticControlTool>) {
        make_backend(RecordingNative::new(), StaticControlTool::hyprland_sample())
    }

    // ── init / backend_info ───────────────────────────────────────────────────

    #[tokio::test]
    async fn test_init_succeeds_once() {
        let (backend, _, _) = default_backend();

        assert!(backend.init().await.is_ok());
        assert!(backend.is_initialized());
        assert!(matches!(
            backend.init().await,
            Err(BackendError::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_backend_info_is_constant() {
        // Arrange
        let (backend, _, _) = default_backend();

        // Act
        let info = backend.backend_info();

        // Assert
        assert_eq!(info.window_type, WindowType::Splash);
        assert!(!info.supports_shortcuts);
        assert_eq!(info.shortcut_hint, "Use your hyprland.conf to bind this.");
    }

    #[tokio::test]
    async fn test_backend_info_unchanged_by_successful_binds() {
        let (backend, _, _) = default_backend();
        let before = backend.backend_info();

        backend
            .bind_shortcut(&Shortcut::new("menu", "Super+Space", || {}))
            .await
            .unwrap();

        assert_eq!(backend.backend_info(), before);
    }

    // ── wm_info ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_wm_info_uses_initial_title_and_class() {
        // Arrange
        let (backend, _, control) = default_backend();

        // Act
        let info = backend.wm_info().await.unwrap();

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
        assert_eq!(control.query_count(), 2);
    }

    #[tokio::test]
    async fn test_wm_info_with_no_focused_window_has_empty_names() {
        let control = StaticControlTool::new()
            .with_reply("activewindow", "{}")
            .with_reply("cursorpos", r#"{"x": 5, "y": 6}"#);
        let (backend, _, _) = make_backend(RecordingNative::new(), control);

        let info = backend.wm_info().await.unwrap();

        assert_eq!(info.window_name, "");
        assert_eq!(info.app_name, "");
        assert_eq!((info.pointer_x, info.pointer_y), (5, 6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wm_info_runs_both_queries_concurrently() {
        // Arrange: each query takes 100ms
        let control =
            StaticControlTool::hyprland_sample().with_latency(Duration::from_millis(100));
        let (backend, _, _) = make_backend(RecordingNative::new(), control);
        let start = Instant::now();

        // Act
        backend.wm_info().await.unwrap();

        // Assert: sequential queries would take at least 200ms
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_wm_info_malformed_output_is_a_query_error() {
        let control = StaticControlTool::new()
            .with_reply("activewindow", "Invalid window")
            .with_reply("cursorpos", r#"{"x": 1, "y": 2}"#);
        let (backend, _, _) = make_backend(RecordingNative::new(), control);

        let result = backend.wm_info().await;

        assert!(matches!(
            result,
            Err(BackendError::Query(QueryError::Parse { .. }))
        ));
    }

    #[tokio::test]
    async fn test_wm_info_missing_coordinate_is_a_query_error() {
        let control = StaticControlTool::new()
            .with_reply("activewindow", "{}")
            .with_reply("cursorpos", r#"{"x": 1}"#);
        let (backend, _, _) = make_backend(RecordingNative::new(), control);

        let result = backend.wm_info().await;

        assert!(matches!(
            result,
            Err(BackendError::Query(QueryError::MissingField { field: "y", .. }))
        ));
    }

    #[tokio::test]
    async fn test_wm_info_out_of_range_coordinate_is_a_query_error() {
        let control = StaticControlTool::new()
            .with_reply("activewindow", "{}")
            .with_reply("cursorpos", r#"{"x": 1e12, "y": 2}"#);
        let (backend, _, _) = make_backend(RecordingNative::new(), control);

        let result = backend.wm_info().await;

        assert!(matches!(
            result,
            Err(BackendError::Query(QueryError::OutOfRange { field: "x", .. }))
        ));
    }

    // ── shortcuts ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_bind_shortcut_registers_with_native() {
        let (backend, native, _) = default_backend();

        backend
            .bind_shortcut(&Shortcut::new("menu", "Super+Space", || {}))
            .await
            .unwrap();

        assert_eq!(native.calls(), vec![NativeCall::BindShortcut("menu".to_string())]);
        assert_eq!(backend.bound_ids(), ["menu"]);
    }

    #[tokio::test]
    async fn test_bind_duplicate_id_makes_no_native_call() {
        // Arrange
        let (backend, native, _) = default_backend();
        let shortcut = Shortcut::new("menu", "Super+Space", || {});
        backend.bind_shortcut(&shortcut).await.unwrap();

        // Act
        let result = backend.bind_shortcut(&shortcut).await;

        // Assert
        assert!(matches!(result, Err(BackendError::DuplicateShortcut(ref id)) if id == "menu"));
        assert_eq!(native.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported_and_not_recorded() {
        let (backend, _, _) = make_backend(
            RecordingNative::failing(),
            StaticControlTool::hyprland_sample(),
        );

        let result = backend
            .bind_shortcut(&Shortcut::new("menu", "Super+Space", || {}))
            .await;

        assert!(matches!(
            result,
            Err(BackendError::Bind { source: NativeError::Registration(_), .. })
        ));
        assert!(backend.bound_ids().is_empty());
    }

    #[tokio::test]
    async fn test_unbind_unknown_id_is_not_bound_error() {
        let (backend, native, _) = default_backend();

        let result = backend
            .unbind_shortcut(&Shortcut::new("ghost", "Alt+G", || {}))
            .await;

        assert!(matches!(result, Err(BackendError::NotBound(ref id)) if id == "ghost"));
        assert!(native.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unbind_then_rebind_succeeds() {
        let (backend, _, _) = default_backend();
        let shortcut = Shortcut::new("menu", "Super+Space", || {});

        backend.bind_shortcut(&shortcut).await.unwrap();
        backend.unbind_shortcut(&shortcut).await.unwrap();

        assert!(backend.bind_shortcut(&shortcut).await.is_ok());
    }

    #[tokio::test]
    async fn test_unbind_all_clears_every_binding() {
        // Arrange
        let (backend, native, _) = default_backend();
        backend
            .bind_shortcut(&Shortcut::new("a", "Alt+A", || {}))
            .await
            .unwrap();
        backend
            .bind_shortcut(&Shortcut::new("b", "Alt+B", || {}))
            .await
            .unwrap();

        // Act
        backend.unbind_all_shortcuts().await;

        // Assert
        assert!(backend.bound_ids().is_empty());
        assert!(native.registered_ids().is_empty());
        assert_eq!(native.calls().last(), Some(&NativeCall::UnbindAllShortcuts));
    }

    // ── input delegation ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_simulate_keys_uses_linux_key_codes() {
        let (backend, native, _) = default_backend();
        let keys: KeySequence =
            vec![KeyStroke::press("KeyA", 0), KeyStroke::release("KeyA", 0)].into();

        backend.simulate_keys(&keys).await.unwrap();

        assert_eq!(
            native.calls(),
            vec![
                NativeCall::SimulateKey { code: 30, down: true },
                NativeCall::SimulateKey { code: 30, down: false },
            ]
        );
    }

    #[tokio::test]
    async fn test_move_pointer_and_restore_focus() {
        let (backend, native, _) = default_backend();

        backend.move_pointer(3, -7).await;
        backend.restore_focus().await;

        // restore_focus is a no-op on wlroots compositors.
        assert_eq!(native.calls(), vec![NativeCall::MovePointer { dx: 3, dy: -7 }]);
    }
}
