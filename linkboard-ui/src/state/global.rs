//! Global Application State
//!
//! Reactive toast state using Leptos signals.

use gloo_timers::callback::Timeout;
use leptos::*;
use linkboard::Notice;

/// How long a success toast stays up
pub const SUCCESS_TOAST_MS: u32 = 3000;
/// How long an error toast stays up
pub const ERROR_TOAST_MS: u32 = 4000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Pending clear for each toast; dropping a `Timeout` cancels it
    success_timer: StoredValue<Option<Timeout>>,
    error_timer: StoredValue<Option<Timeout>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    fn new() -> Self {
        Self {
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            success_timer: store_value(None),
            error_timer: store_value(None),
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        show(self.success, self.success_timer, message, SUCCESS_TOAST_MS);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        show(self.error, self.error_timer, message, ERROR_TOAST_MS);
    }

    /// Show a notice produced by a view controller
    pub fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Success(message) => self.show_success(message),
            Notice::Error(message) => self.show_error(message),
        }
    }
}

/// Replace the message and restart its clock. The previous timer is
/// dropped so it cannot clear the new message early.
fn show(
    signal: RwSignal<Option<String>>,
    timer: StoredValue<Option<Timeout>>,
    message: &str,
    millis: u32,
) {
    signal.set(Some(message.to_string()));
    let clear = Timeout::new(millis, move || signal.set(None));
    timer.set_value(Some(clear));
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_replaced_toast_keeps_its_full_duration() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        state.show_success("first");
        TimeoutFuture::new(SUCCESS_TOAST_MS / 2).await;
        state.show_success("second");

        // Past the first toast's deadline, inside the second's.
        TimeoutFuture::new(SUCCESS_TOAST_MS * 3 / 4).await;
        assert_eq!(state.success.get_untracked().as_deref(), Some("second"));

        TimeoutFuture::new(SUCCESS_TOAST_MS / 2).await;
        assert_eq!(state.success.get_untracked(), None);

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_notify_routes_by_kind() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        state.notify(&Notice::error("Login failed"));
        assert_eq!(state.error.get_untracked().as_deref(), Some("Login failed"));
        assert_eq!(state.success.get_untracked(), None);

        runtime.dispose();
    }
}
