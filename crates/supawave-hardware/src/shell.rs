//! # Host Shell Contract
//!
//! The narrow set of capabilities the host shell lends to the bridge
//! (implemented by the Tauri integration in `apps/terminal`).
//!
//! ## Outbound Delivery
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bridge → Host Shell                                  │
//! │                                                                         │
//! │  Detached worker (per operation)                                        │
//! │        │                                                                │
//! │        │ run_on_ui(task)                                                │
//! │        ▼                                                                │
//! │  UI-safe single-threaded context (owned by the host shell)              │
//! │        │                                                                │
//! │        ├── show_toast("Receipt printed!")                               │
//! │        └── BarcodeListener(barcode)  (registered by the transport)      │
//! │                                                                         │
//! │  Every user-visible side effect runs on the UI context, never on        │
//! │  the worker that simulated the latency.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ShellError;

/// A unit of work to run on the UI-safe context.
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// Capabilities the host shell provides to the bridge.
///
/// Implementations must be cheap to clone behind an `Arc` and callable from
/// any thread. `show_toast` is only ever invoked from inside a task already
/// dispatched through [`run_on_ui`](HostShell::run_on_ui).
pub trait HostShell: Send + Sync {
    /// Schedules a task on the UI-safe single-threaded context.
    ///
    /// An `Err` means the task was not accepted; the caller logs it and
    /// abandons the operation.
    fn run_on_ui(&self, task: UiTask) -> Result<(), ShellError>;

    /// Shows a transient, non-persistent user notification.
    fn show_toast(&self, message: &str);
}

/// Inert shell for tests and headless runs: tasks execute inline on the
/// calling thread, toasts vanish.
pub struct NoOpShell;

impl HostShell for NoOpShell {
    fn run_on_ui(&self, task: UiTask) -> Result<(), ShellError> {
        task();
        Ok(())
    }

    fn show_toast(&self, _message: &str) {}
}
