//! # Error Types
//!
//! Errors crossing the bridge ↔ host-shell boundary.
//!
//! ## Propagation Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Error Propagation                                 │
//! │                                                                         │
//! │  Precondition failure (printer missing)                                 │
//! │    └── value-level: print_receipt returns false, never Err              │
//! │                                                                         │
//! │  Shell dispatch/delivery failure (ShellError, this file)                │
//! │    └── logged at the call site, operation abandoned; nothing            │
//! │        propagates to hosted content and nothing crashes the host        │
//! │                                                                         │
//! │  Hosted content never sees a thrown fault from the bridge.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Failures while handing work or results to the host shell.
///
/// These indicate the hosting session is degraded (UI context gone, webview
/// torn down mid-delivery). The operation that hit one is treated as
/// abandoned.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The UI-safe context refused or dropped a scheduled task.
    #[error("UI dispatch failed: {0}")]
    DispatchFailed(String),

    /// A callback could not be delivered into hosted content.
    #[error("callback delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Convenience type alias for Results with ShellError.
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = ShellError::DispatchFailed("main thread gone".to_string());
        assert_eq!(err.to_string(), "UI dispatch failed: main thread gone");

        let err = ShellError::DeliveryFailed("webview closed".to_string());
        assert_eq!(err.to_string(), "callback delivery failed: webview closed");
    }
}
