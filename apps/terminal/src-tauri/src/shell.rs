//! # Terminal Shell
//!
//! The `HostShell` implementation backed by the Tauri runtime: UI-safe
//! dispatch through the main thread, and toast/callback delivery by
//! evaluating JavaScript inside the storefront webview.
//!
//! ## Delivery Mechanism
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Delivery into Hosted Content                         │
//! │                                                                         │
//! │  bridge worker ──run_on_ui──► main thread ──eval──► storefront          │
//! │                                                                         │
//! │  toast    : window.__supawaveShowToast(<message>)   (shim overlay)      │
//! │  barcode  : window.barcodeScanner.onBarcodeScanned(<code>)              │
//! │                                                                         │
//! │  Every interpolated value is JSON-escaped with serde_json, so payload   │
//! │  strings with quotes/backslashes cannot corrupt the evaluated script.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failures on this path (window closed, eval refused) are logged and the
//! delivery is dropped; nothing propagates back into the bridge or the
//! hosted content.

use tauri::{AppHandle, Manager};
use tracing::{debug, warn};

use supawave_hardware::{HostShell, ShellError, UiTask};

/// Label of the storefront window.
pub const MAIN_WINDOW: &str = "main";

/// Host-shell capabilities backed by a Tauri `AppHandle`.
pub struct TerminalShell {
    app: AppHandle,
}

impl TerminalShell {
    pub fn new(app: AppHandle) -> Self {
        TerminalShell { app }
    }

    /// Delivers a scanned barcode into the storefront by invoking its
    /// registered `window.barcodeScanner.onBarcodeScanned` callback.
    /// The callback is null-checked on the JavaScript side; a storefront
    /// without one simply ignores the delivery.
    pub fn deliver_barcode(&self, barcode: &str) {
        match self.eval_in_storefront(&barcode_delivery_script(barcode)) {
            Ok(()) => debug!(barcode = %barcode, "barcode delivered to storefront"),
            Err(e) => warn!(error = %e, "barcode delivery dropped"),
        }
    }

    fn eval_in_storefront(&self, script: &str) -> Result<(), ShellError> {
        let window = self
            .app
            .get_webview_window(MAIN_WINDOW)
            .ok_or_else(|| ShellError::DeliveryFailed("storefront window closed".to_string()))?;
        window
            .eval(script)
            .map_err(|e| ShellError::DeliveryFailed(e.to_string()))
    }
}

impl HostShell for TerminalShell {
    fn run_on_ui(&self, task: UiTask) -> Result<(), ShellError> {
        self.app
            .run_on_main_thread(task)
            .map_err(|e| ShellError::DispatchFailed(e.to_string()))
    }

    fn show_toast(&self, message: &str) {
        if let Err(e) = self.eval_in_storefront(&toast_script(message)) {
            warn!(error = %e, "toast dropped");
        }
    }
}

/// Encodes a value as a JavaScript string literal. JSON string encoding is
/// valid JS source, so this is the whole escaping story.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn barcode_delivery_script(barcode: &str) -> String {
    format!(
        "if (window.barcodeScanner && typeof window.barcodeScanner.onBarcodeScanned === 'function') {{ window.barcodeScanner.onBarcodeScanned({}); }}",
        js_string(barcode)
    )
}

fn toast_script(message: &str) -> String {
    format!(
        "if (window.__supawaveShowToast) {{ window.__supawaveShowToast({}); }}",
        js_string(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes_and_backslashes() {
        assert_eq!(js_string("plain"), "\"plain\"");
        assert_eq!(js_string(r#"a"b"#), r#""a\"b""#);
        assert_eq!(js_string(r"back\slash"), r#""back\\slash""#);
    }

    #[test]
    fn barcode_script_is_null_checked_and_escaped() {
        let script = barcode_delivery_script("1234567890123");
        assert!(script.contains("window.barcodeScanner.onBarcodeScanned(\"1234567890123\")"));
        assert!(script.starts_with("if (window.barcodeScanner"));

        // A malicious payload stays inside the string literal.
        let script = barcode_delivery_script("\"); alert(1); (\"");
        assert!(script.contains(r#"onBarcodeScanned("\"); alert(1); (\"")"#));
    }

    #[test]
    fn toast_script_survives_hostile_messages() {
        let script = toast_script("Printer's \"ready\"\\ok");
        assert!(script.contains(r#"__supawaveShowToast("Printer's \"ready\"\\ok")"#));
    }
}
