//! # Hardware Commands
//!
//! Transport commands for the printer and scanner capabilities.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use supawave_hardware::BarcodeListener;

use crate::state::HardwareState;

/// Result of a printer test, serialized for the storefront.
///
/// The shim `JSON.stringify`s this, so hosted content observes the same
/// JSON-shaped string the original terminal produced — minus the hand-built
/// string concatenation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterTestReport {
    pub connected: bool,
    pub message: String,
}

/// Submits receipt content for printing.
///
/// ## Behavior
/// - Returns the acceptance boolean (`false` when no printer is attached;
///   nothing is scheduled in that case).
/// - Toasts the acceptance outcome immediately; the print completion toast
///   follows asynchronously from the bridge worker.
/// - Never throws back into the storefront, whatever the content contains.
#[tauri::command]
pub fn print_receipt(hw: State<'_, HardwareState>, content: String) -> bool {
    debug!(bytes = content.len(), "print_receipt command");

    let accepted = hw.bridge().print_receipt(&content);
    let outcome = if accepted {
        "Receipt printed successfully"
    } else {
        "Printer not available"
    };
    hw.bridge().notify(outcome);

    accepted
}

/// Starts a barcode scan.
///
/// Registers a listener that evaluates the storefront's
/// `window.barcodeScanner.onBarcodeScanned` callback with the scanned code;
/// the barcode itself arrives out-of-band once the scan completes.
#[tauri::command]
pub fn start_barcode_scanner(hw: State<'_, HardwareState>) {
    debug!("start_barcode_scanner command");

    let shell = Arc::clone(hw.shell());
    let listener: BarcodeListener = Arc::new(move |barcode: String| {
        shell.deliver_barcode(&barcode);
    });
    hw.bridge().start_scan(listener);
}

/// Tests printer connectivity.
///
/// Idempotent: reads connectivity without changing it.
#[tauri::command]
pub fn test_printer(hw: State<'_, HardwareState>) -> PrinterTestReport {
    debug!("test_printer command");

    let connected = hw.bridge().test_printer();
    PrinterTestReport {
        connected,
        message: if connected {
            "Printer ready".to_string()
        } else {
            "Printer not found".to_string()
        },
    }
}

/// Shows a transient toast. Pure passthrough to the shell's toast path.
#[tauri::command]
pub fn show_toast(hw: State<'_, HardwareState>, message: String) {
    debug!("show_toast command");
    hw.bridge().notify(&message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printer_report_serializes_for_the_shim() {
        let report = PrinterTestReport {
            connected: true,
            message: "Printer ready".to_string(),
        };
        let json = serde_json::to_string(&report).expect("serializes");
        assert_eq!(json, r#"{"connected":true,"message":"Printer ready"}"#);
    }

    #[test]
    fn printer_report_escapes_reserved_characters() {
        let report = PrinterTestReport {
            connected: false,
            message: r#"no driver at "COM3\aux""#.to_string(),
        };
        let json = serde_json::to_string(&report).expect("serializes");
        let parsed: PrinterTestReport = serde_json::from_str(&json).expect("parses back");
        assert_eq!(parsed.message, report.message);
    }
}
