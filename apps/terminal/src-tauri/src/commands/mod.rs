//! # Transport Commands Module
//!
//! The wire contract between the hosted storefront and the hardware bridge.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── hardware.rs  ◄─── print_receipt, start_barcode_scanner,
//! │                     test_printer, show_toast
//! └── device.rs    ◄─── get_device_info
//! ```
//!
//! ## How the Contract Is Surfaced
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Transport Flow                                       │
//! │                                                                         │
//! │  Storefront                                                             │
//! │  ──────────                                                             │
//! │  window.Android.printReceipt(content)   ◄── shim injected at startup    │
//! │         │                                                               │
//! │         │ invoke('print_receipt', { content })  (IPC via WebView)       │
//! │         ▼                                                               │
//! │  #[tauri::command]                                                      │
//! │  fn print_receipt(hw: State<HardwareState>, content: String) -> bool    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  HardwareBridge (accepts / rejects, schedules completion)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every input is an untrusted string from web content. Commands never
//! return an error into the storefront: outcomes are values, failures are
//! toasts or silent drops.

pub mod device;
pub mod hardware;
