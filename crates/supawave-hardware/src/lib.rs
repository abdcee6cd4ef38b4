//! # supawave-hardware: Simulated Peripherals for SupaWave POS
//!
//! This crate is the hardware abstraction layer of the SupaWave terminal.
//! It accepts capability requests (print a receipt, scan a barcode, test the
//! printer) that originate from untrusted storefront content, executes them
//! against simulated peripherals asynchronously, and delivers the results
//! back through capabilities lent to it by the host shell.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      SupaWave POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Storefront (hosted web content)                   │   │
//! │  │    window.Android.printReceipt / startBarcodeScanner / ...      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Terminal shell (apps/terminal)                     │   │
//! │  │    transport commands, window, HostShell implementation         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ supawave-hardware (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌────────────┐  ┌──────────┐  ┌───────────┐  │   │
//! │  │   │ peripheral │  │   bridge   │  │  shell   │  │  config   │  │   │
//! │  │   │  Printer   │  │ print/scan │  │ HostShell│  │ latencies │  │   │
//! │  │   │  Scanner   │  │ test/notify│  │  trait   │  │ rng seed  │  │   │
//! │  │   └────────────┘  └────────────┘  └──────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO TAURI • NO WEBVIEW • DETACHED WORKERS • INJECTED SHELL    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Callers never block**: every capability call returns immediately;
//!    simulated latency runs on a detached worker per operation instance
//! 2. **One completion signal**: an accepted operation notifies exactly once,
//!    always on the UI-safe context the host shell designates
//! 3. **Failures are values**: a missing printer is `false`, never an `Err`
//!    thrown back into hosted content
//! 4. **Determinism on demand**: the RNG is seedable and the clock is the
//!    Tokio clock, so tests pin both

pub mod bridge;
pub mod config;
pub mod error;
pub mod peripheral;
pub mod shell;

pub use bridge::{BarcodeListener, HardwareBridge, DEMO_BARCODES};
pub use config::BridgeConfig;
pub use error::ShellError;
pub use peripheral::{PeripheralKind, PeripheralState};
pub use shell::{HostShell, NoOpShell, UiTask};
