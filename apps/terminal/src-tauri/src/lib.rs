//! # SupaWave Terminal Library
//!
//! Core library for the SupaWave POS terminal shell. This is the main entry
//! point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! supawave_terminal_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── shell.rs        ◄─── HostShell impl (UI dispatch, webview eval)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── hardware.rs ◄─── Bridge + shell handles
//! │   └── device.rs   ◄─── Device identification
//! └── commands/
//!     ├── mod.rs      ◄─── Command exports
//!     ├── hardware.rs ◄─── print/scan/test/toast commands
//!     └── device.rs   ◄─── get_device_info
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Construct the Hardware Bridge ────────────────────────────────────► │
//! │     • BridgeConfig from SUPAWAVE_* environment variables                │
//! │     • TerminalShell lends UI dispatch + delivery capabilities           │
//! │     • Tokio handle borrowed from the Tauri async runtime                │
//! │                                                                         │
//! │  3. Manage State Objects ─────────────────────────────────────────────► │
//! │     • HardwareState: bridge + shell handles                             │
//! │     • DeviceInfo: model/version/app, collected once                     │
//! │                                                                         │
//! │  4. Build the Storefront Window ──────────────────────────────────────► │
//! │     • window.Android shim injected before any storefront code runs      │
//! │     • bundled demo storefront, or SUPAWAVE_STOREFRONT_URL               │
//! │                                                                         │
//! │  5. Register commands & run ──────────────────────────────────────────► │
//! │     • on page load, call the storefront's initPOSTerminal() hook        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod shell;
pub mod state;

use std::sync::Arc;

use tauri::webview::PageLoadEvent;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use supawave_hardware::{BridgeConfig, HardwareBridge, HostShell};

use shell::{TerminalShell, MAIN_WINDOW};
use state::{DeviceInfo, HardwareState};

/// The capability shim handed to the storefront before any of its code
/// runs. Defines `window.Android` (global name kept from the original
/// terminal build, which the storefront expects) and the toast overlay.
const BRIDGE_SHIM: &str = include_str!("bridge_shim.js");

/// Storefront bootstrap hook, evaluated once the page finishes loading.
const INIT_POS_TERMINAL: &str = "if (window.initPOSTerminal) { window.initPOSTerminal(); }";

/// Runs the Tauri application.
pub fn run() {
    init_tracing();

    info!("Starting SupaWave POS Terminal");

    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            let shell = Arc::new(TerminalShell::new(app.handle().clone()));

            // The bridge borrows the Tauri async runtime for its detached
            // workers; entering it briefly is how we hand over the handle.
            let config = BridgeConfig::from_env();
            let runtime = tauri::async_runtime::block_on(async {
                tokio::runtime::Handle::current()
            });
            let bridge = Arc::new(HardwareBridge::new(
                config,
                Arc::clone(&shell) as Arc<dyn HostShell>,
                runtime,
            ));

            app.manage(HardwareState::new(bridge, shell));
            app.manage(DeviceInfo::collect());
            info!("State initialized");

            let url = storefront_url()?;
            WebviewWindowBuilder::new(app, MAIN_WINDOW, url)
                .title("SupaWave POS")
                .inner_size(1280.0, 800.0)
                .initialization_script(BRIDGE_SHIM)
                .build()?;
            info!("Storefront window created");

            Ok(())
        })
        .on_page_load(|webview, payload| {
            if matches!(payload.event(), PageLoadEvent::Finished) {
                debug!(url = %payload.url(), "storefront page loaded");
                if let Err(e) = webview.eval(INIT_POS_TERMINAL) {
                    warn!(error = %e, "storefront bootstrap script failed");
                }
            }
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Hardware commands
            commands::hardware::print_receipt,
            commands::hardware::start_barcode_scanner,
            commands::hardware::test_printer,
            commands::hardware::show_toast,
            // Device commands
            commands::device::get_device_info,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=supawave_hardware=trace` - Trace the bridge only
/// - Default: INFO level, DEBUG for the supawave crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,supawave_hardware=debug,supawave_terminal_lib=debug")
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Resolves the storefront URL.
///
/// The bundled demo storefront is the default; deployments point
/// `SUPAWAVE_STOREFRONT_URL` at the real storefront.
fn storefront_url() -> Result<WebviewUrl, Box<dyn std::error::Error>> {
    match std::env::var("SUPAWAVE_STOREFRONT_URL") {
        Ok(raw) => {
            info!(url = %raw, "loading external storefront");
            Ok(WebviewUrl::External(raw.parse()?))
        }
        Err(_) => Ok(WebviewUrl::App("index.html".into())),
    }
}
