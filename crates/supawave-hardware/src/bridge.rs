//! # Hardware Bridge
//!
//! Orchestrates capability operations (print, scan, test) against the
//! simulated peripherals, running each as an asynchronous unit of work with
//! exactly one completion signal.
//!
//! ## Operation State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Per-Operation Lifecycle                              │
//! │                                                                         │
//! │             precondition holds                                          │
//! │   Idle ───────────────────────────► Accepted                            │
//! │     │                                  │                                │
//! │     │ precondition fails               │ latency elapses                │
//! │     ▼                                  ▼                                │
//! │   (value-level false,          Completed ─── notification on the        │
//! │    nothing scheduled)                  │     UI-safe context            │
//! │                                        │                                │
//! │                              Dropped ◄─┘ (scan only: listener           │
//! │                                           superseded or missing)        │
//! │                                                                         │
//! │   No Cancelled state: work, once scheduled, runs to completion or is    │
//! │   abandoned with the session. No timeouts.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Scheduling Model
//! Each accepted operation gets its own detached worker (`Handle::spawn`),
//! which does nothing but sleep out the simulated latency and then hand the
//! completion to the UI-safe context via [`HostShell::run_on_ui`]. Workers
//! never mutate shared state beyond reading peripheral connectivity and the
//! scan listener slot.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::runtime::Handle;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::config::BridgeConfig;
use crate::peripheral::{PeripheralKind, PeripheralState};
use crate::shell::HostShell;

/// The catalog a simulated scan draws from. Plausible EAN-13 payloads.
pub const DEMO_BARCODES: [&str; 4] = [
    "1234567890123",
    "9876543210987",
    "5555666677778",
    "1111222233334",
];

/// Callback receiving a scanned barcode, registered by the transport layer.
pub type BarcodeListener = Arc<dyn Fn(String) + Send + Sync + 'static>;

/// The active scan registration.
///
/// `generation` is the scan ticket: a completion only delivers if the
/// generation it was started under is still current, so a scan superseded
/// by a newer `start_scan` drops its result instead of firing a stale
/// listener.
#[derive(Default)]
struct ScanSlot {
    generation: u64,
    listener: Option<BarcodeListener>,
}

/// The hardware abstraction bridge.
///
/// One instance per hosting session, constructed at startup and shared
/// behind an `Arc`. All methods return immediately; simulated latency runs
/// on detached workers owned by the injected runtime handle.
pub struct HardwareBridge {
    config: BridgeConfig,

    /// Connectivity truth for all peripherals.
    peripherals: PeripheralState,

    /// Capabilities lent by the host shell (UI dispatch, toasts).
    shell: Arc<dyn HostShell>,

    /// Injected scheduler for background workers. Tests hand in the handle
    /// of a paused-clock runtime to drive latency with virtual time.
    runtime: Handle,

    /// Simulation randomness. Seeded from config for deterministic runs.
    rng: Mutex<StdRng>,

    /// At most one active scan registration.
    scan_slot: Arc<Mutex<ScanSlot>>,
}

impl HardwareBridge {
    /// Creates the bridge and seeds peripheral presence.
    ///
    /// Printer presence comes from `config.printer_connected` when forced,
    /// otherwise from an unbiased coin flip on the injected RNG — roughly
    /// half of unseeded sessions boot without a printer, stable within the
    /// session unless overridden.
    pub fn new(config: BridgeConfig, shell: Arc<dyn HostShell>, runtime: Handle) -> Self {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let printer_present = config
            .printer_connected
            .unwrap_or_else(|| rng.random_bool(0.5));

        info!(
            printer_present,
            forced = config.printer_connected.is_some(),
            seeded = config.rng_seed.is_some(),
            "hardware bridge starting"
        );

        HardwareBridge {
            peripherals: PeripheralState::with_printer(printer_present),
            shell,
            runtime,
            rng: Mutex::new(rng),
            scan_slot: Arc::new(Mutex::new(ScanSlot::default())),
            config,
        }
    }

    /// Submits a receipt for printing.
    ///
    /// ## Behavior
    /// - Printer disconnected: toasts "Printer not connected" and returns
    ///   `false`. Nothing is scheduled and no completion ever follows.
    /// - Printer connected: returns `true` (job accepted) and schedules a
    ///   worker that, after the configured latency, toasts
    ///   "Receipt printed!" on the UI context.
    ///
    /// Connectivity is checked once, here. A `set_printer_connected(false)`
    /// after acceptance does not recall the in-flight job.
    ///
    /// The content is the receipt payload a real driver would render; the
    /// simulation accepts it without validating or echoing it.
    pub fn print_receipt(&self, content: &str) -> bool {
        if !self.peripherals.is_connected(PeripheralKind::Printer) {
            warn!("print rejected: printer not connected");
            self.toast("Printer not connected");
            return false;
        }

        debug!(bytes = content.len(), "print job accepted");

        let shell = Arc::clone(&self.shell);
        let latency = self.config.print_latency;
        self.runtime.spawn(async move {
            sleep(latency).await;
            let ui_shell = Arc::clone(&shell);
            let dispatched = shell.run_on_ui(Box::new(move || {
                ui_shell.show_toast("Receipt printed!");
            }));
            if let Err(e) = dispatched {
                error!(error = %e, "print completion abandoned");
            }
        });

        true
    }

    /// Starts a simulated scan, registering `listener` as the active
    /// barcode recipient.
    ///
    /// ## Behavior
    /// - The previous listener, if any, is replaced; there is no queue.
    /// - "Barcode scanner started" is toasted immediately through the UI
    ///   path.
    /// - A worker sleeps out the scan latency, draws one catalog barcode,
    ///   and delivers it exactly once on the UI context — provided this
    ///   scan's registration is still the current one. A scan superseded
    ///   before completion drops its result silently, so back-to-back scans
    ///   produce at most one delivery, to the latest listener.
    pub fn start_scan(&self, listener: BarcodeListener) {
        if !self.peripherals.is_connected(PeripheralKind::Scanner) {
            warn!("scan rejected: scanner not connected");
            return;
        }

        let my_generation = match self.scan_slot.lock() {
            Ok(mut slot) => {
                slot.generation = slot.generation.wrapping_add(1);
                slot.listener = Some(listener);
                slot.generation
            }
            Err(_) => {
                error!("scan listener slot poisoned, scan not started");
                return;
            }
        };

        debug!(generation = my_generation, "scan started");
        self.toast("Barcode scanner started");

        let shell = Arc::clone(&self.shell);
        let slot = Arc::clone(&self.scan_slot);
        let latency = self.config.scan_latency;
        let barcode = self.pick_barcode();
        self.runtime.spawn(async move {
            sleep(latency).await;
            let ui_shell = Arc::clone(&shell);
            let dispatched = shell.run_on_ui(Box::new(move || {
                // Resolve the listener at completion time, not request time.
                let current = match slot.lock() {
                    Ok(s) if s.generation == my_generation => s.listener.clone(),
                    Ok(_) => None,
                    Err(_) => None,
                };
                match current {
                    Some(cb) => {
                        debug!(barcode = %barcode, "barcode delivered");
                        cb(barcode.clone());
                        ui_shell.show_toast(&format!("Barcode scanned: {}", barcode));
                    }
                    None => {
                        debug!(
                            generation = my_generation,
                            "scan result dropped: registration superseded"
                        );
                    }
                }
            }));
            if let Err(e) = dispatched {
                error!(error = %e, "scan completion abandoned");
            }
        });
    }

    /// Reports printer connectivity, with an informational toast.
    ///
    /// Idempotent and side-effect-free on peripheral state.
    pub fn test_printer(&self) -> bool {
        let connected = self.peripherals.is_connected(PeripheralKind::Printer);
        debug!(connected, "printer test");
        if connected {
            self.toast("Printer test successful");
        } else {
            self.toast("Printer not found");
        }
        connected
    }

    /// Diagnostics hook: current printer connectivity, no side effects.
    pub fn is_printer_connected(&self) -> bool {
        self.peripherals.is_connected(PeripheralKind::Printer)
    }

    /// Diagnostics hook: forces printer connectivity for all subsequent
    /// operations. In-flight operations are unaffected.
    pub fn set_printer_connected(&self, connected: bool) {
        self.peripherals.set_connected(PeripheralKind::Printer, connected);
    }

    /// Routes an arbitrary toast through the UI-safe path. Backs the
    /// `showToast` transport method.
    pub fn notify(&self, message: &str) {
        self.toast(message);
    }

    /// Dispatches one toast onto the UI context; failures are logged and
    /// the toast is dropped.
    fn toast(&self, message: &str) {
        let ui_shell = Arc::clone(&self.shell);
        let message = message.to_string();
        let dispatched = self.shell.run_on_ui(Box::new(move || {
            ui_shell.show_toast(&message);
        }));
        if let Err(e) = dispatched {
            error!(error = %e, "toast dropped");
        }
    }

    fn pick_barcode(&self) -> String {
        let index = match self.rng.lock() {
            Ok(mut rng) => rng.random_range(0..DEMO_BARCODES.len()),
            Err(_) => 0,
        };
        DEMO_BARCODES[index].to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
//
// All latency-sensitive tests run under `start_paused = true`: the Tokio
// clock is virtual, `sleep` in the test body auto-advances it, and the
// recording shell executes UI tasks inline, so every property is asserted
// deterministically without real waiting.

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Synchronous stand-in for the UI-safe executor that records toasts.
    #[derive(Clone, Default)]
    struct RecordingShell {
        toasts: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingShell {
        fn toasts(&self) -> Vec<String> {
            self.toasts.lock().unwrap().clone()
        }

        fn count(&self, needle: &str) -> usize {
            self.toasts().iter().filter(|t| t.as_str() == needle).count()
        }
    }

    impl HostShell for RecordingShell {
        fn run_on_ui(&self, task: crate::shell::UiTask) -> Result<(), crate::ShellError> {
            task();
            Ok(())
        }

        fn show_toast(&self, message: &str) {
            self.toasts.lock().unwrap().push(message.to_string());
        }
    }

    fn bridge_with(config: BridgeConfig, shell: &RecordingShell) -> HardwareBridge {
        HardwareBridge::new(config, Arc::new(shell.clone()), Handle::current())
    }

    fn config_with_printer(connected: bool) -> BridgeConfig {
        BridgeConfig {
            printer_connected: Some(connected),
            rng_seed: Some(7),
            ..BridgeConfig::default()
        }
    }

    fn capturing_listener() -> (BarcodeListener, Arc<Mutex<Vec<String>>>) {
        let hits: Arc<Mutex<Vec<String>>> = Arc::default();
        let sink = Arc::clone(&hits);
        let listener: BarcodeListener = Arc::new(move |barcode: String| {
            sink.lock().unwrap().push(barcode);
        });
        (listener, hits)
    }

    #[tokio::test(start_paused = true)]
    async fn print_without_printer_fails_synchronously() {
        let shell = RecordingShell::default();
        let bridge = bridge_with(config_with_printer(false), &shell);

        assert!(!bridge.print_receipt("RECEIPT #1"));
        assert_eq!(shell.count("Printer not connected"), 1);

        // Even well past the latency, no completion appears.
        sleep(Duration::from_secs(10)).await;
        assert_eq!(shell.count("Receipt printed!"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn print_completes_exactly_once_after_latency() {
        let shell = RecordingShell::default();
        let bridge = bridge_with(config_with_printer(true), &shell);

        assert!(bridge.print_receipt("RECEIPT #1"));
        assert_eq!(shell.count("Receipt printed!"), 0);

        // Just short of the latency: still pending.
        sleep(Duration::from_millis(1999)).await;
        assert_eq!(shell.count("Receipt printed!"), 0);

        // Crossing it: exactly one completion, and no more afterwards.
        sleep(Duration::from_millis(51)).await;
        assert_eq!(shell.count("Receipt printed!"), 1);
        sleep(Duration::from_secs(10)).await;
        assert_eq!(shell.count("Receipt printed!"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn override_after_acceptance_does_not_recall_job() {
        let shell = RecordingShell::default();
        let bridge = bridge_with(config_with_printer(true), &shell);

        assert!(bridge.print_receipt("RECEIPT #1"));
        bridge.set_printer_connected(false);

        sleep(Duration::from_secs(3)).await;
        assert_eq!(shell.count("Receipt printed!"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reconnect_allows_new_prints() {
        let shell = RecordingShell::default();
        let bridge = bridge_with(config_with_printer(false), &shell);

        assert!(!bridge.print_receipt("RECEIPT #1"));
        bridge.set_printer_connected(true);
        assert!(bridge.print_receipt("RECEIPT #2"));

        sleep(Duration::from_secs(3)).await;
        assert_eq!(shell.count("Receipt printed!"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn scan_delivers_exactly_once_from_catalog() {
        let shell = RecordingShell::default();
        let bridge = bridge_with(config_with_printer(true), &shell);
        let (listener, hits) = capturing_listener();

        bridge.start_scan(listener);
        assert_eq!(shell.count("Barcode scanner started"), 1);
        assert!(hits.lock().unwrap().is_empty());

        sleep(Duration::from_millis(3100)).await;
        let delivered = hits.lock().unwrap().clone();
        assert_eq!(delivered.len(), 1);
        assert!(DEMO_BARCODES.contains(&delivered[0].as_str()));
        assert_eq!(
            shell.count(&format!("Barcode scanned: {}", delivered[0])),
            1
        );

        // One scan, one delivery. Nothing else ever fires.
        sleep(Duration::from_secs(10)).await;
        assert_eq!(hits.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn overwritten_listener_never_receives() {
        let shell = RecordingShell::default();
        let bridge = bridge_with(config_with_printer(true), &shell);
        let (first, first_hits) = capturing_listener();
        let (second, second_hits) = capturing_listener();

        bridge.start_scan(first);
        bridge.start_scan(second);
        assert_eq!(shell.count("Barcode scanner started"), 2);

        sleep(Duration::from_secs(5)).await;

        // The superseded scan's result is dropped; the second registration
        // receives at most one barcode.
        assert!(first_hits.lock().unwrap().is_empty());
        assert_eq!(second_hits.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_printer_is_idempotent() {
        let shell = RecordingShell::default();
        let bridge = bridge_with(config_with_printer(true), &shell);

        for _ in 0..5 {
            assert!(bridge.test_printer());
        }
        assert!(bridge.is_printer_connected());
        assert_eq!(shell.count("Printer test successful"), 5);

        let offline = RecordingShell::default();
        let bridge = bridge_with(config_with_printer(false), &offline);
        for _ in 0..5 {
            assert!(!bridge.test_printer());
        }
        assert!(!bridge.is_printer_connected());
        assert_eq!(offline.count("Printer not found"), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn seeded_presence_is_reproducible() {
        let shell = RecordingShell::default();
        let config = BridgeConfig {
            rng_seed: Some(42),
            ..BridgeConfig::default()
        };

        let a = bridge_with(config.clone(), &shell);
        let b = bridge_with(config, &shell);
        assert_eq!(a.is_printer_connected(), b.is_printer_connected());
    }

    #[tokio::test(start_paused = true)]
    async fn forced_presence_beats_coin_flip() {
        let shell = RecordingShell::default();
        for seed in 0..4 {
            let config = BridgeConfig {
                rng_seed: Some(seed),
                printer_connected: Some(true),
                ..BridgeConfig::default()
            };
            assert!(bridge_with(config, &shell).is_printer_connected());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn notify_routes_through_ui_path() {
        let shell = RecordingShell::default();
        let bridge = bridge_with(config_with_printer(true), &shell);

        bridge.notify("Till closing in 5 minutes");
        assert_eq!(shell.count("Till closing in 5 minutes"), 1);
    }
}
