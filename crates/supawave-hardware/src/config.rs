//! # Bridge Configuration
//!
//! Tunable parameters for the simulated hardware.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SUPAWAVE_*`)
//! 2. Defaults (this file)
//!
//! The latencies mirror the timings of the real printer/scanner drivers the
//! simulation stands in for; they are tunables, not a contract.

use std::time::Duration;

use tracing::warn;

/// Default simulated print latency.
const DEFAULT_PRINT_LATENCY: Duration = Duration::from_secs(2);

/// Default simulated scan latency.
const DEFAULT_SCAN_LATENCY: Duration = Duration::from_secs(3);

/// Configuration for [`HardwareBridge`](crate::HardwareBridge).
///
/// ## Environment Variables
/// - `SUPAWAVE_PRINT_LATENCY_MS`: simulated print duration in milliseconds
/// - `SUPAWAVE_SCAN_LATENCY_MS`: simulated scan duration in milliseconds
/// - `SUPAWAVE_HW_SEED`: seed for the simulation RNG (u64)
/// - `SUPAWAVE_PRINTER_CONNECTED`: `true`/`false`, bypasses the coin flip
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// How long a print job takes to complete.
    pub print_latency: Duration,

    /// How long a scan takes to produce a barcode.
    pub scan_latency: Duration,

    /// Seed for the simulation RNG. `None` draws from OS entropy, which is
    /// what gives launches their nondeterministic printer presence.
    pub rng_seed: Option<u64>,

    /// Forces printer presence instead of flipping a coin. Used by tests
    /// and by operators who want a predictable terminal.
    pub printer_connected: Option<bool>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig {
            print_latency: DEFAULT_PRINT_LATENCY,
            scan_latency: DEFAULT_SCAN_LATENCY,
            rng_seed: None,
            printer_connected: None,
        }
    }
}

impl BridgeConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// Unparseable values are warned about and ignored, keeping startup
    /// infallible.
    pub fn from_env() -> Self {
        let mut config = BridgeConfig::default();

        if let Some(ms) = read_env_u64("SUPAWAVE_PRINT_LATENCY_MS") {
            config.print_latency = Duration::from_millis(ms);
        }

        if let Some(ms) = read_env_u64("SUPAWAVE_SCAN_LATENCY_MS") {
            config.scan_latency = Duration::from_millis(ms);
        }

        config.rng_seed = read_env_u64("SUPAWAVE_HW_SEED");

        if let Ok(raw) = std::env::var("SUPAWAVE_PRINTER_CONNECTED") {
            match raw.parse::<bool>() {
                Ok(forced) => config.printer_connected = Some(forced),
                Err(_) => warn!(value = %raw, "ignoring unparseable SUPAWAVE_PRINTER_CONNECTED"),
            }
        }

        config
    }
}

fn read_env_u64(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var = name, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_driver_timings() {
        let config = BridgeConfig::default();
        assert_eq!(config.print_latency, Duration::from_secs(2));
        assert_eq!(config.scan_latency, Duration::from_secs(3));
        assert!(config.rng_seed.is_none());
        assert!(config.printer_connected.is_none());
    }
}
