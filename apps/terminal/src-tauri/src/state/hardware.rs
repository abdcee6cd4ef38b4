//! # Hardware State
//!
//! Tauri-managed handles to the hardware bridge and the terminal shell.

use std::sync::Arc;

use supawave_hardware::HardwareBridge;

use crate::shell::TerminalShell;

/// Shared handles the transport commands operate on.
///
/// The bridge executes capability operations; the shell handle is kept
/// alongside it so `start_barcode_scanner` can build delivery listeners
/// that evaluate into the storefront.
pub struct HardwareState {
    bridge: Arc<HardwareBridge>,
    shell: Arc<TerminalShell>,
}

impl HardwareState {
    pub fn new(bridge: Arc<HardwareBridge>, shell: Arc<TerminalShell>) -> Self {
        HardwareState { bridge, shell }
    }

    pub fn bridge(&self) -> &HardwareBridge {
        &self.bridge
    }

    pub fn shell(&self) -> &Arc<TerminalShell> {
        &self.shell
    }
}
