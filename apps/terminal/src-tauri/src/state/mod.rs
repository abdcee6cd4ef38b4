//! # State Module
//!
//! Manages application state for the terminal shell.
//!
//! ## Why Multiple State Types?
//! Each command declares exactly the state it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tauri Runtime                                      │
//! │  app.manage(hardware_state);   // HardwareState                         │
//! │  app.manage(device_info);      // DeviceInfo                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//!          │                                 │
//!          ▼                                 ▼
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │  HardwareState           │   │  DeviceInfo              │
//! │                          │   │                          │
//! │  Arc<HardwareBridge>     │   │  model / version / app   │
//! │  Arc<TerminalShell>      │   │  (read-only after boot)  │
//! └──────────────────────────┘   └──────────────────────────┘
//! ```
//!
//! THREAD SAFETY: the bridge is internally synchronized (atomics + a
//! listener mutex), and DeviceInfo is read-only after initialization, so
//! neither wrapper needs its own lock.

mod device;
mod hardware;

pub use device::DeviceInfo;
pub use hardware::HardwareState;
