//! # Device Commands
//!
//! Transport command for device identification.

use tauri::State;
use tracing::debug;

use crate::state::DeviceInfo;

/// Returns the terminal's device identification.
///
/// ## Returns
/// `{ model, version, app }`, collected once at startup. Serialized by
/// serde, so environment values containing quotes or backslashes arrive
/// intact in the storefront.
#[tauri::command]
pub fn get_device_info(info: State<'_, DeviceInfo>) -> DeviceInfo {
    debug!("get_device_info command");
    (*info).clone()
}
