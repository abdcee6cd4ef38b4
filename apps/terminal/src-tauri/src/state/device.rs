//! # Device Identification
//!
//! Static environment data describing this terminal, collected once at
//! startup and managed read-only. A real deployment reads the fleet asset
//! tag here; the simulation substitutes the hostname.

use serde::{Deserialize, Serialize};

/// Read-only device identification handed to the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// Device model. Hostname, or the `SUPAWAVE_DEVICE_MODEL` override.
    pub model: String,

    /// Platform description (OS and architecture).
    pub version: String,

    /// Terminal application identifier.
    pub app: String,
}

impl DeviceInfo {
    /// Collects device identification from the environment.
    pub fn collect() -> Self {
        let model = std::env::var("SUPAWAVE_DEVICE_MODEL")
            .unwrap_or_else(|_| gethostname::gethostname().to_string_lossy().into_owned());

        DeviceInfo {
            model,
            version: format!("{} {}", std::env::consts::OS, std::env::consts::ARCH),
            app: format!("SupaWave POS v{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survives_hostile_environment_values() {
        // Models with quotes and backslashes must round-trip intact; the
        // structured encoder owns all escaping.
        let info = DeviceInfo {
            model: r#"till-7 "front" C:\registers"#.to_string(),
            version: "linux x86_64".to_string(),
            app: "SupaWave POS v0.1.0".to_string(),
        };

        let json = serde_json::to_string(&info).expect("serializes");
        let parsed: DeviceInfo = serde_json::from_str(&json).expect("parses back");

        assert_eq!(parsed.model, info.model);
        assert_eq!(parsed.version, info.version);
        assert_eq!(parsed.app, info.app);
    }

    #[test]
    fn collect_names_the_app() {
        let info = DeviceInfo::collect();
        assert!(info.app.starts_with("SupaWave POS v"));
        assert!(!info.version.is_empty());
    }
}
