//! Nosh daemon configuration
//!
//! Configuration lives in a TOML file (default `/etc/nosh/config.toml`).
//! Every field has a serde default so a missing or partial file still yields
//! a runnable daemon; a missing file falls back to defaults entirely.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Default system configuration path
pub const SYSTEM_CONFIG_PATH: &str = "/etc/nosh/config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NoshConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub orders: OrderSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSettings {
    /// Sales tax rate applied to order subtotals
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    /// ETA window quoted at order creation (minutes)
    #[serde(default = "default_eta_min")]
    pub eta_min_minutes: u32,
    #[serde(default = "default_eta_max")]
    pub eta_max_minutes: u32,
}

impl OrderSettings {
    /// ETA window as an inclusive range, safe to sample from. A config file
    /// carrying an inverted window gets its bounds swapped rather than
    /// aborting order creation.
    pub fn eta_window(&self) -> std::ops::RangeInclusive<u32> {
        let lo = self.eta_min_minutes.min(self.eta_max_minutes);
        let hi = self.eta_min_minutes.max(self.eta_max_minutes);
        lo..=hi
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_tax_rate() -> f64 {
    0.0875 // 8.75%
}

fn default_eta_min() -> u32 {
    30
}

fn default_eta_max() -> u32 {
    60
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for OrderSettings {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            eta_min_minutes: default_eta_min(),
            eta_max_minutes: default_eta_max(),
        }
    }
}

impl NoshConfig {
    /// Load from the given path, falling back to defaults when the file is
    /// absent or unreadable. Invalid TOML is reported but never fatal.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Invalid config at {}: {} (using defaults)", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Load from the system path
    pub fn load() -> Self {
        Self::load_from(Path::new(SYSTEM_CONFIG_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_sane() {
        let config = NoshConfig::default();
        assert_eq!(config.server.bind_addr, "127.0.0.1:8000");
        assert!((config.orders.tax_rate - 0.0875).abs() < 1e-9);
        assert_eq!(config.orders.eta_min_minutes, 30);
        assert_eq!(config.orders.eta_max_minutes, 60);
    }

    #[test]
    fn inverted_eta_window_swaps_bounds() {
        let settings = OrderSettings {
            eta_min_minutes: 60,
            eta_max_minutes: 30,
            ..OrderSettings::default()
        };
        assert_eq!(settings.eta_window(), 30..=60);
        assert_eq!(OrderSettings::default().eta_window(), 30..=60);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = NoshConfig::load_from(Path::new("/nonexistent/nosh.toml"));
        assert_eq!(config.server.bind_addr, "127.0.0.1:8000");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind_addr = \"0.0.0.0:9000\"").unwrap();

        let config = NoshConfig::load_from(file.path());
        assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
        // Untouched sections keep their defaults
        assert_eq!(config.orders.eta_min_minutes, 30);
    }
}
