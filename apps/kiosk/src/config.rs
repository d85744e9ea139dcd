//! # Kiosk Configuration
//!
//! Runtime configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TALLY_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup; the kiosk runs one command
//! and exits, so there is nothing to hot-reload.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::ProjectDirs;

use tally_core::Money;
use tally_store::CART_SLOT;

/// Kiosk configuration.
#[derive(Debug, Clone)]
pub struct KioskConfig {
    /// Flat shipping fee added to every order at checkout.
    /// Default: $15.00
    pub shipping_fee: Money,

    /// Directory the cart slot file lives in.
    /// `None` means the platform app data directory.
    pub data_dir: Option<PathBuf>,

    /// Slot key the cart is persisted under.
    pub slot: String,
}

impl Default for KioskConfig {
    fn default() -> Self {
        KioskConfig {
            shipping_fee: Money::from_cents(1500),
            data_dir: None,
            slot: CART_SLOT.to_string(),
        }
    }
}

impl KioskConfig {
    /// Creates a `KioskConfig` from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TALLY_SHIPPING_FEE`: Override the flat shipping fee (e.g. "4.50")
    /// - `TALLY_DATA_DIR`: Override the cart data directory
    /// - `TALLY_CART_SLOT`: Override the slot key
    ///
    /// Unparsable or negative fee values are ignored and the default kept.
    pub fn from_env() -> Self {
        let mut config = KioskConfig::default();

        if let Ok(raw) = std::env::var("TALLY_SHIPPING_FEE") {
            if let Ok(fee) = raw.parse::<Money>() {
                if !fee.is_negative() {
                    config.shipping_fee = fee;
                }
            }
        }

        if let Ok(dir) = std::env::var("TALLY_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Ok(slot) = std::env::var("TALLY_CART_SLOT") {
            if !slot.trim().is_empty() {
                config.slot = slot;
            }
        }

        config
    }

    /// Resolves the directory the cart file lives in.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.tally.cart/`
    /// - **Windows**: `%APPDATA%\tally\cart\data\`
    /// - **Linux**: `~/.local/share/cart/`
    ///
    /// The directory itself is created lazily on the first write.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        let proj_dirs = ProjectDirs::from("com", "tally", "cart")
            .ok_or_else(|| anyhow!("could not determine app data directory"))?;

        Ok(proj_dirs.data_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KioskConfig::default();
        assert_eq!(config.shipping_fee, Money::from_cents(1500)); // $15.00
        assert_eq!(config.slot, "cartItems");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = KioskConfig {
            data_dir: Some(PathBuf::from("/tmp/tally-test")),
            ..KioskConfig::default()
        };
        assert_eq!(
            config.resolve_data_dir().unwrap(),
            PathBuf::from("/tmp/tally-test")
        );
    }
}
