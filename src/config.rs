//! Storefront configuration

use crate::core::error::Error;
use crate::Result;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Storefront configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory durable state is written to (a leading `~` is expanded)
    pub data_dir: PathBuf,
    /// Storage key the cart is persisted under
    pub cart_storage_key: String,
    /// Storage key the signed-in user is persisted under
    pub user_storage_key: String,
    /// Subtotal at or above which standard shipping is free
    pub free_shipping_threshold: Decimal,
    /// Standard shipping fee below the threshold
    pub standard_shipping_fee: Decimal,
    /// Express shipping fee
    pub express_shipping_fee: Decimal,
    /// Tax rate applied to the subtotal
    pub tax_rate: Decimal,
    /// Simulated latency for mock sign-in calls, in milliseconds
    pub auth_latency_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("~/.babyshop"),
            cart_storage_key: "cart".to_string(),
            user_storage_key: "user".to_string(),
            free_shipping_threshold: Decimal::from(599),
            standard_shipping_fee: Decimal::from(50),
            express_shipping_fee: Decimal::from(150),
            tax_rate: Decimal::new(7, 2),
            auth_latency_ms: 0,
        }
    }
}

impl StoreConfig {
    /// Loads the configuration from a JSON file. Missing fields take their
    /// defaults; a missing file yields the default configuration.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: StoreConfig = serde_json::from_str(&contents)?;
        config.validate()?;

        Ok(config)
    }

    /// Checks the monetary settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.cart_storage_key.is_empty() || self.user_storage_key.is_empty() {
            return Err(Error::InvalidData("Storage keys must not be empty".into()));
        }

        if self.cart_storage_key == self.user_storage_key {
            return Err(Error::InvalidData(
                "Cart and user storage keys must differ".into(),
            ));
        }

        let money = [
            ("free_shipping_threshold", self.free_shipping_threshold),
            ("standard_shipping_fee", self.standard_shipping_fee),
            ("express_shipping_fee", self.express_shipping_fee),
            ("tax_rate", self.tax_rate),
        ];

        for (name, value) in money {
            if value.is_sign_negative() {
                return Err(Error::InvalidData(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Data directory with a leading `~` replaced by the home directory
    pub fn expanded_data_dir(&self) -> Result<PathBuf> {
        let path_str = self.data_dir.to_string_lossy();

        if path_str.starts_with('~') {
            let home = dirs::home_dir()
                .ok_or_else(|| Error::Other("Could not determine home directory".into()))?;

            let remainder = path_str.strip_prefix("~/").unwrap_or("");
            Ok(home.join(remainder))
        } else {
            Ok(self.data_dir.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.free_shipping_threshold, dec!(599));
        assert_eq!(config.standard_shipping_fee, dec!(50));
        assert_eq!(config.tax_rate, dec!(0.07));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"data_dir": "/tmp/shop", "tax_rate": "0.05"}"#).unwrap();

        let config = StoreConfig::load(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/shop"));
        assert_eq!(config.tax_rate, dec!(0.05));
        assert_eq!(config.cart_storage_key, "cart");
        assert_eq!(config.expanded_data_dir().unwrap(), PathBuf::from("/tmp/shop"));
    }

    #[test]
    fn test_rejects_negative_fee() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"express_shipping_fee": "-1"}"#).unwrap();

        assert!(matches!(
            StoreConfig::load(&path),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_rejects_shared_storage_key() {
        let config = StoreConfig {
            user_storage_key: "cart".into(),
            ..StoreConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
