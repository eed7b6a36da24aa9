//! Receiver configuration.
//!
//! Configuration is a TOML document with one table per receiver:
//!
//! ```toml
//! [RX1]
//! FQ = 100025000.0
//! WBRX = "WBRX1"
//! MODULATION = "FM"
//! ```
//!
//! `FQ` is the tuned RF frequency in Hz and `WBRX` names the wideband tuner
//! to attach to; both are required but validated when the receiver is
//! created, so one bad section does not take down its neighbours.
//! `MODULATION` defaults to `FM`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// One receiver section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DdrConfig {
    /// Tuned RF frequency in Hz.
    #[serde(rename = "FQ")]
    pub fq: Option<f64>,

    /// Name of the wideband tuner to attach to.
    #[serde(rename = "WBRX")]
    pub wbrx: Option<String>,

    /// Modulation: `FM`, `WBFM` or `AM`. Defaults to `FM` when absent.
    #[serde(rename = "MODULATION")]
    pub modulation: Option<String>,
}

/// The full configuration: receiver sections keyed by receiver name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Config {
    /// Receiver sections in name order.
    pub receivers: BTreeMap<String, DdrConfig>,
}

impl Config {
    /// Parse a configuration document.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_section() {
        let config = Config::from_toml(
            r#"
            [RX1]
            FQ = 100025000.0
            WBRX = "WBRX1"
            MODULATION = "WBFM"
            "#,
        )
        .unwrap();
        let rx1 = &config.receivers["RX1"];
        assert_eq!(rx1.fq, Some(100_025_000.0));
        assert_eq!(rx1.wbrx.as_deref(), Some("WBRX1"));
        assert_eq!(rx1.modulation.as_deref(), Some("WBFM"));
    }

    #[test]
    fn test_modulation_is_optional() {
        let config = Config::from_toml(
            r#"
            [RX1]
            FQ = 145500000.0
            WBRX = "WBRX1"
            "#,
        )
        .unwrap();
        assert!(config.receivers["RX1"].modulation.is_none());
    }

    #[test]
    fn test_missing_keys_survive_parsing() {
        // Key validation happens at receiver creation, not here.
        let config = Config::from_toml("[RX1]\n").unwrap();
        let rx1 = &config.receivers["RX1"];
        assert!(rx1.fq.is_none());
        assert!(rx1.wbrx.is_none());
    }

    #[test]
    fn test_multiple_sections() {
        let config = Config::from_toml(
            r#"
            [RX1]
            FQ = 100025000.0
            WBRX = "WBRX1"

            [RX2]
            FQ = 100200000.0
            WBRX = "WBRX1"
            MODULATION = "AM"
            "#,
        )
        .unwrap();
        assert_eq!(config.receivers.len(), 2);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(Config::from_toml("[RX1\nFQ = ").is_err());
    }
}
