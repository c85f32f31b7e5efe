//! Layered CLI configuration: optional file, `MEMBERSHIP_*` environment, flags.

use anyhow::{Context, Result};
use config::{Config, File as ConfigFile};
use membership_names::{ContractAddresses, Network};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub network: Network,
    #[serde(default)]
    pub access_node: Option<String>,
    #[serde(default)]
    pub flowns_address: Option<String>,
    #[serde(default)]
    pub find_address: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(ConfigFile::from(path));
        }

        builder = builder.add_source(config::Environment::with_prefix("MEMBERSHIP"));

        builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Command-line flags win over file and environment settings.
    pub fn apply_overrides(&mut self, network: Option<Network>, access_node: Option<String>) {
        if let Some(network) = network {
            self.network = network;
        }
        if access_node.is_some() {
            self.access_node = access_node;
        }
    }

    pub fn access_node_url(&self) -> &str {
        self.access_node
            .as_deref()
            .unwrap_or_else(|| self.network.access_node_url())
    }

    pub fn contract_addresses(&self) -> ContractAddresses {
        let preset = self.network.contract_addresses();
        ContractAddresses {
            flowns: self.flowns_address.clone().unwrap_or(preset.flowns),
            find: self.find_address.clone().unwrap_or(preset.find),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp config");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn file_settings_override_network_presets() {
        let file = write_config(
            r#"
network = "testnet"
find_address = "0x0000000000000f1d"
log_level = "debug"
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.access_node_url(), "https://rest-testnet.onflow.org");
        assert_eq!(config.log_level, "debug");

        let addresses = config.contract_addresses();
        assert_eq!(addresses.flowns, "0xb05b2abb42335e88");
        assert_eq!(addresses.find, "0x0000000000000f1d");
    }

    #[test]
    fn flags_win_over_file() {
        let file = write_config("network = \"testnet\"\n");

        let mut config = AppConfig::load(Some(file.path())).unwrap();
        config.apply_overrides(
            Some(Network::Emulator),
            Some("http://127.0.0.1:9999".to_string()),
        );

        assert_eq!(config.network, Network::Emulator);
        assert_eq!(config.access_node_url(), "http://127.0.0.1:9999");
        assert_eq!(config.contract_addresses().find, "0xf8d6e0586b0a20c7");
    }
}
