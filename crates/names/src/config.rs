//! Network presets for the Flowns and FIND contracts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flow network the registries are read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Emulator,
}

impl Network {
    /// Default Flow Access REST endpoint.
    pub fn access_node_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://rest-mainnet.onflow.org",
            Network::Testnet => "https://rest-testnet.onflow.org",
            Network::Emulator => "http://localhost:8888",
        }
    }

    pub fn contract_addresses(&self) -> ContractAddresses {
        match self {
            Network::Mainnet => ContractAddresses::new("0x233eb012d34b0070", "0x097bafa4e0b48eef"),
            Network::Testnet => ContractAddresses::new("0xb05b2abb42335e88", "0x35717efbbce11c74"),
            // Emulator deployments land on the service account.
            Network::Emulator => ContractAddresses::new("0xf8d6e0586b0a20c7", "0xf8d6e0586b0a20c7"),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Emulator => "emulator",
        };
        f.write_str(name)
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "mainnet" | "production" => Ok(Network::Mainnet),
            "testnet" | "staging" => Ok(Network::Testnet),
            "emulator" | "local" | "development" => Ok(Network::Emulator),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

/// Accounts hosting the registry contracts imported by the lookup scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAddresses {
    pub flowns: String,
    pub find: String,
}

impl ContractAddresses {
    pub fn new(flowns: impl Into<String>, find: impl Into<String>) -> Self {
        Self {
            flowns: flowns.into(),
            find: find.into(),
        }
    }
}

impl Default for ContractAddresses {
    fn default() -> Self {
        Network::default().contract_addresses()
    }
}
