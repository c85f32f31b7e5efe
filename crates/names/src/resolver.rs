//! Dual-registry name resolution
//!
//! A name is looked up in Flowns when it ends in `.fn` and in FIND when it
//! ends in `.find`. Both lookups run concurrently and each settles on its own,
//! so one registry being down or erroring never hides the other's record.

use crate::config::ContractAddresses;
use crate::errors::*;
use crate::namehash::compute_node;
use crate::query::{CadenceArgument, ChainQuery};
use crate::scripts::RegistryScripts;
use crate::types::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Naming registries known to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Registry {
    Flowns,
    Find,
}

impl Registry {
    /// Suffix of names owned by this registry.
    pub fn suffix(&self) -> &'static str {
        match self {
            Registry::Flowns => ".fn",
            Registry::Find => ".find",
        }
    }

    pub fn owns(&self, name: &str) -> bool {
        name.ends_with(self.suffix())
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Registry::Flowns => f.write_str("flowns"),
            Registry::Find => f.write_str("find"),
        }
    }
}

/// Per-registry outcome of a single name lookup.
#[derive(Debug, Clone)]
pub struct LookupOutcomes {
    pub flowns: Result<FlownsDomain>,
    pub find: Result<FindProfile>,
}

impl LookupOutcomes {
    /// Drop the failure reasons, keeping only the records that resolved.
    pub fn into_raw_info(self) -> RawNameInfo {
        RawNameInfo {
            flowns: self.flowns.ok(),
            find: self.find.ok(),
        }
    }
}

/// Resolves names against Flowns and FIND through a [`ChainQuery`].
///
/// Holds no mutable state: every call issues fresh queries.
#[derive(Clone)]
pub struct NameResolver {
    query: Arc<dyn ChainQuery>,
    scripts: Arc<RegistryScripts>,
}

impl NameResolver {
    pub fn new(query: Arc<dyn ChainQuery>, addresses: &ContractAddresses) -> Self {
        Self {
            query,
            scripts: Arc::new(RegistryScripts::new(addresses)),
        }
    }

    /// Resolve a name to an account address.
    ///
    /// Flowns ownership takes precedence over the FIND profile address.
    pub async fn resolve_name_to_address(&self, name: &str) -> Option<String> {
        self.lookup_raw_infos_by_name(name)
            .await
            .address()
            .map(str::to_owned)
    }

    /// Resolve a name to its unified profile, `None` when neither registry
    /// knows it.
    pub async fn get_name_info(&self, name: &str) -> Option<AbstractNameProfile> {
        self.lookup_raw_infos_by_name(name).await.to_profile()
    }

    /// Look the name up in both registries, keeping whichever sides resolved.
    pub async fn lookup_raw_infos_by_name(&self, name: &str) -> RawNameInfo {
        let outcomes = self.lookup_outcomes(name).await;

        log_failure(Registry::Flowns, name, outcomes.flowns.as_ref().err());
        log_failure(Registry::Find, name, outcomes.find.as_ref().err());

        outcomes.into_raw_info()
    }

    /// Look the name up in both registries and report each side's outcome.
    pub async fn lookup_outcomes(&self, name: &str) -> LookupOutcomes {
        let (flowns, find) = tokio::join!(self.lookup_flowns(name), self.lookup_find(name));
        LookupOutcomes { flowns, find }
    }

    /// Fetch the Flowns domain detail for a `.fn` name.
    pub async fn lookup_flowns(&self, name: &str) -> Result<FlownsDomain> {
        ensure_owned(Registry::Flowns, name)?;

        let name_hash = compute_node(name);
        debug!(name, %name_hash, "querying flowns domain");

        let value = self
            .query
            .execute_script(
                self.scripts.flowns_domain_info(),
                &[CadenceArgument::string(name_hash)],
            )
            .await?;

        decode_record(name, value)
    }

    /// Fetch the FIND user profile for a `.find` name.
    pub async fn lookup_find(&self, name: &str) -> Result<FindProfile> {
        ensure_owned(Registry::Find, name)?;

        debug!(name, "querying find profile");

        let value = self
            .query
            .execute_script(
                self.scripts.find_profile(),
                &[CadenceArgument::string(name)],
            )
            .await?;

        decode_record(name, value)
    }
}

impl fmt::Debug for NameResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameResolver")
            .field("scripts", &self.scripts)
            .finish_non_exhaustive()
    }
}

fn ensure_owned(registry: Registry, name: &str) -> Result<()> {
    if registry.owns(name) {
        Ok(())
    } else {
        Err(NameLookupError::InapplicableSuffix {
            name: name.to_owned(),
            suffix: registry.suffix(),
        })
    }
}

fn decode_record<T: DeserializeOwned>(name: &str, value: Value) -> Result<T> {
    if value.is_null() {
        return Err(NameLookupError::NotRegistered {
            name: name.to_owned(),
        });
    }
    Ok(serde_json::from_value(value)?)
}

fn log_failure(registry: Registry, name: &str, error: Option<&NameLookupError>) {
    match error {
        None => {}
        Some(err) if err.is_inapplicable() => trace!(%registry, name, "lookup not applicable"),
        Some(NameLookupError::NotRegistered { .. }) => {
            debug!(%registry, name, "name not registered")
        }
        Some(err) => warn!(%registry, name, error = %err, "registry lookup failed"),
    }
}
