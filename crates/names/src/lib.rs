//! Flow Name Resolution
//!
//! This crate resolves human-readable Flow names such as `alice.fn` (Flowns)
//! or `bob.find` (FIND) to an account address and a unified name profile.
//! The two registries are queried concurrently through a read-only
//! [`ChainQuery`] capability, and a failure on one side never discards the
//! other side's result.

pub mod config;
pub mod errors;
pub mod namehash;
pub mod query;
pub mod resolver;
pub mod scripts;
pub mod types;

pub use config::*;
pub use errors::*;
pub use namehash::{compute_node, ROOT_NODE};
pub use query::*;
pub use resolver::{LookupOutcomes, NameResolver, Registry};
pub use scripts::RegistryScripts;
pub use types::*;
