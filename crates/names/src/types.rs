//! Types for Flow name resolution

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flowns `Domains.DomainDetail` as returned by the domain info script.
///
/// Cadence numbers (`UInt64`, `UFix64`) are kept as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlownsDomain {
    pub id: String,
    /// Address of the owner account.
    pub owner: String,
    pub name: String,
    pub name_hash: String,
    /// Coin type to address records.
    pub addresses: BTreeMap<u64, String>,
    pub texts: BTreeMap<String, String>,
    pub parent_name: String,
    /// Expiration timestamp.
    pub expired_at: String,
    pub created_at: String,
}

/// FIND `Profile.UserProfile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindProfile {
    pub find_name: String,
    pub created_at: String,
    pub address: String,
    pub name: String,
    pub gender: String,
    pub description: String,
    pub tags: Vec<String>,
    pub avatar: String,
    pub links: Vec<FindLink>,
    pub wallets: Vec<FindWallet>,
    pub following: Vec<FindFriendStatus>,
    pub followers: Vec<FindFriendStatus>,
    pub allow_storing_followers: bool,
}

impl FindProfile {
    /// URL of the first link of the given type (`"twitter"`, `"globe"`, ...).
    pub fn link_url(&self, kind: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.kind == kind)
            .map(|link| link.url.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindLink {
    pub url: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindWallet {
    pub name: String,
    pub balance: String,
    pub accept: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindFriendStatus {
    pub follower: String,
    pub following: String,
    pub tags: Vec<String>,
}

/// Snapshot of both registry lookups for one name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNameInfo {
    pub flowns: Option<FlownsDomain>,
    pub find: Option<FindProfile>,
}

impl RawNameInfo {
    /// True when neither registry knows the name.
    pub fn is_empty(&self) -> bool {
        self.flowns.is_none() && self.find.is_none()
    }

    /// Owner address, preferring Flowns over FIND.
    pub fn address(&self) -> Option<&str> {
        self.flowns
            .as_ref()
            .map(|domain| domain.owner.as_str())
            .or_else(|| self.find.as_ref().map(|profile| profile.address.as_str()))
    }

    /// Merge both sides into a profile, preferring FIND wherever it has a field.
    pub fn to_profile(&self) -> Option<AbstractNameProfile> {
        let (address, domain_name) = match (&self.find, &self.flowns) {
            (Some(find), _) => (find.address.clone(), find.find_name.clone()),
            (None, Some(flowns)) => (flowns.owner.clone(), flowns.name.clone()),
            (None, None) => return None,
        };

        let find = self.find.as_ref();
        let name = find
            .map(|profile| profile.name.clone())
            .or_else(|| self.flowns.as_ref().map(|domain| domain.name.clone()));

        Some(AbstractNameProfile {
            address,
            domain_name,
            name,
            avatar: find.map(|profile| profile.avatar.clone()),
            twitter_url: find.and_then(|profile| profile.link_url("twitter").map(str::to_owned)),
            website_url: find.and_then(|profile| profile.link_url("globe").map(str::to_owned)),
            description: find.map(|profile| profile.description.clone()),
            tags: find.map(|profile| profile.tags.clone()),
        })
    }
}

/// Registry-agnostic identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbstractNameProfile {
    pub address: String,
    pub domain_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
