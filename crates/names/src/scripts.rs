//! Cadence lookup scripts for both registries

use crate::config::ContractAddresses;

const FLOWNS_ADDRESS_PLACEHOLDER: &str = "0xFlownsAddress";
const FIND_ADDRESS_PLACEHOLDER: &str = "0xFindAddress";

// flow-name-service-contracts: cadence/scripts/query_domain_info.cdc
const FLOWNS_DOMAIN_INFO: &str = r#"
import Domains from 0xFlownsAddress

pub fun main(nameHash: String): Domains.DomainDetail? {
  let address = Domains.getRecords(nameHash) ?? panic("Domain not exist")
  let account = getAccount(address)
  let collectionCap = account.getCapability<&{Domains.CollectionPublic}>(Domains.CollectionPublicPath)
  let collection = collectionCap.borrow()!
  var detail: Domains.DomainDetail? = nil

  let id = Domains.getDomainId(nameHash)
  if id != nil && !Domains.isDeprecated(nameHash: nameHash, domainId: id!) {
    let domain = collection.borrowDomain(id: id!)
    detail = domain.getDetail()
  }

  return detail
}
"#;

const FIND_PROFILE: &str = r#"
import FIND, Profile from 0xFindAddress

pub fun main(name: String): Profile.UserProfile? {
    return FIND.lookup(name)?.asProfile()
}
"#;

/// Lookup scripts with the contract imports bound to concrete accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryScripts {
    flowns_domain_info: String,
    find_profile: String,
}

impl RegistryScripts {
    pub fn new(addresses: &ContractAddresses) -> Self {
        Self {
            flowns_domain_info: FLOWNS_DOMAIN_INFO
                .replace(FLOWNS_ADDRESS_PLACEHOLDER, &addresses.flowns),
            find_profile: FIND_PROFILE.replace(FIND_ADDRESS_PLACEHOLDER, &addresses.find),
        }
    }

    /// Takes the namehash of a `.fn` name.
    pub fn flowns_domain_info(&self) -> &str {
        &self.flowns_domain_info
    }

    /// Takes the literal `.find` name.
    pub fn find_profile(&self) -> &str {
        &self.find_profile
    }
}
