use membership_names::{
    compute_node, ChainQueryError, ContractAddresses, NameResolver, Network, StubChainQuery,
};
use serde_json::{json, Value};
use std::sync::Arc;

fn resolver(stub: &StubChainQuery) -> NameResolver {
    NameResolver::new(Arc::new(stub.clone()), &ContractAddresses::default())
}

fn alice_domain() -> Value {
    json!({
        "id": "42",
        "owner": "0xA1",
        "name": "alice",
        "nameHash": compute_node("alice.fn"),
        "addresses": {},
        "texts": { "twitter": "@alice" },
        "parentName": "fn",
        "expiredAt": "1767225600.00000000",
        "createdAt": "1672531200.00000000"
    })
}

fn bob_profile() -> Value {
    json!({
        "findName": "bob.find",
        "createdAt": "find",
        "address": "0xB2",
        "name": "Bob",
        "gender": "",
        "description": "builds things",
        "tags": ["flow", "cadence"],
        "avatar": "https://find.xyz/bob.png",
        "links": [
            { "url": "https://x.com/bob", "title": "X", "type": "twitter" }
        ],
        "wallets": [
            { "name": "Flow", "balance": "12.50000000", "accept": "A.1654653399040a61.FlowToken.Vault", "tags": ["flow"] }
        ],
        "following": [],
        "followers": [
            { "follower": "0xC3", "following": "0xB2", "tags": [] }
        ],
        "allowStoringFollowers": true
    })
}

#[tokio::test]
async fn flowns_name_end_to_end() {
    let stub = StubChainQuery::new();
    stub.respond(compute_node("alice.fn"), alice_domain());
    let resolver = resolver(&stub);

    assert_eq!(
        resolver.resolve_name_to_address("alice.fn").await.as_deref(),
        Some("0xA1")
    );

    let profile = resolver.get_name_info("alice.fn").await.expect("resolved");
    assert_eq!(profile.address, "0xA1");
    assert_eq!(profile.domain_name, "alice");
    assert_eq!(profile.name.as_deref(), Some("alice"));
    assert_eq!(profile.avatar, None);
    assert_eq!(profile.twitter_url, None);
    assert_eq!(profile.website_url, None);
    assert_eq!(profile.tags, None);

    // FIND never sees a `.fn` name.
    assert!(stub
        .calls()
        .iter()
        .all(|call| call.args[0].value == compute_node("alice.fn")));
}

#[tokio::test]
async fn find_name_end_to_end() {
    let stub = StubChainQuery::new();
    stub.respond("bob.find", bob_profile());
    let resolver = resolver(&stub);

    let profile = resolver.get_name_info("bob.find").await.expect("resolved");
    assert_eq!(profile.address, "0xB2");
    assert_eq!(profile.domain_name, "bob.find");
    assert_eq!(profile.name.as_deref(), Some("Bob"));
    assert_eq!(profile.twitter_url.as_deref(), Some("https://x.com/bob"));
    assert_eq!(profile.website_url, None);
    assert_eq!(profile.description.as_deref(), Some("builds things"));
    assert_eq!(
        profile.tags,
        Some(vec!["flow".to_string(), "cadence".to_string()])
    );

    assert_eq!(
        resolver.resolve_name_to_address("bob.find").await.as_deref(),
        Some("0xB2")
    );
}

#[tokio::test]
async fn failing_flowns_side_does_not_discard_find() {
    let stub = StubChainQuery::new();
    stub.respond("bob.find", bob_profile());
    stub.fail(
        compute_node("bob.find"),
        ChainQueryError::Transport("access node unavailable".into()),
    );
    let resolver = resolver(&stub);

    let info = resolver.lookup_raw_infos_by_name("bob.find").await;
    assert!(info.flowns.is_none());
    assert_eq!(info.find.expect("find side kept").address, "0xB2");

    // Only the FIND query went out.
    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].args[0].value, "bob.find");
}

#[tokio::test]
async fn unknown_names_are_not_resolved() {
    let stub = StubChainQuery::new();
    let resolver = resolver(&stub);

    assert!(resolver.get_name_info("nobody.fn").await.is_none());
    assert!(resolver.get_name_info("nobody.find").await.is_none());
    assert!(resolver.resolve_name_to_address("nobody").await.is_none());
    assert!(resolver.get_name_info("").await.is_none());
}

#[tokio::test]
async fn script_failures_surface_as_not_found() {
    let stub = StubChainQuery::new();
    stub.fail(
        compute_node("expired.fn"),
        ChainQueryError::ScriptFailed("panic: Domain not exist".into()),
    );
    let resolver = resolver(&stub);

    assert!(resolver.get_name_info("expired.fn").await.is_none());
}

#[tokio::test]
async fn repeated_resolution_queries_again() {
    let stub = StubChainQuery::new();
    stub.respond("bob.find", bob_profile());
    let resolver = resolver(&stub);

    resolver.get_name_info("bob.find").await;
    resolver.get_name_info("bob.find").await;

    assert_eq!(stub.calls().len(), 2);
}

#[tokio::test]
async fn scripts_follow_configured_network() {
    let stub = StubChainQuery::new();
    let resolver = NameResolver::new(
        Arc::new(stub.clone()),
        &Network::Testnet.contract_addresses(),
    );

    resolver.lookup_raw_infos_by_name("carol.find").await;

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0]
        .script
        .contains("import FIND, Profile from 0x35717efbbce11c74"));
}
