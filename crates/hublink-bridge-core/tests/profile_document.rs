use hublink_bridge_core::{Identity, ProfileParseError};
use serde_json::json;

fn full_document() -> serde_json::Value {
    json!({
        "name": "jabyl",
        "properties": {
            "address": "0x4000000000000000000000000000000000000001",
            "network": { "network": "mainnet", "chainId": 1 },
            "hubs": [
                {
                    "name": "genesis-hub",
                    "properties": {
                        "address": "0x4000000000000000000000000000000000000002",
                        "metadataUri": "ipfs://Qm123"
                    }
                }
            ]
        }
    })
}

#[test]
fn parses_a_complete_document() {
    let identity = Identity::parse(&full_document()).expect("valid document");
    assert_eq!(identity.name, "jabyl");
    let network = identity.network.expect("network association");
    assert_eq!(network.network, "mainnet");
    assert_eq!(network.chain_id, Some(1));
    assert_eq!(identity.hubs.len(), 1);
    assert_eq!(identity.hubs[0].name, "genesis-hub");
    assert_eq!(identity.hubs[0].metadata_uri.as_deref(), Some("ipfs://Qm123"));
}

#[test]
fn network_and_hubs_are_optional() {
    let doc = json!({
        "name": "solo",
        "properties": { "address": "0x4000000000000000000000000000000000000001" }
    });
    let identity = Identity::parse(&doc).expect("valid document");
    assert!(identity.network.is_none());
    assert!(identity.hubs.is_empty());
}

#[test]
fn null_network_reads_as_absent() {
    let doc = json!({
        "name": "solo",
        "properties": {
            "address": "0x4000000000000000000000000000000000000001",
            "network": null
        }
    });
    let identity = Identity::parse(&doc).expect("valid document");
    assert!(identity.network.is_none());
}

#[test]
fn missing_name_fails_closed() {
    let doc = json!({
        "properties": { "address": "0x4000000000000000000000000000000000000001" }
    });
    let err = Identity::parse(&doc).expect_err("must fail");
    assert!(matches!(err, ProfileParseError::MissingField("name")));
}

#[test]
fn malformed_address_fails_closed() {
    let doc = json!({
        "name": "bad",
        "properties": { "address": "not-an-address" }
    });
    let err = Identity::parse(&doc).expect_err("must fail");
    assert!(matches!(err, ProfileParseError::InvalidField("properties.address", _)));
}

#[test]
fn hub_entry_without_address_fails_closed() {
    let doc = json!({
        "name": "bad-hub",
        "properties": {
            "address": "0x4000000000000000000000000000000000000001",
            "hubs": [ { "name": "orphan", "properties": {} } ]
        }
    });
    let err = Identity::parse(&doc).expect_err("must fail");
    assert!(matches!(
        err,
        ProfileParseError::MissingField("hubs[].properties.address")
    ));
}
