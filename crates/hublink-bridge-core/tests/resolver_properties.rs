use hublink_bridge_core::{resolver, ContractAddresses, NetworkConfig};

fn contracts() -> ContractAddresses {
    ContractAddresses {
        hub_registry_address: "0x1000000000000000000000000000000000000001"
            .parse()
            .expect("valid address"),
        aut_id_address: "0x1000000000000000000000000000000000000002"
            .parse()
            .expect("valid address"),
        task_registry_address: "0x1000000000000000000000000000000000000003"
            .parse()
            .expect("valid address"),
    }
}

fn network(name: &str, chain_id: u64, disabled: bool) -> NetworkConfig {
    NetworkConfig {
        network: name.to_owned(),
        chain_id,
        disabled,
        contracts: contracts(),
    }
}

#[test]
fn exact_chain_match_wins() {
    let list = vec![
        network("sepolia", 11155111, false),
        network("mainnet", 1, false),
    ];
    let resolved = resolver::resolve(&list, Some(1)).expect("resolves");
    assert_eq!(resolved.network, "mainnet");
}

#[test]
fn missing_chain_id_falls_back_to_first_enabled() {
    let list = vec![
        network("sepolia", 11155111, false),
        network("mainnet", 1, false),
    ];
    let resolved = resolver::resolve(&list, None).expect("resolves");
    assert_eq!(resolved.network, "sepolia");
}

#[test]
fn unmatched_chain_id_falls_back_to_first_enabled() {
    let list = vec![
        network("sepolia", 11155111, false),
        network("mainnet", 1, false),
    ];
    let resolved = resolver::resolve(&list, Some(42161)).expect("resolves");
    assert_eq!(resolved.network, "sepolia");
}

#[test]
fn disabled_entry_is_skipped_even_on_chain_match() {
    let list = vec![network("a", 5, true), network("b", 9, false)];
    let resolved = resolver::resolve(&list, Some(5)).expect("resolves");
    assert_eq!(resolved.network, "b");
}

#[test]
fn all_disabled_resolves_to_none() {
    let list = vec![network("a", 5, true), network("b", 9, true)];
    assert!(resolver::resolve(&list, Some(5)).is_none());
    assert!(resolver::resolve(&list, None).is_none());
}

#[test]
fn empty_list_resolves_to_none() {
    assert!(resolver::resolve(&[], Some(1)).is_none());
}

#[test]
fn list_order_is_priority_order() {
    let list = vec![
        network("first", 7, false),
        network("second", 7, false),
    ];
    let resolved = resolver::resolve(&list, Some(7)).expect("resolves");
    assert_eq!(resolved.network, "first");
}

#[test]
fn by_name_resolution_is_case_insensitive() {
    let list = vec![
        network("sepolia", 11155111, false),
        network("mainnet", 1, false),
    ];
    let resolved = resolver::resolve_by_name(&list, "MainNet").expect("resolves");
    assert_eq!(resolved.chain_id, 1);
}

#[test]
fn by_name_resolution_skips_disabled_and_has_no_fallback() {
    let list = vec![network("sepolia", 11155111, true), network("mainnet", 1, false)];
    assert!(resolver::resolve_by_name(&list, "sepolia").is_none());
    assert!(resolver::resolve_by_name(&list, "goerli").is_none());
}
