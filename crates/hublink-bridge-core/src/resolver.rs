use crate::domain::NetworkConfig;

/// Picks the network for a connector-reported chain id.
///
/// Disabled entries never resolve, even on an exact chain match. When the
/// chain id is absent or unmatched, the first enabled entry wins; list order
/// is priority order. Returns `None` iff every entry is disabled.
pub fn resolve(networks: &[NetworkConfig], chain_id: Option<u64>) -> Option<&NetworkConfig> {
    if let Some(id) = chain_id {
        if let Some(network) = networks
            .iter()
            .find(|n| !n.disabled && n.chain_id == id)
        {
            return Some(network);
        }
    }
    networks.iter().find(|n| !n.disabled)
}

/// Picks the network a login identity is associated with, by
/// case-insensitive name. Same disabled/ordering rules as [`resolve`], but
/// no fallback: an unknown name resolves to nothing.
pub fn resolve_by_name<'a>(networks: &'a [NetworkConfig], name: &str) -> Option<&'a NetworkConfig> {
    networks
        .iter()
        .find(|n| !n.disabled && n.network.eq_ignore_ascii_case(name))
}
