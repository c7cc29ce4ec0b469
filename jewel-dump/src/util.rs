use anyhow::{Context, Result};
use jewel_core::{Conqueror, JewelType};

/// Non-empty, trimmed entries of a comma-separated list.
pub fn jewel_list_tokens(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|token| !token.is_empty())
}

/// Resolve a comma-separated jewel list; `all` expands to every family.
pub fn resolve_jewel_types(arg: &str) -> Result<Vec<JewelType>> {
    let mut jewels: Vec<JewelType> = Vec::new();
    for token in jewel_list_tokens(arg) {
        if token.eq_ignore_ascii_case("all") {
            jewels.extend(JewelType::ALL);
            continue;
        }
        let jewel = token
            .parse::<JewelType>()
            .with_context(|| format!("unrecognized jewel type in --jewel-types: {token}"))?;
        jewels.push(jewel);
    }

    jewels.sort();
    jewels.dedup();
    if jewels.is_empty() {
        jewels.extend(JewelType::ALL);
    }
    Ok(jewels)
}

pub fn parse_conquerors(names: &[String]) -> Result<Vec<Conqueror>> {
    names
        .iter()
        .map(|name| {
            name.parse::<Conqueror>()
                .with_context(|| format!("unrecognized conqueror: {name}"))
        })
        .collect()
}
