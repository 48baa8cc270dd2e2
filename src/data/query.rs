use super::model::Pokedex;

// ---------------------------------------------------------------------------
// Name search: narrow the table to candidate rows
// ---------------------------------------------------------------------------

/// Return indices of records whose name contains `query`, ignoring case.
///
/// Indices are in table order. An empty result is a normal outcome; the caller
/// decides how to present it. The caller picks one of the returned indices and
/// resolves it with [`Pokedex::get`].
pub fn search_by_name(dex: &Pokedex, query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    let hits: Vec<usize> = dex
        .iter()
        .enumerate()
        .filter(|(_, r)| r.name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect();

    if hits.is_empty() {
        log::debug!("no records match {query:?}");
    }
    hits
}

/// Return indices of records with the given primary type, in table order.
pub fn members_of_type(dex: &Pokedex, primary_type: &str) -> Vec<usize> {
    dex.iter()
        .enumerate()
        .filter(|(_, r)| r.primary_type == primary_type)
        .map(|(i, _)| i)
        .collect()
}

/// Distinct primary types in order of first appearance.
pub fn primary_types(dex: &Pokedex) -> Vec<String> {
    distinct(dex.iter().map(|r| r.primary_type.as_str()))
}

/// Distinct secondary types (including the "None" placeholder) in order of
/// first appearance.
pub fn secondary_types(dex: &Pokedex) -> Vec<String> {
    distinct(dex.iter().map(|r| r.secondary_type.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for v in values {
        if !seen.iter().any(|s| s == v) {
            seen.push(v.to_string());
        }
    }
    seen
}
