// Player name canonicalization.
//
// The merge keys on exact names; this is used for search and is available
// for fuzzy matching between sources that spell names differently.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize a player name: lowercase, NFKD-decompose, keep only ASCII
/// lowercase letters and whitespace, then collapse whitespace runs.
///
/// `"  Luka Dončić "` becomes `"luka doncic"`. Never fails; punctuation-only
/// input yields an empty string.
pub fn normalize_name(name: &str) -> String {
    let kept: String = name
        .to_lowercase()
        .nfkd()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `name` contains `query` once both are normalized. An empty query
/// matches everything.
pub fn name_matches(name: &str, query: &str) -> bool {
    let query = normalize_name(query);
    query.is_empty() || normalize_name(name).contains(&query)
}
