//! Chromosome name aliasing between "chr"-prefixed and bare naming schemes.

use std::collections::HashSet;

/// Candidate contig names for a chromosome, in lookup order.
///
/// The literal name comes first, then the "chr"-prefixed form, then (for names
/// that already carry the prefix) the bare form.
#[must_use]
pub fn alias_candidates(name: &str) -> Vec<String> {
    let mut candidates = Vec::with_capacity(3);
    candidates.push(name.to_string());
    candidates.push(format!("chr{name}"));
    if let Some(stripped) = name.strip_prefix("chr") {
        candidates.push(stripped.to_string());
    }
    candidates
}

/// Returns the first alias of `name` known to the contig set.
#[must_use]
pub fn resolve_contig<'a>(name: &str, contigs: &'a HashSet<String>) -> Option<&'a str> {
    alias_candidates(name)
        .iter()
        .find_map(|candidate| contigs.get(candidate))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contigs(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn candidate_order() {
        assert_eq!(alias_candidates("7"), vec!["7", "chr7"]);
        assert_eq!(alias_candidates("chr7"), vec!["chr7", "chrchr7", "7"]);
    }

    #[test]
    fn prefixed_input_resolves_both_schemes() {
        assert_eq!(resolve_contig("chr7", &contigs(&["7", "8"])), Some("7"));
        assert_eq!(resolve_contig("chr7", &contigs(&["chr7"])), Some("chr7"));
    }

    #[test]
    fn bare_input_resolves_prefixed_contig() {
        assert_eq!(resolve_contig("X", &contigs(&["chrX"])), Some("chrX"));
        assert_eq!(resolve_contig("X", &contigs(&["X", "chrX"])), Some("X"));
    }

    #[test]
    fn unknown_chromosome() {
        assert_eq!(resolve_contig("MT", &contigs(&["chrM", "1"])), None);
    }
}
