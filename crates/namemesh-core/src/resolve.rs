//! Weighted conflict resolution.
//!
//! Several independent sources may claim the same name for different
//! public keys. Ranking here is a client-side presentational ordering:
//! trust is source-local and relative, and nothing in this module decides
//! ownership for the network. Ties between equal weights are unordered
//! (the sort is deliberately non-stable).

use std::collections::BTreeMap;

use crate::types::{NameClaim, NameListEntry};

/// Identifier of the source a claim came from
pub type SourceId = String;

/// Order competing claims for one name by descending trust weight.
///
/// The winning claim for display purposes is the first element.
#[must_use]
pub fn resolve(mut claims: Vec<(SourceId, NameClaim)>) -> Vec<(SourceId, NameClaim)> {
    claims.sort_unstable_by(|a, b| b.1.weight.total_cmp(&a.1.weight));
    claims
}

/// The highest-weight claim, without ordering the rest
#[must_use]
pub fn winner(claims: &[(SourceId, NameClaim)]) -> Option<&(SourceId, NameClaim)> {
    claims.iter().max_by(|a, b| a.1.weight.total_cmp(&b.1.weight))
}

/// Order the global browse listing by descending weight.
///
/// Same comparator as [`resolve`]; names with equal weights land in
/// unspecified relative order.
#[must_use]
pub fn order_names(names: BTreeMap<String, NameListEntry>) -> Vec<(String, NameListEntry)> {
    let mut listing: Vec<(String, NameListEntry)> = names.into_iter().collect();
    listing.sort_unstable_by(|a, b| b.1.weight.total_cmp(&a.1.weight));
    listing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(source: &str, weight: f64) -> (SourceId, NameClaim) {
        (
            source.into(),
            NameClaim {
                public_key: format!("pk-{source}"),
                weight,
            },
        )
    }

    #[test]
    fn highest_weight_first() {
        let ranked = resolve(vec![claim("a", 0.3), claim("b", 0.8), claim("c", 0.5)]);
        let order: Vec<_> = ranked.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn tie_winner_is_one_of_the_maxima() {
        let claims = vec![claim("a", 0.9), claim("b", 0.5), claim("c", 0.9)];

        let (winner_id, winner_claim) = winner(&claims).unwrap();
        assert!(winner_id == "a" || winner_id == "c");
        assert!((winner_claim.weight - 0.9).abs() < f64::EPSILON);

        let ranked = resolve(claims);
        assert!((ranked[0].1.weight - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_claims_have_no_winner() {
        assert!(winner(&[]).is_none());
        assert!(resolve(vec![]).is_empty());
    }

    #[test]
    fn browse_listing_sorted_by_weight() {
        let mut names = BTreeMap::new();
        for (name, weight) in [("aaa.nm", 0.4), ("bbb.nm", 0.9), ("ccc.nm", 0.6)] {
            names.insert(
                name.to_string(),
                NameListEntry {
                    public_key: "K".into(),
                    weight,
                    version: 1,
                },
            );
        }

        let listing = order_names(names);
        let order: Vec<_> = listing.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(order, vec!["bbb.nm", "ccc.nm", "aaa.nm"]);
    }
}
