//! Non-repeating random fact selection.
//!
//! Given the live fact collection and the ids a session has already been
//! shown, picks one fact uniformly at random among those not yet shown. When
//! every fact has been shown (or the seen list only references deleted facts),
//! the seen list is reset and selection restarts from the full collection.
//!
//! The selector is a pure function: it never touches storage. Callers load
//! the facts and the session's seen list, run the selector, and persist the
//! returned seen list back to the session themselves.

use crate::error::{NorrisError, Result};
use crate::fact::Fact;
use rand::Rng;
use rand::seq::SliceRandom;

/// The outcome of one selection: the chosen fact and the seen list to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The fact to display
    pub fact: Fact,
    /// The updated seen list, to be written back to the session
    pub seen_fact_ids: Vec<u64>,
}

/// Selects one fact not yet in `seen_fact_ids`, uniformly at random.
///
/// Ids in `seen_fact_ids` that no longer exist in `facts` (deleted facts)
/// simply drop out of relevance: the remaining set is always computed against
/// the live collection, so stale ids are never dereferenced.
///
/// Exhaustion semantics: when no unseen fact remains, the seen list is reset
/// to empty *before* re-picking, so the returned seen list contains exactly
/// the freshly selected id, never the old list plus one.
///
/// # Errors
///
/// Returns `NorrisError::Exhausted` when `facts` is empty; there is nothing
/// to select and no meaningful seen list to produce.
pub fn select_unseen(
    facts: &[Fact],
    seen_fact_ids: &[u64],
    rng: &mut impl Rng,
) -> Result<Selection> {
    let mut remaining: Vec<&Fact> = facts
        .iter()
        .filter(|fact| !seen_fact_ids.contains(&fact.id))
        .collect();

    let mut seen: Vec<u64> = seen_fact_ids.to_vec();
    if remaining.is_empty() {
        // Everything has been shown (or only stale ids remain): start over.
        seen.clear();
        remaining = facts.iter().collect();
    }

    let fact = remaining
        .choose(rng)
        .copied()
        .cloned()
        .ok_or(NorrisError::Exhausted)?;

    // Duplicates are impossible: the pick was drawn from the unseen remainder.
    seen.push(fact.id);

    Ok(Selection {
        fact,
        seen_fact_ids: seen,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fact(id: u64, text: &str) -> Fact {
        let now = Utc::now();
        Fact {
            id,
            text: text.to_string(),
            created_at: now,
            updated_at: now,
            user_id: None,
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_empty_collection_is_exhausted() {
        let err = select_unseen(&[], &[], &mut rng()).unwrap_err();
        assert!(err.is_exhausted());

        // Stale seen ids do not change the outcome.
        let err = select_unseen(&[], &[1, 2, 3], &mut rng()).unwrap_err();
        assert!(err.is_exhausted());
    }

    #[test]
    fn test_only_unseen_fact_is_selected() {
        let facts = vec![fact(1, "A"), fact(2, "B")];
        let selection = select_unseen(&facts, &[1], &mut rng()).unwrap();
        assert_eq!(selection.fact.id, 2);
        assert_eq!(selection.seen_fact_ids, vec![1, 2]);
    }

    #[test]
    fn test_no_repeats_until_exhaustion() {
        let facts: Vec<Fact> = (1..=5).map(|id| fact(id, "f")).collect();
        let mut rng = rng();
        let mut seen: Vec<u64> = Vec::new();
        let mut returned = std::collections::HashSet::new();

        for round in 1..=facts.len() {
            let selection = select_unseen(&facts, &seen, &mut rng).unwrap();
            assert!(returned.insert(selection.fact.id), "fact repeated");
            seen = selection.seen_fact_ids;
            assert_eq!(seen.len(), round);
        }
        assert_eq!(returned.len(), facts.len());
    }

    #[test]
    fn test_full_seen_set_resets_to_single_id() {
        let facts = vec![fact(1, "A"), fact(2, "B")];
        let selection = select_unseen(&facts, &[1, 2], &mut rng()).unwrap();
        // Reset then re-pick: the new seen list holds exactly the fresh pick.
        assert_eq!(selection.seen_fact_ids.len(), 1);
        assert_eq!(selection.seen_fact_ids[0], selection.fact.id);
        assert!([1, 2].contains(&selection.fact.id));
    }

    #[test]
    fn test_stale_ids_drop_out() {
        // Fact 2 was shown, then deleted. Selection keeps working against the
        // live collection and never dereferences the stale id.
        let facts = vec![fact(1, "A"), fact(3, "C")];
        let selection = select_unseen(&facts, &[2, 1], &mut rng()).unwrap();
        assert_eq!(selection.fact.id, 3);
        assert_eq!(selection.seen_fact_ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_seen_covering_only_stale_ids_resets() {
        // Every seen id refers to a deleted fact: nothing unseen remains by
        // filtering, so the list resets and selection restarts.
        let facts = vec![fact(10, "A")];
        let selection = select_unseen(&facts, &[1, 2, 3], &mut rng()).unwrap();
        assert_eq!(selection.fact.id, 10);
        assert_eq!(selection.seen_fact_ids, vec![10]);
    }

    #[test]
    fn test_single_fact_cycles() {
        let facts = vec![fact(1, "A")];
        let mut rng = rng();
        let first = select_unseen(&facts, &[], &mut rng).unwrap();
        assert_eq!(first.seen_fact_ids, vec![1]);
        let second = select_unseen(&facts, &first.seen_fact_ids, &mut rng).unwrap();
        assert_eq!(second.fact.id, 1);
        assert_eq!(second.seen_fact_ids, vec![1]);
    }

    #[test]
    fn test_selection_is_uniform_over_remaining() {
        // With two candidates and many seeded draws, both must show up.
        let facts = vec![fact(1, "A"), fact(2, "B"), fact(3, "C")];
        let mut hits = std::collections::HashSet::new();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selection = select_unseen(&facts, &[2], &mut rng).unwrap();
            assert_ne!(selection.fact.id, 2);
            hits.insert(selection.fact.id);
        }
        assert_eq!(hits, [1u64, 3u64].into_iter().collect());
    }
}
