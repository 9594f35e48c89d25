//! Reviewer selection.
//!
//! Pure sampling over an already filtered candidate list. Knows nothing
//! about teams, PRs or the store.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Draws `min(n, |candidates|)` distinct ids uniformly at random, without
/// replacement. Repeated ids in `candidates` count once.
pub fn pick<R: Rng + ?Sized>(candidates: &[String], n: usize, rng: &mut R) -> Vec<String> {
    let mut pool: Vec<&String> = candidates.iter().collect();
    pool.sort();
    pool.dedup();

    pool.choose_multiple(rng, n).map(|id| (*id).clone()).collect()
}

/// Source of reviewer picks handed to the assignment engine.
///
/// Implementations are shared across concurrent requests.
pub trait ReviewerPicker: Send + Sync {
    fn pick(&self, candidates: &[String], n: usize) -> Vec<String>;

    fn pick_one(&self, candidates: &[String]) -> Option<String> {
        self.pick(candidates, 1).into_iter().next()
    }
}

/// Thread-local generator per call, nothing shared between requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl ReviewerPicker for RandomPicker {
    fn pick(&self, candidates: &[String], n: usize) -> Vec<String> {
        pick(candidates, n, &mut rand::thread_rng())
    }
}

/// Reproducible picks from a fixed seed.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        SeededPicker {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ReviewerPicker for SeededPicker {
    fn pick(&self, candidates: &[String], n: usize) -> Vec<String> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        pick(candidates, n, &mut *rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn picks_min_of_n_and_pool_size() {
        let picker = SeededPicker::new(7);
        let pool = ids(&["u1", "u2", "u3", "u4"]);

        assert_eq!(picker.pick(&pool, 2).len(), 2);
        assert_eq!(picker.pick(&pool, 4).len(), 4);
        assert_eq!(picker.pick(&pool, 10).len(), 4);
        assert!(picker.pick(&pool, 0).is_empty());
        assert!(picker.pick(&[], 2).is_empty());
    }

    #[test]
    fn result_is_a_duplicate_free_subset() {
        let picker = RandomPicker;
        let pool = ids(&["a", "b", "c", "d", "e"]);
        let allowed: HashSet<_> = pool.iter().cloned().collect();

        for _ in 0..200 {
            let picked = picker.pick(&pool, 3);
            let unique: HashSet<_> = picked.iter().cloned().collect();
            assert_eq!(unique.len(), picked.len());
            assert!(unique.is_subset(&allowed));
        }
    }

    #[test]
    fn repeated_candidates_count_once() {
        let picker = SeededPicker::new(1);
        let pool = ids(&["u2", "u2", "u2", "u3"]);

        let mut picked = picker.pick(&pool, 3);
        picked.sort();
        assert_eq!(picked, ids(&["u2", "u3"]));
    }

    #[test]
    fn pick_one_on_empty_pool_is_none() {
        assert_eq!(RandomPicker.pick_one(&[]), None);
        assert_eq!(RandomPicker.pick_one(&ids(&["only"])), Some("only".to_string()));
    }

    #[test]
    fn same_seed_same_picks() {
        let pool = ids(&["u1", "u2", "u3", "u4", "u5", "u6"]);
        let a = SeededPicker::new(42);
        let b = SeededPicker::new(42);

        for _ in 0..10 {
            assert_eq!(a.pick(&pool, 2), b.pick(&pool, 2));
        }
    }

    #[test]
    fn every_candidate_gets_picked_eventually() {
        let pool = ids(&["u1", "u2", "u3", "u4"]);
        let picker = SeededPicker::new(3);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            seen.extend(picker.pick(&pool, 1));
        }
        assert_eq!(seen.len(), pool.len());
    }
}
