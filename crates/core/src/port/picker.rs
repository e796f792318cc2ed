// Picker Port (for deterministic selection in tests)

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Chooses one index out of a non-empty candidate list
pub trait Picker: Send + Sync {
    /// Return an index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Uniform random picker backed by the thread RNG (production)
pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform random picker with a fixed seed
///
/// Two pickers built from the same seed produce the same sequence.
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Picker for SeededPicker {
    fn pick_index(&self, len: usize) -> usize {
        // A poisoned lock only means another thread panicked mid-pick;
        // the RNG state is still usable.
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(0..len)
    }
}

/// Cycles through candidates in order: 0, 1, 2, ... wrapping by `len`
#[derive(Default)]
pub struct RoundRobinPicker {
    cursor: AtomicUsize,
}

impl RoundRobinPicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Picker for RoundRobinPicker {
    fn pick_index(&self, len: usize) -> usize {
        self.cursor.fetch_add(1, Ordering::Relaxed) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picker_stays_in_range() {
        let picker = RandomPicker;
        for len in 1..20 {
            assert!(picker.pick_index(len) < len);
        }
    }

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let a = SeededPicker::new(42);
        let b = SeededPicker::new(42);

        let seq_a: Vec<_> = (0..32).map(|_| a.pick_index(18)).collect();
        let seq_b: Vec<_> = (0..32).map(|_| b.pick_index(18)).collect();

        assert_eq!(seq_a, seq_b);
        assert!(seq_a.iter().all(|&i| i < 18));
    }

    #[test]
    fn test_round_robin_cycles() {
        let picker = RoundRobinPicker::new();
        let picks: Vec<_> = (0..7).map(|_| picker.pick_index(3)).collect();
        assert_eq!(picks, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_single_candidate_always_index_zero() {
        let picker = SeededPicker::new(7);
        for _ in 0..10 {
            assert_eq!(picker.pick_index(1), 0);
        }
    }
}
