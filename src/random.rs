use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of the bounded draws the heuristics use for synthetic metrics.
///
/// Every `rand::Rng` is a `RandomSource`, so production code passes a
/// `StdRng` and tests can pass a seeded one or a scripted stub.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn int_in(&mut self, low: i64, high: i64) -> i64;

    /// Uniform float in `low..=high`.
    fn float_in(&mut self, low: f64, high: f64) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn int_in(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn float_in(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.gen_range(0..len)
    }
}

/// Per-request generator: reproducible when a seed is configured.
pub fn request_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
