//! Seeded pseudo-random sequence for reproducible renders.
//!
//! Each draw is `frac(sin(state) * 10000)` and then advances `state` by one,
//! so the seed behaves as a draw counter. Saved seeds depend on this exact
//! formula; do not substitute a different generator.

/// Owned PRNG state for a single render call.
#[derive(Debug, Clone, PartialEq)]
pub struct SeededRng {
    state: f64,
}

impl SeededRng {
    /// Start a sequence at `seed`. Non-finite seeds start at zero.
    pub fn new(seed: f64) -> Self {
        Self {
            state: if seed.is_finite() { seed } else { 0.0 },
        }
    }

    /// Current counter value (the seed for the next draw).
    pub fn state(&self) -> f64 {
        self.state
    }

    /// Next uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let x = self.state.sin() * 10000.0;
        self.state += 1.0;
        let frac = x - x.floor();
        // x - floor(x) rounds up to 1.0 for tiny negative x
        if frac >= 1.0 {
            0.0
        } else {
            frac
        }
    }

    /// Next value in `[min, max)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// A fresh seed for callers that did not supply one.
pub fn random_seed() -> f64 {
    rand::random::<f64>()
}
