//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no-std compatible.

use crate::api::config::SpanF32;

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone, PartialEq)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Uniform float in [0, 1). Uses the top 24 bits so every value is exact in f32.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform float in [min, max].
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        (min + (max - min) * self.next_f32()).clamp(min, max)
    }

    /// Uniform float over a config span.
    pub fn span(&mut self, span: SpanF32) -> f32 {
        self.range(span.min, span.max)
    }
}
