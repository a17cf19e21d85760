//! RNG module - secret pattern generation
//!
//! Secrets are drawn as [`CODE_LENGTH`] independent, uniform samples over the
//! symbol alphabet, with replacement: a secret may repeat a symbol up to
//! [`CODE_LENGTH`] times.
//!
//! The random source sits behind the [`RandomSource`] trait so the session can
//! be driven by a deterministic source in tests. [`SimpleRng`] is the default.

use crate::types::{Symbol, CODE_LENGTH, SYMBOL_COUNT};

/// A source of independent, uniformly distributed draws.
pub trait RandomSource {
    /// Draw a value in range [0, max).
    fn next_range(&mut self, max: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current generator state (reseeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    /// Generate random value in range [0, max)
    ///
    /// Takes the high bits of the next value. The low bits of a power-of-two
    /// LCG repeat with a tiny period (bit 0 alternates), so `% max` would
    /// cycle through the alphabet.
    fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// The hidden pattern a round is played against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecretPattern([Symbol; CODE_LENGTH]);

impl SecretPattern {
    pub fn new(symbols: [Symbol; CODE_LENGTH]) -> Self {
        Self(symbols)
    }

    pub fn symbols(&self) -> &[Symbol; CODE_LENGTH] {
        &self.0
    }
}

/// Secret pattern generator
#[derive(Debug, Clone)]
pub struct PatternGenerator<R = SimpleRng> {
    source: R,
}

impl PatternGenerator<SimpleRng> {
    /// Create a generator backed by [`SimpleRng`] with the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> PatternGenerator<R> {
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Draw a fresh secret: one independent uniform sample per position.
    pub fn generate(&mut self) -> SecretPattern {
        SecretPattern(std::array::from_fn(|_| {
            let i = self.source.next_range(SYMBOL_COUNT as u32) as usize;
            Symbol::ALL[i % SYMBOL_COUNT]
        }))
    }
}
