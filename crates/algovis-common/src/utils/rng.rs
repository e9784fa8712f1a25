//! Seeded random value generation.
//!
//! Engines never reach for a hidden global RNG; callers construct a
//! [`ValueSource`] (optionally seeded for reproducible runs) and pass it to
//! the operations that need random data.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Value, ValueKind};

/// Generated integers fall in `0..1000`.
const INT_RANGE: std::ops::Range<i64> = 0..1000;
/// Generated floats fall in `0..100` with two-decimal granularity.
const FLOAT_STEPS: u32 = 10_000;
/// Generated text is 3 to 7 lowercase letters.
const TEXT_LEN_RANGE: std::ops::RangeInclusive<usize> = 3..=7;

/// A source of random [`Value`]s backed by an explicitly seeded RNG.
pub struct ValueSource {
    rng: StdRng,
}

impl ValueSource {
    /// Creates a source seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a source with a fixed seed for reproducible output.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source from an optional seed.
    #[must_use]
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Generates one random value of the given kind.
    pub fn next_value(&mut self, kind: ValueKind) -> Value {
        match kind {
            ValueKind::Int => Value::Int(self.rng.gen_range(INT_RANGE)),
            ValueKind::Float => {
                let steps = self.rng.gen_range(0..FLOAT_STEPS);
                Value::Float(f64::from(steps) / 100.0)
            }
            ValueKind::Char => Value::Char(self.rng.gen_range(b'A'..=b'Z') as char),
            ValueKind::Text => {
                let len = self.rng.gen_range(TEXT_LEN_RANGE);
                let text: String = (0..len)
                    .map(|_| self.rng.gen_range(b'a'..=b'z') as char)
                    .collect();
                Value::Text(text)
            }
        }
    }

    /// Generates `count` random values of the given kind.
    pub fn values(&mut self, kind: ValueKind, count: usize) -> Vec<Value> {
        (0..count).map(|_| self.next_value(kind)).collect()
    }
}

impl Default for ValueSource {
    fn default() -> Self {
        Self::new()
    }
}
