//! # Id Source Module
//!
//! Injectable source for the randomized identifiers in the simulation:
//! branch numbers, card numbers, and card security codes. Production code
//! draws from a real RNG; tests supply fixed values so identifiers are
//! deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomized identifiers.
pub trait IdSource {
    /// Branch number for standard and premium branches, in [1001, 9999]
    fn branch_number(&mut self) -> u32;

    /// 16-digit card number
    fn card_number(&mut self) -> u64;

    /// 3-digit security code, zero-padded
    fn security_code(&mut self) -> String;
}

/// RNG-backed identifier source.
pub struct RandomIds<R: Rng = StdRng> {
    rng: R,
}

impl RandomIds<StdRng> {
    /// Identifier source seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible identifier source from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomIds<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IdSource for RandomIds<R> {
    fn branch_number(&mut self) -> u32 {
        self.rng.gen_range(1001..=9999)
    }

    fn card_number(&mut self) -> u64 {
        self.rng.gen_range(1_000_000_000_000_000u64..=9_999_999_999_999_999)
    }

    fn security_code(&mut self) -> String {
        format!("{:03}", self.rng.gen_range(0u16..1000))
    }
}

/// Fixed identifier source for tests: replays the same values on every call.
#[derive(Debug, Clone)]
pub struct FixedIds {
    pub branch_number: u32,
    pub card_number: u64,
    pub security_code: String,
}

impl Default for FixedIds {
    fn default() -> Self {
        Self {
            branch_number: 4242,
            card_number: 4_111_111_111_111_111,
            security_code: "007".to_string(),
        }
    }
}

impl IdSource for FixedIds {
    fn branch_number(&mut self) -> u32 {
        self.branch_number
    }

    fn card_number(&mut self) -> u64 {
        self.card_number
    }

    fn security_code(&mut self) -> String {
        self.security_code.clone()
    }
}
