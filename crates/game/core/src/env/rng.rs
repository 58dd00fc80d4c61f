//! Seedable randomness for entry creation and dice.
//!
//! Randomness is a stateless oracle: `seed → value`. Callers derive one seed per
//! draw with [`compute_seed`], so the same roster seed and nonce always reproduce
//! the same jitter, personality, and rolls.

/// Deterministic random oracle.
pub trait RngOracle: Send + Sync {
    /// Random u32 for `seed`. Same seed, same value.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with `sides` faces (1..=sides).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        (self.next_u32(seed) % sides) + 1
    }

    /// Integer in `[min, max)`; returns `min` when the range is empty.
    fn range_i32(&self, seed: u64, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max as i64 - min as i64) as u64;
        min + (self.next_u32(seed) as u64 % span) as i32
    }

    /// Index in `0..len`; `None` for an empty collection.
    fn pick(&self, seed: u64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.next_u32(seed) as usize % len)
    }
}

/// PCG-XSH-RR: one LCG step followed by an xorshift-and-rotate permutation.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Draw contexts, so one creation can take several independent draws.
pub mod draw {
    pub const SIZE_JITTER: u32 = 0;
    pub const WEIGHT_JITTER: u32 = 1;
    pub const PERSONALITY: u32 = 2;
    pub const DICE: u32 = 3;
}

/// Mixes a base seed, a monotonically increasing nonce, the subject id, and a
/// draw context into one seed (SplitMix64-style avalanche).
pub fn compute_seed(base_seed: u64, nonce: u64, subject: u32, context: u32) -> u64 {
    let mut hash = base_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (subject as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

/// Fixed-output oracle for tests: every draw returns `value`.
#[derive(Clone, Copy, Debug)]
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}
