//! RNG oracle for deterministic random number generation.
//!
//! The core never owns a random source; every draw goes through an injected
//! [`RngOracle`]. Given the same seed and the same sequence of calls, a run is
//! reproducible, which is what makes the probabilistic gating rules testable.

/// Random source consumed by the core.
///
/// Only [`RngOracle::next_u32`] must be implemented; every other draw is derived
/// from it so alternative generators stay consistent with the contract.
pub trait RngOracle {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let roll = u64::from(self.next_u32()) % span;
        (i64::from(min) + roll as i64) as i32
    }

    /// Generate a random value in range [min, max) exclusive.
    fn range_exclusive(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.range_inclusive(min, max - 1)
    }

    /// Uniform float in `[min, max)`.
    fn float_range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }

    /// True with probability `1/n`. `one_in(0)` and `one_in(1)` are always true.
    fn one_in(&mut self, n: u32) -> bool {
        n <= 1 || self.next_u32() % n == 0
    }

    /// True with probability `percent / 100`.
    ///
    /// Common for percentage-based mechanics like the gating rolls.
    fn chance(&mut self, percent: u32) -> bool {
        self.next_u32() % 100 < percent
    }

    /// Picks an index with probability proportional to its weight.
    ///
    /// Returns `None` when every weight is zero (or the slice is empty).
    fn weighted_pick(&mut self, weights: &[u32]) -> Option<usize> {
        let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
        if total == 0 {
            return None;
        }
        let mut roll = u64::from(self.next_u32()) % total;
        for (index, &weight) in weights.iter().enumerate() {
            let weight = u64::from(weight);
            if roll < weight {
                return Some(index);
            }
            roll -= weight;
        }
        None
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG is a family of simple, fast, space-efficient RNGs with excellent
/// statistical quality. This implementation uses PCG-XSH-RR, which produces
/// 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Seeds the generator. The seed is mixed once so nearby seeds diverge immediately.
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.state = Self::pcg_step(rng.state.wrapping_add(seed));
        rng.state = Self::pcg_step(rng.state);
        rng
    }

    /// Advance the PCG state by one step.
    ///
    /// Uses LCG (Linear Congruential Generator) formula:
    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        // XOR upper bits with lower bits, shift right
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;

        // Use upper bits to determine rotation amount
        let rot = (state >> 59) as u32;

        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PcgRng::new(42);
        let mut b = PcgRng::new(42);
        let left: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let right: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_eq!(left, right);
        assert_ne!(PcgRng::new(43).next_u32(), PcgRng::new(42).next_u32());
    }

    #[test]
    fn ranges_respect_bounds() {
        let mut rng = PcgRng::new(7);
        for _ in 0..1_000 {
            let inclusive = rng.range_inclusive(2, 4);
            assert!((2..=4).contains(&inclusive));
            let exclusive = rng.range_exclusive(0, 3);
            assert!((0..3).contains(&exclusive));
            let float = rng.float_range(1.5, 2.5);
            assert!((1.5..2.5).contains(&float));
        }
        assert_eq!(rng.range_inclusive(5, 5), 5);
        assert_eq!(rng.range_exclusive(5, 5), 5);
    }

    #[test]
    fn weighted_pick_skips_zero_weights() {
        let mut rng = PcgRng::new(99);
        for _ in 0..200 {
            assert_eq!(rng.weighted_pick(&[0, 3, 0]), Some(1));
        }
        assert_eq!(rng.weighted_pick(&[0, 0]), None);
        assert_eq!(rng.weighted_pick(&[]), None);
    }

    #[test]
    fn chance_extremes() {
        let mut rng = PcgRng::new(1);
        assert!((0..100).all(|_| rng.chance(100)));
        assert!((0..100).all(|_| !rng.chance(0)));
        assert!(rng.one_in(1));
    }
}
