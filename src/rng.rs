//! This module contains the deterministic random source that drives puzzle
//! generation.
//!
//! [PuzzleRng] is a 32-bit linear congruential generator. It is deliberately
//! simple: the point is not statistical quality but that an identical seed
//! yields an identical, infinite sequence of draws on every platform, which
//! makes generated puzzles reproducible. The state is owned by the value and
//! must be passed explicitly to every function that consumes randomness, so
//! two generation runs cannot interfere with each other.
//!
//! `PuzzleRng` also implements [RngCore] and [SeedableRng], so the same
//! deterministic stream can drive any adapter from the
//! [rand](https://rust-random.github.io/rand/rand/index.html) crate.

use rand::{RngCore, SeedableRng};

const MULTIPLIER: u64 = 1_664_525;
const INCREMENT: u64 = 1_013_904_223;
const STATE_MASK: u64 = 0xffff_ffff;
const MODULUS: f64 = 4_294_967_296.0;

/// A seeded pseudo-random number generator with the recurrence
/// `state = (1664525 * state + 1013904223) mod 2^32`. Two instances created
/// with the same seed produce the same sequence of draws.
///
/// ```
/// use sudoku_engine::rng::PuzzleRng;
///
/// let mut a = PuzzleRng::new(42);
/// let mut b = PuzzleRng::new(42);
///
/// for _ in 0..100 {
///     assert_eq!(a.next_fraction(), b.next_fraction());
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PuzzleRng {
    state: u64
}

impl PuzzleRng {

    /// Creates a new generator from the given seed. The seed is
    /// absolute-valued and clamped to a minimum of 1 before use, so the
    /// seeds 0, 1, and -1 all name the same sequence.
    pub fn new(seed: i64) -> PuzzleRng {
        PuzzleRng {
            state: seed.unsigned_abs().max(1)
        }
    }

    fn step(&mut self) -> u64 {
        self.state = self.state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT) & STATE_MASK;
        self.state
    }

    /// Updates the state and returns it scaled into `[0, 1)`.
    pub fn next_fraction(&mut self) -> f64 {
        self.step() as f64 / MODULUS
    }

    /// Draws an integer from the half-open range `[low, high)`, consuming
    /// exactly one [next_fraction](PuzzleRng::next_fraction) draw:
    /// `floor(next_fraction() * (high - low)) + low`.
    ///
    /// `low` must be less than `high`; debug assertions catch an empty
    /// range.
    pub fn next_int(&mut self, low: usize, high: usize) -> usize {
        debug_assert!(low < high, "empty range [{}, {})", low, high);

        (self.next_fraction() * (high - low) as f64) as usize + low
    }
}

impl RngCore for PuzzleRng {
    fn next_u32(&mut self) -> u32 {
        self.step() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        low | (high << 32)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8])
            -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for PuzzleRng {
    type Seed = [u8; 8];

    fn from_seed(seed: [u8; 8]) -> PuzzleRng {
        PuzzleRng::new(i64::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand::Rng;

    #[test]
    fn recurrence_matches_constants() {
        let mut rng = PuzzleRng::new(1);

        // (1664525 * 1 + 1013904223) mod 2^32 and its successors; state
        // stays below 2^32, so the fractions are exact in an f64.
        assert_eq!(1_015_568_748.0 / 4_294_967_296.0, rng.next_fraction());
        assert_eq!(1_586_005_467.0 / 4_294_967_296.0, rng.next_fraction());
        assert_eq!(2_165_703_038.0 / 4_294_967_296.0, rng.next_fraction());
    }

    #[test]
    fn identical_seeds_identical_sequences() {
        let mut a = PuzzleRng::new(123_456);
        let mut b = PuzzleRng::new(123_456);

        for _ in 0..1000 {
            assert_eq!(a.next_fraction(), b.next_fraction());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = PuzzleRng::new(1);
        let mut b = PuzzleRng::new(2);
        let draws_a: Vec<f64> = (0..10).map(|_| a.next_fraction()).collect();
        let draws_b: Vec<f64> = (0..10).map(|_| b.next_fraction()).collect();

        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn seed_is_clamped_and_absolute_valued() {
        assert_eq!(PuzzleRng::new(1), PuzzleRng::new(0));
        assert_eq!(PuzzleRng::new(5), PuzzleRng::new(-5));

        // i64::MIN has no positive counterpart; unsigned_abs still works.
        let mut rng = PuzzleRng::new(i64::MIN);
        assert_eq!(1_013_904_223.0 / 4_294_967_296.0, rng.next_fraction());
    }

    #[test]
    fn next_int_stays_in_bounds() {
        let mut rng = PuzzleRng::new(77);

        for _ in 0..1000 {
            let draw = rng.next_int(22, 31);
            assert!(draw >= 22 && draw < 31);
        }
    }

    #[test]
    fn next_int_consumes_one_draw() {
        let mut ints = PuzzleRng::new(99);
        let mut fractions = PuzzleRng::new(99);

        for _ in 0..100 {
            let expected = (fractions.next_fraction() * 9.0) as usize;
            assert_eq!(expected, ints.next_int(0, 9));
        }
    }

    #[test]
    fn fractions_are_in_unit_interval() {
        let mut rng = PuzzleRng::new(31_337);

        for _ in 0..1000 {
            let fraction = rng.next_fraction();
            assert!(fraction >= 0.0 && fraction < 1.0);
        }
    }

    #[test]
    fn rng_core_drives_rand_adapters() {
        let mut rng = PuzzleRng::new(7);

        for _ in 0..100 {
            let draw: usize = rng.gen_range(0..10);
            assert!(draw < 10);
        }
    }

    #[test]
    fn seedable_matches_new() {
        let mut seeded = PuzzleRng::from_seed(42i64.to_le_bytes());
        let mut direct = PuzzleRng::new(42);

        for _ in 0..100 {
            assert_eq!(direct.next_fraction(), seeded.next_fraction());
        }
    }
}
