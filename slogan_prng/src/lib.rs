// Deterministic random sources for slogan generation.
//
// Every random decision in the generator (strategy choice, template pick,
// word-bank slot picks, Markov transition draws, decoration coin flips,
// brand placement) goes through the `RandomSource` trait defined here.
// Two implementations ship with the crate:
//
// - `SloganRng`: xoshiro256++ (Blackman & Vigna, 2019) seeded via SplitMix64.
//   Hand-rolled so a given seed reproduces the same slogans on every
//   platform.
// - `ScriptedRng`: replays a fixed list of unit-interval values. Tests use it
//   to force a particular branch (e.g. "always take the Markov path",
//   "never append the exclamation mark") without guessing seeds.
//
// Neither the lexicon nor the generator crate reaches for the `rand` crate
// or any OS entropy; the CLI derives a seed from the clock when the user does
// not pass one, and everything downstream is a pure function of that seed.

use serde::{Deserialize, Serialize};

/// A source of uniform randomness.
///
/// Only `next_f64` is required. The provided methods define how every
/// higher-level draw is derived from it, so a scripted source controls
/// uniform picks and coin flips alike.
pub trait RandomSource {
    /// Uniform `f64` in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    fn range_usize(&mut self, low: usize, high: usize) -> usize {
        assert!(low < high, "range_usize: low must be less than high");
        let span = (high - low) as f64;
        let offset = (self.next_f64() * span) as usize;
        // Guard against a source that returns exactly 1.0.
        low + offset.min(high - low - 1)
    }

    /// Return `true` with probability `p`.
    ///
    /// `p <= 0.0` never fires, `p >= 1.0` always fires.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick one element uniformly. `None` for an empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let idx = self.range_usize(0, items.len());
        items.get(idx)
    }
}

/// Xoshiro256++ PRNG, the generator's default random source.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SloganRng {
    s: [u64; 4],
}

impl SloganRng {
    /// Create a new PRNG seeded from a `u64`.
    ///
    /// Uses SplitMix64 to expand the seed into the 256-bit internal state.
    /// Two instances created with the same seed produce identical streams.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Generate the next `u64` in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Uniform integer in `[low, high)` using rejection sampling to avoid
    /// modulo bias.
    ///
    /// Panics if `low >= high`.
    pub fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        let threshold = range.wrapping_neg() % range; // = (2^64 - range) % range
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range);
            }
        }
    }
}

impl RandomSource for SloganRng {
    /// Uses the upper 53 bits of a `u64` to fill the mantissa of an f64.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }
}

/// A random source that replays a fixed script of values in [0, 1),
/// wrapping around when it runs out.
///
/// `ScriptedRng::constant(0.0)` makes every `chance(p)` with `p > 0` fire and
/// every pick return the first element; `constant(0.99)` does the opposite.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedRng {
    /// Create a source replaying `values` in order. An empty script behaves
    /// like `constant(0.0)`.
    pub fn new(values: Vec<f64>) -> Self {
        let values = if values.is_empty() { vec![0.0] } else { values };
        ScriptedRng { values, pos: 0 }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        ScriptedRng::new(vec![value])
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// SplitMix64, used only to expand a `u64` seed into xoshiro state.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinism_same_seed_same_output() {
        let mut a = SloganRng::new(42);
        let mut b = SloganRng::new(42);
        for _ in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_different_output() {
        let mut a = SloganRng::new(42);
        let mut b = SloganRng::new(43);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn f64_in_unit_range() {
        let mut rng = SloganRng::new(12345);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "f64 out of range: {v}");
        }
    }

    #[test]
    fn range_usize_within_bounds() {
        let mut rng = SloganRng::new(555);
        for _ in 0..10_000 {
            let v = rng.range_usize(5, 15);
            assert!((5..15).contains(&v), "range_usize out of range: {v}");
        }
    }

    #[test]
    fn chance_distribution() {
        let mut rng = SloganRng::new(42);
        let n = 10_000;
        let hits = (0..n).filter(|_| rng.chance(0.45)).count();
        let pct = hits as f64 / n as f64;
        assert!(
            (0.40..0.50).contains(&pct),
            "chance(0.45) should be ~45%, got {:.1}%",
            pct * 100.0
        );
    }

    #[test]
    fn chance_extremes() {
        let mut rng = SloganRng::new(7);
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn pick_covers_every_element() {
        let items = ["bold", "fresh", "smart"];
        let mut rng = SloganRng::new(3);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(*rng.pick(&items).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn pick_empty_is_none() {
        let mut rng = SloganRng::new(3);
        let empty: [&str; 0] = [];
        assert!(rng.pick(&empty).is_none());
    }

    #[test]
    fn scripted_replays_and_wraps() {
        let mut rng = ScriptedRng::new(vec![0.1, 0.9]);
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(rng.next_f64(), 0.9);
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn scripted_pick_maps_value_to_index() {
        let items = ["a", "b", "c", "d"];
        let mut rng = ScriptedRng::new(vec![0.0, 0.3, 0.99]);
        assert_eq!(rng.pick(&items), Some(&"a"));
        assert_eq!(rng.pick(&items), Some(&"b"));
        assert_eq!(rng.pick(&items), Some(&"d"));
    }

    #[test]
    fn scripted_one_never_overflows_range() {
        let mut rng = ScriptedRng::constant(1.0);
        assert_eq!(rng.range_usize(0, 3), 2);
        assert!(!rng.chance(1.0 - f64::EPSILON));
    }

    #[test]
    fn serialization_roundtrip() {
        let mut rng = SloganRng::new(42);
        for _ in 0..100 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: SloganRng = serde_json::from_str(&json).unwrap();
        for _ in 0..100 {
            assert_eq!(rng.next_u64(), restored.next_u64());
        }
    }
}
