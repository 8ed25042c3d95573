#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand::Error;
use std::cell::RefCell;
use std::rc::Rc;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Samples an index from a categorical distribution defined by non-negative weights.
    /// Non-finite and non-positive weights are never sampled. Returns `None` when there is nothing
    /// to sample: empty weights or no positive weight.
    fn weighted(&self, weights: &[Float]) -> Option<usize> {
        let is_valid = |weight: &Float| weight.is_finite() && *weight > 0.;
        let max_weight = weights.iter().copied().filter(is_valid).fold(0., Float::max);

        if max_weight <= 0. {
            return None;
        }

        // normalize by the largest weight, so tiny or huge magnitudes keep their proportions
        let normalized = weights.iter().map(|weight| if is_valid(weight) { weight / max_weight } else { 0. });
        let distribution = WeightedIndex::<Float>::new(normalized).ok()?;

        Some(distribution.sample(&mut self.get_rng()))
    }

    /// Returns RNG.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation backed by a small, fast generator.
pub struct DefaultRandom {
    rng: Rc<RefCell<SmallRng>>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with seed, two instances with the same seed
    /// produce the same sequence of values.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Rc::new(RefCell::new(SmallRng::seed_from_u64(seed))) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        let rng = SmallRng::from_rng(thread_rng()).unwrap_or_else(|_| SmallRng::seed_from_u64(0));

        Self { rng: Rc::new(RefCell::new(rng)) }
    }
}

impl Random for DefaultRandom {
    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max)
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen { rng: self.rng.clone() }
    }
}

/// Specifies underlying random generator type which shares its state with the owning `Random`.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: Rc<RefCell<SmallRng>>,
}

impl RandomGen {
    /// Creates a new instance of `RandomGen` seeded with the given value.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Rc::new(RefCell::new(SmallRng::seed_from_u64(seed))) }
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.rng.borrow_mut().next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.rng.borrow_mut().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.borrow_mut().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng.borrow_mut().try_fill_bytes(dest)
    }
}
