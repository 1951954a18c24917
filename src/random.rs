//! Random sampling of refined integers.
//!
//! A variant's domain is split into its maximal contiguous ranges (see
//! [`SignSet::ranges`](crate::SignSet::ranges)). Sampling picks one range
//! uniformly from that list, then a value uniformly inside it. Every variant
//! but [`NonZero`](crate::NonZero) has a single range. The two halves of
//! `NonZero` hold the same number of values, so its samples are uniform too.

use rand::{
    Rng,
    distributions::{Distribution, Standard},
};

use crate::{refined::Refined, variant::Variant};

impl<V: Variant> Refined<V> {
    /// Returns a random value of this variant, using the thread-local
    /// generator.
    ///
    /// # Example
    ///
    /// ```
    /// use refined_ints::NonZeroInt;
    ///
    /// assert_ne!(NonZeroInt::random().get(), 0);
    /// ```
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Returns a random value of this variant drawn from `rng`.
    ///
    /// A seeded generator gives a reproducible sequence.
    #[must_use]
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let ranges = V::SIGNS.ranges();
        let range = ranges[rng.gen_range(0..ranges.len())].clone();
        Self::from_valid(rng.gen_range(range))
    }
}

impl<V: Variant> Distribution<Refined<V>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Refined<V> {
        Refined::random_with(rng)
    }
}
