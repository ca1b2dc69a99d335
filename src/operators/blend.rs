//! Blend mixing operator
//!
//! Combines two parent trait values into one child value: linear interpolation
//! at a uniformly random `t`, an optional additive Gaussian kick, then a clamp
//! to the trait's declared bounds.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::genome::bounds::{Bounds, Bounds3};
use crate::genome::value::TraitValue;

/// Lerp-based crossover with probabilistic Gaussian mutation
///
/// Every call draws fresh randomness: each child receives its own independent
/// `t` and mutation draws per trait, never shared across traits or siblings.
#[derive(Clone, Debug)]
pub struct BlendMix {
    /// Probability that a mixed value receives a mutation kick
    pub mutation_probability: f64,
    /// Standard deviation of the Gaussian mutation kick
    pub mutation_scale: f64,
}

impl BlendMix {
    /// Create a new blend mix operator
    ///
    /// # Panics
    /// Panics if the probability is outside [0, 1] or the scale is negative.
    pub fn new(mutation_probability: f64, mutation_scale: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&mutation_probability),
            "Mutation probability must be in [0, 1]"
        );
        assert!(mutation_scale >= 0.0, "Mutation scale must be non-negative");
        Self {
            mutation_probability,
            mutation_scale,
        }
    }

    /// Pure interpolation, no mutation
    pub fn crossover_only() -> Self {
        Self::new(0.0, 0.0)
    }

    fn kick<R: Rng>(&self, rng: &mut R) -> f64 {
        // Normal::new only fails on a non-finite or negative sigma, which the
        // constructor already rejects.
        let normal = Normal::new(0.0, self.mutation_scale).unwrap();
        normal.sample(rng)
    }

    /// Mix two scalar values within the trait's declared bounds
    pub fn mix_scalar<R: Rng>(&self, a: f64, b: f64, bounds: Bounds, rng: &mut R) -> f64 {
        let t = rng.gen::<f64>();
        let mut mixed = lerp(a, b, t);
        if rng.gen::<f64>() <= self.mutation_probability {
            mixed += self.kick(rng);
        }
        bounds.clamp(mixed)
    }

    /// Mix two vector values within the trait's declared box
    ///
    /// A single `t` is shared across all three components so the child lies on
    /// the segment between the parents before mutation; the mutation kick is
    /// drawn independently per component.
    pub fn mix_vector<R: Rng>(
        &self,
        a: [f64; 3],
        b: [f64; 3],
        bounds: Bounds3,
        rng: &mut R,
    ) -> [f64; 3] {
        let t = rng.gen::<f64>();
        let mut mixed = [
            lerp(a[0], b[0], t),
            lerp(a[1], b[1], t),
            lerp(a[2], b[2], t),
        ];
        for component in &mut mixed {
            if rng.gen::<f64>() <= self.mutation_probability {
                *component += self.kick(rng);
            }
        }
        bounds.clamp(mixed)
    }

    /// Mix two trait values of the same kind
    ///
    /// The bounds come from `a`, the value inherited by the child. Returns
    /// `None` on a scalar/vector kind mismatch; the child then keeps its
    /// inherited copy.
    pub fn mix_value<R: Rng>(
        &self,
        a: &TraitValue,
        b: &TraitValue,
        rng: &mut R,
    ) -> Option<TraitValue> {
        match (a, b) {
            (TraitValue::Scalar(sa), TraitValue::Scalar(sb)) => {
                let mixed = self.mix_scalar(sa.value, sb.value, sa.bounds, rng);
                Some(TraitValue::Scalar(sa.with_value(mixed)))
            }
            (TraitValue::Vector(va), TraitValue::Vector(vb)) => {
                let mixed = self.mix_vector(va.value, vb.value, va.bounds, rng);
                Some(TraitValue::Vector(va.with_value(mixed)))
            }
            _ => None,
        }
    }
}

/// Linear interpolation: `a·(1−t) + b·t`
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::value::{ScalarTrait, VectorTrait};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_lerp_endpoints() {
        assert_relative_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_relative_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_relative_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_mix_scalar_without_mutation_stays_between_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let mix = BlendMix::crossover_only();
        for _ in 0..200 {
            let v = mix.mix_scalar(0.2, 0.6, Bounds::unit(), &mut rng);
            assert!((0.2..=0.6).contains(&v), "value {} escaped [0.2, 0.6]", v);
        }
    }

    #[test]
    fn test_mix_scalar_always_clamped() {
        let mut rng = StdRng::seed_from_u64(7);
        // Always mutate, with a huge kick.
        let mix = BlendMix::new(1.0, 50.0);
        let bounds = Bounds::new(-1.0, 1.0);
        for _ in 0..500 {
            let v = mix.mix_scalar(-0.5, 0.5, bounds, &mut rng);
            assert!(bounds.contains(v), "value {} escaped bounds", v);
        }
    }

    #[test]
    fn test_mix_vector_shares_t_across_components() {
        let mut rng = StdRng::seed_from_u64(3);
        let mix = BlendMix::crossover_only();
        let a = [0.0, 0.0, 0.0];
        let b = [1.0, 2.0, 4.0];
        for _ in 0..100 {
            let v = mix.mix_vector(a, b, Bounds3::new([0.0; 3], [1.0, 2.0, 4.0]), &mut rng);
            // With one shared t, the components keep the parents' proportions.
            assert_relative_eq!(v[1], v[0] * 2.0, epsilon = 1e-12);
            assert_relative_eq!(v[2], v[0] * 4.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_mix_vector_clamped_component_wise() {
        let mut rng = StdRng::seed_from_u64(11);
        let mix = BlendMix::new(1.0, 10.0);
        let bounds = Bounds3::new([-1.0, 0.0, -2.0], [1.0, 1.0, 2.0]);
        for _ in 0..200 {
            let v = mix.mix_vector([0.0, 0.5, 0.0], [0.5, 0.7, 1.0], bounds, &mut rng);
            assert!(bounds.contains(v), "vector {:?} escaped bounds", v);
        }
    }

    #[test]
    fn test_mix_value_uses_first_parent_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let mix = BlendMix::crossover_only();
        let a = TraitValue::Scalar(ScalarTrait::new(0.0, Bounds::new(-1.0, 1.0)));
        let b = TraitValue::Scalar(ScalarTrait::new(0.5, Bounds::unit()));
        let mixed = mix.mix_value(&a, &b, &mut rng).unwrap();
        let s = mixed.as_scalar().unwrap();
        assert_eq!(s.bounds, Bounds::new(-1.0, 1.0));
    }

    #[test]
    fn test_mix_value_kind_mismatch() {
        let mut rng = StdRng::seed_from_u64(1);
        let mix = BlendMix::crossover_only();
        let a = TraitValue::Scalar(ScalarTrait::unit(0.5));
        let b = TraitValue::Vector(VectorTrait::new([0.5; 3], Bounds3::default()));
        assert!(mix.mix_value(&a, &b, &mut rng).is_none());
    }

    #[test]
    fn test_zero_scale_mutation_is_harmless() {
        let mut rng = StdRng::seed_from_u64(9);
        // Probability 1 but scale 0: the kick is always exactly zero.
        let mix = BlendMix::new(1.0, 0.0);
        for _ in 0..100 {
            let v = mix.mix_scalar(0.3, 0.4, Bounds::unit(), &mut rng);
            assert!((0.3..=0.4).contains(&v));
        }
    }

    #[test]
    #[should_panic(expected = "Mutation probability")]
    fn test_invalid_probability() {
        BlendMix::new(1.5, 0.1);
    }

    #[test]
    #[should_panic(expected = "Mutation scale")]
    fn test_invalid_scale() {
        BlendMix::new(0.5, -0.1);
    }
}
