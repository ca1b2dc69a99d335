//! Breeding configuration
//!
//! A host-persisted snapshot of the user's tuning values, passed by value
//! into each command so the engine carries no ambient state.

use serde::{Deserialize, Serialize};

use crate::population::scene::ConformMethod;

/// User-facing tuning for `mix` and the layout passes it triggers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixSettings {
    /// Distance between grid cells, per axis
    pub grid_spacing: [f64; 3],
    /// Children per couple bred by trait mixing alone
    pub plain_children: u32,
    /// Children per couple that additionally receive a geometry-conform
    /// blend toward the second parent
    pub conform_children: u32,
    /// Surface-projection method for the conform variant
    pub conform_method: ConformMethod,
    /// Probability that each mixed trait value receives a mutation kick
    pub mutation_probability: f64,
    /// Standard deviation of the Gaussian mutation kick
    pub mutation_scale: f64,
}

impl MixSettings {
    /// Create settings with the given mutation tuning
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
            ..Self::default()
        }
    }

    /// Set the grid spacing
    pub fn with_grid_spacing(mut self, spacing: [f64; 3]) -> Self {
        self.grid_spacing = spacing;
        self
    }

    /// Set how many plain and conform children each couple produces
    pub fn with_children(mut self, plain: u32, conform: u32) -> Self {
        self.plain_children = plain;
        self.conform_children = conform;
        self
    }

    /// Set the conform method
    pub fn with_conform_method(mut self, method: ConformMethod) -> Self {
        self.conform_method = method;
        self
    }

    /// Total children each couple produces
    pub fn children_per_couple(&self) -> u32 {
        self.plain_children + self.conform_children
    }
}

impl Default for MixSettings {
    fn default() -> Self {
        Self {
            grid_spacing: [2.0, 2.0, 2.0],
            plain_children: 1,
            conform_children: 0,
            conform_method: ConformMethod::default(),
            mutation_probability: 0.2,
            mutation_scale: 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = MixSettings::default();
        assert_eq!(settings.plain_children, 1);
        assert_eq!(settings.conform_children, 0);
        assert_eq!(settings.children_per_couple(), 1);
        assert_eq!(settings.mutation_probability, 0.2);
        assert_eq!(settings.mutation_scale, 0.4);
    }

    #[test]
    fn test_children_per_couple_sums_both_kinds() {
        let settings = MixSettings::default().with_children(2, 3);
        assert_eq!(settings.children_per_couple(), 5);
    }

    #[test]
    #[should_panic(expected = "Mutation probability")]
    fn test_invalid_probability() {
        MixSettings::new(-0.1, 0.4);
    }

    #[test]
    #[should_panic(expected = "Mutation scale")]
    fn test_invalid_scale() {
        MixSettings::new(0.2, -1.0);
    }
}
