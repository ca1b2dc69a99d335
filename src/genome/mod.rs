//! Genome model
//!
//! A specimen's genome is an ordered mapping from trait name to bounded trait
//! value. Iteration order is deterministic (sorted by name) so that per-trait
//! random draws are reproducible for a seeded generator.

pub mod bounds;
pub mod value;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::genome::value::{ScalarTrait, TraitValue};

/// The heritable traits of one specimen, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    traits: BTreeMap<String, TraitValue>,
}

impl Genome {
    /// Create an empty genome
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of traits
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    /// Check if the genome has no traits
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Insert or replace a trait
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<TraitValue>) {
        self.traits.insert(name.into(), value.into());
    }

    /// Get a trait by name
    pub fn get(&self, name: &str) -> Option<&TraitValue> {
        self.traits.get(name)
    }

    /// Iterate over traits in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TraitValue)> {
        self.traits.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over the scalar traits only, in name order
    pub fn scalars(&self) -> impl Iterator<Item = (&str, &ScalarTrait)> {
        self.traits.iter().filter_map(|(k, v)| match v {
            TraitValue::Scalar(s) => Some((k.as_str(), s)),
            TraitValue::Vector(_) => None,
        })
    }

    /// Trait names present in both genomes, in name order
    ///
    /// This is the crossover domain: traits present in only one parent are
    /// left untouched on the child.
    pub fn shared_names(&self, other: &Genome) -> Vec<String> {
        self.traits
            .keys()
            .filter(|name| other.traits.contains_key(*name))
            .cloned()
            .collect()
    }
}

impl FromIterator<(String, TraitValue)> for Genome {
    fn from_iter<I: IntoIterator<Item = (String, TraitValue)>>(iter: I) -> Self {
        Self {
            traits: iter.into_iter().collect(),
        }
    }
}

/// Prelude for the genome module
pub mod prelude {
    pub use super::bounds::{Bounds, Bounds3};
    pub use super::value::{ScalarTrait, TraitValue, VectorTrait};
    pub use super::Genome;
}
