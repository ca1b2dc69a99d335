//! Heritable trait values
//!
//! A trait is one named, bounded parameter of a specimen: either a scalar
//! (a morph-target slider) or a 3-vector with component-wise bounds.

use serde::{Deserialize, Serialize};

use crate::genome::bounds::{Bounds, Bounds3};

/// A scalar trait: current value plus its declared valid range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarTrait {
    /// Current value
    pub value: f64,
    /// Declared valid range
    pub bounds: Bounds,
}

impl ScalarTrait {
    /// Create a scalar trait, clamping the value into its bounds
    pub fn new(value: f64, bounds: Bounds) -> Self {
        Self {
            value: bounds.clamp(value),
            bounds,
        }
    }

    /// Create a unit-range trait, the common case for morph-target sliders
    pub fn unit(value: f64) -> Self {
        Self::new(value, Bounds::unit())
    }

    /// Replace the value, keeping the declared bounds
    pub fn with_value(self, value: f64) -> Self {
        Self { value, ..self }
    }
}

/// A 3-vector trait with component-wise bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorTrait {
    /// Current value
    pub value: [f64; 3],
    /// Declared valid range, component-wise
    pub bounds: Bounds3,
}

impl VectorTrait {
    /// Create a vector trait, clamping the value into its box
    pub fn new(value: [f64; 3], bounds: Bounds3) -> Self {
        Self {
            value: bounds.clamp(value),
            bounds,
        }
    }

    /// Replace the value, keeping the declared bounds
    pub fn with_value(self, value: [f64; 3]) -> Self {
        Self { value, ..self }
    }
}

/// One heritable trait value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TraitValue {
    /// Scalar trait
    Scalar(ScalarTrait),
    /// 3-vector trait
    Vector(VectorTrait),
}

impl TraitValue {
    /// Check that the current value lies within the declared bounds
    pub fn in_bounds(&self) -> bool {
        match self {
            Self::Scalar(s) => s.bounds.contains(s.value),
            Self::Vector(v) => v.bounds.contains(v.value),
        }
    }

    /// Get the scalar trait, if this is one
    pub fn as_scalar(&self) -> Option<&ScalarTrait> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Vector(_) => None,
        }
    }

    /// Get the vector trait, if this is one
    pub fn as_vector(&self) -> Option<&VectorTrait> {
        match self {
            Self::Vector(v) => Some(v),
            Self::Scalar(_) => None,
        }
    }
}

impl From<ScalarTrait> for TraitValue {
    fn from(s: ScalarTrait) -> Self {
        Self::Scalar(s)
    }
}

impl From<VectorTrait> for TraitValue {
    fn from(v: VectorTrait) -> Self {
        Self::Vector(v)
    }
}
