//! Specimen identity
//!
//! Specimens are externally-owned asset instances. The engine addresses them
//! through stable integer identifiers and holds no long-lived references.

use serde::{Deserialize, Serialize};

/// Stable identifier of one specimen in the host's population
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SpecimenId(pub u64);

impl std::fmt::Display for SpecimenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "specimen#{}", self.0)
    }
}

/// Generation index of a specimen the engine has never produced or adopted
pub const ANCESTOR_GENERATION: i32 = -1;

/// Check whether a generation index marks a specimen as touched by the engine
pub fn is_touched(generation_index: i32) -> bool {
    generation_index >= 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ancestor_is_not_touched() {
        assert!(!is_touched(ANCESTOR_GENERATION));
        assert!(is_touched(0));
        assert!(is_touched(7));
    }

    #[test]
    fn test_display() {
        assert_eq!(SpecimenId(3).to_string(), "specimen#3");
    }
}
