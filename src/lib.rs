//! # shape-evo
//!
//! An interactive breeding engine for populations of parametric 3D shapes.
//!
//! Specimens live in a host 3D editor; their heritable shape parameters form
//! a genome of named, bounded traits. The engine recombines and mutates those
//! traits across user-chosen couples, tracks lineage through a per-specimen
//! generation index, culls what the user drops, and lays every generation out
//! on its own grid for side-by-side inspection.
//!
//! The host is an external collaborator behind the [`SceneHost`] trait: it
//! owns the assets, the mesh deformation machinery, and the user interface,
//! and invokes one engine command per user action.
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use shape_evo::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut scene = MemoryScene::new();
//!
//! let mut genome = Genome::new();
//! genome.insert("hat_size", ScalarTrait::unit(0.2));
//! let cube = scene.add(genome.clone());
//! genome.insert("hat_size", ScalarTrait::unit(0.8));
//! let sphere = scene.add(genome);
//!
//! let settings = MixSettings::default().with_children(4, 0);
//! let children = mix(&mut scene, &[cube, sphere], &settings, &mut rng).unwrap();
//! assert_eq!(children.len(), 4);
//! ```
//!
//! [`SceneHost`]: population::scene::SceneHost

pub mod commands;
pub mod error;
pub mod genome;
pub mod layout;
pub mod lineage;
pub mod operators;
pub mod population;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::commands::prelude::*;
    pub use crate::error::{CommandError, CommandResult, Severity};
    pub use crate::genome::prelude::*;
    pub use crate::layout::{grid_capacity, layout};
    pub use crate::lineage::{adopt, flatten_generations, next_generation};
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
}
