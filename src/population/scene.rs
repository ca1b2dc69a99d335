//! Host collaborator boundary
//!
//! Everything the engine consumes from the surrounding 3D editor: duplication,
//! destruction, genome storage, deformer plumbing, selection state and object
//! placement. The engine only ever passes identifiers across this boundary;
//! the host owns the actual asset instances.

use serde::{Deserialize, Serialize};

use crate::genome::value::TraitValue;
use crate::genome::Genome;
use crate::population::specimen::SpecimenId;

/// Surface-projection method for the geometry-conform deformer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConformMethod {
    /// Snap each vertex to the nearest point on the target surface
    NearestSurfacePoint,
    /// Snap each vertex to the nearest target vertex
    NearestVertex,
    /// Project along the vertex normal onto the target
    Project,
}

impl Default for ConformMethod {
    fn default() -> Self {
        Self::NearestSurfacePoint
    }
}

/// The scene collaborator the engine breeds against
///
/// Collaborator failures (a duplication that cannot complete, for instance)
/// are the collaborator's concern; the engine neither retries nor wraps them.
pub trait SceneHost {
    /// Deep-clone a specimen (geometry, materials, trait storage) and insert
    /// the clone into the live population. The clone is independent of the
    /// source.
    fn duplicate(&mut self, id: SpecimenId) -> SpecimenId;

    /// Permanently remove a specimen from the live population.
    fn destroy(&mut self, id: SpecimenId);

    /// Read a specimen's genome.
    fn genome(&self, id: SpecimenId) -> Genome;

    /// Write one trait of a specimen's genome.
    fn write_trait(&mut self, id: SpecimenId, name: &str, value: TraitValue);

    /// Create a new scalar trait on `id` that blends its surface toward
    /// `target`'s, and return the trait's name for later mixing.
    fn apply_geometry_conform(
        &mut self,
        id: SpecimenId,
        target: SpecimenId,
        method: ConformMethod,
    ) -> String;

    /// The user's current selection, in selection order.
    fn selection(&self) -> Vec<SpecimenId>;

    /// Every specimen in the scene.
    fn all_specimens(&self) -> Vec<SpecimenId>;

    /// Host-defined "currently kept" marker, used by culling.
    fn is_kept(&self, id: SpecimenId) -> bool;

    /// Move a specimen. Layout passes overwrite positions wholesale.
    fn set_position(&mut self, id: SpecimenId, position: [f64; 3]);

    /// Lineage depth of a specimen; `ANCESTOR_GENERATION` if untouched.
    fn generation_index(&self, id: SpecimenId) -> i32;

    /// Assign a specimen's lineage depth.
    fn set_generation_index(&mut self, id: SpecimenId, generation: i32);
}
