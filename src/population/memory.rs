//! In-memory reference scene
//!
//! A minimal `SceneHost` backed by an arena of records. This is the model
//! implementation the integration tests breed against; a real host wraps its
//! editor's scene graph instead.

use std::collections::BTreeMap;

use crate::genome::value::{ScalarTrait, TraitValue};
use crate::genome::Genome;
use crate::population::scene::{ConformMethod, SceneHost};
use crate::population::specimen::{SpecimenId, ANCESTOR_GENERATION};

/// One specimen record in the arena
#[derive(Debug, Clone)]
pub struct SpecimenRecord {
    /// The specimen's heritable traits
    pub genome: Genome,
    /// Lineage depth, `ANCESTOR_GENERATION` if untouched
    pub generation_index: i32,
    /// Current placement
    pub position: [f64; 3],
    /// Host-side "currently kept" marker
    pub kept: bool,
}

impl SpecimenRecord {
    fn new(genome: Genome) -> Self {
        Self {
            genome,
            generation_index: ANCESTOR_GENERATION,
            position: [0.0; 3],
            kept: false,
        }
    }
}

/// In-memory `SceneHost` implementation
#[derive(Debug, Default)]
pub struct MemoryScene {
    records: BTreeMap<SpecimenId, SpecimenRecord>,
    selection: Vec<SpecimenId>,
    next_id: u64,
    conform_counter: u64,
}

impl MemoryScene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a specimen with the given genome, returning its id
    pub fn add(&mut self, genome: Genome) -> SpecimenId {
        let id = SpecimenId(self.next_id);
        self.next_id += 1;
        self.records.insert(id, SpecimenRecord::new(genome));
        id
    }

    /// Replace the ordered selection
    ///
    /// Selected specimens are also marked kept, mirroring hosts where the
    /// selection is the kept marker.
    pub fn select(&mut self, ids: &[SpecimenId]) {
        for record in self.records.values_mut() {
            record.kept = false;
        }
        self.selection = ids.to_vec();
        for id in ids {
            if let Some(record) = self.records.get_mut(id) {
                record.kept = true;
            }
        }
    }

    /// Look up a record
    pub fn record(&self, id: SpecimenId) -> Option<&SpecimenRecord> {
        self.records.get(&id)
    }

    /// Check whether a specimen still exists
    pub fn contains(&self, id: SpecimenId) -> bool {
        self.records.contains_key(&id)
    }

    /// Number of specimens in the scene
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the scene is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SceneHost for MemoryScene {
    fn duplicate(&mut self, id: SpecimenId) -> SpecimenId {
        let source = self.records[&id].clone();
        let clone_id = SpecimenId(self.next_id);
        self.next_id += 1;
        self.records.insert(
            clone_id,
            SpecimenRecord {
                kept: false,
                ..source
            },
        );
        clone_id
    }

    fn destroy(&mut self, id: SpecimenId) {
        self.records.remove(&id);
        self.selection.retain(|s| *s != id);
    }

    fn genome(&self, id: SpecimenId) -> Genome {
        self.records[&id].genome.clone()
    }

    fn write_trait(&mut self, id: SpecimenId, name: &str, value: TraitValue) {
        if let Some(record) = self.records.get_mut(&id) {
            record.genome.insert(name, value);
        }
    }

    fn apply_geometry_conform(
        &mut self,
        id: SpecimenId,
        target: SpecimenId,
        _method: ConformMethod,
    ) -> String {
        // A real host bakes a shrinkwrap deformer toward `target` into a new
        // morph target here; the reference scene just registers the trait.
        let name = format!("conform_to_{}_{}", target.0, self.conform_counter);
        self.conform_counter += 1;
        if let Some(record) = self.records.get_mut(&id) {
            record
                .genome
                .insert(name.clone(), TraitValue::Scalar(ScalarTrait::unit(0.0)));
        }
        name
    }

    fn selection(&self) -> Vec<SpecimenId> {
        self.selection.clone()
    }

    fn all_specimens(&self) -> Vec<SpecimenId> {
        self.records.keys().copied().collect()
    }

    fn is_kept(&self, id: SpecimenId) -> bool {
        self.records.get(&id).map_or(false, |r| r.kept)
    }

    fn set_position(&mut self, id: SpecimenId, position: [f64; 3]) {
        if let Some(record) = self.records.get_mut(&id) {
            record.position = position;
        }
    }

    fn generation_index(&self, id: SpecimenId) -> i32 {
        self.records
            .get(&id)
            .map_or(ANCESTOR_GENERATION, |r| r.generation_index)
    }

    fn set_generation_index(&mut self, id: SpecimenId, generation: i32) {
        if let Some(record) = self.records.get_mut(&id) {
            record.generation_index = generation;
        }
    }
}
