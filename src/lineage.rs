//! Lineage tracking
//!
//! The engine's only lineage state is the per-specimen generation index the
//! host stores alongside each specimen: `-1` marks an untouched ancestor,
//! `>= 0` a specimen produced or adopted at that generation.

use log::warn;

use crate::error::{CommandError, CommandResult};
use crate::population::scene::SceneHost;
use crate::population::specimen::{is_touched, SpecimenId};

/// Generation index for offspring of two parents
pub fn next_generation(parent_a: i32, parent_b: i32) -> i32 {
    1 + parent_a.max(parent_b)
}

/// Filter a population view down to the specimens the engine has touched
pub fn touched<H: SceneHost>(host: &H, ids: &[SpecimenId]) -> Vec<SpecimenId> {
    ids.iter()
        .copied()
        .filter(|id| is_touched(host.generation_index(*id)))
        .collect()
}

/// Highest generation index among the touched specimens of a view
pub fn highest_generation<H: SceneHost>(host: &H, ids: &[SpecimenId]) -> Option<i32> {
    ids.iter()
        .map(|id| host.generation_index(*id))
        .filter(|g| is_touched(*g))
        .max()
}

/// Adopt a specimen that has never been bred
///
/// If the specimen is untouched, its generation index becomes `default`.
/// Touched specimens are left alone.
pub fn adopt<H: SceneHost>(host: &mut H, id: SpecimenId, default: i32) {
    if !is_touched(host.generation_index(id)) {
        host.set_generation_index(id, default);
    }
}

/// Collapse all generations to the highest one
///
/// Returns the generation index everything was flattened to. Warns and leaves
/// state untouched when the view has no touched specimens.
pub fn flatten_generations<H: SceneHost>(host: &mut H, ids: &[SpecimenId]) -> CommandResult<i32> {
    let touched = touched(host, ids);
    let Some(highest) = highest_generation(host, &touched) else {
        warn!("flatten: no touched specimens in view of {}", ids.len());
        return Err(CommandError::EmptyInput);
    };
    for id in touched {
        host.set_generation_index(id, highest);
    }
    Ok(highest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::Genome;
    use crate::population::memory::MemoryScene;
    use crate::population::specimen::ANCESTOR_GENERATION;

    fn scene_with_generations(generations: &[i32]) -> (MemoryScene, Vec<SpecimenId>) {
        let mut scene = MemoryScene::new();
        let ids: Vec<_> = generations
            .iter()
            .map(|g| {
                let id = scene.add(Genome::new());
                scene.set_generation_index(id, *g);
                id
            })
            .collect();
        (scene, ids)
    }

    #[test]
    fn test_next_generation() {
        assert_eq!(next_generation(0, 0), 1);
        assert_eq!(next_generation(2, 5), 6);
        assert_eq!(next_generation(ANCESTOR_GENERATION, ANCESTOR_GENERATION), 0);
    }

    #[test]
    fn test_touched_filters_ancestors() {
        let (scene, ids) = scene_with_generations(&[-1, 0, 3, -1]);
        assert_eq!(touched(&scene, &ids), vec![ids[1], ids[2]]);
    }

    #[test]
    fn test_highest_generation_ignores_ancestors() {
        let (scene, ids) = scene_with_generations(&[-1, 2, 5]);
        assert_eq!(highest_generation(&scene, &ids), Some(5));

        let (scene, ids) = scene_with_generations(&[-1, -1]);
        assert_eq!(highest_generation(&scene, &ids), None);
    }

    #[test]
    fn test_adopt_only_touches_ancestors() {
        let (mut scene, ids) = scene_with_generations(&[-1, 3]);
        adopt(&mut scene, ids[0], 7);
        adopt(&mut scene, ids[1], 7);
        assert_eq!(scene.generation_index(ids[0]), 7);
        assert_eq!(scene.generation_index(ids[1]), 3);
    }

    #[test]
    fn test_flatten_sets_everything_to_highest() {
        let (mut scene, ids) = scene_with_generations(&[0, 2, 5, -1]);
        let flattened = flatten_generations(&mut scene, &ids).unwrap();
        assert_eq!(flattened, 5);
        assert_eq!(scene.generation_index(ids[0]), 5);
        assert_eq!(scene.generation_index(ids[1]), 5);
        assert_eq!(scene.generation_index(ids[2]), 5);
        // Ancestors stay untouched.
        assert_eq!(scene.generation_index(ids[3]), ANCESTOR_GENERATION);
    }

    #[test]
    fn test_flatten_empty_is_handled() {
        let (mut scene, ids) = scene_with_generations(&[-1, -1]);
        assert_eq!(
            flatten_generations(&mut scene, &ids),
            Err(CommandError::EmptyInput)
        );
        assert_eq!(scene.generation_index(ids[0]), ANCESTOR_GENERATION);
    }

    #[test]
    fn test_flatten_idempotent() {
        let (mut scene, ids) = scene_with_generations(&[1, 4]);
        flatten_generations(&mut scene, &ids).unwrap();
        let snapshot: Vec<_> = ids.iter().map(|id| scene.generation_index(*id)).collect();
        flatten_generations(&mut scene, &ids).unwrap();
        let again: Vec<_> = ids.iter().map(|id| scene.generation_index(*id)).collect();
        assert_eq!(snapshot, again);
    }
}
