//! Command surface
//!
//! Each function maps to one user-triggered action and runs to completion on
//! the host's dispatcher thread. Guard checks precede every mutation, so a
//! command that fails has changed nothing and is safe to retry.

pub mod config;

use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use crate::commands::config::MixSettings;
use crate::error::{CommandError, CommandResult};
use crate::genome::value::{ScalarTrait, TraitValue};
use crate::layout;
use crate::lineage;
use crate::operators::blend::BlendMix;
use crate::population::scene::SceneHost;
use crate::population::specimen::{SpecimenId, ANCESTOR_GENERATION};

/// Overwrite every scalar trait of every selected specimen with an
/// independent uniform `[0, 1)` draw
///
/// Vector traits are untouched. Returns the number of traits written.
pub fn randomize<H: SceneHost, R: Rng>(
    host: &mut H,
    selection: &[SpecimenId],
    rng: &mut R,
) -> CommandResult<usize> {
    if selection.is_empty() {
        return Err(CommandError::EmptyInput);
    }

    let mut written = 0;
    for id in selection {
        let genome = host.genome(*id);
        for (name, scalar) in genome.scalars() {
            let value = scalar.with_value(rng.gen::<f64>());
            host.write_trait(*id, name, TraitValue::Scalar(value));
            written += 1;
        }
    }
    debug!("randomize: rewrote {} scalar traits", written);
    Ok(written)
}

/// Breed the ordered selection and lay the population back out
///
/// Couples are a sliding window over the selection: `[s0, s1, s2]` breeds
/// `(s0, s1)` and `(s1, s2)`, so interior specimens parent two couples. Each
/// couple produces `settings.children_per_couple()` children, every one a
/// full clone of the first parent with all shared traits re-mixed. Returns
/// the new specimens in creation order.
pub fn mix<H: SceneHost, R: Rng>(
    host: &mut H,
    selection: &[SpecimenId],
    settings: &MixSettings,
    rng: &mut R,
) -> CommandResult<Vec<SpecimenId>> {
    if selection.is_empty() {
        return Err(CommandError::EmptyInput);
    }
    if selection.len() < 2 {
        return Err(CommandError::InsufficientSelection {
            got: selection.len(),
        });
    }
    if settings.children_per_couple() == 0 {
        return Err(CommandError::ZeroOffspring);
    }

    // Ancestors bred for the first time enter at the population's current top
    // generation, not retroactively at generation zero.
    let scene = host.all_specimens();
    let adoption_default = lineage::highest_generation(host, &scene).unwrap_or(0).max(0);
    for id in selection {
        lineage::adopt(host, *id, adoption_default);
    }

    let blend = BlendMix::new(settings.mutation_probability, settings.mutation_scale);
    let mut offspring = Vec::new();

    for couple in selection.windows(2) {
        let (mom, dad) = (couple[0], couple[1]);
        let mom_genome = host.genome(mom);
        let dad_genome = host.genome(dad);
        let shared = mom_genome.shared_names(&dad_genome);
        let next_gen =
            lineage::next_generation(host.generation_index(mom), host.generation_index(dad));

        for child_index in 0..settings.children_per_couple() {
            let child = host.duplicate(mom);
            host.set_generation_index(child, next_gen);

            if child_index < settings.conform_children {
                let name = host.apply_geometry_conform(child, dad, settings.conform_method);
                let weight = ScalarTrait::unit(rng.gen::<f64>());
                host.write_trait(child, &name, TraitValue::Scalar(weight));
            }

            for name in &shared {
                // Both lookups succeed: the name came from the intersection.
                let a = mom_genome.get(name).unwrap();
                let b = dad_genome.get(name).unwrap();
                match blend.mix_value(a, b, rng) {
                    Some(mixed) => host.write_trait(child, name, mixed),
                    None => debug!("mix: trait {:?} differs in kind, left inherited", name),
                }
            }
            offspring.push(child);
        }
    }
    debug!(
        "mix: {} couples produced {} offspring at up to generation {}",
        selection.len() - 1,
        offspring.len(),
        offspring
            .iter()
            .map(|id| host.generation_index(*id))
            .max()
            .unwrap_or(0),
    );

    // One layout pass over the scene's current membership so the result is
    // immediately legible. The new offspring make the touched view non-empty.
    let scene = host.all_specimens();
    tidy_up(host, &scene, settings.grid_spacing)?;
    Ok(offspring)
}

/// Collapse all touched specimens onto the highest generation, then lay out
///
/// Returns the generation index everything was flattened to.
pub fn flatten<H: SceneHost>(
    host: &mut H,
    all: &[SpecimenId],
    spacing: [f64; 3],
) -> CommandResult<i32> {
    let highest = lineage::flatten_generations(host, all)?;
    tidy_up(host, all, spacing)?;
    Ok(highest)
}

/// Spread the touched population across generation grids
///
/// Returns the number of specimens placed. Warns when the view has no
/// touched specimens.
pub fn tidy_up<H: SceneHost>(
    host: &mut H,
    all: &[SpecimenId],
    spacing: [f64; 3],
) -> CommandResult<usize> {
    let entries: Vec<_> = lineage::touched(host, all)
        .into_iter()
        .map(|id| (id, host.generation_index(id)))
        .collect();
    if entries.is_empty() {
        warn!("tidy up: no touched specimens to place");
        return Err(CommandError::EmptyInput);
    }

    let placed = layout::layout(&entries, spacing);
    let count = placed.len();
    for (id, position) in placed {
        host.set_position(id, position);
    }
    Ok(count)
}

/// Destroy every touched specimen the predicate rejects, then lay out
///
/// The predicate is fully evaluated before the first destruction. Removing
/// nothing is not an error. Returns the number destroyed.
pub fn retain<H: SceneHost, F: FnMut(SpecimenId) -> bool>(
    host: &mut H,
    all: &[SpecimenId],
    mut keep: F,
    spacing: [f64; 3],
) -> CommandResult<usize> {
    let doomed: Vec<_> = lineage::touched(host, all)
        .into_iter()
        .filter(|id| !keep(*id))
        .collect();
    for id in &doomed {
        host.destroy(*id);
    }
    debug!("retain: destroyed {} specimens", doomed.len());

    let survivors: Vec<_> = all
        .iter()
        .copied()
        .filter(|id| !doomed.contains(id))
        .collect();
    // Culling everything leaves nothing to place; that is not a failure of
    // the retain itself.
    let _ = tidy_up(host, &survivors, spacing);
    Ok(doomed.len())
}

/// Cull every touched specimen the host no longer marks as kept
///
/// Convenience over [`retain`] using the host's own kept marker, snapshotted
/// before any destruction.
pub fn retain_kept<H: SceneHost>(
    host: &mut H,
    all: &[SpecimenId],
    spacing: [f64; 3],
) -> CommandResult<usize> {
    let kept: HashSet<_> = all
        .iter()
        .copied()
        .filter(|id| host.is_kept(*id))
        .collect();
    retain(host, all, |id| kept.contains(&id), spacing)
}

/// Manually override the generation index of every selected specimen
///
/// The index is floored at -1, which returns a specimen to the untouched
/// ancestor state. No layout pass is triggered; the host calls [`tidy_up`]
/// itself once it has finished assigning.
pub fn assign_generation<H: SceneHost>(
    host: &mut H,
    selection: &[SpecimenId],
    generation: i32,
) -> CommandResult<()> {
    if selection.is_empty() {
        return Err(CommandError::EmptyInput);
    }
    let generation = generation.max(-1);
    for id in selection {
        host.set_generation_index(*id, generation);
    }
    Ok(())
}

/// Forget all lineage bookkeeping
///
/// Every touched specimen returns to the untouched ancestor state, as if the
/// engine had never seen it. Positions are left as they are.
pub fn reset<H: SceneHost>(host: &mut H, all: &[SpecimenId]) -> CommandResult<usize> {
    let touched = lineage::touched(host, all);
    if touched.is_empty() {
        warn!("reset: no touched specimens to forget");
        return Err(CommandError::EmptyInput);
    }
    let count = touched.len();
    for id in touched {
        host.set_generation_index(id, ANCESTOR_GENERATION);
    }
    Ok(count)
}

/// Prelude for the commands module
pub mod prelude {
    pub use super::config::MixSettings;
    pub use super::{
        assign_generation, flatten, mix, randomize, reset, retain, retain_kept, tidy_up,
    };
}
