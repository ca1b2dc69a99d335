//! Grid layout engine
//!
//! Deterministic placement of the touched population for visual comparison:
//! each generation gets a near-square grid centered on the origin in X/Y, and
//! generations stack along +Z in increasing order.

use std::collections::BTreeMap;

use log::debug;

use crate::population::specimen::SpecimenId;

/// Near-square 2D capacity for `n` items
///
/// `w = ceil(sqrt(n))`, `h = ceil(n / w)`, so `w * h >= n` always holds.
pub fn grid_capacity(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let w = (n as f64).sqrt().ceil() as usize;
    let h = n.div_ceil(w);
    debug_assert!(w * h >= n);
    (w, h)
}

/// Compute a position for every entry
///
/// Entries are `(specimen, generation_index)` pairs for the touched view, in
/// a stable encounter order; that order decides each specimen's grid cell.
/// Pure and deterministic: the same entries yield the same positions.
pub fn layout(
    entries: &[(SpecimenId, i32)],
    spacing: [f64; 3],
) -> Vec<(SpecimenId, [f64; 3])> {
    let Some(lowest) = entries.iter().map(|(_, g)| *g).min() else {
        return Vec::new();
    };

    let mut generations: BTreeMap<i32, Vec<SpecimenId>> = BTreeMap::new();
    for (id, generation) in entries {
        generations.entry(*generation).or_default().push(*id);
    }

    let mut positions = Vec::with_capacity(entries.len());
    for (generation, members) in &generations {
        let (w, h) = grid_capacity(members.len());
        debug!(
            "layout: generation {} has {} specimens on a {}x{} grid",
            generation,
            members.len(),
            w,
            h
        );
        for (i, id) in members.iter().enumerate() {
            let x = spacing[0] * ((i % w) as f64 - (w - 1) as f64 / 2.0);
            let y = spacing[1] * ((i / w) as f64 - (h - 1) as f64 / 2.0);
            let z = (generation - lowest) as f64 * spacing[2];
            positions.push((*id, [x, y, z]));
        }
    }
    positions
}
