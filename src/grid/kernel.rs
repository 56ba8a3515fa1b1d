//! Per-point strain displacement and segment generation.
//!
//! The transverse-traceless transform is applied to every lattice point
//! independently; no point reads another point's displaced position, so
//! the map parallelizes trivially and the parallel result is bit-identical
//! to the sequential one.

use glam::DVec2;
use rayon::prelude::*;

use crate::grid::lattice::Lattice;
use crate::physics::timeline::StrainTensor;

/// Displace one point by the strain tensor:
/// `dx = h+ x + hx y`, `dy = hx x - h+ y`.
///
/// To first order this shears and stretches without changing area, which
/// is the transverse-traceless property the whole visualization rests on.
#[inline]
pub fn displace(strain: &StrainTensor, point: DVec2) -> DVec2 {
    let dx = strain.h_plus * point.x + strain.h_cross * point.y;
    let dy = strain.h_cross * point.x - strain.h_plus * point.y;
    DVec2::new(point.x + dx, point.y + dy)
}

/// Displace every lattice point, in row-major order.
pub fn displace_all(strain: &StrainTensor, lattice: &Lattice) -> Vec<DVec2> {
    lattice
        .points()
        .par_iter()
        .map(|&p| displace(strain, p))
        .collect()
}

/// Sequential reference evaluation; same order, same bits.
pub fn displace_all_seq(strain: &StrainTensor, lattice: &Lattice) -> Vec<DVec2> {
    lattice
        .points()
        .iter()
        .map(|&p| displace(strain, p))
        .collect()
}

/// Connect each displaced point to its right and lower neighbor.
///
/// Segments always join displaced positions, never the reference ones;
/// that is what makes the grid visibly stretch and shear. Emission order
/// is row-major (right edge before down edge), so output is stable across
/// runs.
pub fn segments(lattice: &Lattice, displaced: &[DVec2]) -> Vec<(DVec2, DVec2)> {
    let n = lattice.size();
    let mut out = Vec::with_capacity(2 * n * n.saturating_sub(1));
    for row in 0..n {
        for col in 0..n {
            let here = displaced[lattice.idx(row, col)];
            if col + 1 < n {
                out.push((here, displaced[lattice.idx(row, col + 1)]));
            }
            if row + 1 < n {
                out.push((here, displaced[lattice.idx(row + 1, col)]));
            }
        }
    }
    out
}
