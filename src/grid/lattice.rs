//! The immutable reference lattice.

use glam::DVec2;

/// A square grid of reference points centered on the origin, fixed at
/// creation. The kernel displaces copies of these points every frame; the
/// lattice itself is never mutated.
#[derive(Debug, Clone)]
pub struct Lattice {
    size: usize,
    spacing: f64,
    points: Vec<DVec2>,
}

impl Lattice {
    /// Build a `size x size` lattice with the given spacing, centered on
    /// the origin. Row-major order, top-left first.
    ///
    /// `size` is assumed validated (see `MergerConfig::validate`); a zero
    /// size yields an empty lattice rather than panicking.
    pub fn new(size: usize, spacing: f64) -> Self {
        let half = (size.saturating_sub(1)) as f64 / 2.0;
        let mut points = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                points.push(DVec2::new(
                    (col as f64 - half) * spacing,
                    (row as f64 - half) * spacing,
                ));
            }
        }
        Self {
            size,
            spacing,
            points,
        }
    }

    /// Points per side.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// All reference points in row-major order.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Row-major index of the point at (row, col).
    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }
}
