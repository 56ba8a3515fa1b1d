//! Grid distortion: strain tensor + reference lattice -> display geometry.

pub mod kernel;
pub mod lattice;

pub use kernel::{displace, displace_all, segments};
pub use lattice::Lattice;

use glam::DVec2;

use crate::physics::timeline::{Phase, TimelineSample};

/// Everything the drawing backend needs for one tick. Recomputed from
/// scratch every frame; never diffed against the previous one.
#[derive(Debug, Clone)]
pub struct DisplayFrame {
    pub phase: Phase,
    /// Displaced lattice points, row-major.
    pub points: Vec<DVec2>,
    /// Grid line segments between displaced neighbors, stable order.
    pub segments: Vec<(DVec2, DVec2)>,
    /// Body markers: two antipodal during inspiral, one at the origin
    /// from the merger onward.
    pub bodies: Vec<DVec2>,
}

/// Assemble the frame for one timeline sample.
pub fn render_frame(sample: &TimelineSample, lattice: &Lattice) -> DisplayFrame {
    let points = kernel::displace_all(&sample.strain, lattice);
    let segments = kernel::segments(lattice, &points);
    let bodies = match sample.orbit {
        Some(orbit) => {
            let offset = DVec2::new(
                orbit.separation * orbit.phase_angle.cos(),
                orbit.separation * orbit.phase_angle.sin(),
            );
            vec![offset, -offset]
        }
        None => vec![DVec2::ZERO],
    };
    DisplayFrame {
        phase: sample.phase,
        points,
        segments,
        bodies,
    }
}
