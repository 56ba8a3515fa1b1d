//! Core of the binary-merger grid animation.
//!
//! Two pure components evaluated once per render tick from a single time
//! value: the orbit/ringdown [`physics::timeline::Timeline`] (time in,
//! strain tensor out) and the grid distortion kernel in [`grid`] (strain
//! tensor + reference lattice in, displaced geometry out). Neither holds
//! render-loop state; everything is recomputed from `t`, so a frame is a
//! function of the clock and nothing else.
//!
//! The windowing/drawing driver lives in `main.rs` and only ever calls
//! `Timeline::evaluate` followed by `grid::render_frame`.

pub mod config;
pub mod grid;
pub mod physics;

pub use config::MergerConfig;
pub use grid::{DisplayFrame, Lattice};
pub use physics::timeline::{Phase, StrainTensor, Timeline};
