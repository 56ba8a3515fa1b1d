//! Time-domain model of the inspiral / merger / ringdown sequence.
//!
//! Everything here is a pure function of the clock value and the fixed
//! configuration; no per-frame state survives between calls.

pub mod constants;
pub mod timeline;

pub use timeline::{OrbitalState, Phase, StrainTensor, Timeline, TimelineSample};
