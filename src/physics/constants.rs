//! Tuning constants for the merger animation.
//!
//! All values are visually tuned approximations in display units, not SI.
//! The decay exponent and frequency scaling are qualitative stand-ins for
//! radiation-reaction and Keplerian behavior; only their monotonicity
//! matters.

// ---------------------------------------------------------------------------
// Default configuration (reference visualization)
// ---------------------------------------------------------------------------
pub const DEFAULT_LATTICE_SIZE: usize = 20; // points per side
pub const DEFAULT_CELL_SPACING: f64 = 30.0; // display units between points
pub const DEFAULT_INITIAL_SEPARATION: f64 = 120.0; // r0
pub const DEFAULT_MERGER_TIME: f64 = 8.0; // seconds of inspiral
pub const DEFAULT_DECAY_EXPONENT: f64 = 0.25; // p in r0 * (1 - t/tm)^p
pub const DEFAULT_STRAIN_SCALE: f64 = 1.2; // h0; amplitude is h0 / r
pub const DEFAULT_RINGDOWN_DAMPING_TIME: f64 = 0.6; // tau (s)
pub const DEFAULT_RINGDOWN_FREQUENCY: f64 = 4.0; // f_ring (Hz)

// ---------------------------------------------------------------------------
// Timeline internals
// ---------------------------------------------------------------------------
/// Floor on orbital separation; keeps h0 / r finite through the merger.
pub const MIN_SEPARATION: f64 = 5.0;
/// Normalization k in omega = k * r^(-3/2).
pub const OMEGA_SCALE: f64 = 2000.0;

// ---------------------------------------------------------------------------
// Driver pacing (the core never reads these; the render loop does)
// ---------------------------------------------------------------------------
pub const ANIMATION_DURATION: f64 = 10.0; // seconds, inspiral + ringdown
pub const NOMINAL_FRAME_RATE: f64 = 60.0; // samples per second
