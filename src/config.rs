//! Animation configuration.
//!
//! One `Copy` block of knobs, fixed at startup. Defaults reproduce the
//! reference visualization: 20x20 lattice, 8 second inspiral, 10 second
//! total animation at a nominal 60 samples per second.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::physics::constants::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MergerConfig {
    /// Lattice points per side.
    pub lattice_size: usize,
    /// Distance between neighboring lattice points (display units).
    pub cell_spacing: f64,
    /// Orbital separation at t = 0.
    pub initial_separation: f64,
    /// Time of merger (seconds); inspiral runs on [0, merger_time).
    pub merger_time: f64,
    /// Exponent p in the separation decay law r0 * (1 - t/t_merge)^p.
    pub decay_exponent: f64,
    /// Strain scale h0; instantaneous amplitude is h0 / r.
    pub strain_scale: f64,
    /// Ringdown e-folding time tau (seconds).
    pub ringdown_damping_time: f64,
    /// Ringdown oscillation frequency (Hz).
    pub ringdown_frequency: f64,
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            lattice_size: DEFAULT_LATTICE_SIZE,
            cell_spacing: DEFAULT_CELL_SPACING,
            initial_separation: DEFAULT_INITIAL_SEPARATION,
            merger_time: DEFAULT_MERGER_TIME,
            decay_exponent: DEFAULT_DECAY_EXPONENT,
            strain_scale: DEFAULT_STRAIN_SCALE,
            ringdown_damping_time: DEFAULT_RINGDOWN_DAMPING_TIME,
            ringdown_frequency: DEFAULT_RINGDOWN_FREQUENCY,
        }
    }
}

impl MergerConfig {
    /// Validate the configuration once at initialization.
    ///
    /// Invalid values are reported, never silently replaced by defaults.
    pub fn validate(&self) -> Result<()> {
        if self.lattice_size == 0 {
            bail!("lattice_size must be positive");
        }
        if !(self.cell_spacing > 0.0) {
            bail!("cell_spacing must be positive, got {}", self.cell_spacing);
        }
        if !(self.initial_separation > 0.0) {
            bail!(
                "initial_separation must be positive, got {}",
                self.initial_separation
            );
        }
        if !(self.merger_time > 0.0) {
            bail!("merger_time must be positive, got {}", self.merger_time);
        }
        if !(self.decay_exponent > 0.0) {
            bail!(
                "decay_exponent must be positive, got {}",
                self.decay_exponent
            );
        }
        if !self.strain_scale.is_finite() {
            bail!("strain_scale must be finite, got {}", self.strain_scale);
        }
        if !(self.ringdown_damping_time > 0.0) {
            bail!(
                "ringdown_damping_time must be positive, got {}",
                self.ringdown_damping_time
            );
        }
        if !(self.ringdown_frequency > 0.0) {
            bail!(
                "ringdown_frequency must be positive, got {}",
                self.ringdown_frequency
            );
        }
        Ok(())
    }
}
