//! Orbit/ringdown timeline: clock value in, phase + strain tensor out.
//!
//! The model is a three-state continuous-time machine. During inspiral the
//! separation follows a monotone power-law decay and the strain amplitude
//! grows as the bodies close; at the configured merger time the orbit
//! disappears and a damped sinusoid takes over. The polarization angle
//! always carries a factor of 2 relative to the orbital phase, which is
//! what makes the pattern quadrupolar rather than dipolar.

use std::f64::consts::TAU;

use anyhow::Result;

use crate::config::MergerConfig;
use crate::physics::constants::{MIN_SEPARATION, OMEGA_SCALE};

/// Which part of the coalescence the animation is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Two bodies spiraling inward, `t < t_merge`.
    Inspiral,
    /// The zero-width transition instant, `t == t_merge`.
    Merger,
    /// Damped settling, `t > t_merge`.
    Ringdown,
}

/// Orbital kinematics; only meaningful during [`Phase::Inspiral`].
#[derive(Debug, Clone, Copy)]
pub struct OrbitalState {
    /// Separation r > 0 between the bodies.
    pub separation: f64,
    /// Orbital phase angle phi (radians), monotonically increasing.
    pub phase_angle: f64,
    /// Instantaneous angular frequency omega = k * r^(-3/2).
    pub angular_frequency: f64,
}

/// The two polarization components of a traceless symmetric 2x2 strain
/// tensor: `h_xx = -h_yy = h_plus`, `h_xy = h_yx = h_cross`.
///
/// The diagonal terms are derived, never stored, so the tensor cannot
/// drift away from tracelessness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrainTensor {
    pub h_plus: f64,
    pub h_cross: f64,
}

impl StrainTensor {
    pub const ZERO: Self = Self {
        h_plus: 0.0,
        h_cross: 0.0,
    };

    pub fn new(h_plus: f64, h_cross: f64) -> Self {
        Self { h_plus, h_cross }
    }

    /// `h_xx` component.
    pub fn xx(&self) -> f64 {
        self.h_plus
    }

    /// `h_yy` component; always exactly `-h_xx`.
    pub fn yy(&self) -> f64 {
        -self.h_plus
    }

    /// `h_xy = h_yx` component.
    pub fn xy(&self) -> f64 {
        self.h_cross
    }

    /// Scalar amplitude, `sqrt(h_plus^2 + h_cross^2)`.
    pub fn amplitude(&self) -> f64 {
        self.h_plus.hypot(self.h_cross)
    }
}

/// Everything the kernel and the driver need for one tick.
#[derive(Debug, Clone, Copy)]
pub struct TimelineSample {
    pub phase: Phase,
    /// Present during inspiral only.
    pub orbit: Option<OrbitalState>,
    pub strain: StrainTensor,
}

/// Pure evaluator for the coalescence timeline.
///
/// Holds only the validated configuration; `evaluate` has no side effects
/// and no memory of previous calls.
#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    cfg: MergerConfig,
}

impl Timeline {
    /// Build a timeline, rejecting invalid configurations up front.
    pub fn new(cfg: MergerConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &MergerConfig {
        &self.cfg
    }

    /// Orbital separation at time `t`, clamped to [`MIN_SEPARATION`].
    ///
    /// Saturates to the floor from the merger instant onward, so it is
    /// total over all `t`.
    pub fn separation(&self, t: f64) -> f64 {
        let t = t.max(0.0);
        if t >= self.cfg.merger_time {
            return MIN_SEPARATION;
        }
        let remaining = 1.0 - t / self.cfg.merger_time;
        (self.cfg.initial_separation * remaining.powf(self.cfg.decay_exponent))
            .max(MIN_SEPARATION)
    }

    /// Evaluate the timeline at time `t` (seconds).
    ///
    /// Total over all inputs: negative `t` is treated as the start, and
    /// `t` far beyond the animation saturates to vanishing strain.
    pub fn evaluate(&self, t: f64) -> TimelineSample {
        let t = t.max(0.0);
        if t < self.cfg.merger_time {
            self.inspiral(t)
        } else {
            let phase = if t == self.cfg.merger_time {
                Phase::Merger
            } else {
                Phase::Ringdown
            };
            TimelineSample {
                phase,
                orbit: None,
                strain: self.ringdown_strain(t - self.cfg.merger_time),
            }
        }
    }

    fn inspiral(&self, t: f64) -> TimelineSample {
        let r = self.separation(t);
        let omega = OMEGA_SCALE * r.powf(-1.5);
        let phi = omega * t;
        let h = self.cfg.strain_scale / r;
        // Factor of 2: the radiation pattern rotates at twice the orbital
        // frequency (spin-2 quadrupole).
        let strain = StrainTensor::new(h * (2.0 * phi).cos(), h * (2.0 * phi).sin());
        TimelineSample {
            phase: Phase::Inspiral,
            orbit: Some(OrbitalState {
                separation: r,
                phase_angle: phi,
                angular_frequency: omega,
            }),
            strain,
        }
    }

    /// Ringdown envelope at `dt` seconds past merger.
    fn ringdown_envelope(&self, dt: f64) -> f64 {
        let h_ring = self.cfg.strain_scale / MIN_SEPARATION;
        h_ring * (-dt / self.cfg.ringdown_damping_time).exp()
    }

    fn ringdown_strain(&self, dt: f64) -> StrainTensor {
        let env = self.ringdown_envelope(dt);
        let angle = TAU * self.cfg.ringdown_frequency * dt;
        StrainTensor::new(env * angle.cos(), env * angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> Timeline {
        Timeline::new(MergerConfig::default()).unwrap()
    }

    #[test]
    fn test_phase_classification() {
        let tl = timeline();
        let tm = tl.config().merger_time;
        assert_eq!(tl.evaluate(0.0).phase, Phase::Inspiral);
        assert_eq!(tl.evaluate(tm - 1e-9).phase, Phase::Inspiral);
        assert_eq!(tl.evaluate(tm).phase, Phase::Merger);
        assert_eq!(tl.evaluate(tm + 1e-9).phase, Phase::Ringdown);
    }

    #[test]
    fn test_separation_monotone_decreasing() {
        let tl = timeline();
        let tm = tl.config().merger_time;
        let mut prev = tl.separation(0.0);
        for i in 1..=200 {
            let t = tm * (i as f64 / 200.0) * 0.999;
            let r = tl.separation(t);
            assert!(r <= prev, "separation rose at t={t}: {r} > {prev}");
            assert!(r >= MIN_SEPARATION);
            prev = r;
        }
    }

    #[test]
    fn test_frequency_monotone_increasing() {
        let tl = timeline();
        let tm = tl.config().merger_time;
        let mut prev = 0.0;
        for i in 0..200 {
            let t = tm * (i as f64 / 200.0) * 0.995;
            let omega = tl.evaluate(t).orbit.unwrap().angular_frequency;
            assert!(
                omega >= prev,
                "frequency fell at t={t}: {omega} < {prev}"
            );
            prev = omega;
        }
    }

    #[test]
    fn test_amplitude_nondecreasing_during_inspiral() {
        let tl = timeline();
        let tm = tl.config().merger_time;
        let mut prev: f64 = 0.0;
        for i in 0..200 {
            let t = tm * (i as f64 / 200.0) * 0.995;
            let h = tl.config().strain_scale / tl.evaluate(t).orbit.unwrap().separation;
            assert!(h >= prev, "envelope fell at t={t}");
            prev = h;
        }
    }

    #[test]
    fn test_polarizations_combine_to_envelope() {
        let tl = timeline();
        let tm = tl.config().merger_time;
        for i in 0..100 {
            let t = tm * (i as f64 / 100.0) * 0.99;
            let s = tl.evaluate(t);
            let h = tl.config().strain_scale / s.orbit.unwrap().separation;
            let sum = s.strain.h_plus * s.strain.h_plus + s.strain.h_cross * s.strain.h_cross;
            assert!(
                (sum - h * h).abs() <= 1e-12 * h * h,
                "h+^2 + hx^2 != h^2 at t={t}"
            );
        }
    }

    #[test]
    fn test_tensor_traceless_by_construction() {
        let tl = timeline();
        for t in [0.0, 3.0, 7.9, 8.0, 9.5, 100.0] {
            let s = tl.evaluate(t).strain;
            assert_eq!(s.xx() + s.yy(), 0.0);
            assert_eq!(s.xy(), s.h_cross);
        }
    }

    #[test]
    fn test_separation_at_merger_hits_floor() {
        let tl = timeline();
        let tm = tl.config().merger_time;
        assert_eq!(tl.separation(tm), MIN_SEPARATION);
        assert_eq!(tl.separation(tm + 5.0), MIN_SEPARATION);
        let s = tl.evaluate(tm);
        assert!(s.orbit.is_none());
    }

    #[test]
    fn test_ringdown_envelope_decays() {
        let tl = timeline();
        let tm = tl.config().merger_time;
        let mut prev = f64::INFINITY;
        for i in 0..100 {
            let dt = i as f64 * 0.1;
            let env = tl.ringdown_envelope(dt);
            assert!(env < prev, "ringdown envelope rose at dt={dt}");
            assert!(tl.evaluate(tm + dt).strain.amplitude() <= env + 1e-12);
            prev = env;
        }
    }

    #[test]
    fn test_ringdown_settles_after_five_damping_times() {
        let tl = timeline();
        let cfg = *tl.config();
        let h_ring = cfg.strain_scale / MIN_SEPARATION;
        let s = tl.evaluate(cfg.merger_time + 5.0 * cfg.ringdown_damping_time);
        assert!(s.strain.amplitude() <= h_ring * (-5.0f64).exp() + 1e-12);
    }

    #[test]
    fn test_far_future_saturates_to_zero_strain() {
        let tl = timeline();
        let s = tl.evaluate(1e6);
        assert_eq!(s.phase, Phase::Ringdown);
        assert_eq!(s.strain.amplitude(), 0.0);
    }

    #[test]
    fn test_start_state_matches_config() {
        let tl = timeline();
        let s = tl.evaluate(0.0);
        let orbit = s.orbit.unwrap();
        assert_eq!(orbit.separation, tl.config().initial_separation);
        assert_eq!(orbit.phase_angle, 0.0);
        // Near-zero strain at the start: h0 / r0.
        let h0 = tl.config().strain_scale / tl.config().initial_separation;
        assert!((s.strain.amplitude() - h0).abs() < 1e-12);
        assert!(h0 < 0.02);
    }

    #[test]
    fn test_negative_time_clamps_to_start() {
        let tl = timeline();
        let a = tl.evaluate(-1.0);
        let b = tl.evaluate(0.0);
        assert_eq!(a.strain, b.strain);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let tl = timeline();
        for t in [0.0, 2.5, 7.999, 8.0, 9.1] {
            let a = tl.evaluate(t);
            let b = tl.evaluate(t);
            assert_eq!(a.strain, b.strain);
            assert_eq!(a.phase, b.phase);
        }
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let cfg = MergerConfig {
            ringdown_damping_time: 0.0,
            ..Default::default()
        };
        assert!(Timeline::new(cfg).is_err());
    }
}
