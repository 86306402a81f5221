use crate::foundation::error::{PivraError, PivraResult};

/// Damped harmonic oscillator constants driving spring easing.
///
/// Defaults match the tuned pan transition: stiffness 100, damping 20,
/// mass 0.5. The response is evaluated over wall-clock seconds, so the
/// same config settles at the same speed regardless of frame rate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Restoring force constant, must be > 0.
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    /// Damping coefficient, must be >= 0.
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Oscillator mass, must be > 0.
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_stiffness() -> f64 {
    100.0
}

fn default_damping() -> f64 {
    20.0
}

fn default_mass() -> f64 {
    0.5
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: default_stiffness(),
            damping: default_damping(),
            mass: default_mass(),
        }
    }
}

impl SpringConfig {
    /// Validate oscillator constants.
    pub fn validate(&self) -> PivraResult<()> {
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(PivraError::animation(
                "spring stiffness must be finite and > 0",
            ));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(PivraError::animation(
                "spring damping must be finite and >= 0",
            ));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(PivraError::animation("spring mass must be finite and > 0"));
        }
        Ok(())
    }

    /// Step response from 0 toward 1 with `x(0)=0`, `v(0)=0`, at `secs`.
    ///
    /// Underdamped configs overshoot 1 before settling; overdamped and
    /// critically damped configs approach 1 monotonically.
    pub fn step_response(&self, secs: f64) -> f64 {
        let k = self.stiffness.max(0.0);
        let c = self.damping.max(0.0);
        let m = self.mass.max(1e-9);
        let t = secs.max(0.0);

        let w0 = (k / m).sqrt();
        if w0 == 0.0 {
            return 0.0;
        }
        let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

        if (zeta - 1.0).abs() < 1e-6 {
            // Critically damped.
            let e = (-w0 * t).exp();
            1.0 - e * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            // Underdamped.
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let e = (-zeta * w0 * t).exp();
            let c1 = (wd * t).cos();
            let s1 = (wd * t).sin();
            let k = zeta / (1.0 - zeta * zeta).sqrt();
            1.0 - e * (c1 + k * s1)
        } else {
            // Overdamped.
            let z2 = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - z2);
            let r2 = -w0 * (zeta + z2);
            let c2 = (zeta + z2) / (2.0 * z2);
            let c1 = (zeta - z2) / (2.0 * z2);
            1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
        }
    }
}
