//! # Meyerhof (1963)
//!
//! ```text
//! Nq = e^(π·tan φ)·tan²(45° + φ/2)
//! Nc = (Nq − 1)·cot φ          (φ > 0)
//! Nγ = (Nq − 1)·tan(1.4φ)
//! ```
//!
//! Nq and Nc are the Reissner/Prandtl solutions. The 1.4 multiplier in Nγ is
//! empirical and applies to φ in degrees.

use crate::factors::FactorSet;
use crate::units::Degrees;
use std::f64::consts::PI;

/// Prandtl's Nc for a purely cohesive soil (2 + π)
pub const NC_AT_ZERO: f64 = 5.14;

/// Angle multiplier in Meyerhof's Nγ
const NGAMMA_ANGLE_FACTOR: f64 = 1.4;

/// Meyerhof's bearing capacity factors for friction angle `phi_deg` (degrees).
pub fn meyerhof(phi_deg: f64) -> FactorSet {
    let phi = Degrees(phi_deg);

    let nq = (PI * phi.tan()).exp() * (Degrees(45.0) + phi * 0.5).tan().powi(2);

    let nc = if phi_deg > 0.0 {
        (nq - 1.0) * (1.0 / phi.tan())
    } else {
        NC_AT_ZERO
    };

    let ngamma = (nq - 1.0) * (phi * NGAMMA_ANGLE_FACTOR).tan();

    FactorSet::new(nc, nq, ngamma)
}
