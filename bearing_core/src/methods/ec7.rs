//! # Eurocode 7 (EN 1997-1, Annex D)
//!
//! Nq and Nc as Meyerhof; Nγ = 2(Nq − 1)·tan φ for a rough base.

use crate::factors::FactorSet;
use crate::units::Degrees;
use std::f64::consts::PI;

/// Undrained Nc for a purely cohesive soil (π + 2)
pub const NC_AT_ZERO: f64 = 5.14;

/// Eurocode 7 bearing capacity factors for friction angle `phi_deg` (degrees).
pub fn ec7(phi_deg: f64) -> FactorSet {
    let phi = Degrees(phi_deg);

    let nq = (PI * phi.tan()).exp() * (Degrees(45.0) + phi * 0.5).tan().powi(2);

    let nc = if phi_deg > 0.0 {
        (nq - 1.0) * (1.0 / phi.tan())
    } else {
        NC_AT_ZERO
    };

    let ngamma = 2.0 * (nq - 1.0) * phi.tan();

    FactorSet::new(nc, nq, ngamma)
}
