//! # Hansen (1970)
//!
//! Nq and Nc as Meyerhof; Nγ = 1.5(Nq − 1)·tan φ.

use crate::factors::FactorSet;
use crate::units::Degrees;
use std::f64::consts::PI;

/// Prandtl's Nc for a purely cohesive soil
pub const NC_AT_ZERO: f64 = 5.14;

/// Hansen's bearing capacity factors for friction angle `phi_deg` (degrees).
pub fn hansen(phi_deg: f64) -> FactorSet {
    let phi = Degrees(phi_deg);

    let nq = (PI * phi.tan()).exp() * (Degrees(45.0) + phi * 0.5).tan().powi(2);

    let nc = if phi_deg > 0.0 {
        (nq - 1.0) * (1.0 / phi.tan())
    } else {
        NC_AT_ZERO
    };

    let ngamma = 1.5 * (nq - 1.0) * phi.tan();

    FactorSet::new(nc, nq, ngamma)
}
