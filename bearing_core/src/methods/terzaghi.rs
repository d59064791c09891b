//! # Terzaghi (1943)
//!
//! ```text
//! Nq = e^(2π(0.75 − φ/360)·tan φ) / (2·cos²(45° + φ/2))
//! Nc = (Nq − 1)·cot φ                       (φ > 0)
//! Nγ = 2(Nq + 1)·tan φ / (1 + 0.4·sin 4φ)
//! ```
//!
//! The Nγ expression is the closed-form fit to Terzaghi's tabulated values.
//! At φ = 0 the cotangent is undefined and Nc takes Terzaghi's limit of 5.71
//! (from 1.5π + 1), not the Prandtl value used by the other methods.

use crate::factors::FactorSet;
use crate::units::Degrees;
use std::f64::consts::PI;

/// Terzaghi's Nc for a purely cohesive soil
pub const NC_AT_ZERO: f64 = 5.71;

/// Offset in the Nq exponent, 0.75 − φ/360
const NQ_EXPONENT_OFFSET: f64 = 0.75;

/// Amplitude of the sin 4φ term in the Nγ fit
const NGAMMA_SIN_AMPLITUDE: f64 = 0.4;

/// Terzaghi's bearing capacity factors for friction angle `phi_deg` (degrees).
///
/// # Example
///
/// ```rust
/// use bearing_core::methods::terzaghi;
///
/// let f = terzaghi(0.0);
/// assert_eq!(f.nc, 5.71);
/// assert!((f.nq - 1.0).abs() < 1e-12);
/// ```
pub fn terzaghi(phi_deg: f64) -> FactorSet {
    let phi = Degrees(phi_deg);

    let exponent = (PI * (NQ_EXPONENT_OFFSET - phi_deg / 360.0) * phi.tan()).exp();
    let nq = exponent.powi(2) / (2.0 * (Degrees(45.0) + phi * 0.5).cos().powi(2));

    let nc = if phi_deg > 0.0 {
        (nq - 1.0) * (1.0 / phi.tan())
    } else {
        NC_AT_ZERO
    };

    let ngamma = 2.0 * (nq + 1.0) * phi.tan() / (1.0 + NGAMMA_SIN_AMPLITUDE * (phi * 4.0).sin());

    FactorSet::new(nc, nq, ngamma)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 || (a - b).abs() / b.abs().max(1.0) < 1e-9
    }

    #[test]
    fn test_zero_friction() {
        let f = terzaghi(0.0);
        assert_eq!(f.nc, 5.71);
        assert!(approx_eq(f.nq, 1.0), "Nq = {}", f.nq);
        assert!(approx_eq(f.ngamma, 0.0), "Ngamma = {}", f.ngamma);
    }

    #[test]
    fn test_thirty_degrees() {
        let f = terzaghi(30.0);
        assert!(approx_eq(f.nq, 22.45574161854344), "Nq = {}", f.nq);
        assert!(approx_eq(f.nc, 37.16243459738733), "Nc = {}", f.nc);
        assert!(approx_eq(f.ngamma, 20.115978213181076), "Ngamma = {}", f.ngamma);
    }

    #[test]
    fn test_twenty_and_forty_degrees() {
        let f20 = terzaghi(20.0);
        assert!(approx_eq(f20.nq, 7.438734221725051), "Nq(20) = {}", f20.nq);
        assert!(approx_eq(f20.nc, 17.69027688405931), "Nc(20) = {}", f20.nc);
        assert!(approx_eq(f20.ngamma, 4.406911785788726), "Ngamma(20) = {}", f20.ngamma);

        let f40 = terzaghi(40.0);
        assert!(approx_eq(f40.nq, 81.27078029657604), "Nq(40) = {}", f40.nq);
        assert!(approx_eq(f40.nc, 95.66299079878502), "Nc(40) = {}", f40.nc);
    }

    #[test]
    fn test_right_angle_is_non_finite() {
        let f = terzaghi(90.0);
        assert!(!f.nq.is_finite(), "Nq = {}", f.nq);
        assert!(!f.is_finite());
    }
}
