//! # Angle Units
//!
//! Friction angles are supplied in degrees and every trigonometric call takes
//! radians. These newtypes keep the two apart; both serialize as bare numbers.
//!
//! ## Example
//!
//! ```rust
//! use bearing_core::units::{Degrees, Radians};
//!
//! let phi = Degrees(180.0);
//! let rad: Radians = phi.into();
//! assert!((rad.0 - std::f64::consts::PI).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Mul};

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0 * PI / 180.0)
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0 * 180.0 / PI)
    }
}

impl Degrees {
    /// Convert to radians
    #[inline]
    pub fn to_radians(self) -> Radians {
        self.into()
    }

    /// tan of this angle
    #[inline]
    pub fn tan(self) -> f64 {
        self.to_radians().0.tan()
    }

    /// sin of this angle
    #[inline]
    pub fn sin(self) -> f64 {
        self.to_radians().0.sin()
    }

    /// cos of this angle
    #[inline]
    pub fn cos(self) -> f64 {
        self.to_radians().0.cos()
    }
}

impl Add for Degrees {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Degrees(self.0 + rhs.0)
    }
}

impl Mul<f64> for Degrees {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Degrees(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_radian_conversion() {
        let rad: Radians = Degrees(90.0).into();
        assert!((rad.0 - PI / 2.0).abs() < 1e-12);

        let deg: Degrees = Radians(PI / 4.0).into();
        assert!((deg.0 - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_trig_takes_degrees() {
        assert!((Degrees(45.0).tan() - 1.0).abs() < 1e-12);
        assert!((Degrees(30.0).sin() - 0.5).abs() < 1e-12);
        assert!((Degrees(60.0).cos() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Degrees(45.0) + Degrees(15.0), Degrees(60.0));
        assert_eq!(Degrees(30.0) * 1.4, Degrees(30.0 * 1.4));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Degrees(30.0)).unwrap();
        assert_eq!(json, "30.0");
    }
}
