//! # Bearing Capacity Methods
//!
//! Five classical methods for the factors Nc, Nq and Nγ from a friction angle φ
//! in degrees. Each method is a standalone pure function; [`BearingMethod`]
//! selects one by name.
//!
//! | Method   | Nq / Nc basis     | Nγ                           | Nc at φ = 0 |
//! |----------|-------------------|------------------------------|-------------|
//! | Terzaghi | Terzaghi (1943)   | 2(Nq+1)tanφ / (1+0.4 sin 4φ) | 5.71        |
//! | Meyerhof | Reissner/Prandtl  | (Nq−1)tan(1.4φ)              | 5.14        |
//! | Vesic    | Reissner/Prandtl  | 2(Nq+1)tanφ                  | 5.14        |
//! | Hansen   | Reissner/Prandtl  | 1.5(Nq−1)tanφ                | 5.14        |
//! | EC7      | Reissner/Prandtl  | 2(Nq−1)tanφ                  | 5.14        |
//!
//! The functions do not validate φ. At φ = 90° the tangent blows up and the
//! results are infinite or NaN; they are returned as-is.
//!
//! ## Example
//!
//! ```rust
//! use bearing_core::methods::BearingMethod;
//!
//! let method: BearingMethod = "Hansen".parse().unwrap();
//! let f = method.factors(30.0);
//! assert!((f.nq - 18.401).abs() < 1e-3);
//! ```

pub mod ec7;
pub mod hansen;
pub mod meyerhof;
pub mod terzaghi;
pub mod vesic;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::factors::FactorSet;

pub use ec7::ec7;
pub use hansen::hansen;
pub use meyerhof::meyerhof;
pub use terzaghi::terzaghi;
pub use vesic::vesic;

/// Literature references for each method's formulas.
pub mod method_ref {
    /// Terzaghi's bearing capacity theory
    pub const TERZAGHI: &str = "Terzaghi, K. (1943). Theoretical Soil Mechanics. Wiley";
    /// Meyerhof's general bearing capacity equation
    pub const MEYERHOF: &str =
        "Meyerhof, G.G. (1963). Some recent research on the bearing capacity of foundations. Can. Geotech. J. 1(1)";
    /// Vesic's bearing capacity factors
    pub const VESIC: &str =
        "Vesic, A.S. (1973). Analysis of ultimate loads of shallow foundations. J. Soil Mech. Found. Div. 99(SM1)";
    /// Hansen's extended formula
    pub const HANSEN: &str =
        "Hansen, J.B. (1970). A revised and extended formula for bearing capacity. Danish Geotech. Inst. Bull. 28";
    /// Eurocode 7 drained bearing resistance
    pub const EC7: &str = "EN 1997-1:2004 Eurocode 7, Annex D.4";
}

/// A named bearing capacity method.
///
/// Serializes as its canonical name (`"Terzaghi"`, ..., `"EC7"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BearingMethod {
    Terzaghi,
    #[default]
    Meyerhof,
    Vesic,
    Hansen,
    EC7,
}

impl BearingMethod {
    /// All methods, in registry order
    pub const ALL: [BearingMethod; 5] = [
        BearingMethod::Terzaghi,
        BearingMethod::Meyerhof,
        BearingMethod::Vesic,
        BearingMethod::Hansen,
        BearingMethod::EC7,
    ];

    /// Canonical registry name
    pub fn name(&self) -> &'static str {
        match self {
            BearingMethod::Terzaghi => "Terzaghi",
            BearingMethod::Meyerhof => "Meyerhof",
            BearingMethod::Vesic => "Vesic",
            BearingMethod::Hansen => "Hansen",
            BearingMethod::EC7 => "EC7",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            BearingMethod::Terzaghi => "Terzaghi (1943)",
            BearingMethod::Meyerhof => "Meyerhof (1963)",
            BearingMethod::Vesic => "Vesic (1973)",
            BearingMethod::Hansen => "Hansen (1970)",
            BearingMethod::EC7 => "Eurocode 7 (EC7)",
        }
    }

    /// Literature reference for the method's formulas
    pub fn reference(&self) -> &'static str {
        match self {
            BearingMethod::Terzaghi => method_ref::TERZAGHI,
            BearingMethod::Meyerhof => method_ref::MEYERHOF,
            BearingMethod::Vesic => method_ref::VESIC,
            BearingMethod::Hansen => method_ref::HANSEN,
            BearingMethod::EC7 => method_ref::EC7,
        }
    }

    /// Nc used when φ = 0, where cot φ is undefined
    pub fn nc_at_zero(&self) -> f64 {
        match self {
            BearingMethod::Terzaghi => terzaghi::NC_AT_ZERO,
            BearingMethod::Meyerhof => meyerhof::NC_AT_ZERO,
            BearingMethod::Vesic => vesic::NC_AT_ZERO,
            BearingMethod::Hansen => hansen::NC_AT_ZERO,
            BearingMethod::EC7 => ec7::NC_AT_ZERO,
        }
    }

    /// Evaluate this method at friction angle `phi_deg` (degrees)
    pub fn factors(&self, phi_deg: f64) -> FactorSet {
        debug!(method = self.name(), phi_deg, "evaluating bearing capacity factors");

        let factors = match self {
            BearingMethod::Terzaghi => terzaghi(phi_deg),
            BearingMethod::Meyerhof => meyerhof(phi_deg),
            BearingMethod::Vesic => vesic(phi_deg),
            BearingMethod::Hansen => hansen(phi_deg),
            BearingMethod::EC7 => ec7(phi_deg),
        };

        if !factors.is_finite() {
            debug!(
                method = self.name(),
                phi_deg,
                nc = factors.nc,
                nq = factors.nq,
                ngamma = factors.ngamma,
                "non-finite bearing capacity factors"
            );
        }

        factors
    }
}

impl std::fmt::Display for BearingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BearingMethod {
    type Err = CalcError;

    /// Case-insensitive match on the canonical name. "Eurocode7" and
    /// "Eurocode 7" also select EC7.
    fn from_str(s: &str) -> CalcResult<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "terzaghi" => Ok(BearingMethod::Terzaghi),
            "meyerhof" => Ok(BearingMethod::Meyerhof),
            "vesic" => Ok(BearingMethod::Vesic),
            "hansen" => Ok(BearingMethod::Hansen),
            "ec7" | "eurocode7" | "eurocode 7" => Ok(BearingMethod::EC7),
            _ => Err(CalcError::unknown_method(trimmed)),
        }
    }
}

/// Evaluate every method at `phi_deg`, in [`BearingMethod::ALL`] order.
pub fn evaluate_all(phi_deg: f64) -> Vec<(BearingMethod, FactorSet)> {
    BearingMethod::ALL
        .iter()
        .map(|m| (*m, m.factors(phi_deg)))
        .collect()
}
