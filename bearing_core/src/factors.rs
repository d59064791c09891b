//! # Bearing Capacity Factors
//!
//! The dimensionless multipliers of the general bearing capacity equation:
//!
//! ```text
//! q_ult = c·Nc + q·Nq + 0.5·γ·B·Nγ
//! ```
//!
//! | Factor | Contribution |
//! |--------|--------------|
//! | Nc     | Cohesion     |
//! | Nq     | Surcharge    |
//! | Nγ     | Self-weight  |
//!
//! Every method returns a [`FactorSet`]. Values can be read as fields or
//! looked up by name.
//!
//! ```rust
//! use bearing_core::factors::Factor;
//! use bearing_core::methods::meyerhof;
//!
//! let f = meyerhof(30.0);
//! assert_eq!(f.get(Factor::Nq), f.nq);
//! assert_eq!(f.by_name("Nc").unwrap(), f.nc);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

/// Names a single bearing capacity factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    /// Cohesion factor
    Nc,
    /// Surcharge factor
    Nq,
    /// Self-weight factor
    Ngamma,
}

impl Factor {
    /// All factors in output order
    pub const ALL: [Factor; 3] = [Factor::Nc, Factor::Nq, Factor::Ngamma];

    /// Key used in serialized output
    pub fn name(&self) -> &'static str {
        match self {
            Factor::Nc => "Nc",
            Factor::Nq => "Nq",
            Factor::Ngamma => "Ngamma",
        }
    }

    /// Symbol for display
    pub fn symbol(&self) -> &'static str {
        match self {
            Factor::Nc => "Nc",
            Factor::Nq => "Nq",
            Factor::Ngamma => "Nγ",
        }
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Factor {
    type Err = CalcError;

    /// Case-insensitive; "Nγ" is accepted for Ngamma.
    fn from_str(s: &str) -> CalcResult<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "nc" => Ok(Factor::Nc),
            "nq" => Ok(Factor::Nq),
            "ngamma" | "nγ" => Ok(Factor::Ngamma),
            _ => Err(CalcError::unknown_factor(trimmed)),
        }
    }
}

/// The three bearing capacity factors for one method and friction angle.
///
/// ## JSON Example
///
/// ```json
/// { "Nc": 30.14, "Nq": 18.4, "Ngamma": 22.4 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FactorSet {
    /// Cohesion factor
    #[serde(rename = "Nc")]
    pub nc: f64,

    /// Surcharge factor
    #[serde(rename = "Nq")]
    pub nq: f64,

    /// Self-weight factor
    #[serde(rename = "Ngamma")]
    pub ngamma: f64,
}

impl FactorSet {
    /// Build a factor set from its three values
    pub fn new(nc: f64, nq: f64, ngamma: f64) -> Self {
        Self { nc, nq, ngamma }
    }

    /// Value of a single factor
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Nc => self.nc,
            Factor::Nq => self.nq,
            Factor::Ngamma => self.ngamma,
        }
    }

    /// Value of a factor looked up by its name ("Nc", "Nq", "Ngamma")
    pub fn by_name(&self, name: &str) -> CalcResult<f64> {
        Ok(self.get(name.parse()?))
    }

    /// Iterate `(factor, value)` pairs in output order
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Copy with every value rounded to `decimals` places (half away from zero).
    ///
    /// Non-finite values, and values that would overflow once scaled, pass
    /// through unchanged.
    pub fn rounded(&self, decimals: u32) -> Self {
        let scale = 10f64.powi(decimals.min(f64::MAX_10_EXP as u32 + 1) as i32);
        let round = |v: f64| {
            let scaled = v * scale;
            if scaled.is_finite() {
                scaled.round() / scale
            } else {
                v
            }
        };
        Self {
            nc: round(self.nc),
            nq: round(self.nq),
            ngamma: round(self.ngamma),
        }
    }

    /// True when all three values are finite
    pub fn is_finite(&self) -> bool {
        self.nc.is_finite() && self.nq.is_finite() && self.ngamma.is_finite()
    }
}
