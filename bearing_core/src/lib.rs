//! # bearing_core - Soil Bearing Capacity Factors
//!
//! `bearing_core` computes the bearing capacity factors Nc, Nq and Nγ from a
//! soil friction angle using five classical methods: Terzaghi, Meyerhof,
//! Vesic, Hansen and Eurocode 7.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions, one friction angle in, one [`FactorSet`] out
//! - **Permissive**: No input validation; degenerate angles yield NaN/infinity
//! - **JSON-Ready**: All types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use bearing_core::methods::{meyerhof, terzaghi, BearingMethod};
//!
//! let f = meyerhof(30.0);
//! assert!((f.nc - 30.14).abs() < 0.01);
//!
//! assert_eq!(terzaghi(0.0).nc, 5.71);
//!
//! let ec7 = "EC7".parse::<BearingMethod>().unwrap().factors(30.0);
//! let json = serde_json::to_string(&ec7.rounded(2)).unwrap();
//! assert_eq!(json, r#"{"Nc":30.14,"Nq":18.4,"Ngamma":20.09}"#);
//! ```
//!
//! ## Modules
//!
//! - [`methods`] - The five methods and the [`BearingMethod`] registry
//! - [`factors`] - The [`FactorSet`] record and named lookup
//! - [`units`] - Degree/radian angle wrappers
//! - [`errors`] - Structured error types

pub mod errors;
pub mod factors;
pub mod methods;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use factors::{Factor, FactorSet};
pub use methods::{ec7, evaluate_all, hansen, meyerhof, terzaghi, vesic, BearingMethod};
