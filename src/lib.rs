//! freight-estimator core
//!
//! Table-driven delivery cost and time estimates for road freight: route
//! lookup with a single-hub fallback, vehicle selection, cost/time formulas
//! and trip advisories.

pub mod traits;
pub mod model;
pub mod catalog;
pub mod reference;
pub mod routing;
pub mod vehicle;
pub mod estimate;
pub mod advisory;
pub mod calculator;
pub mod format;
pub mod report;

pub use calculator::{CalculationError, Calculator, CalculatorOptions, InputIssue, OptionsError};
pub use model::{CalculationResult, CalculatorInput, Season};
pub use reference::{ReferenceData, ReferenceDataError};
