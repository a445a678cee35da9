//! Shipment calculation pipeline: validate, resolve, select, estimate, advise.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::debug;

use crate::advisory::generate_advisories;
use crate::estimate::{DEFAULT_DRIVING_HOURS_PER_DAY, estimate_with_day_length};
use crate::model::{CalculationResult, CalculatorInput, RoadCondition};
use crate::reference::ReferenceData;
use crate::routing::{DEFAULT_TRANSFER_PENALTY_HOURS, resolve_route_with_penalty};
use crate::traits::{CargoCatalog, CityDirectory, CostFactorSource};
use crate::vehicle::{VehicleRequirements, choose_vehicle};

/// Heaviest shipment accepted without special arrangements.
pub const DEFAULT_MAX_WEIGHT_KG: f64 = 25_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorOptions {
    pub max_weight_kg: f64,
    /// Added to both season times of a composite route.
    pub transfer_penalty_hours: f64,
    /// Driver time covered by one daily rate.
    pub driving_hours_per_day: f64,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            max_weight_kg: DEFAULT_MAX_WEIGHT_KG,
            transfer_penalty_hours: DEFAULT_TRANSFER_PENALTY_HOURS,
            driving_hours_per_day: DEFAULT_DRIVING_HOURS_PER_DAY,
        }
    }
}

impl CalculatorOptions {
    /// Reject values that would make estimates meaningless.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.max_weight_kg.is_finite() && self.max_weight_kg > 0.0) {
            return Err(OptionsError::MaxWeight(self.max_weight_kg));
        }
        if !(self.transfer_penalty_hours.is_finite() && self.transfer_penalty_hours >= 0.0) {
            return Err(OptionsError::TransferPenalty(self.transfer_penalty_hours));
        }
        if !(self.driving_hours_per_day.is_finite() && self.driving_hours_per_day > 0.0) {
            return Err(OptionsError::DrivingHours(self.driving_hours_per_day));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("max_weight_kg must be positive and finite, got {0}")]
    MaxWeight(f64),
    #[error("transfer_penalty_hours must be non-negative and finite, got {0}")]
    TransferPenalty(f64),
    #[error("driving_hours_per_day must be positive and finite, got {0}")]
    DrivingHours(f64),
}

/// A single problem with a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputIssue {
    MissingOrigin,
    MissingDestination,
    MissingCargoType,
    SameOriginAndDestination,
    NonPositiveWeight,
    WeightExceedsLimit { max_kg: f64 },
}

impl fmt::Display for InputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOrigin => f.write_str("Origin city is required"),
            Self::MissingDestination => f.write_str("Destination city is required"),
            Self::MissingCargoType => f.write_str("Cargo type is required"),
            Self::SameOriginAndDestination => {
                f.write_str("Origin and destination cannot be the same")
            }
            Self::NonPositiveWeight => f.write_str("Valid cargo weight is required"),
            Self::WeightExceedsLimit { max_kg } => write!(
                f,
                "Weight exceeds maximum capacity ({} kg). Contact us for special arrangements",
                crate::format::group_thousands(max_kg.round() as i64)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("no route between `{origin}` and `{destination}`")]
    RouteNotFound { origin: String, destination: String },
    #[error("unknown cargo type `{0}`")]
    CargoNotFound(String),
    #[error("invalid input: {}", join_issues(.0))]
    InvalidInput(Vec<InputIssue>),
    #[error("no vehicle classes available")]
    NoVehicleAvailable,
}

impl CalculationError {
    /// Text suitable for showing to the person who filled in the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::RouteNotFound { .. } => concat!(
                "Route not found between selected cities. ",
                "Please try different locations or contact us for custom route analysis."
            )
            .to_string(),
            Self::CargoNotFound(_) | Self::NoVehicleAvailable => {
                "An error occurred. Please try again or contact support.".to_string()
            }
            Self::InvalidInput(issues) => join_issues(issues),
        }
    }
}

fn join_issues(issues: &[InputIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Runs calculations against one immutable set of reference data.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    data: ReferenceData,
    options: CalculatorOptions,
}

impl Calculator {
    pub fn new(data: ReferenceData, options: CalculatorOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self { data, options })
    }

    /// Built-in tables with default options.
    pub fn builtin() -> Self {
        Self {
            data: ReferenceData::builtin(),
            options: CalculatorOptions::default(),
        }
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    /// Every problem with the request, empty when it is acceptable.
    pub fn validate(&self, input: &CalculatorInput) -> Vec<InputIssue> {
        let mut issues = Vec::new();

        if input.origin.is_empty() {
            issues.push(InputIssue::MissingOrigin);
        }
        if input.destination.is_empty() {
            issues.push(InputIssue::MissingDestination);
        }
        if !input.origin.is_empty() && input.origin == input.destination {
            issues.push(InputIssue::SameOriginAndDestination);
        }
        if input.cargo_type.is_empty() {
            issues.push(InputIssue::MissingCargoType);
        }
        if !(input.weight.is_finite() && input.weight > 0.0) {
            issues.push(InputIssue::NonPositiveWeight);
        } else if input.weight > self.options.max_weight_kg {
            issues.push(InputIssue::WeightExceedsLimit {
                max_kg: self.options.max_weight_kg,
            });
        }

        issues
    }

    /// Calculate an estimate stamped with the current UTC time.
    pub fn calculate(
        &self,
        input: &CalculatorInput,
    ) -> Result<CalculationResult, CalculationError> {
        self.calculate_at(input, OffsetDateTime::now_utc())
    }

    /// Calculate an estimate priced with the factors in effect at `at`.
    ///
    /// Identical inputs and timestamp give identical results.
    pub fn calculate_at(
        &self,
        input: &CalculatorInput,
        at: OffsetDateTime,
    ) -> Result<CalculationResult, CalculationError> {
        let issues = self.validate(input);
        if !issues.is_empty() {
            return Err(CalculationError::InvalidInput(issues));
        }

        let route_not_found = || CalculationError::RouteNotFound {
            origin: input.origin.clone(),
            destination: input.destination.clone(),
        };

        let route = resolve_route_with_penalty(
            &self.data,
            &input.origin,
            &input.destination,
            self.options.transfer_penalty_hours,
        )
        .ok_or_else(route_not_found)?;

        let cargo = self
            .data
            .cargo(&input.cargo_type)
            .ok_or_else(|| CalculationError::CargoNotFound(input.cargo_type.clone()))?;

        let origin = self.data.city(&input.origin).ok_or_else(route_not_found)?;
        let destination = self.data.city(&input.destination).ok_or_else(route_not_found)?;

        let requirements = VehicleRequirements {
            refrigeration: cargo.requires_refrigeration(),
            off_road: route.segment.road_condition == RoadCondition::Unpaved,
        };
        // Only an empty catalog yields no selection, and loading rejects one.
        let selection = choose_vehicle(&self.data, input.weight, requirements)
            .ok_or(CalculationError::NoVehicleAvailable)?;

        let factors = self.data.factors_for(at.date());
        let estimate = estimate_with_day_length(
            &route.segment,
            selection.vehicle,
            cargo,
            input.season,
            input.is_urgent,
            factors,
            self.options.driving_hours_per_day,
        );

        let advisories = generate_advisories(&route.segment, input, cargo, selection.vehicle);

        debug!(
            origin = %input.origin,
            destination = %input.destination,
            vehicle = %selection.vehicle.id,
            composite = route.is_composite(),
            total = estimate.cost.total,
            "calculated estimate"
        );

        Ok(CalculationResult {
            estimated_time: estimate.time,
            estimated_cost: estimate.cost,
            route,
            origin: origin.clone(),
            destination: destination.clone(),
            vehicle: selection.vehicle.clone(),
            vehicle_fallback: selection.fallback,
            cargo: cargo.clone(),
            recommendations: advisories.recommendations,
            risk_factors: advisories.risk_factors,
            calculated_at: at,
        })
    }

    /// Calculate many requests in parallel. Outcomes keep input order and
    /// share one timestamp.
    pub fn calculate_batch(
        &self,
        inputs: &[CalculatorInput],
    ) -> Vec<Result<CalculationResult, CalculationError>> {
        let at = OffsetDateTime::now_utc();
        self.calculate_batch_at(inputs, at)
    }

    pub fn calculate_batch_at(
        &self,
        inputs: &[CalculatorInput],
        at: OffsetDateTime,
    ) -> Vec<Result<CalculationResult, CalculationError>> {
        inputs.par_iter().map(|input| self.calculate_at(input, at)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Season;

    fn input(origin: &str, destination: &str, weight: f64) -> CalculatorInput {
        CalculatorInput {
            origin: origin.to_string(),
            destination: destination.to_string(),
            cargo_type: "food-dry".to_string(),
            weight,
            is_urgent: false,
            season: Season::Dry,
        }
    }

    #[test]
    fn test_validation_collects_all_issues() {
        let calculator = Calculator::builtin();
        let mut bad = input("", "", 0.0);
        bad.cargo_type.clear();
        assert_eq!(
            calculator.validate(&bad),
            vec![
                InputIssue::MissingOrigin,
                InputIssue::MissingDestination,
                InputIssue::MissingCargoType,
                InputIssue::NonPositiveWeight,
            ]
        );
    }

    #[test]
    fn test_weight_limit() {
        let calculator = Calculator::builtin();
        assert!(calculator.validate(&input("douala", "yaounde", 25_000.0)).is_empty());
        assert_eq!(
            calculator.validate(&input("douala", "yaounde", 25_000.5)),
            vec![InputIssue::WeightExceedsLimit { max_kg: 25_000.0 }]
        );
        assert_eq!(
            calculator.validate(&input("douala", "yaounde", f64::NAN)),
            vec![InputIssue::NonPositiveWeight]
        );
    }

    #[test]
    fn test_issue_messages() {
        assert_eq!(
            InputIssue::WeightExceedsLimit { max_kg: 25_000.0 }.to_string(),
            "Weight exceeds maximum capacity (25,000 kg). Contact us for special arrangements"
        );
        let err = CalculationError::InvalidInput(vec![InputIssue::SameOriginAndDestination]);
        assert_eq!(err.user_message(), "Origin and destination cannot be the same");
        assert_eq!(err.to_string(), "invalid input: Origin and destination cannot be the same");
    }

    #[test]
    fn test_unknown_city_is_route_not_found() {
        let calculator = Calculator::builtin();
        let err = calculator.calculate(&input("douala", "timbuktu", 100.0)).unwrap_err();
        assert_eq!(
            err,
            CalculationError::RouteNotFound {
                origin: "douala".to_string(),
                destination: "timbuktu".to_string(),
            }
        );
        assert!(err.user_message().starts_with("Route not found"));
    }

    #[test]
    fn test_rejects_bad_options() {
        let zero_day = CalculatorOptions {
            driving_hours_per_day: 0.0,
            ..CalculatorOptions::default()
        };
        assert_eq!(
            Calculator::new(ReferenceData::builtin(), zero_day).unwrap_err(),
            OptionsError::DrivingHours(0.0)
        );

        let negative_penalty = CalculatorOptions {
            transfer_penalty_hours: -1.0,
            ..CalculatorOptions::default()
        };
        assert_eq!(
            Calculator::new(ReferenceData::builtin(), negative_penalty).unwrap_err(),
            OptionsError::TransferPenalty(-1.0)
        );

        let nan_weight = CalculatorOptions {
            max_weight_kg: f64::NAN,
            ..CalculatorOptions::default()
        };
        assert!(matches!(
            Calculator::new(ReferenceData::builtin(), nan_weight),
            Err(OptionsError::MaxWeight(_))
        ));

        let zero_weight = CalculatorOptions {
            max_weight_kg: 0.0,
            ..CalculatorOptions::default()
        };
        assert!(zero_weight.validate().is_err());

        let infinite_penalty = CalculatorOptions {
            transfer_penalty_hours: f64::INFINITY,
            ..CalculatorOptions::default()
        };
        assert!(infinite_penalty.validate().is_err());
    }

    #[test]
    fn test_default_options_are_valid() {
        assert_eq!(CalculatorOptions::default().validate(), Ok(()));
        let no_penalty = CalculatorOptions {
            transfer_penalty_hours: 0.0,
            ..CalculatorOptions::default()
        };
        assert!(Calculator::new(ReferenceData::builtin(), no_penalty).is_ok());
    }

    #[test]
    fn test_no_vehicle_error_is_not_a_route_error() {
        let err = CalculationError::NoVehicleAvailable;
        assert_eq!(err.to_string(), "no vehicle classes available");
        assert!(!err.user_message().starts_with("Route not found"));
    }

    #[test]
    fn test_calculator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Calculator>();
    }
}
