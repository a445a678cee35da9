//! Test fixtures for freight-estimator.
//!
//! Provides a shipment builder with sensible defaults and a fixed
//! calculation timestamp.

#![allow(dead_code)]

use freight_estimator::{CalculatorInput, Season};
use time::OffsetDateTime;
use time::macros::datetime;

/// Builder for test shipments. Defaults to 2000 kg of dry food in the dry
/// season, not urgent.
#[derive(Clone, Debug)]
pub struct Shipment {
    input: CalculatorInput,
}

impl Shipment {
    pub fn new(origin: &str, destination: &str) -> Self {
        Self {
            input: CalculatorInput {
                origin: origin.to_string(),
                destination: destination.to_string(),
                cargo_type: "food-dry".to_string(),
                weight: 2000.0,
                is_urgent: false,
                season: Season::Dry,
            },
        }
    }

    pub fn cargo(mut self, cargo_type: &str) -> Self {
        self.input.cargo_type = cargo_type.to_string();
        self
    }

    pub fn weight(mut self, kg: f64) -> Self {
        self.input.weight = kg;
        self
    }

    pub fn urgent(mut self) -> Self {
        self.input.is_urgent = true;
        self
    }

    pub fn rainy(mut self) -> Self {
        self.input.season = Season::Rainy;
        self
    }

    pub fn build(self) -> CalculatorInput {
        self.input
    }
}

/// Calculation timestamp after the built-in cost factors took effect.
pub fn fixed_time() -> OffsetDateTime {
    datetime!(2025-12-01 10:30 UTC)
}
