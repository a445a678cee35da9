//! Shipment domain types.
//!
//! Reference records (cities, segments, cargo, vehicles, cost factors) are
//! loaded once and never mutated. Requests and results live for a single
//! calculation.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub region: String,
}

/// Surface quality of a road segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadCondition {
    Paved,
    Mixed,
    Unpaved,
}

impl RoadCondition {
    /// Worse of two conditions (unpaved > mixed > paved).
    pub fn worst(self, other: Self) -> Self {
        match (self, other) {
            (Self::Unpaved, _) | (_, Self::Unpaved) => Self::Unpaved,
            (Self::Mixed, _) | (_, Self::Mixed) => Self::Mixed,
            _ => Self::Paved,
        }
    }

    pub fn is_paved(self) -> bool {
        self == Self::Paved
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Paved => "Paved Road",
            Self::Unpaved => "Unpaved Road",
            Self::Mixed => "Mixed Conditions",
        }
    }
}

/// Security risk along a segment, ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityLevel {
    Low,
    Medium,
    High,
}

impl SecurityLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Moderate Risk",
            Self::High => "High Risk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Dry,
    Rainy,
}

/// Special equipment a vehicle class carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    #[serde(rename = "refrigerated")]
    Refrigerated,
    #[serde(rename = "4x4")]
    FourByFour,
    #[serde(rename = "off-road")]
    OffRoad,
}

/// A recorded road link between two cities. Endpoints are unordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub id: String,
    pub origin: String,
    pub destination: String,
    /// Kilometers.
    pub distance: f64,
    pub road_condition: RoadCondition,
    /// Hours.
    pub dry_season_time: f64,
    /// Hours.
    pub rainy_season_time: f64,
    pub security_level: SecurityLevel,
    pub checkpoints: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RouteSegment {
    /// True when the segment joins `a` and `b` in either orientation.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.origin == a && self.destination == b) || (self.origin == b && self.destination == a)
    }

    pub fn touches(&self, city: &str) -> bool {
        self.origin == city || self.destination == city
    }

    /// The endpoint that is not `city`, if the segment touches it.
    pub fn other_end(&self, city: &str) -> Option<&str> {
        if self.origin == city {
            Some(self.destination.as_str())
        } else if self.destination == city {
            Some(self.origin.as_str())
        } else {
            None
        }
    }

    pub fn base_time(&self, season: Season) -> f64 {
        match season {
            Season::Dry => self.dry_season_time,
            Season::Rainy => self.rainy_season_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoType {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<String>,
    /// 1.0 = standard handling.
    pub cost_multiplier: f64,
    #[serde(default)]
    pub requires_special_vehicle: bool,
}

impl CargoType {
    /// Whether the special requirements ask for refrigerated transport.
    pub fn requires_refrigeration(&self) -> bool {
        self.special_requirements
            .as_deref()
            .map(|text| text.to_lowercase().contains("refrigerat"))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleType {
    pub id: String,
    pub name: String,
    /// Kilograms.
    pub capacity: f64,
    /// Currency units per kilometer.
    pub cost_per_km: f64,
    /// Liters per 100 km.
    pub fuel_consumption: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<Capability>,
}

impl VehicleType {
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn is_refrigerated(&self) -> bool {
        self.has(Capability::Refrigerated)
    }

    pub fn is_off_road(&self) -> bool {
        self.has(Capability::OffRoad) || self.has(Capability::FourByFour)
    }

    pub fn min_weight(&self) -> f64 {
        self.min_weight.unwrap_or(0.0)
    }
}

/// Pricing inputs in effect from `effective_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostFactors {
    pub fuel_price_per_liter: f64,
    /// Per 8-hour driving day.
    pub driver_daily_rate: f64,
    /// Fraction of the subtotal, 0.20 = 20%.
    pub overhead_percentage: f64,
    pub urgency_multiplier: f64,
    pub effective_date: Date,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub origin: String,
    pub destination: String,
    pub cargo_type: String,
    /// Kilograms.
    pub weight: f64,
    #[serde(default)]
    pub is_urgent: bool,
    pub season: Season,
}

/// Hours, rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimate {
    pub best: f64,
    pub typical: f64,
    pub worst: f64,
}

/// Whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub fuel: i64,
    pub vehicle: i64,
    pub driver: i64,
    pub overhead: i64,
    pub total: i64,
}

/// A segment as returned by the resolver, with the hub it was chained
/// through when no direct segment exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRoute {
    pub segment: RouteSegment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub: Option<String>,
}

impl ResolvedRoute {
    pub fn is_composite(&self) -> bool {
        self.hub.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub estimated_time: TimeEstimate,
    pub estimated_cost: CostBreakdown,
    pub route: ResolvedRoute,
    pub origin: City,
    pub destination: City,
    pub vehicle: VehicleType,
    /// Set when no vehicle met every constraint and the largest one was used.
    pub vehicle_fallback: bool,
    pub cargo: CargoType,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub calculated_at: OffsetDateTime,
}
