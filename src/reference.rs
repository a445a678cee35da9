//! Read-only reference data store.
//!
//! Tables are validated and indexed once at construction. Nothing mutates
//! them afterwards, so a [`ReferenceData`] can be shared freely across
//! threads.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;
use tracing::info;

use crate::catalog;
use crate::model::{CargoType, City, CostFactors, RouteSegment, VehicleType};
use crate::traits::{CargoCatalog, CityDirectory, CostFactorSource, RouteSource, VehicleCatalog};

/// Raw table document, as loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub cities: Vec<City>,
    pub cargo_types: Vec<CargoType>,
    pub vehicles: Vec<VehicleType>,
    pub routes: Vec<RouteSegment>,
    pub cost_factors: Vec<CostFactors>,
}

#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to decode reference tables: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate {table} id `{id}`")]
    DuplicateId { table: &'static str, id: String },
    #[error("segment `{segment}` references unknown city `{city}`")]
    UnknownCity { segment: String, city: String },
    #[error("segment `{segment}` loops back to `{city}`")]
    SelfLoop { segment: String, city: String },
    #[error("segments `{first}` and `{second}` join the same pair of cities")]
    DuplicatePair { first: String, second: String },
    #[error("segment `{segment}`: {reason}")]
    InvalidSegment { segment: String, reason: &'static str },
    #[error("cargo `{0}` has a cost multiplier below 1.0")]
    InvalidCargoMultiplier(String),
    #[error("vehicle `{0}` has a non-positive capacity")]
    InvalidVehicleCapacity(String),
    #[error("no vehicles defined")]
    NoVehicles,
    #[error("no cost factors defined")]
    NoCostFactors,
}

#[derive(Debug, Clone)]
pub struct ReferenceData {
    cities: Vec<City>,
    cargo_types: Vec<CargoType>,
    vehicles: Vec<VehicleType>,
    segments: Vec<RouteSegment>,
    /// Ascending by effective date.
    cost_factors: Vec<CostFactors>,
    city_index: HashMap<String, usize>,
    cargo_index: HashMap<String, usize>,
    segment_index: HashMap<String, usize>,
}

impl ReferenceData {
    /// The built-in Cameroon tables.
    pub fn builtin() -> Self {
        Self::from_tables(catalog::tables()).expect("built-in reference tables are valid")
    }

    pub fn from_json_str(json: &str) -> Result<Self, ReferenceDataError> {
        let tables: ReferenceTables = serde_json::from_str(json)?;
        Self::from_tables(tables)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn from_tables(tables: ReferenceTables) -> Result<Self, ReferenceDataError> {
        let ReferenceTables {
            cities,
            cargo_types,
            vehicles,
            routes,
            mut cost_factors,
        } = tables;

        let city_index = index_by_id("city", &cities, |city| &city.id)?;
        let cargo_index = index_by_id("cargo", &cargo_types, |cargo| &cargo.id)?;
        index_by_id("vehicle", &vehicles, |vehicle| &vehicle.id)?;
        let segment_index = index_by_id("segment", &routes, |segment| &segment.id)?;

        for cargo in &cargo_types {
            if !(cargo.cost_multiplier >= 1.0) {
                return Err(ReferenceDataError::InvalidCargoMultiplier(cargo.id.clone()));
            }
        }

        if vehicles.is_empty() {
            return Err(ReferenceDataError::NoVehicles);
        }
        for vehicle in &vehicles {
            if !(vehicle.capacity > 0.0) {
                return Err(ReferenceDataError::InvalidVehicleCapacity(vehicle.id.clone()));
            }
        }

        validate_segments(&routes, &city_index)?;

        if cost_factors.is_empty() {
            return Err(ReferenceDataError::NoCostFactors);
        }
        // Stable sort keeps table order among sets sharing a date.
        cost_factors.sort_by_key(|factors| factors.effective_date);

        info!(
            cities = cities.len(),
            cargo_types = cargo_types.len(),
            vehicles = vehicles.len(),
            segments = routes.len(),
            cost_factor_sets = cost_factors.len(),
            "reference data loaded"
        );

        Ok(Self {
            cities,
            cargo_types,
            vehicles,
            segments: routes,
            cost_factors,
            city_index,
            cargo_index,
            segment_index,
        })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn cities_in_region<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a City> + 'a {
        self.cities.iter().filter(move |city| city.region == region)
    }

    /// Unique region names, sorted.
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = self.cities.iter().map(|city| city.region.as_str()).collect();
        regions.sort_unstable();
        regions.dedup();
        regions
    }

    pub fn cargo_types(&self) -> &[CargoType] {
        &self.cargo_types
    }

    /// Cargo that ships in any vehicle.
    pub fn standard_cargo(&self) -> impl Iterator<Item = &CargoType> {
        self.cargo_types.iter().filter(|cargo| !cargo.requires_special_vehicle)
    }

    pub fn special_cargo(&self) -> impl Iterator<Item = &CargoType> {
        self.cargo_types.iter().filter(|cargo| cargo.requires_special_vehicle)
    }

    pub fn vehicle(&self, id: &str) -> Option<&VehicleType> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    pub fn segment(&self, id: &str) -> Option<&RouteSegment> {
        self.segment_index.get(id).map(|&i| &self.segments[i])
    }

    /// Full factor history, oldest first.
    pub fn cost_factor_history(&self) -> &[CostFactors] {
        &self.cost_factors
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

fn index_by_id<T>(
    table: &'static str,
    rows: &[T],
    id: impl Fn(&T) -> &String,
) -> Result<HashMap<String, usize>, ReferenceDataError> {
    let mut index = HashMap::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        if index.insert(id(row).clone(), i).is_some() {
            return Err(ReferenceDataError::DuplicateId {
                table,
                id: id(row).clone(),
            });
        }
    }
    Ok(index)
}

fn validate_segments(
    segments: &[RouteSegment],
    city_index: &HashMap<String, usize>,
) -> Result<(), ReferenceDataError> {
    let mut pairs: HashMap<(&str, &str), &str> = HashMap::new();

    for segment in segments {
        for city in [&segment.origin, &segment.destination] {
            if !city_index.contains_key(city) {
                return Err(ReferenceDataError::UnknownCity {
                    segment: segment.id.clone(),
                    city: city.clone(),
                });
            }
        }
        if segment.origin == segment.destination {
            return Err(ReferenceDataError::SelfLoop {
                segment: segment.id.clone(),
                city: segment.origin.clone(),
            });
        }
        if !(segment.distance > 0.0) {
            return Err(invalid(segment, "distance must be positive"));
        }
        if !(segment.dry_season_time > 0.0) || !(segment.rainy_season_time > 0.0) {
            return Err(invalid(segment, "transit times must be positive"));
        }

        let key = unordered_pair(&segment.origin, &segment.destination);
        if let Some(first) = pairs.insert(key, &segment.id) {
            return Err(ReferenceDataError::DuplicatePair {
                first: first.to_string(),
                second: segment.id.clone(),
            });
        }
    }

    Ok(())
}

fn invalid(segment: &RouteSegment, reason: &'static str) -> ReferenceDataError {
    ReferenceDataError::InvalidSegment {
        segment: segment.id.clone(),
        reason,
    }
}

fn unordered_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

impl RouteSource for ReferenceData {
    fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }
}

impl VehicleCatalog for ReferenceData {
    fn vehicles(&self) -> &[VehicleType] {
        &self.vehicles
    }
}

impl CargoCatalog for ReferenceData {
    fn cargo(&self, id: &str) -> Option<&CargoType> {
        self.cargo_index.get(id).map(|&i| &self.cargo_types[i])
    }
}

impl CityDirectory for ReferenceData {
    fn city(&self, id: &str) -> Option<&City> {
        self.city_index.get(id).map(|&i| &self.cities[i])
    }
}

impl CostFactorSource for ReferenceData {
    fn current_factors(&self) -> &CostFactors {
        // Construction rejects an empty history.
        &self.cost_factors[self.cost_factors.len() - 1]
    }

    fn factors_for(&self, date: Date) -> &CostFactors {
        self.cost_factors
            .iter()
            .rev()
            .find(|factors| factors.effective_date <= date)
            .unwrap_or_else(|| self.current_factors())
    }
}
