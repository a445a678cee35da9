//! Loading reference tables from JSON documents.

use freight_estimator::calculator::{Calculator, CalculatorOptions, OptionsError};
use freight_estimator::model::{CalculatorInput, Season};
use freight_estimator::reference::{ReferenceData, ReferenceDataError};
use freight_estimator::traits::CostFactorSource;
use time::macros::{date, datetime};

const TABLES: &str = r#"{
  "cities": [
    { "id": "north", "name": "North Town", "region": "Upland" },
    { "id": "hub", "name": "Hub City", "region": "Plains" },
    { "id": "south", "name": "South Port", "region": "Coast" }
  ],
  "cargo_types": [
    { "id": "grain", "name": "Grain", "cost_multiplier": 1.0 }
  ],
  "vehicles": [
    { "id": "van", "name": "Van", "capacity": 1000, "cost_per_km": 100, "fuel_consumption": 10 },
    { "id": "rover", "name": "Rover", "capacity": 2000, "cost_per_km": 200, "fuel_consumption": 20,
      "capabilities": ["4x4", "off-road"] }
  ],
  "routes": [
    { "id": "north-hub", "origin": "north", "destination": "hub", "distance": 100,
      "road_condition": "unpaved", "dry_season_time": 2, "rainy_season_time": 4,
      "security_level": "low", "checkpoints": 1, "notes": "track" },
    { "id": "hub-south", "origin": "hub", "destination": "south", "distance": 100,
      "road_condition": "paved", "dry_season_time": 2, "rainy_season_time": 2,
      "security_level": "medium", "checkpoints": 0 }
  ],
  "cost_factors": [
    { "fuel_price_per_liter": 500, "driver_daily_rate": 10000, "overhead_percentage": 0.1,
      "urgency_multiplier": 2.0, "effective_date": "2025-06-01" },
    { "fuel_price_per_liter": 400, "driver_daily_rate": 10000, "overhead_percentage": 0.1,
      "urgency_multiplier": 2.0, "effective_date": "2024-01-01" }
  ]
}"#;

fn grain(origin: &str, destination: &str, weight: f64) -> CalculatorInput {
    CalculatorInput {
        origin: origin.to_string(),
        destination: destination.to_string(),
        cargo_type: "grain".to_string(),
        weight,
        is_urgent: false,
        season: Season::Dry,
    }
}

fn calculator(options: CalculatorOptions) -> Calculator {
    Calculator::new(ReferenceData::from_json_str(TABLES).unwrap(), options).unwrap()
}

fn mid_2025() -> time::OffsetDateTime {
    datetime!(2025-07-01 08:00 UTC)
}

#[test]
fn test_factor_history_is_sorted_by_date() {
    let data = ReferenceData::from_json_str(TABLES).unwrap();
    let history = data.cost_factor_history();
    assert_eq!(history[0].effective_date, date!(2024 - 01 - 01));
    assert_eq!(data.current_factors().fuel_price_per_liter, 500.0);
}

#[test]
fn test_unpaved_composite_needs_off_road_vehicle() {
    let calculator = calculator(CalculatorOptions::default());
    let result = calculator
        .calculate_at(&grain("north", "south", 500.0), mid_2025())
        .unwrap();

    assert_eq!(result.route.hub.as_deref(), Some("hub"));
    assert_eq!(result.vehicle.id, "rover");
    // (2 + 2 + 4) hours, off-road vehicle on a non-paved route
    assert_eq!(result.estimated_time.typical, 7.2);
    // 200 km at 20 l/100km and 500 per liter
    assert_eq!(result.estimated_cost.fuel, 20000);
    assert!(
        result
            .risk_factors
            .iter()
            .any(|risk| risk == "Unpaved roads increase vehicle breakdown risk")
    );
}

#[test]
fn test_older_timestamp_uses_older_pricing() {
    let calculator = calculator(CalculatorOptions::default());
    let input = grain("hub", "south", 500.0);

    let current = calculator.calculate_at(&input, mid_2025()).unwrap();
    let earlier = calculator
        .calculate_at(&input, datetime!(2025-01-15 08:00 UTC))
        .unwrap();

    // 100 km at 10 l/100km
    assert_eq!(current.estimated_cost.fuel, 5000);
    assert_eq!(earlier.estimated_cost.fuel, 4000);
}

#[test]
fn test_options_change_penalty_and_weight_limit() {
    let options = CalculatorOptions {
        max_weight_kg: 800.0,
        transfer_penalty_hours: 0.0,
        ..CalculatorOptions::default()
    };
    let calculator = calculator(options);

    assert!(
        calculator
            .calculate_at(&grain("north", "south", 900.0), mid_2025())
            .is_err()
    );

    let result = calculator
        .calculate_at(&grain("north", "south", 500.0), mid_2025())
        .unwrap();
    assert_eq!(result.route.segment.dry_season_time, 4.0);
}

#[test]
fn test_zero_length_driving_day_is_rejected() {
    let options = CalculatorOptions {
        driving_hours_per_day: 0.0,
        ..CalculatorOptions::default()
    };
    let err = Calculator::new(ReferenceData::from_json_str(TABLES).unwrap(), options).unwrap_err();
    assert_eq!(err, OptionsError::DrivingHours(0.0));
}

#[test]
fn test_duplicate_city_is_rejected() {
    let json = TABLES.replace(
        r#""id": "south", "name": "South Port""#,
        r#""id": "hub", "name": "South Port""#,
    );
    let err = ReferenceData::from_json_str(&json).unwrap_err();
    assert!(matches!(err, ReferenceDataError::DuplicateId { table: "city", .. }), "got {err}");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = ReferenceData::from_json_path("/nonexistent/freight-tables.json").unwrap_err();
    assert!(matches!(err, ReferenceDataError::Io(_)));
}

#[test]
fn test_result_serializes_for_presentation_layer() {
    let calculator = calculator(CalculatorOptions::default());
    let result = calculator
        .calculate_at(&grain("hub", "south", 500.0), mid_2025())
        .unwrap();

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["calculated_at"], "2025-07-01T08:00:00Z");
    assert_eq!(value["route"]["segment"]["road_condition"], "paved");
    assert_eq!(value["vehicle"]["id"], "van");
    assert_eq!(value["estimated_cost"]["fuel"], 5000);
}
