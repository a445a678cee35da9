//! Time and cost formulas.
//!
//! Rounding is half away from zero (`f64::round`) everywhere: hours to one
//! decimal, money to whole currency units.

use serde::{Deserialize, Serialize};

use crate::model::{
    CargoType, CostBreakdown, CostFactors, RouteSegment, Season, TimeEstimate, VehicleType,
};

/// Hours a driver covers per paid day.
pub const DEFAULT_DRIVING_HOURS_PER_DAY: f64 = 8.0;

const BEST_CASE_FACTOR: f64 = 0.8;
const WORST_CASE_FACTOR: f64 = 1.3;
const OFF_ROAD_ON_PAVED: f64 = 1.1;
const OFF_ROAD_OFF_PAVED: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub time: TimeEstimate,
    pub cost: CostBreakdown,
}

pub fn estimate(
    route: &RouteSegment,
    vehicle: &VehicleType,
    cargo: &CargoType,
    season: Season,
    is_urgent: bool,
    factors: &CostFactors,
) -> Estimate {
    estimate_with_day_length(
        route,
        vehicle,
        cargo,
        season,
        is_urgent,
        factors,
        DEFAULT_DRIVING_HOURS_PER_DAY,
    )
}

pub fn estimate_with_day_length(
    route: &RouteSegment,
    vehicle: &VehicleType,
    cargo: &CargoType,
    season: Season,
    is_urgent: bool,
    factors: &CostFactors,
    driving_hours_per_day: f64,
) -> Estimate {
    let time = time_estimate(route, vehicle, season);
    let cost = cost_breakdown(
        route,
        vehicle,
        cargo,
        time.typical,
        is_urgent,
        factors,
        driving_hours_per_day,
    );
    Estimate { time, cost }
}

/// Best/typical/worst transit hours.
pub fn time_estimate(route: &RouteSegment, vehicle: &VehicleType, season: Season) -> TimeEstimate {
    let base = route.base_time(season);
    let adjusted = base * vehicle_adjustment(route, vehicle);

    TimeEstimate {
        best: round_tenths(adjusted * BEST_CASE_FACTOR),
        typical: round_tenths(adjusted),
        worst: round_tenths(adjusted * WORST_CASE_FACTOR),
    }
}

/// Off-road vehicles lose time on paved roads and gain it elsewhere.
fn vehicle_adjustment(route: &RouteSegment, vehicle: &VehicleType) -> f64 {
    if !vehicle.is_off_road() {
        1.0
    } else if route.road_condition.is_paved() {
        OFF_ROAD_ON_PAVED
    } else {
        OFF_ROAD_OFF_PAVED
    }
}

/// Cost breakdown for `typical_hours` of driving.
///
/// The cargo multiplier is applied to the vehicle and driver fields but
/// not to the reported fuel figure, while the subtotal behind overhead and
/// total multiplies all three. Urgency scales the subtotal only.
pub fn cost_breakdown(
    route: &RouteSegment,
    vehicle: &VehicleType,
    cargo: &CargoType,
    typical_hours: f64,
    is_urgent: bool,
    factors: &CostFactors,
    driving_hours_per_day: f64,
) -> CostBreakdown {
    let fuel = fuel_cost(route.distance, vehicle, factors);
    let vehicle_cost = route.distance * vehicle.cost_per_km;
    let driver = driver_cost(typical_hours, factors, driving_hours_per_day);

    let multiplier = cargo.cost_multiplier;
    let subtotal = (fuel + vehicle_cost + driver) * multiplier;
    let overhead = subtotal * factors.overhead_percentage;

    let total = if is_urgent {
        subtotal * factors.urgency_multiplier + overhead
    } else {
        subtotal + overhead
    };

    CostBreakdown {
        fuel: round_money(fuel),
        vehicle: round_money(vehicle_cost * multiplier),
        driver: round_money(driver * multiplier),
        overhead: round_money(overhead),
        total: round_money(total),
    }
}

fn fuel_cost(distance_km: f64, vehicle: &VehicleType, factors: &CostFactors) -> f64 {
    let liters = (distance_km / 100.0) * vehicle.fuel_consumption;
    liters * factors.fuel_price_per_liter
}

/// Partial days are paid as full days.
fn driver_cost(hours: f64, factors: &CostFactors, driving_hours_per_day: f64) -> f64 {
    let days = (hours / driving_hours_per_day).ceil();
    days * factors.driver_daily_rate
}

fn round_tenths(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}

fn round_money(amount: f64) -> i64 {
    amount.round() as i64
}
