//! Built-in reference tables for road freight across Cameroon.
//!
//! Distances come from transport operators, times from driver reports.
//! Currency is FCFA.

use time::macros::date;

use crate::model::{
    Capability, CargoType, City, CostFactors, RoadCondition, RouteSegment, SecurityLevel,
    VehicleType,
};
use crate::reference::ReferenceTables;

pub fn tables() -> ReferenceTables {
    ReferenceTables {
        cities: cities(),
        cargo_types: cargo_types(),
        vehicles: vehicles(),
        routes: routes(),
        cost_factors: cost_factors(),
    }
}

fn city(id: &str, name: &str, region: &str) -> City {
    City {
        id: id.to_string(),
        name: name.to_string(),
        region: region.to_string(),
    }
}

pub fn cities() -> Vec<City> {
    vec![
        city("douala", "Douala", "Littoral"),
        city("edea", "Edéa", "Littoral"),
        city("nkongsamba", "Nkongsamba", "Littoral"),
        city("yaounde", "Yaoundé", "Centre"),
        city("mbalmayo", "Mbalmayo", "Centre"),
        city("obala", "Obala", "Centre"),
        city("bafoussam", "Bafoussam", "West"),
        city("foumban", "Foumban", "West"),
        city("dschang", "Dschang", "West"),
        city("bamenda", "Bamenda", "Northwest"),
        city("kumbo", "Kumbo", "Northwest"),
        city("buea", "Buea", "Southwest"),
        city("kumba", "Kumba", "Southwest"),
        city("limbe", "Limbé", "Southwest"),
        city("ebolowa", "Ebolowa", "South"),
        city("kribi", "Kribi", "South"),
        city("sangmelima", "Sangmélima", "South"),
        city("bertoua", "Bertoua", "East"),
        city("batouri", "Batouri", "East"),
        city("ngaoundere", "Ngaoundéré", "Adamawa"),
        city("meiganga", "Meiganga", "Adamawa"),
        city("garoua", "Garoua", "North"),
        city("guider", "Guider", "North"),
        city("maroua", "Maroua", "Far North"),
        city("kousseri", "Kousséri", "Far North"),
        city("mokolo", "Mokolo", "Far North"),
    ]
}

fn cargo(id: &str, name: &str, description: &str, cost_multiplier: f64) -> CargoType {
    CargoType {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        special_requirements: None,
        cost_multiplier,
        requires_special_vehicle: false,
    }
}

pub fn cargo_types() -> Vec<CargoType> {
    vec![
        cargo(
            "food-dry",
            "Food Aid (Dry Goods)",
            "Grains, pulses, flour, and other dry food items",
            1.0,
        ),
        cargo(
            "food-canned",
            "Canned/Packaged Food",
            "Ready-to-eat meals, canned goods",
            1.1,
        ),
        cargo(
            "medical-general",
            "Medical Supplies (General)",
            "Bandages, basic medical equipment, non-temperature sensitive",
            1.2,
        ),
        CargoType {
            special_requirements: Some(
                "Requires refrigerated transport and continuous temperature monitoring".to_string(),
            ),
            requires_special_vehicle: true,
            ..cargo(
                "medical-cold-chain",
                "Medical Supplies (Cold Chain)",
                "Vaccines, temperature-sensitive medicines",
                1.8,
            )
        },
        cargo(
            "nfi-shelter",
            "NFI - Shelter Materials",
            "Tarpaulins, tents, blankets, sleeping mats",
            1.0,
        ),
        cargo(
            "nfi-hygiene",
            "NFI - Hygiene Kits",
            "Soap, sanitation supplies, hygiene items",
            1.0,
        ),
        cargo(
            "nfi-kitchen",
            "NFI - Kitchen Sets",
            "Cooking utensils, pots, pans, plates",
            1.1,
        ),
        cargo(
            "water-equipment",
            "WASH Equipment",
            "Water containers, purification equipment, pumps",
            1.2,
        ),
        cargo(
            "education",
            "Education Materials",
            "School supplies, textbooks, teaching materials",
            1.0,
        ),
        cargo(
            "equipment-general",
            "Equipment & Tools",
            "General tools and equipment",
            1.1,
        ),
        cargo(
            "equipment-heavy",
            "Heavy Equipment",
            "Generators, construction equipment, large machinery",
            1.4,
        ),
    ]
}

fn vehicle(
    id: &str,
    name: &str,
    capacity: f64,
    cost_per_km: f64,
    fuel_consumption: f64,
    min_weight: f64,
    capabilities: &[Capability],
) -> VehicleType {
    VehicleType {
        id: id.to_string(),
        name: name.to_string(),
        capacity,
        cost_per_km,
        fuel_consumption,
        min_weight: Some(min_weight),
        capabilities: capabilities.to_vec(),
    }
}

pub fn vehicles() -> Vec<VehicleType> {
    use Capability::*;
    vec![
        vehicle("pickup", "Pickup Truck", 1500.0, 300.0, 12.0, 0.0, &[]),
        vehicle(
            "light-truck",
            "Light Truck (3 tons)",
            3000.0,
            400.0,
            15.0,
            1000.0,
            &[],
        ),
        vehicle(
            "medium-truck",
            "Medium Truck (10 tons)",
            10000.0,
            600.0,
            25.0,
            3000.0,
            &[],
        ),
        vehicle(
            "heavy-truck",
            "Heavy Truck (20 tons)",
            20000.0,
            800.0,
            35.0,
            10000.0,
            &[],
        ),
        vehicle(
            "refrigerated-small",
            "Refrigerated Truck (Small)",
            3000.0,
            700.0,
            18.0,
            0.0,
            &[Refrigerated],
        ),
        vehicle(
            "refrigerated-large",
            "Refrigerated Truck (Large)",
            10000.0,
            1000.0,
            30.0,
            3000.0,
            &[Refrigerated],
        ),
        vehicle(
            "4x4-light",
            "4x4 Light Truck",
            2000.0,
            500.0,
            16.0,
            0.0,
            &[FourByFour, OffRoad],
        ),
        vehicle(
            "4x4-heavy",
            "4x4 Heavy Truck",
            8000.0,
            900.0,
            32.0,
            2000.0,
            &[FourByFour, OffRoad],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn segment(
    origin: &str,
    destination: &str,
    distance: f64,
    road_condition: RoadCondition,
    dry_season_time: f64,
    rainy_season_time: f64,
    security_level: SecurityLevel,
    checkpoints: u32,
    notes: Option<&str>,
) -> RouteSegment {
    RouteSegment {
        id: format!("{}-{}", origin, destination),
        origin: origin.to_string(),
        destination: destination.to_string(),
        distance,
        road_condition,
        dry_season_time,
        rainy_season_time,
        security_level,
        checkpoints,
        notes: notes.map(str::to_string),
    }
}

pub fn routes() -> Vec<RouteSegment> {
    use RoadCondition::{Mixed, Paved};
    use SecurityLevel::{High, Low, Medium};
    vec![
        // Douala, port city
        segment(
            "douala",
            "yaounde",
            250.0,
            Paved,
            4.0,
            5.0,
            Low,
            2,
            Some("Main highway, well-maintained, heavy traffic near cities"),
        ),
        segment("douala", "buea", 70.0, Paved, 1.5, 2.0, Low, 1, None),
        segment("douala", "limbe", 75.0, Paved, 1.5, 2.0, Low, 1, None),
        segment("douala", "kribi", 160.0, Paved, 3.0, 4.0, Low, 2, None),
        segment(
            "douala",
            "kumba",
            130.0,
            Mixed,
            3.0,
            4.5,
            Medium,
            3,
            Some("Some sections affected by security situation"),
        ),
        // Yaoundé, capital
        segment("yaounde", "bafoussam", 280.0, Paved, 5.0, 7.0, Low, 3, None),
        segment(
            "yaounde",
            "bertoua",
            350.0,
            Mixed,
            7.0,
            10.0,
            Medium,
            4,
            Some("Some unpaved sections, delays possible in rainy season"),
        ),
        segment("yaounde", "ebolowa", 170.0, Paved, 3.0, 4.0, Low, 2, None),
        segment("yaounde", "mbalmayo", 50.0, Paved, 1.0, 1.5, Low, 1, None),
        // North corridor
        segment(
            "ngaoundere",
            "garoua",
            280.0,
            Paved,
            5.0,
            6.0,
            Medium,
            3,
            None,
        ),
        segment(
            "garoua",
            "maroua",
            220.0,
            Paved,
            4.0,
            5.0,
            High,
            5,
            Some("Security concerns in Far North region"),
        ),
        segment(
            "maroua",
            "kousseri",
            130.0,
            Paved,
            2.5,
            3.0,
            High,
            4,
            Some("Border area, additional security considerations"),
        ),
        // West
        segment(
            "bafoussam",
            "bamenda",
            75.0,
            Paved,
            2.0,
            3.0,
            High,
            4,
            Some("Security situation variable"),
        ),
        segment("bafoussam", "foumban", 70.0, Paved, 1.5, 2.0, Low, 1, None),
        // Long haul north
        segment(
            "yaounde",
            "ngaoundere",
            850.0,
            Paved,
            14.0,
            18.0,
            Medium,
            8,
            Some("Major corridor via East region. Road conditions generally good but high traffic."),
        ),
        segment(
            "yaounde",
            "garoua",
            1130.0,
            Paved,
            19.0,
            24.0,
            Medium,
            12,
            Some("Includes navigation of the Falaise de Ngaoundéré. Brake checks required."),
        ),
        segment(
            "yaounde",
            "maroua",
            1350.0,
            Paved,
            24.0,
            30.0,
            High,
            15,
            Some("High security vigilance required past Garoua."),
        ),
        segment(
            "douala",
            "ngaoundere",
            1100.0,
            Mixed,
            20.0,
            26.0,
            Medium,
            10,
            Some("Calculated via Yarbang route."),
        ),
        segment(
            "douala",
            "garoua",
            1380.0,
            Mixed,
            25.0,
            32.0,
            Medium,
            14,
            None,
        ),
        // West and Northwest connections
        segment(
            "douala",
            "bafoussam",
            270.0,
            Paved,
            5.0,
            6.0,
            Low,
            4,
            Some("Heavy truck traffic, mountainous sections."),
        ),
        segment(
            "douala",
            "bamenda",
            350.0,
            Paved,
            7.0,
            9.0,
            Medium,
            6,
            Some("Security situation variable in entry to NW."),
        ),
        segment(
            "yaounde",
            "bamenda",
            360.0,
            Paved,
            7.0,
            9.0,
            Medium,
            6,
            None,
        ),
    ]
}

pub fn cost_factors() -> Vec<CostFactors> {
    vec![CostFactors {
        fuel_price_per_liter: 650.0,
        driver_daily_rate: 15000.0,
        overhead_percentage: 0.20,
        urgency_multiplier: 1.5,
        effective_date: date!(2025 - 11 - 15),
    }]
}
