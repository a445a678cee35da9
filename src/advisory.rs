//! Recommendation and risk factor rules.
//!
//! Each rule is an independent predicate that contributes at most one line.
//! Rules run in table order and never suppress each other.

use serde::{Deserialize, Serialize};

use crate::model::{
    CalculatorInput, CargoType, RoadCondition, RouteSegment, Season, SecurityLevel, VehicleType,
};

const MANY_CHECKPOINTS: u32 = 3;
const EXCESSIVE_CHECKPOINTS: u32 = 5;
const LONG_HAUL_KM: f64 = 400.0;
const VERY_LONG_HAUL_KM: f64 = 500.0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisories {
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
}

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct TripContext<'a> {
    pub route: &'a RouteSegment,
    pub input: &'a CalculatorInput,
    pub cargo: &'a CargoType,
    pub vehicle: &'a VehicleType,
}

impl TripContext<'_> {
    fn road(&self) -> RoadCondition {
        self.route.road_condition
    }

    fn rainy(&self) -> bool {
        self.input.season == Season::Rainy
    }

    fn security(&self) -> SecurityLevel {
        self.route.security_level
    }

    fn rough_road(&self) -> bool {
        matches!(self.road(), RoadCondition::Unpaved | RoadCondition::Mixed)
    }
}

enum Advice {
    Fixed(&'static str),
    /// The cargo's special requirements text.
    CargoRequirements,
}

struct Rule {
    applies: fn(&TripContext<'_>) -> bool,
    advice: Advice,
}

const fn rule(applies: fn(&TripContext<'_>) -> bool, text: &'static str) -> Rule {
    Rule {
        applies,
        advice: Advice::Fixed(text),
    }
}

const RECOMMENDATIONS: &[Rule] = &[
    rule(
        |t| t.rough_road() && !t.vehicle.is_off_road(),
        "Consider using a 4x4 vehicle for better handling on unpaved sections",
    ),
    rule(
        |t| t.rough_road(),
        "Inspect vehicle thoroughly before departure, especially suspension and tires",
    ),
    rule(
        |t| t.rainy() && !t.road().is_paved(),
        "Check road conditions immediately before departure - some routes may be impassable",
    ),
    rule(
        |t| t.rainy() && !t.road().is_paved(),
        "Allow extra time for potential detours or delays due to flooding",
    ),
    rule(|t| t.rainy(), "Ensure cargo is properly waterproofed and secured"),
    rule(
        |t| t.route.checkpoints > MANY_CHECKPOINTS,
        "Prepare all documentation in advance to minimize checkpoint delays",
    ),
    rule(
        |t| t.route.checkpoints > MANY_CHECKPOINTS,
        "Ensure driver has valid permits and cargo manifests",
    ),
    Rule {
        applies: |t| t.cargo.special_requirements.is_some(),
        advice: Advice::CargoRequirements,
    },
    rule(
        |t| t.cargo.requires_special_vehicle,
        "Specialized vehicle required - ensure availability before confirming delivery",
    ),
    rule(
        |t| t.security() == SecurityLevel::High,
        "Consider security escort or travel in convoy",
    ),
    rule(
        |t| t.security() == SecurityLevel::High,
        "Avoid night travel and inform relevant authorities of travel plans",
    ),
    rule(
        |t| t.security() == SecurityLevel::Medium,
        "Travel during daylight hours when possible",
    ),
    rule(
        |t| t.security() == SecurityLevel::Medium,
        "Stay in communication with base and check in at regular intervals",
    ),
    rule(
        |t| t.route.distance > LONG_HAUL_KM,
        "Consider overnight stop for driver rest - factor into timeline",
    ),
    rule(
        |t| t.route.distance > LONG_HAUL_KM,
        "Plan fuel stops in advance, especially in remote areas",
    ),
    rule(
        |t| t.input.is_urgent,
        "Coordinate closely with recipient for immediate offloading upon arrival",
    ),
    rule(
        |t| t.input.is_urgent,
        "Have backup vehicle/driver on standby in case of breakdown",
    ),
];

const RISK_FACTORS: &[Rule] = &[
    rule(
        |t| t.security() == SecurityLevel::High,
        "High security risk area - incidents reported regularly",
    ),
    rule(
        |t| t.security() == SecurityLevel::High,
        "Potential for roadblocks or security incidents",
    ),
    rule(
        |t| t.security() == SecurityLevel::Medium,
        "Moderate security concerns - maintain vigilance",
    ),
    rule(|t| t.rainy(), "Rainy season increases risk of road flooding and closures"),
    rule(|t| t.rainy(), "Potential for landslides in mountainous areas"),
    rule(
        |t| t.rainy() && t.road() == RoadCondition::Unpaved,
        "Unpaved roads may become impassable during heavy rains",
    ),
    rule(
        |t| t.road() == RoadCondition::Unpaved,
        "Unpaved roads increase vehicle breakdown risk",
    ),
    rule(
        |t| t.road() == RoadCondition::Unpaved,
        "Higher likelihood of cargo damage due to rough terrain",
    ),
    rule(
        |t| t.road() == RoadCondition::Mixed,
        "Variable road conditions may cause delays",
    ),
    rule(
        |t| t.route.distance > VERY_LONG_HAUL_KM,
        "Long distance increases fatigue-related incident risk",
    ),
    rule(
        |t| t.route.distance > VERY_LONG_HAUL_KM,
        "More fuel stops needed - plan for fuel availability",
    ),
    rule(
        |t| t.route.checkpoints > EXCESSIVE_CHECKPOINTS,
        "Multiple checkpoints may cause significant delays",
    ),
    rule(
        |t| t.route.checkpoints > EXCESSIVE_CHECKPOINTS,
        "Documentation issues could result in cargo detention",
    ),
];

pub fn generate_advisories(
    route: &RouteSegment,
    input: &CalculatorInput,
    cargo: &CargoType,
    vehicle: &VehicleType,
) -> Advisories {
    let trip = TripContext {
        route,
        input,
        cargo,
        vehicle,
    };
    Advisories {
        recommendations: evaluate(RECOMMENDATIONS, &trip),
        risk_factors: evaluate(RISK_FACTORS, &trip),
    }
}

fn evaluate(rules: &[Rule], trip: &TripContext<'_>) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(trip))
        .filter_map(|rule| match rule.advice {
            Advice::Fixed(text) => Some(text.to_string()),
            Advice::CargoRequirements => trip.cargo.special_requirements.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Capability;

    fn route(
        road_condition: RoadCondition,
        security_level: SecurityLevel,
        distance: f64,
        checkpoints: u32,
    ) -> RouteSegment {
        RouteSegment {
            id: "x-y".to_string(),
            origin: "x".to_string(),
            destination: "y".to_string(),
            distance,
            road_condition,
            dry_season_time: 3.0,
            rainy_season_time: 4.0,
            security_level,
            checkpoints,
            notes: None,
        }
    }

    fn input(season: Season, is_urgent: bool) -> CalculatorInput {
        CalculatorInput {
            origin: "x".to_string(),
            destination: "y".to_string(),
            cargo_type: "food-dry".to_string(),
            weight: 1000.0,
            is_urgent,
            season,
        }
    }

    fn cargo() -> CargoType {
        CargoType {
            id: "food-dry".to_string(),
            name: "Food".to_string(),
            description: None,
            special_requirements: None,
            cost_multiplier: 1.0,
            requires_special_vehicle: false,
        }
    }

    fn vehicle(capabilities: &[Capability]) -> VehicleType {
        VehicleType {
            id: "v".to_string(),
            name: "V".to_string(),
            capacity: 3000.0,
            cost_per_km: 1.0,
            fuel_consumption: 1.0,
            min_weight: None,
            capabilities: capabilities.to_vec(),
        }
    }

    #[test]
    fn test_quiet_trip_has_no_advice() {
        let advisories = generate_advisories(
            &route(RoadCondition::Paved, SecurityLevel::Low, 250.0, 2),
            &input(Season::Dry, false),
            &cargo(),
            &vehicle(&[]),
        );
        assert_eq!(advisories, Advisories::default());
    }

    #[test]
    fn test_rules_combine_in_table_order() {
        let advisories = generate_advisories(
            &route(RoadCondition::Mixed, SecurityLevel::Medium, 450.0, 4),
            &input(Season::Rainy, true),
            &cargo(),
            &vehicle(&[]),
        );
        assert_eq!(
            advisories.recommendations,
            vec![
                "Consider using a 4x4 vehicle for better handling on unpaved sections",
                "Inspect vehicle thoroughly before departure, especially suspension and tires",
                "Check road conditions immediately before departure - some routes may be impassable",
                "Allow extra time for potential detours or delays due to flooding",
                "Ensure cargo is properly waterproofed and secured",
                "Prepare all documentation in advance to minimize checkpoint delays",
                "Ensure driver has valid permits and cargo manifests",
                "Travel during daylight hours when possible",
                "Stay in communication with base and check in at regular intervals",
                "Consider overnight stop for driver rest - factor into timeline",
                "Plan fuel stops in advance, especially in remote areas",
                "Coordinate closely with recipient for immediate offloading upon arrival",
                "Have backup vehicle/driver on standby in case of breakdown",
            ]
        );
        assert_eq!(
            advisories.risk_factors,
            vec![
                "Moderate security concerns - maintain vigilance",
                "Rainy season increases risk of road flooding and closures",
                "Potential for landslides in mountainous areas",
                "Variable road conditions may cause delays",
            ]
        );
    }

    #[test]
    fn test_off_road_vehicle_skips_4x4_advice() {
        let advisories = generate_advisories(
            &route(RoadCondition::Unpaved, SecurityLevel::Low, 100.0, 0),
            &input(Season::Dry, false),
            &cargo(),
            &vehicle(&[Capability::OffRoad]),
        );
        assert_eq!(
            advisories.recommendations,
            vec!["Inspect vehicle thoroughly before departure, especially suspension and tires"]
        );
        assert_eq!(
            advisories.risk_factors,
            vec![
                "Unpaved roads increase vehicle breakdown risk",
                "Higher likelihood of cargo damage due to rough terrain",
            ]
        );
    }

    #[test]
    fn test_cargo_requirements_are_echoed() {
        let cold = CargoType {
            special_requirements: Some("Keep between 2 and 8 degrees".to_string()),
            requires_special_vehicle: true,
            ..cargo()
        };
        let advisories = generate_advisories(
            &route(RoadCondition::Paved, SecurityLevel::High, 600.0, 6),
            &input(Season::Rainy, false),
            &cold,
            &vehicle(&[Capability::Refrigerated]),
        );
        assert_eq!(
            advisories.recommendations,
            vec![
                "Ensure cargo is properly waterproofed and secured",
                "Prepare all documentation in advance to minimize checkpoint delays",
                "Ensure driver has valid permits and cargo manifests",
                "Keep between 2 and 8 degrees",
                "Specialized vehicle required - ensure availability before confirming delivery",
                "Consider security escort or travel in convoy",
                "Avoid night travel and inform relevant authorities of travel plans",
                "Consider overnight stop for driver rest - factor into timeline",
                "Plan fuel stops in advance, especially in remote areas",
            ]
        );
        assert_eq!(advisories.risk_factors.len(), 8);
        assert_eq!(
            advisories.risk_factors[0],
            "High security risk area - incidents reported regularly"
        );
        assert_eq!(
            advisories.risk_factors[7],
            "Documentation issues could result in cargo detention"
        );
    }

    #[test]
    fn test_rainy_unpaved_risk() {
        let advisories = generate_advisories(
            &route(RoadCondition::Unpaved, SecurityLevel::Low, 100.0, 0),
            &input(Season::Rainy, false),
            &cargo(),
            &vehicle(&[]),
        );
        assert!(advisories
            .risk_factors
            .contains(&"Unpaved roads may become impassable during heavy rains".to_string()));
    }
}
