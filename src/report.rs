//! Exported estimate layout.
//!
//! Builds the section/row content of the shareable estimate document from a
//! [`CalculationResult`]. Page geometry, fonts and pagination belong to the
//! renderer; [`EstimateReport`]'s `Display` impl gives a plain-text view.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::macros::format_description;

use crate::format::{DISTANCE_UNIT, format_currency, format_time};
use crate::model::{CalculationResult, City};

pub const SITE_NAME: &str = "Atlas";
pub const TAGLINE: &str = "Infrastructure Intelligence for Africa";
pub const CONTACT_EMAIL: &str = "adamou.ben@atlas.systems";
const TITLE: &str = "Supply Chain Delivery Estimate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub include_recommendations: bool,
    pub include_risk_factors: bool,
    pub organization_name: Option<String>,
    pub reference_number: Option<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_recommendations: true,
            include_risk_factors: true,
            organization_name: None,
            reference_number: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

fn row(label: &str, value: impl Into<String>) -> ReportRow {
    ReportRow {
        label: label.to_string(),
        value: value.into(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    pub head: (String, String),
    pub body: Vec<ReportRow>,
    pub foot: Option<ReportRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateReport {
    pub title: String,
    pub generated: String,
    pub organization: Option<String>,
    pub reference: Option<String>,
    pub route_information: Vec<ReportRow>,
    pub cargo_information: Vec<ReportRow>,
    pub time_estimates: ReportTable,
    pub cost_breakdown: ReportTable,
    /// Numbered lines, empty when omitted.
    pub recommendations: Vec<String>,
    /// Marked lines, empty when omitted.
    pub risk_factors: Vec<String>,
    /// Printed on every page.
    pub footer: Vec<String>,
    pub file_name: String,
}

impl EstimateReport {
    pub fn build(
        result: &CalculationResult,
        options: &ReportOptions,
    ) -> Result<Self, time::error::Format> {
        let generated = result
            .calculated_at
            .format(format_description!("[year]-[month]-[day] [hour]:[minute] UTC"))?;
        let date = result
            .calculated_at
            .format(format_description!("[year]-[month]-[day]"))?;

        let route = &result.route.segment;
        let route_information = vec![
            row("Origin:", city_label(&result.origin)),
            row("Destination:", city_label(&result.destination)),
            row("Distance:", format!("{} {}", route.distance, DISTANCE_UNIT)),
            row("Road Condition:", route.road_condition.label()),
            row("Security Level:", route.security_level.label()),
            row("Checkpoints:", route.checkpoints.to_string()),
        ];

        let cargo_information = vec![
            row("Type:", result.cargo.name.clone()),
            row("Vehicle:", result.vehicle.name.clone()),
        ];

        let time = &result.estimated_time;
        let time_estimates = ReportTable {
            head: ("Scenario".to_string(), "Estimated Time".to_string()),
            body: vec![
                row("Best Case", format_time(time.best)),
                row("Typical", format_time(time.typical)),
                row("Worst Case", format_time(time.worst)),
            ],
            foot: None,
        };

        let cost = &result.estimated_cost;
        let cost_breakdown = ReportTable {
            head: ("Cost Item".to_string(), "Amount".to_string()),
            body: vec![
                row("Fuel", format_currency(cost.fuel)),
                row("Vehicle", format_currency(cost.vehicle)),
                row("Driver", format_currency(cost.driver)),
                row("Overhead", format_currency(cost.overhead)),
            ],
            foot: Some(row("TOTAL ESTIMATE", format_currency(cost.total))),
        };

        let recommendations = if options.include_recommendations {
            result
                .recommendations
                .iter()
                .enumerate()
                .map(|(i, text)| format!("{}. {}", i + 1, text))
                .collect()
        } else {
            Vec::new()
        };

        let risk_factors = if options.include_risk_factors {
            result.risk_factors.iter().map(|text| format!("⚠ {}", text)).collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            title: TITLE.to_string(),
            generated,
            organization: options.organization_name.clone(),
            reference: options.reference_number.clone(),
            route_information,
            cargo_information,
            time_estimates,
            cost_breakdown,
            recommendations,
            risk_factors,
            footer: vec![format!("{} - {}", SITE_NAME, TAGLINE), CONTACT_EMAIL.to_string()],
            file_name: format!(
                "atlas-estimate-{}-{}-{}.pdf",
                result.origin.name, result.destination.name, date
            ),
        })
    }
}

fn city_label(city: &City) -> String {
    format!("{} ({})", city.name, city.region)
}

fn write_rows(f: &mut fmt::Formatter<'_>, rows: &[ReportRow]) -> fmt::Result {
    for row in rows {
        writeln!(f, "{:<16}{}", row.label, row.value)?;
    }
    Ok(())
}

fn write_table(f: &mut fmt::Formatter<'_>, table: &ReportTable) -> fmt::Result {
    writeln!(f, "{:<16}{}", table.head.0, table.head.1)?;
    write_rows(f, &table.body)?;
    if let Some(foot) = &table.foot {
        write_rows(f, std::slice::from_ref(foot))?;
    }
    Ok(())
}

impl fmt::Display for EstimateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", SITE_NAME)?;
        writeln!(f, "{}", TAGLINE)?;
        writeln!(f)?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Generated: {}", self.generated)?;
        if let Some(organization) = &self.organization {
            writeln!(f, "Organization: {}", organization)?;
        }
        if let Some(reference) = &self.reference {
            writeln!(f, "Reference: {}", reference)?;
        }

        writeln!(f, "\nRoute Information")?;
        write_rows(f, &self.route_information)?;

        writeln!(f, "\nCargo Information")?;
        write_rows(f, &self.cargo_information)?;

        writeln!(f, "\nDelivery Time Estimates")?;
        write_table(f, &self.time_estimates)?;

        writeln!(f, "\nCost Breakdown")?;
        write_table(f, &self.cost_breakdown)?;

        if !self.recommendations.is_empty() {
            writeln!(f, "\nRecommendations")?;
            for line in &self.recommendations {
                writeln!(f, "{}", line)?;
            }
        }

        if !self.risk_factors.is_empty() {
            writeln!(f, "\nRisk Factors")?;
            for line in &self.risk_factors {
                writeln!(f, "{}", line)?;
            }
        }

        writeln!(f)?;
        for line in &self.footer {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
