//! Read-only report view of an [`EnergyDay`], gathering everything the
//! presentation and export layers display: summary box, cost estimate,
//! category percentages, ranked hour table and checklist.

use chrono::NaiveDate;
use serde::Serialize;

use super::alerts::{evaluate_with_summary, Alert, AlertThresholds};
use super::ranking::{top_hours, RankedHour};
use super::summary::DailySummary;
use crate::domain::{Consumer, EnergyDay};

/// Ranked hour with its cost at the day's price
#[derive(Debug, Clone, Serialize)]
pub struct HourRow {
    #[serde(flatten)]
    pub ranked: RankedHour,
    pub cost_czk: f64,
}

/// Category with its percentage of the category total
#[derive(Debug, Clone, Serialize)]
pub struct CategoryShare {
    pub name: String,
    pub kwh: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub building_name: String,
    pub date: NaiveDate,
    pub price_czk_per_kwh: f64,
    pub summary: DailySummary,
    pub estimated_cost_czk: f64,
    pub hourly_kwh: Vec<f64>,
    pub top_consumers: Vec<Consumer>,
    pub categories: Vec<CategoryShare>,
    pub top_hours: Vec<HourRow>,
    pub alerts: Vec<Alert>,
}

impl DayReport {
    pub fn build(day: &EnergyDay, thresholds: &AlertThresholds) -> Self {
        let hourly = day.hourly_kwh().values();
        let price = day.price_czk_per_kwh();
        let summary = DailySummary::from_hourly(hourly);

        let category_total: f64 = day.category_breakdown().iter().map(|c| c.kwh).sum();
        let categories = day
            .category_breakdown()
            .iter()
            .map(|c| CategoryShare {
                name: c.name.clone(),
                kwh: c.kwh,
                percent: if category_total > 0.0 {
                    100.0 * c.kwh / category_total
                } else {
                    0.0
                },
            })
            .collect();

        let top_hours = top_hours(hourly, thresholds.top_hours, thresholds.table_peak_ratio)
            .into_iter()
            .map(|ranked| HourRow {
                cost_czk: ranked.kwh * price,
                ranked,
            })
            .collect();

        Self {
            building_name: day.building_name().to_owned(),
            date: day.date(),
            price_czk_per_kwh: price,
            estimated_cost_czk: summary.total_kwh * price,
            summary,
            hourly_kwh: hourly.to_vec(),
            top_consumers: day.top_consumers().to_vec(),
            categories,
            top_hours,
            alerts: evaluate_with_summary(&summary, thresholds),
        }
    }

    /// Checklist entries that did not pass
    pub fn failed_alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| !a.ok)
    }
}
