use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::HOURS_PER_DAY;

/// One row of the ranked hour table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedHour {
    pub hour: usize,
    pub kwh: f64,
    /// Above `table_peak_ratio` times the daily average
    pub is_peak: bool,
}

impl RankedHour {
    /// Hour label as `HH:00`
    pub fn label(&self) -> String {
        format!("{:02}:00", self.hour)
    }
}

/// Highest `limit` hours, descending by kWh. Equal values keep hour order.
pub fn top_hours(hourly: &[f64], limit: usize, peak_ratio: f64) -> Vec<RankedHour> {
    let average = hourly.iter().sum::<f64>() / HOURS_PER_DAY as f64;
    let threshold = average * peak_ratio;

    hourly
        .iter()
        .copied()
        .enumerate()
        .sorted_by(|a, b| b.1.total_cmp(&a.1))
        .take(limit)
        .map(|(hour, kwh)| RankedHour {
            hour,
            kwh,
            is_peak: kwh > threshold,
        })
        .collect()
}
