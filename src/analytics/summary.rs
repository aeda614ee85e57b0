//! Daily Summary Statistics
//!
//! Total, average, peak and night load of an hourly curve. All values are
//! pure functions of the input slice.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::HOURS_PER_DAY;

/// Hours 00:00-05:59 make up the night window
pub const NIGHT_HOURS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub total_kwh: f64,
    /// Total divided by 24
    pub average_kwh: f64,
    pub peak_kwh: f64,
    /// First hour reaching the peak
    pub peak_hour: usize,
    /// Mean of hours 0..=5
    pub night_average_kwh: f64,
    /// Number of hourly values the summary was built from
    pub hours_present: usize,
}

impl DailySummary {
    pub fn from_hourly(hourly: &[f64]) -> Self {
        let total_kwh: f64 = hourly.iter().sum();
        let average_kwh = total_kwh / HOURS_PER_DAY as f64;
        let (peak_hour, peak_kwh) = peak(hourly);
        let night_average_kwh =
            hourly.iter().take(NIGHT_HOURS).sum::<f64>() / NIGHT_HOURS as f64;

        Self {
            total_kwh,
            average_kwh,
            peak_kwh,
            peak_hour,
            night_average_kwh,
            hours_present: hourly.len(),
        }
    }

    /// Peak relative to the average (0 when the day is empty)
    pub fn peak_to_average(&self) -> f64 {
        if self.average_kwh > 0.0 {
            self.peak_kwh / self.average_kwh
        } else {
            0.0
        }
    }

    /// Night average relative to the daily average (0 when the day is empty)
    pub fn night_to_average(&self) -> f64 {
        if self.average_kwh > 0.0 {
            self.night_average_kwh / self.average_kwh
        } else {
            0.0
        }
    }
}

/// `(hour, value)` of the maximum. Ties go to the earliest hour; an empty slice yields `(0, 0.0)`.
pub fn peak(hourly: &[f64]) -> (usize, f64) {
    let mut iter = hourly.iter().copied().enumerate();
    let Some(first) = iter.next() else {
        return (0, 0.0);
    };
    iter.fold(first, |best, (hour, kwh)| {
        if kwh > best.1 {
            (hour, kwh)
        } else {
            best
        }
    })
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {:.1} kWh, peak {:.1} kWh @ {:02}:00",
            self.total_kwh, self.peak_kwh, self.peak_hour
        )
    }
}
