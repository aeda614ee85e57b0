use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use thiserror::Error;

// ============================================================================
// Hourly Profile
// ============================================================================

/// Number of hourly slots in a day
pub const HOURS_PER_DAY: usize = 24;

/// No hour of a day may consume less than this (kWh)
pub const HOURLY_FLOOR_KWH: f64 = 3.0;

/// Consumption for each hour of one day (kWh), index = hour 0-23
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HourlyProfile([f64; HOURS_PER_DAY]);

impl HourlyProfile {
    pub fn from_array(values: [f64; HOURS_PER_DAY]) -> Self {
        Self(values)
    }

    /// Build from a slice; `None` unless it has exactly 24 entries
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        <[f64; HOURS_PER_DAY]>::try_from(values).ok().map(Self)
    }

    /// Same value in every hour
    pub fn flat(kwh: f64) -> Self {
        Self([kwh; HOURS_PER_DAY])
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, hour: usize) -> Option<f64> {
        self.0.get(hour).copied()
    }

    /// Sum over all hours
    pub fn total_kwh(&self) -> f64 {
        self.0.iter().sum()
    }

    /// (hour, kWh) pairs in hour order
    pub fn iter_hours(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

impl Index<usize> for HourlyProfile {
    type Output = f64;

    fn index(&self, hour: usize) -> &f64 {
        &self.0[hour]
    }
}

impl AsRef<[f64]> for HourlyProfile {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

// ============================================================================
// Breakdown entries
// ============================================================================

/// One consumer's share of the day's total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumer {
    pub name: String,
    pub kwh: f64,
}

/// One category's share of the day's total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub kwh: f64,
}

// ============================================================================
// Energy Day
// ============================================================================

/// Errors raised while assembling an [`EnergyDay`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnergyDayError {
    #[error("Building name must not be empty")]
    EmptyBuildingName,

    #[error("Price must be positive and finite, got {0}")]
    InvalidPrice(f64),

    #[error("Hourly value at {hour}:00 is invalid: {kwh}")]
    InvalidHour { hour: usize, kwh: f64 },

    #[error("Too many top consumers: {0} (max {})", MAX_TOP_CONSUMERS)]
    TooManyConsumers(usize),
}

/// Maximum number of ranked consumers kept in an [`EnergyDay`]
pub const MAX_TOP_CONSUMERS: usize = 6;

/// One simulated day of building consumption.
///
/// Built once per run and read-only afterwards; consumers only get shared access.
/// Deserializing goes through [`EnergyDay::new`], so the same checks apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEnergyDay")]
pub struct EnergyDay {
    building_name: String,
    date: NaiveDate,
    hourly_kwh: HourlyProfile,
    top_consumers: Vec<Consumer>,
    category_breakdown: Vec<Category>,
    price_czk_per_kwh: f64,
}

/// Unchecked wire form of [`EnergyDay`]
#[derive(Deserialize)]
struct RawEnergyDay {
    building_name: String,
    date: NaiveDate,
    hourly_kwh: HourlyProfile,
    top_consumers: Vec<Consumer>,
    category_breakdown: Vec<Category>,
    price_czk_per_kwh: f64,
}

impl TryFrom<RawEnergyDay> for EnergyDay {
    type Error = EnergyDayError;

    fn try_from(raw: RawEnergyDay) -> Result<Self, Self::Error> {
        EnergyDay::new(
            raw.building_name,
            raw.date,
            raw.hourly_kwh,
            raw.top_consumers,
            raw.category_breakdown,
            raw.price_czk_per_kwh,
        )
    }
}

impl EnergyDay {
    pub fn new(
        building_name: impl Into<String>,
        date: NaiveDate,
        hourly_kwh: HourlyProfile,
        top_consumers: Vec<Consumer>,
        category_breakdown: Vec<Category>,
        price_czk_per_kwh: f64,
    ) -> Result<Self, EnergyDayError> {
        let building_name = building_name.into();
        if building_name.trim().is_empty() {
            return Err(EnergyDayError::EmptyBuildingName);
        }

        if !price_czk_per_kwh.is_finite() || price_czk_per_kwh <= 0.0 {
            return Err(EnergyDayError::InvalidPrice(price_czk_per_kwh));
        }

        if let Some((hour, kwh)) = hourly_kwh
            .iter_hours()
            .find(|(_, kwh)| !kwh.is_finite() || *kwh < HOURLY_FLOOR_KWH)
        {
            return Err(EnergyDayError::InvalidHour { hour, kwh });
        }

        if top_consumers.len() > MAX_TOP_CONSUMERS {
            return Err(EnergyDayError::TooManyConsumers(top_consumers.len()));
        }

        Ok(Self {
            building_name,
            date,
            hourly_kwh,
            top_consumers,
            category_breakdown,
            price_czk_per_kwh,
        })
    }

    pub fn building_name(&self) -> &str {
        &self.building_name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hourly_kwh(&self) -> &HourlyProfile {
        &self.hourly_kwh
    }

    /// Ranked consumers, descending by kWh
    pub fn top_consumers(&self) -> &[Consumer] {
        &self.top_consumers
    }

    /// Categories in table order
    pub fn category_breakdown(&self) -> &[Category] {
        &self.category_breakdown
    }

    pub fn price_czk_per_kwh(&self) -> f64 {
        self.price_czk_per_kwh
    }

    pub fn total_kwh(&self) -> f64 {
        self.hourly_kwh.total_kwh()
    }

    /// Estimated cost of the whole day
    pub fn estimated_cost_czk(&self) -> f64 {
        self.total_kwh() * self.price_czk_per_kwh
    }
}

impl fmt::Display for EnergyDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {:.1} kWh",
            self.building_name,
            self.date.format("%d.%m.%Y"),
            self.total_kwh()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_profile_from_slice_requires_24_values() {
        assert!(HourlyProfile::from_slice(&[1.0; 24]).is_some());
        assert!(HourlyProfile::from_slice(&[1.0; 23]).is_none());
        assert!(HourlyProfile::from_slice(&[1.0; 25]).is_none());
    }

    #[test]
    fn test_profile_total() {
        assert_eq!(HourlyProfile::flat(10.0).total_kwh(), 240.0);
    }

    #[test]
    fn test_energy_day_rejects_bad_price() {
        let result = EnergyDay::new("A", date(), HourlyProfile::flat(5.0), vec![], vec![], -1.0);
        assert_eq!(result, Err(EnergyDayError::InvalidPrice(-1.0)));

        let result = EnergyDay::new("A", date(), HourlyProfile::flat(5.0), vec![], vec![], f64::NAN);
        assert!(matches!(result, Err(EnergyDayError::InvalidPrice(_))));
    }

    #[test]
    fn test_energy_day_rejects_empty_name() {
        let result = EnergyDay::new("  ", date(), HourlyProfile::flat(5.0), vec![], vec![], 3.2);
        assert_eq!(result, Err(EnergyDayError::EmptyBuildingName));
    }

    #[test]
    fn test_energy_day_rejects_negative_hour() {
        let mut values = [5.0; HOURS_PER_DAY];
        values[7] = -0.1;
        let result = EnergyDay::new(
            "A",
            date(),
            HourlyProfile::from_array(values),
            vec![],
            vec![],
            3.2,
        );
        assert_eq!(result, Err(EnergyDayError::InvalidHour { hour: 7, kwh: -0.1 }));
    }

    #[test]
    fn test_energy_day_rejects_hour_below_floor() {
        let mut values = [5.0; HOURS_PER_DAY];
        values[3] = 2.9;
        let result = EnergyDay::new(
            "A",
            date(),
            HourlyProfile::from_array(values),
            vec![],
            vec![],
            3.2,
        );
        assert_eq!(result, Err(EnergyDayError::InvalidHour { hour: 3, kwh: 2.9 }));

        values[3] = HOURLY_FLOOR_KWH;
        let result = EnergyDay::new(
            "A",
            date(),
            HourlyProfile::from_array(values),
            vec![],
            vec![],
            3.2,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_deserialize_round_trip() {
        let day = EnergyDay::new("Office A", date(), HourlyProfile::flat(10.0), vec![], vec![], 3.2)
            .unwrap();
        let json = serde_json::to_string(&day).unwrap();
        let back: EnergyDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, day);
    }

    #[test]
    fn test_deserialize_rejects_invalid_day() {
        let mut hourly = vec![10.0; HOURS_PER_DAY];
        hourly[0] = -5.0;
        let json = serde_json::json!({
            "building_name": "",
            "date": "2024-06-15",
            "hourly_kwh": hourly,
            "top_consumers": [],
            "category_breakdown": [],
            "price_czk_per_kwh": -1.0,
        });
        assert!(serde_json::from_value::<EnergyDay>(json.clone()).is_err());

        let mut json = json;
        json["building_name"] = "Office A".into();
        json["price_czk_per_kwh"] = serde_json::json!(3.2);
        let err = serde_json::from_value::<EnergyDay>(json).unwrap_err();
        assert!(err.to_string().contains("Hourly value at 0:00 is invalid"));
    }

    #[test]
    fn test_energy_day_cost_and_display() {
        let day = EnergyDay::new(
            "Office A",
            date(),
            HourlyProfile::flat(10.0),
            vec![],
            vec![],
            3.2,
        )
        .unwrap();

        assert!((day.estimated_cost_czk() - 768.0).abs() < 1e-9);
        assert_eq!(day.to_string(), "Office A (15.06.2024): 240.0 kWh");
    }
}
