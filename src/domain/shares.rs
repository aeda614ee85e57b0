//! Fixed share tables and the decomposition of a day's total into
//! categories and ranked consumers.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Category, Consumer, MAX_TOP_CONSUMERS};

/// Allowed deviation of a table's fraction sum from 1.0
pub const SHARE_SUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShareTableError {
    #[error("Share table is empty")]
    Empty,

    #[error("Share '{name}' has invalid fraction {fraction}")]
    InvalidFraction { name: String, fraction: f64 },

    #[error("Share fractions sum to {0}, expected 1.0")]
    SumMismatch(f64),
}

/// A named fraction of the day's total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareEntry {
    pub name: String,
    pub fraction: f64,
}

impl ShareEntry {
    pub fn new(name: impl Into<String>, fraction: f64) -> Self {
        Self {
            name: name.into(),
            fraction,
        }
    }
}

/// Ordered (name, fraction) table whose fractions sum to 1.0
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ShareTable {
    entries: Vec<ShareEntry>,
}

impl ShareTable {
    pub fn new(entries: Vec<ShareEntry>) -> Result<Self, ShareTableError> {
        if entries.is_empty() {
            return Err(ShareTableError::Empty);
        }

        if let Some(bad) = entries
            .iter()
            .find(|e| !e.fraction.is_finite() || e.fraction < 0.0)
        {
            return Err(ShareTableError::InvalidFraction {
                name: bad.name.clone(),
                fraction: bad.fraction,
            });
        }

        let sum: f64 = entries.iter().map(|e| e.fraction).sum();
        if (sum - 1.0).abs() > SHARE_SUM_TOLERANCE {
            return Err(ShareTableError::SumMismatch(sum));
        }

        Ok(Self { entries })
    }

    /// Build from static `(name, fraction)` pairs
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Result<Self, ShareTableError> {
        Self::new(
            pairs
                .iter()
                .map(|(name, fraction)| ShareEntry::new(*name, *fraction))
                .collect(),
        )
    }

    /// HVAC, lighting, IT, plug loads, other
    pub fn default_categories() -> Self {
        Self::builtin(&DEFAULT_CATEGORY_SHARES)
    }

    /// Seven named consumers of a small office building
    pub fn default_consumers() -> Self {
        Self::builtin(&DEFAULT_CONSUMER_SHARES)
    }

    // Built-in tables are checked by tests, not at runtime
    fn builtin(pairs: &[(&str, f64)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(name, fraction)| ShareEntry::new(*name, *fraction))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[ShareEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, total * fraction)` for every entry, in table order
    pub fn apportion(&self, total_kwh: f64) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries
            .iter()
            .map(move |e| (e.name.as_str(), total_kwh * e.fraction))
    }
}

impl<'de> Deserialize<'de> for ShareTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<ShareEntry>::deserialize(deserializer)?;
        ShareTable::new(entries).map_err(serde::de::Error::custom)
    }
}

pub const DEFAULT_CATEGORY_SHARES: [(&str, f64); 5] = [
    ("HVAC", 0.42),
    ("Lighting", 0.22),
    ("IT/server room", 0.18),
    ("Plug loads", 0.10),
    ("Other", 0.08),
];

pub const DEFAULT_CONSUMER_SHARES: [(&str, f64); 7] = [
    ("Chiller / heat pump", 0.22),
    ("Air handling units", 0.17),
    ("Open-space lighting", 0.15),
    ("Server room UPS", 0.14),
    ("EV charging", 0.10),
    ("Elevators", 0.05),
    ("Other", 0.17),
];

/// Splits a day's total across the category and consumer tables
#[derive(Debug, Clone)]
pub struct ShareDecomposer {
    categories: ShareTable,
    consumers: ShareTable,
    top_n: usize,
}

impl Default for ShareDecomposer {
    fn default() -> Self {
        Self::new(ShareTable::default_categories(), ShareTable::default_consumers())
    }
}

impl ShareDecomposer {
    pub fn new(categories: ShareTable, consumers: ShareTable) -> Self {
        Self {
            categories,
            consumers,
            top_n: MAX_TOP_CONSUMERS,
        }
    }

    pub fn categories(&self) -> &ShareTable {
        &self.categories
    }

    pub fn consumers(&self) -> &ShareTable {
        &self.consumers
    }

    /// Category kWh in table order (not sorted)
    pub fn category_breakdown(&self, total_kwh: f64) -> Vec<Category> {
        self.categories
            .apportion(total_kwh)
            .map(|(name, kwh)| Category {
                name: name.to_owned(),
                kwh,
            })
            .collect()
    }

    /// Every consumer, stable-sorted by descending kWh
    pub fn ranked_consumers(&self, total_kwh: f64) -> Vec<Consumer> {
        self.consumers
            .apportion(total_kwh)
            .map(|(name, kwh)| Consumer {
                name: name.to_owned(),
                kwh,
            })
            .sorted_by(|a, b| b.kwh.total_cmp(&a.kwh))
            .collect()
    }

    /// The first six of [`ShareDecomposer::ranked_consumers`]
    pub fn top_consumers(&self, total_kwh: f64) -> Vec<Consumer> {
        let mut ranked = self.ranked_consumers(total_kwh);
        ranked.truncate(self.top_n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_conserved(parts: impl Iterator<Item = f64>, total: f64) {
        let sum: f64 = parts.sum();
        let scale = total.abs().max(1.0);
        assert!(
            (sum - total).abs() <= 1e-9 * scale,
            "sum {sum} != total {total}"
        );
    }

    #[test]
    fn test_default_tables_are_valid() {
        assert!(ShareTable::from_pairs(&DEFAULT_CATEGORY_SHARES).is_ok());
        assert!(ShareTable::from_pairs(&DEFAULT_CONSUMER_SHARES).is_ok());
        assert_eq!(ShareTable::default_categories().len(), 5);
        assert_eq!(ShareTable::default_consumers().len(), 7);
    }

    #[test]
    fn test_table_rejects_bad_sum() {
        let result = ShareTable::from_pairs(&[("A", 0.5), ("B", 0.4)]);
        assert!(matches!(result, Err(ShareTableError::SumMismatch(_))));
    }

    #[test]
    fn test_table_rejects_negative_fraction() {
        let result = ShareTable::from_pairs(&[("A", 1.5), ("B", -0.5)]);
        assert_eq!(
            result,
            Err(ShareTableError::InvalidFraction {
                name: "B".to_string(),
                fraction: -0.5
            })
        );
    }

    #[test]
    fn test_table_rejects_empty() {
        assert_eq!(ShareTable::new(vec![]), Err(ShareTableError::Empty));
    }

    #[test]
    fn test_categories_keep_table_order() {
        let decomposer = ShareDecomposer::default();
        let categories = decomposer.category_breakdown(100.0);

        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["HVAC", "Lighting", "IT/server room", "Plug loads", "Other"]
        );
        assert!((categories[0].kwh - 42.0).abs() < 1e-9);
        assert!((categories[4].kwh - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_consumers_ranked_and_truncated() {
        let decomposer = ShareDecomposer::default();
        let top = decomposer.top_consumers(300.0);

        assert_eq!(top.len(), 6);
        assert!(top.windows(2).all(|w| w[0].kwh >= w[1].kwh));
        assert_eq!(top[0].name, "Chiller / heat pump");
        // Ties at 0.17 keep table order
        assert_eq!(top[1].name, "Air handling units");
        assert_eq!(top[2].name, "Other");
        assert!(top.iter().all(|c| c.name != "Elevators"));

        let ranked = decomposer.ranked_consumers(300.0);
        assert_eq!(&ranked[..6], top.as_slice());
    }

    #[test]
    fn test_substitute_tables() {
        let categories = ShareTable::from_pairs(&[("Heat", 0.5), ("Light", 0.5)]).unwrap();
        let consumers = ShareTable::from_pairs(&[("Small", 0.25), ("Big", 0.75)]).unwrap();
        let decomposer = ShareDecomposer::new(categories, consumers);

        let top = decomposer.top_consumers(40.0);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Big");
        assert_eq!(top[0].kwh, 30.0);
        assert_eq!(decomposer.category_breakdown(40.0).len(), 2);
    }

    #[test]
    fn test_zero_total_gives_zero_shares() {
        let decomposer = ShareDecomposer::default();
        assert!(decomposer.category_breakdown(0.0).iter().all(|c| c.kwh == 0.0));
        assert!(decomposer.top_consumers(0.0).iter().all(|c| c.kwh == 0.0));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<ShareTable, _> =
            serde_json::from_str(r#"[{"name":"A","fraction":0.6},{"name":"B","fraction":0.4}]"#);
        assert!(ok.is_ok());

        let bad: Result<ShareTable, _> =
            serde_json::from_str(r#"[{"name":"A","fraction":0.6}]"#);
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn prop_shares_conserve_total(total in 0.0f64..10_000.0) {
            let decomposer = ShareDecomposer::default();
            assert_conserved(decomposer.category_breakdown(total).iter().map(|c| c.kwh), total);
            assert_conserved(decomposer.ranked_consumers(total).iter().map(|c| c.kwh), total);
        }
    }
}
