use std::collections::HashMap;

use regex::Regex;
use serde_derive::{Deserialize, Serialize};

use crate::errors::DashboardError;

/// Explicit description of the exchange-rate CSV layout.
///
/// The rate source exists in the wild with two header conventions
/// (`countrycode` + `ppp*`/`ER_*` columns vs. spelled-out headers), so the
/// layout is configuration rather than something guessed at lookup time.
/// The default matches the `countrycode` convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateSchema {
    pub country_code_column: String,
    pub country_name_column: String,
    /// Header columns matching this pattern are treated as rate types.
    pub type_column_pattern: String,
}

impl Default for RateSchema {
    fn default() -> Self {
        Self {
            country_code_column: "countrycode".into(),
            country_name_column: "countryname".into(),
            type_column_pattern: "^(ppp|ER_)".into(),
        }
    }
}

impl RateSchema {
    pub fn from_ron(s: &str) -> Result<Self, DashboardError> {
        ron::from_str(s).map_err(|e| DashboardError::InvalidRateSchema {
            details: e.to_string(),
        })
    }

    pub(crate) fn type_regex(&self) -> Result<Regex, DashboardError> {
        Regex::new(&self.type_column_pattern).map_err(|e| DashboardError::InvalidRatePattern {
            pattern: self.type_column_pattern.clone(),
            details: e.to_string(),
        })
    }
}

/// Loaded exchange-rate table: one row per country, one column per named
/// rate type. Blank or unparsable cells are simply absent.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rate_types: Vec<String>,
    countries: Vec<(String, String)>,
    rates: HashMap<(String, String), f64>,
}

impl RateTable {
    pub(crate) fn new(
        rate_types: Vec<String>,
        countries: Vec<(String, String)>,
        rates: HashMap<(String, String), f64>,
    ) -> Self {
        Self {
            rate_types,
            countries,
            rates,
        }
    }

    /// Rate for (country, rate type). Missing country, unknown type, or a
    /// blank cell all read as `None`; the caller skips conversion then.
    pub fn rate(&self, country: &str, rate_type: &str) -> Option<f64> {
        self.rates
            .get(&(country.to_string(), rate_type.to_string()))
            .copied()
    }

    /// Available rate-type column names, in source column order.
    pub fn rate_types(&self) -> &[String] {
        &self.rate_types
    }

    /// (name, code) pairs for countries present in the rate data.
    pub fn countries_with_rates(&self) -> &[(String, String)] {
        &self.countries
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
