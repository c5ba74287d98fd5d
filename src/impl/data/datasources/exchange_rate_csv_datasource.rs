use std::collections::HashMap;

use crate::{
    entities::{RateSchema, RateTable},
    errors::DashboardError,
};

pub(crate) trait ExchangeRateCsvDatasource {
    fn from_string(&self, s: &str, schema: &RateSchema) -> Result<RateTable, DashboardError>;
}

pub(crate) struct ExchangeRateCsvDatasourceImpl;

impl ExchangeRateCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ExchangeRateCsvDatasource for ExchangeRateCsvDatasourceImpl {
    fn from_string(&self, s: &str, schema: &RateSchema) -> Result<RateTable, DashboardError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(s.as_bytes());
        let headers = reader.headers()?.clone();

        let code_col = headers
            .iter()
            .position(|h| h == schema.country_code_column)
            .ok_or_else(|| DashboardError::InvalidCsvContent {
                details: format!(
                    "rate source has no '{}' column",
                    schema.country_code_column
                ),
            })?;
        let name_col = headers.iter().position(|h| h == schema.country_name_column);

        let type_regex = schema.type_regex()?;
        // (column index, rate type name), in source column order.
        let type_cols: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| type_regex.is_match(h))
            .map(|(i, h)| (i, h.to_string()))
            .collect();

        let mut countries = Vec::new();
        let mut rates = HashMap::new();
        for r in reader.records() {
            let r = r?;
            let code = r.get(code_col).unwrap_or("").trim();
            if code.is_empty() {
                continue;
            }
            let name = name_col
                .and_then(|i| r.get(i))
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(code);
            countries.push((name.trim().to_string(), code.to_string()));
            for (col, rate_type) in &type_cols {
                // Blank, unparsable, and zero cells are all absent: a zero
                // rate would convert everything to infinity.
                let Some(rate) = r
                    .get(*col)
                    .and_then(|cell| cell.trim().parse::<f64>().ok())
                    .filter(|rate| *rate != 0.0)
                else {
                    continue;
                };
                rates.insert((code.to_string(), rate_type.clone()), rate);
            }
        }

        Ok(RateTable::new(
            type_cols.into_iter().map(|(_, t)| t).collect(),
            countries,
            rates,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATES_CSV: &str = "\
countryname,countrycode,ppp2023,ER_nominal,population
Japan,JPN,102.5,150.2,125000000
South Korea,KOR,870.0,,51000000
Sweden,SWE,abc,0,10400000
";

    #[test]
    fn parses_rate_columns_by_schema_pattern() {
        let table = ExchangeRateCsvDatasourceImpl::new()
            .from_string(RATES_CSV, &RateSchema::default())
            .unwrap();
        assert_eq!(table.rate_types(), &["ppp2023", "ER_nominal"]);
        assert_eq!(table.rate("JPN", "ppp2023"), Some(102.5));
        assert_eq!(table.rate("JPN", "ER_nominal"), Some(150.2));
        // Blank, unparsable, and zero cells are all missing.
        assert_eq!(table.rate("KOR", "ER_nominal"), None);
        assert_eq!(table.rate("SWE", "ppp2023"), None);
        assert_eq!(table.rate("SWE", "ER_nominal"), None);
        // Non-rate columns never become rate types.
        assert_eq!(table.rate("JPN", "population"), None);
    }

    #[test]
    fn lists_countries_with_rates() {
        let table = ExchangeRateCsvDatasourceImpl::new()
            .from_string(RATES_CSV, &RateSchema::default())
            .unwrap();
        assert_eq!(
            table.countries_with_rates()[0],
            ("Japan".to_string(), "JPN".to_string())
        );
        assert_eq!(table.countries_with_rates().len(), 3);
    }

    #[test]
    fn missing_join_column_is_a_hard_error() {
        let err = ExchangeRateCsvDatasourceImpl::new()
            .from_string("name,ppp\nJapan,1.0\n", &RateSchema::default())
            .unwrap_err();
        assert!(matches!(err, DashboardError::InvalidCsvContent { .. }));
    }

    #[test]
    fn alternate_schema_resolves_other_header_convention() {
        let schema = RateSchema::from_ron(
            r#"(
                country_code_column: "country",
                country_name_column: "country",
                type_column_pattern: "exchange rates$",
            )"#,
        )
        .unwrap();
        let csv = "country,PPP exchange rates,Nominal exchange rates\nJPN,102.5,150.2\n";
        let table = ExchangeRateCsvDatasourceImpl::new()
            .from_string(csv, &schema)
            .unwrap();
        assert_eq!(table.rate("JPN", "PPP exchange rates"), Some(102.5));
        assert_eq!(table.rate("JPN", "Nominal exchange rates"), Some(150.2));
    }
}
