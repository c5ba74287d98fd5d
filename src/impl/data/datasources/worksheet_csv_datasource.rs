use std::str::FromStr as _;

use crate::{
    data::models::{
        category_code_model::CategoryCodeModel, numeric_cell_model::NumericCellModel,
    },
    entities::{WelfareRecord, NUMERIC_FIELDS},
    errors::DashboardError,
};

const CATEGORY_FIELD_COUNT: usize = 7;

pub(crate) trait WorksheetCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<WelfareRecord>, DashboardError>;
}

pub(crate) struct WorksheetCsvDatasourceImpl;

impl WorksheetCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl WorksheetCsvDatasource for WorksheetCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<WelfareRecord>, DashboardError> {
        // has_headers skips the worksheet's header row; flexible because
        // trailing numeric cells are frequently truncated in the sheets.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(s.as_bytes());
        let mut records = Vec::new();
        for r in reader.records() {
            let r = r?;

            // Extract from CSV record.
            let raw_country = r.get(0).unwrap_or("");
            // Field 1 is unused in the source layout.
            let raw_income_case = r.get(2).unwrap_or("");
            let raw_family_type = r.get(3).unwrap_or("");
            let raw_income_gender = r.get(4).unwrap_or("");
            let raw_case = r.get(5).unwrap_or("");
            let raw_alternative = r.get(6).unwrap_or("");

            // Parse. A row without a country or with a non-numeric
            // category cell can never match a selection; drop it here
            // instead of carrying it around.
            if raw_country.is_empty() || r.len() < CATEGORY_FIELD_COUNT {
                tracing::debug!(fields = r.len(), "skipping row without full category tuple");
                continue;
            }
            let codes: Result<Vec<u32>, _> = [
                raw_income_case,
                raw_family_type,
                raw_income_gender,
                raw_case,
                raw_alternative,
            ]
            .into_iter()
            .map(|c| CategoryCodeModel::from_str(c).map(u32::from))
            .collect();
            let codes = match codes {
                Ok(codes) => codes,
                Err(_) => {
                    tracing::warn!(country = raw_country, "skipping row with malformed category cell");
                    continue;
                }
            };
            let values: Vec<f64> = r
                .iter()
                .skip(CATEGORY_FIELD_COUNT)
                .take(NUMERIC_FIELDS.len())
                .map(|cell| {
                    let NumericCellModel(v) = cell.parse().unwrap_or(NumericCellModel(0.0));
                    v
                })
                .collect();

            // Build.
            records.push(WelfareRecord::new(
                raw_country,
                codes[0],
                codes[1],
                codes[2],
                codes[3],
                codes[4],
                values,
            ));
        }
        Ok(records)
    }
}
