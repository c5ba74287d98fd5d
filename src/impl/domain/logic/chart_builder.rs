use std::fmt;

use crate::{
    domain::logic::matcher::find_record,
    entities::{ChartMatrix, RateTable, RecordStore, Selection, NUMERIC_FIELDS},
};

/// Non-fatal diagnostics produced while building a matrix, returned to the
/// caller alongside the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildNote {
    /// The requested rate type has no usable entry for this country; its
    /// values were left unconverted.
    MissingRate { country: String, rate_type: String },
}

impl fmt::Display for BuildNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildNote::MissingRate { country, rate_type } => write!(
                f,
                "No exchange rate found for {country} with type {rate_type}. Using original values."
            ),
        }
    }
}

pub(crate) struct ChartBuilder<'a> {
    records: &'a RecordStore,
    rates: &'a RateTable,
}

impl<'a> ChartBuilder<'a> {
    pub(crate) fn new(records: &'a RecordStore, rates: &'a RateTable) -> Self {
        Self { records, rates }
    }

    /// Builds the field-by-selection matrix, one column per selection in
    /// input order.
    ///
    /// Unmatched selections contribute all-zero columns. Conversion is
    /// per-selection: a missing rate leaves only that selection's column
    /// unconverted and surfaces a [`BuildNote`].
    pub(crate) fn build(
        &self,
        selections: &[Selection],
        rate_type: Option<&str>,
    ) -> (ChartMatrix, Vec<BuildNote>) {
        let mut matrix = ChartMatrix::with_capacity(selections.len());
        let mut notes = Vec::new();

        for selection in selections {
            let mut column = [0.0; NUMERIC_FIELDS.len()];
            if let Some(record) = find_record(self.records, selection) {
                let rate = rate_type.and_then(|rate_type| {
                    let rate = self.rates.rate(&selection.country, rate_type);
                    if rate.is_none() {
                        tracing::warn!(
                            country = %selection.country,
                            rate_type,
                            "no exchange rate; leaving values unconverted"
                        );
                        notes.push(BuildNote::MissingRate {
                            country: selection.country.clone(),
                            rate_type: rate_type.to_string(),
                        });
                    }
                    rate
                });
                for (position, value) in column.iter_mut().enumerate() {
                    *value = match rate {
                        Some(rate) => record.value(position) / rate,
                        None => record.value(position),
                    };
                }
            }
            matrix.push_column(&column);
        }

        (matrix, notes)
    }
}
