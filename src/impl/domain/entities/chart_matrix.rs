use crate::entities::{NumericFieldSpec, NUMERIC_FIELDS};

/// Values for one numeric field, one entry per selection, in selection
/// order.
#[derive(Debug, Clone)]
pub struct FieldSeries {
    pub field: &'static NumericFieldSpec,
    pub values: Vec<f64>,
}

/// Field-by-selection value table produced by the chart builder.
///
/// Always carries exactly one series per entry of
/// [`NUMERIC_FIELDS`], each with `selection_count()` values in the
/// original selection order.
#[derive(Debug, Clone)]
pub struct ChartMatrix {
    selection_count: usize,
    series: Vec<FieldSeries>,
}

impl ChartMatrix {
    pub(crate) fn with_capacity(selection_count: usize) -> Self {
        Self {
            selection_count: 0,
            series: NUMERIC_FIELDS
                .iter()
                .map(|field| FieldSeries {
                    field,
                    values: Vec::with_capacity(selection_count),
                })
                .collect(),
        }
    }

    /// Appends one value per numeric field for the next selection.
    pub(crate) fn push_column(&mut self, column: &[f64; NUMERIC_FIELDS.len()]) {
        for (series, value) in self.series.iter_mut().zip(column) {
            series.values.push(*value);
        }
        self.selection_count += 1;
    }

    pub fn selection_count(&self) -> usize {
        self.selection_count
    }

    pub fn series(&self) -> impl Iterator<Item = &FieldSeries> {
        self.series.iter()
    }

    pub fn values(&self, key: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.field.key == key)
            .map(|s| s.values.as_slice())
    }
}
