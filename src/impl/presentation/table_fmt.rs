use crate::entities::{ChartMatrix, FieldSeries, SignClass, NUMERIC_FIELDS};

/// One table row: a human-readable category label and one value per
/// selection.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub label: String,
    pub values: Vec<f64>,
}

/// Display/export form of a [`ChartMatrix`]: excluded columns dropped,
/// signs normalized, keys renamed to display labels. One column per
/// selection, labeled.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    pub selection_labels: Vec<String>,
    pub rows: Vec<RenderedRow>,
}

/// Applies, in order: the excluded-column drop, the optional column
/// filter (in the filter's requested order, unknown keys silently
/// ignored), the sign rule, and the key-to-label rename.
pub(crate) fn render(
    matrix: &ChartMatrix,
    selection_labels: Vec<String>,
    columns_filter: Option<&[String]>,
) -> RenderedTable {
    let rows = match columns_filter {
        None => matrix
            .series()
            .filter(|s| !s.field.excluded)
            .map(render_series)
            .collect(),
        Some(keys) => keys
            .iter()
            .filter_map(|key| {
                matrix
                    .series()
                    .find(|s| s.field.key == *key && !s.field.excluded)
            })
            .map(render_series)
            .collect(),
    };
    RenderedTable {
        selection_labels,
        rows,
    }
}

fn render_series(series: &FieldSeries) -> RenderedRow {
    let normalize: fn(f64) -> f64 = match series.field.class {
        SignClass::Benefit => |v: f64| v.abs(),
        SignClass::Cost => |v: f64| -v.abs(),
        SignClass::Unclassified => |v: f64| v,
    };
    RenderedRow {
        label: series.field.label.to_string(),
        values: series.values.iter().copied().map(normalize).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::logic::chart_builder::ChartBuilder,
        entities::{RateTable, RecordStore, Selection, WelfareRecord},
    };

    fn matrix(values: Vec<f64>) -> ChartMatrix {
        let store = RecordStore::new(vec![WelfareRecord::new("JPN", 1, 0, 1, 1, 1, values)]);
        let rates = RateTable::default();
        let (matrix, _) = ChartBuilder::new(&store, &rates)
            .build(&[Selection::new("JPN", 1, 0, 1, 1, 1)], None);
        matrix
    }

    fn row<'a>(table: &'a RenderedTable, label: &str) -> &'a RenderedRow {
        table.rows.iter().find(|r| r.label == label).unwrap()
    }

    #[test]
    fn excluded_columns_are_dropped() {
        let table = render(&matrix(vec![1000.0]), vec!["Japan-1".into()], None);
        assert_eq!(table.rows.len(), NUMERIC_FIELDS.len() - 3);
        assert!(!table.rows.iter().any(|r| r.label == "Total Benefits"));
        assert!(!table.rows.iter().any(|r| r.label == "Total Expenses"));
        assert!(!table.rows.iter().any(|r| r.label == "Other costs"));
    }

    #[test]
    fn sign_rule_normalizes_benefits_and_costs() {
        // earning raw -1000 (benefit), incometax raw 300 at position 18
        // (cost), transportcost raw -5 at position 31 (unclassified).
        let mut values = vec![0.0; NUMERIC_FIELDS.len()];
        values[0] = -1000.0;
        values[18] = 300.0;
        values[31] = -5.0;
        let table = render(&matrix(values), vec!["Japan-1".into()], None);
        assert_eq!(row(&table, "Earnings").values, vec![1000.0]);
        assert_eq!(row(&table, "Income Tax").values, vec![-300.0]);
        // Unclassified passes through unchanged.
        assert_eq!(row(&table, "Transportation cost").values, vec![-5.0]);
    }

    #[test]
    fn sign_invariant_for_arbitrary_raw_signs() {
        let values: Vec<f64> = (0..NUMERIC_FIELDS.len())
            .map(|i| if i % 2 == 0 { -(i as f64) } else { i as f64 })
            .collect();
        let table = render(&matrix(values), vec!["Japan-1".into()], None);
        for (field, rendered) in NUMERIC_FIELDS
            .iter()
            .filter(|f| !f.excluded)
            .zip(&table.rows)
        {
            for &v in &rendered.values {
                match field.class {
                    SignClass::Benefit => assert!(v >= 0.0, "{} rendered {}", field.key, v),
                    SignClass::Cost => assert!(v <= 0.0, "{} rendered {}", field.key, v),
                    SignClass::Unclassified => {}
                }
            }
        }
    }

    #[test]
    fn filter_keeps_requested_order_and_ignores_unknowns() {
        let mut values = vec![0.0; NUMERIC_FIELDS.len()];
        values[0] = 1000.0;
        values[1] = 200.0;
        let filter = vec![
            "iliving".to_string(),
            "nosuchkey".to_string(),
            "earning".to_string(),
            // Excluded keys stay excluded even when requested.
            "totalbenefit".to_string(),
        ];
        let table = render(&matrix(values), vec!["Japan-1".into()], Some(&filter));
        let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Living subsidy", "Earnings"]);
    }

    #[test]
    fn end_to_end_earning_and_living_subsidy() {
        let table = render(&matrix(vec![1000.0, 200.0]), vec!["Japan-1".into()], None);
        assert_eq!(row(&table, "Earnings").values, vec![1000.0]);
        // iliving is classed as a benefit in the catalog; a cost-classed
        // subsidy of 200 would render as -200.
        assert_eq!(row(&table, "Living subsidy").values, vec![200.0]);
    }
}
