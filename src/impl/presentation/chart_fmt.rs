use serde_derive::Serialize;

use crate::{entities::RenderedTable, presentation::utils::bar_text};

/// Rotating palette for chart series, picked for adjacent-series contrast.
const SERIES_COLORS: [&str; 15] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#FFB347", "#87CEEB",
    "#F0E68C", "#FA8072", "#98FB98", "#DEB887", "#FF69B4", "#40E0D0", "#9370DB",
];

/// One chart series: a category stacked across all selections.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
    /// Per-bar value labels; blank where the bar is empty.
    pub text: Vec<String>,
    pub color: &'static str,
}

/// Stacked-bar payload for the presentation layer: one series per
/// category, selections on the x-axis. Stacking is `relative` so
/// sign-normalized benefits stack upward and costs downward from zero.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StackedBarChart {
    pub x: Vec<String>,
    pub series: Vec<BarSeries>,
    pub barmode: &'static str,
}

impl StackedBarChart {
    pub(crate) fn from_table(table: &RenderedTable) -> Self {
        let series = table
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| BarSeries {
                name: row.label.clone(),
                values: row.values.clone(),
                text: row.values.iter().map(|&v| bar_text(v)).collect(),
                color: SERIES_COLORS[i % SERIES_COLORS.len()],
            })
            .collect();
        Self {
            x: table.selection_labels.clone(),
            series,
            barmode: "relative",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "x": self.x,
            "series": self.series,
            "barmode": self.barmode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RenderedRow;

    fn table() -> RenderedTable {
        RenderedTable {
            selection_labels: vec!["Japan-1".into()],
            rows: vec![
                RenderedRow {
                    label: "Earnings".into(),
                    values: vec![1000.0],
                },
                RenderedRow {
                    label: "Income Tax".into(),
                    values: vec![0.0],
                },
            ],
        }
    }

    #[test]
    fn one_series_per_category_with_relative_stacking() {
        let chart = StackedBarChart::from_table(&table());
        assert_eq!(chart.barmode, "relative");
        assert_eq!(chart.x, vec!["Japan-1"]);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "Earnings");
        assert_eq!(chart.series[0].text, vec!["1,000"]);
        // Zero bars stay unlabeled.
        assert_eq!(chart.series[1].text, vec![""]);
        assert_ne!(chart.series[0].color, chart.series[1].color);
    }

    #[test]
    fn palette_wraps_after_fifteen_series() {
        let rows = (0..17)
            .map(|i| RenderedRow {
                label: format!("cat{i}"),
                values: vec![1.0],
            })
            .collect();
        let chart = StackedBarChart::from_table(&RenderedTable {
            selection_labels: vec!["Japan-1".into()],
            rows,
        });
        assert_eq!(chart.series[0].color, chart.series[15].color);
    }

    #[test]
    fn serializes_to_json_payload() {
        let json = StackedBarChart::from_table(&table()).to_json();
        assert_eq!(json["barmode"], "relative");
        assert_eq!(json["series"][0]["values"][0], 1000.0);
    }
}
