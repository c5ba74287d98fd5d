use crate::{entities::RenderedTable, errors::DashboardError};

/// Serializes a rendered table for download: header = selection labels,
/// one row per category, first column = category label.
pub(crate) struct CsvPrinter;

impl CsvPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_table(&self, table: &RenderedTable) -> Result<String, DashboardError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header = vec!["Category".to_string()];
        header.extend(table.selection_labels.iter().cloned());
        writer.write_record(&header)?;

        for row in &table.rows {
            let mut record = vec![row.label.clone()];
            record.extend(row.values.iter().map(|v| v.to_string()));
            writer.write_record(&record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| DashboardError::InvalidCsvContent {
                details: e.to_string(),
            })?;
        String::from_utf8(bytes).map_err(|e| DashboardError::InvalidCsvContent {
            details: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RenderedRow;

    #[test]
    fn prints_header_and_category_rows() {
        let table = RenderedTable {
            selection_labels: vec!["Japan-1".into(), "Japan-2".into()],
            rows: vec![
                RenderedRow {
                    label: "Earnings".into(),
                    values: vec![1000.0, 800.0],
                },
                RenderedRow {
                    label: "Income Tax".into(),
                    values: vec![-300.0, -250.5],
                },
            ],
        };
        let csv = CsvPrinter::new().print_table(&table).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Category,Japan-1,Japan-2");
        assert_eq!(lines[1], "Earnings,1000,800");
        assert_eq!(lines[2], "Income Tax,-300,-250.5");
        assert_eq!(lines.len(), 3);
    }
}
