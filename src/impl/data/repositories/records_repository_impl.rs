use async_trait::async_trait;

use crate::{
    data::datasources::worksheet_csv_datasource::{
        WorksheetCsvDatasource, WorksheetCsvDatasourceImpl,
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::RecordStore,
    errors::DashboardError,
};

pub(crate) struct RecordsRepositoryImpl<
    DS = WorksheetCsvDatasourceImpl, // Default.
> where
    DS: WorksheetCsvDatasource,
{
    worksheet_datasource: DS,
}

#[async_trait]
impl<DS> RecordsRepository for RecordsRepositoryImpl<DS>
where
    DS: WorksheetCsvDatasource + Send + Sync,
{
    fn from_strings(&self, sheet0: &str, sheet1: &str) -> Result<RecordStore, DashboardError> {
        let mut records = self.worksheet_datasource.from_string(sheet0)?;
        records.extend(self.worksheet_datasource.from_string(sheet1)?);
        Ok(RecordStore::new(records))
    }

    async fn from_files<P>(&self, sheet0: P, sheet1: P) -> Result<RecordStore, DashboardError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let sheet0_csv = tokio::fs::read_to_string(&sheet0)
            .await
            .map_err(|e| DashboardError::read_error(sheet0.as_ref(), e))?;
        let sheet1_csv = tokio::fs::read_to_string(&sheet1)
            .await
            .map_err(|e| DashboardError::read_error(sheet1.as_ref(), e))?;
        self.from_strings(&sheet0_csv, &sheet1_csv)
    }
}

impl RecordsRepositoryImpl {
    pub(crate) fn new() -> Self {
        RecordsRepositoryImpl {
            worksheet_datasource: WorksheetCsvDatasourceImpl::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    const SHEET0: &str = "country,year,ic,ft,ig,case,alt,earning\nJPN,2023,1,0,1,1,1,1000\n";
    const SHEET1: &str = "country,year,ic,ft,ig,case,alt,earning\nKOR,2023,1,0,1,1,1,900\n";

    #[test]
    fn concatenates_sheets_in_source_order() {
        let store = RecordsRepositoryImpl::new()
            .from_strings(SHEET0, SHEET1)
            .unwrap();
        assert_eq!(store.len(), 2);
        let countries: Vec<&str> = store.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(countries, vec!["JPN", "KOR"]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn loads_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let p0 = dir.path().join("sheet0.csv");
        let p1 = dir.path().join("sheet1.csv");
        write!(std::fs::File::create(&p0).unwrap(), "{SHEET0}").unwrap();
        write!(std::fs::File::create(&p1).unwrap(), "{SHEET1}").unwrap();

        let store = RecordsRepositoryImpl::new().from_files(p0, p1).await.unwrap();
        assert_eq!(store.len(), 2);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn missing_file_reports_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        let err = RecordsRepositoryImpl::new()
            .from_files(missing.clone(), missing)
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::ReadError { .. }));
    }
}
