use async_trait::async_trait;

use crate::{entities::RecordStore, errors::DashboardError};

/// Load of the record store: two worksheet sources, header rows skipped,
/// sheet 0 rows before sheet 1 rows.
#[async_trait]
pub trait RecordsRepository: Send + Sync {
    fn from_strings(&self, sheet0: &str, sheet1: &str) -> Result<RecordStore, DashboardError>;

    async fn from_files<P>(&self, sheet0: P, sheet1: P) -> Result<RecordStore, DashboardError>
    where
        P: AsRef<std::path::Path> + Send + Sync;
}
