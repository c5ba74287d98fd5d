use async_trait::async_trait;

use crate::{
    entities::{RateSchema, RateTable},
    errors::DashboardError,
};

#[async_trait]
pub trait RatesRepository: Send + Sync {
    fn from_string(&self, csv: &str, schema: &RateSchema) -> Result<RateTable, DashboardError>;

    async fn from_file<P>(&self, path: P, schema: &RateSchema) -> Result<RateTable, DashboardError>
    where
        P: AsRef<std::path::Path> + Send + Sync;
}
