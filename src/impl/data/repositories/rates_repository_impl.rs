use async_trait::async_trait;

use crate::{
    data::datasources::exchange_rate_csv_datasource::{
        ExchangeRateCsvDatasource, ExchangeRateCsvDatasourceImpl,
    },
    domain::repositories::rates_repository::RatesRepository,
    entities::{RateSchema, RateTable},
    errors::DashboardError,
};

pub(crate) struct RatesRepositoryImpl<
    DS = ExchangeRateCsvDatasourceImpl, // Default.
> where
    DS: ExchangeRateCsvDatasource,
{
    rate_datasource: DS,
}

#[async_trait]
impl<DS> RatesRepository for RatesRepositoryImpl<DS>
where
    DS: ExchangeRateCsvDatasource + Send + Sync,
{
    fn from_string(&self, csv: &str, schema: &RateSchema) -> Result<RateTable, DashboardError> {
        self.rate_datasource.from_string(csv, schema)
    }

    async fn from_file<P>(&self, path: P, schema: &RateSchema) -> Result<RateTable, DashboardError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let csv = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| DashboardError::read_error(path.as_ref(), e))?;
        self.from_string(&csv, schema)
    }
}

impl RatesRepositoryImpl {
    pub(crate) fn new() -> Self {
        RatesRepositoryImpl {
            rate_datasource: ExchangeRateCsvDatasourceImpl::new(),
        }
    }
}
