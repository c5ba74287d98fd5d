use async_trait::async_trait;

use crate::{
    data::repositories::{
        rates_repository_impl::RatesRepositoryImpl,
        records_repository_impl::RecordsRepositoryImpl,
    },
    domain::{
        logic::chart_builder::{BuildNote, ChartBuilder},
        repositories::{rates_repository::RatesRepository, records_repository::RecordsRepository},
    },
    entities::{RateSchema, RateTable, RecordStore, RenderedTable, Selection, StackedBarChart},
    errors::DashboardError,
    presentation::{csv_printer::CsvPrinter, table_fmt::render, utils::selection_labels},
};

/// Everything one "show result" action produces.
///
/// `original` always carries unconverted values; `converted` is present
/// when a rate type was requested. Chart and CSV follow the converted
/// variant when it exists.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub original: RenderedTable,
    pub converted: Option<RenderedTable>,
    pub chart: StackedBarChart,
    pub csv: String,
    pub notes: Vec<BuildNote>,
}

#[async_trait]
pub trait CompareUsecase: Send + Sync {
    fn load_stores_from_strings(
        &self,
        sheet0: &str,
        sheet1: &str,
        rates_csv: Option<&str>,
        schema: &RateSchema,
    ) -> Result<(RecordStore, RateTable), DashboardError>;

    async fn load_stores_from_files<P>(
        &self,
        sheet0: P,
        sheet1: P,
        rates_csv: Option<P>,
        schema: &RateSchema,
    ) -> Result<(RecordStore, RateTable), DashboardError>
    where
        P: AsRef<std::path::Path> + Send + Sync;

    fn compare(
        &self,
        selections: &[Selection],
        records: &RecordStore,
        rates: &RateTable,
        rate_type: Option<&str>,
        columns_filter: Option<&[String]>,
    ) -> Result<Comparison, DashboardError>;
}

pub(crate) struct CompareUsecaseImpl<
    R1 = RecordsRepositoryImpl, // Default.
    R2 = RatesRepositoryImpl,   // Default.
> where
    R1: RecordsRepository,
    R2: RatesRepository,
{
    records_repository: R1,
    rates_repository: R2,
}

#[async_trait]
impl<R1, R2> CompareUsecase for CompareUsecaseImpl<R1, R2>
where
    R1: RecordsRepository,
    R2: RatesRepository,
{
    fn load_stores_from_strings(
        &self,
        sheet0: &str,
        sheet1: &str,
        rates_csv: Option<&str>,
        schema: &RateSchema,
    ) -> Result<(RecordStore, RateTable), DashboardError> {
        let records = self.records_repository.from_strings(sheet0, sheet1)?;
        let rates = match rates_csv {
            Some(csv) => self.rates_repository.from_string(csv, schema)?,
            None => RateTable::default(),
        };
        Ok((records, rates))
    }

    async fn load_stores_from_files<P>(
        &self,
        sheet0: P,
        sheet1: P,
        rates_csv: Option<P>,
        schema: &RateSchema,
    ) -> Result<(RecordStore, RateTable), DashboardError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        let records = self.records_repository.from_files(sheet0, sheet1).await?;
        let rates = match rates_csv {
            Some(path) => self.rates_repository.from_file(path, schema).await?,
            None => RateTable::default(),
        };
        Ok((records, rates))
    }

    fn compare(
        &self,
        selections: &[Selection],
        records: &RecordStore,
        rates: &RateTable,
        rate_type: Option<&str>,
        columns_filter: Option<&[String]>,
    ) -> Result<Comparison, DashboardError> {
        let labels = selection_labels(selections);
        let builder = ChartBuilder::new(records, rates);

        let (raw_matrix, _) = builder.build(selections, None);
        let original = render(&raw_matrix, labels.clone(), columns_filter);

        let mut notes = Vec::new();
        let converted = rate_type.map(|rate_type| {
            let (converted_matrix, conversion_notes) = builder.build(selections, Some(rate_type));
            notes = conversion_notes;
            render(&converted_matrix, labels, columns_filter)
        });

        let effective = converted.as_ref().unwrap_or(&original);
        let chart = StackedBarChart::from_table(effective);
        let csv = CsvPrinter::new().print_table(effective)?;

        Ok(Comparison {
            original,
            converted,
            chart,
            csv,
            notes,
        })
    }
}

impl CompareUsecaseImpl {
    pub(crate) fn new() -> Self {
        CompareUsecaseImpl {
            records_repository: RecordsRepositoryImpl::new(),
            rates_repository: RatesRepositoryImpl::new(),
        }
    }
}
