use std::collections::HashSet;

use once_cell::sync::OnceCell;

use crate::{
    domain::usecases::compare_usecase::{CompareUsecase as _, CompareUsecaseImpl},
    entities::{
        AddOutcome, BulkAddSummary, CachedSelection, CategoryDomains, Comparison, RateSchema,
        RateTable, RecordStore, Selection, SelectionCache, SelectionTemplate,
    },
    errors::DashboardError,
};

/// One user session of the dashboard core.
///
/// Sources load at most once per session: the first successful load pins
/// the record store and rate table, later load calls are no-ops
/// (staleness is acceptable, there is no invalidation). The selection
/// cache lives and dies with this value; nothing persists across
/// sessions.
pub struct WelfareDashboard {
    compare_usecase: CompareUsecaseImpl,
    rate_schema: RateSchema,
    records: OnceCell<RecordStore>,
    rates: OnceCell<RateTable>,
    cache: SelectionCache,
}

impl Default for WelfareDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl WelfareDashboard {
    pub fn new() -> Self {
        Self::with_rate_schema(RateSchema::default())
    }

    pub fn with_rate_schema(rate_schema: RateSchema) -> Self {
        Self {
            compare_usecase: CompareUsecaseImpl::new(),
            rate_schema,
            records: OnceCell::new(),
            rates: OnceCell::new(),
            cache: SelectionCache::new(),
        }
    }

    // Source loading.
    // ---

    pub fn load_from_strings(
        &self,
        sheet0: &str,
        sheet1: &str,
        rates_csv: Option<&str>,
    ) -> Result<(), DashboardError> {
        if self.records.get().is_some() {
            return Ok(());
        }
        let (records, rates) = self.compare_usecase.load_stores_from_strings(
            sheet0,
            sheet1,
            rates_csv,
            &self.rate_schema,
        )?;
        let _ = self.records.set(records);
        let _ = self.rates.set(rates);
        Ok(())
    }

    pub async fn load_from_files<P>(
        &self,
        sheet0: P,
        sheet1: P,
        rates_csv: Option<P>,
    ) -> Result<(), DashboardError>
    where
        P: AsRef<std::path::Path> + Send + Sync,
    {
        if self.records.get().is_some() {
            return Ok(());
        }
        let (records, rates) = self
            .compare_usecase
            .load_stores_from_files(sheet0, sheet1, rates_csv, &self.rate_schema)
            .await?;
        let _ = self.records.set(records);
        let _ = self.rates.set(rates);
        Ok(())
    }

    // Read access for the selection widgets.
    // ---

    pub fn countries(&self) -> Vec<String> {
        self.records().countries()
    }

    pub fn domains_for_country(&self, country: &str) -> CategoryDomains {
        self.records().domains_for_country(country)
    }

    /// How many case combinations an "import all" action would consider
    /// for the given countries.
    pub fn combination_count(&self, countries: &[String]) -> usize {
        self.records().combination_count(countries)
    }

    pub fn rate_types(&self) -> Vec<String> {
        self.rates().rate_types().to_vec()
    }

    pub fn countries_with_rates(&self) -> Vec<(String, String)> {
        self.rates().countries_with_rates().to_vec()
    }

    // Selection cache actions.
    // ---

    pub fn cache_selection(&mut self, selection: Selection) -> AddOutcome {
        self.cache.add(selection)
    }

    pub fn cache_multi_country(
        &mut self,
        template: &SelectionTemplate,
        countries: &[String],
    ) -> BulkAddSummary {
        self.cache.add_multi_country(template, countries)
    }

    pub fn import_all_cases(&mut self, countries: &[String]) -> BulkAddSummary {
        let empty = RecordStore::default();
        let records = self.records.get().unwrap_or(&empty);
        self.cache.add_all_combinations(countries, records)
    }

    pub fn cached_selections(&self) -> Vec<CachedSelection> {
        self.cache.iter().cloned().collect()
    }

    pub fn delete_selections(&mut self, positions: &HashSet<usize>) {
        self.cache.delete(positions);
    }

    pub fn clear_selections(&mut self) {
        self.cache.clear();
    }

    // Result rendering.
    // ---

    pub fn show_result(
        &self,
        rate_type: Option<&str>,
        columns_filter: Option<&[String]>,
    ) -> Result<Comparison, DashboardError> {
        let empty_records = RecordStore::default();
        let empty_rates = RateTable::default();
        let records = self.records.get().unwrap_or(&empty_records);
        let rates = self.rates.get().unwrap_or(&empty_rates);
        self.compare_usecase.compare(
            &self.cache.selections(),
            records,
            rates,
            rate_type,
            columns_filter,
        )
    }

    fn records(&self) -> &RecordStore {
        static EMPTY: OnceCell<RecordStore> = OnceCell::new();
        self.records
            .get()
            .unwrap_or_else(|| EMPTY.get_or_init(RecordStore::default))
    }

    fn rates(&self) -> &RateTable {
        static EMPTY: OnceCell<RateTable> = OnceCell::new();
        self.rates
            .get()
            .unwrap_or_else(|| EMPTY.get_or_init(RateTable::default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET0: &str = "\
country,year,incomecase,familytype,incomegender,case,alternative,earning,iliving
JPN,2023,1,0,1,1,1,1000,200
JPN,2023,2,1,1,1,1,1200,100
";
    const SHEET1: &str = "\
country,year,incomecase,familytype,incomegender,case,alternative,earning,iliving
KOR,2023,1,0,1,1,1,900,90
";
    const RATES: &str = "countryname,countrycode,ppp,ER_nominal\nJapan,JPN,100,150\n";

    fn session() -> WelfareDashboard {
        let dashboard = WelfareDashboard::new();
        dashboard
            .load_from_strings(SHEET0, SHEET1, Some(RATES))
            .unwrap();
        dashboard
    }

    #[test]
    fn load_is_init_once() {
        let dashboard = session();
        assert_eq!(dashboard.countries(), vec!["JPN".to_string(), "KOR".to_string()]);
        // A second load with different content is a no-op.
        dashboard.load_from_strings("", "", None).unwrap();
        assert_eq!(dashboard.countries().len(), 2);
        assert_eq!(dashboard.rate_types(), vec!["ppp", "ER_nominal"]);
    }

    #[test]
    fn session_flow_cache_and_show() {
        let mut dashboard = session();
        assert_eq!(
            dashboard.cache_selection(Selection::new("JPN", 1, 0, 1, 1, 1)),
            AddOutcome::Added
        );
        assert_eq!(
            dashboard.cache_selection(Selection::new("JPN", 1, 0, 1, 1, 1)),
            AddOutcome::Duplicate
        );

        let summary = dashboard.import_all_cases(&["KOR".to_string()]);
        assert_eq!(summary.added, 1);
        assert_eq!(dashboard.cached_selections().len(), 2);

        let comparison = dashboard.show_result(Some("ppp"), None).unwrap();
        assert_eq!(
            comparison.original.selection_labels,
            vec!["Japan-1", "South Korea-1"]
        );
        let converted = comparison.converted.unwrap();
        let earnings = converted.rows.iter().find(|r| r.label == "Earnings").unwrap();
        // JPN converted by ppp=100, KOR has no rate row.
        assert_eq!(earnings.values, vec![10.0, 900.0]);
        assert_eq!(comparison.notes.len(), 1);
    }

    #[test]
    fn show_result_before_load_degrades_to_zeroes() {
        let mut dashboard = WelfareDashboard::new();
        dashboard.cache_selection(Selection::new("JPN", 1, 0, 1, 1, 1));
        let comparison = dashboard.show_result(None, None).unwrap();
        for row in &comparison.original.rows {
            assert_eq!(row.values, vec![0.0]);
        }
    }

    #[test]
    fn delete_and_clear_actions() {
        let mut dashboard = session();
        dashboard.cache_selection(Selection::new("JPN", 1, 0, 1, 1, 1));
        dashboard.cache_selection(Selection::new("JPN", 2, 1, 1, 1, 1));
        dashboard.cache_selection(Selection::new("KOR", 1, 0, 1, 1, 1));

        dashboard.delete_selections(&HashSet::from([1]));
        let cached = dashboard.cached_selections();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[1].selection.country, "KOR");
        assert_eq!(cached[1].index, 2);

        dashboard.clear_selections();
        assert!(dashboard.cached_selections().is_empty());
    }

    #[test]
    fn combination_count_matches_import() {
        let mut dashboard = session();
        let countries = vec!["JPN".to_string(), "KOR".to_string()];
        let count = dashboard.combination_count(&countries);
        let summary = dashboard.import_all_cases(&countries);
        assert_eq!(summary.added, count);
    }
}
