use std::collections::BTreeSet;

/// One worksheet row: a country plus the five category codes identifying a
/// case, followed by the 34 numeric cells (already leniently parsed).
#[derive(Debug, Clone, PartialEq)]
pub struct WelfareRecord {
    pub country: String,
    pub income_case: u32,
    pub family_type: u32,
    pub income_gender: u32,
    pub case: u32,
    pub alternative: u32,
    values: Vec<f64>,
}

impl WelfareRecord {
    pub fn new(
        country: impl Into<String>,
        income_case: u32,
        family_type: u32,
        income_gender: u32,
        case: u32,
        alternative: u32,
        values: Vec<f64>,
    ) -> Self {
        Self {
            country: country.into(),
            income_case,
            family_type,
            income_gender,
            case,
            alternative,
            values,
        }
    }

    /// Numeric cell at `position` in [`crate::entities::NUMERIC_FIELDS`]
    /// order. Positions beyond the stored row are absent, not an error,
    /// and read as 0.0.
    pub fn value(&self, position: usize) -> f64 {
        self.values.get(position).copied().unwrap_or(0.0)
    }

    pub(crate) fn category_tuple(&self) -> (u32, u32, u32, u32, u32) {
        (
            self.income_case,
            self.family_type,
            self.income_gender,
            self.case,
            self.alternative,
        )
    }
}

/// Distinct observed values per category field, sorted ascending. Taken
/// independently per field, so the Cartesian product over these lists may
/// contain combinations no row actually has.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDomains {
    pub income_case: Vec<u32>,
    pub family_type: Vec<u32>,
    pub income_gender: Vec<u32>,
    pub case: Vec<u32>,
    pub alternative: Vec<u32>,
}

/// The in-memory table of all loaded worksheet rows. Loaded once per
/// session and read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<WelfareRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<WelfareRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WelfareRecord> {
        self.records.iter()
    }

    /// Distinct country codes, sorted.
    pub fn countries(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.country.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    pub fn rows_for_country<'a>(
        &'a self,
        country: &'a str,
    ) -> impl Iterator<Item = &'a WelfareRecord> {
        self.records.iter().filter(move |r| r.country == country)
    }

    /// Observed category domains across the whole store.
    pub fn domains(&self) -> CategoryDomains {
        Self::collect_domains(self.records.iter())
    }

    /// Observed category domains restricted to one country.
    pub fn domains_for_country(&self, country: &str) -> CategoryDomains {
        Self::collect_domains(self.rows_for_country(country))
    }

    /// Number of distinct case combinations that actually occur in the
    /// data for the given countries.
    pub fn combination_count(&self, countries: &[String]) -> usize {
        countries
            .iter()
            .map(|country| {
                self.rows_for_country(country)
                    .map(WelfareRecord::category_tuple)
                    .collect::<BTreeSet<_>>()
                    .len()
            })
            .sum()
    }

    fn collect_domains<'a>(rows: impl Iterator<Item = &'a WelfareRecord>) -> CategoryDomains {
        let mut income_case = BTreeSet::new();
        let mut family_type = BTreeSet::new();
        let mut income_gender = BTreeSet::new();
        let mut case = BTreeSet::new();
        let mut alternative = BTreeSet::new();
        for r in rows {
            income_case.insert(r.income_case);
            family_type.insert(r.family_type);
            income_gender.insert(r.income_gender);
            case.insert(r.case);
            alternative.insert(r.alternative);
        }
        CategoryDomains {
            income_case: income_case.into_iter().collect(),
            family_type: family_type.into_iter().collect(),
            income_gender: income_gender.into_iter().collect(),
            case: case.into_iter().collect(),
            alternative: alternative.into_iter().collect(),
        }
    }
}
