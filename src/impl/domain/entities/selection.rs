use serde_derive::{Deserialize, Serialize};

/// One user-chosen (country, income case, family type, income gender,
/// case, alternative) tuple identifying a worksheet row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub country: String,
    pub income_case: u32,
    pub family_type: u32,
    pub income_gender: u32,
    pub case: u32,
    pub alternative: u32,
}

impl Selection {
    pub fn new(
        country: impl Into<String>,
        income_case: u32,
        family_type: u32,
        income_gender: u32,
        case: u32,
        alternative: u32,
    ) -> Self {
        Self {
            country: country.into(),
            income_case,
            family_type,
            income_gender,
            case,
            alternative,
        }
    }
}

/// A cached selection carrying its 1-based position at time of caching.
/// The index is bookkeeping only: two cached selections are the same
/// selection iff their scalar fields match, regardless of index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedSelection {
    pub selection: Selection,
    pub index: usize,
}

impl PartialEq for CachedSelection {
    fn eq(&self, other: &Self) -> bool {
        self.selection == other.selection
    }
}
impl Eq for CachedSelection {}

/// A multi-country user action: the five category codes plus the list of
/// target countries. Always expanded into concrete [`Selection`]s before
/// anything is stored; never cached in this form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionTemplate {
    pub income_case: u32,
    pub family_type: u32,
    pub income_gender: u32,
    pub case: u32,
    pub alternative: u32,
}

impl SelectionTemplate {
    pub fn for_country(&self, country: &str) -> Selection {
        Selection::new(
            country,
            self.income_case,
            self.family_type,
            self.income_gender,
            self.case,
            self.alternative,
        )
    }
}
