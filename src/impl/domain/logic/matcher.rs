use crate::entities::{RecordStore, Selection, WelfareRecord};

/// Finds the row identified by `selection`. The dataset carries at most
/// one row per full category tuple per country; if several exist the
/// first wins. No match is not an error: the caller reads every numeric
/// field as zero.
pub(crate) fn find_record<'a>(
    records: &'a RecordStore,
    selection: &Selection,
) -> Option<&'a WelfareRecord> {
    records.iter().find(|r| {
        r.country == selection.country
            && r.income_case == selection.income_case
            && r.family_type == selection.family_type
            && r.income_gender == selection.income_gender
            && r.case == selection.case
            && r.alternative == selection.alternative
    })
}
