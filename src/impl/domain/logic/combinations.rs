use crate::{
    domain::logic::matcher::find_record,
    entities::{RecordStore, Selection},
};

/// Every case combination that actually occurs in the data for the given
/// countries, in sorted category order per country.
///
/// The category domains are observed independently per field, so their
/// Cartesian product can name combinations no row has; each candidate is
/// checked for existence before it survives.
pub(crate) fn existing_combinations(
    records: &RecordStore,
    countries: &[String],
) -> Vec<Selection> {
    let mut combinations = Vec::new();
    for country in countries {
        let domains = records.domains_for_country(country);
        for &income_case in &domains.income_case {
            for &family_type in &domains.family_type {
                for &income_gender in &domains.income_gender {
                    for &case in &domains.case {
                        for &alternative in &domains.alternative {
                            let candidate = Selection::new(
                                country.clone(),
                                income_case,
                                family_type,
                                income_gender,
                                case,
                                alternative,
                            );
                            if find_record(records, &candidate).is_some() {
                                combinations.push(candidate);
                            }
                        }
                    }
                }
            }
        }
    }
    combinations
}
