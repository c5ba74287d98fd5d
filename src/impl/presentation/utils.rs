use std::collections::HashMap;

use num_format::{Locale, ToFormattedString as _};

use crate::entities::{country_name, Selection};

/// Column label per selection: `"{country_name}-{n}"` with a 1-based
/// per-country occurrence counter over the list, falling back to
/// `"Selection {position}"` when the country code has no known name.
///
/// For consistency with the rest of the output, the country name comes
/// from the static catalog, not the rate source.
pub(crate) fn selection_labels(selections: &[Selection]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    selections
        .iter()
        .enumerate()
        .map(|(position, selection)| {
            let occurrence = seen
                .entry(selection.country.as_str())
                .and_modify(|n| *n += 1)
                .or_insert(1);
            match country_name(&selection.country) {
                Some(name) => format!("{}-{}", name, occurrence),
                None => format!("Selection {}", position + 1),
            }
        })
        .collect()
}

/// Text label shown inside a chart bar: rounded, thousands-separated,
/// blank for zero so empty bars stay unlabeled.
pub(crate) fn bar_text(value: f64) -> String {
    if value == 0.0 {
        return String::new();
    }
    (value.round() as i64).to_formatted_string(&Locale::en)
}
