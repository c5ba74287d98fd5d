use std::collections::HashSet;

use crate::{
    domain::logic::combinations::existing_combinations,
    entities::{CachedSelection, RecordStore, Selection, SelectionTemplate},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The same scalar-field selection is already cached; nothing changed.
    Duplicate,
}

/// Result of a bulk add: how many entries were new vs. skipped as
/// duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkAddSummary {
    pub added: usize,
    pub skipped: usize,
}

/// Ordered, deduplicated list of selections held for one user session.
///
/// Invariant: after any mutation the entries carry indices exactly `1..N`
/// in list order.
#[derive(Debug, Clone, Default)]
pub struct SelectionCache {
    entries: Vec<CachedSelection>,
}

impl SelectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CachedSelection> {
        self.entries.iter()
    }

    pub fn selections(&self) -> Vec<Selection> {
        self.entries.iter().map(|e| e.selection.clone()).collect()
    }

    pub fn add(&mut self, selection: Selection) -> AddOutcome {
        if self.entries.iter().any(|e| e.selection == selection) {
            return AddOutcome::Duplicate;
        }
        let index = self.entries.len() + 1;
        self.entries.push(CachedSelection { selection, index });
        AddOutcome::Added
    }

    /// Expands a multi-country template into one concrete selection per
    /// country and adds each. The template itself is never stored.
    pub fn add_multi_country(
        &mut self,
        template: &SelectionTemplate,
        countries: &[String],
    ) -> BulkAddSummary {
        self.add_all(countries.iter().map(|c| template.for_country(c)))
    }

    /// Imports every case combination that actually exists in `records`
    /// for the given countries.
    pub fn add_all_combinations(
        &mut self,
        countries: &[String],
        records: &RecordStore,
    ) -> BulkAddSummary {
        self.add_all(existing_combinations(records, countries))
    }

    /// Removes the entries at the given 0-based positions and re-indexes
    /// the survivors.
    pub fn delete(&mut self, positions: &HashSet<usize>) {
        let mut position = 0;
        self.entries.retain(|_| {
            let keep = !positions.contains(&position);
            position += 1;
            keep
        });
        self.reindex();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn add_all(&mut self, selections: impl IntoIterator<Item = Selection>) -> BulkAddSummary {
        let mut summary = BulkAddSummary::default();
        for selection in selections {
            match self.add(selection) {
                AddOutcome::Added => summary.added += 1,
                AddOutcome::Duplicate => summary.skipped += 1,
            }
        }
        summary
    }

    fn reindex(&mut self) {
        for (position, entry) in self.entries.iter_mut().enumerate() {
            entry.index = position + 1;
        }
    }
}
