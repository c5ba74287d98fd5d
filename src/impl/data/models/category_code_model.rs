use std::num::ParseIntError;
use std::str::FromStr;

/// Strict categorical cell: the five case-identifying fields of a
/// worksheet row are numeric-looking strings. A cell that fails this parse
/// marks a row that can never match any selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CategoryCodeModel(pub u32);

impl FromStr for CategoryCodeModel {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(CategoryCodeModel)
    }
}

impl From<CategoryCodeModel> for u32 {
    fn from(m: CategoryCodeModel) -> u32 {
        m.0
    }
}
