use std::str::FromStr;

/// Lenient numeric worksheet cell.
///
/// Sparse source data routinely leaves these cells empty or filled with
/// placeholder text; both read as 0.0. This parse never fails by contract,
/// so a malformed cell can never take down a whole comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NumericCellModel(pub f64);

impl FromStr for NumericCellModel {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().replace(',', "");
        if raw.is_empty() {
            return Ok(NumericCellModel(0.0));
        }
        Ok(NumericCellModel(raw.parse::<f64>().unwrap_or(0.0)))
    }
}

impl From<NumericCellModel> for f64 {
    fn from(m: NumericCellModel) -> f64 {
        m.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> f64 {
        let NumericCellModel(v) = s.parse().unwrap();
        v
    }

    #[test]
    fn lenient_parse() {
        assert_eq!(parse("1000"), 1000.0);
        assert_eq!(parse(" -12.5 "), -12.5);
        assert_eq!(parse("1,234.5"), 1234.5);
        assert_eq!(parse(""), 0.0);
        assert_eq!(parse("   "), 0.0);
        assert_eq!(parse("n/a"), 0.0);
        assert_eq!(parse("12abc"), 0.0);
    }
}
