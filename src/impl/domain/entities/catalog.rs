use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Sign-normalization grouping applied at render time. Benefits always
/// render >= 0 (stacked upward), costs always render <= 0 (stacked
/// downward), regardless of the raw sign in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignClass {
    Benefit,
    Cost,
    Unclassified,
}

/// Static description of one of the 34 numeric columns trailing each
/// worksheet row, positionally aligned to [`NUMERIC_FIELDS`].
#[derive(Debug)]
pub struct NumericFieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    /// Dropped from tables, CSV export, and charts.
    pub excluded: bool,
    pub class: SignClass,
}

const fn benefit(key: &'static str, label: &'static str) -> NumericFieldSpec {
    NumericFieldSpec {
        key,
        label,
        excluded: false,
        class: SignClass::Benefit,
    }
}

const fn cost(key: &'static str, label: &'static str) -> NumericFieldSpec {
    NumericFieldSpec {
        key,
        label,
        excluded: false,
        class: SignClass::Cost,
    }
}

/// The fixed column order of the numeric portion of a worksheet row
/// (fields 7 onward). Order is part of the wire contract with the sheets.
pub const NUMERIC_FIELDS: [NumericFieldSpec; 34] = [
    benefit("earning", "Earnings"),
    benefit("iliving", "Living subsidy"),
    benefit("inutrition", "Nutrition/food-related subsidy"),
    benefit("iCCare", "Childcare related subsidy"),
    benefit("iCBenefit", "Child benefits"),
    benefit("ifertility", "Fertility benefits"),
    benefit("ieducation", "Education related subsidy"),
    benefit("ihousing", "Housing related subsidy"),
    benefit("imedical", "Medical related subsidy"),
    benefit("iutility", "Utility subsidy"),
    benefit("itransport", "Transportation subsidy"),
    benefit("isocsec", "Social security subsidy"),
    benefit("itax", "Tax subsidy (e.g., EITC)"),
    benefit("iwork", "Work related subsidy"),
    benefit("iunempinsurance", "Unemployment insurance payment"),
    benefit("iunempsub", "Unemployment subsidy"),
    benefit("iother", "Other benefits"),
    NumericFieldSpec {
        key: "totalbenefit",
        label: "Total Benefits",
        excluded: true,
        class: SignClass::Unclassified,
    },
    cost("incometax", "Income Tax"),
    cost("localtax", "Local Tax"),
    cost("pension", "Pension"),
    cost("healthinsurance", "Health insurance"),
    cost("unempinsurance", "Unemployment insurance"),
    cost("othercontribution", "Other contributions"),
    cost("ccarecost", "Childcare cost"),
    cost("schlcosts", "School cost"),
    cost("healthcost", "Healthcare cost"),
    cost("rent", "Housing rent"),
    cost("utilitycost", "Utility cost"),
    cost("foodcost", "Food & Groceries"),
    cost("telecost", "Telecommunications cost"),
    // Kept visible but outside both sign classes; the source data already
    // carries it with the intended sign.
    NumericFieldSpec {
        key: "transportcost",
        label: "Transportation cost",
        excluded: false,
        class: SignClass::Unclassified,
    },
    NumericFieldSpec {
        key: "othercosts",
        label: "Other costs",
        excluded: true,
        class: SignClass::Cost,
    },
    NumericFieldSpec {
        key: "totalexpense",
        label: "Total Expenses",
        excluded: true,
        class: SignClass::Unclassified,
    },
];

/// Spec for `key`, if it is one of the 34 known numeric columns.
pub fn field_spec(key: &str) -> Option<&'static NumericFieldSpec> {
    NUMERIC_FIELDS.iter().find(|f| f.key == key)
}

// Code -> label tables. Loaded once, immutable thereafter; unknown codes
// fall back to the raw code at the call site.
// ---

static COUNTRY_NAME: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("AUS", "Australia"),
        ("CAN", "Canada"),
        ("CHN", "China"),
        ("DEU", "Germany"),
        ("DNK", "Denmark"),
        ("ESP", "Spain"),
        ("FIN", "Finland"),
        ("FRA", "France"),
        ("GBR", "United Kingdom"),
        ("ITA", "Italy"),
        ("JPN", "Japan"),
        ("KOR", "South Korea"),
        ("NLD", "Netherlands"),
        ("NOR", "Norway"),
        ("SWE", "Sweden"),
        ("TWN", "Taiwan"),
        ("USA", "United States"),
    ])
});

static INCOME_CASE: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (0, "No income"),
        (1, "Minimum wage"),
        (2, "Average wage"),
        (3, "Twice average wage"),
    ])
});

static FAMILY_TYPE: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (0, "Single adult"),
        (1, "Couple"),
        (2, "Single parent with one child"),
        (3, "Couple with one child"),
        (4, "Couple with two children"),
    ])
});

static INCOME_GENDER: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    HashMap::from([(0, "Female earner"), (1, "Male earner"), (2, "Both earners")])
});

static CASE: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (0, "Base case"),
        (1, "Standard case"),
        (2, "Unemployment case"),
        (3, "Childbirth case"),
        (4, "Retirement case"),
    ])
});

pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRY_NAME.get(code).copied()
}

pub fn income_case_label(code: u32) -> Option<&'static str> {
    INCOME_CASE.get(&code).copied()
}

pub fn family_type_label(code: u32) -> Option<&'static str> {
    FAMILY_TYPE.get(&code).copied()
}

pub fn income_gender_label(code: u32) -> Option<&'static str> {
    INCOME_GENDER.get(&code).copied()
}

pub fn case_label(code: u32) -> Option<&'static str> {
    CASE.get(&code).copied()
}
