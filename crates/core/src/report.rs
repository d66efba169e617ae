//! Report-mode selection over the composed fingerprint.
//!
//! Each selective mode carries a feature table listing the field indices
//! it emits, together with a marker describing the field's value shape.
//! Selection is a post-processing step: unlisted fields are blanked, the
//! 14-field arity is preserved, and `Full` passes the vector through
//! untouched.

use httpfinger_common::ReportMode;

/// Number of fields in a composed fingerprint.
pub const FIELD_COUNT: usize = 14;

/// Value shape of a fingerprint field, as recorded in the feature tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Free-form text (codes, signatures, extension).
    Text,
    /// Whole number (directory count, query count, version).
    Integer,
    /// Fractional value (magnitudes, entropy).
    Fraction,
}

use FieldShape::{Fraction, Integer, Text};

const CORE_FIELDS: &[(usize, FieldShape)] = &[
    (1, Text),
    (2, Integer),
    (3, Text),
    (6, Fraction),
    (9, Text),
    (10, Text),
    (13, Fraction),
];

const ALL_FIELDS: &[(usize, FieldShape)] = &[
    (0, Integer),
    (1, Text),
    (2, Integer),
    (3, Text),
    (4, Integer),
    (5, Text),
    (6, Integer),
    (7, Text),
    (8, Text),
    (9, Text),
    (10, Text),
    (11, Text),
    (12, Integer),
    (13, Integer),
];

const STANDARD_FIELDS: &[(usize, FieldShape)] = &[
    (0, Integer),
    (1, Text),
    (2, Integer),
    (3, Text),
    (6, Fraction),
    (7, Text),
    (8, Text),
    (9, Text),
    (10, Text),
    (11, Text),
    (12, Integer),
    (13, Fraction),
];

const MINIMAL_FIELDS: &[(usize, FieldShape)] = &[
    (0, Integer),
    (2, Integer),
    (3, Text),
    (6, Integer),
    (9, Text),
];

const FUZZY_FIELDS: &[(usize, FieldShape)] = &[
    (0, Fraction),
    (1, Text),
    (2, Fraction),
    (3, Text),
    (4, Fraction),
    (6, Fraction),
    (7, Text),
    (8, Text),
    (9, Text),
    (10, Text),
    (11, Text),
    (12, Fraction),
    (13, Fraction),
];

fn feature_table(mode: ReportMode) -> Option<&'static [(usize, FieldShape)]> {
    match mode {
        ReportMode::Full => None,
        ReportMode::Core => Some(CORE_FIELDS),
        ReportMode::All => Some(ALL_FIELDS),
        ReportMode::Standard => Some(STANDARD_FIELDS),
        ReportMode::Minimal => Some(MINIMAL_FIELDS),
        ReportMode::Fuzzy => Some(FUZZY_FIELDS),
    }
}

/// Apply a report mode to a composed 14-field fingerprint.
pub fn apply_report_mode(fingerprint: &str, mode: ReportMode) -> String {
    let Some(table) = feature_table(mode) else {
        return fingerprint.to_string();
    };
    let fields: Vec<&str> = fingerprint.split('|').collect();
    let selected: Vec<&str> = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            if table.iter().any(|(kept, _)| *kept == index) {
                *field
            } else {
                ""
            }
        })
        .collect();
    selected.join("|")
}
