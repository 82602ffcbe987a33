//! Canonical column schemas for the dashboard's logical tables.
//!
//! Spreadsheet exports label the same field inconsistently from sponsor to
//! sponsor ("Site ID", "SiteID", "Site Number", ...). Each canonical label
//! carries an ordered synonym list that is checked at table-load time; list
//! order is priority order, independent of the column order in the source
//! table. A canonical field with no match simply stays absent from the
//! processed table.

// Enrollment summary columns.
pub const SITE_ID: &str = "Site ID";
pub const SITE_NAME: &str = "Site Name";
pub const COUNTRY: &str = "Country";
pub const SCREENED: &str = "Screened";
pub const SCREEN_FAILED: &str = "Screen Failed";
pub const RANDOMIZED: &str = "Randomized";

// Monthly summary columns.
pub const STATUS: &str = "Status";
pub const SUBJECT_STATUS: &str = "Subject Status";
pub const FIRST_SCREENING: &str = "1st Screening";
pub const FIRST_ENROLLMENT: &str = "1st Enrollment";
pub const TOTAL: &str = "Total";

// Site roster columns.
pub const SITE_NUMBER: &str = "Site Number";
pub const SITE_STATUS: &str = "Site Status";
pub const INVESTIGATOR: &str = "Investigator";
pub const ACTIVATION_DATE: &str = "Date of Activation";
pub const FIRST_SCREENING_DATE: &str = "Date of First Screening";
pub const FIRST_RANDOMIZATION_DATE: &str = "Date of First Randomization";

// Derived columns.
pub const ASSIGNED_COSL: &str = "Assigned COSL";
pub const DAYS_TO_FIRST_SCREENING: &str = "Days to First Screening";

// Subject/site status literals as they appear in the exports.
pub const STATUS_ACTIVE: &str = "Active";
pub const STATUS_RANDOMIZED: &str = "Randomized";
pub const STATUS_SCREEN_FAILED: &str = "Screen Failed";
pub const STATUS_TOTAL: &str = "Total";

/// Ordered synonym table: canonical label, then accepted alternates in
/// priority order.
pub type SynonymMap = &'static [(&'static str, &'static [&'static str])];

const ENROLLMENT_SYNONYMS: SynonymMap = &[
    (SITE_ID, &["SiteID", "Site Number", "Site"]),
    (SITE_NAME, &["Site", "Center Name", "Center"]),
    (COUNTRY, &["Region", "Nation", "Location"]),
    (SCREENED, &["Total Screened", "Screening", "Screenings"]),
    (SCREEN_FAILED, &["Screen Fails", "Failed", "Failed Screening"]),
    (RANDOMIZED, &["Enrolled", "Randomizations", "Total Randomized"]),
];

const MONTHLY_SYNONYMS: SynonymMap = &[
    (SITE_ID, &["SiteID", "Site Number", "Site"]),
    (SITE_NAME, &["Site", "Center Name", "Center"]),
    (STATUS, &["Site Status", "Active Status"]),
    (COUNTRY, &["Region", "Nation", "Location"]),
    (SUBJECT_STATUS, &["Participant Status", "Patient Status"]),
];

const SITE_SYNONYMS: SynonymMap = &[
    (SITE_NUMBER, &["Site ID", "SiteID", "Site"]),
    (SITE_NAME, &["Center Name", "Center"]),
    (COUNTRY, &["Region", "Nation", "Location"]),
    (SITE_STATUS, &["Status", "Active Status"]),
    (INVESTIGATOR, &["PI", "PI Name", "Principal Investigator"]),
    (
        ACTIVATION_DATE,
        &[
            "Site Activated Date",
            "Activation Date",
            "Activated On",
            "Date Activated",
        ],
    ),
    (
        FIRST_SCREENING_DATE,
        &[
            "First Subject Screened Date",
            "1st Screening",
            "First Screening Date",
        ],
    ),
    (
        FIRST_RANDOMIZATION_DATE,
        &[
            "First Subject Enrolled Date",
            "1st Enrollment",
            "First Randomization Date",
        ],
    ),
];

const ENROLLMENT_NUMERIC: &[&str] = &[SCREENED, SCREEN_FAILED, RANDOMIZED];
const MONTHLY_NUMERIC: &[&str] = &[TOTAL];
const MONTHLY_DATES: &[&str] = &[FIRST_SCREENING, FIRST_ENROLLMENT];
const SITE_DATES: &[&str] = &[
    ACTIVATION_DATE,
    FIRST_SCREENING_DATE,
    FIRST_RANDOMIZATION_DATE,
];

/// Monthly-summary headers that are never month columns, no matter how they
/// parse.
pub const NON_MONTH_COLUMNS: &[&str] = &[
    SITE_ID,
    SITE_NAME,
    "PI First Name",
    "PI Last Name",
    STATUS,
    COUNTRY,
    FIRST_SCREENING,
    FIRST_ENROLLMENT,
    SUBJECT_STATUS,
    TOTAL,
];

/// Accepted formats for month-column labels, tried in order ("Mar-2025",
/// "March-2025", "03-2025").
pub const MONTH_LABEL_FORMATS: &[&str] = &["%b-%Y", "%B-%Y", "%m-%Y"];

/// Accepted formats for date cells, tried in order. ISO first so that
/// re-processing an already-cleaned table is a no-op.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d-%b-%Y",
    "%d-%B-%Y",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%Y/%m/%d",
];

/// Fallback supervisor pool used when the roster carries neither a COSL nor
/// an investigator column. Fixed order keeps the round-robin assignment
/// deterministic.
pub const COSL_NAME_POOL: &[&str] = &[
    "Evelina Pogoriler",
    "Jayden Cho",
    "Janice Graboso",
    "Farah Ridore",
    "Malini Shankar",
];

/// The three logical tables the dashboard ingests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Enrollment,
    Monthly,
    Site,
}

impl TableKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Enrollment => "enrollment summary",
            Self::Monthly => "monthly summary",
            Self::Site => "site roster",
        }
    }

    /// Canonical-to-synonym table for this kind, in resolution order.
    pub fn synonym_map(self) -> SynonymMap {
        match self {
            Self::Enrollment => ENROLLMENT_SYNONYMS,
            Self::Monthly => MONTHLY_SYNONYMS,
            Self::Site => SITE_SYNONYMS,
        }
    }

    /// Columns coerced to numeric (unparseable values become zero).
    pub fn numeric_columns(self) -> &'static [&'static str] {
        match self {
            Self::Enrollment => ENROLLMENT_NUMERIC,
            Self::Monthly => MONTHLY_NUMERIC,
            Self::Site => &[],
        }
    }

    /// Columns coerced to ISO-8601 dates (unparseable values become empty).
    pub fn date_columns(self) -> &'static [&'static str] {
        match self {
            Self::Enrollment => &[],
            Self::Monthly => MONTHLY_DATES,
            Self::Site => SITE_DATES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonym_lists_never_contain_their_canonical() {
        for kind in [TableKind::Enrollment, TableKind::Monthly, TableKind::Site] {
            for (canonical, synonyms) in kind.synonym_map() {
                assert!(
                    !synonyms.contains(canonical),
                    "{canonical} lists itself as a synonym"
                );
            }
        }
    }

    #[test]
    fn coerced_columns_are_canonical() {
        for kind in [TableKind::Enrollment, TableKind::Monthly, TableKind::Site] {
            let canonicals: Vec<&str> = kind.synonym_map().iter().map(|(name, _)| *name).collect();
            for column in kind.numeric_columns() {
                assert!(
                    canonicals.contains(column) || *column == TOTAL,
                    "{column} is not a canonical column"
                );
            }
        }
    }
}
