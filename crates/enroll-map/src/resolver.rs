//! Column resolution against canonical synonym tables.
//!
//! Resolution is purely lexical: a canonical label resolves to itself when
//! present, otherwise to the first synonym (in priority order) found among
//! the table's headers. A header consumed for one canonical field is never
//! reused for another.

use std::collections::BTreeSet;

use tracing::debug;

use enroll_model::schema::SynonymMap;

/// Outcome of resolving one canonical column against a header set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The canonical label is already a header; nothing to do.
    Exact,
    /// The named header should be renamed to the canonical label.
    Synonym(String),
    /// No header matched; the canonical column stays absent.
    Unmatched,
}

/// Resolves a single canonical label. Synonym list order is priority order;
/// table column order never matters.
pub fn resolve_synonym(headers: &[String], canonical: &str, synonyms: &[&str]) -> Resolution {
    if headers.iter().any(|header| header == canonical) {
        return Resolution::Exact;
    }
    for synonym in synonyms {
        if headers.iter().any(|header| header == synonym) {
            return Resolution::Synonym((*synonym).to_string());
        }
    }
    Resolution::Unmatched
}

/// Builds the (source, canonical) rename plan for a whole synonym table.
///
/// Canonical fields are visited in table-schema order and each source header
/// is consumed at most once, so a header like "Site" cannot stand in for two
/// canonical fields at the same time.
pub fn rename_plan(headers: &[String], synonym_map: SynonymMap) -> Vec<(String, String)> {
    let mut present: BTreeSet<String> = headers.iter().cloned().collect();
    let mut plan = Vec::new();
    for (canonical, synonyms) in synonym_map {
        if present.contains(*canonical) {
            continue;
        }
        for synonym in *synonyms {
            if present.remove(*synonym) {
                present.insert((*canonical).to_string());
                debug!(source = synonym, target = canonical, "resolved column synonym");
                plan.push(((*synonym).to_string(), (*canonical).to_string()));
                break;
            }
        }
    }
    plan
}

/// Canonical fields that neither exist nor resolved through the plan.
pub fn unmatched_canonicals(
    headers: &[String],
    synonym_map: SynonymMap,
    plan: &[(String, String)],
) -> Vec<String> {
    synonym_map
        .iter()
        .map(|(canonical, _)| *canonical)
        .filter(|canonical| {
            !headers.iter().any(|header| header == canonical)
                && !plan.iter().any(|(_, target)| target == canonical)
        })
        .map(str::to_string)
        .collect()
}

/// Finds the first header (in table order) whose lower-cased label contains
/// any of the needle substrings. Used for free-text columns such as the COSL
/// or investigator assignment.
pub fn find_column_containing(headers: &[String], needles: &[&str]) -> Option<String> {
    headers
        .iter()
        .find(|header| {
            let lower = header.to_lowercase();
            needles.iter().any(|needle| lower.contains(needle))
        })
        .cloned()
}
