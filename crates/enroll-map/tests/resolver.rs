//! Tests for synonym and substring column resolution.

use enroll_map::{
    Resolution, find_column_containing, rename_plan, resolve_synonym, unmatched_canonicals,
};
use enroll_model::schema::SynonymMap;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

const MAP: SynonymMap = &[
    ("Site ID", &["SiteID", "Site Number", "Site"]),
    ("Site Name", &["Site", "Center Name", "Center"]),
];

#[test]
fn exact_column_resolves_to_itself() {
    let headers = headers(&["Site ID", "Country"]);
    assert_eq!(
        resolve_synonym(&headers, "Site ID", &["SiteID", "Site Number"]),
        Resolution::Exact
    );
}

#[test]
fn exact_column_produces_no_rename() {
    let headers = headers(&["Site ID", "Site Name"]);
    assert!(rename_plan(&headers, MAP).is_empty());
}

#[test]
fn synonym_priority_beats_table_order() {
    // "Site Number" comes later in the table but earlier in the synonym
    // list, so it wins over "Site".
    let headers = headers(&["Site", "Site Number"]);
    assert_eq!(
        resolve_synonym(&headers, "Site ID", &["SiteID", "Site Number", "Site"]),
        Resolution::Synonym("Site Number".to_string())
    );
}

#[test]
fn missing_column_is_unmatched_not_an_error() {
    let headers = headers(&["Country"]);
    assert_eq!(
        resolve_synonym(&headers, "Site ID", &["SiteID", "Site Number"]),
        Resolution::Unmatched
    );
}

#[test]
fn plan_consumes_each_source_once() {
    // "Site" could satisfy both canonicals; only the first (Site ID) gets it.
    let headers = headers(&["Site", "Country"]);
    let plan = rename_plan(&headers, MAP);
    assert_eq!(
        plan,
        vec![("Site".to_string(), "Site ID".to_string())]
    );
    let unmatched = unmatched_canonicals(&headers, MAP, &plan);
    assert_eq!(unmatched, vec!["Site Name".to_string()]);
}

#[test]
fn plan_renames_independent_synonyms() {
    let headers = headers(&["SiteID", "Center Name"]);
    let plan = rename_plan(&headers, MAP);
    assert_eq!(
        plan,
        vec![
            ("SiteID".to_string(), "Site ID".to_string()),
            ("Center Name".to_string(), "Site Name".to_string()),
        ]
    );
}

#[test]
fn substring_probe_is_case_insensitive_and_table_ordered() {
    let headers = headers(&["Region", "COSL Name", "Backup COSL"]);
    assert_eq!(
        find_column_containing(&headers, &["cosl"]),
        Some("COSL Name".to_string())
    );
}

#[test]
fn substring_probe_tries_all_needles() {
    let headers = headers(&["Principal Investigator"]);
    assert_eq!(
        find_column_containing(&headers, &["pi", "investigator"]),
        Some("Principal Investigator".to_string())
    );
    assert_eq!(find_column_containing(&headers, &["cosl"]), None);
}
