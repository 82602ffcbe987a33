//! Near-miss suggestions for canonical fields that failed to resolve.
//!
//! Suggestions are diagnostics only: they are logged for the operator so a
//! misspelled header ("Site Numbr") can be fixed in the export, but they
//! never rename anything. Renames happen exclusively through the exact
//! synonym tables in [`crate::resolver`].

use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;

use enroll_model::schema::SynonymMap;

/// Minimum similarity for a header to be reported as a near miss.
pub const SUGGESTION_THRESHOLD: f64 = 0.85;

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub canonical: String,
    pub header: String,
    pub score: f64,
}

/// Normalizes text for comparison by lowercasing and collapsing separators.
fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scores every unresolved canonical field against the headers left over
/// after resolution, keeping the best match per canonical when it clears the
/// threshold.
pub fn suggest_unmatched(
    unmatched: &[String],
    headers: &[String],
    synonym_map: SynonymMap,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    for canonical in unmatched {
        let Some((_, synonyms)) = synonym_map
            .iter()
            .find(|(name, _)| *name == canonical.as_str())
        else {
            continue;
        };
        let mut targets: Vec<String> = vec![normalize_text(canonical)];
        targets.extend(synonyms.iter().map(|synonym| normalize_text(synonym)));

        let mut best: Option<Suggestion> = None;
        for header in headers {
            let normalized = normalize_text(header);
            let score = targets
                .iter()
                .map(|target| jaro_similarity(normalized.chars(), target.chars()))
                .fold(0.0_f64, f64::max);
            if score < SUGGESTION_THRESHOLD {
                continue;
            }
            if best.as_ref().is_none_or(|current| score > current.score) {
                best = Some(Suggestion {
                    canonical: canonical.clone(),
                    header: header.clone(),
                    score,
                });
            }
        }
        if let Some(suggestion) = best {
            suggestions.push(suggestion);
        }
    }
    suggestions
}
