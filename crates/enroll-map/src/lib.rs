pub mod resolver;
pub mod suggest;

pub use resolver::{
    Resolution, find_column_containing, rename_plan, resolve_synonym, unmatched_canonicals,
};
pub use suggest::{SUGGESTION_THRESHOLD, Suggestion, suggest_unmatched};
