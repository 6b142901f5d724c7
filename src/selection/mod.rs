mod filter;
mod sequencer;

pub use filter::{RecipeFilter, SortKey, normalized_search_key, sort_recipes};
pub use sequencer::RandomSelectionSequencer;
