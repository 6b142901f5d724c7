use std::collections::HashMap;

use crate::models::{Recipe, RecipeCategory};

/// Ping-pong cursor over a candidate list: advances forward and reflects at
/// both ends instead of wrapping, so three candidates are visited
/// 0, 1, 2, 1, 0, 1, 2, …
#[derive(Debug, Clone, Default)]
struct BounceCursor {
    position: usize,
    backward: bool,
}

impl BounceCursor {
    /// Yield the current index for a pool of `len` candidates, then advance.
    /// The position is re-clamped first in case the pool shrank.
    fn next(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.position = self.position.min(len - 1);
        let current = self.position;

        if self.backward {
            if self.position == 0 {
                self.backward = false;
                self.position = 1.min(len - 1);
            } else {
                self.position -= 1;
            }
        } else if self.position + 1 >= len {
            self.backward = true;
            self.position = self.position.saturating_sub(1);
        } else {
            self.position += 1;
        }

        current
    }
}

/// Owns the "random mode" state of the recipe list: one pseudo-randomly
/// selected recipe per filterable category, advanced with a deterministic
/// bounce so repeated rolls feel varied without repeating the same pick.
///
/// Single-writer by design; callers serialize access.
#[derive(Debug, Default)]
pub struct RandomSelectionSequencer {
    cursors: HashMap<RecipeCategory, BounceCursor>,
    random_selection_ids: Vec<String>,
    is_random_mode_active: bool,
}

impl RandomSelectionSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn random_selection_ids(&self) -> &[String] {
        &self.random_selection_ids
    }

    pub fn is_random_mode_active(&self) -> bool {
        self.is_random_mode_active
    }

    /// Pick a fresh selection from `candidates` and activate random mode.
    ///
    /// With a category filter active, one recipe is drawn from that category.
    /// Without one, each of the filterable categories (starter, main,
    /// dessert) contributes one recipe; empty buckets are omitted.
    pub fn apply_random_selection(
        &mut self,
        candidates: &[&Recipe],
        selected_category: Option<RecipeCategory>,
    ) {
        let mut ids = Vec::new();

        for category in Self::buckets(selected_category) {
            let eligible = Self::eligible(candidates, category);
            if eligible.is_empty() {
                continue;
            }
            let cursor = self.cursors.entry(category).or_default();
            let index = cursor.next(eligible.len());
            ids.push(eligible[index].id.clone());
        }

        self.random_selection_ids = ids;
        self.is_random_mode_active = true;
    }

    /// Re-derive the selection against a changed candidate pool.
    ///
    /// Recipes that are still eligible stay selected; buckets whose pick
    /// dropped out of the pool draw a replacement with the normal advancement
    /// rule. Does nothing while random mode is inactive.
    pub fn refresh_random_selection_if_needed(
        &mut self,
        candidates: &[&Recipe],
        selected_category: Option<RecipeCategory>,
    ) {
        if !self.is_random_mode_active {
            return;
        }

        let mut ids = Vec::new();

        for category in Self::buckets(selected_category) {
            let eligible = Self::eligible(candidates, category);
            if eligible.is_empty() {
                continue;
            }

            let kept = self
                .random_selection_ids
                .iter()
                .find(|id| eligible.iter().any(|r| &r.id == *id))
                .cloned();

            match kept {
                Some(id) => ids.push(id),
                None => {
                    let cursor = self.cursors.entry(category).or_default();
                    let index = cursor.next(eligible.len());
                    ids.push(eligible[index].id.clone());
                }
            }
        }

        self.random_selection_ids = ids;
    }

    /// Leave random mode and drop the selection. Cursors are kept, so the
    /// next randomize continues the bounce instead of restarting at the
    /// first candidate.
    pub fn clear_random_selection(&mut self) {
        self.random_selection_ids.clear();
        self.is_random_mode_active = false;
    }

    fn buckets(selected_category: Option<RecipeCategory>) -> Vec<RecipeCategory> {
        match selected_category {
            Some(category) => vec![category],
            None => RecipeCategory::filter_categories().to_vec(),
        }
    }

    fn eligible<'a>(candidates: &[&'a Recipe], category: RecipeCategory) -> Vec<&'a Recipe> {
        candidates
            .iter()
            .copied()
            .filter(|r| r.category == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, category: RecipeCategory) -> Recipe {
        Recipe {
            id: id.to_string(),
            country_code: "IT".to_string(),
            name_key: format!("recipe.{}.name", id),
            category,
            approximate_minutes: 20,
            total_minutes: 20,
            calories: 200,
            base_servings: 4,
            favorite: false,
            ingredients: Vec::new(),
        }
    }

    fn refs(recipes: &[Recipe]) -> Vec<&Recipe> {
        recipes.iter().collect()
    }

    #[test]
    fn test_selection_without_category_returns_starter_main_dessert() {
        let recipes = vec![
            recipe("s1", RecipeCategory::Starter),
            recipe("m1", RecipeCategory::Main),
            recipe("d1", RecipeCategory::Dessert),
        ];
        let mut seq = RandomSelectionSequencer::new();
        seq.apply_random_selection(&refs(&recipes), None);

        assert!(seq.is_random_mode_active());
        let mut ids: Vec<&str> = seq.random_selection_ids().iter().map(String::as_str).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["d1", "m1", "s1"]);
    }

    #[test]
    fn test_empty_buckets_are_omitted() {
        let recipes = vec![recipe("m1", RecipeCategory::Main)];
        let mut seq = RandomSelectionSequencer::new();
        seq.apply_random_selection(&refs(&recipes), None);

        assert_eq!(seq.random_selection_ids(), ["m1".to_string()]);
    }

    #[test]
    fn test_selection_with_category_returns_one_dish() {
        let recipes = vec![
            recipe("m1", RecipeCategory::Main),
            recipe("m2", RecipeCategory::Main),
            recipe("d1", RecipeCategory::Dessert),
        ];
        let mut seq = RandomSelectionSequencer::new();
        seq.apply_random_selection(&refs(&recipes), Some(RecipeCategory::Main));

        assert_eq!(seq.random_selection_ids().len(), 1);
        assert!(["m1", "m2"].contains(&seq.random_selection_ids()[0].as_str()));
    }

    #[test]
    fn test_pseudo_random_bounces_through_sequence() {
        let recipes = vec![
            recipe("m1", RecipeCategory::Main),
            recipe("m2", RecipeCategory::Main),
            recipe("m3", RecipeCategory::Main),
        ];
        let candidates = refs(&recipes);
        let mut seq = RandomSelectionSequencer::new();

        let mut picks = Vec::new();
        for _ in 0..4 {
            seq.apply_random_selection(&candidates, Some(RecipeCategory::Main));
            picks.push(seq.random_selection_ids()[0].clone());
        }

        assert_eq!(picks, vec!["m1", "m2", "m3", "m2"]);
    }

    #[test]
    fn test_buckets_advance_independent_cursors() {
        let recipes = vec![
            recipe("s1", RecipeCategory::Starter),
            recipe("s2", RecipeCategory::Starter),
            recipe("m1", RecipeCategory::Main),
        ];
        let candidates = refs(&recipes);
        let mut seq = RandomSelectionSequencer::new();

        seq.apply_random_selection(&candidates, None);
        assert!(seq.random_selection_ids().contains(&"s1".to_string()));
        seq.apply_random_selection(&candidates, None);
        // Starter bucket advanced to s2 while Main (one candidate) stays m1.
        assert!(seq.random_selection_ids().contains(&"s2".to_string()));
        assert!(seq.random_selection_ids().contains(&"m1".to_string()));
    }

    #[test]
    fn test_refresh_keeps_still_eligible_selection() {
        let recipes = vec![
            recipe("m1", RecipeCategory::Main),
            recipe("m2", RecipeCategory::Main),
        ];
        let mut seq = RandomSelectionSequencer::new();
        seq.apply_random_selection(&refs(&recipes), Some(RecipeCategory::Main));
        assert_eq!(seq.random_selection_ids(), ["m1".to_string()]);

        // m1 survives the pool change, so it stays selected.
        let narrowed = vec![recipe("m1", RecipeCategory::Main)];
        seq.refresh_random_selection_if_needed(&refs(&narrowed), Some(RecipeCategory::Main));
        assert_eq!(seq.random_selection_ids(), ["m1".to_string()]);
    }

    #[test]
    fn test_refresh_replaces_ineligible_selection() {
        let recipes = vec![
            recipe("m1", RecipeCategory::Main),
            recipe("m2", RecipeCategory::Main),
        ];
        let mut seq = RandomSelectionSequencer::new();
        seq.apply_random_selection(&refs(&recipes), Some(RecipeCategory::Main));
        assert_eq!(seq.random_selection_ids(), ["m1".to_string()]);

        let changed = vec![
            recipe("m2", RecipeCategory::Main),
            recipe("m3", RecipeCategory::Main),
        ];
        seq.refresh_random_selection_if_needed(&refs(&changed), Some(RecipeCategory::Main));
        let ids = seq.random_selection_ids();
        assert_eq!(ids.len(), 1);
        assert_ne!(ids[0], "m1");
    }

    #[test]
    fn test_refresh_is_a_no_op_while_inactive() {
        let recipes = vec![recipe("m1", RecipeCategory::Main)];
        let mut seq = RandomSelectionSequencer::new();
        seq.refresh_random_selection_if_needed(&refs(&recipes), None);
        assert!(seq.random_selection_ids().is_empty());
        assert!(!seq.is_random_mode_active());
    }

    #[test]
    fn test_clear_resets_selection_but_preserves_cursor() {
        let recipes = vec![
            recipe("m1", RecipeCategory::Main),
            recipe("m2", RecipeCategory::Main),
            recipe("m3", RecipeCategory::Main),
        ];
        let candidates = refs(&recipes);
        let mut seq = RandomSelectionSequencer::new();

        seq.apply_random_selection(&candidates, Some(RecipeCategory::Main));
        assert_eq!(seq.random_selection_ids(), ["m1".to_string()]);

        seq.clear_random_selection();
        assert!(!seq.is_random_mode_active());
        assert!(seq.random_selection_ids().is_empty());

        // Bounce continues where it left off rather than restarting at m1.
        seq.apply_random_selection(&candidates, Some(RecipeCategory::Main));
        assert_eq!(seq.random_selection_ids(), ["m2".to_string()]);
    }

    #[test]
    fn test_cursor_clamps_when_pool_shrinks() {
        let three = vec![
            recipe("m1", RecipeCategory::Main),
            recipe("m2", RecipeCategory::Main),
            recipe("m3", RecipeCategory::Main),
        ];
        let mut seq = RandomSelectionSequencer::new();
        seq.apply_random_selection(&refs(&three), Some(RecipeCategory::Main));
        seq.apply_random_selection(&refs(&three), Some(RecipeCategory::Main));
        seq.apply_random_selection(&refs(&three), Some(RecipeCategory::Main));

        let one = vec![recipe("m9", RecipeCategory::Main)];
        seq.apply_random_selection(&refs(&one), Some(RecipeCategory::Main));
        assert_eq!(seq.random_selection_ids(), ["m9".to_string()]);
    }
}
