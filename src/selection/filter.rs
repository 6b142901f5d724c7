use std::collections::HashSet;

use crate::models::{Recipe, RecipeCategory};

/// Sort column for the recipe list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Country,
    Name,
    TotalTime,
    PrepTime,
    Calories,
    Ingredients,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "country" => Ok(SortKey::Country),
            "name" => Ok(SortKey::Name),
            "time" | "totaltime" | "total-time" => Ok(SortKey::TotalTime),
            "prep" | "preptime" | "prep-time" => Ok(SortKey::PrepTime),
            "calories" => Ok(SortKey::Calories),
            "ingredients" => Ok(SortKey::Ingredients),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// Lowercased, diacritics-folded, space-stripped search key so
/// "Bolo Gnese" matches "bolognese".
pub fn normalized_search_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(fold_char)
        .collect()
}

/// Fold common Latin diacritics to their base letter, lowercased.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'ç' | 'Ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ñ' | 'Ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        'ý' | 'ÿ' | 'Ý' => 'y',
        other => other,
    };
    folded.to_lowercase()
}

/// Filter and sort settings for the recipe list, mirrored by the sequencer's
/// candidate pool: any change here invalidates an active random selection.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub search_text: String,
    pub selected_categories: HashSet<RecipeCategory>,
    pub selected_country_code: Option<String>,
    pub favorites_only: bool,
}

impl RecipeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a category chip. Selecting every filterable category is the
    /// same as selecting none, so the set collapses to empty.
    pub fn toggle_category(&mut self, category: RecipeCategory) {
        if !self.selected_categories.remove(&category) {
            self.selected_categories.insert(category);
        }

        let all: HashSet<RecipeCategory> =
            RecipeCategory::filter_categories().into_iter().collect();
        if self.selected_categories == all {
            self.selected_categories.clear();
        }
    }

    /// The single active category, when exactly one chip is selected.
    pub fn selected_category(&self) -> Option<RecipeCategory> {
        if self.selected_categories.len() == 1 {
            self.selected_categories.iter().next().copied()
        } else {
            None
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        if self.favorites_only && !recipe.favorite {
            return false;
        }

        if let Some(country) = &self.selected_country_code {
            if !recipe.country_code.eq_ignore_ascii_case(country) {
                return false;
            }
        }

        if !self.selected_categories.is_empty()
            && !self.selected_categories.contains(&recipe.category)
        {
            return false;
        }

        if !self.search_text.trim().is_empty() {
            let needle = normalized_search_key(&self.search_text);
            let name = normalized_search_key(&recipe.name_key);
            let country = normalized_search_key(&recipe.country_code);
            if !name.contains(&needle) && !country.contains(&needle) {
                return false;
            }
        }

        true
    }

    pub fn filtered<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Sort recipes in place by the given column.
pub fn sort_recipes(recipes: &mut Vec<&Recipe>, key: SortKey, ascending: bool) {
    recipes.sort_by(|a, b| {
        let ord = match key {
            SortKey::Country => a.country_code.cmp(&b.country_code),
            SortKey::Name => a.name_key.cmp(&b.name_key),
            SortKey::TotalTime => a.total_minutes.cmp(&b.total_minutes),
            SortKey::PrepTime => a.approximate_minutes.cmp(&b.approximate_minutes),
            SortKey::Calories => a.calories.cmp(&b.calories),
            SortKey::Ingredients => a.ingredients.len().cmp(&b.ingredients.len()),
        };
        if ascending { ord } else { ord.reverse() }
    });
}
