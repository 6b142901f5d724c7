use serde::{Deserialize, Serialize};

use crate::models::Ingredient;

/// Category used for filtering and for the random-selection buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeCategory {
    Breakfast,
    Snack,
    Starter,
    Main,
    Dessert,
}

impl RecipeCategory {
    /// The categories offered as filter chips and drawn from by the
    /// random selection (breakfast and snack are list-only).
    pub fn filter_categories() -> [RecipeCategory; 3] {
        [
            RecipeCategory::Starter,
            RecipeCategory::Main,
            RecipeCategory::Dessert,
        ]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            RecipeCategory::Breakfast => "category.breakfast",
            RecipeCategory::Snack => "category.snack",
            RecipeCategory::Starter => "category.starter",
            RecipeCategory::Main => "category.main",
            RecipeCategory::Dessert => "category.dessert",
        }
    }
}

impl std::str::FromStr for RecipeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(RecipeCategory::Breakfast),
            "snack" => Ok(RecipeCategory::Snack),
            "starter" => Ok(RecipeCategory::Starter),
            "main" => Ok(RecipeCategory::Main),
            "dessert" => Ok(RecipeCategory::Dessert),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

fn default_base_servings() -> u32 {
    4
}

/// A recipe record from the bundled catalog.
///
/// Textual fields are localization keys; resolving them to display strings is
/// the host's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,

    /// ISO 3166-1 alpha-2, e.g. "IT".
    pub country_code: String,

    pub name_key: String,

    pub category: RecipeCategory,

    #[serde(default)]
    pub approximate_minutes: u32,

    #[serde(default)]
    pub total_minutes: u32,

    #[serde(default)]
    pub calories: u32,

    /// Serving count the ingredient gram quantities are authored against.
    #[serde(default = "default_base_servings")]
    pub base_servings: u32,

    #[serde(default)]
    pub favorite: bool,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Canonical key for lookups (lowercase id).
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Recipe {}

impl std::hash::Hash for Recipe {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
