//! CSV import pipeline: converts an authoring pair of recipes.csv and
//! groceries.csv into catalog records, joining grocery rows onto recipes by
//! `recipe_id`.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ChefError, Result};
use crate::models::{DisplayMode, GroceryAisle, Ingredient, Recipe, RecipeCategory};

#[derive(Debug, Deserialize)]
struct RecipeRow {
    recipe_id: String,
    country_code: String,
    category: String,
    #[serde(default)]
    approx_minutes: u32,
    #[serde(default)]
    total_minutes: u32,
    #[serde(default)]
    calories: u32,
    #[serde(default)]
    base_servings: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GroceryRow {
    recipe_id: String,
    ingredient_id: String,
    #[serde(default)]
    aisle: String,
    amount_grams: f64,
    #[serde(default)]
    use_order: u32,
    #[serde(default)]
    is_optional: Option<bool>,
    #[serde(default)]
    display_mode: Option<String>,
    #[serde(default)]
    grams_per_ml: Option<f64>,
    #[serde(default)]
    grams_per_tsp: Option<f64>,
    #[serde(default)]
    grams_per_count: Option<f64>,
    #[serde(default)]
    allow_cup: Option<bool>,
    #[serde(default)]
    amount_custom_value: Option<String>,
    #[serde(default)]
    amount_custom_label: Option<String>,
}

/// Build a catalog from the two authoring CSVs.
///
/// Localization keys are derived from the ids the same way the app data
/// expects them: `recipe.<id>.name` and `ingredient.<id>`. A grocery row
/// referencing an unknown recipe id is an error.
pub fn import_catalog<P: AsRef<Path>>(recipes_csv: P, groceries_csv: P) -> Result<Vec<Recipe>> {
    let mut recipes: Vec<Recipe> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let mut reader = csv::Reader::from_path(recipes_csv)?;
    for row in reader.deserialize() {
        let row: RecipeRow = row?;
        let id = row.recipe_id.trim().to_string();
        if id.is_empty() {
            continue;
        }

        let category: RecipeCategory = row
            .category
            .parse()
            .map_err(ChefError::InvalidInput)?;

        let recipe = Recipe {
            name_key: format!("recipe.{}.name", id),
            country_code: row.country_code.trim().to_uppercase(),
            category,
            approximate_minutes: row.approx_minutes,
            total_minutes: row.total_minutes,
            calories: row.calories,
            base_servings: row.base_servings.unwrap_or(4),
            favorite: false,
            ingredients: Vec::new(),
            id: id.clone(),
        };

        index.insert(id.to_lowercase(), recipes.len());
        recipes.push(recipe);
    }

    let mut reader = csv::Reader::from_path(groceries_csv)?;
    for row in reader.deserialize() {
        let row: GroceryRow = row?;
        let recipe_id = row.recipe_id.trim().to_lowercase();
        if recipe_id.is_empty() {
            continue;
        }

        let position = *index.get(&recipe_id).ok_or_else(|| {
            ChefError::InvalidInput(format!("Unknown recipe_id in groceries: {}", row.recipe_id))
        })?;

        let ingredient_id = row.ingredient_id.trim().to_string();
        if ingredient_id.is_empty() {
            continue;
        }

        let display_mode = match row.display_mode.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(mode) => Some(
                mode.parse::<DisplayMode>()
                    .map_err(ChefError::InvalidInput)?,
            ),
        };

        let custom_value = row
            .amount_custom_value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        let has_custom_label = row
            .amount_custom_label
            .as_deref()
            .is_some_and(|l| !l.trim().is_empty());
        let custom_label_key =
            has_custom_label.then(|| format!("ingredient.{}.amount.custom", ingredient_id));

        let aisle: GroceryAisle = row.aisle.parse().unwrap_or_default();

        recipes[position].ingredients.push(Ingredient {
            name_key: format!("ingredient.{}", ingredient_id),
            grams: row.amount_grams,
            is_optional: row.is_optional.unwrap_or(false),
            aisle,
            use_order: row.use_order,
            display_mode,
            grams_per_ml: row.grams_per_ml,
            grams_per_tsp: row.grams_per_tsp,
            grams_per_count: row.grams_per_count,
            allow_cup: row.allow_cup,
            custom_amount_value: custom_value,
            custom_amount_label_key: custom_label_key,
            id: ingredient_id,
        });
    }

    Ok(recipes)
}
