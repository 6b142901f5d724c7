use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Recipe;

/// Load the recipe catalog from a JSON file.
///
/// Deduplicates by lowercase id (last occurrence wins) while preserving
/// catalog order.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;
    Ok(dedup_by_key(recipes))
}

/// Save the recipe catalog to a JSON file, deduplicated by lowercase id.
pub fn save_recipes<P: AsRef<Path>>(path: P, recipes: &[Recipe]) -> Result<()> {
    let deduped = dedup_by_key(recipes.to_vec());
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

fn dedup_by_key(recipes: Vec<Recipe>) -> Vec<Recipe> {
    let mut order: Vec<Recipe> = Vec::with_capacity(recipes.len());
    let mut seen: HashMap<String, usize> = HashMap::new();

    for recipe in recipes {
        match seen.get(&recipe.key()) {
            Some(&index) => order[index] = recipe,
            None => {
                seen.insert(recipe.key(), order.len());
                order.push(recipe);
            }
        }
    }

    order
}
