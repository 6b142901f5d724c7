use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{ChefError, Result};
use crate::interface::render::default_label;
use crate::measure::MeasurementSystem;
use crate::models::Recipe;

/// Prompt for the serving count to scale the grocery list to.
pub fn prompt_servings() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many servings are you cooking?")
        .default("4".to_string())
        .interact_text()?;

    let servings: u32 = input
        .parse()
        .map_err(|_| ChefError::InvalidInput("Invalid number".to_string()))?;

    if servings == 0 {
        return Err(ChefError::InvalidInput(
            "Servings must be at least 1".to_string(),
        ));
    }

    Ok(servings)
}

/// Prompt for the measurement system to render amounts in.
pub fn prompt_measurement_system() -> Result<MeasurementSystem> {
    let systems = MeasurementSystem::all();
    let options: Vec<String> = systems
        .iter()
        .map(|s| default_label(s.label_key()))
        .collect();

    let selection = Select::new()
        .with_prompt("Which measurement system?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(systems[selection])
}

/// Prompt for a recipe by name with fuzzy matching.
///
/// Exact id matches win; otherwise candidates above a 0.7 Jaro-Winkler score
/// are offered, with a select when several come close. Returns the recipe id.
pub fn prompt_recipe(recipes: &[&Recipe]) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("Which recipe? (press Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Err(ChefError::RecipeNotFound("(none entered)".to_string()));
        }

        let exact = recipes
            .iter()
            .find(|r| r.id.eq_ignore_ascii_case(input));
        if let Some(recipe) = exact {
            return Ok(recipe.id.clone());
        }

        let mut candidates: Vec<(&Recipe, f64)> = recipes
            .iter()
            .map(|r| {
                let name = default_label(&r.name_key);
                let score = jaro_winkler(&r.id.to_lowercase(), &input.to_lowercase())
                    .max(jaro_winkler(&name.to_lowercase(), &input.to_lowercase()));
                (*r, score)
            })
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching recipe found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let recipe = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", default_label(&recipe.name_key)))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(recipe.id.clone());
            }
            continue;
        }

        let options: Vec<String> = candidates
            .iter()
            .take(5)
            .map(|(r, _)| default_label(&r.name_key))
            .collect();

        let mut selection_options = options.clone();
        selection_options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&selection_options)
            .default(0)
            .interact()?;

        if selection < options.len() {
            return Ok(candidates[selection].0.id.clone());
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
