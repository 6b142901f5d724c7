use clap::Parser;
use std::path::Path;

use traditional_chef_rs::catalog::{import_catalog, load_recipes, save_recipes};
use traditional_chef_rs::cli::{Cli, Command};
use traditional_chef_rs::error::{ChefError, Result};
use traditional_chef_rs::interface::{
    GrocerySort, display_grocery_list, display_recipe_list, prompt_measurement_system,
    prompt_recipe, prompt_servings, prompt_yes_no,
};
use traditional_chef_rs::measure::MeasurementSystem;
use traditional_chef_rs::models::{Recipe, RecipeCategory};
use traditional_chef_rs::selection::{
    RandomSelectionSequencer, RecipeFilter, SortKey, sort_recipes,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Grocery {
            recipe,
            servings,
            measurement,
            all_grams,
            sort,
        } => cmd_grocery(&cli.file, recipe, servings, measurement, all_grams, &sort),
        Command::List {
            search,
            category,
            country,
            favorites,
            sort,
            desc,
        } => cmd_list(&cli.file, search, category, country, favorites, &sort, desc),
        Command::Random {
            category,
            search,
            country,
            favorites,
            rolls,
        } => cmd_random(&cli.file, category, search, country, favorites, rolls),
        Command::Import { recipes, groceries } => cmd_import(&cli.file, &recipes, &groceries),
    }
}

fn load_catalog(file_path: &str) -> Result<Vec<Recipe>> {
    let path = Path::new(file_path);
    if !path.exists() {
        eprintln!("Recipe catalog not found: {}", file_path);
        eprintln!("Use 'import' to build one from the authoring CSVs.");
        return Err(ChefError::RecipeNotFound(file_path.to_string()));
    }

    let recipes = load_recipes(path)?;
    if recipes.is_empty() {
        return Err(ChefError::EmptyCatalog);
    }
    Ok(recipes)
}

fn build_filter(
    search: Option<String>,
    category: Option<String>,
    country: Option<String>,
    favorites: bool,
) -> Result<RecipeFilter> {
    let mut filter = RecipeFilter::new();
    filter.search_text = search.unwrap_or_default();
    filter.selected_country_code = country;
    filter.favorites_only = favorites;

    if let Some(category) = category {
        let category: RecipeCategory = category.parse().map_err(ChefError::InvalidInput)?;
        filter.toggle_category(category);
    }

    Ok(filter)
}

/// Show the scaled grocery list for one recipe.
fn cmd_grocery(
    file_path: &str,
    recipe_id: Option<String>,
    servings: Option<u32>,
    measurement: Option<String>,
    all_grams: bool,
    sort: &str,
) -> Result<()> {
    let recipes = load_catalog(file_path)?;
    let sort: GrocerySort = sort.parse().map_err(ChefError::InvalidInput)?;

    let id = match recipe_id {
        Some(id) => id,
        None => {
            let refs: Vec<&Recipe> = recipes.iter().collect();
            prompt_recipe(&refs)?
        }
    };

    let recipe = recipes
        .iter()
        .find(|r| r.id.eq_ignore_ascii_case(&id))
        .ok_or_else(|| ChefError::RecipeNotFound(id.clone()))?;

    let servings = match servings {
        Some(s) if s > 0 => s,
        Some(_) => {
            return Err(ChefError::InvalidInput(
                "Servings must be at least 1".to_string(),
            ));
        }
        None => prompt_servings()?,
    };

    let (system, show_all) = match measurement {
        Some(m) => (
            m.parse::<MeasurementSystem>()
                .map_err(ChefError::InvalidInput)?,
            all_grams,
        ),
        None if all_grams => (MeasurementSystem::Metric, true),
        None => {
            if prompt_yes_no("Show everything in grams?", false)? {
                (MeasurementSystem::Metric, true)
            } else {
                (prompt_measurement_system()?, false)
            }
        }
    };

    display_grocery_list(recipe, servings, system, show_all, sort);
    Ok(())
}

/// List recipes with filtering and sorting.
fn cmd_list(
    file_path: &str,
    search: Option<String>,
    category: Option<String>,
    country: Option<String>,
    favorites: bool,
    sort: &str,
    desc: bool,
) -> Result<()> {
    let recipes = load_catalog(file_path)?;
    let filter = build_filter(search, category, country, favorites)?;
    let sort_key: SortKey = sort.parse().map_err(ChefError::InvalidInput)?;

    let mut filtered = filter.filtered(&recipes);
    sort_recipes(&mut filtered, sort_key, !desc);

    println!("{} of {} recipes", filtered.len(), recipes.len());
    println!();
    display_recipe_list(&filtered, &[]);
    Ok(())
}

/// Draw a random selection from the filtered list.
fn cmd_random(
    file_path: &str,
    category: Option<String>,
    search: Option<String>,
    country: Option<String>,
    favorites: bool,
    rolls: u32,
) -> Result<()> {
    let recipes = load_catalog(file_path)?;
    let filter = build_filter(search, category, country, favorites)?;
    let selected_category = filter.selected_category();
    let candidates = filter.filtered(&recipes);

    if candidates.is_empty() {
        println!("No recipes match the current filters.");
        return Ok(());
    }

    let mut sequencer = RandomSelectionSequencer::new();

    for roll in 1..=rolls.max(1) {
        sequencer.apply_random_selection(&candidates, selected_category);

        if rolls > 1 {
            println!("--- roll {} ---", roll);
        }

        let selected: Vec<&Recipe> = candidates
            .iter()
            .copied()
            .filter(|r| sequencer.random_selection_ids().contains(&r.id))
            .collect();
        display_recipe_list(&selected, sequencer.random_selection_ids());
        println!();
    }

    Ok(())
}

/// Convert the authoring CSVs into a catalog JSON file.
fn cmd_import(file_path: &str, recipes_csv: &str, groceries_csv: &str) -> Result<()> {
    let catalog = import_catalog(Path::new(recipes_csv), Path::new(groceries_csv))?;

    if catalog.is_empty() {
        return Err(ChefError::EmptyCatalog);
    }

    save_recipes(file_path, &catalog)?;
    println!(
        "Imported {} recipes ({} ingredients) into {}",
        catalog.len(),
        catalog.iter().map(|r| r.ingredients.len()).sum::<usize>(),
        file_path
    );
    Ok(())
}
