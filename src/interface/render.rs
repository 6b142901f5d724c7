use std::collections::BTreeMap;

use crate::measure::{MeasurementSystem, formatted_amount, sortable_value};
use crate::models::{DisplayAmount, GroceryAisle, Ingredient, Recipe};

/// Sort order for the grocery list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrocerySort {
    /// Group by supermarket aisle, use order within each aisle.
    Aisle,
    /// The order the ingredients are used in the recipe steps.
    UseOrder,
    /// Largest displayed amount first.
    Amount,
}

impl std::str::FromStr for GrocerySort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aisle" => Ok(GrocerySort::Aisle),
            "use" | "useorder" | "use-order" => Ok(GrocerySort::UseOrder),
            "amount" => Ok(GrocerySort::Amount),
            other => Err(format!("Unknown grocery sort: {}", other)),
        }
    }
}

/// Stand-in for the app's localization tables: derives a readable label from
/// the last segment of a key, so "ingredient.pasta" renders as "pasta".
pub fn default_label(key: &str) -> String {
    let mut segments = key.rsplit('.');
    let mut last = segments.next().unwrap_or(key);
    // Recipe name keys end in a ".name" suffix; the id segment reads better.
    if last == "name" {
        last = segments.next().unwrap_or(last);
    }
    last.replace('_', " ")
}

fn formatted(
    ingredient: &Ingredient,
    servings: u32,
    base_servings: u32,
    system: MeasurementSystem,
    show_all: bool,
) -> DisplayAmount {
    formatted_amount(
        ingredient,
        servings,
        base_servings,
        system,
        show_all,
        default_label,
    )
}

/// Print the scaled grocery list for a recipe.
pub fn display_grocery_list(
    recipe: &Recipe,
    servings: u32,
    system: MeasurementSystem,
    show_all: bool,
    sort: GrocerySort,
) {
    println!();
    println!(
        "=== {} ({} servings) ===",
        default_label(&recipe.name_key),
        servings
    );
    println!();

    if recipe.ingredients.is_empty() {
        println!("No ingredients recorded for this recipe.");
        return;
    }

    match sort {
        GrocerySort::Aisle => {
            let mut by_aisle: BTreeMap<GroceryAisle, Vec<&Ingredient>> = BTreeMap::new();
            for ingredient in &recipe.ingredients {
                by_aisle.entry(ingredient.aisle).or_default().push(ingredient);
            }

            for (aisle, mut ingredients) in by_aisle {
                ingredients.sort_by_key(|i| i.use_order);
                println!("[{}]", default_label(aisle.label_key()));
                for ingredient in ingredients {
                    print_row(ingredient, recipe, servings, system, show_all);
                }
                println!();
            }
        }
        GrocerySort::UseOrder => {
            let mut ingredients: Vec<&Ingredient> = recipe.ingredients.iter().collect();
            ingredients.sort_by_key(|i| i.use_order);
            for ingredient in ingredients {
                print_row(ingredient, recipe, servings, system, show_all);
            }
        }
        GrocerySort::Amount => {
            let mut rows: Vec<(&Ingredient, DisplayAmount)> = recipe
                .ingredients
                .iter()
                .map(|i| {
                    let amount = formatted(i, servings, recipe.base_servings, system, show_all);
                    (i, amount)
                })
                .collect();
            rows.sort_by(|a, b| {
                sortable_value(&b.1.value)
                    .partial_cmp(&sortable_value(&a.1.value))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            for (ingredient, amount) in rows {
                print_amount_row(ingredient, &amount);
            }
        }
    }
}

fn print_row(
    ingredient: &Ingredient,
    recipe: &Recipe,
    servings: u32,
    system: MeasurementSystem,
    show_all: bool,
) {
    let amount = formatted(ingredient, servings, recipe.base_servings, system, show_all);
    print_amount_row(ingredient, &amount);
}

fn print_amount_row(ingredient: &Ingredient, amount: &DisplayAmount) {
    let optional = if ingredient.is_optional { " (optional)" } else { "" };
    println!(
        "  {:>8} {:<5} {}{}",
        amount.value,
        amount.unit,
        default_label(&ingredient.name_key),
        optional
    );
}

/// Print the recipe list as a table, marking any random-mode selection.
pub fn display_recipe_list(recipes: &[&Recipe], selected_ids: &[String]) {
    if recipes.is_empty() {
        println!("No recipes match the current filters.");
        return;
    }

    let max_name_len = recipes
        .iter()
        .map(|r| default_label(&r.name_key).len())
        .max()
        .unwrap_or(10);

    for recipe in recipes {
        let marker = if selected_ids.contains(&recipe.id) {
            "*"
        } else {
            " "
        };
        let favorite = if recipe.favorite { "♥" } else { " " };
        println!(
            "{}{} {:<width$}  {}  {:<9}  {:>3} min  {:>4} kcal  {:>2} ingredients",
            marker,
            favorite,
            default_label(&recipe.name_key),
            recipe.country_code,
            default_label(recipe.category.label_key()),
            recipe.total_minutes,
            recipe.calories,
            recipe.ingredients.len(),
            width = max_name_len
        );
    }
}
