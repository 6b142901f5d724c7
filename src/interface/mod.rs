pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_measurement_system, prompt_recipe, prompt_servings, prompt_yes_no,
};
pub use render::{GrocerySort, default_label, display_grocery_list, display_recipe_list};
