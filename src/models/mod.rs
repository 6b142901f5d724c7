mod amount;
mod ingredient;
mod recipe;

pub use amount::DisplayAmount;
pub use ingredient::{DisplayMode, GroceryAisle, Ingredient};
pub use recipe::{Recipe, RecipeCategory};
