pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod measure;
pub mod models;
pub mod selection;

pub use error::{ChefError, Result};
pub use models::{DisplayAmount, DisplayMode, Ingredient, Recipe, RecipeCategory};
