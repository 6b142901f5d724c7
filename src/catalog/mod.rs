mod import;
mod persistence;

pub use import::import_catalog;
pub use persistence::{load_recipes, save_recipes};
