use clap::{Parser, Subcommand};

/// Traditional Chef: browse a recipe catalog with serving-scaled grocery
/// amounts in your regional units.
#[derive(Parser, Debug)]
#[command(name = "traditional_chef")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe catalog JSON file.
    #[arg(short, long, default_value = "recipes.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the scaled grocery list for a recipe.
    Grocery {
        /// Recipe id; prompts with fuzzy matching when omitted.
        recipe: Option<String>,

        /// Serving count; prompts when omitted.
        #[arg(short, long)]
        servings: Option<u32>,

        /// Measurement system (metric, us, uk, au-nz, jp); prompts when omitted.
        #[arg(short, long)]
        measurement: Option<String>,

        /// Show every amount as plain gram weight.
        #[arg(long)]
        all_grams: bool,

        /// Grocery list order: aisle, use-order, or amount.
        #[arg(long, default_value = "aisle")]
        sort: String,
    },

    /// List recipes with filtering and sorting.
    List {
        /// Search text matched against names and country codes.
        #[arg(short, long)]
        search: Option<String>,

        /// Filter to one category (starter, main, dessert, breakfast, snack).
        #[arg(short, long)]
        category: Option<String>,

        /// Filter to a country code, e.g. IT.
        #[arg(long)]
        country: Option<String>,

        /// Only show favorites.
        #[arg(long)]
        favorites: bool,

        /// Sort column: country, name, time, prep, calories, ingredients.
        #[arg(long, default_value = "country")]
        sort: String,

        /// Sort descending instead of ascending.
        #[arg(long)]
        desc: bool,
    },

    /// Pick a random recipe per category from the filtered list.
    Random {
        /// Restrict the draw to one category.
        #[arg(short, long)]
        category: Option<String>,

        /// Search text applied before drawing.
        #[arg(short, long)]
        search: Option<String>,

        /// Country code applied before drawing.
        #[arg(long)]
        country: Option<String>,

        /// Only draw from favorites.
        #[arg(long)]
        favorites: bool,

        /// Number of successive draws to show.
        #[arg(long, default_value_t = 1)]
        rolls: u32,
    },

    /// Convert authoring CSVs (recipes + groceries) into a catalog JSON.
    Import {
        /// Path to recipes.csv.
        recipes: String,

        /// Path to groceries.csv.
        groceries: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::List {
            search: None,
            category: None,
            country: None,
            favorites: false,
            sort: "country".to_string(),
            desc: false,
        }
    }
}
