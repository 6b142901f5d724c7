use traditional_chef_rs::models::{Recipe, RecipeCategory};
use traditional_chef_rs::selection::{RandomSelectionSequencer, RecipeFilter};

fn make_recipe(id: &str, category: RecipeCategory, country: &str, favorite: bool) -> Recipe {
    Recipe {
        id: id.to_string(),
        country_code: country.to_string(),
        name_key: format!("recipe.{}.name", id),
        category,
        approximate_minutes: 20,
        total_minutes: 30,
        calories: 450,
        base_servings: 4,
        favorite,
        ingredients: Vec::new(),
    }
}

fn sample_catalog() -> Vec<Recipe> {
    vec![
        make_recipe("bruschetta", RecipeCategory::Starter, "IT", false),
        make_recipe("gazpacho", RecipeCategory::Starter, "ES", true),
        make_recipe("carbonara", RecipeCategory::Main, "IT", true),
        make_recipe("paella", RecipeCategory::Main, "ES", false),
        make_recipe("stamppot", RecipeCategory::Main, "NL", false),
        make_recipe("tiramisu", RecipeCategory::Dessert, "IT", false),
        make_recipe("pancakes", RecipeCategory::Breakfast, "NL", false),
    ]
}

#[test]
fn test_random_draw_from_filtered_pool() {
    let catalog = sample_catalog();
    let mut filter = RecipeFilter::new();
    filter.selected_country_code = Some("IT".to_string());

    let candidates = filter.filtered(&catalog);
    let mut sequencer = RandomSelectionSequencer::new();
    sequencer.apply_random_selection(&candidates, None);

    // One per filterable category, all Italian; breakfast never participates.
    let ids = sequencer.random_selection_ids();
    assert_eq!(ids.len(), 3);
    assert!(ids.contains(&"bruschetta".to_string()));
    assert!(ids.contains(&"carbonara".to_string()));
    assert!(ids.contains(&"tiramisu".to_string()));
}

#[test]
fn test_bounce_sequence_with_category_filter() {
    let catalog = sample_catalog();
    let mut filter = RecipeFilter::new();
    filter.toggle_category(RecipeCategory::Main);

    let candidates = filter.filtered(&catalog);
    let mut sequencer = RandomSelectionSequencer::new();

    let mut picks = Vec::new();
    for _ in 0..4 {
        sequencer.apply_random_selection(&candidates, filter.selected_category());
        picks.push(sequencer.random_selection_ids()[0].clone());
    }

    // Catalog order is carbonara, paella, stamppot; the cursor reflects.
    assert_eq!(picks, vec!["carbonara", "paella", "stamppot", "paella"]);
}

#[test]
fn test_tightening_filter_refreshes_selection() {
    let catalog = sample_catalog();
    let mut filter = RecipeFilter::new();
    filter.toggle_category(RecipeCategory::Main);

    let candidates = filter.filtered(&catalog);
    let mut sequencer = RandomSelectionSequencer::new();
    sequencer.apply_random_selection(&candidates, filter.selected_category());
    assert_eq!(sequencer.random_selection_ids(), ["carbonara".to_string()]);

    // Favorites-only keeps carbonara eligible, so the pick survives.
    filter.favorites_only = true;
    let narrowed = filter.filtered(&catalog);
    sequencer.refresh_random_selection_if_needed(&narrowed, filter.selected_category());
    assert_eq!(sequencer.random_selection_ids(), ["carbonara".to_string()]);

    // A country filter that excludes it forces a replacement draw.
    filter.favorites_only = false;
    filter.selected_country_code = Some("ES".to_string());
    let spanish = filter.filtered(&catalog);
    sequencer.refresh_random_selection_if_needed(&spanish, filter.selected_category());
    assert_eq!(sequencer.random_selection_ids(), ["paella".to_string()]);
}

#[test]
fn test_empty_pool_yields_empty_selection() {
    let catalog = sample_catalog();
    let mut filter = RecipeFilter::new();
    filter.search_text = "no such dish".to_string();

    let candidates = filter.filtered(&catalog);
    let mut sequencer = RandomSelectionSequencer::new();
    sequencer.apply_random_selection(&candidates, None);

    assert!(sequencer.is_random_mode_active());
    assert!(sequencer.random_selection_ids().is_empty());
}
