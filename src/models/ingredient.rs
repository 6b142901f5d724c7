use serde::{Deserialize, Serialize};

/// Which unit family an ingredient quantity should be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Weight,
    Liquid,
    Spoon,
    Pcs,
}

impl std::str::FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weight" => Ok(DisplayMode::Weight),
            "liquid" => Ok(DisplayMode::Liquid),
            "spoon" => Ok(DisplayMode::Spoon),
            "pcs" => Ok(DisplayMode::Pcs),
            other => Err(format!("Unknown display mode: {}", other)),
        }
    }
}

/// Supermarket aisle used to group the grocery list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroceryAisle {
    Vegetables,
    Aromatics,
    Meat,
    Canned,
    Dairy,
    Pantry,
    Spices,
    Other,
}

impl GroceryAisle {
    pub fn label_key(&self) -> &'static str {
        match self {
            GroceryAisle::Vegetables => "aisle.vegetables",
            GroceryAisle::Aromatics => "aisle.aromatics",
            GroceryAisle::Meat => "aisle.meat",
            GroceryAisle::Canned => "aisle.canned",
            GroceryAisle::Dairy => "aisle.dairy",
            GroceryAisle::Pantry => "aisle.pantry",
            GroceryAisle::Spices => "aisle.spices",
            GroceryAisle::Other => "aisle.other",
        }
    }
}

impl Default for GroceryAisle {
    fn default() -> Self {
        GroceryAisle::Other
    }
}

impl std::str::FromStr for GroceryAisle {
    type Err = std::convert::Infallible;

    /// Unknown aisles normalize to `Other` rather than failing import.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "vegetables" => GroceryAisle::Vegetables,
            "aromatics" => GroceryAisle::Aromatics,
            "meat" => GroceryAisle::Meat,
            "canned" => GroceryAisle::Canned,
            "dairy" => GroceryAisle::Dairy,
            "pantry" => GroceryAisle::Pantry,
            "spices" => GroceryAisle::Spices,
            _ => GroceryAisle::Other,
        })
    }
}

/// A recipe ingredient with its canonical gram quantity and optional
/// conversion data.
///
/// `grams` is authored against the recipe's base serving count. The optional
/// density fields (`grams_per_ml`, `grams_per_tsp`, `grams_per_count`) are
/// treated as absent when not positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,

    pub name_key: String,

    pub grams: f64,

    #[serde(default)]
    pub is_optional: bool,

    #[serde(default)]
    pub aisle: GroceryAisle,

    /// Position in the recipe's step order, used for "use order" sorting.
    #[serde(default)]
    pub use_order: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_mode: Option<DisplayMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grams_per_ml: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grams_per_tsp: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grams_per_count: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_cup: Option<bool>,

    /// Literal display amount overriding computed conversion, e.g. "2" with
    /// a label key resolving to "pinches".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_amount_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_amount_label_key: Option<String>,
}

impl Ingredient {
    /// Display mode with the documented default applied.
    #[inline]
    pub fn effective_display_mode(&self) -> DisplayMode {
        self.display_mode.unwrap_or(DisplayMode::Weight)
    }

    /// Basic validation: non-negative canonical quantity.
    pub fn is_valid(&self) -> bool {
        self.grams >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ingredient() -> Ingredient {
        Ingredient {
            id: "pasta".to_string(),
            name_key: "ingredient.pasta".to_string(),
            grams: 400.0,
            is_optional: false,
            aisle: GroceryAisle::Pantry,
            use_order: 1,
            display_mode: None,
            grams_per_ml: None,
            grams_per_tsp: None,
            grams_per_count: None,
            allow_cup: None,
            custom_amount_value: None,
            custom_amount_label_key: None,
        }
    }

    #[test]
    fn test_effective_display_mode_defaults_to_weight() {
        let ing = sample_ingredient();
        assert_eq!(ing.effective_display_mode(), DisplayMode::Weight);

        let mut liquid = sample_ingredient();
        liquid.display_mode = Some(DisplayMode::Liquid);
        assert_eq!(liquid.effective_display_mode(), DisplayMode::Liquid);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_ingredient().is_valid());

        let mut invalid = sample_ingredient();
        invalid.grams = -1.0;
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_json_roundtrip_keeps_optional_fields() {
        let mut ing = sample_ingredient();
        ing.display_mode = Some(DisplayMode::Pcs);
        ing.grams_per_count = Some(40.0);

        let json = serde_json::to_string(&ing).unwrap();
        assert!(json.contains("\"displayMode\":\"pcs\""));
        assert!(!json.contains("gramsPerMl"));

        let back: Ingredient = serde_json::from_str(&json).unwrap();
        assert_eq!(back.grams_per_count, Some(40.0));
        assert_eq!(back.display_mode, Some(DisplayMode::Pcs));
    }
}
