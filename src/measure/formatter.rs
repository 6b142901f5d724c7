//! The grocery measurement formatter: converts a canonical gram quantity into
//! a display amount appropriate for the chosen measurement system, scaled by
//! serving count.
//!
//! Every path terminates in a sensible unit; missing or non-positive
//! conversion data falls back toward plain gram weight and never errors.

use crate::measure::constants::{
    GRAMS_PER_OUNCE, METRIC_TABLESPOON_ML, METRIC_TEASPOON_ML, MIN_GRAMS_PER_ML, ML_PER_LITER,
    MeasurementSystem, OUNCES_PER_POUND, QUARTER_STEP,
};
use crate::measure::number::{format_number, format_quarter_fraction, round_to_nearest};
use crate::models::{DisplayAmount, DisplayMode, Ingredient};

/// Format an ingredient amount for display.
///
/// `show_all_measurements` forces plain gram weight and wins over everything,
/// including a custom amount. A custom value/label pair wins over computed
/// conversion. `base_servings` must be positive (caller contract).
/// `resolve_label` maps a custom-amount label key through the host's
/// localization tables.
pub fn formatted_amount<F>(
    ingredient: &Ingredient,
    servings: u32,
    base_servings: u32,
    system: MeasurementSystem,
    show_all_measurements: bool,
    resolve_label: F,
) -> DisplayAmount
where
    F: Fn(&str) -> String,
{
    let grams = scaled_grams(ingredient.grams, servings, base_servings);

    if show_all_measurements {
        return metric_weight_amount(grams);
    }

    if let (Some(custom_value), Some(custom_label_key)) = (
        ingredient.custom_amount_value.as_deref(),
        ingredient.custom_amount_label_key.as_deref(),
    ) {
        return DisplayAmount::new(custom_value, resolve_label(custom_label_key));
    }

    match system {
        MeasurementSystem::Metric => metric_amount(ingredient, grams),
        _ => non_metric_amount(ingredient, grams, system),
    }
}

fn scaled_grams(grams: f64, servings: u32, base_servings: u32) -> f64 {
    grams * servings as f64 / base_servings as f64
}

fn metric_amount(ingredient: &Ingredient, grams: f64) -> DisplayAmount {
    match ingredient.effective_display_mode() {
        DisplayMode::Pcs => {
            piece_amount(ingredient, grams).unwrap_or_else(|| metric_weight_amount(grams))
        }
        DisplayMode::Liquid => match positive(ingredient.grams_per_ml) {
            Some(grams_per_ml) => {
                let ml = grams / grams_per_ml;
                if ml >= ML_PER_LITER {
                    DisplayAmount::new(format_number(ml / ML_PER_LITER), "l")
                } else {
                    DisplayAmount::new(format_number(ml), "ml")
                }
            }
            None => metric_weight_amount(grams),
        },
        DisplayMode::Spoon => spoon_amount(ingredient, grams, MeasurementSystem::Metric),
        DisplayMode::Weight => metric_weight_amount(grams),
    }
}

fn non_metric_amount(
    ingredient: &Ingredient,
    grams: f64,
    system: MeasurementSystem,
) -> DisplayAmount {
    match ingredient.effective_display_mode() {
        // Piece fallback stays in grams rather than oz/lb: an ingredient
        // tagged pcs without density data reads better as its pack weight.
        DisplayMode::Pcs => piece_amount(ingredient, grams)
            .unwrap_or_else(|| DisplayAmount::new(format_number(grams), "g")),
        DisplayMode::Liquid => {
            let grams_per_ml = positive(ingredient.grams_per_ml).unwrap_or(1.0);
            volume_amount(
                grams,
                grams_per_ml,
                ingredient.allow_cup.unwrap_or(false),
                system,
            )
        }
        DisplayMode::Spoon => spoon_amount(ingredient, grams, system),
        DisplayMode::Weight => {
            if system.uses_imperial_weight() {
                imperial_weight_amount(grams)
            } else {
                metric_weight_amount(grams)
            }
        }
    }
}

fn metric_weight_amount(grams: f64) -> DisplayAmount {
    DisplayAmount::new(format_number(grams), "g")
}

fn imperial_weight_amount(grams: f64) -> DisplayAmount {
    let ounces = grams / GRAMS_PER_OUNCE;
    if ounces >= OUNCES_PER_POUND {
        DisplayAmount::new(format_number(ounces / OUNCES_PER_POUND), "lb")
    } else {
        DisplayAmount::new(format_number(ounces), "oz")
    }
}

/// Piece count from per-count density, or from the ingredient's own base
/// weight (one record = one piece). Returns None without any usable weight.
fn piece_amount(ingredient: &Ingredient, grams: f64) -> Option<DisplayAmount> {
    let per_piece = positive(ingredient.grams_per_count).or_else(|| positive(Some(ingredient.grams)))?;
    let count = round_to_nearest(grams / per_piece, QUARTER_STEP).max(QUARTER_STEP);
    Some(DisplayAmount::new(format_number(count), "pcs"))
}

fn spoon_amount(ingredient: &Ingredient, grams: f64, system: MeasurementSystem) -> DisplayAmount {
    let system_teaspoon_ml = if system == MeasurementSystem::Metric {
        METRIC_TEASPOON_ML
    } else {
        system.teaspoon_ml()
    };
    let teaspoon_ml = if system_teaspoon_ml > 0.0 {
        system_teaspoon_ml
    } else {
        METRIC_TEASPOON_ML
    };

    let grams_per_ml = positive(ingredient.grams_per_tsp)
        .map(|per_tsp| per_tsp / teaspoon_ml)
        .or_else(|| positive(ingredient.grams_per_ml))
        .unwrap_or(1.0);

    volume_amount(
        grams,
        grams_per_ml,
        ingredient.allow_cup.unwrap_or(false),
        system,
    )
}

/// Volume rendering with strict cup → tbsp → tsp priority. Non-metric
/// systems never fall through to plain milliliters.
fn volume_amount(
    grams: f64,
    grams_per_ml: f64,
    allow_cup: bool,
    system: MeasurementSystem,
) -> DisplayAmount {
    let ml = grams / grams_per_ml.max(MIN_GRAMS_PER_ML);

    let teaspoon_ml = if system == MeasurementSystem::Metric {
        METRIC_TEASPOON_ML
    } else {
        system.teaspoon_ml()
    };
    let tablespoon_ml = if system == MeasurementSystem::Metric {
        METRIC_TABLESPOON_ML
    } else {
        system.tablespoon_ml()
    };

    if allow_cup && system.cup_ml() > 0.0 {
        let cups = ml / system.cup_ml();
        if cups >= QUARTER_STEP {
            let rounded = round_to_nearest(cups, QUARTER_STEP).max(QUARTER_STEP);
            return DisplayAmount::new(format_quarter_fraction(rounded), "cup");
        }
    }

    let tbsp = ml / tablespoon_ml.max(MIN_GRAMS_PER_ML);
    if tbsp >= 1.0 {
        let rounded = round_to_nearest(tbsp, QUARTER_STEP).max(1.0);
        return DisplayAmount::new(format_quarter_fraction(rounded), "tbsp");
    }

    let tsp = ml / teaspoon_ml.max(MIN_GRAMS_PER_ML);
    let rounded = round_to_nearest(tsp, QUARTER_STEP).max(QUARTER_STEP);
    DisplayAmount::new(format_quarter_fraction(rounded), "tsp")
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}
