//! Numeric formatting shared by every unit branch: plain decimals for weight
//! and metric volume, vulgar quarter fractions for culinary units, and the
//! reverse parse used for amount sorting.

/// Round to the nearest multiple of `step`. Non-positive steps pass the value
/// through unchanged.
pub fn round_to_nearest(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Format a plain quantity: integers render bare, values below 10 keep one
/// decimal, larger values round to whole numbers.
pub fn format_number(value: f64) -> String {
    if value.floor() == value {
        return format!("{}", value as i64);
    }
    if value < 10.0 {
        let rounded = (value * 10.0).round() / 10.0;
        if rounded.floor() == rounded {
            format!("{}", rounded as i64)
        } else {
            format!("{:.1}", rounded)
        }
    } else {
        format!("{}", value.round() as i64)
    }
}

/// Format a quarter-rounded quantity with vulgar fraction glyphs.
///
/// `2.75` renders as `"2 ¾"`, `0.5` as `"½"`, `3.0` as `"3"`.
pub fn format_quarter_fraction(value: f64) -> String {
    let rounded = round_to_nearest(value, 0.25);
    let whole = rounded.trunc();
    let fraction = rounded - whole;

    // Quarter steps are exact in binary, so direct comparison is fine.
    let fraction_text = if fraction == 0.25 {
        "¼"
    } else if fraction == 0.5 {
        "½"
    } else if fraction == 0.75 {
        "¾"
    } else {
        ""
    };

    if whole == 0.0 {
        if fraction_text.is_empty() {
            return format_number(rounded);
        }
        return fraction_text.to_string();
    }

    if fraction_text.is_empty() {
        format!("{}", whole as i64)
    } else {
        format!("{} {}", whole as i64, fraction_text)
    }
}

const FRACTION_GLYPHS: [(&str, f64); 18] = [
    ("¼", 0.25),
    ("½", 0.5),
    ("¾", 0.75),
    ("⅐", 1.0 / 7.0),
    ("⅑", 1.0 / 9.0),
    ("⅒", 0.1),
    ("⅓", 1.0 / 3.0),
    ("⅔", 2.0 / 3.0),
    ("⅕", 0.2),
    ("⅖", 0.4),
    ("⅗", 0.6),
    ("⅘", 0.8),
    ("⅙", 1.0 / 6.0),
    ("⅚", 5.0 / 6.0),
    ("⅛", 0.125),
    ("⅜", 0.375),
    ("⅝", 0.625),
    ("⅞", 0.875),
];

fn slash_fraction_value(token: &str) -> Option<f64> {
    let mut pieces = token.split('/');
    let numerator: f64 = pieces.next()?.parse().ok()?;
    let denominator: f64 = pieces.next()?.parse().ok()?;
    if pieces.next().is_some() || denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// Parse a display amount back into a sortable number.
///
/// Whitespace-separated tokens are summed: `"1 ¼"` yields 1.25. Accepts
/// vulgar fraction glyphs, `a/b` slash fractions, and decimals with either
/// `.` or `,` as separator. Unparseable tokens contribute nothing.
pub fn sortable_value(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let mut parsed = 0.0;
    for token in trimmed.split_whitespace() {
        if let Some(&(_, mapped)) = FRACTION_GLYPHS.iter().find(|(glyph, _)| *glyph == token) {
            parsed += mapped;
            continue;
        }

        if let Some(fraction) = slash_fraction_value(token) {
            parsed += fraction;
            continue;
        }

        let normalized = token.replace(',', ".");
        if let Ok(number) = normalized.parse::<f64>() {
            parsed += number;
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_round_to_nearest_quarter() {
        assert_float_absolute_eq!(round_to_nearest(2.6, 0.25), 2.5, 1e-9);
        assert_float_absolute_eq!(round_to_nearest(2.88, 0.25), 3.0, 1e-9);
        assert_float_absolute_eq!(round_to_nearest(0.1, 0.25), 0.0, 1e-9);
        // Non-positive step passes through
        assert_float_absolute_eq!(round_to_nearest(2.6, 0.0), 2.6, 1e-9);
    }

    #[test]
    fn test_format_number_integers_render_bare() {
        assert_eq!(format_number(400.0), "400");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_number_small_values_keep_one_decimal() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(9.96), "10");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn test_format_number_large_values_round_to_whole() {
        assert_eq!(format_number(56.69904625), "57");
        assert_eq!(format_number(240.4), "240");
    }

    #[test]
    fn test_format_quarter_fraction_glyphs() {
        assert_eq!(format_quarter_fraction(0.25), "¼");
        assert_eq!(format_quarter_fraction(0.5), "½");
        assert_eq!(format_quarter_fraction(2.75), "2 ¾");
        assert_eq!(format_quarter_fraction(3.0), "3");
        assert_eq!(format_quarter_fraction(0.0), "0");
    }

    #[test]
    fn test_sortable_value_parses_unicode_fractions() {
        assert_float_absolute_eq!(sortable_value("1 ¼"), 1.25, 1e-4);
        assert_float_absolute_eq!(sortable_value("½"), 0.5, 1e-4);
    }

    #[test]
    fn test_sortable_value_parses_slash_fractions() {
        assert_float_absolute_eq!(sortable_value("1 1/2"), 1.5, 1e-4);
        assert_float_absolute_eq!(sortable_value("3/0"), 0.0, 1e-4);
    }

    #[test]
    fn test_sortable_value_parses_comma_decimals() {
        assert_float_absolute_eq!(sortable_value("2,5"), 2.5, 1e-4);
        assert_float_absolute_eq!(sortable_value("  "), 0.0, 1e-4);
    }
}
