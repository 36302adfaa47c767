use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

lazy_static! {
    /// A pair of straight double quotes on the same line
    static ref MATCHING_QUOTES: Regex = Regex::new(r#""(.*?)""#).unwrap();
}

// Upper bound (exclusive) of the fractional part each glyph stands for,
// halfway between neighbouring fractions
const FRACTIONS: [(f64, &str); 10] = [
    (0.0625, ""),
    (0.1875, "⅛"),
    (0.2917, "¼"),
    (0.3542, "⅓"),
    (0.4375, "⅜"),
    (0.5625, "½"),
    (0.6458, "⅝"),
    (0.7083, "⅔"),
    (0.8125, "¾"),
    (0.9375, "⅞"),
];

/// Round `value` to `decimals` places and render it as an integer, a decimal or,
/// with `use_fraction`, a whole number followed by the nearest unicode fraction
pub fn format_amount(value: f32, decimals: u32, use_fraction: bool) -> String {
    // Overflowed inputs render as "inf" rather than reaching the integer paths
    if !value.is_finite() {
        warn!("Rendering non-finite amount {}", value);
        return value.to_string();
    }

    let multiplier = 10f64.powi(decimals as i32);
    let rounded = (f64::from(value) * multiplier).round() / multiplier;

    if rounded == 0.0 {
        return "0".to_string();
    }
    if rounded.fract() == 0.0 {
        return format!("{:.0}", rounded);
    }

    if use_fraction {
        return format_fraction(rounded);
    }

    format!("{}", rounded)
}

pub fn format_to_nearest_fraction(value: f32) -> String {
    format_amount(value, 2, true)
}

fn format_fraction(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let whole = value.abs().trunc();
    let fractional_part = value.abs().fract();

    let glyph = FRACTIONS
        .iter()
        .find(|(upper, _)| fractional_part < *upper)
        .map(|(_, glyph)| *glyph);

    match glyph {
        Some("") if whole == 0.0 => "0".to_string(),
        Some("") => format!("{}{:.0}", sign, whole),
        Some(glyph) if whole == 0.0 => format!("{}{}", sign, glyph),
        Some(glyph) => format!("{}{:.0}{}", sign, whole, glyph),
        // Close enough to the next whole number
        None => format!("{}{:.0}", sign, whole + 1.0),
    }
}

/// Curly quotes, apostrophes and spaced en-dashes
pub fn apply_smart_punctuation(text: &str) -> String {
    MATCHING_QUOTES
        .replace_all(text, "“$1”")
        .replace('\'', "’")
        .replace(" - ", " – ")
}
