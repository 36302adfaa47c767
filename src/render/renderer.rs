use crate::density::DensityTable;
use crate::render::formatter::{apply_smart_punctuation, format_amount, format_to_nearest_fraction};
use crate::template::models::*;
use crate::units::catalog::find_unit;
use crate::units::converter::scale_and_convert;
use crate::units::types::{Amount, MeasurementUnit, MeasuringSystem, UnitId};

/// Decimal places shown for a quantity in `unit`
pub fn decimals_for(unit: Option<&MeasurementUnit>) -> u32 {
    match unit.and_then(|u| u.id) {
        Some(UnitId::Gram | UnitId::Millilitre | UnitId::Millimetre) => 0,
        Some(UnitId::Centimetre | UnitId::Inch) => 1,
        _ => 2,
    }
}

/// Spoons, cups and plain counts read better as fractions
pub fn uses_fraction(unit: Option<&MeasurementUnit>) -> bool {
    match unit {
        None => true,
        Some(unit) => unit.id.is_some_and(|id| id.is_convenience()),
    }
}

/// Turn a placeholder into an amount: catalog unit resolved, `max == min` collapsed
pub fn placeholder_amount(placeholder: &QuantityPlaceholder) -> Amount {
    Amount::new(
        placeholder.min,
        placeholder.max,
        placeholder.unit.as_deref().map(find_unit),
    )
    .with_us_cust(placeholder.us_cust())
    .collapse_range()
}

/// `min[-max][ unit]` for an amount already in its display unit
pub fn format_quantity(amount: &Amount) -> String {
    let unit = amount.unit.as_ref();
    let decimals = decimals_for(unit);
    let fraction = uses_fraction(unit);

    let mut out = format_amount(amount.min, decimals, fraction);
    if let Some(max) = amount.max {
        out.push('-');
        out.push_str(&format_amount(max, decimals, fraction));
    }
    if let Some(unit) = unit {
        out.push(' ');
        out.push_str(unit.display_symbol(amount.upper_bound() > 1.0));
    }
    out
}

pub fn render_quantity(
    placeholder: &QuantityPlaceholder,
    factor: f32,
    system: MeasuringSystem,
    densities: Option<&DensityTable>,
) -> String {
    let density = placeholder
        .ingredient
        .as_deref()
        .zip(densities)
        .and_then(|(ingredient, table)| table.density_for_norm(ingredient));

    let amount = scale_and_convert(
        &placeholder_amount(placeholder),
        factor,
        placeholder.scale,
        system,
        density,
    );
    format_quantity(&amount)
}

/// `180C (160C fan)/350F/gas mark 4`, each part optional
pub fn render_oven_temperature(placeholder: &OvenTemperaturePlaceholder) -> String {
    let mut out = String::new();
    if let Some(c) = placeholder.temperature_c {
        out.push_str(&format!("{}C", c));
    }
    if let Some(fan_c) = placeholder.temperature_fan_c {
        if placeholder.temperature_c.is_some() {
            out.push_str(&format!(" ({}C fan)", fan_c));
        } else {
            out.push_str(&format!("{}C fan", fan_c));
        }
    }
    if let Some(f) = placeholder.temperature_f {
        out.push_str(&format!("/{}F", f));
    }
    if let Some(gas_mark) = placeholder.gas_mark {
        out.push_str(&format!("/gas mark {}", format_to_nearest_fraction(gas_mark)));
    }
    out
}

pub fn render_element(
    element: &TemplateElement,
    factor: f32,
    system: MeasuringSystem,
    densities: Option<&DensityTable>,
) -> String {
    match element {
        TemplateElement::Const(text) => text.clone(),
        TemplateElement::Quantity(quantity) => render_quantity(quantity, factor, system, densities),
        TemplateElement::OvenTemperature(oven) => render_oven_temperature(oven),
    }
}

/// Render every element and join them, without the punctuation pass
pub fn render_elements(
    template: &ParsedTemplate,
    factor: f32,
    system: MeasuringSystem,
    densities: Option<&DensityTable>,
) -> String {
    template
        .elements
        .iter()
        .map(|element| render_element(element, factor, system, densities))
        .collect()
}

/// Render a parsed template scaled by `factor` in the units of `system`
pub fn render_template(
    template: &ParsedTemplate,
    factor: f32,
    system: MeasuringSystem,
    densities: Option<&DensityTable>,
) -> String {
    apply_smart_punctuation(&render_elements(template, factor, system, densities))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::catalog::{GRAM, INCH, METRIC_CUP, US_TABLESPOON};

    fn oven(
        c: Option<i32>,
        fan_c: Option<i32>,
        f: Option<i32>,
        gas_mark: Option<f32>,
    ) -> OvenTemperaturePlaceholder {
        OvenTemperaturePlaceholder {
            temperature_c: c,
            temperature_fan_c: fan_c,
            temperature_f: f,
            gas_mark,
        }
    }

    #[test]
    fn test_oven_temperature() {
        assert_eq!(
            render_oven_temperature(&oven(Some(180), Some(160), None, None)),
            "180C (160C fan)"
        );
        assert_eq!(render_oven_temperature(&oven(Some(180), None, None, None)), "180C");
        assert_eq!(
            render_oven_temperature(&oven(None, Some(160), None, None)),
            "160C fan"
        );
        assert_eq!(
            render_oven_temperature(&oven(Some(180), Some(160), Some(350), Some(4.0))),
            "180C (160C fan)/350F/gas mark 4"
        );
        assert_eq!(
            render_oven_temperature(&oven(None, None, None, Some(0.5))),
            "/gas mark ½"
        );
        assert_eq!(render_oven_temperature(&oven(None, None, None, None)), "");
    }

    #[test]
    fn test_decimal_policy() {
        assert_eq!(decimals_for(Some(&GRAM)), 0);
        assert_eq!(decimals_for(Some(&INCH)), 1);
        assert_eq!(decimals_for(Some(&METRIC_CUP)), 2);
        assert_eq!(decimals_for(None), 2);
        assert_eq!(decimals_for(Some(&find_unit("clove"))), 2);
    }

    #[test]
    fn test_fraction_policy() {
        assert!(uses_fraction(None));
        assert!(uses_fraction(Some(&US_TABLESPOON)));
        assert!(uses_fraction(Some(&METRIC_CUP)));
        assert!(!uses_fraction(Some(&GRAM)));
        assert!(!uses_fraction(Some(&find_unit("pinch"))));
    }

    #[test]
    fn test_placeholder_amount_collapses_range() {
        let amount = placeholder_amount(&QuantityPlaceholder::new(2.0, Some(2.0), Some("g")));
        assert_eq!(amount.max, None);
        assert_eq!(amount.unit.and_then(|u| u.id), Some(UnitId::Gram));
    }

    #[test]
    fn test_format_quantity_plural_symbol() {
        let one = Amount::new(1.0, None, Some(find_unit("cup")));
        assert_eq!(format_quantity(&one), "1 cup");

        let range = Amount::new(0.5, Some(1.5), Some(find_unit("cup")));
        assert_eq!(format_quantity(&range), "½-1½ cups");

        let passthrough = Amount::new(2.0, None, Some(find_unit("cloves")));
        assert_eq!(format_quantity(&passthrough), "2 cloves");
    }

    #[test]
    fn test_quantity_uses_density_for_ingredient() {
        let table = DensityTable::new(
            "test",
            vec![crate::density::DensityEntry {
                id: 1,
                name: "Plain flour".to_string(),
                normalised_name: "plain flour".to_string(),
                density: 0.5,
            }],
        );
        let mut placeholder =
            QuantityPlaceholder::new(100.0, None, Some("g")).with_ingredient("plain flour");
        placeholder.us_cust = Some(true);

        // 200 ml is a little under a US cup
        assert_eq!(
            render_quantity(&placeholder, 1.0, MeasuringSystem::USCustomary, Some(&table)),
            "⅞ cup"
        );
        assert_eq!(
            render_quantity(&placeholder, 1.0, MeasuringSystem::USCustomary, None),
            "3.53 oz"
        );
    }
}
