use crate::units::catalog::smallest_unit;
use crate::units::ladder::ladder_for;
use crate::units::types::{Amount, MeasuringSystem, UnitType};
use tracing::debug;

/// Multiply the bounds of an amount by `factor` when it takes part in scaling
pub fn scale_amount(amount: &Amount, factor: f32, should_scale: bool) -> Amount {
    if !should_scale {
        return amount.clone();
    }
    let (min, max) = amount.map_bounds(|v| v * factor);
    Amount {
        min,
        max,
        ..amount.clone()
    }
}

/// Convert an amount into the most natural unit of the target measuring system
///
/// The amount is first expressed in the smallest unit of its type (g, ml, mm), then the
/// ladder for the target system picks the unit to display it in. `density` (g/ml) lets a
/// weight flagged `us_cust` be shown as a US volume; without it the weight ladder is used.
pub fn convert_unit_system(
    amount: &Amount,
    target: MeasuringSystem,
    density: Option<f32>,
) -> Amount {
    let unit = match &amount.unit {
        Some(unit) => unit,
        None => return amount.clone(),
    };
    let unit_type = match unit.unit_type {
        Some(unit_type) => unit_type,
        None => return amount.clone(),
    };
    if unit.belongs_to(target) {
        return amount.clone();
    }

    // Common ground: grams, millilitres or millimetres
    let (mut min, mut max) = amount.map_bounds(|v| v * unit.quantity);
    let mut unit_type = unit_type;

    if target == MeasuringSystem::USCustomary && amount.us_cust && unit_type == UnitType::Weight
    {
        match density.filter(|d| *d > 0.0) {
            Some(density) => {
                min /= density;
                max = max.map(|v| v / density);
                unit_type = UnitType::Volume;
            }
            None => debug!(
                "no density for {} {}, keeping a weight unit",
                amount.min, unit.symbol
            ),
        }
    }

    let ladder = ladder_for(unit, target, amount.us_cust);
    let target_unit = match ladder.select(unit_type, min) {
        Some(rung) => rung.unit,
        None => smallest_unit(unit_type),
    };
    debug!(
        "{} {} -> {} via {} ladder",
        amount.min, unit.symbol, target_unit.symbol, ladder.name
    );

    Amount {
        min: min / target_unit.quantity,
        max: max.map(|v| v / target_unit.quantity),
        unit: Some(target_unit.clone()),
        us_cust: amount.us_cust,
    }
}

/// Scale then convert, the full per-quantity pipeline
pub fn scale_and_convert(
    amount: &Amount,
    factor: f32,
    should_scale: bool,
    target: MeasuringSystem,
    density: Option<f32>,
) -> Amount {
    convert_unit_system(&scale_amount(amount, factor, should_scale), target, density)
}
