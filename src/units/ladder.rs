// Conversion ladders: which unit reads most naturally for a quantity of a given size

use crate::units::catalog::*;
use crate::units::types::{MeasurementUnit, MeasuringSystem, UnitType};
use lazy_static::lazy_static;

/// A single rung: from `threshold` (in g, ml or mm) upwards, express the quantity in `unit`
#[derive(Debug, Clone, Copy)]
pub struct UnitConversion {
    pub threshold: f32,
    pub unit: &'static MeasurementUnit,
}

impl UnitConversion {
    pub fn new(threshold: f32, unit: &'static MeasurementUnit) -> Self {
        Self { threshold, unit }
    }

    fn unit_type(&self) -> Option<UnitType> {
        self.unit.unit_type
    }
}

#[derive(Debug, Clone)]
pub struct Ladder {
    pub name: &'static str,
    rungs: Vec<UnitConversion>,
}

impl Ladder {
    pub fn new(name: &'static str, mut rungs: Vec<UnitConversion>) -> Self {
        rungs.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));
        Self { name, rungs }
    }

    pub fn rungs(&self) -> &[UnitConversion] {
        &self.rungs
    }

    /// Rung of the given type with the largest threshold not above `quantity`
    pub fn select(&self, unit_type: UnitType, quantity: f32) -> Option<&UnitConversion> {
        self.rungs
            .iter()
            .filter(|rung| rung.unit_type() == Some(unit_type) && quantity >= rung.threshold)
            .last()
    }
}

lazy_static! {
    pub static ref METRIC_PLAIN_LADDER: Ladder = Ladder::new(
        "metric",
        vec![
            UnitConversion::new(0.0, &GRAM),
            UnitConversion::new(1000.0, &KILOGRAM),
            UnitConversion::new(0.0, &MILLILITRE),
            UnitConversion::new(1000.0, &LITRE),
            UnitConversion::new(0.0, &MILLIMETRE),
            UnitConversion::new(10.0, &CENTIMETRE),
        ],
    );

    /// Keeps spoon and cup measures for quantities that were written that way
    pub static ref METRIC_CONVENIENCE_LADDER: Ladder = Ladder::new(
        "metric convenience",
        vec![
            UnitConversion::new(0.0, &GRAM),
            UnitConversion::new(1000.0, &KILOGRAM),
            UnitConversion::new(0.0, &METRIC_TEASPOON),
            UnitConversion::new(METRIC_TABLESPOON.quantity, &METRIC_TABLESPOON),
            UnitConversion::new(METRIC_CUP.quantity / 2.0, &METRIC_CUP),
            UnitConversion::new(1000.0, &LITRE),
            UnitConversion::new(0.0, &MILLIMETRE),
            UnitConversion::new(10.0, &CENTIMETRE),
        ],
    );

    pub static ref IMPERIAL_LADDER: Ladder = Ladder::new(
        "imperial",
        vec![
            UnitConversion::new(0.0, &OUNCE),
            UnitConversion::new(POUND.quantity, &POUND),
            UnitConversion::new(0.0, &US_TEASPOON),
            // 2 tablespoons
            UnitConversion::new(6.0 * US_TEASPOON.quantity, &US_TABLESPOON),
            // 4 tablespoons, a quarter cup
            UnitConversion::new(4.0 * US_TABLESPOON.quantity, &FLUID_OUNCE),
            UnitConversion::new(US_GALLON.quantity, &US_GALLON),
            UnitConversion::new(0.0, &INCH),
        ],
    );

    pub static ref US_CUSTOMARY_LADDER: Ladder = Ladder::new(
        "us customary",
        vec![
            UnitConversion::new(0.0, &OUNCE),
            UnitConversion::new(POUND.quantity, &POUND),
            UnitConversion::new(0.0, &US_TEASPOON),
            UnitConversion::new(6.0 * US_TEASPOON.quantity, &US_TABLESPOON),
            UnitConversion::new(4.0 * US_TABLESPOON.quantity, &US_CUP),
            UnitConversion::new(US_QUART.quantity, &US_QUART),
            UnitConversion::new(US_GALLON.quantity, &US_GALLON),
            UnitConversion::new(0.0, &INCH),
        ],
    );
}

/// Pick the ladder for converting `unit` into `target`
pub fn ladder_for(
    unit: &MeasurementUnit,
    target: MeasuringSystem,
    us_cust: bool,
) -> &'static Ladder {
    match target {
        MeasuringSystem::Metric => {
            if unit.id.is_some_and(|id| id.is_convenience()) {
                &*METRIC_CONVENIENCE_LADDER
            } else {
                &*METRIC_PLAIN_LADDER
            }
        }
        MeasuringSystem::USCustomary if us_cust => &*US_CUSTOMARY_LADDER,
        MeasuringSystem::USCustomary | MeasuringSystem::Imperial => &*IMPERIAL_LADDER,
    }
}
