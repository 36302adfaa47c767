// Static catalog of the units recipes are written in

use crate::units::types::{MeasurementUnit, MeasuringSystem, UnitId, UnitType};
use lazy_static::lazy_static;
use std::borrow::Cow;
use std::collections::HashMap;

use MeasuringSystem::{Imperial, Metric, USCustomary};

const METRIC: &[MeasuringSystem] = &[Metric];
const IMPERIAL: &[MeasuringSystem] = &[Imperial];
const US_CUSTOMARY: &[MeasuringSystem] = &[USCustomary];
const IMPERIAL_AND_US: &[MeasuringSystem] = &[Imperial, USCustomary];

const OUNCE_GRAMS: f32 = 28.3495;
const US_TEASPOON_ML: f32 = 4.9289;
const US_CUP_ML: f32 = 48.0 * US_TEASPOON_ML;

#[allow(clippy::too_many_arguments)]
const fn catalog_unit(
    id: UnitId,
    singular: &'static str,
    plural: &'static str,
    symbol: &'static str,
    symbol_plural: &'static str,
    aliases: &'static [&'static str],
    unit_type: UnitType,
    measuring_systems: &'static [MeasuringSystem],
    quantity: f32,
) -> MeasurementUnit {
    MeasurementUnit {
        id: Some(id),
        singular: Cow::Borrowed(singular),
        plural: Cow::Borrowed(plural),
        symbol: Cow::Borrowed(symbol),
        symbol_plural: Cow::Borrowed(symbol_plural),
        aliases,
        unit_type: Some(unit_type),
        measuring_systems,
        quantity,
    }
}

// Weight (grams)
pub static GRAM: MeasurementUnit = catalog_unit(
    UnitId::Gram,
    "gram",
    "grams",
    "g",
    "g",
    &["gr"],
    UnitType::Weight,
    METRIC,
    1.0,
);
pub static KILOGRAM: MeasurementUnit = catalog_unit(
    UnitId::Kilogram,
    "kilogram",
    "kilograms",
    "kg",
    "kg",
    &["kilo", "kilos"],
    UnitType::Weight,
    METRIC,
    1000.0,
);
pub static OUNCE: MeasurementUnit = catalog_unit(
    UnitId::Ounce,
    "ounce",
    "ounces",
    "oz",
    "oz",
    &[],
    UnitType::Weight,
    IMPERIAL_AND_US,
    OUNCE_GRAMS,
);
pub static POUND: MeasurementUnit = catalog_unit(
    UnitId::Pound,
    "pound",
    "pounds",
    "lb",
    "lbs",
    &[],
    UnitType::Weight,
    IMPERIAL_AND_US,
    16.0 * OUNCE_GRAMS,
);

// Volume (millilitres)
pub static MILLILITRE: MeasurementUnit = catalog_unit(
    UnitId::Millilitre,
    "millilitre",
    "millilitres",
    "ml",
    "ml",
    &["milliliter", "milliliters", "mL"],
    UnitType::Volume,
    METRIC,
    1.0,
);
pub static CENTILITRE: MeasurementUnit = catalog_unit(
    UnitId::Centilitre,
    "centilitre",
    "centilitres",
    "cl",
    "cl",
    &["centiliter", "centiliters"],
    UnitType::Volume,
    METRIC,
    10.0,
);
pub static LITRE: MeasurementUnit = catalog_unit(
    UnitId::Litre,
    "litre",
    "litres",
    "l",
    "l",
    &["liter", "liters", "L"],
    UnitType::Volume,
    METRIC,
    1000.0,
);
pub static METRIC_TEASPOON: MeasurementUnit = catalog_unit(
    UnitId::MetricTeaspoon,
    "teaspoon",
    "teaspoons",
    "tsp",
    "tsp",
    &[],
    UnitType::Volume,
    METRIC,
    5.0,
);
pub static METRIC_TABLESPOON: MeasurementUnit = catalog_unit(
    UnitId::MetricTablespoon,
    "tablespoon",
    "tablespoons",
    "tbsp",
    "tbsp",
    &[],
    UnitType::Volume,
    METRIC,
    15.0,
);
pub static US_TEASPOON: MeasurementUnit = catalog_unit(
    UnitId::UsTeaspoon,
    "teaspoon",
    "teaspoons",
    "tsp",
    "tsp",
    &[],
    UnitType::Volume,
    IMPERIAL_AND_US,
    US_TEASPOON_ML,
);
pub static US_TABLESPOON: MeasurementUnit = catalog_unit(
    UnitId::UsTablespoon,
    "tablespoon",
    "tablespoons",
    "tbsp",
    "tbsp",
    &[],
    UnitType::Volume,
    IMPERIAL_AND_US,
    3.0 * US_TEASPOON_ML,
);
pub static FLUID_OUNCE: MeasurementUnit = catalog_unit(
    UnitId::FluidOunce,
    "fluid ounce",
    "fluid ounces",
    "fl oz",
    "fl oz",
    &["floz"],
    UnitType::Volume,
    IMPERIAL,
    6.0 * US_TEASPOON_ML,
);
pub static US_CUP: MeasurementUnit = catalog_unit(
    UnitId::UsCup,
    "cup",
    "cups",
    "cup",
    "cups",
    &[],
    UnitType::Volume,
    US_CUSTOMARY,
    US_CUP_ML,
);
pub static METRIC_CUP: MeasurementUnit = catalog_unit(
    UnitId::MetricCup,
    "cup",
    "cups",
    "cup",
    "cups",
    &[],
    UnitType::Volume,
    METRIC,
    250.0,
);
pub static US_PINT: MeasurementUnit = catalog_unit(
    UnitId::UsPint,
    "pint",
    "pints",
    "pt",
    "pts",
    &[],
    UnitType::Volume,
    IMPERIAL_AND_US,
    2.0 * US_CUP_ML,
);
pub static US_QUART: MeasurementUnit = catalog_unit(
    UnitId::UsQuart,
    "quart",
    "quarts",
    "qt",
    "qts",
    &[],
    UnitType::Volume,
    IMPERIAL_AND_US,
    4.0 * US_CUP_ML,
);
pub static US_GALLON: MeasurementUnit = catalog_unit(
    UnitId::UsGallon,
    "gallon",
    "gallons",
    "gal",
    "gals",
    &[],
    UnitType::Volume,
    IMPERIAL_AND_US,
    16.0 * US_CUP_ML,
);

// Length (millimetres)
pub static MILLIMETRE: MeasurementUnit = catalog_unit(
    UnitId::Millimetre,
    "millimetre",
    "millimetres",
    "mm",
    "mm",
    &["millimeter", "millimeters"],
    UnitType::Length,
    METRIC,
    1.0,
);
pub static CENTIMETRE: MeasurementUnit = catalog_unit(
    UnitId::Centimetre,
    "centimetre",
    "centimetres",
    "cm",
    "cm",
    &["centimeter", "centimeters"],
    UnitType::Length,
    METRIC,
    10.0,
);
pub static INCH: MeasurementUnit = catalog_unit(
    UnitId::Inch,
    "inch",
    "inches",
    "in",
    "in",
    &["\""],
    UnitType::Length,
    IMPERIAL,
    25.4,
);

pub static ALL_UNITS: [&MeasurementUnit; 20] = [
    &GRAM,
    &KILOGRAM,
    &OUNCE,
    &POUND,
    &MILLILITRE,
    &CENTILITRE,
    &LITRE,
    &METRIC_TEASPOON,
    &METRIC_TABLESPOON,
    &US_TEASPOON,
    &US_TABLESPOON,
    &FLUID_OUNCE,
    &US_CUP,
    &METRIC_CUP,
    &US_PINT,
    &US_QUART,
    &US_GALLON,
    &MILLIMETRE,
    &CENTIMETRE,
    &INCH,
];

type UnitIndex = HashMap<&'static str, &'static MeasurementUnit>;

fn index_units(system: MeasuringSystem) -> UnitIndex {
    let mut index = HashMap::new();
    for unit in ALL_UNITS.iter().copied().filter(|u| u.belongs_to(system)) {
        for name in unit.names() {
            index.entry(name).or_insert(unit);
        }
    }
    index
}

lazy_static! {
    /// Lookup order for names coming from a recipe: metric first, then imperial, then US
    static ref UNIT_INDEXES: [UnitIndex; 3] = [
        index_units(Metric),
        index_units(Imperial),
        index_units(USCustomary),
    ];
}

pub fn all_units() -> impl Iterator<Item = &'static MeasurementUnit> {
    ALL_UNITS.iter().copied()
}

pub fn find_by_id(id: UnitId) -> &'static MeasurementUnit {
    match id {
        UnitId::Gram => &GRAM,
        UnitId::Kilogram => &KILOGRAM,
        UnitId::Ounce => &OUNCE,
        UnitId::Pound => &POUND,
        UnitId::Millilitre => &MILLILITRE,
        UnitId::Centilitre => &CENTILITRE,
        UnitId::Litre => &LITRE,
        UnitId::MetricTeaspoon => &METRIC_TEASPOON,
        UnitId::MetricTablespoon => &METRIC_TABLESPOON,
        UnitId::UsTeaspoon => &US_TEASPOON,
        UnitId::UsTablespoon => &US_TABLESPOON,
        UnitId::FluidOunce => &FLUID_OUNCE,
        UnitId::UsCup => &US_CUP,
        UnitId::MetricCup => &METRIC_CUP,
        UnitId::UsPint => &US_PINT,
        UnitId::UsQuart => &US_QUART,
        UnitId::UsGallon => &US_GALLON,
        UnitId::Millimetre => &MILLIMETRE,
        UnitId::Centimetre => &CENTIMETRE,
        UnitId::Inch => &INCH,
    }
}

/// Smallest unit of a type, used as the common ground when changing systems
pub fn smallest_unit(unit_type: UnitType) -> &'static MeasurementUnit {
    match unit_type {
        UnitType::Weight => &GRAM,
        UnitType::Volume => &MILLILITRE,
        UnitType::Length => &MILLIMETRE,
    }
}

fn lookup(name: &str) -> Option<&'static MeasurementUnit> {
    UNIT_INDEXES.iter().find_map(|index| index.get(name).copied())
}

/// Find a unit named in a recipe template
///
/// Names are matched against symbols, singular and plural names and known alternative
/// spellings. Recipes are written metric-first, so ambiguous names such as "tsp" or "cup"
/// resolve to their metric variant. Unknown names produce a passthrough unit that renders
/// the name as written.
pub fn find_unit(name: &str) -> MeasurementUnit {
    let trimmed = name.trim();
    lookup(trimmed)
        .or_else(|| lookup(&trimmed.to_lowercase()))
        .cloned()
        .unwrap_or_else(|| MeasurementUnit::passthrough(name))
}
