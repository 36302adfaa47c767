use crate::units::error::UnitError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Target measuring system for rendered quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasuringSystem {
    Metric,
    Imperial,
    /// Prefers US customary volumes (cups) where the quantity allows it, Imperial otherwise
    USCustomary,
}

impl MeasuringSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasuringSystem::Metric => "Metric",
            MeasuringSystem::Imperial => "Imperial",
            MeasuringSystem::USCustomary => "USCustomary",
        }
    }
}

impl fmt::Display for MeasuringSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasuringSystem {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "metric" => Ok(MeasuringSystem::Metric),
            "imperial" => Ok(MeasuringSystem::Imperial),
            "uscustomary" | "us" => Ok(MeasuringSystem::USCustomary),
            _ => Err(UnitError::UnknownMeasuringSystem(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Weight,
    Volume,
    Length,
}

/// Stable identifier of a catalog unit
///
/// Metric and US spoons/cups share display names, so anything that needs to tell units
/// apart compares ids rather than names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum UnitId {
    Gram,
    Kilogram,
    Ounce,
    Pound,
    Millilitre,
    Centilitre,
    Litre,
    MetricTeaspoon,
    MetricTablespoon,
    UsTeaspoon,
    UsTablespoon,
    FluidOunce,
    UsCup,
    MetricCup,
    UsPint,
    UsQuart,
    UsGallon,
    Millimetre,
    Centimetre,
    Inch,
}

impl UnitId {
    /// Spoons and cups, kept human-scaled when rendering for a metric audience
    pub fn is_convenience(&self) -> bool {
        matches!(
            self,
            UnitId::MetricTeaspoon
                | UnitId::MetricTablespoon
                | UnitId::MetricCup
                | UnitId::UsTeaspoon
                | UnitId::UsTablespoon
                | UnitId::UsCup
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementUnit {
    /// None for passthrough units synthesised from an unknown name
    pub id: Option<UnitId>,
    pub singular: Cow<'static, str>,
    pub plural: Cow<'static, str>,
    pub symbol: Cow<'static, str>,
    pub symbol_plural: Cow<'static, str>,
    #[serde(skip)]
    pub aliases: &'static [&'static str],
    pub unit_type: Option<UnitType>,
    pub measuring_systems: &'static [MeasuringSystem],
    /// Size of this unit in the smallest unit of its type: g, ml or mm
    pub quantity: f32,
}

impl MeasurementUnit {
    /// Unit that renders an unknown name verbatim and is never converted
    pub fn passthrough(name: &str) -> Self {
        Self {
            id: None,
            singular: Cow::Owned(name.to_string()),
            plural: Cow::Owned(name.to_string()),
            symbol: Cow::Owned(name.to_string()),
            symbol_plural: Cow::Owned(name.to_string()),
            aliases: &[],
            unit_type: None,
            measuring_systems: &[],
            quantity: 1.0,
        }
    }

    pub fn is_passthrough(&self) -> bool {
        self.id.is_none()
    }

    pub fn belongs_to(&self, system: MeasuringSystem) -> bool {
        self.measuring_systems.contains(&system)
    }

    pub fn is(&self, id: UnitId) -> bool {
        self.id == Some(id)
    }

    pub fn display_symbol(&self, plural: bool) -> &str {
        if plural {
            &self.symbol_plural
        } else {
            &self.symbol
        }
    }

    /// Every name this unit answers to on lookup
    pub fn names(&self) -> impl Iterator<Item = &str> {
        [
            self.symbol.as_ref(),
            self.symbol_plural.as_ref(),
            self.singular.as_ref(),
            self.plural.as_ref(),
        ]
        .into_iter()
        .chain(self.aliases.iter().copied())
    }
}

/// A quantity, possibly a range, in a given unit
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Amount {
    pub min: f32,
    pub max: Option<f32>,
    /// None for unitless quantities such as "2 eggs"
    pub unit: Option<MeasurementUnit>,
    /// Prefer US customary volumes when converting to US units
    pub us_cust: bool,
}

impl Amount {
    pub fn new(min: f32, max: Option<f32>, unit: Option<MeasurementUnit>) -> Self {
        Self {
            min,
            max,
            unit,
            us_cust: false,
        }
    }

    pub fn with_us_cust(mut self, us_cust: bool) -> Self {
        self.us_cust = us_cust;
        self
    }

    /// Drops `max` when it does not describe a real range
    pub fn collapse_range(mut self) -> Self {
        if self.max == Some(self.min) {
            self.max = None;
        }
        self
    }

    /// The larger bound, used to decide on singular or plural unit names
    pub fn upper_bound(&self) -> f32 {
        self.max.map_or(self.min, |max| self.min.max(max))
    }

    pub(crate) fn map_bounds(&self, f: impl Fn(f32) -> f32) -> (f32, Option<f32>) {
        (f(self.min), self.max.map(&f))
    }
}
