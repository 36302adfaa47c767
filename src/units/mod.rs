// Unit catalog, conversion ladders and the scale/convert pipeline

pub mod catalog;
pub mod converter;
pub mod error;
pub mod ladder;
pub mod types;

pub use catalog::{all_units, find_by_id, find_unit, smallest_unit};
pub use converter::{convert_unit_system, scale_amount, scale_and_convert};
pub use error::UnitError;
pub use ladder::{ladder_for, Ladder, UnitConversion};
pub use types::{Amount, MeasurementUnit, MeasuringSystem, UnitId, UnitType};
