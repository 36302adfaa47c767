pub mod config;
pub mod density;
pub mod recipe;
pub mod render;
pub mod template;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use density::{load_density_table, load_internal_density_table, DensityError, DensityTable};
pub use recipe::{scale_and_convert_recipe, Recipe};
pub use render::{combine_ingredients, render_template, TemplateSession};
pub use template::{parse_template, ParsedTemplate, TemplateElement};
pub use units::{find_unit, Amount, MeasurementUnit, MeasuringSystem, UnitError};
