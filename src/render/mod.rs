pub mod combine;
pub mod formatter;
pub mod renderer;
pub mod session;


pub use combine::combine_ingredients;
pub use formatter::{apply_smart_punctuation, format_amount, format_to_nearest_fraction};
pub use renderer::{render_oven_temperature, render_quantity, render_template};
pub use session::{RenderOptions, TemplateSession};
