pub mod error;
pub mod table;

pub use error::DensityError;
pub use table::{load_density_table, load_internal_density_table, DensityEntry, DensityTable};
