pub mod models;
pub mod parser;


pub use models::*;
pub use parser::*;
