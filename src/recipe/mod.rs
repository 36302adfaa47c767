pub mod models;
pub mod scale;

#[cfg(test)]
mod tests;

pub use models::*;
pub use scale::*;
