//! Game catalogue domain module.

mod aggregate;
mod errors;

pub use aggregate::Game;
pub use errors::GameError;
