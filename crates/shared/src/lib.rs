pub mod config;
pub mod error;
pub mod result;

pub use error::SimError;
