//! Utility modules

pub mod canned_suggestions;
pub mod validation;

pub use canned_suggestions::*;
pub use validation::*;
