//! Reconciliation module for matching bank statements against book records

pub mod claims;
pub mod engine;
pub mod passes;
pub mod summary;

pub use claims::*;
pub use engine::*;
pub use passes::*;
pub use summary::*;
