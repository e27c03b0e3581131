//! # Reconciliation Core
//!
//! Bank-to-book transaction reconciliation: pairs records from a bank
//! statement feed with records from an internal ledger feed, grades each pair,
//! and reports what could not be matched.
//!
//! ## Features
//!
//! - **Multi-pass matching**: exact, date-window, and amount-tolerance passes
//!   with claim-once semantics, followed by residual collection
//! - **Deterministic output**: greedy first-match pairing in input order
//! - **Summary statistics**: matched, potential, and unmatched counts per side
//! - **CSV ingestion**: header-keyword column detection and date/amount normalization
//! - **Mismatch suggestions**: provider abstraction for explaining non-matched items
//!
//! ## Quick Start
//!
//! ```rust
//! use reconciliation_core::{MatchStatus, ReconciliationEngine, Transaction};
//! use bigdecimal::BigDecimal;
//!
//! let bank = vec![Transaction::bank(
//!     "b1".to_string(),
//!     "2023-10-01".to_string(),
//!     "Transfer from A".to_string(),
//!     BigDecimal::from(5000),
//! )];
//! let book = vec![Transaction::book(
//!     "k1".to_string(),
//!     "2023-10-01".to_string(),
//!     "Receive A".to_string(),
//!     BigDecimal::from(5000),
//! )];
//!
//! let report = ReconciliationEngine::new().reconcile(&bank, &book);
//! assert_eq!(report.results[0].status, MatchStatus::Matched);
//! assert_eq!(report.summary.matched_count, 1);
//! ```

pub mod config;
pub mod ingest;
pub mod reconciliation;
pub mod suggestion;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use ingest::{CsvImporter, IngestConfig};
pub use reconciliation::*;
pub use suggestion::*;
pub use traits::*;
pub use types::*;
