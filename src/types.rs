//! Core types and data structures for the reconciliation system

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which feed a transaction was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionSource {
    /// Bank statement - the external source of truth
    Bank,
    /// Internal ledger / general ledger being reconciled against the bank
    Book,
}

impl fmt::Display for TransactionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionSource::Bank => write!(f, "BANK"),
            TransactionSource::Book => write!(f, "BOOK"),
        }
    }
}

/// A normalized transaction as consumed by the matching engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier, unique within its source list
    pub id: String,
    /// Date normalized to `YYYY-MM-DD` where the importer could parse it
    pub date: String,
    /// Free-text description
    pub description: String,
    /// Signed amount
    pub amount: BigDecimal,
    /// Optional reference number (cheque number, transfer reference, etc.)
    pub reference: Option<String>,
    /// Feed the transaction came from
    pub source: TransactionSource,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: String,
        date: String,
        description: String,
        amount: BigDecimal,
        source: TransactionSource,
    ) -> Self {
        Self {
            id,
            date,
            description,
            amount,
            reference: None,
            source,
        }
    }

    /// Create a bank-side transaction
    pub fn bank(id: String, date: String, description: String, amount: BigDecimal) -> Self {
        Self::new(id, date, description, amount, TransactionSource::Bank)
    }

    /// Create a book-side transaction
    pub fn book(id: String, date: String, description: String, amount: BigDecimal) -> Self {
        Self::new(id, date, description, amount, TransactionSource::Book)
    }

    /// Attach a reference number
    pub fn with_reference(mut self, reference: String) -> Self {
        self.reference = Some(reference);
        self
    }
}

/// Classification of a reconciliation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchStatus {
    /// Same date and same amount on both sides
    Matched,
    /// Paired, but date or amount differs within tolerance
    Potential,
    /// No counterpart found on the other side
    Unmatched,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Matched => write!(f, "MATCHED"),
            MatchStatus::Potential => write!(f, "POTENTIAL"),
            MatchStatus::Unmatched => write!(f, "UNMATCHED"),
        }
    }
}

/// The pairing passes, in the order the engine runs them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingPass {
    /// Exact amount and exact date
    Exact,
    /// Exact amount, dates within the configured window
    DateWindow,
    /// Exact date, amounts within the configured tolerance
    AmountTolerance,
}

impl PairingPass {
    /// All pairing passes in execution order
    pub const ORDER: [PairingPass; 3] = [
        PairingPass::Exact,
        PairingPass::DateWindow,
        PairingPass::AmountTolerance,
    ];

    /// Status assigned to pairs produced by this pass
    pub fn status(&self) -> MatchStatus {
        match self {
            PairingPass::Exact => MatchStatus::Matched,
            PairingPass::DateWindow | PairingPass::AmountTolerance => MatchStatus::Potential,
        }
    }

    /// Confidence assigned to pairs produced by this pass
    pub fn confidence(&self) -> u8 {
        match self {
            PairingPass::Exact => 100,
            PairingPass::DateWindow => 80,
            PairingPass::AmountTolerance => 60,
        }
    }
}

/// Confidence of a residual (unmatched) result
pub const UNMATCHED_CONFIDENCE: u8 = 0;

/// The transaction side(s) of a result. At least one side is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchSides {
    Paired { bank: Transaction, book: Transaction },
    BankOnly { bank: Transaction },
    BookOnly { book: Transaction },
}

/// One row of the reconciliation output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Identifier derived from the transaction id(s)
    pub id: String,
    /// Bank and/or book transaction
    pub sides: MatchSides,
    /// Classification, fixed at creation
    pub status: MatchStatus,
    /// 100, 80, 60 or 0 depending on the producing pass
    pub confidence: u8,
    /// Human-readable rationale
    pub note: String,
    /// Free-text explanation from the suggestion provider, if requested
    pub ai_suggestion: Option<String>,
}

impl MatchResult {
    /// Create a result for a pair claimed by `pass`
    pub fn paired(pass: PairingPass, bank: Transaction, book: Transaction, note: String) -> Self {
        Self {
            id: format!("match-{}-{}", bank.id, book.id),
            sides: MatchSides::Paired { bank, book },
            status: pass.status(),
            confidence: pass.confidence(),
            note,
            ai_suggestion: None,
        }
    }

    /// Create a result for a bank transaction with no book counterpart
    pub fn bank_only(bank: Transaction, note: String) -> Self {
        Self {
            id: format!("unmatched-bank-{}", bank.id),
            sides: MatchSides::BankOnly { bank },
            status: MatchStatus::Unmatched,
            confidence: UNMATCHED_CONFIDENCE,
            note,
            ai_suggestion: None,
        }
    }

    /// Create a result for a book transaction with no bank counterpart
    pub fn book_only(book: Transaction, note: String) -> Self {
        Self {
            id: format!("unmatched-book-{}", book.id),
            sides: MatchSides::BookOnly { book },
            status: MatchStatus::Unmatched,
            confidence: UNMATCHED_CONFIDENCE,
            note,
            ai_suggestion: None,
        }
    }

    /// Bank side, if present
    pub fn bank_tx(&self) -> Option<&Transaction> {
        match &self.sides {
            MatchSides::Paired { bank, .. } | MatchSides::BankOnly { bank } => Some(bank),
            MatchSides::BookOnly { .. } => None,
        }
    }

    /// Book side, if present
    pub fn book_tx(&self) -> Option<&Transaction> {
        match &self.sides {
            MatchSides::Paired { book, .. } | MatchSides::BookOnly { book } => Some(book),
            MatchSides::BankOnly { .. } => None,
        }
    }
}

/// Reconciliation statistics derived from a result set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    /// Number of bank transactions supplied
    pub total_bank: usize,
    /// Number of book transactions supplied
    pub total_book: usize,
    /// Results with status `Matched`
    pub matched_count: usize,
    /// Results with status `Potential`
    pub potential_count: usize,
    /// `Unmatched` results carrying a bank transaction
    pub unmatched_bank_count: usize,
    /// `Unmatched` results carrying a book transaction
    pub unmatched_book_count: usize,
}

impl ReconciliationSummary {
    /// Counts per display category, in chart order
    pub fn status_breakdown(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("Matched", self.matched_count),
            ("Potential", self.potential_count),
            ("Unmatched (Bank)", self.unmatched_bank_count),
            ("Unmatched (Book)", self.unmatched_book_count),
        ]
    }
}

/// Output of one reconciliation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Results in assembly order
    pub results: Vec<MatchResult>,
    /// Statistics over `results`
    pub summary: ReconciliationSummary,
}

impl ReconciliationReport {
    /// Results with the given status, or all results when `status` is `None`
    pub fn filter(&self, status: Option<MatchStatus>) -> Vec<&MatchResult> {
        self.results
            .iter()
            .filter(|r| status.is_none_or(|s| r.status == s))
            .collect()
    }

    /// Look up a result by id
    pub fn find(&self, id: &str) -> Option<&MatchResult> {
        self.results.iter().find(|r| r.id == id)
    }
}

/// Errors that can occur around a reconciliation run
#[derive(Debug, thiserror::Error)]
pub enum ReconciliationError {
    #[error("Empty input: {0}")]
    EmptyInput(String),
    #[error("Missing {column} column in {feed} data")]
    MissingColumn {
        feed: TransactionSource,
        column: String,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Suggestion error: {0}")]
    Suggestion(String),
}

/// Result type for reconciliation operations
pub type ReconciliationResult<T> = Result<T, ReconciliationError>;
