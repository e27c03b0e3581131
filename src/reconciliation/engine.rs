//! Reconciliation engine that runs the passes and assembles the report

use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::reconciliation::{collect_residuals, run_pairing_pass, summarize, ClaimSet};
use crate::traits::*;
use crate::types::*;

/// Multi-pass bank-to-book matching engine
///
/// The engine holds configuration only. Every call to [`reconcile`] builds its
/// own claim set, so runs never share state and identical inputs always give
/// identical reports.
///
/// [`reconcile`]: ReconciliationEngine::reconcile
pub struct ReconciliationEngine {
    config: MatchConfig,
    validator: Box<dyn TransactionValidator>,
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconciliationEngine {
    /// Create an engine with default thresholds
    pub fn new() -> Self {
        Self {
            config: MatchConfig::default(),
            validator: Box::new(DefaultTransactionValidator),
        }
    }

    /// Create an engine with custom thresholds
    pub fn with_config(config: MatchConfig) -> ReconciliationResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            validator: Box::new(DefaultTransactionValidator),
        })
    }

    /// Replace the validator used by [`reconcile_checked`](Self::reconcile_checked)
    pub fn with_validator(mut self, validator: Box<dyn TransactionValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Current thresholds
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Reconcile a bank list against a book list
    ///
    /// Results are ordered: exact pairs, date-window pairs, amount-tolerance
    /// pairs, unmatched bank transactions, unmatched book transactions.
    pub fn reconcile(&self, bank: &[Transaction], book: &[Transaction]) -> ReconciliationReport {
        let mut claims = ClaimSet::new();
        let mut results = Vec::with_capacity(bank.len() + book.len());

        for pass in PairingPass::ORDER {
            let paired = run_pairing_pass(pass, bank, book, &mut claims, &self.config);
            debug!(
                pass = ?pass,
                paired = paired.len(),
                bank_claimed = claims.bank_claimed(),
                book_claimed = claims.book_claimed(),
                "pairing pass complete"
            );
            results.extend(paired);
        }

        results.extend(collect_residuals(bank, book, &claims));

        let summary = summarize(&results, bank.len(), book.len());
        info!(
            total_bank = summary.total_bank,
            total_book = summary.total_book,
            matched = summary.matched_count,
            potential = summary.potential_count,
            unmatched_bank = summary.unmatched_bank_count,
            unmatched_book = summary.unmatched_book_count,
            "reconciliation complete"
        );

        ReconciliationReport { results, summary }
    }

    /// Validate both lists, then reconcile them
    pub fn reconcile_checked(
        &self,
        bank: &[Transaction],
        book: &[Transaction],
    ) -> ReconciliationResult<ReconciliationReport> {
        self.validator
            .validate_transactions(bank, TransactionSource::Bank)?;
        self.validator
            .validate_transactions(book, TransactionSource::Book)?;

        Ok(self.reconcile(bank, book))
    }
}
