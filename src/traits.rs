//! Traits for validation and external collaborators

use async_trait::async_trait;
use std::collections::HashSet;

use crate::suggestion::SuggestionRequest;
use crate::types::*;

/// Trait for implementing input validation rules run before reconciliation
pub trait TransactionValidator: Send + Sync {
    /// Validate a single transaction read from the `expected` feed
    fn validate_transaction(
        &self,
        transaction: &Transaction,
        expected: TransactionSource,
    ) -> ReconciliationResult<()>;

    /// Validate a whole feed
    fn validate_transactions(
        &self,
        transactions: &[Transaction],
        expected: TransactionSource,
    ) -> ReconciliationResult<()> {
        let mut seen = HashSet::new();
        for transaction in transactions {
            self.validate_transaction(transaction, expected)?;
            if !seen.insert(transaction.id.as_str()) {
                return Err(ReconciliationError::Validation(format!(
                    "Duplicate transaction id '{}' in {} data",
                    transaction.id, expected
                )));
            }
        }
        Ok(())
    }
}

/// Default validator: non-empty ids, unique within the feed, and the
/// transaction's source matches the feed it was supplied in
pub struct DefaultTransactionValidator;

impl TransactionValidator for DefaultTransactionValidator {
    fn validate_transaction(
        &self,
        transaction: &Transaction,
        expected: TransactionSource,
    ) -> ReconciliationResult<()> {
        if transaction.id.trim().is_empty() {
            return Err(ReconciliationError::Validation(
                "Transaction ID cannot be empty".to_string(),
            ));
        }

        if transaction.source != expected {
            return Err(ReconciliationError::Validation(format!(
                "Transaction '{}' is tagged {} but was supplied as {} data",
                transaction.id, transaction.source, expected
            )));
        }

        Ok(())
    }
}

/// Source of free-text explanations for results that did not match exactly
///
/// Implementations typically call a generative text service. The returned
/// string is treated as opaque display text.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Produce an explanation for the given request
    async fn suggest(&self, request: &SuggestionRequest) -> ReconciliationResult<String>;
}
