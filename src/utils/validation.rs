//! Validation utilities

use crate::reconciliation::parse_instant;
use crate::traits::*;
use crate::types::*;

/// Validate that a transaction ID is usable as a result key
pub fn validate_transaction_id(id: &str) -> ReconciliationResult<()> {
    if id.trim().is_empty() {
        return Err(ReconciliationError::Validation(
            "Transaction ID cannot be empty".to_string(),
        ));
    }

    if id.len() > 100 {
        return Err(ReconciliationError::Validation(
            "Transaction ID cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a transaction date can be placed on a calendar
pub fn validate_transaction_date(transaction: &Transaction) -> ReconciliationResult<()> {
    if parse_instant(&transaction.date).is_none() {
        return Err(ReconciliationError::Validation(format!(
            "Transaction '{}' has an unrecognized date '{}'",
            transaction.id, transaction.date
        )));
    }

    Ok(())
}

/// Stricter validator that also rejects dates the date-window pass could
/// never use
pub struct EnhancedTransactionValidator;

impl TransactionValidator for EnhancedTransactionValidator {
    fn validate_transaction(
        &self,
        transaction: &Transaction,
        expected: TransactionSource,
    ) -> ReconciliationResult<()> {
        // Basic validation
        DefaultTransactionValidator.validate_transaction(transaction, expected)?;

        validate_transaction_id(&transaction.id)?;
        validate_transaction_date(transaction)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn bank(id: &str, date: &str) -> Transaction {
        Transaction::bank(id.into(), date.into(), "test".into(), BigDecimal::from(1))
    }

    #[test]
    fn test_default_rejects_duplicates() {
        let feed = vec![bank("b1", "2024-01-01"), bank("b1", "2024-01-02")];
        let result =
            DefaultTransactionValidator.validate_transactions(&feed, TransactionSource::Bank);
        assert!(matches!(result, Err(ReconciliationError::Validation(_))));
    }

    #[test]
    fn test_default_allows_odd_dates() {
        let feed = vec![bank("b1", "sometime")];
        assert!(DefaultTransactionValidator
            .validate_transactions(&feed, TransactionSource::Bank)
            .is_ok());
    }

    #[test]
    fn test_enhanced_rejects_odd_dates() {
        let feed = vec![bank("b1", "sometime")];
        assert!(EnhancedTransactionValidator
            .validate_transactions(&feed, TransactionSource::Bank)
            .is_err());
    }

    #[test]
    fn test_transaction_id_rules() {
        assert!(validate_transaction_id("BANK-1-abc").is_ok());
        assert!(validate_transaction_id("   ").is_err());
        assert!(validate_transaction_id(&"x".repeat(101)).is_err());
    }
}
