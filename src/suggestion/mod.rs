//! Mismatch explanations from an external suggestion provider
//!
//! The matching engine never depends on this module. Callers that want
//! explanations build a [`SuggestionRequest`] per non-matched result and hand
//! it to a [`SuggestionProvider`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::traits::SuggestionProvider;
use crate::types::*;

/// Shown when the provider answers with an empty string
pub const EMPTY_SUGGESTION: &str = "Unable to analyze this item";

/// Shown when the provider call fails
pub const FAILED_SUGGESTION: &str = "Could not reach the suggestion service";

/// What kind of discrepancy a request describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// On the bank statement, missing from the books
    BankOnly,
    /// In the books, missing from the bank statement
    BookOnly,
    /// Paired, but date or amount differs
    Discrepancy,
}

/// A request for an explanation of one result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// Id of the result being explained
    pub result_id: String,
    /// Kind of discrepancy
    pub kind: SuggestionKind,
    /// Rendered prompt text
    pub prompt: String,
}

impl SuggestionRequest {
    /// Build a request for a result; `None` for exact matches
    pub fn from_result(result: &MatchResult) -> Option<Self> {
        if result.status == MatchStatus::Matched {
            return None;
        }

        let (kind, prompt) = match &result.sides {
            MatchSides::BankOnly { bank } => (
                SuggestionKind::BankOnly,
                format!(
                    "You are an accounting expert. This item appears on the bank statement \
                     but is not recorded in the books (general ledger).\n\n\
                     Bank details:\n\
                     - Date: {}\n\
                     - Description: {}\n\
                     - Amount: {}\n\n\
                     Explain the likely causes (for example an unrecorded bank fee, interest \
                     received, or a returned cheque) and briefly suggest the correcting entry.",
                    bank.date, bank.description, bank.amount
                ),
            ),
            MatchSides::BookOnly { book } => (
                SuggestionKind::BookOnly,
                format!(
                    "You are an accounting expert. This item is recorded in the books \
                     (general ledger) but does not appear on the bank statement.\n\n\
                     Book details:\n\
                     - Date: {}\n\
                     - Description: {}\n\
                     - Amount: {}\n\n\
                     Explain the likely causes (for example an outstanding cheque, a wrong \
                     posting date, or a duplicate entry) and briefly suggest an adjustment.",
                    book.date, book.description, book.amount
                ),
            ),
            MatchSides::Paired { bank, book } => (
                SuggestionKind::Discrepancy,
                format!(
                    "You are an accounting expert. These items were paired but do not agree \
                     exactly (potential match).\n\n\
                     Bank: {}, {}, {}\n\
                     Book: {}, {}, {}\n\n\
                     Analyze the difference and suggest how the book entry should be adjusted \
                     to agree with the bank.",
                    bank.date,
                    bank.description,
                    bank.amount,
                    book.date,
                    book.description,
                    book.amount
                ),
            ),
        };

        Some(Self {
            result_id: result.id.clone(),
            kind,
            prompt,
        })
    }
}

/// Ask the provider to explain every non-matched result in the report
///
/// Provider failures are logged and replaced by a fixed message so one bad
/// call never loses the rest of the batch. Returns the number of results
/// annotated.
pub async fn annotate_suggestions(
    report: &mut ReconciliationReport,
    provider: &dyn SuggestionProvider,
) -> usize {
    let mut annotated = 0;

    for result in report.results.iter_mut() {
        let Some(request) = SuggestionRequest::from_result(result) else {
            continue;
        };

        let suggestion = match provider.suggest(&request).await {
            Ok(text) if text.trim().is_empty() => EMPTY_SUGGESTION.to_string(),
            Ok(text) => text,
            Err(e) => {
                warn!(result_id = %request.result_id, error = %e, "suggestion request failed");
                FAILED_SUGGESTION.to_string()
            }
        };

        result.ai_suggestion = Some(suggestion);
        annotated += 1;
    }

    annotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn bank() -> Transaction {
        Transaction::bank(
            "b1".into(),
            "2023-10-01".into(),
            "Bank fee".into(),
            BigDecimal::from(-150),
        )
    }

    fn book() -> Transaction {
        Transaction::book(
            "k1".into(),
            "2023-10-02".into(),
            "Cheque 1001".into(),
            BigDecimal::from(-150),
        )
    }

    #[test]
    fn test_no_request_for_exact_match() {
        let result = MatchResult::paired(PairingPass::Exact, bank(), book(), "exact".into());
        assert!(SuggestionRequest::from_result(&result).is_none());
    }

    #[test]
    fn test_bank_only_prompt() {
        let result = MatchResult::bank_only(bank(), "none".into());
        let request = SuggestionRequest::from_result(&result).unwrap();

        assert_eq!(request.kind, SuggestionKind::BankOnly);
        assert_eq!(request.result_id, "unmatched-bank-b1");
        assert!(request.prompt.contains("- Date: 2023-10-01"));
        assert!(request.prompt.contains("- Description: Bank fee"));
        assert!(request.prompt.contains("- Amount: -150"));
    }

    #[test]
    fn test_discrepancy_prompt_includes_both_sides() {
        let result = MatchResult::paired(PairingPass::DateWindow, bank(), book(), "window".into());
        let request = SuggestionRequest::from_result(&result).unwrap();

        assert_eq!(request.kind, SuggestionKind::Discrepancy);
        assert!(request.prompt.contains("Bank: 2023-10-01, Bank fee, -150"));
        assert!(request.prompt.contains("Book: 2023-10-02, Cheque 1001, -150"));
    }
}
