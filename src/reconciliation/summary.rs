//! Summary statistics over a result set

use crate::types::*;

/// Tally a completed result list
///
/// Totals come from the input sizes; every other counter counts results, so
/// a paired result counts once even though it consumed two transactions.
pub fn summarize(
    results: &[MatchResult],
    total_bank: usize,
    total_book: usize,
) -> ReconciliationSummary {
    let count_status = |status: MatchStatus| {
        results.iter().filter(|r| r.status == status).count()
    };

    ReconciliationSummary {
        total_bank,
        total_book,
        matched_count: count_status(MatchStatus::Matched),
        potential_count: count_status(MatchStatus::Potential),
        unmatched_bank_count: results
            .iter()
            .filter(|r| r.status == MatchStatus::Unmatched && r.bank_tx().is_some())
            .count(),
        unmatched_book_count: results
            .iter()
            .filter(|r| r.status == MatchStatus::Unmatched && r.book_tx().is_some())
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn tx(id: &str, source: TransactionSource) -> Transaction {
        Transaction::new(
            id.into(),
            "2024-01-01".into(),
            "test".into(),
            BigDecimal::from(10),
            source,
        )
    }

    #[test]
    fn test_summary_counts_results_not_inputs() {
        let results = vec![
            MatchResult::paired(
                PairingPass::Exact,
                tx("b1", TransactionSource::Bank),
                tx("k1", TransactionSource::Book),
                "exact".into(),
            ),
            MatchResult::paired(
                PairingPass::AmountTolerance,
                tx("b2", TransactionSource::Bank),
                tx("k2", TransactionSource::Book),
                "close".into(),
            ),
            MatchResult::bank_only(tx("b3", TransactionSource::Bank), "none".into()),
            MatchResult::book_only(tx("k3", TransactionSource::Book), "none".into()),
            MatchResult::book_only(tx("k4", TransactionSource::Book), "none".into()),
        ];

        let summary = summarize(&results, 3, 4);

        assert_eq!(
            summary,
            ReconciliationSummary {
                total_bank: 3,
                total_book: 4,
                matched_count: 1,
                potential_count: 1,
                unmatched_bank_count: 1,
                unmatched_book_count: 2,
            }
        );
    }

    #[test]
    fn test_summary_of_nothing() {
        assert_eq!(summarize(&[], 0, 0), ReconciliationSummary::default());
    }
}
