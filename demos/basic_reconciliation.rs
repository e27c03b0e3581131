//! Basic reconciliation example

use bigdecimal::BigDecimal;
use reconciliation_core::utils::CannedSuggestionProvider;
use reconciliation_core::{annotate_suggestions, MatchStatus, ReconciliationEngine, Transaction};
use std::str::FromStr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🏦 Reconciliation Core - Basic Example\n");

    let bank = vec![
        Transaction::bank(
            "b1".to_string(),
            "2023-10-01".to_string(),
            "Transfer from A".to_string(),
            BigDecimal::from_str("5000.00")?,
        ),
        Transaction::bank(
            "b2".to_string(),
            "2023-10-04".to_string(),
            "Customer B".to_string(),
            BigDecimal::from_str("1200.00")?,
        ),
        Transaction::bank(
            "b3".to_string(),
            "2023-10-06".to_string(),
            "Supplier C".to_string(),
            BigDecimal::from_str("-980.00")?,
        ),
        Transaction::bank(
            "b4".to_string(),
            "2023-10-31".to_string(),
            "Monthly bank fee".to_string(),
            BigDecimal::from_str("-25.00")?,
        ),
    ];

    let book = vec![
        Transaction::book(
            "k1".to_string(),
            "2023-10-01".to_string(),
            "Receive A".to_string(),
            BigDecimal::from_str("5000.00")?,
        ),
        Transaction::book(
            "k2".to_string(),
            "2023-10-02".to_string(),
            "Invoice B paid".to_string(),
            BigDecimal::from_str("1200.00")?,
        ),
        Transaction::book(
            "k3".to_string(),
            "2023-10-06".to_string(),
            "Pay supplier C".to_string(),
            BigDecimal::from_str("-1000.00")?,
        ),
        Transaction::book(
            "k4".to_string(),
            "2023-10-28".to_string(),
            "Cheque 1001".to_string(),
            BigDecimal::from_str("-450.00")?,
        )
        .with_reference("CHQ-1001".to_string()),
    ];

    let engine = ReconciliationEngine::new();
    let mut report = engine.reconcile_checked(&bank, &book)?;

    println!("📋 Results:");
    for result in &report.results {
        println!(
            "  [{:>9}] {:>3}%  {:<22} {}",
            result.status.to_string(),
            result.confidence,
            result.id,
            result.note
        );
    }
    println!();

    println!("📊 Summary:");
    println!(
        "  Bank: {} items, Book: {} items",
        report.summary.total_bank, report.summary.total_book
    );
    for (label, count) in report.summary.status_breakdown() {
        println!("  {label}: {count}");
    }
    println!();

    let provider = CannedSuggestionProvider::default();
    provider.respond(
        "unmatched-bank-b4",
        "Record the bank fee: debit bank charges, credit cash at bank.",
    );
    provider.respond(
        "unmatched-book-k4",
        "Likely an outstanding cheque; it should clear next period.",
    );
    annotate_suggestions(&mut report, &provider).await;

    println!("💡 Suggestions:");
    for result in report.filter(Some(MatchStatus::Unmatched)) {
        if let Some(suggestion) = &result.ai_suggestion {
            println!("  {}: {}", result.id, suggestion);
        }
    }

    Ok(())
}
