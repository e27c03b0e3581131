//! Reconcile two CSV exports and print the report as JSON

use reconciliation_core::{CsvImporter, ReconciliationEngine, TransactionSource};

const BANK_CSV: &str = "\
Date,Description,Amount
2023-10-01,Transfer from A,\"5,000.00\"
2023-10-02,Bank charge,-25.00
2023-10-05,Customer B,1200.00
";

const BOOK_CSV: &str = "\
Date,Detail,Total
2023-10-01,Receive A,5000.00
2023-10-03,Receive B,1200.00
2023-10-09,Cheque 1001,-800.00
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Files may also be passed on the command line: <bank.csv> <book.csv>
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (bank_csv, book_csv) = match args.as_slice() {
        [bank, book] => (std::fs::read_to_string(bank)?, std::fs::read_to_string(book)?),
        _ => (BANK_CSV.to_string(), BOOK_CSV.to_string()),
    };

    let importer = CsvImporter::new();
    let bank = importer.parse(&bank_csv, TransactionSource::Bank)?;
    let book = importer.parse(&book_csv, TransactionSource::Book)?;

    let report = ReconciliationEngine::new().reconcile_checked(&bank, &book)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
