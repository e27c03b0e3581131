//! CSV importer with header-keyword column detection

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate};
use std::str::FromStr;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::ingest::IngestConfig;
use crate::types::*;

/// Date layouts tried, in order, when normalizing a date cell
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %b %Y", "%b %d, %Y"];

/// Largest decimal exponent, in either direction, accepted in an amount cell
pub const MAX_AMOUNT_EXPONENT: i64 = 18;

/// Parses bank or book CSV exports into transactions
#[derive(Debug, Clone, Default)]
pub struct CsvImporter {
    config: IngestConfig,
}

impl CsvImporter {
    /// Create an importer with the default header keywords
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an importer with custom header keywords
    pub fn with_config(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Parse CSV text from the given feed
    ///
    /// Rows that are shorter than the header or whose amount does not parse
    /// are skipped. Dates that match no known layout are kept verbatim.
    pub fn parse(
        &self,
        content: &str,
        source: TransactionSource,
    ) -> ReconciliationResult<Vec<Transaction>> {
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.is_empty() {
            return Err(ReconciliationError::EmptyInput(format!(
                "{source} file has no header row"
            )));
        }
        let cleaned = lines.join("\n");

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(cleaned.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let date_idx = find_column(&headers, &self.config.date_keywords).ok_or_else(|| {
            ReconciliationError::MissingColumn {
                feed: source,
                column: "date".to_string(),
            }
        })?;
        let amount_idx = find_column(&headers, &self.config.amount_keywords).ok_or_else(|| {
            ReconciliationError::MissingColumn {
                feed: source,
                column: "amount".to_string(),
            }
        })?;
        let description_idx = find_column(&headers, &self.config.description_keywords);

        let mut transactions = Vec::new();

        for (index, record) in reader.records().enumerate() {
            let record = record?;
            let row = index + 1;

            if record.len() < headers.len() {
                warn!(%source, row, fields = record.len(), "skipping short row");
                continue;
            }

            let raw_amount = record.get(amount_idx).unwrap_or("");
            let Some(amount) = parse_amount(raw_amount) else {
                warn!(%source, row, value = raw_amount, "skipping row with unparsable amount");
                continue;
            };

            let date = normalize_date(record.get(date_idx).unwrap_or(""));
            let description = match description_idx {
                Some(idx) => record.get(idx).unwrap_or("").replace('"', "").trim().to_string(),
                None => self.config.default_description.clone(),
            };

            transactions.push(Transaction::new(
                format!("{source}-{row}-{}", id_suffix()),
                date,
                description,
                amount,
                source,
            ));
        }

        debug!(%source, count = transactions.len(), "parsed transactions");
        Ok(transactions)
    }
}

fn find_column(headers: &[String], keywords: &[String]) -> Option<usize> {
    headers.iter().position(|header| {
        keywords
            .iter()
            .any(|keyword| header.contains(keyword.to_lowercase().as_str()))
    })
}

/// Parse an amount cell, ignoring thousands separators
///
/// Cells in scientific notation whose exponent exceeds
/// [`MAX_AMOUNT_EXPONENT`] are rejected: comparing such a value against an
/// ordinary amount would rescale it to millions of digits.
pub fn parse_amount(raw: &str) -> Option<BigDecimal> {
    let cleaned = raw.replace(',', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    let amount = BigDecimal::from_str(cleaned).ok()?;
    let (_, exponent) = amount.as_bigint_and_exponent();
    if exponent.abs() > MAX_AMOUNT_EXPONENT {
        return None;
    }
    Some(amount)
}

/// Normalize a date cell to `YYYY-MM-DD`, or return it trimmed if no layout fits
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return instant.naive_utc().date().format("%Y-%m-%d").to_string();
    }

    raw.to_string()
}

fn id_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..9].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bank_file() {
        let content = "Date,Description,Amount\n\
                       2023-10-01,Transfer from A,5000.00\n\
                       2023-10-02,\"Fee, monthly\",\"-1,250.50\"\n";

        let transactions = CsvImporter::new()
            .parse(content, TransactionSource::Bank)
            .unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].date, "2023-10-01");
        assert_eq!(transactions[0].description, "Transfer from A");
        assert_eq!(
            transactions[0].amount,
            BigDecimal::from_str("5000.00").unwrap()
        );
        assert_eq!(transactions[1].description, "Fee, monthly");
        assert_eq!(
            transactions[1].amount,
            BigDecimal::from_str("-1250.50").unwrap()
        );
        assert!(transactions
            .iter()
            .all(|t| t.source == TransactionSource::Bank));
    }

    #[test]
    fn test_ids_carry_source_and_row() {
        let content = "date,amount\n2023-10-01,1\n2023-10-02,2\n";
        let transactions = CsvImporter::new()
            .parse(content, TransactionSource::Book)
            .unwrap();

        assert!(transactions[0].id.starts_with("BOOK-1-"));
        assert!(transactions[1].id.starts_with("BOOK-2-"));
        assert_eq!(transactions[0].id.len(), "BOOK-1-".len() + 9);
        assert_ne!(transactions[0].id, transactions[1].id);
    }

    #[test]
    fn test_thai_headers_and_missing_description() {
        let content = "วันที่,ยอดเงิน\r\n2023-10-01,300\r\n";
        let transactions = CsvImporter::new()
            .parse(content, TransactionSource::Book)
            .unwrap();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].description, "No Description");
        assert_eq!(transactions[0].amount, BigDecimal::from(300));
    }

    #[test]
    fn test_book_total_header() {
        let content = "Date, Detail, Total\n2023-10-01, Receive A, 5000.00\n";
        let transactions = CsvImporter::new()
            .parse(content, TransactionSource::Book)
            .unwrap();

        assert_eq!(transactions[0].description, "Receive A");
        assert_eq!(transactions[0].amount, BigDecimal::from(5000));
    }

    #[test]
    fn test_skips_bad_rows() {
        let content = "Date,Description,Amount\n\
                       \n\
                       2023-10-01,short\n\
                       2023-10-02,Unknown,n/a\n\
                       2023-10-03,Good,10\n";
        let transactions = CsvImporter::new()
            .parse(content, TransactionSource::Bank)
            .unwrap();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].description, "Good");
        // row numbers count data rows after blank lines are dropped
        assert!(transactions[0].id.starts_with("BANK-3-"));
    }

    #[test]
    fn test_missing_amount_column() {
        let result = CsvImporter::new().parse("Date,Memo\n2023-10-01,x\n", TransactionSource::Bank);
        match result {
            Err(ReconciliationError::MissingColumn { feed, column }) => {
                assert_eq!(feed, TransactionSource::Bank);
                assert_eq!(column, "amount");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        let result = CsvImporter::new().parse("\n  \n", TransactionSource::Book);
        assert!(matches!(result, Err(ReconciliationError::EmptyInput(_))));
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date(" 2023-10-01 "), "2023-10-01");
        assert_eq!(normalize_date("2023/10/01"), "2023-10-01");
        assert_eq!(normalize_date("10/01/2023"), "2023-10-01");
        assert_eq!(normalize_date("1 Oct 2023"), "2023-10-01");
        assert_eq!(normalize_date("Oct 1, 2023"), "2023-10-01");
        assert_eq!(normalize_date("2023-10-01T23:30:00-02:00"), "2023-10-02");
        assert_eq!(normalize_date("end of month"), "end of month");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,000.25"), BigDecimal::from_str("1000.25").ok());
        assert_eq!(parse_amount(" -42 "), Some(BigDecimal::from(-42)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_parse_amount_rejects_extreme_exponents() {
        assert_eq!(parse_amount("1e-200000000"), None);
        assert_eq!(parse_amount("1e200000000"), None);
        assert_eq!(parse_amount("1.5e3"), Some(BigDecimal::from(1500)));
        assert_eq!(
            parse_amount("0.000000000000000001"),
            BigDecimal::from_str("1e-18").ok()
        );
    }

    #[test]
    fn test_skips_row_with_extreme_exponent() {
        let content = "Date,Description,Amount
                       2023-10-01,Tiny,1e-200000000
                       2023-10-01,Normal,5000
";
        let transactions = CsvImporter::new()
            .parse(content, TransactionSource::Bank)
            .unwrap();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].description, "Normal");
    }
}
