//! Per-run record of which transactions have been consumed by a pass

use std::collections::HashSet;

/// Claimed transaction ids, one set per source
///
/// A fresh `ClaimSet` is created for every run and threaded through each pass
/// by mutable reference, so pass `n` sees every claim made by passes `1..n`.
#[derive(Debug, Clone, Default)]
pub struct ClaimSet {
    bank: HashSet<String>,
    book: HashSet<String>,
}

impl ClaimSet {
    /// Create an empty claim set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a bank transaction has been claimed
    pub fn is_bank_claimed(&self, id: &str) -> bool {
        self.bank.contains(id)
    }

    /// Whether a book transaction has been claimed
    pub fn is_book_claimed(&self, id: &str) -> bool {
        self.book.contains(id)
    }

    /// Claim a bank/book pair
    pub fn claim_pair(&mut self, bank_id: &str, book_id: &str) {
        self.bank.insert(bank_id.to_string());
        self.book.insert(book_id.to_string());
    }

    /// Number of claimed bank transactions
    pub fn bank_claimed(&self) -> usize {
        self.bank.len()
    }

    /// Number of claimed book transactions
    pub fn book_claimed(&self) -> usize {
        self.book.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_pair() {
        let mut claims = ClaimSet::new();
        assert!(!claims.is_bank_claimed("b1"));

        claims.claim_pair("b1", "k1");

        assert!(claims.is_bank_claimed("b1"));
        assert!(claims.is_book_claimed("k1"));
        // the sets are independent
        assert!(!claims.is_book_claimed("b1"));
        assert!(!claims.is_bank_claimed("k1"));
        assert_eq!(claims.bank_claimed(), 1);
        assert_eq!(claims.book_claimed(), 1);
    }
}
