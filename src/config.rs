//! Matching thresholds

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Tunable thresholds for the fuzzy pairing passes
///
/// Confidence tiers are fixed per pass and are not part of the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Maximum day difference (inclusive) accepted by the date-window pass
    pub date_window_days: i64,
    /// Relative amount difference (exclusive) accepted by the amount-tolerance pass,
    /// measured against the bank amount
    pub amount_tolerance: BigDecimal,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            date_window_days: 3,
            amount_tolerance: BigDecimal::from(5) / BigDecimal::from(100),
        }
    }
}

impl MatchConfig {
    /// Validate that the thresholds are usable
    pub fn validate(&self) -> ReconciliationResult<()> {
        if self.date_window_days < 0 {
            return Err(ReconciliationError::InvalidConfig(format!(
                "date window cannot be negative: {}",
                self.date_window_days
            )));
        }

        if self.amount_tolerance <= BigDecimal::from(0)
            || self.amount_tolerance > BigDecimal::from(1)
        {
            return Err(ReconciliationError::InvalidConfig(format!(
                "amount tolerance must be in (0, 1]: {}",
                self.amount_tolerance
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_thresholds() {
        let config = MatchConfig::default();
        assert_eq!(config.date_window_days, 3);
        assert_eq!(
            config.amount_tolerance,
            BigDecimal::from_str("0.05").unwrap()
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_window() {
        let config = MatchConfig {
            date_window_days: -1,
            ..MatchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ReconciliationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_tolerance() {
        for raw in ["0", "-0.01", "1.5"] {
            let config = MatchConfig {
                amount_tolerance: BigDecimal::from_str(raw).unwrap(),
                ..MatchConfig::default()
            };
            assert!(config.validate().is_err(), "tolerance {raw} accepted");
        }
    }
}
