//! Budget classification

use crate::schemas::BudgetTier;

/// Upper bound (inclusive) of the low tier
pub const LOW_BUDGET_CEILING: f64 = 10_000.0;

/// Upper bound (inclusive) of the medium tier
pub const MEDIUM_BUDGET_CEILING: f64 = 20_000.0;

/// Map a budget to its tier. Each tier is closed on its upper end.
pub fn classify(budget: f64) -> BudgetTier {
    if budget <= LOW_BUDGET_CEILING {
        BudgetTier::Low
    } else if budget <= MEDIUM_BUDGET_CEILING {
        BudgetTier::Medium
    } else {
        BudgetTier::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(10000.0), BudgetTier::Low);
        assert_eq!(classify(10001.0), BudgetTier::Medium);
        assert_eq!(classify(20000.0), BudgetTier::Medium);
        assert_eq!(classify(20001.0), BudgetTier::High);
    }

    #[test]
    fn test_classify_fractional_values() {
        assert_eq!(classify(0.0), BudgetTier::Low);
        assert_eq!(classify(10000.01), BudgetTier::Medium);
        assert_eq!(classify(20000.5), BudgetTier::High);
    }
}
