use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// terms of a financed purchase
///
/// `term_months` is signed because a user may be mid-edit with a temporarily
/// invalid value; the degenerate cases produce a zero quote, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: i32,
}

impl LoanTerms {
    pub fn new(principal: Money, annual_rate: Rate, term_months: i32) -> Self {
        Self {
            principal,
            annual_rate,
            term_months,
        }
    }

    /// derive terms from a purchase price and down payment
    pub fn financed(price: Money, down_payment: Money, annual_rate: Rate, term_months: i32) -> Self {
        Self {
            principal: price - down_payment,
            annual_rate,
            term_months,
        }
    }
}

/// derived quote for a set of loan terms
///
/// Purely derived, recomputed on every input change, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct LoanQuote {
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
}

impl LoanQuote {
    pub const ZERO: LoanQuote = LoanQuote {
        monthly_payment: Money::ZERO,
        total_payment: Money::ZERO,
        total_interest: Money::ZERO,
    };
}

/// compute the equated monthly installment for the given terms
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1), with r the monthly rate.
/// Non-positive principal, term, or rate yields the all-zero quote.
/// No display rounding is applied; callers round for presentation.
pub fn compute_emi(terms: &LoanTerms) -> LoanQuote {
    let monthly_rate = terms.annual_rate.monthly_rate();

    if !terms.principal.is_positive()
        || terms.term_months <= 0
        || monthly_rate.is_zero_or_negative()
    {
        return LoanQuote::ZERO;
    }

    let n = terms.term_months as u32;
    let r = monthly_rate.as_decimal();

    let mut compound = Decimal::ONE;
    let base = Decimal::ONE + r;
    for _ in 0..n {
        compound *= base;
    }

    let numerator = terms.principal.as_decimal() * r * compound;
    let denominator = compound - Decimal::ONE;
    let monthly_payment = Money::from_decimal(numerator / denominator);

    let total_payment = monthly_payment * Decimal::from(n);
    let total_interest = total_payment - terms.principal;

    LoanQuote {
        monthly_payment,
        total_payment,
        total_interest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn quote(principal: i64, rate_pct: Decimal, months: i32) -> LoanQuote {
        compute_emi(&LoanTerms::new(
            Money::from_major(principal),
            Rate::from_percentage(rate_pct),
            months,
        ))
    }

    #[test]
    fn test_zero_guard() {
        assert_eq!(quote(0, dec!(7.99), 36), LoanQuote::ZERO);
        assert_eq!(quote(-50_000, dec!(7.99), 36), LoanQuote::ZERO);
        assert_eq!(quote(960_000, dec!(7.99), 0), LoanQuote::ZERO);
        assert_eq!(quote(960_000, dec!(7.99), -12), LoanQuote::ZERO);
        assert_eq!(quote(960_000, dec!(0), 36), LoanQuote::ZERO);
        assert_eq!(quote(960_000, dec!(-1), 36), LoanQuote::ZERO);
    }

    #[test]
    fn test_concrete_scenario() {
        // 9.6 lakh at 7.99% over 36 months: monthly rate 0.0799/12,
        // EMI ~= 30078.5, total ~= 1082825, interest ~= 122825
        let q = quote(960_000, dec!(7.99), 36);

        assert!((q.monthly_payment - Money::from_major(30_078)).abs() <= Money::ONE);
        assert!((q.total_payment - Money::from_major(1_082_825)).abs() <= Money::from_major(40));
        assert!((q.total_interest - Money::from_major(122_825)).abs() <= Money::from_major(40));
    }

    #[test]
    fn test_identities_exact() {
        let terms = LoanTerms::new(Money::from_major(250_000), Rate::from_percentage(dec!(9.5)), 48);
        let q = compute_emi(&terms);

        assert_eq!(q.total_payment, q.monthly_payment * dec!(48));
        assert_eq!(q.total_interest, q.total_payment - terms.principal);
    }

    #[test]
    fn test_monotonic_in_principal() {
        let small = quote(100_000, dec!(8.5), 24);
        let large = quote(100_001, dec!(8.5), 24);
        assert!(large.monthly_payment > small.monthly_payment);
    }

    #[test]
    fn test_financed_terms() {
        let terms = LoanTerms::financed(
            Money::from_major(1_000_000),
            Money::from_major(40_000),
            Rate::from_percentage(dec!(7.99)),
            36,
        );
        assert_eq!(terms.principal, Money::from_major(960_000));
    }

    #[test]
    fn test_fractional_principal() {
        let q = compute_emi(&LoanTerms::new(
            Money::from_str_exact("99999.99").unwrap(),
            Rate::from_percentage(dec!(10)),
            12,
        ));
        assert!(q.monthly_payment.is_positive());
        assert!(q.total_interest.is_positive());
    }
}
