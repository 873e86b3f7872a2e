use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, ShowroomError};
use crate::loan::emi::{compute_emi, LoanTerms};

/// one scheduled installment in an amortization breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    pub number: u32,
    pub due_date: DateTime<Utc>,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub ending_balance: Money,
}

/// equal-installment amortization breakdown for a financed purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentSchedule {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub start_date: DateTime<Utc>,
    pub installments: Vec<Installment>,
    pub total_interest: Money,
    pub total_payment: Money,
}

impl InstallmentSchedule {
    /// generate the month-by-month breakdown
    ///
    /// Unlike `compute_emi`, a schedule has no meaningful degenerate output,
    /// so non-positive inputs are rejected.
    pub fn generate(
        principal: Money,
        annual_rate: Rate,
        term_months: i32,
        start_date: DateTime<Utc>,
    ) -> Result<Self> {
        if !principal.is_positive() {
            return Err(ShowroomError::InvalidLoanTerms {
                message: format!("principal must be positive, got {principal}"),
            });
        }
        if term_months <= 0 {
            return Err(ShowroomError::InvalidLoanTerms {
                message: format!("term must be positive, got {term_months} months"),
            });
        }
        if annual_rate.monthly_rate().is_zero_or_negative() {
            return Err(ShowroomError::InvalidLoanTerms {
                message: format!("rate must be positive, got {annual_rate}"),
            });
        }

        let terms = LoanTerms::new(principal, annual_rate, term_months);
        let emi = compute_emi(&terms).monthly_payment;
        let monthly_rate = annual_rate.monthly_rate().as_decimal();
        let term = term_months as u32;

        let mut installments = Vec::with_capacity(term as usize);
        let mut balance = principal;

        for number in 1..=term {
            let due_date = add_months(start_date, number);
            let interest_portion = Money::from_decimal(balance.as_decimal() * monthly_rate);
            let principal_portion = emi - interest_portion;
            let ending_balance = (balance - principal_portion).max(Money::ZERO);

            installments.push(Installment {
                number,
                due_date,
                beginning_balance: balance,
                payment_amount: emi,
                principal_portion,
                interest_portion,
                ending_balance,
            });

            balance = ending_balance;
        }

        // absorb residual rounding into the final installment
        if let Some(last) = installments.last_mut() {
            if last.ending_balance > Money::ZERO && last.ending_balance < Money::ONE {
                last.principal_portion += last.ending_balance;
                last.payment_amount += last.ending_balance;
                last.ending_balance = Money::ZERO;
            }
        }

        let total_interest = installments
            .iter()
            .map(|p| p.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_payment = installments
            .iter()
            .map(|p| p.payment_amount)
            .fold(Money::ZERO, |acc, x| acc + x);

        Ok(Self {
            principal,
            annual_rate,
            term_months: term,
            start_date,
            installments,
            total_interest,
            total_payment,
        })
    }

    /// get installment for a specific period (1-indexed)
    pub fn installment(&self, number: u32) -> Option<&Installment> {
        if number == 0 {
            return None;
        }
        self.installments.get((number - 1) as usize)
    }

    /// remaining balance after a given installment
    pub fn balance_after(&self, number: u32) -> Money {
        self.installment(number)
            .map(|p| p.ending_balance)
            .unwrap_or(self.principal)
    }
}

/// advance a date by whole calendar months
fn add_months(date: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    let mut result = date;
    for _ in 0..months {
        let days = days_in_month(result.year(), result.month());
        result = result + Duration::days(days as i64);
    }
    result
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn sample_schedule() -> InstallmentSchedule {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        InstallmentSchedule::generate(
            Money::from_major(960_000),
            Rate::from_percentage(dec!(7.99)),
            36,
            start,
        )
        .unwrap()
    }

    #[test]
    fn test_schedule_shape() {
        let schedule = sample_schedule();
        assert_eq!(schedule.installments.len(), 36);

        let first = &schedule.installments[0];
        assert_eq!(first.beginning_balance, Money::from_major(960_000));
        assert!(first.interest_portion.is_positive());
        assert!(first.principal_portion.is_positive());

        let last = &schedule.installments[35];
        assert!(last.ending_balance < Money::ONE);
    }

    #[test]
    fn test_totals_match_quote() {
        let schedule = sample_schedule();
        let quote = compute_emi(&LoanTerms::new(
            Money::from_major(960_000),
            Rate::from_percentage(dec!(7.99)),
            36,
        ));

        // schedule totals reconcile with the quote up to final-installment
        // rounding absorption
        assert!((schedule.total_payment - quote.total_payment).abs() < Money::ONE);
        assert!(
            (schedule.total_interest - quote.total_interest).abs() < Money::ONE
        );
    }

    #[test]
    fn test_interest_declines_each_month() {
        let schedule = sample_schedule();
        for i in 1..schedule.installments.len() {
            assert!(
                schedule.installments[i].interest_portion
                    < schedule.installments[i - 1].interest_portion
            );
        }
    }

    #[test]
    fn test_degenerate_terms_rejected() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert!(InstallmentSchedule::generate(
            Money::ZERO,
            Rate::from_percentage(dec!(8)),
            36,
            start
        )
        .is_err());
        assert!(InstallmentSchedule::generate(
            Money::from_major(100_000),
            Rate::from_percentage(dec!(8)),
            0,
            start
        )
        .is_err());
        assert!(InstallmentSchedule::generate(
            Money::from_major(100_000),
            Rate::ZERO,
            36,
            start
        )
        .is_err());
    }

    #[test]
    fn test_balance_after() {
        let schedule = sample_schedule();
        assert_eq!(
            schedule.balance_after(1),
            schedule.installments[0].ending_balance
        );
        // out-of-range installment falls back to the full principal
        assert_eq!(schedule.balance_after(99), schedule.principal);
    }

    #[test]
    fn test_installment_zero_is_before_schedule() {
        let schedule = sample_schedule();
        assert!(schedule.installment(0).is_none());
        // balance before any installment is the full principal
        assert_eq!(schedule.balance_after(0), schedule.principal);
    }
}
