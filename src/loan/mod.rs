pub mod emi;
pub mod schedule;

pub use emi::{compute_emi, LoanQuote, LoanTerms};
pub use schedule::{Installment, InstallmentSchedule};
