use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowroomError {
    #[error("request failed: {message}")]
    RequestFailed {
        message: String,
    },

    #[error("submission failed: {message}")]
    SubmissionFailed {
        message: String,
    },

    #[error("not on final step: current {current}, total {total}")]
    NotOnFinalStep {
        current: u32,
        total: u32,
    },

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("wizard already submitted")]
    AlreadySubmitted,

    #[error("invalid loan terms: {message}")]
    InvalidLoanTerms {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ShowroomError>;
