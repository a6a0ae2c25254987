use thiserror::Error;

/// Failure reported by the delivery collaborator.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DeliveryError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Why a submission did not reach `Success`.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("This email has already submitted feedback.")]
    EmailAlreadyUsed,
    #[error("Please fill in the {0} field.")]
    MissingField(&'static str),
    #[error("A submission is already in progress.")]
    InFlight,
    #[error("An error occurred while submitting feedback. Please try again.")]
    Delivery(#[source] DeliveryError),
}

impl SubmitError {
    /// Errors shown next to the email input instead of as an alert.
    pub fn is_email_error(&self) -> bool {
        matches!(self, SubmitError::EmailAlreadyUsed)
    }
}

impl From<DeliveryError> for SubmitError {
    fn from(e: DeliveryError) -> Self {
        SubmitError::Delivery(e)
    }
}
