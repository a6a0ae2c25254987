use futures::future::LocalBoxFuture;

use super::error::{DeliveryError, SubmitError};
use super::guard::UsedEmailSet;
use super::record::SubmissionRecord;
use crate::utils::storage::KeyValueStore;

/// The external service that actually sends a finished survey.
pub trait Delivery {
    fn deliver<'a>(
        &'a self,
        record: &'a SubmissionRecord,
    ) -> LocalBoxFuture<'a, Result<(), DeliveryError>>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(SubmitError),
}

impl SubmissionOutcome {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionOutcome::Submitting)
    }

    pub fn error(&self) -> Option<&SubmitError> {
        match self {
            SubmissionOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Drives one form instance through
/// `Idle -> Submitting -> {Success, Failed}`.
pub struct SubmissionWorkflow<S> {
    used_emails: UsedEmailSet<S>,
    outcome: SubmissionOutcome,
}

impl<S: KeyValueStore> SubmissionWorkflow<S> {
    pub fn new(store: S) -> Self {
        Self {
            used_emails: UsedEmailSet::new(store),
            outcome: SubmissionOutcome::Idle,
        }
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub fn used_emails(&self) -> &UsedEmailSet<S> {
        &self.used_emails
    }

    /// Clears a previous error once the user touches a field.
    pub fn field_edited(&mut self) {
        if matches!(self.outcome, SubmissionOutcome::Failed(_)) {
            self.outcome = SubmissionOutcome::Idle;
        }
    }

    /// Checks the record and moves to `Submitting`, returning the snapshot to
    /// deliver. Rejections leave the record alone and never reach delivery.
    pub fn begin(&mut self, record: &SubmissionRecord) -> Result<SubmissionRecord, SubmitError> {
        if self.outcome.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        let rejection = match record.missing_required() {
            Some(field) => Some(SubmitError::MissingField(field)),
            None if self.used_emails.is_used(&record.email) => Some(SubmitError::EmailAlreadyUsed),
            None => None,
        };
        if let Some(e) = rejection {
            log::warn!("Submission for {} rejected: {}", record.email, e);
            self.outcome = SubmissionOutcome::Failed(e.clone());
            return Err(e);
        }
        log::info!("Submitting feedback for {}", record.email);
        self.outcome = SubmissionOutcome::Submitting;
        Ok(record.clone())
    }

    /// Applies the delivery result for a snapshot handed out by `begin`.
    pub fn complete(&mut self, snapshot: &SubmissionRecord, result: Result<(), DeliveryError>) {
        self.outcome = match result {
            Ok(()) => {
                self.used_emails.record(&snapshot.email);
                log::info!("Feedback delivered for {}", snapshot.email);
                SubmissionOutcome::Success
            }
            Err(e) => {
                log::error!("Error submitting feedback: {}", e);
                SubmissionOutcome::Failed(SubmitError::Delivery(e))
            }
        };
    }

    /// Runs a whole submit cycle, resetting `record` on success.
    pub async fn submit<D: Delivery>(
        &mut self,
        record: &mut SubmissionRecord,
        delivery: &D,
    ) -> &SubmissionOutcome {
        let snapshot = match self.begin(record) {
            Ok(snapshot) => snapshot,
            Err(_) => return &self.outcome,
        };
        let result = delivery.deliver(&snapshot).await;
        self.complete(&snapshot, result);
        if self.outcome == SubmissionOutcome::Success {
            record.reset();
        }
        &self.outcome
    }
}
