pub mod error;
pub mod guard;
pub mod progress;
pub mod record;
pub mod workflow;

pub use error::{DeliveryError, SubmitError};
pub use record::{FieldEdit, Importance, SubmissionRecord, TextField};
pub use workflow::{Delivery, SubmissionOutcome, SubmissionWorkflow};
