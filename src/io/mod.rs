pub mod backend;
pub mod submission;

pub use backend::{BackendClient, SubmitError, GENERIC_SUBMIT_ERROR};
pub use submission::{SubmitOutcome, Submitter};
