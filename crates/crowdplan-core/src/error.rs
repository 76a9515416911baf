//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    /// A form was submitted while its validator still reports errors.
    #[error("FORM/INCOMPLETE: {form} has {open} unresolved field(s)")]
    Incomplete { form: String, open: usize },

    /// A record was submitted for a step that is not the current one.
    #[error("WIZARD/ORDER: expected {expected}, got {got}")]
    OutOfOrder { expected: String, got: String },

    /// Advance attempted after the last step.
    #[error("WIZARD/DONE: the wizard has already finished")]
    AlreadyFinished,
}
