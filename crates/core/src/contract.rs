//! Contract-violation diagnostics and the fatal reporting path.
//!
//! Violations are programmer bugs, not domain outcomes. They are never
//! modeled as expected errors: the fatal path logs the rendered violation
//! and panics at the offending call site.

use crate::error::ErrorValue;
use thiserror::Error;

/// A mismatch between declared and actual outcome shape.
#[derive(Debug, Error)]
pub enum ContractViolation {
    /// A failure was constructed with zero errors.
    #[error("failure constructed with an empty error sequence")]
    EmptyFailure,

    /// A constructed failure carried errors outside the declared set.
    #[error("undeclared error(s) [{errors}] for the set {{{set}}}")]
    UndeclaredError { errors: String, set: String },

    /// Forwarding produced errors outside the destination set.
    #[error("forwarding leaked error(s) [{errors}] outside the declared set {{{set}}}")]
    ForwardLeak { errors: String, set: String },

    /// `forward` was called with neither handler.
    #[error("forward requires at least one handler")]
    MissingHandlers,

    /// `forward` was called on a successful outcome without a success handler.
    #[error("forward on a successful outcome requires a success handler")]
    MissingSuccessHandler,

    /// `forward` was called on a failed outcome without a failure handler.
    #[error("forward on a failed outcome requires a failure handler")]
    MissingFailureHandler,

    /// The success value of a failed outcome was read.
    #[error("outcome read as a value while failed: [{errors}]")]
    FailedValueAccess { errors: String },
}

/// Report a violation and abandon the calling operation.
#[track_caller]
pub(crate) fn violate(violation: ContractViolation) -> ! {
    tracing::error!(%violation, "expected-error contract violated");
    panic!("contract violation: {violation}");
}

/// Render an error sequence for a diagnostic message.
pub(crate) fn render_errors<'a>(errors: impl IntoIterator<Item = &'a ErrorValue>) -> String {
    errors
        .into_iter()
        .map(|err| format!("{err:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}
