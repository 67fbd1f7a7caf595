//! Cross-set forwarding.
//!
//! `forward` re-expresses an outcome over one declared error set as an
//! outcome over another, remapping each error once and re-validating
//! membership in the destination set. The destination set is a hard upper
//! bound on what a forwarding function may return, checked at every
//! boundary, not just at the origin.

use crate::contract::{render_errors, violate, ContractViolation};
use crate::error::ErrorValue;
use crate::outcome::{Outcome, State};
use crate::set::{describe, ErrorSet};

/// Handler pair for [`Outcome::forward`].
///
/// Both handlers are optional at construction; `forward` enforces which are
/// required for the state it encounters.
pub struct Forward<T, U> {
    success: Option<Box<dyn FnOnce(T) -> U>>,
    failure: Option<Box<dyn FnMut(ErrorValue) -> ErrorValue>>,
}

impl<T, U> Forward<T, U> {
    /// A handler pair with neither handler set.
    pub fn new() -> Self {
        Self {
            success: None,
            failure: None,
        }
    }

    /// Set the success transform.
    pub fn on_success(mut self, f: impl FnOnce(T) -> U + 'static) -> Self {
        self.success = Some(Box::new(f));
        self
    }

    /// Set the per-error remap, applied to each error in original order.
    pub fn on_failure(mut self, f: impl FnMut(ErrorValue) -> ErrorValue + 'static) -> Self {
        self.failure = Some(Box::new(f));
        self
    }
}

impl<T, U> Default for Forward<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: ErrorSet> Outcome<T, S> {
    /// Re-express this outcome over the declared set `N`.
    ///
    /// On success the success handler produces the new value; the failure
    /// handler and `N`'s membership test are never touched. On failure the
    /// failure handler remaps each error in original order, and every mapped
    /// error must be a member of `N`.
    ///
    /// Fatal when no handler is supplied, when the populated arm has no
    /// matching handler, or when a remapped error is outside `N`.
    #[track_caller]
    pub fn forward<U, N: ErrorSet>(self, handlers: Forward<T, U>) -> Outcome<U, N> {
        let Forward {
            success,
            mut failure,
        } = handlers;
        if success.is_none() && failure.is_none() {
            violate(ContractViolation::MissingHandlers);
        }
        match self.into_state() {
            State::Success(value) => {
                let Some(success) = success else {
                    violate(ContractViolation::MissingSuccessHandler);
                };
                Outcome::success(success(value))
            }
            State::Failure(errors) => {
                let Some(failure) = failure.as_mut() else {
                    violate(ContractViolation::MissingFailureHandler);
                };
                let mapped: Vec<ErrorValue> = errors.into_iter().map(failure).collect();
                let leaked: Vec<&ErrorValue> =
                    mapped.iter().filter(|err| !N::is_member(err)).collect();
                if !leaked.is_empty() {
                    violate(ContractViolation::ForwardLeak {
                        errors: render_errors(leaked),
                        set: describe::<N>(),
                    });
                }
                Outcome::from_state(State::Failure(mapped))
            }
        }
    }
}
