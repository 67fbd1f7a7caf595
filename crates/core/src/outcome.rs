//! The outcome container.
//!
//! An [`Outcome`] holds either one success value or a non-empty sequence of
//! expected errors, constrained to the declared [`ErrorSet`]. Values are
//! immutable after construction; transforms consume and produce, never
//! mutate in place.

use crate::contract::{render_errors, violate, ContractViolation};
use crate::error::ErrorValue;
use crate::set::{describe, ErrorSet};
use std::fmt;
use std::marker::PhantomData;

/// Result of an operation whose expected failures are the declared set `S`.
pub struct Outcome<T, S: ErrorSet> {
    state: State<T>,
    set: PhantomData<fn() -> S>,
}

pub(crate) enum State<T> {
    Success(T),
    /// Invariant: non-empty, every element a member of the declared set.
    Failure(Vec<ErrorValue>),
}

impl<T, S: ErrorSet> Outcome<T, S> {
    /// A successful outcome.
    pub fn success(value: T) -> Self {
        Self::from_state(State::Success(value))
    }

    /// A failed outcome carrying a single expected error.
    ///
    /// Fatal if the error is not a member of the declared set.
    #[track_caller]
    pub fn failure(err: impl Into<ErrorValue>) -> Self {
        Self::failures(vec![err.into()])
    }

    /// A failed outcome carrying every error in `errors`, in order.
    ///
    /// Fatal if the sequence is empty or any element is not a member of the
    /// declared set; the diagnostic enumerates every offending value.
    #[track_caller]
    pub fn failures(errors: Vec<ErrorValue>) -> Self {
        if errors.is_empty() {
            violate(ContractViolation::EmptyFailure);
        }
        let undeclared: Vec<&ErrorValue> = errors.iter().filter(|err| !S::is_member(err)).collect();
        if !undeclared.is_empty() {
            violate(ContractViolation::UndeclaredError {
                errors: render_errors(undeclared),
                set: describe::<S>(),
            });
        }
        Self::from_state(State::Failure(errors))
    }

    pub(crate) fn from_state(state: State<T>) -> Self {
        Self {
            state,
            set: PhantomData,
        }
    }

    pub(crate) fn into_state(self) -> State<T> {
        self.state
    }

    /// True iff this outcome holds a success value.
    pub fn is_successful(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// True iff this outcome holds errors.
    pub fn is_failed(&self) -> bool {
        !self.is_successful()
    }

    /// The failure sequence; empty on success.
    pub fn errors(&self) -> &[ErrorValue] {
        match &self.state {
            State::Success(_) => &[],
            State::Failure(errors) => errors,
        }
    }

    /// First error of variant `V`, if any.
    pub fn find_error<V: 'static>(&self) -> Option<&V> {
        self.errors().iter().find_map(|err| err.downcast_ref::<V>())
    }

    /// Every error of variant `V`, in original order.
    pub fn find_errors<V: 'static>(&self) -> Vec<&V> {
        self.errors()
            .iter()
            .filter_map(|err| err.downcast_ref::<V>())
            .collect()
    }

    /// True iff at least one error of variant `V` is present.
    pub fn has_error<V: 'static>(&self) -> bool {
        self.find_error::<V>().is_some()
    }

    /// True iff exactly one error is present and it is of variant `V`.
    pub fn has_single_error<V: 'static>(&self) -> bool {
        match &self.state {
            State::Failure(errors) if errors.len() == 1 => errors[0].is::<V>(),
            _ => false,
        }
    }

    /// The success value.
    ///
    /// Fatal on a failed outcome; the diagnostic lists the full error
    /// sequence.
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.state {
            State::Success(value) => value,
            State::Failure(errors) => violate(ContractViolation::FailedValueAccess {
                errors: render_errors(errors),
            }),
        }
    }

    /// Consume the outcome and take the success value.
    ///
    /// Fatal on a failed outcome, as [`Outcome::value`].
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(errors) => violate(ContractViolation::FailedValueAccess {
                errors: render_errors(&errors),
            }),
        }
    }

    /// Assert success without reading the value.
    ///
    /// Fatal on a failed outcome, as [`Outcome::value`].
    #[track_caller]
    pub fn ensure_success(&self) {
        if let State::Failure(errors) = &self.state {
            violate(ContractViolation::FailedValueAccess {
                errors: render_errors(errors),
            });
        }
    }

    /// Transform the success value, leaving the declared set and any failure
    /// sequence untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, S> {
        match self.state {
            State::Success(value) => Outcome::success(f(value)),
            State::Failure(errors) => Outcome::from_state(State::Failure(errors)),
        }
    }
}

impl<T: fmt::Debug, S: ErrorSet> fmt::Debug for Outcome<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => f.debug_tuple("Success").field(value).finish(),
            State::Failure(errors) => f.debug_tuple("Failure").field(errors).finish(),
        }
    }
}
