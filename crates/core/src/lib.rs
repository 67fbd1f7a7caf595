//! Typed expected-error results.
//!
//! An operation declares, in its own return type, the closed set of expected
//! failure variants it may produce. Callers branch on variant identity
//! instead of catching blanket errors, and layers re-declare their error set
//! with [`Outcome::forward`], which re-validates membership at every
//! boundary. Unexpected failures stay on the panic path; they are never
//! modeled as values.
//!
//! ```
//! use outcome_core::{Forward, Outcome};
//! use thiserror::Error;
//!
//! #[derive(Debug, Error)]
//! #[error("unauthorized")]
//! struct Unauthorized;
//!
//! #[derive(Debug, Error)]
//! #[error("validation failed")]
//! struct ValidationError;
//!
//! #[derive(Debug, Error)]
//! #[error("invalid credentials")]
//! struct InvalidCredentials;
//!
//! #[derive(Debug, Error)]
//! #[error("email not confirmed")]
//! struct EmailNotConfirmed;
//!
//! type TransportErrors = (Unauthorized, ValidationError);
//! type SignInErrors = (InvalidCredentials, EmailNotConfirmed);
//!
//! fn call_sign_in(authorized: bool) -> Outcome<String, TransportErrors> {
//!     if authorized {
//!         Outcome::success("session-1".to_string())
//!     } else {
//!         Outcome::failure(Unauthorized)
//!     }
//! }
//!
//! fn sign_in(authorized: bool) -> Outcome<String, SignInErrors> {
//!     call_sign_in(authorized).forward(
//!         Forward::new()
//!             .on_success(|session| session)
//!             .on_failure(|err| match err.downcast::<Unauthorized>() {
//!                 Ok(_) => InvalidCredentials.into(),
//!                 Err(other) => other,
//!             }),
//!     )
//! }
//!
//! assert!(sign_in(true).is_successful());
//! assert!(sign_in(false).has_error::<InvalidCredentials>());
//! ```

pub mod contract;
pub mod error;
pub mod forward;
pub mod outcome;
pub mod set;

pub use contract::ContractViolation;
pub use error::ErrorValue;
pub use forward::Forward;
pub use outcome::Outcome;
pub use set::ErrorSet;
