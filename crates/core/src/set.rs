//! Closed error-set descriptors.
//!
//! An error set is declared at the call site as a tuple of variant types,
//! usually behind a type alias:
//!
//! ```
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
//! type TransportErrors = (Unauthorized, ValidationError);
//! ```
//!
//! One macro covers all arities 1 through 6; membership is a tag comparison
//! against the declared list. Declaring the same variant twice is redundant
//! but harmless.

use crate::error::ErrorValue;
use std::error::Error as StdError;

/// A closed set of expected-error variant types.
///
/// Carries no data; it only answers whether a value belongs to the declared
/// set and names the declared variants for diagnostics.
pub trait ErrorSet: 'static {
    /// Number of declared variant types.
    const ARITY: usize;

    /// True iff the carried variant of `err` is one of the declared types.
    fn is_member(err: &ErrorValue) -> bool;

    /// Type paths of the declared variants.
    fn variants() -> Vec<&'static str>;
}

macro_rules! impl_error_set {
    ($($variant:ident),+) => {
        impl<$($variant),+> ErrorSet for ($($variant,)+)
        where
            $($variant: StdError + Send + Sync + 'static),+
        {
            const ARITY: usize = [$(stringify!($variant)),+].len();

            fn is_member(err: &ErrorValue) -> bool {
                $(err.is::<$variant>())||+
            }

            fn variants() -> Vec<&'static str> {
                vec![$(std::any::type_name::<$variant>()),+]
            }
        }
    };
}

impl_error_set!(E1);
impl_error_set!(E1, E2);
impl_error_set!(E1, E2, E3);
impl_error_set!(E1, E2, E3, E4);
impl_error_set!(E1, E2, E3, E4, E5);
impl_error_set!(E1, E2, E3, E4, E5, E6);

/// Render the declared variants of a set for diagnostics.
pub(crate) fn describe<S: ErrorSet>() -> String {
    S::variants()
        .into_iter()
        .map(crate::error::short_name)
        .collect::<Vec<_>>()
        .join(", ")
}
