//! Type-erased carrier for expected-error values.
//!
//! An [`ErrorValue`] holds exactly one expected-error value behind a trait
//! object, so failure sequences can mix variants while callers still query
//! and recover the concrete types.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

/// Object-safe view over a carried expected-error value.
trait Carried: StdError + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<E> Carried for E
where
    E: StdError + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A single expected-error value, erased to its variant identity.
///
/// Any `std::error::Error + Send + Sync + 'static` type can be carried;
/// in practice variant types are small `thiserror`-derived structs declared
/// next to the operation that produces them.
///
/// `ErrorValue` deliberately does not implement `std::error::Error` itself,
/// which keeps the blanket `From` conversion below coherent.
pub struct ErrorValue {
    inner: Box<dyn Carried>,
    variant: &'static str,
}

impl ErrorValue {
    /// Wrap a concrete expected-error value.
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            inner: Box::new(err),
            variant: std::any::type_name::<E>(),
        }
    }

    /// True iff the carried value is of variant `V`.
    pub fn is<V: 'static>(&self) -> bool {
        self.inner.as_any().is::<V>()
    }

    /// Borrow the carried value as its concrete variant, if it matches.
    pub fn downcast_ref<V: 'static>(&self) -> Option<&V> {
        self.inner.as_any().downcast_ref::<V>()
    }

    /// Take the carried value as its concrete variant.
    ///
    /// On a variant mismatch the carrier is returned unchanged, so remap
    /// handlers can try variants in sequence.
    pub fn downcast<V: 'static>(self) -> Result<V, ErrorValue> {
        if !self.is::<V>() {
            return Err(self);
        }
        match self.inner.into_any().downcast::<V>() {
            Ok(v) => Ok(*v),
            Err(_) => unreachable!("variant identity checked above"),
        }
    }

    /// Full type path of the carried variant.
    pub fn variant(&self) -> &'static str {
        self.variant
    }

    pub(crate) fn variant_short(&self) -> &'static str {
        short_name(self.variant)
    }
}

impl<E> From<E> for ErrorValue
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self::new(err)
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.variant_short(), self.inner)
    }
}

/// Last path segment of a type name, for diagnostics.
pub(crate) fn short_name(path: &'static str) -> &'static str {
    path.rsplit("::").next().unwrap_or(path)
}
