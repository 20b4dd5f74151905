//! Generic single-value containers.
//!
//! [`Holder`] wraps exactly one value of a caller-chosen type and renders it
//! together with the runtime name of that type. [`NumericHolder`] is the same
//! idea with the type parameter restricted to numeric-like types, so a
//! non-conforming instantiation is rejected by the compiler rather than at
//! runtime.

use std::any::type_name;
use std::fmt::{self, Display};

/// Holds one value; immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holder<T> {
    value: T,
}

impl<T> Holder<T> {
    pub fn new(value: T) -> Self {
        Holder { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Transforms the inner value, producing a holder of the closure's
    /// return type.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Holder<U> {
        Holder {
            value: f(self.value),
        }
    }
}

impl<T: Display> Display for Holder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", type_name::<T>(), self.value)
    }
}

/// Numeric-like types: ordered, comparable, printable, and convertible
/// to `f64`.
///
/// Blanket-implemented, so every conforming type picks it up automatically.
pub trait Numeric: PartialOrd + Display + Copy + Into<f64> {}

impl<T: PartialOrd + Display + Copy + Into<f64>> Numeric for T {}

/// [`Holder`] restricted to numeric-like types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericHolder<T: Numeric> {
    value: T,
}

impl<T: Numeric> NumericHolder<T> {
    pub fn new(value: T) -> Self {
        NumericHolder { value }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn as_f64(&self) -> f64 {
        self.value.into()
    }
}

impl<T: Numeric> Display for NumericHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", type_name::<T>(), self.value)
    }
}
