//! Outcome type - a computation that either succeeded or failed.
//!
//! `Outcome<T, E>` is either `Ok(T)` or `Err(E)`. Its eliminator
//! [`Outcome::either`] goes through the `Sum<E, T>` view (`Err` on the left,
//! `Ok` on the right), and the combinators are derived from it.
//!
//! Unlike [`Optional`], both payloads are unrestricted. Combinators act on
//! the `Ok` branch unless their name says otherwise (`map_err`, `expect_err`,
//! `unwrap_err`, `inspect_err`).
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::Outcome;
//!
//! let result: Outcome<i32, String> = Outcome::Ok(25)
//!     .and_then(|x| Outcome::Ok(x * x))
//!     .and_then(|x| Outcome::Ok(x + 5));
//! assert_eq!(result.unwrap(), 630);
//! ```

use std::fmt;

use super::error::{self, ContractError, ExpectationError, UnwrapError};
use super::optional::Optional;
use super::sum::Sum;

/// Either a success value of type `T` or a failure value of type `E`.
///
/// # Examples
///
/// ```rust
/// use adtkit::control::Outcome;
///
/// let parsed: Outcome<i32, String> = Outcome::Ok(3);
/// let failed: Outcome<i32, String> = Outcome::Err("bad digit".to_string());
///
/// assert_eq!(parsed.map(|n| n + 1), Outcome::Ok(4));
/// assert_eq!(failed.map(|n| n + 1), Outcome::Err("bad digit".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Outcome<T, E> {
    /// A success value.
    Ok(T),
    /// A failure value.
    Err(E),
}

/// Handlers for [`Outcome::cases`]. Both are required.
///
/// # Examples
///
/// ```rust
/// use adtkit::control::{Outcome, OutcomeCases};
///
/// let outcome: Outcome<u8, &str> = Outcome::Err("offline");
/// let status = outcome.cases(OutcomeCases {
///     ok: |code| format!("status {code}"),
///     err: |reason| format!("failed: {reason}"),
/// });
/// assert_eq!(status, "failed: offline");
/// ```
pub struct OutcomeCases<O, R> {
    /// Invoked with the success value.
    pub ok: O,
    /// Invoked with the failure value.
    pub err: R,
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Sum View and Elimination
    // =========================================================================

    /// Converts into the `Sum<E, T>` view: `Err(e)` is `Left(e)`, `Ok(t)` is `Right(t)`.
    #[inline]
    pub fn into_sum(self) -> Sum<E, T> {
        match self {
            Self::Err(error) => Sum::left(error),
            Self::Ok(value) => Sum::right(value),
        }
    }

    /// Rebuilds an `Outcome` from its `Sum<E, T>` view.
    #[inline]
    pub fn from_sum(sum: Sum<E, T>) -> Self {
        sum.either(Self::Err, Self::Ok)
    }

    /// Eliminates the outcome, invoking `on_err` or `on_ok`.
    ///
    /// Exactly one handler runs. All other combinators on `Outcome` are
    /// expressed through this method.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Err("nope".to_string());
    /// assert_eq!(outcome.either(|e| e.len() as i32, |n| n), 4);
    /// ```
    #[inline]
    pub fn either<U, R, O>(self, on_err: R, on_ok: O) -> U
    where
        R: FnOnce(E) -> U,
        O: FnOnce(T) -> U,
    {
        self.into_sum().either(on_err, on_ok)
    }

    /// Pattern-match form of [`Outcome::either`] taking named handlers.
    #[inline]
    pub fn cases<U, O, R>(self, cases: OutcomeCases<O, R>) -> U
    where
        O: FnOnce(T) -> U,
        R: FnOnce(E) -> U,
    {
        self.either(cases.err, cases.ok)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    // =========================================================================
    // Borrowed Views
    // =========================================================================

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts `&mut Outcome<T, E>` into `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with `message` followed by the `Debug` form of the error if this
    /// is `Err`.
    ///
    /// ```rust,should_panic
    /// use adtkit::control::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("disk full");
    /// outcome.expect("write failed"); // panics with `write failed: "disk full"`
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => error::fail(expectation_error(message, &error)),
        }
    }

    /// Returns the `Err` value.
    ///
    /// # Panics
    ///
    /// Panics with `message` followed by the `Debug` form of the value if
    /// this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => error::fail(expectation_error(message, &value)),
            Self::Err(error) => error,
        }
    }

    /// Returns the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with "called `Outcome::unwrap()` on an `Err` value: ..." if
    /// this is `Err`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => error::fail(unwrap_error("unwrap", "Err", &error)),
        }
    }

    /// Returns the `Err` value.
    ///
    /// # Panics
    ///
    /// Panics with "called `Outcome::unwrap_err()` on an `Ok` value: ..." if
    /// this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => error::fail(unwrap_error("unwrap_err", "Ok", &value)),
            Self::Err(error) => error,
        }
    }

    /// Like [`Outcome::expect`], but returns the failure as a value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Expectation`] if this is `Err`.
    pub fn try_expect(self, message: &str) -> Result<T, ContractError>
    where
        E: fmt::Debug,
    {
        self.map_err(|error| ContractError::from(expectation_error(message, &error)))
            .into()
    }

    /// Like [`Outcome::expect_err`], but returns the failure as a value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Expectation`] if this is `Ok`.
    pub fn try_expect_err(self, message: &str) -> Result<E, ContractError>
    where
        T: fmt::Debug,
    {
        self.swap().try_expect(message)
    }

    /// Like [`Outcome::unwrap`], but returns the failure as a value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Unwrap`] if this is `Err`.
    pub fn try_unwrap(self) -> Result<T, ContractError>
    where
        E: fmt::Debug,
    {
        self.map_err(|error| ContractError::from(unwrap_error("unwrap", "Err", &error)))
            .into()
    }

    /// Like [`Outcome::unwrap_err`], but returns the failure as a value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Unwrap`] if this is `Ok`.
    pub fn try_unwrap_err(self) -> Result<E, ContractError>
    where
        T: fmt::Debug,
    {
        self.swap()
            .map_err(|value| ContractError::from(unwrap_error("unwrap_err", "Ok", &value)))
            .into()
    }

    /// Returns the `Ok` value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.either(|_| default, |value| value)
    }

    /// Returns the `Ok` value or computes one from the error.
    ///
    /// `function` is only invoked when this is `Err`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.either(function, |value| value)
    }

    /// Returns the `Ok` value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.either(|_| T::default(), |value| value)
    }

    // =========================================================================
    // Conversion to Optional
    // =========================================================================

    /// Converts the `Ok` branch into an [`Optional`], discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::{Optional, Outcome};
    ///
    /// assert_eq!(Outcome::<i32, &str>::Ok(2).ok(), Optional::Some(2));
    /// assert_eq!(Outcome::<i32, &str>::Err("e").ok(), Optional::None);
    /// ```
    #[inline]
    pub fn ok(self) -> Optional<T> {
        self.either(|_| Optional::None, Optional::Some)
    }

    /// Converts the `Err` branch into an [`Optional`], discarding any value.
    #[inline]
    pub fn err(self) -> Optional<E> {
        self.either(Optional::Some, |_| Optional::None)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the `Ok` value. An `Err` is passed through and
    /// `function` is never called.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.either(Outcome::Err, |value| Outcome::Ok(function(value)))
    }

    /// Applies `function` to the `Err` value. An `Ok` is passed through and
    /// `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("timeout");
    /// assert_eq!(outcome.map_err(str::len), Outcome::Err(7));
    /// ```
    #[inline]
    pub fn map_err<F, G>(self, function: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> F,
    {
        self.either(|error| Outcome::Err(function(error)), Outcome::Ok)
    }

    /// Applies `function` to the `Ok` value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.either(|_| default, function)
    }

    /// Applies `function` to the `Ok` value, or computes a fallback from the error.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        self.either(default, function)
    }

    /// Calls `function` with a reference to the `Ok` value and returns `self`.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with a reference to the `Err` value and returns `self`.
    #[inline]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Filtering and Chaining
    // =========================================================================

    /// Monadic bind over the `Ok` branch. An `Err` short-circuits.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.either(Outcome::Err, function)
    }

    /// Returns `other` if this is `Ok`, otherwise this error.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        self.and_then(|_| other)
    }

    /// Returns `self` if it is `Ok`, otherwise `other`.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        self.either(|_| other, Outcome::Ok)
    }

    /// Returns `self` if it is `Ok`, otherwise recovers from the error with `function`.
    #[inline]
    pub fn or_else<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        self.either(function, Outcome::Ok)
    }

    /// Keeps an `Ok` value only if `predicate` holds, otherwise yields
    /// `Err(error_if_false)`. An existing `Err` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Outcome;
    ///
    /// let adult = |age: Outcome<u8, &'static str>| age.filter(|a| *a >= 18, "minor");
    /// assert_eq!(adult(Outcome::Ok(30)), Outcome::Ok(30));
    /// assert_eq!(adult(Outcome::Ok(12)), Outcome::Err("minor"));
    /// assert_eq!(adult(Outcome::Err("missing")), Outcome::Err("missing"));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P, error_if_false: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.and_then(|value| {
            if predicate(&value) {
                Self::Ok(value)
            } else {
                Self::Err(error_if_false)
            }
        })
    }

    // =========================================================================
    // Applicative Operations
    // =========================================================================

    /// Pairs two `Ok` values. The first `Err`, left to right, wins.
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        self.map2(other, |left, right| (left, right))
    }

    /// Combines two `Ok` values with a binary function. The first `Err`,
    /// left to right, wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Outcome;
    ///
    /// let left: Outcome<i32, &str> = Outcome::Err("first");
    /// let right: Outcome<i32, &str> = Outcome::Err("second");
    /// assert_eq!(left.map2(right, |a, b| a + b), Outcome::Err("first"));
    /// ```
    #[inline]
    pub fn map2<U, A, F>(self, other: Outcome<U, E>, function: F) -> Outcome<A, E>
    where
        F: FnOnce(T, U) -> A,
    {
        self.and_then(|left| other.map(|right| function(left, right)))
    }

    /// Applies a function held in an outcome to the `Ok` value of `self`.
    ///
    /// The receiver's error takes precedence over the function's error.
    #[inline]
    pub fn ap<U, F>(self, function: Outcome<F, E>) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.map2(function, |value, function| function(value))
    }

    /// Replaces the `Ok` value with `value`. An `Err` is returned untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Ok(1).replace("one"), Outcome::Ok("one"));
    /// assert_eq!(Outcome::<i32, &str>::Err("e").replace("one"), Outcome::Err("e"));
    /// ```
    #[inline]
    pub fn replace<U>(self, value: U) -> Outcome<U, E> {
        self.map(|_| value)
    }

    /// Exchanges the branches: `Ok(x)` becomes `Err(x)` and `Err(e)` becomes `Ok(e)`.
    #[inline]
    pub fn swap(self) -> Outcome<E, T> {
        self.either(Outcome::Ok, Outcome::Err)
    }
}

// =============================================================================
// Copies Out of Borrowed Views
// =============================================================================

impl<T: Clone, E> Outcome<&T, E> {
    /// Clones the referenced `Ok` value.
    #[inline]
    pub fn cloned(self) -> Outcome<T, E> {
        self.map(T::clone)
    }
}

impl<T: Copy, E> Outcome<&T, E> {
    /// Copies the referenced `Ok` value.
    #[inline]
    pub fn copied(self) -> Outcome<T, E> {
        self.map(|value| *value)
    }
}

// =============================================================================
// Nested Structure
// =============================================================================

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// `Ok(Ok(x))` becomes `Ok(x)`; `Ok(Err(e))` and `Err(e)` become `Err(e)`.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Outcome<Optional<T>, E> {
    /// Swaps an `Outcome<Optional<T>, E>` into an `Optional<Outcome<T, E>>`.
    ///
    /// - `Ok(Some(x))` becomes `Some(Ok(x))`
    /// - `Ok(None)` becomes `None`
    /// - `Err(e)` becomes `Some(Err(e))`
    ///
    /// [`Optional::transpose`] recovers the original value from every result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::{Optional, Outcome};
    ///
    /// let found: Outcome<Optional<i32>, &str> = Outcome::Ok(Optional::Some(5));
    /// assert_eq!(Outcome::transpose(found), Optional::Some(Outcome::Ok(5)));
    ///
    /// let failed: Outcome<Optional<i32>, &str> = Outcome::Err("e");
    /// assert_eq!(Outcome::transpose(failed), Optional::Some(Outcome::Err("e")));
    ///
    /// let missing: Outcome<Optional<i32>, &str> = Outcome::Ok(Optional::None);
    /// assert_eq!(Outcome::transpose(missing), Optional::None);
    /// ```
    #[inline]
    pub fn transpose(self) -> Optional<Outcome<T, E>> {
        self.either(
            |error| Optional::Some(Outcome::Err(error)),
            |inner| inner.map(Outcome::Ok),
        )
    }
}

fn unwrap_error(
    method: &'static str,
    found: &'static str,
    payload: &dyn fmt::Debug,
) -> UnwrapError {
    UnwrapError {
        type_name: "Outcome",
        method,
        found,
        payload: Some(format!("{payload:?}")),
    }
}

fn expectation_error(message: &str, payload: &dyn fmt::Debug) -> ExpectationError {
    ExpectationError {
        message: message.to_owned(),
        payload: Some(format!("{payload:?}")),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    /// Formats as `Ok(value)` or `Err(error)`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.either(Err, Ok)
    }
}

impl<T, E> From<Sum<E, T>> for Outcome<T, E> {
    #[inline]
    fn from(sum: Sum<E, T>) -> Self {
        Self::from_sum(sum)
    }
}
