//! Optional type - a value that may be absent.
//!
//! `Optional<T>` is either `Some(T)` or `None`. It mirrors `std::option::Option`
//! but is built on the [`Sum`] primitive: its eliminator [`Optional::maybe`]
//! goes through the `Sum<(), T>` view, and the combinators are derived from
//! that eliminator.
//!
//! Every combinator consumes the receiver and returns a new value. The one
//! exception is [`Optional::replace`], which swaps the held value in place.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::Optional;
//!
//! let price = Optional::Some(200);
//! assert_eq!(price.filter(|value| *value == 200).unwrap_or(500), 200);
//!
//! let price = Optional::Some(199);
//! assert_eq!(price.filter(|value| *value == 200).unwrap_or(500), 500);
//! ```

use std::fmt;

use super::error::{self, ContractError, ExpectationError, UnwrapError};
use super::outcome::Outcome;
use super::sum::Sum;

/// A value of type `T` that may be absent.
///
/// # Examples
///
/// ```rust
/// use adtkit::control::Optional;
///
/// let present: Optional<i32> = Optional::Some(5);
/// let absent: Optional<i32> = Optional::None;
///
/// assert_eq!(present.map(|n| n * 2), Optional::Some(10));
/// assert_eq!(absent.map(|n| n * 2), Optional::None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Optional<T> {
    /// No value.
    None,
    /// A present value of type `T`.
    Some(T),
}

/// Handlers for [`Optional::cases`]. Both are required.
///
/// # Examples
///
/// ```rust
/// use adtkit::control::{Optional, OptionalCases};
///
/// let label = Optional::Some(3).cases(OptionalCases {
///     some: |n| format!("{n} items"),
///     none: || "empty".to_string(),
/// });
/// assert_eq!(label, "3 items");
/// ```
pub struct OptionalCases<S, N> {
    /// Invoked with the value when the optional is `Some`.
    pub some: S,
    /// Invoked when the optional is `None`.
    pub none: N,
}

impl<T> Optional<T> {
    // =========================================================================
    // Sum View and Elimination
    // =========================================================================

    /// Converts into the `Sum<(), T>` view: `None` is `Left(())`, `Some(x)` is `Right(x)`.
    #[inline]
    pub fn into_sum(self) -> Sum<(), T> {
        match self {
            Self::None => Sum::left(()),
            Self::Some(value) => Sum::right(value),
        }
    }

    /// Rebuilds an `Optional` from its `Sum<(), T>` view.
    #[inline]
    pub fn from_sum(sum: Sum<(), T>) -> Self {
        sum.either(|()| Self::None, Self::Some)
    }

    /// Eliminates the optional, invoking `on_none` or `on_some`.
    ///
    /// Exactly one handler runs. All other combinators on `Optional` are
    /// expressed through this method.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Optional;
    ///
    /// let size = Optional::Some("four").maybe(|| 0, |s| s.len());
    /// assert_eq!(size, 4);
    ///
    /// let size = Optional::<&str>::None.maybe(|| 0, |s| s.len());
    /// assert_eq!(size, 0);
    /// ```
    #[inline]
    pub fn maybe<U, N, S>(self, on_none: N, on_some: S) -> U
    where
        N: FnOnce() -> U,
        S: FnOnce(T) -> U,
    {
        self.into_sum().either(|()| on_none(), on_some)
    }

    /// Pattern-match form of [`Optional::maybe`] taking named handlers.
    #[inline]
    pub fn cases<U, S, N>(self, cases: OptionalCases<S, N>) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        self.maybe(cases.none, cases.some)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    // =========================================================================
    // Borrowed Views
    // =========================================================================

    /// Converts `&Optional<T>` into `Optional<&T>`.
    ///
    /// Reading through a borrow leaves the original untouched; use
    /// [`Optional::cloned`] afterwards to obtain an independent copy.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Converts `&mut Optional<T>` into `Optional<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Optional;
    ///
    /// assert_eq!(Optional::Some(1).expect("present"), 1);
    /// ```
    ///
    /// ```rust,should_panic
    /// use adtkit::control::Optional;
    ///
    /// Optional::<i32>::None.expect("value must be present");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => error::fail(Self::expectation_error(message)),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with "called `Optional::unwrap()` on a `None` value" if this
    /// is `None`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => error::fail(Self::unwrap_error()),
        }
    }

    /// Like [`Optional::expect`], but returns the failure as a value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Expectation`] carrying `message` if this is `None`.
    pub fn try_expect(self, message: &str) -> Result<T, ContractError> {
        self.ok_or_else(|| ContractError::from(Self::expectation_error(message)))
            .into()
    }

    /// Like [`Optional::unwrap`], but returns the failure as a value.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Unwrap`] if this is `None`.
    pub fn try_unwrap(self) -> Result<T, ContractError> {
        self.ok_or_else(|| ContractError::from(Self::unwrap_error()))
            .into()
    }

    /// Returns the contained value or `default`.
    ///
    /// `default` is evaluated by the caller before the call, whether or not it
    /// is used. Prefer [`Optional::unwrap_or_else`] for expensive defaults.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.maybe(|| default, |value| value)
    }

    /// Returns the contained value or computes one from `function`.
    ///
    /// `function` is only invoked when this is `None`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.maybe(function, |value| value)
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.maybe(T::default, |value| value)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the contained value.
    ///
    /// `Some(x).map(f) == Some(f(x))` and `None.map(f) == None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Optional;
    ///
    /// let length = Optional::Some("hello").map(str::len);
    /// assert_eq!(length, Optional::Some(5));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.maybe(|| Optional::None, |value| Optional::Some(function(value)))
    }

    /// Applies `function` to the contained value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        self.maybe(|| default, function)
    }

    /// Applies `function` to the contained value, or computes a fallback from `default`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        self.maybe(default, function)
    }

    /// Calls `function` with a reference to the contained value and returns `self`.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Filtering and Chaining
    // =========================================================================

    /// Keeps the value only if `predicate` holds for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Optional;
    ///
    /// assert_eq!(Optional::Some(4).filter(|n| n % 2 == 0), Optional::Some(4));
    /// assert_eq!(Optional::Some(3).filter(|n| n % 2 == 0), Optional::None);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.and_then(|value| {
            if predicate(&value) {
                Self::Some(value)
            } else {
                Self::None
            }
        })
    }

    /// Monadic bind: applies `function` to the contained value and flattens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Optional;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Optional::Some(n / 2) } else { Optional::None };
    /// assert_eq!(Optional::Some(8).and_then(half).and_then(half), Optional::Some(2));
    /// assert_eq!(Optional::Some(6).and_then(half).and_then(half), Optional::None);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.maybe(|| Optional::None, function)
    }

    /// Returns `other` if this is `Some`, otherwise `None`.
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        self.and_then(|_| other)
    }

    /// Returns `self` if it is `Some`, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        self.maybe(|| other, Self::Some)
    }

    /// Returns `self` if it is `Some`, otherwise the result of `function`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.maybe(function, Self::Some)
    }

    /// Returns whichever of `self` and `other` is `Some`, if exactly one is.
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    // =========================================================================
    // Conversion to Outcome
    // =========================================================================

    /// Converts to an [`Outcome`], mapping `None` to `Err(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::{Optional, Outcome};
    ///
    /// assert_eq!(Optional::Some(5).ok_or("Failed"), Outcome::Ok(5));
    /// assert_eq!(Optional::<i32>::None.ok_or("Failed"), Outcome::Err("Failed"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        self.maybe(|| Outcome::Err(error), Outcome::Ok)
    }

    /// Converts to an [`Outcome`], computing the error lazily.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        self.maybe(|| Outcome::Err(function()), Outcome::Ok)
    }

    // =========================================================================
    // Applicative Operations
    // =========================================================================

    /// Pairs two optionals. Any `None` operand yields `None`.
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        self.map2(other, |left, right| (left, right))
    }

    /// Combines two optionals with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Optional;
    ///
    /// let total = Optional::Some(3).map2(Optional::Some(4), |a, b| a + b);
    /// assert_eq!(total, Optional::Some(7));
    /// ```
    #[inline]
    pub fn map2<U, A, F>(self, other: Optional<U>, function: F) -> Optional<A>
    where
        F: FnOnce(T, U) -> A,
    {
        self.and_then(|left| other.map(|right| function(left, right)))
    }

    /// Applies a function held in an optional to the value held in `self`.
    ///
    /// `Some(x).ap(Some(f)) == Some(f(x))`; a `None` on either side yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Optional;
    ///
    /// let increment = Optional::Some(|n: i32| n + 1);
    /// assert_eq!(Optional::Some(41).ap(increment), Optional::Some(42));
    /// ```
    #[inline]
    pub fn ap<U, F>(self, function: Optional<F>) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map2(function, |value, function| function(value))
    }

    // =========================================================================
    // In-place Operations
    // =========================================================================

    /// Swaps the held value for `value`, returning the previous one.
    ///
    /// On `None` this is a no-op: the receiver stays `None`, `value` is
    /// dropped and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Optional;
    ///
    /// let mut slot = Optional::Some(1);
    /// assert_eq!(slot.replace(2), Optional::Some(1));
    /// assert_eq!(slot, Optional::Some(2));
    ///
    /// let mut empty: Optional<i32> = Optional::None;
    /// assert_eq!(empty.replace(2), Optional::None);
    /// assert_eq!(empty, Optional::None);
    /// ```
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        match self {
            Self::Some(current) => Self::Some(std::mem::replace(current, value)),
            Self::None => Self::None,
        }
    }

    /// Takes the value out, leaving `None` in its place.
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    fn unwrap_error() -> UnwrapError {
        UnwrapError {
            type_name: "Optional",
            method: "unwrap",
            found: "None",
            payload: None,
        }
    }

    fn expectation_error(message: &str) -> ExpectationError {
        ExpectationError {
            message: message.to_owned(),
            payload: None,
        }
    }
}

// =============================================================================
// Copies Out of Borrowed Views
// =============================================================================

impl<T: Clone> Optional<&T> {
    /// Clones the referenced value into an owned `Optional<T>`.
    #[inline]
    pub fn cloned(self) -> Optional<T> {
        self.map(T::clone)
    }
}

impl<T: Copy> Optional<&T> {
    /// Copies the referenced value into an owned `Optional<T>`.
    #[inline]
    pub fn copied(self) -> Optional<T> {
        self.map(|value| *value)
    }
}

// =============================================================================
// Nested Structure
// =============================================================================

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// `Some(Some(x))` becomes `Some(x)`; `Some(None)` and `None` become `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Optional;
    ///
    /// assert_eq!(Optional::flatten(Optional::Some(Optional::Some(5))), Optional::Some(5));
    /// assert_eq!(Optional::flatten(Optional::Some(Optional::<i32>::None)), Optional::None);
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Optional<Outcome<T, E>> {
    /// Swaps an `Optional<Outcome<T, E>>` into an `Outcome<Optional<T>, E>`.
    ///
    /// - `Some(Ok(x))` becomes `Ok(Some(x))`
    /// - `Some(Err(e))` becomes `Err(e)`
    /// - `None` becomes `Ok(None)`
    ///
    /// This is the inverse of [`Outcome::transpose`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::{Optional, Outcome};
    ///
    /// let nested: Optional<Outcome<i32, &str>> = Optional::Some(Outcome::Ok(5));
    /// assert_eq!(Optional::transpose(nested), Outcome::Ok(Optional::Some(5)));
    ///
    /// let empty: Optional<Outcome<i32, &str>> = Optional::None;
    /// assert_eq!(Optional::transpose(empty), Outcome::Ok(Optional::None));
    /// ```
    #[inline]
    pub fn transpose(self) -> Outcome<Optional<T>, E> {
        self.maybe(
            || Outcome::Ok(Optional::None),
            |inner| inner.map(Optional::Some),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Optional<T> {
    /// Returns `None`.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    /// Formats as `Some(value)` or `None`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<T> for Optional<T> {
    /// Wraps `value` in `Some`.
    #[inline]
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.maybe(|| None, Some)
    }
}

impl<T> From<Sum<(), T>> for Optional<T> {
    #[inline]
    fn from(sum: Sum<(), T>) -> Self {
        Self::from_sum(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Optional::Some(1), true)]
    #[case(Optional::None, false)]
    fn predicates_are_exclusive(#[case] value: Optional<i32>, #[case] expected_some: bool) {
        assert_eq!(value.is_some(), expected_some);
        assert_eq!(value.is_none(), !expected_some);
    }

    #[rstest]
    fn maybe_agrees_with_match() {
        let present = Optional::Some(3).maybe(|| -1, |n| n * 10);
        let absent = Optional::<i32>::None.maybe(|| -1, |n| n * 10);
        assert_eq!(present, 30);
        assert_eq!(absent, -1);
    }

    #[rstest]
    fn sum_view_round_trips() {
        assert_eq!(Optional::from_sum(Optional::Some(9).into_sum()), Optional::Some(9));
        assert_eq!(
            Optional::<i32>::from_sum(Optional::None.into_sum()),
            Optional::None
        );
    }

    #[rstest]
    fn cases_dispatches_to_named_handler() {
        let handlers = || OptionalCases {
            some: |n: i32| n.to_string(),
            none: || "nothing".to_string(),
        };
        assert_eq!(Optional::Some(2).cases(handlers()), "2");
        assert_eq!(Optional::None.cases(handlers()), "nothing");
    }

    #[rstest]
    #[should_panic(expected = "called `Optional::unwrap()` on a `None` value")]
    fn unwrap_on_none_panics() {
        Optional::<i32>::None.unwrap();
    }

    #[rstest]
    #[should_panic(expected = "custom diagnostic")]
    fn expect_on_none_panics_with_message() {
        Optional::<i32>::None.expect("custom diagnostic");
    }

    #[rstest]
    fn try_unwrap_reports_error_kind() {
        assert_eq!(Optional::Some(1).try_unwrap(), Ok(1));
        assert!(matches!(
            Optional::<i32>::None.try_unwrap(),
            Err(ContractError::Unwrap(_))
        ));
        assert!(matches!(
            Optional::<i32>::None.try_expect("why"),
            Err(ContractError::Expectation(ExpectationError { ref message, .. })) if message == "why"
        ));
    }

    #[rstest]
    fn unwrap_or_else_is_lazy() {
        let calls = Cell::new(0);
        let value = Optional::Some(1).unwrap_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 1);
        assert_eq!(calls.get(), 0);

        let value = Optional::None.unwrap_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 0);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn map_on_none_never_calls_function() {
        let calls = Cell::new(0);
        let result = Optional::<i32>::None.map(|n| {
            calls.set(calls.get() + 1);
            n
        });
        assert_eq!(result, Optional::None);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Optional::Some(1), Optional::Some(2), Optional::Some((1, 2)))]
    #[case(Optional::Some(1), Optional::None, Optional::None)]
    #[case(Optional::None, Optional::Some(2), Optional::None)]
    fn zip_requires_both(
        #[case] left: Optional<i32>,
        #[case] right: Optional<i32>,
        #[case] expected: Optional<(i32, i32)>,
    ) {
        assert_eq!(left.zip(right), expected);
    }

    #[rstest]
    #[case(Optional::Some(1), Optional::None, Optional::Some(1))]
    #[case(Optional::None, Optional::Some(2), Optional::Some(2))]
    #[case(Optional::Some(1), Optional::Some(2), Optional::None)]
    #[case(Optional::None, Optional::None, Optional::None)]
    fn xor_keeps_single_value(
        #[case] left: Optional<i32>,
        #[case] right: Optional<i32>,
        #[case] expected: Optional<i32>,
    ) {
        assert_eq!(left.xor(right), expected);
    }

    #[rstest]
    fn replace_on_none_is_noop() {
        let mut empty: Optional<String> = Optional::None;
        assert_eq!(empty.replace("new".to_string()), Optional::None);
        assert_eq!(empty, Optional::None);
    }

    #[rstest]
    fn take_leaves_none() {
        let mut slot = Optional::Some(3);
        assert_eq!(slot.take(), Optional::Some(3));
        assert_eq!(slot, Optional::None);
    }

    #[rstest]
    fn cloned_copy_is_independent() {
        let original = Optional::Some(vec![1, 2]);
        let mut copy = original.as_ref().cloned();
        if let Optional::Some(items) = copy.as_mut() {
            items.push(3);
        }
        assert_eq!(original, Optional::Some(vec![1, 2]));
        assert_eq!(copy, Optional::Some(vec![1, 2, 3]));
    }

    #[rstest]
    #[case(Optional::Some(5), "Some(5)")]
    #[case(Optional::None, "None")]
    fn display_format(#[case] value: Optional<i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn std_option_conversion_round_trips() {
        let optional: Optional<i32> = Some(4).into();
        assert_eq!(optional, Optional::Some(4));
        let option: Option<i32> = optional.into();
        assert_eq!(option, Some(4));
        let empty: Option<i32> = Optional::None.into();
        assert_eq!(empty, None);
    }
}
