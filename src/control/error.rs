//! Error types for contract violations.
//!
//! `Optional` and `Outcome` report misuse (unwrapping the wrong variant,
//! failed expectations) with the types in this module. The panicking
//! methods (`unwrap`, `expect`, ...) panic with the `Display` text of these
//! errors; the `try_*` methods return them as values instead.

use std::fmt;

/// Raised when `unwrap` or `unwrap_err` is called on the wrong variant.
///
/// # Examples
///
/// ```rust
/// use adtkit::control::UnwrapError;
///
/// let error = UnwrapError {
///     type_name: "Outcome",
///     method: "unwrap",
///     found: "Err",
///     payload: Some("\"boom\"".to_string()),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "called `Outcome::unwrap()` on an `Err` value: \"boom\""
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapError {
    /// The name of the type the method was called on.
    pub type_name: &'static str,
    /// The name of the method that failed.
    pub method: &'static str,
    /// The variant that was found instead of the expected one.
    pub found: &'static str,
    /// `Debug` rendering of the payload held by the found variant, if any.
    pub payload: Option<String>,
}

impl UnwrapError {
    const fn article(&self) -> &'static str {
        match self.found.as_bytes() {
            [b'A' | b'E' | b'I' | b'O' | b'U', ..] => "an",
            _ => "a",
        }
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "called `{}::{}()` on {} `{}` value",
            self.type_name,
            self.method,
            self.article(),
            self.found
        )?;
        if let Some(payload) = &self.payload {
            write!(formatter, ": {payload}")?;
        }
        Ok(())
    }
}

impl std::error::Error for UnwrapError {}

/// Raised by `expect` and `expect_err` with a caller-supplied message.
///
/// # Examples
///
/// ```rust
/// use adtkit::control::ExpectationError;
///
/// let error = ExpectationError {
///     message: "config must be loaded".to_string(),
///     payload: None,
/// };
/// assert_eq!(format!("{}", error), "config must be loaded");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectationError {
    /// The message supplied by the caller.
    pub message: String,
    /// `Debug` rendering of the unexpected payload, if any.
    pub payload: Option<String>,
}

impl fmt::Display for ExpectationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Some(payload) => write!(formatter, "{}: {payload}", self.message),
            None => formatter.write_str(&self.message),
        }
    }
}

impl std::error::Error for ExpectationError {}

/// Any contract violation reported by this crate.
///
/// # Examples
///
/// ```rust
/// use adtkit::control::{ContractError, Optional};
///
/// let empty: Optional<i32> = Optional::None;
/// let error = empty.try_unwrap().unwrap_err();
/// assert!(matches!(error, ContractError::Unwrap(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// The wrong variant was unwrapped.
    Unwrap(UnwrapError),
    /// An expectation failed.
    Expectation(ExpectationError),
}

impl fmt::Display for ContractError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unwrap(error) => write!(formatter, "{error}"),
            Self::Expectation(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ContractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unwrap(error) => Some(error),
            Self::Expectation(error) => Some(error),
        }
    }
}

impl From<UnwrapError> for ContractError {
    fn from(error: UnwrapError) -> Self {
        Self::Unwrap(error)
    }
}

impl From<ExpectationError> for ContractError {
    fn from(error: ExpectationError) -> Self {
        Self::Expectation(error)
    }
}

/// Panics with the `Display` text of `error`.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail(error: impl Into<ContractError>) -> ! {
    panic!("{}", error.into())
}
