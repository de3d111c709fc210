//! Sum types for absent values and failing computations.
//!
//! This module provides the core data types of the crate:
//!
//! - [`Sum`]: A value that is exactly one of two alternatives, readable only
//!   through its eliminator
//! - [`Optional`]: A value that may be absent (`Some` or `None`)
//! - [`Outcome`]: A computation that succeeded (`Ok`) or failed (`Err`)
//!
//! `Optional` and `Outcome` convert into each other (`ok_or`, `ok`, `err`)
//! and their nested forms are swapped by `transpose`.
//!
//! # Examples
//!
//! ## Chaining Fallible Steps
//!
//! ```rust
//! use adtkit::control::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let total = parse("20").and_then(|n| parse("22").map(|m| n + m));
//! assert_eq!(total, Outcome::Ok(42));
//! ```
//!
//! ## Transposing Nested Types
//!
//! ```rust
//! use adtkit::control::{Optional, Outcome};
//!
//! let lookup: Outcome<Optional<i32>, &str> = Outcome::Ok(Optional::Some(5));
//! let swapped = Outcome::transpose(lookup);
//! assert_eq!(swapped, Optional::Some(Outcome::Ok(5)));
//! assert_eq!(Optional::transpose(swapped), lookup);
//! ```

mod error;
mod iter;
mod optional;
mod outcome;
#[cfg(feature = "serde")]
mod serialization;
mod sum;

pub use error::{ContractError, ExpectationError, UnwrapError};
pub use iter::{IntoIter, Iter};
pub use optional::{Optional, OptionalCases};
pub use outcome::{Outcome, OutcomeCases};
pub use sum::Sum;

static_assertions::assert_impl_all!(Optional<i32>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Outcome<i32, u8>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Sum<(), i32>: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_impl_all!(ContractError: std::error::Error, Send, Sync);
static_assertions::assert_eq_size!(Optional<Box<i32>>, Box<i32>);
