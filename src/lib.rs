//! # adtkit
//!
//! Algebraic data types for absent values and failing computations, built
//! on a single two-way [`Sum`](control::Sum) primitive.
//!
//! ## Overview
//!
//! - **[`Optional`](control::Optional)**: `Some(value)` or `None`
//! - **[`Outcome`](control::Outcome)**: `Ok(value)` or `Err(error)`
//! - **Combinators**: `map`, `and_then`, `filter`, `zip`, `map2`, `ap`,
//!   `flatten`, `transpose`, `replace` and the eliminators `maybe`,
//!   `either` and `cases`
//! - **Type Classes**: Functor, Applicative, Monad, Bifunctor, Foldable and
//!   Traversable instances for both types
//!
//! Absence and failure are values. The only operations that panic are the
//! extraction methods (`unwrap`, `expect`, `unwrap_err`, `expect_err`), and
//! each has a `try_` variant returning a [`ContractError`](control::ContractError).
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for `Optional` and `Outcome`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use adtkit::prelude::*;
//!
//! let age = Optional::Some("42")
//!     .and_then(|text| Optional::<u32>::from(text.parse::<u32>().ok()))
//!     .filter(|age| *age < 150);
//! assert_eq!(age.to_string(), "Some(42)");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the data types and, with the `typeclass` feature, the traits.
///
/// ```rust
/// use adtkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;
