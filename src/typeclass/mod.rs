//! Type class traits over [`Optional`](crate::control::Optional) and
//! [`Outcome`](crate::control::Outcome).
//!
//! - [`Functor`]: Mapping over the contained value
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Bifunctor`]: Mapping over both sides of `Outcome` and `Sum`
//! - [`Foldable`]: Folding the (at most one) element into a summary value
//! - [`Traversable`]: Traversing with `Optional` or `Outcome` effects
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native higher-kinded types. [`TypeConstructor`] uses
//! Generic Associated Types to name "the same container applied to another
//! type", which is what `Functor` and `Monad` need to be written generically.
//!
//! The inherent methods (`map`, `and_then`, `map2`, `ap`) always win method
//! resolution, so importing these traits never changes what existing calls do.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::{Optional, Outcome};
//! use adtkit::typeclass::{Applicative, Monad};
//!
//! fn add_all<M>(a: M, b: M::WithType<i32>) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     a.map2(b, |x, y| x + y)
//! }
//!
//! assert_eq!(add_all(Optional::Some(1), Optional::Some(2)), Optional::Some(3));
//! assert_eq!(
//!     add_all(Outcome::<i32, &str>::Ok(1), Outcome::Err("no")),
//!     Outcome::Err("no")
//! );
//! ```

mod applicative;
mod bifunctor;
mod foldable;
mod functor;
mod higher;
mod monad;
mod traversable;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use traversable::Traversable;
