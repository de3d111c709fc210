//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>`
//! directly. [`TypeConstructor`] records the type a constructor is currently
//! applied to (`Inner`) and how to re-apply it to another type
//! (`WithType<B>`), which is enough to state `Functor`, `Applicative` and
//! `Monad` generically.
//!
//! # Example
//!
//! ```rust
//! use adtkit::control::Optional;
//! use adtkit::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let empty: Optional<String> = emptied(Optional::Some(42));
//! assert_eq!(empty, Optional::None);
//! ```

use crate::control::{Optional, Outcome};

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type parameter the constructor is applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

/// `Outcome` is a type constructor over its `Ok` type; the error type is fixed.
impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}
