//! Functor type class - mapping over contained values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adtkit::control::{Optional, Outcome};
//! use adtkit::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
//!     container.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Optional::Some(1)), Optional::Some("#1".to_string()));
//! assert_eq!(
//!     describe(Outcome::<i32, ()>::Err(())),
//!     Outcome::Err(())
//! );
//! ```

use super::higher::TypeConstructor;
use crate::control::{Optional, Outcome};

/// A type class for types that can have a function mapped over their contents.
///
/// Mapping preserves the shape: `None` stays `None` and `Err` stays the same
/// `Err`.
pub trait Functor: TypeConstructor {
    /// Applies a function to the contained value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the contained value without
    /// consuming the functor.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Discards the contained value, keeping only the shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Optional;
    /// use adtkit::typeclass::Functor;
    ///
    /// assert_eq!(Optional::Some(5).void(), Optional::Some(()));
    /// assert_eq!(Optional::<i32>::None.void(), Optional::None);
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function).map_err(E::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn optional_fmap_some() {
        assert_eq!(Optional::Some(5).fmap(|n| n * 2), Optional::Some(10));
    }

    #[rstest]
    fn optional_fmap_none() {
        assert_eq!(Optional::<i32>::None.fmap(|n| n * 2), Optional::None);
    }

    #[rstest]
    fn optional_fmap_ref_keeps_original() {
        let original = Optional::Some("hello".to_string());
        let length = original.fmap_ref(String::len);
        assert_eq!(length, Optional::Some(5));
        assert_eq!(original, Optional::Some("hello".to_string()));
    }

    #[rstest]
    fn outcome_fmap_err_passes_through() {
        let failed: Outcome<i32, &str> = Outcome::Err("e");
        assert_eq!(failed.fmap(|n| n + 1), Outcome::Err("e"));
    }

    #[rstest]
    fn outcome_fmap_ref_clones_error() {
        let failed: Outcome<i32, String> = Outcome::Err("e".to_string());
        assert_eq!(failed.fmap_ref(|n| n + 1), Outcome::Err("e".to_string()));
        assert!(failed.is_err());
    }

    #[rstest]
    fn outcome_void_ok() {
        assert_eq!(Outcome::<i32, ()>::Ok(3).void(), Outcome::Ok(()));
    }
}
