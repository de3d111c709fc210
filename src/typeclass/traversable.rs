//! Traversable type class - mapping with effects and collecting results.
//!
//! Without higher-kinded types there is no single `traverse` over every
//! applicative, so [`Traversable`] offers one method per effect this crate
//! defines: [`Optional`] and [`Outcome`].
//!
//! For the two containers here, sequencing is the same operation as the
//! inherent `transpose`:
//!
//! ```rust
//! use adtkit::control::{Optional, Outcome};
//! use adtkit::typeclass::Traversable;
//!
//! let nested: Outcome<Optional<i32>, String> = Outcome::Ok(Optional::Some(3));
//! assert_eq!(nested.clone().sequence_optional(), nested.transpose());
//! ```

use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::TypeConstructor;
use crate::control::{Optional, Outcome};

/// A structure that can be traversed with an effectful function.
///
/// # Laws
///
/// ## Identity
///
/// ```text
/// fa.traverse_optional(Optional::Some) == Optional::Some(fa)
/// ```
///
/// ## Naturality
///
/// ```text
/// fa.traverse_optional(f).ok_or(e) == fa.traverse_outcome(|x| f(x).ok_or(e))
/// ```
pub trait Traversable: Functor + Foldable {
    /// Applies a function returning `Optional` to each element.
    ///
    /// The result is `None` as soon as any application is `None`.
    fn traverse_optional<B, F>(self, function: F) -> Optional<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Optional<B>;

    /// Applies a function returning `Outcome` to each element.
    ///
    /// The first `Err` produced by `function` becomes the result.
    fn traverse_outcome<B, E, F>(self, function: F) -> Outcome<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Outcome<B, E>;

    /// Turns a structure of `Optional`s inside out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::control::Optional;
    /// use adtkit::typeclass::Traversable;
    ///
    /// let nested = Optional::Some(Optional::<i32>::None);
    /// assert_eq!(nested.sequence_optional(), Optional::None);
    /// ```
    fn sequence_optional(self) -> Optional<Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Optional<<Self::Inner as TypeConstructor>::Inner>>,
    {
        self.traverse_optional(Into::into)
    }

    /// Turns a structure of `Outcome`s inside out.
    fn sequence_outcome<E>(
        self,
    ) -> Outcome<Self::WithType<<Self::Inner as TypeConstructor>::Inner>, E>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Outcome<<Self::Inner as TypeConstructor>::Inner, E>>,
    {
        self.traverse_outcome(Into::into)
    }
}

impl<A> Traversable for Optional<A> {
    fn traverse_optional<B, F>(self, mut function: F) -> Optional<Optional<B>>
    where
        F: FnMut(A) -> Optional<B>,
    {
        match self {
            Optional::Some(element) => function(element).map(Optional::Some),
            Optional::None => Optional::Some(Optional::None),
        }
    }

    fn traverse_outcome<B, E, F>(self, mut function: F) -> Outcome<Optional<B>, E>
    where
        F: FnMut(A) -> Outcome<B, E>,
    {
        match self {
            Optional::Some(element) => function(element).map(Optional::Some),
            Optional::None => Outcome::Ok(Optional::None),
        }
    }
}

impl<T, E: Clone> Traversable for Outcome<T, E> {
    fn traverse_optional<B, F>(self, mut function: F) -> Optional<Outcome<B, E>>
    where
        F: FnMut(T) -> Optional<B>,
    {
        match self {
            Outcome::Ok(element) => function(element).map(Outcome::Ok),
            Outcome::Err(error) => Optional::Some(Outcome::Err(error)),
        }
    }

    fn traverse_outcome<B, E2, F>(self, mut function: F) -> Outcome<Outcome<B, E>, E2>
    where
        F: FnMut(T) -> Outcome<B, E2>,
    {
        match self {
            Outcome::Ok(element) => function(element).map(Outcome::Ok),
            Outcome::Err(error) => Outcome::Ok(Outcome::Err(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn half(value: i32) -> Optional<i32> {
        if value % 2 == 0 { Optional::Some(value / 2) } else { Optional::None }
    }

    #[rstest]
    #[case(Optional::Some(4), Optional::Some(Optional::Some(2)))]
    #[case(Optional::Some(3), Optional::None)]
    #[case(Optional::None, Optional::Some(Optional::None))]
    fn optional_traverse_optional(
        #[case] value: Optional<i32>,
        #[case] expected: Optional<Optional<i32>>,
    ) {
        assert_eq!(value.traverse_optional(half), expected);
    }

    #[rstest]
    fn outcome_traverse_optional_keeps_error() {
        let failed: Outcome<i32, &str> = Outcome::Err("e");
        assert_eq!(failed.traverse_optional(half), Optional::Some(Outcome::Err("e")));
    }

    #[rstest]
    fn optional_sequence_outcome_matches_transpose() {
        let nested: Optional<Outcome<i32, &str>> = Optional::Some(Outcome::Err("bad"));
        let sequenced: Outcome<Optional<i32>, &str> = nested.sequence_outcome();
        assert_eq!(sequenced, nested.transpose());
    }

    #[rstest]
    fn outcome_traverse_outcome_propagates_inner_error() {
        let value: Outcome<i32, &str> = Outcome::Ok(1);
        let result: Outcome<Outcome<i32, &str>, u8> = value.traverse_outcome(|_| Outcome::Err(7));
        assert_eq!(result, Outcome::Err(7));
    }
}
