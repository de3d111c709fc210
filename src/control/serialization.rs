//! `serde` support, enabled with the `serde` feature.
//!
//! Both types use the same data model as their standard library
//! counterparts: `Optional` serializes as an option (`null` in JSON) and
//! `Outcome` as an externally tagged `Ok`/`Err` enum. Data written from a
//! `std::option::Option` or `std::result::Result` reads back unchanged.

use super::optional::Optional;
use super::outcome::Outcome;

impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Option::<&T>::from(self.as_ref()).serialize(serializer)
    }
}

impl<'de, T> serde::Deserialize<'de> for Optional<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

impl<T: serde::Serialize, E: serde::Serialize> serde::Serialize for Outcome<T, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Result::<&T, &E>::from(self.as_ref()).serialize(serializer)
    }
}

impl<'de, T, E> serde::Deserialize<'de> for Outcome<T, E>
where
    T: serde::Deserialize<'de>,
    E: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Result::<T, E>::deserialize(deserializer).map(Self::from)
    }
}
