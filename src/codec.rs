//! Serde support for refined integers.
//!
//! A refined integer is encoded exactly like its inner `i32`. It is emitted as
//! a newtype struct named after the variant's [`Variant::SCHEMA_NAME`], which
//! self-describing formats such as JSON render as a bare number.
//!
//! Decoding accepts the same bare number and passes it through the variant's
//! smart constructor, so an out-of-domain value is rejected with the
//! [`ConstraintError`](crate::ConstraintError) message wrapped in the
//! format's own error type.
//!
//! ```
//! use refined_ints::NegativeInt;
//!
//! let value = NegativeInt::create(-7);
//! assert_eq!(serde_json::to_string(&value).unwrap(), "-7");
//!
//! let decoded: NegativeInt = serde_json::from_str("-7").unwrap();
//! assert_eq!(decoded, value);
//!
//! let error = serde_json::from_str::<NegativeInt>("7").unwrap_err();
//! assert!(error.to_string().starts_with("Number should be negative (tried with 7)."));
//! ```

use std::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Unexpected, Visitor},
};

use crate::{refined::Refined, variant::Variant};

impl<V: Variant> Serialize for Refined<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(V::SCHEMA_NAME, &self.get())
    }
}

impl<'de, V: Variant> Deserialize<'de> for Refined<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_newtype_struct(V::SCHEMA_NAME, RefinedVisitor(PhantomData))
    }
}

struct RefinedVisitor<V>(PhantomData<V>);

impl<V: Variant> RefinedVisitor<V> {
    fn refine<E: de::Error>(value: i32) -> Result<Refined<V>, E> {
        Refined::new(value).map_err(|error| {
            tracing::debug!(value, variant = V::NAME, "decoded value violates its variant");
            E::custom(error)
        })
    }
}

impl<'de, V: Variant> Visitor<'de> for RefinedVisitor<V> {
    type Value = Refined<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} 32-bit integer", V::EXPECTATION)
    }

    fn visit_newtype_struct<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Self::Value, D::Error> {
        Self::refine(i32::deserialize(deserializer)?)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        let narrowed = i32::try_from(value)
            .map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))?;
        Self::refine(narrowed)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        let narrowed = i32::try_from(value)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))?;
        Self::refine(narrowed)
    }
}
