//! Closed enumerations backing enumerated fields.

use super::DomainError;

/// A closed set of literal values stored in an enumerated field.
///
/// Implementors are fieldless enums. The declared domain of the field is
/// derived from [`Enumerated::VARIANTS`], so a descriptor can never accept a
/// literal the Rust type cannot represent.
pub trait Enumerated: Copy + Sized + 'static {
    /// Logical name of the field this enumeration populates.
    const FIELD: &'static str;

    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// Returns the canonical storage literal.
    fn as_str(self) -> &'static str;

    /// Returns every storage literal in declaration order.
    #[must_use]
    fn literals() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|variant| variant.as_str()).collect()
    }

    /// Parses a storage literal, matching it exactly.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when the value is not one of the declared
    /// literals.
    fn parse_literal(value: &str) -> Result<Self, DomainError> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| DomainError {
                field: Self::FIELD,
                value: value.to_owned(),
                allowed: Self::literals(),
            })
    }
}

/// Implements string conversions for [`Enumerated`] types.
///
/// Generates `TryFrom<&str>`, `TryFrom<String>` and `Display`, all routed
/// through [`Enumerated::parse_literal`] and [`Enumerated::as_str`]. Pair it
/// with `#[serde(try_from = "String")]` so deserialization reports the same
/// [`DomainError`] as direct parsing.
macro_rules! enumerated_conversions {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl TryFrom<&str> for $ty {
                type Error = $crate::schema::DomainError;

                fn try_from(value: &str) -> Result<Self, Self::Error> {
                    <Self as $crate::schema::Enumerated>::parse_literal(value)
                }
            }

            impl TryFrom<String> for $ty {
                type Error = $crate::schema::DomainError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    <Self as $crate::schema::Enumerated>::parse_literal(&value)
                }
            }

            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str($crate::schema::Enumerated::as_str(*self))
                }
            }
        )+
    };
}

pub(crate) use enumerated_conversions;
