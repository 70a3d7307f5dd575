use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a backend record.
///
/// The backend hands out integer keys. The string form is what goes into
/// `<select>` values and URL paths.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

/// Declares a transparent `i64` newtype id.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<i64>()
                    .map($name)
                    .map_err(|e| format!("Invalid {}: {}", stringify!($name), e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use numeric_id;

#[cfg(test)]
mod tests {
    use super::*;

    numeric_id!(SampleId);

    #[test]
    fn parses_trimmed_numbers() {
        assert_eq!(SampleId::from_string(" 42 "), Ok(SampleId(42)));
        assert_eq!(SampleId(7).as_string(), "7");
    }

    #[test]
    fn rejects_non_numeric_values() {
        let err = SampleId::from_string("abc").unwrap_err();
        assert!(err.starts_with("Invalid SampleId"));
    }

    #[test]
    fn serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&SampleId(3)).unwrap(), "3");
        let id: SampleId = serde_json::from_str("9").unwrap();
        assert_eq!(id, SampleId(9));
    }
}
