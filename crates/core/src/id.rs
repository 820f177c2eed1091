//! String identifiers used across the domain.
//!
//! Both identifiers are caller-chosen keys (typed at the console), so they
//! wrap the raw string instead of generating values. Any string is a valid
//! key, including the empty one.

use serde::{Deserialize, Serialize};

/// Identifier of a product record (unique within the catalog).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Login name of a user (unique within the user directory).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            /// Wrap a raw key as-is (no trimming, case preserved).
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_newtype!(ProductId);
impl_string_newtype!(Username);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_kept_verbatim() {
        let id = ProductId::new(" P1 ");
        assert_eq!(id.as_str(), " P1 ");
        assert_ne!(ProductId::new("p1"), ProductId::new("P1"));
    }

    #[test]
    fn empty_key_is_distinct_from_whitespace() {
        assert_eq!(ProductId::from("").as_str(), "");
        assert_ne!(ProductId::from(""), ProductId::from(" "));
        assert_eq!(Username::from(String::from("admin")).to_string(), "admin");
    }
}
