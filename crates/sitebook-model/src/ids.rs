//! Opaque row identifiers
//!
//! Backends hand out ids as strings or integers depending on the table. Both
//! are normalized to text and compared only for equality; no numeric
//! ordering is ever assumed.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire form of an id column
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
        }
    }
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier
            #[inline]
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier text
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into_string()))
            }
        }
    };
}

opaque_id!(
    /// Project identifier
    ProjectId
);
opaque_id!(
    /// War Room task identifier
    TaskId
);
opaque_id!(
    /// Budget area identifier
    AreaId
);
opaque_id!(
    /// Budget line item identifier
    LineItemId
);
opaque_id!(
    /// Quote identifier
    QuoteId
);
opaque_id!(
    /// Trade category identifier
    TradeCategoryId
);
opaque_id!(
    /// Dashboard user identifier
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accepts_text_and_integers() {
        let text: ProjectId = serde_json::from_str("\"p-1\"").unwrap();
        let number: ProjectId = serde_json::from_str("42").unwrap();
        assert_eq!(text.as_str(), "p-1");
        assert_eq!(number.as_str(), "42");
    }

    #[test]
    fn id_serializes_as_text() {
        let id = AreaId::new("a-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"a-7\"");
        assert_eq!(id.to_string(), "a-7");
    }

    #[test]
    fn id_rejects_other_shapes() {
        assert!(serde_json::from_str::<TaskId>("true").is_err());
        assert!(serde_json::from_str::<TaskId>("null").is_err());
    }
}
