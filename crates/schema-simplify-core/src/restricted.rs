//! The restricted schema vocabulary accepted by structured-output consumers.
//!
//! Every child of a restricted composite is itself a [`RestrictedSchema`], so
//! no source-only kind can appear anywhere in a simplified tree. Serialization
//! uses the same tags as [`Schema`], and [`From`] converts back into the host
//! representation without loss.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::{Schema, SchemaKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestrictedSchema {
    #[serde(flatten)]
    pub kind: RestrictedKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RestrictedKind {
    String,
    Number,
    Boolean,
    Enum {
        values: Vec<String>,
    },
    Array {
        element: Box<RestrictedSchema>,
    },
    Object {
        fields: IndexMap<String, RestrictedSchema>,
    },
    Union {
        members: Vec<RestrictedSchema>,
    },
    Nullable {
        inner: Box<RestrictedSchema>,
    },
    /// Only produced as the element type of an empty tuple's array.
    Unknown,
}

impl RestrictedSchema {
    pub fn new(kind: RestrictedKind) -> Self {
        Self {
            kind,
            description: None,
        }
    }
}

impl From<RestrictedKind> for RestrictedSchema {
    fn from(kind: RestrictedKind) -> Self {
        Self::new(kind)
    }
}

impl From<RestrictedSchema> for Schema {
    fn from(restricted: RestrictedSchema) -> Self {
        let kind = match restricted.kind {
            RestrictedKind::String => SchemaKind::String { checks: Vec::new() },
            RestrictedKind::Number => SchemaKind::Number { checks: Vec::new() },
            RestrictedKind::Boolean => SchemaKind::Boolean,
            RestrictedKind::Enum { values } => SchemaKind::Enum { values },
            RestrictedKind::Array { element } => SchemaKind::Array {
                element: Box::new(Schema::from(*element)),
            },
            RestrictedKind::Object { fields } => SchemaKind::Object {
                fields: fields
                    .into_iter()
                    .map(|(k, v)| (k, Schema::from(v)))
                    .collect(),
            },
            RestrictedKind::Union { members } => SchemaKind::Union {
                members: members.into_iter().map(Schema::from).collect(),
            },
            RestrictedKind::Nullable { inner } => SchemaKind::Nullable {
                inner: Box::new(Schema::from(*inner)),
            },
            RestrictedKind::Unknown => SchemaKind::Unknown,
        };
        Schema {
            kind,
            description: restricted.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> RestrictedSchema {
        let mut fields = IndexMap::new();
        fields.insert(
            "tags".to_string(),
            RestrictedSchema::new(RestrictedKind::Array {
                element: Box::new(RestrictedKind::String.into()),
            }),
        );
        fields.insert(
            "score".to_string(),
            RestrictedSchema {
                kind: RestrictedKind::Nullable {
                    inner: Box::new(RestrictedKind::Number.into()),
                },
                description: Some("optional score".to_string()),
            },
        );
        RestrictedSchema::new(RestrictedKind::Object { fields })
    }

    #[test]
    fn test_into_host_schema() {
        let expected = Schema::object([
            ("tags", Schema::array(Schema::string())),
            (
                "score",
                Schema::number().nullable().describe("optional score"),
            ),
        ]);
        assert_eq!(Schema::from(sample()), expected);
    }

    #[test]
    fn test_serialized_form_reads_as_host_schema() {
        let json = serde_json::to_string(&sample()).unwrap();
        let host = Schema::from_json(&json).unwrap();
        assert_eq!(host, Schema::from(sample()));
    }
}
