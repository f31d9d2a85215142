//! Host schema tree.
//!
//! A [`Schema`] is an immutable description of acceptable data: a kind tag,
//! the kind's children, and an optional free-text description. The builder
//! methods mirror the fluent style of the host schema library, so a tree reads
//! the way it was declared:
//!
//! ```
//! use schema_simplify_core::Schema;
//!
//! let user = Schema::object([
//!     ("name", Schema::string()),
//!     ("nickname", Schema::string().optional().describe("display name")),
//!     ("roles", Schema::array(Schema::enumeration(["admin", "member"]))),
//! ]);
//! assert_eq!(user.kind.type_name(), "ZodObject");
//! ```
//!
//! ## Serialization Format
//!
//! Nodes serialize as objects tagged by `"kind"` (`snake_case`) with the
//! kind's children inline and `description` alongside, e.g.
//! `{"kind": "optional", "inner": {"kind": "string"}, "description": "note"}`.
//! This is the tree itself, not a JSON Schema document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SimplifyError;

/// A schema node: a kind plus attached description metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(flatten)]
    pub kind: SchemaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The node kinds understood by the simplifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaKind {
    String {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        checks: Vec<StringCheck>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        checks: Vec<NumberCheck>,
    },
    Boolean,
    Date,
    Enum {
        values: Vec<String>,
    },
    Array {
        element: Box<Schema>,
    },
    /// Fields keep declaration order.
    Object {
        fields: IndexMap<String, Schema>,
    },
    Union {
        members: Vec<Schema>,
    },
    Optional {
        inner: Box<Schema>,
    },
    Nullable {
        inner: Box<Schema>,
    },
    Default {
        inner: Box<Schema>,
        value: Value,
    },
    /// A transformation or refinement wrapped around a base type.
    Effects {
        inner: Box<Schema>,
        effect: EffectKind,
    },
    Literal {
        value: Value,
    },
    /// Arbitrary string keys mapped to `value`.
    Record {
        value: Box<Schema>,
    },
    Tuple {
        items: Vec<Schema>,
    },
    Unknown,
    /// Any kind outside this set, identified by its host library name
    /// (e.g. `ZodBigInt`, `ZodAny`, `ZodLazy`).
    Custom {
        name: String,
    },
}

/// Format and validation refinements on a string node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum StringCheck {
    Email,
    Url,
    Uuid,
    Cuid,
    Datetime,
    Ip,
    Regex { pattern: String },
    MinLength { value: usize },
    MaxLength { value: usize },
    Length { value: usize },
    StartsWith { value: String },
    EndsWith { value: String },
    Trim,
    ToLowerCase,
    ToUpperCase,
}

/// Range and integrality refinements on a number node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum NumberCheck {
    Int,
    Min { value: f64, inclusive: bool },
    Max { value: f64, inclusive: bool },
    MultipleOf { value: f64 },
    Finite,
}

/// What an effects wrapper does to values of its inner type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Refinement,
    Transform,
    Preprocess,
}

impl SchemaKind {
    /// The host library identifier for this kind.
    pub fn type_name(&self) -> &str {
        match self {
            SchemaKind::String { .. } => "ZodString",
            SchemaKind::Number { .. } => "ZodNumber",
            SchemaKind::Boolean => "ZodBoolean",
            SchemaKind::Date => "ZodDate",
            SchemaKind::Enum { .. } => "ZodEnum",
            SchemaKind::Array { .. } => "ZodArray",
            SchemaKind::Object { .. } => "ZodObject",
            SchemaKind::Union { .. } => "ZodUnion",
            SchemaKind::Optional { .. } => "ZodOptional",
            SchemaKind::Nullable { .. } => "ZodNullable",
            SchemaKind::Default { .. } => "ZodDefault",
            SchemaKind::Effects { .. } => "ZodEffects",
            SchemaKind::Literal { .. } => "ZodLiteral",
            SchemaKind::Record { .. } => "ZodRecord",
            SchemaKind::Tuple { .. } => "ZodTuple",
            SchemaKind::Unknown => "ZodUnknown",
            SchemaKind::Custom { name } => name,
        }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

impl Schema {
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            description: None,
        }
    }

    pub fn string() -> Self {
        Self::string_with([])
    }

    pub fn string_with(checks: impl IntoIterator<Item = StringCheck>) -> Self {
        Self::new(SchemaKind::String {
            checks: checks.into_iter().collect(),
        })
    }

    pub fn number() -> Self {
        Self::number_with([])
    }

    pub fn number_with(checks: impl IntoIterator<Item = NumberCheck>) -> Self {
        Self::new(SchemaKind::Number {
            checks: checks.into_iter().collect(),
        })
    }

    pub fn boolean() -> Self {
        Self::new(SchemaKind::Boolean)
    }

    pub fn date() -> Self {
        Self::new(SchemaKind::Date)
    }

    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(SchemaKind::Enum {
            values: values.into_iter().map(Into::into).collect(),
        })
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Self::new(SchemaKind::Literal {
            value: value.into(),
        })
    }

    pub fn array(element: Schema) -> Self {
        Self::new(SchemaKind::Array {
            element: Box::new(element),
        })
    }

    pub fn object<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        Self::new(SchemaKind::Object {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        })
    }

    pub fn union(members: impl IntoIterator<Item = Schema>) -> Self {
        Self::new(SchemaKind::Union {
            members: members.into_iter().collect(),
        })
    }

    pub fn record(value: Schema) -> Self {
        Self::new(SchemaKind::Record {
            value: Box::new(value),
        })
    }

    pub fn tuple(items: impl IntoIterator<Item = Schema>) -> Self {
        Self::new(SchemaKind::Tuple {
            items: items.into_iter().collect(),
        })
    }

    pub fn unknown() -> Self {
        Self::new(SchemaKind::Unknown)
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Self::new(SchemaKind::Custom { name: name.into() })
    }

    /// Wrap in `Optional`.
    pub fn optional(self) -> Self {
        Self::new(SchemaKind::Optional {
            inner: Box::new(self),
        })
    }

    /// Wrap in `Nullable`.
    pub fn nullable(self) -> Self {
        Self::new(SchemaKind::Nullable {
            inner: Box::new(self),
        })
    }

    /// Wrap in `Default` with the given fallback value.
    pub fn default_value(self, value: impl Into<Value>) -> Self {
        Self::new(SchemaKind::Default {
            inner: Box::new(self),
            value: value.into(),
        })
    }

    pub fn effect(self, effect: EffectKind) -> Self {
        Self::new(SchemaKind::Effects {
            inner: Box::new(self),
            effect,
        })
    }

    pub fn refine(self) -> Self {
        self.effect(EffectKind::Refinement)
    }

    pub fn transform(self) -> Self {
        self.effect(EffectKind::Transform)
    }

    /// Attach a description to this node, replacing any existing one.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parse a serialized schema tree.
    pub fn from_json(input: &str) -> Result<Self, SimplifyError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Serialize this schema tree to a JSON value.
    pub fn to_json(&self) -> Result<Value, SimplifyError> {
        Ok(serde_json::to_value(self)?)
    }
}
