//! Configuration for the shape relaxer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Options for [`crate::relax`].
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case`, so an exceptions file reads as
/// `{"exceptions": {"id": true}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RelaxOptions {
    /// Field names that keep their original schema. Only entries that are
    /// exactly `true` exempt a field; `false` behaves like an absent entry.
    pub exceptions: IndexMap<String, bool>,
}

impl RelaxOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exempt `field` from relaxation.
    pub fn except(mut self, field: impl Into<String>) -> Self {
        self.exceptions.insert(field.into(), true);
        self
    }

    /// Whether `field` passes through unchanged.
    pub fn is_exempt(&self, field: &str) -> bool {
        self.exceptions.get(field).copied() == Some(true)
    }
}
