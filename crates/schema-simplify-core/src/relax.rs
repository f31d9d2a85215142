//! Shape relaxation.
//!
//! Rewrites every top-level field of an object schema to "nullable, defaulting
//! to null", except fields the caller exempts. Nested objects are not visited.

use serde_json::Value;

use crate::config::RelaxOptions;
use crate::error::SimplifyError;
use crate::schema::{Schema, SchemaKind};

/// Relax the fields of an object schema.
///
/// Returns [`SimplifyError::NotAnObject`] when `schema` is not an object node.
pub fn relax(schema: &Schema, options: &RelaxOptions) -> Result<Schema, SimplifyError> {
    let SchemaKind::Object { fields } = &schema.kind else {
        return Err(SimplifyError::NotAnObject {
            kind: schema.kind.type_name().to_string(),
        });
    };

    let relaxed = fields
        .iter()
        .map(|(name, field)| {
            let field = if options.is_exempt(name) {
                field.clone()
            } else {
                field.clone().nullable().default_value(Value::Null)
            };
            (name.clone(), field)
        })
        .collect();

    Ok(Schema {
        kind: SchemaKind::Object { fields: relaxed },
        description: schema.description.clone(),
    })
}
