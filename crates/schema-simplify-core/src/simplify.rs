//! Schema simplification.
//!
//! Rewrites an arbitrary [`Schema`] tree into the restricted vocabulary,
//! applying exactly one rule per source kind:
//!
//! | Source kind            | Result                                           |
//! |------------------------|--------------------------------------------------|
//! | String, Date           | String (formats and checks dropped)              |
//! | Number, Boolean        | same kind (checks dropped)                       |
//! | Enum                   | Enum with the same values                        |
//! | Array, Object, Union   | same kind, children simplified                   |
//! | Optional, Nullable     | Nullable around the simplified inner type        |
//! | Default, Effects       | the simplified inner type                        |
//! | Literal                | single-value Enum                                |
//! | Record                 | empty Object, plus a diagnostic                  |
//! | Tuple                  | Array of Unknown, of the one item, or of a Union |
//! | Unknown, custom kinds  | String, plus a diagnostic                        |
//!
//! A non-empty description on a source node is carried verbatim onto its
//! result. For the unwrapping rules (Default, Effects) the wrapper's own
//! description wins; without one the inner result keeps whatever it had.
//!
//! The input tree is only borrowed; the result is a freshly built tree.

use serde_json::Value;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::restricted::{RestrictedKind, RestrictedSchema};
use crate::schema::{Schema, SchemaKind};
use crate::schema_utils::build_path;

/// Simplify a schema, reporting lossy rewrites through `tracing::warn!`.
pub fn simplify(schema: &Schema) -> RestrictedSchema {
    simplify_with(schema, &mut TracingSink)
}

/// Simplify a schema, reporting lossy rewrites to `sink`.
///
/// ```
/// use schema_simplify_core::{simplify_with, Diagnostic, RestrictedKind, Schema};
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let result = simplify_with(&Schema::record(Schema::number()), &mut diagnostics);
///
/// assert!(matches!(result.kind, RestrictedKind::Object { ref fields } if fields.is_empty()));
/// assert!(diagnostics[0].message.contains("ZodRecord"));
/// ```
pub fn simplify_with(schema: &Schema, sink: &mut dyn DiagnosticSink) -> RestrictedSchema {
    walk(schema, "#", sink)
}

// ---------------------------------------------------------------------------
// Recursive walker
// ---------------------------------------------------------------------------

fn walk(node: &Schema, path: &str, sink: &mut dyn DiagnosticSink) -> RestrictedSchema {
    tracing::debug!(path, kind = node.kind.type_name(), "simplifying node");

    let kind = match &node.kind {
        SchemaKind::String { .. } | SchemaKind::Date => RestrictedKind::String,
        SchemaKind::Number { .. } => RestrictedKind::Number,
        SchemaKind::Boolean => RestrictedKind::Boolean,
        SchemaKind::Enum { values } => RestrictedKind::Enum {
            values: values.clone(),
        },
        SchemaKind::Array { element } => RestrictedKind::Array {
            element: Box::new(walk(element, &build_path(path, &["element"]), sink)),
        },
        SchemaKind::Object { fields } => RestrictedKind::Object {
            fields: fields
                .iter()
                .map(|(key, field)| {
                    let child_path = build_path(path, &["fields", key]);
                    (key.clone(), walk(field, &child_path, sink))
                })
                .collect(),
        },
        SchemaKind::Union { members } => RestrictedKind::Union {
            members: walk_each(members, path, "members", sink),
        },
        SchemaKind::Optional { inner } | SchemaKind::Nullable { inner } => {
            RestrictedKind::Nullable {
                inner: Box::new(walk(inner, &build_path(path, &["inner"]), sink)),
            }
        }
        SchemaKind::Default { inner, .. } | SchemaKind::Effects { inner, .. } => {
            return unwrap(node, inner, path, sink);
        }
        SchemaKind::Literal { value } => RestrictedKind::Enum {
            values: vec![literal_text(value)],
        },
        SchemaKind::Record { .. } => {
            sink.emit(Diagnostic::record_collapsed(path));
            RestrictedKind::Object {
                fields: Default::default(),
            }
        }
        SchemaKind::Tuple { items } => tuple_to_array(items, path, sink),
        SchemaKind::Unknown | SchemaKind::Custom { .. } => {
            sink.emit(Diagnostic::unsupported_kind(path, node.kind.type_name()));
            RestrictedKind::String
        }
    };

    RestrictedSchema {
        kind,
        description: carried_description(node),
    }
}

fn walk_each(
    nodes: &[Schema],
    path: &str,
    keyword: &str,
    sink: &mut dyn DiagnosticSink,
) -> Vec<RestrictedSchema> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| walk(node, &build_path(path, &[keyword, &i.to_string()]), sink))
        .collect()
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Drop a Default or Effects wrapper, keeping the wrapper's description if it
/// has one.
fn unwrap(
    wrapper: &Schema,
    inner: &Schema,
    path: &str,
    sink: &mut dyn DiagnosticSink,
) -> RestrictedSchema {
    let mut result = walk(inner, &build_path(path, &["inner"]), sink);
    if let Some(description) = carried_description(wrapper) {
        result.description = Some(description);
    }
    result
}

/// Tuples lose positional typing: each element may be any of the item types.
fn tuple_to_array(items: &[Schema], path: &str, sink: &mut dyn DiagnosticSink) -> RestrictedKind {
    let element = match items {
        [] => RestrictedSchema::new(RestrictedKind::Unknown),
        [only] => walk(only, &build_path(path, &["items", "0"]), sink),
        _ => RestrictedSchema::new(RestrictedKind::Union {
            members: walk_each(items, path, "items", sink),
        }),
    };
    RestrictedKind::Array {
        element: Box::new(element),
    }
}

/// Enum values are strings; non-string literals use their JSON text.
fn literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn carried_description(node: &Schema) -> Option<String> {
    node.description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticKind, NullSink};
    use crate::schema::{NumberCheck, StringCheck};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn run(schema: &Schema) -> Schema {
        Schema::from(simplify_with(schema, &mut NullSink))
    }

    fn run_collecting(schema: &Schema) -> (Schema, Vec<Diagnostic>) {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let result = simplify_with(schema, &mut diagnostics);
        (Schema::from(result), diagnostics)
    }

    #[test]
    fn test_string_checks_dropped() {
        let input = Schema::string_with([
            StringCheck::Email,
            StringCheck::MinLength { value: 3 },
            StringCheck::Regex {
                pattern: "^a".to_string(),
            },
        ]);
        assert_eq!(run(&input), Schema::string());
    }

    #[test]
    fn test_number_checks_dropped() {
        let input = Schema::number_with([
            NumberCheck::Int,
            NumberCheck::Min {
                value: 0.0,
                inclusive: true,
            },
        ]);
        assert_eq!(run(&input), Schema::number());
    }

    #[test]
    fn test_date_becomes_string() {
        assert_eq!(
            run(&Schema::date().describe("when")),
            Schema::string().describe("when")
        );
    }

    #[test]
    fn test_optional_and_nullable_both_become_nullable() {
        assert_eq!(
            run(&Schema::boolean().optional()),
            Schema::boolean().nullable()
        );
        assert_eq!(
            run(&Schema::boolean().nullable()),
            Schema::boolean().nullable()
        );
    }

    #[test]
    fn test_default_wrapper_description_overrides_inner() {
        let input = Schema::string()
            .describe("inner")
            .default_value("x")
            .describe("outer");
        assert_eq!(run(&input), Schema::string().describe("outer"));
    }

    #[test]
    fn test_undescribed_wrapper_keeps_inner_description() {
        let input = Schema::string().describe("inner").refine();
        assert_eq!(run(&input), Schema::string().describe("inner"));
    }

    #[test]
    fn test_empty_description_is_not_carried() {
        let input = Schema::string().describe("inner").transform().describe("");
        assert_eq!(run(&input), Schema::string().describe("inner"));
        assert_eq!(run(&Schema::number().describe("")), Schema::number());
    }

    #[test]
    fn test_non_string_literals_use_json_text() {
        assert_eq!(run(&Schema::literal(5)), Schema::enumeration(["5"]));
        assert_eq!(run(&Schema::literal(true)), Schema::enumeration(["true"]));
        assert_eq!(
            run(&Schema::literal(Value::Null)),
            Schema::enumeration(["null"])
        );
    }

    #[test]
    fn test_tuple_shapes() {
        assert_eq!(
            run(&Schema::tuple([])),
            Schema::array(Schema::unknown())
        );
        assert_eq!(
            run(&Schema::tuple([Schema::date()])),
            Schema::array(Schema::string())
        );
        // Duplicates are kept.
        assert_eq!(
            run(&Schema::tuple([Schema::string(), Schema::string()])),
            Schema::array(Schema::union([Schema::string(), Schema::string()]))
        );
    }

    #[test]
    fn test_record_diagnostic_path() {
        let input = Schema::object([("meta", Schema::record(Schema::string()).describe("bag"))]);
        let (output, diagnostics) = run_collecting(&input);

        assert_eq!(
            output,
            Schema::object([("meta", Schema::object::<_, String>([]).describe("bag"))])
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].path, "#/fields/meta");
        assert_eq!(diagnostics[0].kind, DiagnosticKind::RecordCollapsed);
    }

    #[test]
    fn test_record_value_type_not_visited() {
        // Nothing inside the collapsed record is simplified or reported.
        let input = Schema::record(Schema::custom("ZodAny"));
        let (_, diagnostics) = run_collecting(&input);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::RecordCollapsed);
    }

    #[test]
    fn test_unsupported_kinds_fall_back_to_string() {
        let input = Schema::union([Schema::custom("ZodBigInt"), Schema::unknown().describe("x")]);
        let (output, diagnostics) = run_collecting(&input);

        assert_eq!(
            output,
            Schema::union([Schema::string(), Schema::string().describe("x")])
        );
        let names: Vec<_> = diagnostics
            .iter()
            .map(|d| (d.path.as_str(), d.kind.clone()))
            .collect();
        assert_eq!(
            names,
            vec![
                (
                    "#/members/0",
                    DiagnosticKind::UnsupportedKind {
                        name: "ZodBigInt".to_string()
                    }
                ),
                (
                    "#/members/1",
                    DiagnosticKind::UnsupportedKind {
                        name: "ZodUnknown".to_string()
                    }
                ),
            ]
        );
    }

    #[test]
    fn test_diagnostic_paths_through_wrappers_and_tuples() {
        let input = Schema::tuple([Schema::string(), Schema::custom("ZodVoid").optional()]);
        let (_, diagnostics) = run_collecting(&input);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].path, "#/items/1/inner");
    }

    #[test]
    fn test_field_keys_escaped_in_paths() {
        let input = Schema::object([("a/b", Schema::custom("ZodNever"))]);
        let (_, diagnostics) = run_collecting(&input);
        assert_eq!(diagnostics[0].path, "#/fields/a~1b");
    }

    #[test]
    fn test_input_untouched() {
        let input = Schema::object([
            ("a", Schema::string().optional()),
            ("b", Schema::record(Schema::number())),
        ]);
        let before = input.clone();
        let _ = run(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_default_value_absent_from_output() {
        let output = run(&Schema::number().default_value(json!(42)))
            .to_json()
            .unwrap();
        assert_eq!(output, json!({ "kind": "number" }));
    }
}
