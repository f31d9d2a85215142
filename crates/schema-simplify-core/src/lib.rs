//! # schema-simplify-core
//!
//! Simplify expressive schema trees into the restricted subset that
//! structured-output consumers accept: strings, numbers, booleans, enums,
//! arrays, objects, unions and nullable wrappers.
//!
//! ## Usage
//!
//! ```rust
//! use schema_simplify_core::{simplify, Schema};
//!
//! let schema = Schema::object([
//!     ("a", Schema::string().optional()),
//!     ("b", Schema::array(Schema::boolean().default_value(true))),
//! ]);
//!
//! let simplified = Schema::from(simplify(&schema));
//! assert_eq!(
//!     simplified,
//!     Schema::object([
//!         ("a", Schema::string().nullable()),
//!         ("b", Schema::array(Schema::boolean())),
//!     ])
//! );
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod relax;
pub mod restricted;
pub mod schema;
pub mod schema_utils;
pub mod simplify;

pub use config::RelaxOptions;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, NullSink, TracingSink};
pub use error::SimplifyError;
pub use relax::relax;
pub use restricted::{RestrictedKind, RestrictedSchema};
pub use schema::{EffectKind, NumberCheck, Schema, SchemaKind, StringCheck};
pub use schema_utils::build_path;
pub use simplify::{simplify, simplify_with};
