//! # Using Schema Definitions
//!
//! The `graphql_schema::schema` module contains a read-only object model over the result of a
//! GraphQL introspection query. Code generators may use it to inspect a schema's types, fields,
//! arguments, enum values, and directives without dealing with raw introspection JSON.
//!
//! A [Schema] is created from an introspection document and a [SchemaContext], whose arena holds
//! everything the schema derives from the document:
//!
//! ```
//! use graphql_schema::schema::*;
//!
//! fn inspect() -> graphql_schema::error::Result<()> {
//!     let ctx = SchemaContext::new();
//!
//!     let introspection_json = include_str!("../../fixture/introspection_query.json");
//!     let document = parse_document(introspection_json)?;
//!     let schema = Schema::new(&ctx, &document)?;
//!
//!     let query_root = schema.type_by_name(schema.query_root_name()?)?.unwrap();
//!     for field in query_root.fields(false)?.unwrap_or_default() {
//!         println!("{}: {}", field.camelize_name(), field.type_ref()?);
//!     }
//!     Ok(())
//! }
//!
//! inspect().unwrap();
//! ```
//!
//! Every collection is read from the document lazily and cached, so repeated calls return the
//! same entities. Accessors for collections that don't apply to a type's [kind](TypeKind) return
//! `None`.
//!
//! [More information on the Schema struct.](Schema)

mod capabilities;
mod context;
mod directive;
mod document;
mod enum_value;
mod field;
mod input_value;
pub mod introspection;
#[allow(clippy::module_inception)]
mod schema;
mod type_definition;
mod type_ref;

pub use capabilities::{Deprecatable, HasArguments, InputValueList, NamedEntity};
pub use context::SchemaContext;
pub use directive::{Directive, BUILTIN_DIRECTIVES};
pub use document::{parse_document, Node};
pub use enum_value::EnumValue;
pub use field::Field;
pub use input_value::InputValue;
pub use introspection::{DirectiveLocation, TypeKind};
pub use schema::{Schema, TypeMap};
pub use type_definition::{FieldMap, TypeDefinition, BUILTIN_SCALARS};
pub use type_ref::TypeRef;
