//! `graphql_schema`
//! =========
//!
//! _A read-only object model over GraphQL introspection results._
//!
//! The **`graphql_schema`** library is meant to be used by code generators that turn a GraphQL
//! schema into client code. Such generators don't need a GraphQL server or the GraphQL Schema
//! Language; they need to walk a schema's types, fields, and arguments and name things in the
//! target language. This crate supports exactly that:
//!
//! - Views over the nodes of an introspection result, which are read lazily and cached
//! - Required and optional splits of arguments and input fields
//! - Hiding deprecated fields and enum values unless they're asked for
//! - `camelCase`, `PascalCase`, and `UPPER_SNAKE` forms of every name
//!
//! All derived data is allocated into an arena that a [SchemaContext](schema::SchemaContext)
//! owns, which means that a schema view and all references it hands out share a single lifetime.
//!
//! [A good place to start learning more about this crate is the `schema` module...](schema)

pub mod error;
pub mod naming;
pub mod schema;

pub use bumpalo;
