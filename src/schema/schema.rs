use bumpalo::collections::Vec;
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::HashMap;
use log::{debug, trace};
use once_cell::unsync::OnceCell;
use serde_json::Value as JSValue;

use super::document::Lookup;
use super::{Directive, NamedEntity, SchemaContext, TypeDefinition};
use crate::error::Result;

/// Map of a schema's types by name
pub type TypeMap<'a> =
    HashMap<&'a str, &'a TypeDefinition<'a>, DefaultHashBuilder, &'a bumpalo::Bump>;

/// Schema Definition
///
/// A read-only view over the `__schema` node of an introspection result. The schema exposes the
/// names of its root operation types, all of its types and directives sorted by name, and a
/// name-indexed map of its types. Types and directives are read from the document the first time
/// they're requested and are then cached on the [SchemaContext]'s arena.
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema-Introspection)
pub struct Schema<'a> {
    ctx: &'a SchemaContext,
    lookup: Lookup<'a>,
    types: OnceCell<&'a [TypeDefinition<'a>]>,
    types_by_name: OnceCell<&'a TypeMap<'a>>,
    directives: OnceCell<&'a [Directive<'a>]>,
}

impl<'a> Schema<'a> {
    /// Create a schema view from an introspection result, i.e. a document of the shape
    /// `{ "data": { "__schema": { ... } } }`.
    pub fn new(ctx: &'a SchemaContext, document: &'a JSValue) -> Result<Self> {
        let lookup = Lookup::new(document, "introspection result")
            .fetch_object("data", "data")?
            .fetch_object("__schema", "__schema")?;
        let schema = Schema {
            ctx,
            lookup,
            types: OnceCell::new(),
            types_by_name: OnceCell::new(),
            directives: OnceCell::new(),
        };
        debug!(
            "created schema view (query: {:?}, mutation: {:?})",
            schema.query_root_name().ok(),
            schema.mutation_root_name().ok().flatten()
        );
        Ok(schema)
    }

    /// Returns the name of the root object type for query operations
    #[inline]
    pub fn query_root_name(&self) -> Result<&'a str> {
        self.lookup
            .fetch_object("queryType", "queryType")?
            .fetch_str("name")
    }

    /// Returns the name of the root object type for mutation operations, if the schema has one.
    ///
    /// The `mutationType` key itself is required and is `null` for schemas without mutations.
    pub fn mutation_root_name(&self) -> Result<Option<&'a str>> {
        match self.lookup.fetch("mutationType")? {
            JSValue::Null => Ok(None),
            root_type => root_name(root_type, "mutationType"),
        }
    }

    /// Returns the name of the root object type for subscription operations, if the schema has
    /// one.
    ///
    /// Older servers don't query `subscriptionType`, so an absent key is treated like `null`.
    pub fn subscription_root_name(&self) -> Result<Option<&'a str>> {
        match self.lookup.get("subscriptionType")? {
            Some(root_type) => root_name(root_type, "subscriptionType"),
            None => Ok(None),
        }
    }

    /// Checks whether the given type name is the query or mutation root type's name
    pub fn is_root_type_name(&self, type_name: &str) -> Result<bool> {
        if self.query_root_name()? == type_name {
            return Ok(true);
        }
        Ok(self.mutation_root_name()? == Some(type_name))
    }

    /// Returns all types of the schema, including built-in and introspection types, sorted by
    /// name
    pub fn types(&self) -> Result<&'a [TypeDefinition<'a>]> {
        self.types
            .get_or_try_init(|| {
                let values = self.lookup.fetch_non_null_list("types")?;
                let mut types = Vec::with_capacity_in(values.len(), &self.ctx.arena);
                for value in values.iter() {
                    types.push(TypeDefinition::new(self.ctx, value)?);
                }
                types.sort_by(|a, b| a.name().cmp(b.name()));
                trace!("read {} types", types.len());
                Ok(types.into_bump_slice())
            })
            .copied()
    }

    /// Returns a map of all types by name
    pub fn types_by_name(&self) -> Result<&'a TypeMap<'a>> {
        self.types_by_name
            .get_or_try_init(|| {
                let types = self.types()?;
                let mut map = HashMap::with_capacity_in(types.len(), &self.ctx.arena);
                for schema_type in types.iter() {
                    map.insert(schema_type.name(), schema_type);
                }
                Ok(self.ctx.alloc(map))
            })
            .copied()
    }

    /// Retrieves a type by name from known schema types.
    #[inline]
    pub fn type_by_name(&self, name: &str) -> Result<Option<&'a TypeDefinition<'a>>> {
        Ok(self.types_by_name()?.get(name).copied())
    }

    /// Returns all directives of the schema sorted by name
    pub fn directives(&self) -> Result<&'a [Directive<'a>]> {
        self.directives
            .get_or_try_init(|| {
                let values = self.lookup.fetch_non_null_list("directives")?;
                let mut directives = Vec::with_capacity_in(values.len(), &self.ctx.arena);
                for value in values.iter() {
                    directives.push(Directive::new(self.ctx, value)?);
                }
                directives.sort_by(|a, b| a.name().cmp(b.name()));
                trace!("read {} directives", directives.len());
                Ok(directives.into_bump_slice())
            })
            .copied()
    }

    /// Retrieves a directive by name
    pub fn directive_by_name(&self, name: &str) -> Result<Option<&'a Directive<'a>>> {
        Ok(self
            .directives()?
            .iter()
            .find(|directive| directive.name() == name))
    }

    /// Returns the raw `__schema` node of the introspection result
    #[inline]
    pub fn to_json(&self) -> &'a JSValue {
        self.lookup.json
    }
}

fn root_name<'a>(root_type: &'a JSValue, key: &'static str) -> Result<Option<&'a str>> {
    Ok(Some(Lookup::new(root_type, key).fetch_str("name")?))
}

impl<'a> std::fmt::Debug for Schema<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("query_type", &self.query_root_name().ok())
            .field("mutation_type", &self.mutation_root_name().ok().flatten())
            .finish_non_exhaustive()
    }
}
