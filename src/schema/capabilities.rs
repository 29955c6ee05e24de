use bumpalo::collections::Vec;
use serde_json::Value as JSValue;

use super::document::Node;
use super::{InputValue, SchemaContext};
use crate::error::Result;

/// Generic trait for any schema entity that is backed by a named introspection node
pub trait NamedEntity<'a> {
    /// Returns the document node backing this entity
    fn node(&self) -> &Node<'a>;

    /// Returns the entity's name as given by introspection
    #[inline]
    fn name(&self) -> &'a str {
        self.node().name()
    }

    /// Returns the entity's description, if it has one
    #[inline]
    fn description(&self) -> Result<Option<&'a str>> {
        self.node().lookup.fetch_opt_str("description")
    }

    /// Returns the entity's name in `camelCase`
    #[inline]
    fn camelize_name(&self) -> &'a str {
        self.node().name_forms().camelized
    }

    /// Returns the entity's name in `PascalCase`
    #[inline]
    fn classify_name(&self) -> &'a str {
        self.node().name_forms().classified
    }

    /// Returns the entity's name in `UPPER_SNAKE` case
    #[inline]
    fn upcase_name(&self) -> &'a str {
        self.node().name_forms().upcased
    }

    /// Returns the raw introspection node of this entity
    #[inline]
    fn to_json(&self) -> &'a JSValue {
        self.node().json()
    }
}

/// Generic trait for schema entities that may be deprecated, i.e. fields and enum values
pub trait Deprecatable<'a>: NamedEntity<'a> {
    #[inline]
    fn is_deprecated(&self) -> Result<bool> {
        self.node().lookup.fetch_bool("isDeprecated")
    }

    #[inline]
    fn deprecation_reason(&self) -> Result<Option<&'a str>> {
        self.node().lookup.fetch_opt_str("deprecationReason")
    }
}

/// Generic trait for schema entities that accept arguments, i.e. fields and directives
pub trait HasArguments<'a>: NamedEntity<'a> {
    /// Get the [InputValueList] of this entity's arguments
    fn arguments(&self) -> Result<InputValueList<'a>>;

    /// Get all arguments in declaration order
    #[inline]
    fn args(&self) -> Result<&'a [InputValue<'a>]> {
        Ok(self.arguments()?.all)
    }

    /// Get the arguments whose type is non-null
    #[inline]
    fn required_args(&self) -> Result<&'a [&'a InputValue<'a>]> {
        Ok(self.arguments()?.required)
    }

    /// Get the arguments whose type is nullable
    #[inline]
    fn optional_args(&self) -> Result<&'a [&'a InputValue<'a>]> {
        Ok(self.arguments()?.optional)
    }

    /// Get a known argument by name
    #[inline]
    fn arg(&self, name: &str) -> Result<Option<&'a InputValue<'a>>> {
        Ok(self.arguments()?.get(name))
    }
}

/// A list of input values, split into required and optional values.
///
/// This is used for the arguments of fields and directives, as well as for the fields of input
/// objects. A value is required when its type is non-null. Both subsets preserve declaration
/// order.
#[derive(Debug, Clone, Copy)]
pub struct InputValueList<'a> {
    pub all: &'a [InputValue<'a>],
    pub required: &'a [&'a InputValue<'a>],
    pub optional: &'a [&'a InputValue<'a>],
}

impl<'a> InputValueList<'a> {
    pub(crate) fn from_json(ctx: &'a SchemaContext, values: &'a [JSValue]) -> Result<Self> {
        let mut all = Vec::with_capacity_in(values.len(), &ctx.arena);
        for value in values.iter() {
            all.push(InputValue::new(ctx, value)?);
        }
        let all = all.into_bump_slice();

        let mut required = Vec::new_in(&ctx.arena);
        let mut optional = Vec::new_in(&ctx.arena);
        for value in all.iter() {
            if value.type_ref()?.is_non_null() {
                required.push(value);
            } else {
                optional.push(value);
            }
        }

        Ok(InputValueList {
            all,
            required: required.into_bump_slice(),
            optional: optional.into_bump_slice(),
        })
    }

    /// Get a known input value by name
    #[inline]
    pub fn get(&self, name: &str) -> Option<&'a InputValue<'a>> {
        self.all.iter().find(|value| value.name() == name)
    }
}

/// A list of deprecatable entities together with the subset that isn't deprecated.
///
/// Both views are derived from the same list once, so that asking for one or the other never
/// re-reads the introspection document.
#[derive(Debug)]
pub(crate) struct DeprecatableList<'a, T> {
    pub(crate) all: &'a [&'a T],
    pub(crate) active: &'a [&'a T],
}

impl<'a, T> Clone for DeprecatableList<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for DeprecatableList<'a, T> {}

impl<'a, T: Deprecatable<'a>> DeprecatableList<'a, T> {
    pub(crate) fn new(ctx: &'a SchemaContext, entities: &'a [T]) -> Result<Self> {
        let mut all = Vec::with_capacity_in(entities.len(), &ctx.arena);
        let mut active = Vec::with_capacity_in(entities.len(), &ctx.arena);
        for entity in entities.iter() {
            all.push(entity);
            if !entity.is_deprecated()? {
                active.push(entity);
            }
        }
        Ok(DeprecatableList {
            all: all.into_bump_slice(),
            active: active.into_bump_slice(),
        })
    }

    #[inline]
    pub(crate) fn view(&self, include_deprecated: bool) -> &'a [&'a T] {
        if include_deprecated {
            self.all
        } else {
            self.active
        }
    }
}
