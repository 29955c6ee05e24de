use once_cell::unsync::OnceCell;
use serde_json::Value as JSValue;

use super::document::Node;
use super::{Deprecatable, HasArguments, InputValueList, NamedEntity, SchemaContext, TypeRef};
use crate::error::Result;

/// An object or interface Field.
///
/// A field is like a function that given its arguments as input values produces an output value.
/// [Reference](https://spec.graphql.org/October2021/#sec-The-__Field-Type)
#[derive(Debug)]
pub struct Field<'a> {
    node: Node<'a>,
    type_ref: OnceCell<&'a TypeRef<'a>>,
    arguments: OnceCell<InputValueList<'a>>,
}

impl<'a> Field<'a> {
    pub(crate) fn new(ctx: &'a SchemaContext, json: &'a JSValue) -> Result<Self> {
        Ok(Field {
            node: Node::new(ctx, json, "__Field")?,
            type_ref: OnceCell::new(),
            arguments: OnceCell::new(),
        })
    }

    /// Returns the output type of this field
    pub fn type_ref(&self) -> Result<&'a TypeRef<'a>> {
        self.type_ref
            .get_or_try_init(|| {
                TypeRef::from_json(self.node.ctx, self.node.lookup.fetch("type")?)
            })
            .copied()
    }

    /// Returns whether selecting this field requires a sub-selection
    #[inline]
    pub fn has_subfields(&self) -> Result<bool> {
        Ok(self.type_ref()?.has_subfields())
    }
}

impl<'a> NamedEntity<'a> for Field<'a> {
    #[inline]
    fn node(&self) -> &Node<'a> {
        &self.node
    }
}

impl<'a> Deprecatable<'a> for Field<'a> {}

impl<'a> HasArguments<'a> for Field<'a> {
    fn arguments(&self) -> Result<InputValueList<'a>> {
        self.arguments
            .get_or_try_init(|| {
                let args = self.node.lookup.fetch_non_null_list("args")?;
                InputValueList::from_json(self.node.ctx, args)
            })
            .copied()
    }
}
