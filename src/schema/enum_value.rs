use serde_json::Value as JSValue;

use super::document::Node;
use super::{Deprecatable, NamedEntity, SchemaContext};
use crate::error::Result;

/// A value of an enum type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-The-__EnumValue-Type)
#[derive(Debug)]
pub struct EnumValue<'a> {
    node: Node<'a>,
}

impl<'a> EnumValue<'a> {
    pub(crate) fn new(ctx: &'a SchemaContext, json: &'a JSValue) -> Result<Self> {
        Ok(EnumValue {
            node: Node::new(ctx, json, "__EnumValue")?,
        })
    }
}

impl<'a> NamedEntity<'a> for EnumValue<'a> {
    #[inline]
    fn node(&self) -> &Node<'a> {
        &self.node
    }
}

impl<'a> Deprecatable<'a> for EnumValue<'a> {}
