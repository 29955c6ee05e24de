use once_cell::unsync::OnceCell;
use serde_json::Value as JSValue;

use super::document::Node;
use super::{NamedEntity, SchemaContext, TypeRef};
use crate::error::Result;

/// An argument or input object field.
///
/// Input values are accepted by fields and directives as arguments and make up the fields of
/// input objects.
/// [Reference](https://spec.graphql.org/October2021/#sec-The-__InputValue-Type)
#[derive(Debug)]
pub struct InputValue<'a> {
    node: Node<'a>,
    type_ref: OnceCell<&'a TypeRef<'a>>,
}

impl<'a> InputValue<'a> {
    pub(crate) fn new(ctx: &'a SchemaContext, json: &'a JSValue) -> Result<Self> {
        Ok(InputValue {
            node: Node::new(ctx, json, "__InputValue")?,
            type_ref: OnceCell::new(),
        })
    }

    /// Returns the type of values this input value accepts
    pub fn type_ref(&self) -> Result<&'a TypeRef<'a>> {
        self.type_ref
            .get_or_try_init(|| {
                TypeRef::from_json(self.node.ctx, self.node.lookup.fetch("type")?)
            })
            .copied()
    }

    /// Returns the default value as the GraphQL literal that introspection reported, e.g.
    /// `"\"I am default\""` for a string or `"false"` for a boolean. The value isn't coerced.
    #[inline]
    pub fn default_value(&self) -> Result<Option<&'a str>> {
        self.node.lookup.fetch_opt_str("defaultValue")
    }

    /// Returns whether a value must be passed, which is the case when the type is non-null.
    #[inline]
    pub fn is_required(&self) -> Result<bool> {
        Ok(self.type_ref()?.is_non_null())
    }
}

impl<'a> NamedEntity<'a> for InputValue<'a> {
    #[inline]
    fn node(&self) -> &Node<'a> {
        &self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorType;
    use serde_json::json;

    #[test]
    fn input_value() {
        let ctx = SchemaContext::new();
        let json = json!({
            "name": "negate",
            "description": null,
            "type": { "kind": "SCALAR", "name": "Boolean", "ofType": null },
            "defaultValue": "false"
        });
        let value = InputValue::new(&ctx, &json).unwrap();

        assert_eq!(value.name(), "negate");
        assert_eq!(value.description().unwrap(), None);
        assert_eq!(value.default_value().unwrap(), Some("false"));
        assert_eq!(value.type_ref().unwrap().named_type(), "Boolean");
        assert!(!value.is_required().unwrap());
        let type_ref = value.type_ref().unwrap();
        assert!(std::ptr::eq(type_ref, value.type_ref().unwrap()));
    }

    #[test]
    fn missing_type() {
        let ctx = SchemaContext::new();
        let json = json!({ "name": "key", "description": null, "defaultValue": null });
        let value = InputValue::new(&ctx, &json).unwrap();

        let err = value.type_ref().unwrap_err();
        assert_eq!(err.error_type(), ErrorType::MissingField);
        assert_eq!(err.context(), Some("__InputValue `key`"));
    }
}
