use bumpalo::collections::Vec;
use once_cell::unsync::OnceCell;
use serde::Deserialize;
use serde_json::Value as JSValue;

use super::document::Node;
use super::{DirectiveLocation, HasArguments, InputValueList, NamedEntity, SchemaContext};
use crate::error::{Error, ErrorType, Result};

/// Names of the directives that the GraphQL specification defines itself.
pub const BUILTIN_DIRECTIVES: [&str; 5] = ["skip", "include", "deprecated", "oneOf", "specifiedBy"];

/// A Directive definition.
///
/// Directives annotate parts of a document or schema at a fixed set of locations and may accept
/// arguments.
/// [Reference](https://spec.graphql.org/October2021/#sec-The-__Directive-Type)
#[derive(Debug)]
pub struct Directive<'a> {
    node: Node<'a>,
    locations: OnceCell<&'a [DirectiveLocation]>,
    location_names: OnceCell<&'a [&'a str]>,
    arguments: OnceCell<InputValueList<'a>>,
}

impl<'a> Directive<'a> {
    pub(crate) fn new(ctx: &'a SchemaContext, json: &'a JSValue) -> Result<Self> {
        Ok(Directive {
            node: Node::new(ctx, json, "__Directive")?,
            locations: OnceCell::new(),
            location_names: OnceCell::new(),
            arguments: OnceCell::new(),
        })
    }

    fn unknown_location(&self, value: &JSValue) -> Error {
        Error::new_with_context(
            format!("unknown directive location {}", value),
            format!("__Directive `{}`", self.node.name()),
            ErrorType::UnexpectedValue,
        )
    }

    /// Returns the locations this directive may be placed at, in document order.
    ///
    /// Fails on location names this crate doesn't know, see [Directive::location_names].
    pub fn locations(&self) -> Result<&'a [DirectiveLocation]> {
        self.locations
            .get_or_try_init(|| {
                let values = self.node.lookup.fetch_non_null_list("locations")?;
                let mut locations = Vec::with_capacity_in(values.len(), &self.node.ctx.arena);
                for value in values.iter() {
                    let location = DirectiveLocation::deserialize(value)
                        .map_err(|_| self.unknown_location(value))?;
                    locations.push(location);
                }
                Ok(locations.into_bump_slice())
            })
            .copied()
    }

    /// Returns the names of the locations this directive may be placed at, in document order and
    /// exactly as introspection reported them.
    ///
    /// Servers that implement a newer version of GraphQL may report locations which aren't a
    /// [DirectiveLocation]; these are returned here as well.
    pub fn location_names(&self) -> Result<&'a [&'a str]> {
        self.location_names
            .get_or_try_init(|| {
                let values = self.node.lookup.fetch_non_null_list("locations")?;
                let mut names = Vec::with_capacity_in(values.len(), &self.node.ctx.arena);
                for value in values.iter() {
                    match value {
                        JSValue::String(name) => names.push(name.as_str()),
                        _ => return Err(self.unknown_location(value)),
                    }
                }
                Ok(names.into_bump_slice())
            })
            .copied()
    }

    /// Returns whether this directive may be placed at the given location
    #[inline]
    pub fn has_location(&self, location: DirectiveLocation) -> Result<bool> {
        let name = location.as_str();
        Ok(self.location_names()?.contains(&name))
    }

    /// Returns whether this directive may be used repeatedly at a single location.
    ///
    /// Introspection results of older servers don't report this, in which case it's `false`.
    #[inline]
    pub fn is_repeatable(&self) -> Result<bool> {
        Ok(self.node.lookup.get_bool("isRepeatable")?.unwrap_or(false))
    }

    /// Returns whether this is one of the directives defined by the GraphQL specification
    #[inline]
    pub fn is_builtin(&self) -> bool {
        BUILTIN_DIRECTIVES.contains(&self.node.name())
    }
}

impl<'a> NamedEntity<'a> for Directive<'a> {
    #[inline]
    fn node(&self) -> &Node<'a> {
        &self.node
    }
}

impl<'a> HasArguments<'a> for Directive<'a> {
    fn arguments(&self) -> Result<InputValueList<'a>> {
        self.arguments
            .get_or_try_init(|| {
                let args = self.node.lookup.fetch_non_null_list("args")?;
                InputValueList::from_json(self.node.ctx, args)
            })
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn directive_json(name: &str, locations: JSValue) -> JSValue {
        json!({
            "name": name,
            "description": null,
            "locations": locations,
            "args": [
                {
                    "name": "if",
                    "description": null,
                    "type": {
                        "kind": "NON_NULL",
                        "name": null,
                        "ofType": { "kind": "SCALAR", "name": "Boolean", "ofType": null }
                    },
                    "defaultValue": null
                }
            ]
        })
    }

    #[test]
    fn skip_directive() {
        let ctx = SchemaContext::new();
        let locations = json!(["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"]);
        let json = directive_json("skip", locations);
        let directive = Directive::new(&ctx, &json).unwrap();

        assert!(directive.is_builtin());
        assert!(!directive.is_repeatable().unwrap());
        assert_eq!(
            directive.locations().unwrap(),
            &[
                DirectiveLocation::Field,
                DirectiveLocation::FragmentSpread,
                DirectiveLocation::InlineFragment
            ]
        );
        assert!(directive.has_location(DirectiveLocation::Field).unwrap());
        assert!(!directive.has_location(DirectiveLocation::Query).unwrap());
        assert_eq!(directive.required_args().unwrap().len(), 1);
        assert!(directive.optional_args().unwrap().is_empty());
    }

    #[test]
    fn builtin_directives() {
        let ctx = SchemaContext::new();
        for name in BUILTIN_DIRECTIVES {
            let json = directive_json(name, json!(["FIELD"]));
            let directive = Directive::new(&ctx, &json).unwrap();
            assert!(directive.is_builtin(), "{}", name);
        }
        for name in ["Skip", "includes", "oneof", "specified_by", "if"] {
            let json = directive_json(name, json!(["FIELD"]));
            let directive = Directive::new(&ctx, &json).unwrap();
            assert!(!directive.is_builtin(), "{}", name);
        }
    }

    #[test]
    fn custom_directive() {
        let ctx = SchemaContext::new();
        let json = directive_json("directiveExample", json!(["FIELD"]));
        let directive = Directive::new(&ctx, &json).unwrap();
        assert!(!directive.is_builtin());
        assert_eq!(directive.upcase_name(), "DIRECTIVE_EXAMPLE");
    }

    #[test]
    fn repeatable_directive() {
        let ctx = SchemaContext::new();
        let mut json = directive_json("tag", json!(["OBJECT", "FIELD_DEFINITION"]));
        json["isRepeatable"] = json!(true);
        let directive = Directive::new(&ctx, &json).unwrap();
        assert!(directive.is_repeatable().unwrap());
    }

    #[test]
    fn unknown_location() {
        let ctx = SchemaContext::new();
        let locations = json!(["FIELD", "FRAGMENT_VARIABLE_DEFINITION"]);
        let json = directive_json("custom", locations);
        let directive = Directive::new(&ctx, &json).unwrap();

        let err = directive.locations().unwrap_err();
        assert_eq!(err.error_type(), ErrorType::UnexpectedValue);
        assert_eq!(err.context(), Some("__Directive `custom`"));

        let names = directive.location_names().unwrap();
        assert_eq!(names, &["FIELD", "FRAGMENT_VARIABLE_DEFINITION"]);
        assert!(directive.has_location(DirectiveLocation::Field).unwrap());
    }

    #[test]
    fn location_that_is_not_a_string() {
        let ctx = SchemaContext::new();
        let json = directive_json("custom", json!(["FIELD", 1]));
        let directive = Directive::new(&ctx, &json).unwrap();

        let err = directive.location_names().unwrap_err();
        assert_eq!(err.error_type(), ErrorType::UnexpectedValue);
    }
}
