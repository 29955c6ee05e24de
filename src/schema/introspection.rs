use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a type or of a type reference, as reported by `__Type.kind`.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-The-__Type-Type)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    /// Returns the introspection name of this kind, e.g. `"INPUT_OBJECT"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::List => "LIST",
            TypeKind::NonNull => "NON_NULL",
        }
    }

    /// Returns whether this kind names a type rather than wrapping one.
    #[inline]
    pub fn is_named(&self) -> bool {
        !matches!(self, TypeKind::List | TypeKind::NonNull)
    }

    /// Returns whether values of this kind require a sub-selection when selected in a query.
    #[inline]
    pub fn has_subfields(&self) -> bool {
        matches!(
            self,
            TypeKind::Object | TypeKind::Interface | TypeKind::Union
        )
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        *self == TypeKind::Scalar
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        *self == TypeKind::Object
    }

    #[inline]
    pub fn is_interface(&self) -> bool {
        *self == TypeKind::Interface
    }

    #[inline]
    pub fn is_union(&self) -> bool {
        *self == TypeKind::Union
    }

    #[inline]
    pub fn is_enum(&self) -> bool {
        *self == TypeKind::Enum
    }

    #[inline]
    pub fn is_input_object(&self) -> bool {
        *self == TypeKind::InputObject
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        *self == TypeKind::List
    }

    #[inline]
    pub fn is_non_null(&self) -> bool {
        *self == TypeKind::NonNull
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A location that a directive may be placed at, as reported by `__Directive.locations`.
///
/// [Reference](https://spec.graphql.org/October2021/#DirectiveLocations)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// Returns the introspection name of this location, e.g. `"FIELD_DEFINITION"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    /// Returns whether this location is part of an executable document rather than of a schema.
    #[inline]
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            DirectiveLocation::Query
                | DirectiveLocation::Mutation
                | DirectiveLocation::Subscription
                | DirectiveLocation::Field
                | DirectiveLocation::FragmentDefinition
                | DirectiveLocation::FragmentSpread
                | DirectiveLocation::InlineFragment
                | DirectiveLocation::VariableDefinition
        )
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_names() {
        let kind: TypeKind = serde_json::from_value(json!("INPUT_OBJECT")).unwrap();
        assert_eq!(kind, TypeKind::InputObject);
        assert_eq!(kind.to_string(), "INPUT_OBJECT");
        let lowercase = serde_json::from_value::<TypeKind>(json!("input_object"));
        assert!(lowercase.is_err());
    }

    #[test]
    fn kind_predicates() {
        assert!(TypeKind::Union.has_subfields());
        assert!(!TypeKind::Enum.has_subfields());
        assert!(TypeKind::Scalar.is_named());
        assert!(!TypeKind::NonNull.is_named());
    }

    #[test]
    fn location_names() {
        let location: DirectiveLocation =
            serde_json::from_value(json!("FIELD_DEFINITION")).unwrap();
        assert_eq!(location, DirectiveLocation::FieldDefinition);
        assert_eq!(location.as_str(), "FIELD_DEFINITION");
        assert!(!location.is_executable());
        assert!(DirectiveLocation::InlineFragment.is_executable());
    }
}
