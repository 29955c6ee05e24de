use serde_json::Value as JSValue;
use std::fmt;

use super::document::Lookup;
use super::{SchemaContext, TypeKind};
use crate::error::{Error, ErrorType, Result};

/// A reference to a type, as used by fields, arguments, and input fields.
///
/// Introspection describes the type of a field as a chain of `NON_NULL` and `LIST` wrappers that
/// terminates in a named type. For instance, `[String!]!` is reported as
/// `NON_NULL(LIST(NON_NULL(String)))`. Each wrapper owns the reference it wraps, and the chain is
/// allocated on the [SchemaContext]'s arena.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TypeRef<'a> {
    Named { kind: TypeKind, name: &'a str },
    List(&'a TypeRef<'a>),
    NonNull(&'a TypeRef<'a>),
}

impl<'a> TypeRef<'a> {
    /// Read a `{kind, name, ofType}` introspection node and the chain of nodes it wraps.
    pub fn from_json(ctx: &'a SchemaContext, json: &'a JSValue) -> Result<&'a TypeRef<'a>> {
        let lookup = Lookup::new(json, "__Type");
        let kind: TypeKind = lookup.fetch_enum("kind")?;
        let type_ref = match kind {
            TypeKind::List | TypeKind::NonNull => {
                let of_type = match lookup.fetch("ofType")? {
                    JSValue::Null => {
                        return Err(Error::new_with_context(
                            "`ofType`",
                            format!("{} type reference", kind),
                            ErrorType::MissingField,
                        ))
                    }
                    of_type => TypeRef::from_json(ctx, of_type)?,
                };
                if kind == TypeKind::List {
                    TypeRef::List(of_type)
                } else {
                    TypeRef::NonNull(of_type)
                }
            }
            kind => TypeRef::Named {
                kind,
                name: lookup.fetch_str("name")?,
            },
        };
        Ok(ctx.alloc(type_ref))
    }

    /// Returns the kind of this node of the chain.
    #[inline]
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeRef::Named { kind, .. } => *kind,
            TypeRef::List(_) => TypeKind::List,
            TypeRef::NonNull(_) => TypeKind::NonNull,
        }
    }

    /// Returns the type name if this node is a named type and not a wrapper.
    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        match self {
            TypeRef::Named { name, .. } => Some(*name),
            _ => None,
        }
    }

    /// Returns the wrapped reference if this node is a `LIST` or `NON_NULL` wrapper.
    #[inline]
    pub fn of_type(&self) -> Option<&'a TypeRef<'a>> {
        match self {
            TypeRef::List(of_type) | TypeRef::NonNull(of_type) => Some(*of_type),
            TypeRef::Named { .. } => None,
        }
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, TypeRef::List(_))
    }

    #[inline]
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// Strips all wrappers and returns the innermost named type.
    pub fn unwrap(&self) -> &TypeRef<'a> {
        match self {
            TypeRef::List(of_type) | TypeRef::NonNull(of_type) => of_type.unwrap(),
            TypeRef::Named { .. } => self,
        }
    }

    /// Strips `LIST` wrappers only, stopping at the first `NON_NULL` wrapper or named type.
    pub fn unwrap_list(&self) -> &TypeRef<'a> {
        match self {
            TypeRef::List(of_type) => of_type.unwrap_list(),
            _ => self,
        }
    }

    /// Strips `NON_NULL` wrappers only, stopping at the first `LIST` wrapper or named type.
    pub fn unwrap_non_null(&self) -> &TypeRef<'a> {
        match self {
            TypeRef::NonNull(of_type) => of_type.unwrap_non_null(),
            _ => self,
        }
    }

    /// Returns the kind of the innermost named type.
    #[inline]
    pub fn named_kind(&self) -> TypeKind {
        self.unwrap().kind()
    }

    /// Returns the name of the innermost named type.
    pub fn named_type(&self) -> &'a str {
        let mut type_ref = self;
        loop {
            match type_ref {
                TypeRef::Named { name, .. } => return *name,
                TypeRef::List(of_type) | TypeRef::NonNull(of_type) => type_ref = *of_type,
            }
        }
    }

    /// Returns whether the innermost named type is an object, interface, or union and hence
    /// requires a sub-selection in a query.
    #[inline]
    pub fn has_subfields(&self) -> bool {
        self.named_kind().has_subfields()
    }
}

/// Prints the reference in GraphQL's type notation, e.g. `[String!]!`.
impl<'a> fmt::Display for TypeRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named { name, .. } => f.write_str(name),
            TypeRef::List(of_type) => write!(f, "[{}]", of_type),
            TypeRef::NonNull(of_type) => write!(f, "{}!", of_type),
        }
    }
}

impl<'a> fmt::Debug for TypeRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { kind, name } => f.debug_tuple("Named").field(kind).field(name).finish(),
            Self::List(of_type) => f.debug_tuple("ListType").field(of_type).finish(),
            Self::NonNull(of_type) => f.debug_tuple("NonNullType").field(of_type).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named(kind: &str, name: &str) -> JSValue {
        json!({ "kind": kind, "name": name, "ofType": null })
    }

    fn wrap(kind: &str, of_type: JSValue) -> JSValue {
        json!({ "kind": kind, "name": null, "ofType": of_type })
    }

    fn non_null_string() -> JSValue {
        wrap("NON_NULL", named("SCALAR", "String"))
    }

    #[test]
    fn non_null_list_of_non_null_string() {
        let ctx = SchemaContext::new();
        let json = wrap("NON_NULL", wrap("LIST", non_null_string()));
        let type_ref = TypeRef::from_json(&ctx, &json).unwrap();

        assert!(type_ref.is_non_null());
        assert!(!type_ref.is_list());
        assert_eq!(type_ref.unwrap().name(), Some("String"));
        assert!(type_ref.unwrap_non_null().is_list());
        assert_eq!(type_ref.unwrap_non_null().unwrap().name(), Some("String"));
        assert_eq!(type_ref.unwrap_list().kind(), TypeKind::NonNull);
        assert_eq!(type_ref.named_type(), "String");
        assert!(!type_ref.has_subfields());
        assert_eq!(type_ref.to_string(), "[String!]!");
    }

    #[test]
    fn walk_of_type() {
        let ctx = SchemaContext::new();
        let json = wrap("NON_NULL", wrap("LIST", non_null_string()));
        let type_ref = TypeRef::from_json(&ctx, &json).unwrap();

        let list = type_ref.of_type().unwrap();
        assert_eq!(list.kind(), TypeKind::List);
        assert_eq!(list.name(), None);
        let item = list.of_type().unwrap();
        assert_eq!(item.kind(), TypeKind::NonNull);
        let scalar = item.of_type().unwrap();
        assert_eq!(scalar.kind(), TypeKind::Scalar);
        assert!(scalar.of_type().is_none());
    }

    #[test]
    fn list_of_objects_has_subfields() {
        let ctx = SchemaContext::new();
        let json = wrap("LIST", wrap("NON_NULL", named("INTERFACE", "Entry")));
        let type_ref = TypeRef::from_json(&ctx, &json).unwrap();

        assert!(type_ref.has_subfields());
        assert_eq!(type_ref.unwrap_list().kind(), TypeKind::NonNull);
        assert!(type_ref.unwrap_non_null().is_list());
        assert_eq!(type_ref.to_string(), "[Entry!]");
    }

    #[test]
    fn stripping_order_does_not_change_named_type() {
        let ctx = SchemaContext::new();
        let chains = [
            named("ENUM", "KeyType"),
            wrap("NON_NULL", named("OBJECT", "Entry")),
            wrap("LIST", wrap("LIST", named("SCALAR", "Int"))),
            wrap("NON_NULL", wrap("LIST", non_null_string())),
        ];
        for json in chains.iter() {
            let type_ref = TypeRef::from_json(&ctx, json).unwrap();
            assert_eq!(
                type_ref.unwrap_list().unwrap_non_null().unwrap(),
                type_ref.unwrap()
            );
            assert!(!type_ref.unwrap_list().is_list());
            assert!(!type_ref.unwrap_non_null().is_non_null());
            assert!(type_ref.unwrap().kind().is_named());
        }
    }

    #[test]
    fn nullability_of_list_is_independent_of_outer_non_null() {
        let ctx = SchemaContext::new();
        let inner = wrap("LIST", named("SCALAR", "ID"));
        let outer = wrap("NON_NULL", inner.clone());
        let nullable = TypeRef::from_json(&ctx, &inner).unwrap();
        let non_null = TypeRef::from_json(&ctx, &outer).unwrap();
        assert_eq!(
            nullable.unwrap_non_null().is_list(),
            non_null.unwrap_non_null().is_list()
        );
    }

    #[test]
    fn wrapper_without_of_type() {
        let ctx = SchemaContext::new();
        let json = json!({ "kind": "LIST", "name": null, "ofType": null });
        let err = TypeRef::from_json(&ctx, &json).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::MissingField);
        assert_eq!(err.message(), "`ofType`");
    }

    #[test]
    fn named_without_name() {
        let ctx = SchemaContext::new();
        let json = json!({ "kind": "SCALAR", "ofType": null });
        let err = TypeRef::from_json(&ctx, &json).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::MissingField);
    }
}
