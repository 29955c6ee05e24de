use bumpalo::collections::Vec;
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::HashMap;
use once_cell::unsync::OnceCell;
use serde_json::Value as JSValue;

use super::capabilities::DeprecatableList;
use super::document::Node;
use super::{
    EnumValue, Field, InputValue, InputValueList, NamedEntity, SchemaContext, TypeKind, TypeRef,
};
use crate::error::Result;

/// Names of the scalar types that the GraphQL specification defines itself.
pub const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// Map of a type's fields by name
pub type FieldMap<'a> = HashMap<&'a str, &'a Field<'a>, DefaultHashBuilder, &'a bumpalo::Bump>;

/// A named, top-level type definition.
///
/// Which collections a type has depends on its kind. Objects and interfaces have fields, objects
/// implement interfaces, interfaces and unions have possible types, enums have values, and input
/// objects have input fields. Accessors for collections that don't apply to a type's kind return
/// `None`, which is distinct from `Some` of an empty list.
/// [Reference](https://spec.graphql.org/October2021/#sec-The-__Type-Type)
#[derive(Debug)]
pub struct TypeDefinition<'a> {
    node: Node<'a>,
    kind: TypeKind,
    fields: OnceCell<Option<DeprecatableList<'a, Field<'a>>>>,
    fields_by_name: OnceCell<Option<&'a FieldMap<'a>>>,
    input_fields: OnceCell<Option<InputValueList<'a>>>,
    interfaces: OnceCell<Option<&'a [TypeRef<'a>]>>,
    possible_types: OnceCell<Option<&'a [TypeRef<'a>]>>,
    enum_values: OnceCell<Option<DeprecatableList<'a, EnumValue<'a>>>>,
}

impl<'a> TypeDefinition<'a> {
    pub(crate) fn new(ctx: &'a SchemaContext, json: &'a JSValue) -> Result<Self> {
        let node = Node::new(ctx, json, "__Type")?;
        let kind = node.lookup.fetch_enum("kind")?;
        Ok(TypeDefinition {
            node,
            kind,
            fields: OnceCell::new(),
            fields_by_name: OnceCell::new(),
            input_fields: OnceCell::new(),
            interfaces: OnceCell::new(),
            possible_types: OnceCell::new(),
            enum_values: OnceCell::new(),
        })
    }

    #[inline]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.kind.is_scalar()
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        self.kind.is_object()
    }

    #[inline]
    pub fn is_interface(&self) -> bool {
        self.kind.is_interface()
    }

    #[inline]
    pub fn is_union(&self) -> bool {
        self.kind.is_union()
    }

    #[inline]
    pub fn is_enum(&self) -> bool {
        self.kind.is_enum()
    }

    #[inline]
    pub fn is_input_object(&self) -> bool {
        self.kind.is_input_object()
    }

    /// Returns whether this type is defined by the GraphQL specification rather than by the
    /// schema, i.e. whether it's an introspection type or a built-in scalar.
    #[inline]
    pub fn is_builtin(&self) -> bool {
        let name = self.node.name();
        name.starts_with("__") || BUILTIN_SCALARS.contains(&name)
    }

    /// Returns the URL of a custom scalar's specification, if introspection reported one.
    #[inline]
    pub fn specified_by_url(&self) -> Result<Option<&'a str>> {
        self.node.lookup.get_str("specifiedByURL")
    }

    fn field_list(&self) -> Result<Option<DeprecatableList<'a, Field<'a>>>> {
        self.fields
            .get_or_try_init(|| {
                let ctx = self.node.ctx;
                match self.node.lookup.fetch_list("fields")? {
                    Some(values) => {
                        let mut fields = Vec::with_capacity_in(values.len(), &ctx.arena);
                        for value in values.iter() {
                            fields.push(Field::new(ctx, value)?);
                        }
                        Ok(Some(DeprecatableList::new(ctx, fields.into_bump_slice())?))
                    }
                    None => Ok(None),
                }
            })
            .copied()
    }

    /// Get the fields of an object or interface type in document order.
    ///
    /// Deprecated fields are only included when `include_deprecated` is set.
    #[inline]
    pub fn fields(&self, include_deprecated: bool) -> Result<Option<&'a [&'a Field<'a>]>> {
        Ok(self
            .field_list()?
            .map(|fields| fields.view(include_deprecated)))
    }

    /// Get a map of all fields by name, including deprecated fields
    pub fn fields_by_name(&self) -> Result<Option<&'a FieldMap<'a>>> {
        self.fields_by_name
            .get_or_try_init(|| {
                let ctx = self.node.ctx;
                Ok(self.fields(true)?.map(|fields| {
                    let mut map = HashMap::with_capacity_in(fields.len(), &ctx.arena);
                    for field in fields.iter() {
                        map.insert(field.name(), *field);
                    }
                    ctx.alloc(map)
                }))
            })
            .copied()
    }

    /// Get a known field by name, including deprecated fields
    #[inline]
    pub fn field(&self, name: &str) -> Result<Option<&'a Field<'a>>> {
        Ok(self
            .fields_by_name()?
            .and_then(|fields| fields.get(name).copied()))
    }

    fn input_field_list(&self) -> Result<Option<InputValueList<'a>>> {
        self.input_fields
            .get_or_try_init(|| match self.node.lookup.fetch_list("inputFields")? {
                Some(values) => Ok(Some(InputValueList::from_json(self.node.ctx, values)?)),
                None => Ok(None),
            })
            .copied()
    }

    /// Get the fields of an input object type in document order
    #[inline]
    pub fn input_fields(&self) -> Result<Option<&'a [InputValue<'a>]>> {
        Ok(self.input_field_list()?.map(|fields| fields.all))
    }

    /// Get the input fields whose type is non-null
    #[inline]
    pub fn required_input_fields(&self) -> Result<Option<&'a [&'a InputValue<'a>]>> {
        Ok(self.input_field_list()?.map(|fields| fields.required))
    }

    /// Get the input fields whose type is nullable
    #[inline]
    pub fn optional_input_fields(&self) -> Result<Option<&'a [&'a InputValue<'a>]>> {
        Ok(self.input_field_list()?.map(|fields| fields.optional))
    }

    /// Get a known input field by name
    #[inline]
    pub fn input_field(&self, name: &str) -> Result<Option<&'a InputValue<'a>>> {
        Ok(self
            .input_field_list()?
            .and_then(|fields| fields.get(name)))
    }

    fn sorted_type_refs(&self, key: &str) -> Result<Option<&'a [TypeRef<'a>]>> {
        let ctx = self.node.ctx;
        match self.node.lookup.fetch_list(key)? {
            Some(values) => {
                let mut type_refs = Vec::with_capacity_in(values.len(), &ctx.arena);
                for value in values.iter() {
                    type_refs.push(*TypeRef::from_json(ctx, value)?);
                }
                type_refs.sort_by(|a, b| a.named_type().cmp(b.named_type()));
                Ok(Some(type_refs.into_bump_slice()))
            }
            None => Ok(None),
        }
    }

    /// Get the interfaces an object type implements, sorted by name
    pub fn interfaces(&self) -> Result<Option<&'a [TypeRef<'a>]>> {
        self.interfaces
            .get_or_try_init(|| self.sorted_type_refs("interfaces"))
            .copied()
    }

    /// Checks whether this type implements the interface with the given name
    pub fn implements(&self, interface_name: &str) -> Result<bool> {
        Ok(self.interfaces()?.is_some_and(|interfaces| {
            interfaces
                .iter()
                .any(|interface| interface.named_type() == interface_name)
        }))
    }

    /// Get the object types an interface or union type may resolve to, sorted by name
    pub fn possible_types(&self) -> Result<Option<&'a [TypeRef<'a>]>> {
        self.possible_types
            .get_or_try_init(|| self.sorted_type_refs("possibleTypes"))
            .copied()
    }

    /// Checks whether the object type with the given name is a possible type of this type
    pub fn is_possible_type(&self, type_name: &str) -> Result<bool> {
        Ok(self.possible_types()?.is_some_and(|possible_types| {
            possible_types
                .iter()
                .any(|possible_type| possible_type.named_type() == type_name)
        }))
    }

    fn enum_value_list(&self) -> Result<Option<DeprecatableList<'a, EnumValue<'a>>>> {
        self.enum_values
            .get_or_try_init(|| {
                let ctx = self.node.ctx;
                match self.node.lookup.fetch_list("enumValues")? {
                    Some(values) => {
                        let mut enum_values = Vec::with_capacity_in(values.len(), &ctx.arena);
                        for value in values.iter() {
                            enum_values.push(EnumValue::new(ctx, value)?);
                        }
                        enum_values.sort_by(|a, b| a.name().cmp(b.name()));
                        let enum_values = enum_values.into_bump_slice();
                        Ok(Some(DeprecatableList::new(ctx, enum_values)?))
                    }
                    None => Ok(None),
                }
            })
            .copied()
    }

    /// Get the values of an enum type, sorted by name.
    ///
    /// Deprecated values are only included when `include_deprecated` is set.
    #[inline]
    pub fn enum_values(&self, include_deprecated: bool) -> Result<Option<&'a [&'a EnumValue<'a>]>> {
        Ok(self
            .enum_value_list()?
            .map(|values| values.view(include_deprecated)))
    }
}

impl<'a> NamedEntity<'a> for TypeDefinition<'a> {
    #[inline]
    fn node(&self) -> &Node<'a> {
        &self.node
    }
}
