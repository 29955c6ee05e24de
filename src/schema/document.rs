use log::trace;
use once_cell::unsync::OnceCell;
use serde::Deserialize;
use serde_json::Value as JSValue;

use super::SchemaContext;
use crate::error::{Error, ErrorType, Result};
use crate::naming::NameForms;

/// Parse introspection JSON source text into a document that a [Schema](super::Schema) can be
/// created from.
///
/// Malformed JSON fails with [ErrorType::Syntax].
pub fn parse_document(source: &str) -> Result<JSValue> {
    Ok(serde_json::from_str(source)?)
}

/// Typed, fail-fast access to the keys of a single introspection document node.
///
/// The owner and its name are only used to describe the node when a lookup fails.
#[derive(Clone, Copy)]
pub(crate) struct Lookup<'a> {
    pub(crate) json: &'a JSValue,
    owner: &'static str,
    name: Option<&'a str>,
}

impl<'a> Lookup<'a> {
    #[inline]
    pub(crate) fn new(json: &'a JSValue, owner: &'static str) -> Self {
        Lookup {
            json,
            owner,
            name: None,
        }
    }

    #[inline]
    pub(crate) fn named(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    fn context(&self) -> String {
        match self.name {
            Some(name) => format!("{} `{}`", self.owner, name),
            None => self.owner.to_string(),
        }
    }

    fn missing(&self, key: &str) -> Error {
        trace!("missing `{}` on {}", key, self.context());
        Error::new_with_context(
            format!("`{}`", key),
            self.context(),
            ErrorType::MissingField,
        )
    }

    fn unexpected(&self, key: &str, expected: &str) -> Error {
        trace!("unexpected value for `{}` on {}", key, self.context());
        Error::new_with_context(
            format!("expected {} for `{}`", expected, key),
            self.context(),
            ErrorType::UnexpectedValue,
        )
    }

    /// Returns the value of a required key, which may still be `null`.
    pub(crate) fn fetch(&self, key: &str) -> Result<&'a JSValue> {
        match self.json {
            JSValue::Object(map) => map.get(key).ok_or_else(|| self.missing(key)),
            _ => Err(Error::new_with_context(
                "expected an object",
                self.context(),
                ErrorType::UnexpectedValue,
            )),
        }
    }

    /// Returns the value of an optional key, treating an absent key like `null`.
    pub(crate) fn get(&self, key: &str) -> Result<Option<&'a JSValue>> {
        match self.fetch(key) {
            Ok(JSValue::Null) => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(err) if err.error_type() == ErrorType::MissingField => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Returns a required, non-null object under `key` as a new lookup.
    pub(crate) fn fetch_object(&self, key: &str, owner: &'static str) -> Result<Lookup<'a>> {
        match self.fetch(key)? {
            JSValue::Null => Err(self.missing(key)),
            value @ JSValue::Object(_) => Ok(Lookup::new(value, owner)),
            _ => Err(self.unexpected(key, "an object")),
        }
    }

    pub(crate) fn fetch_str(&self, key: &str) -> Result<&'a str> {
        match self.fetch(key)? {
            JSValue::String(value) => Ok(value.as_str()),
            _ => Err(self.unexpected(key, "a string")),
        }
    }

    pub(crate) fn fetch_opt_str(&self, key: &str) -> Result<Option<&'a str>> {
        match self.fetch(key)? {
            JSValue::Null => Ok(None),
            JSValue::String(value) => Ok(Some(value.as_str())),
            _ => Err(self.unexpected(key, "a string or null")),
        }
    }

    pub(crate) fn get_str(&self, key: &str) -> Result<Option<&'a str>> {
        match self.get(key)? {
            None => Ok(None),
            Some(JSValue::String(value)) => Ok(Some(value.as_str())),
            Some(_) => Err(self.unexpected(key, "a string or null")),
        }
    }

    pub(crate) fn fetch_bool(&self, key: &str) -> Result<bool> {
        match self.fetch(key)? {
            JSValue::Bool(value) => Ok(*value),
            _ => Err(self.unexpected(key, "a boolean")),
        }
    }

    pub(crate) fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.get(key)? {
            None => Ok(None),
            Some(JSValue::Bool(value)) => Ok(Some(*value)),
            Some(_) => Err(self.unexpected(key, "a boolean or null")),
        }
    }

    /// Returns a required list. A `null` list is returned as `None`.
    pub(crate) fn fetch_list(&self, key: &str) -> Result<Option<&'a [JSValue]>> {
        match self.fetch(key)? {
            JSValue::Null => Ok(None),
            JSValue::Array(values) => Ok(Some(values.as_slice())),
            _ => Err(self.unexpected(key, "a list or null")),
        }
    }

    /// Returns a required list that may not be `null`.
    pub(crate) fn fetch_non_null_list(&self, key: &str) -> Result<&'a [JSValue]> {
        self.fetch_list(key)?
            .ok_or_else(|| self.unexpected(key, "a list"))
    }

    /// Deserializes the value under `key` into one of the introspection enums.
    pub(crate) fn fetch_enum<T: Deserialize<'a>>(&self, key: &str) -> Result<T> {
        T::deserialize(self.fetch(key)?).map_err(|_| self.unexpected(key, "a known enum value"))
    }
}

/// The document node backing a named entity.
///
/// Every entity embeds a node, which reads the entity's name once when it's created and caches
/// the casings of that name on first access.
pub struct Node<'a> {
    pub(crate) ctx: &'a SchemaContext,
    pub(crate) lookup: Lookup<'a>,
    name: &'a str,
    name_forms: OnceCell<NameForms<'a>>,
}

impl<'a> Node<'a> {
    pub(crate) fn new(
        ctx: &'a SchemaContext,
        json: &'a JSValue,
        owner: &'static str,
    ) -> Result<Self> {
        let lookup = Lookup::new(json, owner);
        let name = lookup.fetch_str("name")?;
        Ok(Node {
            ctx,
            lookup: lookup.named(name),
            name,
            name_forms: OnceCell::new(),
        })
    }

    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    #[inline]
    pub fn json(&self) -> &'a JSValue {
        self.lookup.json
    }

    pub fn name_forms(&self) -> NameForms<'a> {
        *self
            .name_forms
            .get_or_init(|| NameForms::new_in(self.name, &self.ctx.arena))
    }
}

impl<'a> std::fmt::Debug for Node<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(self.lookup.owner).field(&self.name).finish()
    }
}
