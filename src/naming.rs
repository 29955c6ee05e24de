//! # Identifier Casing
//!
//! The `graphql_schema::naming` module converts raw GraphQL identifiers into the three casings
//! that code generators typically need. GraphQL names fields and arguments in `camelCase` (or
//! sometimes `snake_case`) while enum values and directive locations are written in
//! `UPPER_SNAKE` case:
//!
//! - [camelize] produces `camelCase`, e.g. for accessor names
//! - [classify] produces `PascalCase`, e.g. for type or class names
//! - [upcase] produces `UPPER_SNAKE` case, e.g. for constants
//!
//! All three are derived from the words returned by [split_name]:
//!
//! ```
//! use graphql_schema::naming::*;
//!
//! assert_eq!(split_name("getString"), vec!["get", "String"]);
//! assert_eq!(camelize("NOT_FOUND"), "notFound");
//! assert_eq!(classify("getString"), "GetString");
//! assert_eq!(upcase("getString"), "GET_STRING");
//! ```
//!
//! Runs of uppercase letters aren't treated as acronyms. `getHTTPUrl` splits into `get` and
//! `HTTPUrl` only, which is kept as is so that previously generated identifiers don't change.

use bumpalo::Bump;

/// Splits a name into words.
///
/// A word boundary is inserted wherever a lowercase ASCII letter is directly followed by an
/// uppercase ASCII letter or an ASCII digit, and the name is then split on underscores. Trailing
/// empty words are dropped, while leading and inner empty words (from `__` prefixes or doubled
/// underscores) are kept.
pub fn split_name(name: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (idx, c) in name.char_indices() {
        if c == '_' {
            words.push(&name[start..idx]);
            start = idx + c.len_utf8();
        } else if matches!(prev, Some(p) if p.is_ascii_lowercase())
            && (c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            words.push(&name[start..idx]);
            start = idx;
        }
        prev = Some(c);
    }
    words.push(&name[start..]);
    while words.last().is_some_and(|word| word.is_empty()) {
        words.pop();
    }
    words
}

/// Converts a name to `camelCase`.
pub fn camelize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    camelize_into(&split_name(name), &mut out);
    out
}

/// Converts a name to `PascalCase`.
pub fn classify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    classify_into(&split_name(name), &mut out);
    out
}

/// Converts a name to `UPPER_SNAKE` case.
pub fn upcase(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    upcase_into(&split_name(name), &mut out);
    out
}

/// All three casings of a single name, allocated on an arena.
///
/// Entities of a [Schema](crate::schema::Schema) cache these so that each name is only split
/// once, no matter how often a code generator asks for its forms.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NameForms<'a> {
    pub camelized: &'a str,
    pub classified: &'a str,
    pub upcased: &'a str,
}

impl<'a> NameForms<'a> {
    /// Split `name` once and allocate its `camelCase`, `PascalCase`, and `UPPER_SNAKE` forms.
    pub fn new_in(name: &str, arena: &'a Bump) -> Self {
        let words = split_name(name);

        let mut camelized = bumpalo::collections::String::with_capacity_in(name.len(), arena);
        camelize_into(&words, &mut camelized);
        let mut classified = bumpalo::collections::String::with_capacity_in(name.len(), arena);
        classify_into(&words, &mut classified);
        let mut upcased = bumpalo::collections::String::with_capacity_in(name.len() + 4, arena);
        upcase_into(&words, &mut upcased);

        NameForms {
            camelized: camelized.into_bump_str(),
            classified: classified.into_bump_str(),
            upcased: upcased.into_bump_str(),
        }
    }
}

#[inline]
fn push_capitalized<S: Extend<char>>(out: &mut S, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.extend(chars.flat_map(char::to_lowercase));
    }
}

fn camelize_into<S: Extend<char>>(words: &[&str], out: &mut S) {
    let mut leading = true;
    for word in words {
        // The first letter of the joined result is lowercased, which lowercases the whole
        // first non-empty word since the rest of it is lowercased by capitalization anyway.
        if leading && !word.is_empty() {
            out.extend(word.chars().flat_map(char::to_lowercase));
            leading = false;
        } else {
            push_capitalized(out, word);
        }
    }
}

fn classify_into<S: Extend<char>>(words: &[&str], out: &mut S) {
    for word in words {
        push_capitalized(out, word);
    }
}

fn upcase_into<S: Extend<char>>(words: &[&str], out: &mut S) {
    for (index, word) in words.iter().enumerate() {
        if index > 0 {
            out.extend(Some('_'));
        }
        out.extend(word.chars().flat_map(char::to_uppercase));
    }
}
