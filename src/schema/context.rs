/// A context for a GraphQL schema view.
///
/// The schema context holds the arena that every entity, derived list, type reference, and name
/// map of a [Schema](super::Schema) is allocated into. Its lifetime bounds the lifetime of the
/// schema view, while the introspection document itself is owned by the caller.
///
/// ```
/// use graphql_schema::schema::*;
///
/// let ctx = SchemaContext::new();
/// let document = parse_document(include_str!("../../fixture/introspection_query.json")).unwrap();
/// let schema = Schema::new(&ctx, &document).unwrap();
/// assert_eq!(schema.query_root_name().unwrap(), "QueryRoot");
/// ```
pub struct SchemaContext {
    /// An arena allocator that holds the memory allocated for the Schema Context's lifetime
    pub arena: bumpalo::Bump,
}

impl SchemaContext {
    /// Create a new schema context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        SchemaContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    ///
    /// Values put onto the arena are never dropped, so `item` must not own any heap memory
    /// outside of this arena.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }
}

impl Default for SchemaContext {
    fn default() -> Self {
        Self::new()
    }
}
