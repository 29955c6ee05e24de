#[macro_use]
extern crate bencher;

use bencher::Bencher;

fn graphql_parse_introspection(bench: &mut Bencher) {
    use graphql_schema::schema::*;
    bench.iter(|| parse_document(INTROSPECTION).unwrap());
}

fn graphql_load_schema_types(bench: &mut Bencher) {
    use graphql_schema::schema::*;
    let document = parse_document(INTROSPECTION).unwrap();

    bench.iter(|| {
        let ctx = SchemaContext::new();
        let schema = Schema::new(&ctx, &document).unwrap();
        schema.types_by_name().unwrap().len()
    });
}

fn graphql_walk_schema(bench: &mut Bencher) {
    use graphql_schema::schema::*;
    let document = parse_document(INTROSPECTION).unwrap();

    bench.iter(|| {
        let ctx = SchemaContext::new();
        let schema = Schema::new(&ctx, &document).unwrap();
        let mut count = 0;
        for schema_type in schema.types().unwrap() {
            for field in schema_type.fields(true).unwrap().unwrap_or_default() {
                count += field.required_args().unwrap().len();
                count += field.camelize_name().len();
                count += field.type_ref().unwrap().named_type().len();
            }
            for input_field in schema_type.input_fields().unwrap().unwrap_or_default() {
                count += input_field.upcase_name().len();
            }
            for enum_value in schema_type.enum_values(true).unwrap().unwrap_or_default() {
                count += enum_value.classify_name().len();
            }
        }
        count
    });
}

fn graphql_camelize(bench: &mut Bencher) {
    use graphql_schema::naming::*;
    bench.iter(|| {
        (
            camelize("set_string_with_default"),
            classify("getHTTPUrl"),
            upcase("directiveExample"),
        )
    });
}

benchmark_group!(
    schema,
    graphql_parse_introspection,
    graphql_load_schema_types,
    graphql_walk_schema,
    graphql_camelize
);

benchmark_main!(schema);

static INTROSPECTION: &str = include_str!("../fixture/introspection_query.json");
