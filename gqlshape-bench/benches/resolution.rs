//! Type resolution and rendering benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use gqlshape_bench::fixtures::synthetic_schema;
use gqlshape_codegen::reason;
use gqlshape_schema::ir::EnumNames;
use gqlshape_schema::{TypeRef, build_ir, default_scalar_map, parse_schema, resolve_type_ref};
use std::hint::black_box;

fn benchmark_resolve_type_ref(c: &mut Criterion) {
    let scalars = default_scalar_map();
    let enums: EnumNames = ["Status".to_string()].into_iter().collect();
    let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("String"))));

    c.bench_function("resolve_type_ref", |b| {
        b.iter(|| resolve_type_ref(black_box(&ty), "tags", &scalars, &enums))
    });
}

fn benchmark_build_ir(c: &mut Criterion) {
    let schema = parse_schema(&synthetic_schema(500)).expect("Failed to parse");

    c.bench_function("build_ir_500", |b| {
        b.iter(|| build_ir(black_box(&schema), default_scalar_map()))
    });
}

fn benchmark_render(c: &mut Criterion) {
    let schema = parse_schema(&synthetic_schema(50)).expect("Failed to parse");
    let ir = build_ir(&schema, default_scalar_map());
    let fields: Vec<_> = ir.objects.iter().flat_map(|o| o.fields.iter()).collect();

    c.bench_function("render_accessor_types", |b| {
        b.iter(|| {
            for field in &fields {
                black_box(reason::accessor_type(field));
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_resolve_type_ref,
    benchmark_build_ir,
    benchmark_render
);
criterion_main!(benches);
