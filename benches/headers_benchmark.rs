use actix_web_security_headers::{
    ContentTypeOptionsExt, CspPolicyBuilder, FrameOptionsExt, ResponseHeadersBuilder,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn complex_policy() -> CspPolicyBuilder {
    let mut builder = CspPolicyBuilder::new();
    builder.default_src().allow_from_self().unwrap();
    builder
        .script_src()
        .allow_from_self()
        .and_then(|s| s.allow_host("cdn.example.com"))
        .and_then(|s| s.allow_host("*.googleapis.com"))
        .and_then(|s| s.dynamic())
        .unwrap();
    builder
        .style_src()
        .allow_from_self()
        .and_then(|s| s.allow_inline())
        .and_then(|s| s.allow_host("fonts.googleapis.com"))
        .unwrap();
    builder
        .img_src()
        .allow_from_self()
        .and_then(|s| s.allow_from_scheme("data:"))
        .unwrap();
    builder
        .connect_src()
        .allow_from_self()
        .and_then(|s| s.allow_from_origin("https://api.example.com"))
        .unwrap();
    builder.object_src().disallow_all().unwrap();
    builder.frame_ancestors().disallow_all().unwrap();
    builder.plugin_types().add("application/pdf");
    builder
}

fn benchmark_policy_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy_creation");

    group.bench_function("simple_policy", |b| {
        b.iter(|| {
            let mut builder = CspPolicyBuilder::new();
            builder.default_src().allow_from_self().unwrap();
            black_box(builder.build())
        })
    });

    group.bench_function("complex_policy", |b| b.iter(|| black_box(complex_policy().build())));

    group.finish();
}

fn benchmark_header_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("header_generation");
    let policy = complex_policy().policy();

    group.bench_function("header_value", |b| {
        b.iter(|| black_box(policy.header_value().unwrap()))
    });

    group.bench_function("display", |b| b.iter(|| black_box(policy.to_string())));

    group.bench_function("response_headers", |b| {
        b.iter(|| {
            let mut builder = ResponseHeadersBuilder::new();
            builder
                .add_policy(&policy)
                .prevent_framing()
                .prevent_content_type_sniffing();
            black_box(builder.build().unwrap())
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_policy_creation, benchmark_header_generation);
criterion_main!(benches);
