use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use guid7::{DefaultCodec, Uuid};

fn bench_generate(c: &mut Criterion) {
    c.bench_function("uuid4", |b| b.iter(guid7::uuid4));
    c.bench_function("uuid7", |b| b.iter(guid7::uuid7));

    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    c.bench_function("uuid7_at", |b| b.iter(|| guid7::uuid7_at(black_box(&ts))));

    let mut g = DefaultCodec::default();
    c.bench_function("codec_generate_v7", |b| b.iter(|| g.generate_v7()));
}

fn bench_inspect(c: &mut Criterion) {
    let uuid = Uuid::from(0x0180_ae59_078c_7b80_b113_2fe1_4a61_5fb3u128);
    c.bench_function("version_and_variant", |b| {
        b.iter(|| (black_box(uuid).version(), black_box(uuid).variant()))
    });
    c.bench_function("encode", |b| b.iter(|| black_box(uuid).encode()));
}

criterion_group!(codec_perf, bench_generate, bench_inspect);
criterion_main!(codec_perf);
