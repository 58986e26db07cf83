use criterion::{criterion_group, criterion_main, Criterion, black_box};

use embergen::generation::{states, triggers, FireConfig};
use embergen::texture::create_test_texture;
use embergen::trigger::NoDefaultEvents;

fn bench_trigger_sheet(c: &mut Criterion) {
    let config = FireConfig::default();

    c.bench_function("build_trigger_sheet", |b| {
        b.iter(|| triggers::build_trigger_sheet(black_box(&config), &NoDefaultEvents));
    });
}

fn bench_state_table(c: &mut Criterion) {
    let config = FireConfig::default();
    let dir = std::env::temp_dir().join("embergen_bench");
    std::fs::create_dir_all(&dir).expect("failed to create bench dir");
    let texture = create_test_texture(&dir, "flame");
    let sheet = triggers::build_trigger_sheet(&config, &NoDefaultEvents);

    c.bench_function("build_state_table", |b| {
        b.iter(|| {
            states::build_block(black_box(&config), sheet.string_id(), black_box(&texture))
        });
    });
}

fn bench_sheet_serialization(c: &mut Criterion) {
    let config = FireConfig::default();
    let sheet = triggers::build_trigger_sheet(&config, &NoDefaultEvents);

    c.bench_function("serialize_trigger_sheet", |b| {
        b.iter(|| serde_json::to_string(black_box(&sheet)).expect("serialize failed"));
    });
}

criterion_group!(
    benches,
    bench_trigger_sheet,
    bench_state_table,
    bench_sheet_serialization
);
criterion_main!(benches);
