//! Criterion benchmarks for sheetanim critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Keys: recursive key normalization
//! - Decoder: full document decode (frames, slices, tags)
//! - Mirror: horizontal mirroring of decoded animations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};
use sheetanim::keys::normalize_keys;
use sheetanim::{mirror_set, project_to_sprites, SpriteSheetDecoder};
use std::path::Path;

// =============================================================================
// Test Data Generators
// =============================================================================

/// Generate a sheet with `frame_count` frames, one tag per 8 frames and a
/// few keyframed slices.
fn make_sheet(frame_count: usize) -> Value {
    let frames: Vec<Value> = (0..frame_count)
        .map(|i| {
            json!({
                "frame": {"x": (i % 16) * 32, "y": (i / 16) * 32, "w": 32, "h": 32},
                "duration": 100 + (i % 4) * 25
            })
        })
        .collect();

    let tags: Vec<Value> = (0..frame_count / 8)
        .map(|t| {
            json!({
                "name": format!("Tag {}", t),
                "from": t * 8,
                "to": t * 8 + 7,
                "direction": if t % 2 == 0 { "forward" } else { "pingpong" }
            })
        })
        .collect();

    let slices: Vec<Value> = ["hitbox", "hurtbox", "weapon"]
        .iter()
        .map(|name| {
            let keys: Vec<Value> = (0..frame_count)
                .step_by(4)
                .map(|f| json!({"frame": f, "bounds": {"x": f % 8, "y": 4, "w": 8, "h": 12}}))
                .collect();
            json!({"name": name, "keys": keys})
        })
        .collect();

    json!({
        "frames": frames,
        "meta": {"image": "bench.png", "frameTags": tags, "slices": slices}
    })
}

// =============================================================================
// Keys Benchmarks
// =============================================================================

fn bench_normalize_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("keys");

    for frames in [64, 512] {
        let sheet = make_sheet(frames);
        group.throughput(Throughput::Elements(frames as u64));
        group.bench_with_input(BenchmarkId::new("normalize", frames), &sheet, |b, sheet| {
            b.iter(|| normalize_keys(black_box(sheet.clone())))
        });
    }

    group.finish();
}

// =============================================================================
// Decoder Benchmarks
// =============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoder");
    let decoder = SpriteSheetDecoder::default();

    for frames in [64, 512] {
        let sheet = make_sheet(frames);
        group.throughput(Throughput::Elements(frames as u64));
        group.bench_with_input(BenchmarkId::new("decode_value", frames), &sheet, |b, sheet| {
            b.iter(|| decoder.decode_value(black_box(sheet.clone()), Path::new("bench.json")))
        });
    }

    let text = make_sheet(512).to_string();
    group.bench_function("decode_str_512", |b| {
        b.iter(|| decoder.decode_str(black_box(&text), Path::new("bench.json")))
    });

    group.finish();
}

// =============================================================================
// Mirror / Projection Benchmarks
// =============================================================================

fn bench_mirror(c: &mut Criterion) {
    let mut group = c.benchmark_group("mirror");
    let set = match SpriteSheetDecoder::default().decode_value(make_sheet(512), Path::new("bench.json")) {
        Ok(set) => set,
        Err(e) => panic!("bench sheet should decode: {}", e),
    };

    group.bench_function("mirror_set_512", |b| b.iter(|| mirror_set(black_box(&set), "_mirrored")));
    group.bench_function("project_to_sprites_512", |b| b.iter(|| project_to_sprites(black_box(&set))));

    group.finish();
}

criterion_group!(benches, bench_normalize_keys, bench_decode, bench_mirror);
criterion_main!(benches);
