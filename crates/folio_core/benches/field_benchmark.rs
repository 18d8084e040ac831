//! Benchmark for the particle field frame cost.
//!
//! TARGET: a full 120-particle frame well under 10 µs
//!
//! Run with: cargo bench --package folio_core --bench field_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use folio_core::{CommandBuffer, ManualScheduler, ParticleConfig, ParticleField, Viewport};

fn full_field() -> ParticleField<CommandBuffer> {
    let mut field = ParticleField::new(CommandBuffer::new(), ParticleConfig::default(), 42);
    // 4K: capped at 120 particles
    field.init(Viewport::new(3840.0, 2160.0));
    field
}

fn benchmark_step(c: &mut Criterion) {
    let mut field = full_field();

    c.bench_function("step_120_particles", |b| {
        b.iter(|| {
            field.step();
            black_box(field.particles().len())
        });
    });
}

fn benchmark_frame(c: &mut Criterion) {
    let mut field = full_field();
    let mut scheduler = ManualScheduler::new();

    let mut group = c.benchmark_group("frame");
    group.throughput(Throughput::Elements(120));

    group.bench_function("frame_120_particles", |b| {
        b.iter(|| {
            scheduler.fire();
            black_box(field.frame(&mut scheduler));
            field.surface_mut().take();
        });
    });

    group.finish();
}

fn benchmark_populate(c: &mut Criterion) {
    let mut field = full_field();

    c.bench_function("repopulate_on_resize", |b| {
        let mut wide = false;
        b.iter(|| {
            wide = !wide;
            let viewport = if wide {
                Viewport::new(3840.0, 2160.0)
            } else {
                Viewport::new(1280.0, 720.0)
            };
            field.init(black_box(viewport));
        });
    });
}

criterion_group!(benches, benchmark_step, benchmark_frame, benchmark_populate);
criterion_main!(benches);
