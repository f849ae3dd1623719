//! Benchmarks for move listing and validation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use figure_moves::board::{list_moves, validate_move, Field, PieceKind};

fn bench_list_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_moves");
    let fields: Vec<Field> = Field::all().collect();

    for kind in PieceKind::ALL {
        group.bench_with_input(BenchmarkId::new("all_fields", kind), &kind, |b, &kind| {
            b.iter(|| {
                for &from in &fields {
                    black_box(list_moves(kind, black_box(from)).ok());
                }
            })
        });
    }

    group.finish();
}

fn bench_validate_random(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let fields: Vec<Field> = Field::all().collect();
    let queries: Vec<(PieceKind, Field, Field)> = (0..1024)
        .map(|_| {
            let kind = *PieceKind::ALL.choose(&mut rng).unwrap();
            let from = *fields.choose(&mut rng).unwrap();
            let to = *fields.choose(&mut rng).unwrap();
            (kind, from, to)
        })
        .collect();

    c.bench_function("validate_random_1024", |b| {
        b.iter(|| {
            for &(kind, from, to) in &queries {
                black_box(validate_move(kind, from, to).ok());
            }
        })
    });
}

criterion_group!(benches, bench_list_moves, bench_validate_random);
criterion_main!(benches);
