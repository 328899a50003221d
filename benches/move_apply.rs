//! Benchmarks for quarter-turn application and serialization.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use twisty::cube::{Cube, Move, ScrambleRng};
use twisty::solver::ScriptedSolver;

fn bench_apply(c: &mut Criterion) {
    c.bench_function("apply_single_move", |b| {
        let mut cube = Cube::solved();
        let mut i = 0usize;
        b.iter(|| {
            cube.apply(black_box(Move::ALL[i % 12]));
            i += 1;
        });
    });

    c.bench_function("scramble_20", |b| {
        let mut rng = ScrambleRng::new(42);
        b.iter(|| {
            let mut cube = Cube::solved();
            black_box(cube.scramble(20, &mut rng));
        });
    });

    c.bench_function("facelet_string", |b| {
        let mut cube = Cube::solved();
        cube.scramble(20, &mut ScrambleRng::new(7));
        b.iter(|| black_box(cube.facelet_string()));
    });

    c.bench_function("scripted_solve", |b| {
        let mut cube = Cube::solved();
        cube.scramble(20, &mut ScrambleRng::new(9));
        b.iter(|| black_box(ScriptedSolver::new(cube).solve()));
    });
}

criterion_group!(benches, bench_apply);
criterion_main!(benches);
