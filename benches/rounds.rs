use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rps_trainer::{Gesture, RoundEngine};

fn full_game(c: &mut Criterion) {
    c.bench_function("full_game", |b| {
        let mut engine = RoundEngine::new(42);
        b.iter(|| {
            engine.new_game();
            for gesture in Gesture::ALL.iter().cycle().take(10) {
                black_box(engine.submit_choice(*gesture));
            }
            black_box(engine.score())
        })
    });
}

fn engine_clone(c: &mut Criterion) {
    let mut engine = RoundEngine::new(42);
    for _ in 0..9 {
        engine.submit_choice(Gesture::Rock);
    }
    c.bench_function("engine_clone", |b| b.iter(|| black_box(engine.clone())));
}

criterion_group!(benches, full_game, engine_clone);
criterion_main!(benches);
