use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hint::black_box;
use sweeper_core::*;

fn bench_seeding(c: &mut Criterion) {
    let config = Difficulty::Expert.preset().unwrap();

    c.bench_function("seed_expert", |b| {
        let mut rng = SmallRng::seed_from_u64(0);
        b.iter(|| {
            let mut game = GameController::new(config);
            game.seed_mines(&mut rng).unwrap();
            black_box(game)
        })
    });
}

fn bench_cascade(c: &mut Criterion) {
    let config = GameConfig::new_unchecked((1024, 1024), 1);
    let template = {
        let mut game = GameController::new(config);
        game.seed_with(FixedMineDistributor::new(&[(1023, 1023)]))
            .unwrap();
        game
    };

    c.bench_function("cascade_1024x1024", |b| {
        b.iter(|| {
            let mut game = template.clone();
            black_box(game.apply((0, 0), Action::Reveal).unwrap())
        })
    });
}

criterion_group!(benches, bench_seeding, bench_cascade);
criterion_main!(benches);
