//! Benchmarks for single-game play and batch simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use panda_dice::{Game, GameConfig, Simulation, SimulationConfig};

fn bench_single_game(c: &mut Criterion) {
    c.bench_function("game_to_completion_3p", |b| {
        b.iter(|| {
            let mut game = Game::new(&GameConfig::new(3, 42)).unwrap();
            while !game.is_finished() {
                game.play_round();
            }
            game.winner()
        });
    });
}

fn bench_batch(c: &mut Criterion) {
    let serial = SimulationConfig::new()
        .with_player_count(3)
        .with_games(100)
        .with_seed(42);

    c.bench_function("batch_100_games_serial", |b| {
        let sim = Simulation::new(serial).unwrap();
        b.iter(|| sim.run());
    });

    c.bench_function("batch_100_games_parallel", |b| {
        let sim = Simulation::new(serial.with_parallel(true)).unwrap();
        b.iter(|| sim.run());
    });
}

criterion_group!(benches, bench_single_game, bench_batch);
criterion_main!(benches);
