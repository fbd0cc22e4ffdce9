use roboduel::Arbitrary;
use roboduel::duel::*;
use roboduel::mcts::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        searching_duel_iterations,
        simulating_duel_playouts,
        dealing_duel_roots,
}

fn searching_duel_iterations(c: &mut criterion::Criterion) {
    let root = Scripted.resolve(Duel::scripted(42));
    let settings = Settings {
        simulations: 512,
        horizon: Some(16),
        ..Settings::default()
    };
    c.bench_function("run 512 search iterations on a fresh deal", |b| {
        b.iter(|| {
            let mut engine = Engine::from((
                root.clone(),
                Scripted,
                Uniform::seeded(42),
                Material,
                Favors,
            ));
            engine.run(&settings).expect("search completes")
        })
    });
}

fn simulating_duel_playouts(c: &mut criterion::Criterion) {
    let root = Scripted.resolve(Duel::scripted(42));
    let mut policy = Uniform::seeded(42);
    c.bench_function("roll a random duel to completion", |b| {
        b.iter(|| {
            let mut game = root.clone();
            while !game.over() {
                let legal = game.legal();
                let edge = policy.choose(&game, &legal).expect("legal move");
                game.apply(edge);
            }
            game.tally(Seat::North)
        })
    });
}

fn dealing_duel_roots(c: &mut criterion::Criterion) {
    c.bench_function("deal and determinize a random duel", |b| {
        b.iter(|| Scripted.resolve(Duel::random()))
    });
}
