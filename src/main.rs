use clap::Parser;
use colored::Colorize;
use roboduel::Arbitrary;
use roboduel::duel::*;
use roboduel::mcts::*;

/// bot-vs-bot or human-vs-bot duels from a random deal.
#[derive(Debug, Parser)]
#[command(about = "monte carlo tree search duels at the card table")]
struct Args {
    /// iteration budget per move
    #[arg(long, default_value_t = 10_000)]
    simulations: usize,
    /// wall-clock budget per move, in milliseconds
    #[arg(long)]
    millis: Option<u64>,
    /// exploration coefficient
    #[arg(long, default_value_t = roboduel::SEARCH_EXPLORATION)]
    exploration: f32,
    /// playouts averaged per leaf
    #[arg(long, default_value_t = roboduel::SEARCH_PLAYOUTS)]
    playouts: usize,
    /// playout depth cutoff before the material oracle takes over
    #[arg(long)]
    horizon: Option<usize>,
    /// principal line depth reported after each search
    #[arg(long, default_value_t = 3)]
    line: usize,
    /// take the North seat yourself
    #[arg(long)]
    human: bool,
    /// deal seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roboduel::log();
    let deal = match args.seed {
        Some(seed) => Duel::scripted(seed),
        None => Duel::random(),
    };
    let mut game = Scripted.resolve(deal);
    let mut engine = Engine::from((
        game.clone(),
        Scripted,
        Uniform::default(),
        Material,
        Favors,
    ));
    let settings = Settings {
        simulations: args.simulations,
        exploration: args.exploration,
        playouts: args.playouts,
        horizon: args.horizon,
        budget: args.millis.map(std::time::Duration::from_millis),
    };
    while !game.over() {
        println!("{}", game);
        let edge = match (args.human, game.turn()) {
            (true, Seat::North) => prompt(&game)?,
            _ => {
                let search = engine.run(&settings)?;
                log::info!(
                    "{} searched {} iterations in {:?}",
                    game.turn(),
                    search.iterations,
                    search.elapsed
                );
                log::info!("principal line\n{}", engine.principal(args.line));
                engine.advice().expect("searched root has rated children")
            }
        };
        log::info!("{} plays {}", game.turn(), edge);
        game.apply(edge);
        engine.shrink(edge, game.clone());
    }
    println!("{}", game);
    match game.leader() {
        Some(seat) => println!(
            "{}",
            format!(
                "{} wins {} to {}",
                seat,
                game.tally(seat),
                game.tally(seat.flip())
            )
            .bold()
            .green()
        ),
        None => println!("{}", "drawn duel".bold().yellow()),
    }
    Ok(())
}

/// pick a move for the human seat.
fn prompt(game: &Duel) -> anyhow::Result<Action> {
    use dialoguer::Select;
    let legal = game.legal();
    let items = legal
        .iter()
        .map(|edge| edge.to_string())
        .collect::<Vec<_>>();
    let choice = Select::new()
        .with_prompt(format!("{} to move", game.turn()))
        .items(items.as_slice())
        .default(0)
        .interact()?;
    Ok(legal[choice])
}
