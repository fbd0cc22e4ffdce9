pub mod duel;
pub mod mcts;

/// Win rates, value estimates, and strategy weights.
pub type Probability = f32;
/// Accumulated value mass carried by backpropagation.
pub type Utility = f32;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SEARCH DEFAULTS
// Documented defaults for the engine's run-time settings. Each knob is
// independently overridable through `mcts::Settings`.
// ============================================================================
/// Exploration coefficient in the selection score.
pub const SEARCH_EXPLORATION: f32 = std::f32::consts::SQRT_2;
/// Independent playouts averaged per selected leaf.
pub const SEARCH_PLAYOUTS: usize = 1;
/// Iteration budget per run() call. Effectively unbounded.
pub const SEARCH_SIMULATION_BUDGET: usize = 1 << 20;

// ============================================================================
// DUEL GAME PARAMETERS
// The built-in two-player card duel used for demos, benches, and tests.
// ============================================================================
/// Slots in the dealt row.
pub const DUEL_ROW_SLOTS: usize = 12;
/// Ranks per common suit (1..=DUEL_SUIT_RANKS).
pub const DUEL_SUIT_RANKS: u8 = 8;
/// Guild cards in the deck.
pub const DUEL_GUILD_CARDS: u8 = 6;
/// Points per captured guild card.
pub const DUEL_GUILD_POINTS: u8 = 5;
/// Points granted by the tribute favor.
pub const DUEL_TRIBUTE_POINTS: u8 = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
