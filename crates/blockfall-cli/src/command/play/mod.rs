use anyhow::Context as _;
use blockfall_engine::{GameConfig, GameSession};
use blockfall_runtime::Runtime;

use self::app::PlayApp;

mod app;
mod keymap;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Gravity interval at level 0, in milliseconds
    #[clap(long, default_value_t = 1000)]
    pub(crate) base_interval_ms: u64,
    /// Gravity speed-up per level, in milliseconds
    #[clap(long, default_value_t = 45)]
    pub(crate) interval_step_ms: u64,
    /// Hide the dot grid on empty cells
    #[clap(long)]
    pub(crate) no_grid: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        base_interval_ms,
        interval_step_ms,
        no_grid,
    } = arg;

    let config = GameConfig::from_millis(*base_interval_ms, *interval_step_ms);
    config.validate().context("invalid gravity settings")?;
    log::info!("starting game with {config:?}");

    let mut app = PlayApp::new(GameSession::new(config), !no_grid);
    Runtime::new()
        .run(&mut app)
        .context("terminal I/O failed")?;

    let stats = app.session().stats();
    println!(
        "Score: {}  Lines: {}  Level: {}",
        stats.score(),
        stats.total_cleared_lines(),
        stats.level()
    );
    Ok(())
}
