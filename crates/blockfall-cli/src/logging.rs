use std::{fs::File, path::PathBuf};

use anyhow::Context as _;
use env_logger::{Env, Target};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct LoggingArg {
    /// Write log output to this file; logging is off otherwise
    ///
    /// The filter defaults to `info` and can be changed with `RUST_LOG`.
    #[clap(long)]
    pub(crate) log_file: Option<PathBuf>,
}

/// Installs the global logger.
///
/// Log records never go to the terminal, since the game owns the screen.
pub(crate) fn init(arg: &LoggingArg) -> anyhow::Result<()> {
    let Some(path) = &arg.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;
    log::info!("logging to {}", path.display());
    Ok(())
}
