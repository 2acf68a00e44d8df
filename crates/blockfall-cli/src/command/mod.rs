use clap::Parser;

use crate::logging;

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    logging: logging::LoggingArg,
    #[clap(flatten)]
    play: play::PlayArg,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(&args.logging)?;
    play::run(&args.play)
}
