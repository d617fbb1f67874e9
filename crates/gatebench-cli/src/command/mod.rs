use clap::{Parser, Subcommand};

use self::{space::SpaceArg, summary::SummaryArg, time::TimeArg};

mod space;
mod summary;
mod time;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which analysis to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Statistical summary of solver results
    Summary(#[clap(flatten)] SummaryArg),
    /// Space complexity analysis (theoretical vs actual space usage)
    Space(#[clap(flatten)] SpaceArg),
    /// Performance analysis against theoretical complexity models
    Time(#[clap(flatten)] TimeArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Space(arg) => space::run(&arg)?,
        Mode::Time(arg) => time::run(&arg)?,
    }
    Ok(())
}
