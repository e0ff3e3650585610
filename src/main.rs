use std::error::Error;
use std::process::ExitCode;

use clap::{ArgAction, ArgGroup, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use curfew::{require_superuser, EffectiveUid, Schedule, ShutdownDaemon};

#[derive(Parser)]
#[command(
    name = "curfew",
    version,
    disable_version_flag = true,
    about = "Install a launch daemon that forces a shutdown at a set time every day"
)]
#[command(group(ArgGroup::new("action").required(true).args(["install", "remove"])))]
struct Cli {
    /// Install the shutdown daemon
    #[arg(short, long)]
    install: bool,

    /// Remove the shutdown daemon
    #[arg(short, long)]
    remove: bool,

    /// Time of day the machine shuts down, as a 24 hour HH:MM clock time
    #[arg(short, long, default_value = "22:30", value_parser = Schedule::daily_at)]
    time: Schedule,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    require_superuser(&EffectiveUid)?;

    let daemon = ShutdownDaemon::system();
    if cli.install {
        daemon.install(cli.time)?;
    } else {
        daemon.remove()?;
    }
    Ok(())
}

fn report(error: &dyn Error) {
    eprintln!("ERROR: {error}");
    let mut source = error.source();
    while let Some(inner) = source {
        eprintln!("    caused by: {inner}");
        source = inner.source();
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(LevelFilter::WARN.into()))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(error.as_ref());
            ExitCode::FAILURE
        }
    }
}
