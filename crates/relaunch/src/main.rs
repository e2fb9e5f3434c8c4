//! # relaunch
//! Restart containers through the container engine API. Every container named
//! on the command line is attempted, and every failure is reported once all of
//! them have been tried.
mod commands;
mod observability;

use anyhow::Result;
use clap::{crate_version, CommandFactory, Parser};

use relaunch_cli::{EngineCmd, GlobalOpts};

#[derive(Parser, Debug)]
#[clap(version = crate_version!(), author = env!("CARGO_PKG_AUTHORS"))]
struct Opts {
    #[clap(flatten)]
    global: GlobalOpts,

    #[clap(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser, Debug)]
enum SubCommand {
    // Commands forwarded to the engine, parsed by the relaunch_cli crate
    #[clap(flatten)]
    Engine(relaunch_cli::EngineCmd),

    Completion(commands::completion::Completion),
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let mut app = Opts::command();

    if let Err(e) = observability::init(&opts) {
        eprintln!("log init failed: {:?}", e);
    }

    tracing::debug!("started with {:?}", std::env::args_os());

    match opts.subcmd {
        SubCommand::Engine(cmd) => match cmd {
            EngineCmd::Restart(restart) => {
                commands::restart::restart(restart, opts.global.host.as_deref())
            }
        },
        SubCommand::Completion(completion) => {
            commands::completion::completion(completion, &mut app)
        }
    }
}
