use std::path::PathBuf;

use clap::Parser;

mod restart;

pub use restart::Restart;

// Commands that talk to the container engine
#[derive(Parser, Debug)]
pub enum EngineCmd {
    Restart(Restart),
}

// Global flags accepted before any subcommand
#[derive(Parser, Debug)]
pub struct GlobalOpts {
    /// engine socket to connect to, e.g. unix:///var/run/docker.sock (default is $DOCKER_HOST)
    #[clap(short = 'H', long, global = true)]
    pub host: Option<String>,
    /// set the log file to write logs to (default is '/dev/stderr')
    #[clap(short, long, overrides_with("log"), global = true)]
    pub log: Option<PathBuf>,
    /// change log level to debug, but the `log-level` flag takes precedence
    #[clap(long, global = true)]
    pub debug: bool,
    /// set the log format ('text' (default), or 'json') (default: "text")
    #[clap(long, global = true)]
    pub log_format: Option<String>,
    /// set the log level (error, warn, info, debug, trace)
    #[clap(long, global = true)]
    pub log_level: Option<String>,
}
