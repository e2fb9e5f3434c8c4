use std::time::Duration;

use clap::Parser;

/// Restart one or more containers
#[derive(Parser, Debug)]
pub struct Restart {
    /// Seconds to wait for stop before killing the container (engine default if omitted)
    #[clap(short = 't', long = "time", value_name = "SECONDS")]
    pub time: Option<u64>,
    /// Names or IDs of the containers, restarted in the order given
    #[clap(
        value_name = "CONTAINER",
        value_parser = clap::builder::NonEmptyStringValueParser::new(),
        required = true
    )]
    pub containers: Vec<String>,
}

impl Restart {
    /// How long the engine should wait before killing each container. `None`
    /// when the flag was not given at all, so that an explicit `0` survives.
    pub fn timeout(&self) -> Option<Duration> {
        self.time.map(Duration::from_secs)
    }
}
