use std::path::PathBuf;

/// Failure of a single restart request against the engine. Each variant keeps
/// enough information to render the message the engine user expects.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Error response from daemon: {message}")]
    NotFound { message: String },
    #[error("Error response from daemon: {message}")]
    Response { status: u16, message: String },
    #[error("Cannot connect to the Docker daemon at unix://{}. Is the docker daemon running?", .socket.display())]
    Unreachable {
        socket: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid container name or id {target:?}")]
    InvalidTarget { target: String },
    #[error("failed to build the restart request for {target:?}")]
    Request {
        target: String,
        #[source]
        source: http::Error,
    },
    #[error("error during connect: {0}")]
    Transport(#[from] hyper::Error),
    #[error("failed to start the client runtime")]
    Runtime(#[source] std::io::Error),
}

impl EngineError {
    /// Status code of the engine response, if the engine answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            EngineError::NotFound { .. } => Some(404),
            EngineError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported engine host {0:?}: only unix:// sockets are supported")]
    UnsupportedHost(String),
    #[error("engine host {0:?} does not name a socket path")]
    EmptySocketPath(String),
}
