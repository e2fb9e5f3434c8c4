use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_SOCKET_PATH: &str = "/var/run/docker.sock";
pub const DEFAULT_API_VERSION: &str = "1.43";

const HOST_ENV: &str = "DOCKER_HOST";
const API_VERSION_ENV: &str = "DOCKER_API_VERSION";
const UNIX_SCHEME: &str = "unix://";

/// Where the engine listens and which API version to speak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub socket: PathBuf,
    pub api_version: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            socket: PathBuf::from(DEFAULT_SOCKET_PATH),
            api_version: DEFAULT_API_VERSION.to_owned(),
        }
    }
}

impl EngineConfig {
    /// Resolve the engine endpoint. An explicit host wins over `DOCKER_HOST`,
    /// which wins over the default socket.
    pub fn resolve(host: Option<&str>) -> Result<Self, ConfigError> {
        let env_host = env::var(HOST_ENV).ok().filter(|h| !h.is_empty());
        let socket = match host.or(env_host.as_deref()) {
            Some(host) => parse_host(host)?,
            None => PathBuf::from(DEFAULT_SOCKET_PATH),
        };

        let api_version = env::var(API_VERSION_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_owned());

        tracing::debug!(socket = %socket.display(), %api_version, "resolved engine config");
        Ok(Self {
            socket,
            api_version,
        })
    }
}

fn parse_host(host: &str) -> Result<PathBuf, ConfigError> {
    let path = if let Some(path) = host.strip_prefix(UNIX_SCHEME) {
        path
    } else if host.starts_with('/') {
        host
    } else {
        return Err(ConfigError::UnsupportedHost(host.to_owned()));
    };

    if path.is_empty() {
        return Err(ConfigError::EmptySocketPath(host.to_owned()));
    }
    Ok(PathBuf::from(path))
}
