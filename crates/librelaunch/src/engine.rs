//! Blocking client for the container engine API, spoken as HTTP/1.1 over the
//! engine's unix socket.
use std::time::Duration;

use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{header, Method, Request, StatusCode};
use hyper_util::rt::TokioIo;
use percent_encoding::{percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use tokio::net::UnixStream;
use tokio::runtime::{Builder, Runtime};

use crate::batch::Restarter;
use crate::config::EngineConfig;
use crate::error::EngineError;

/// Characters escaped in a single path segment. `/` and `%` are included so a
/// container name can never leave its segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ').add(b'"').add(b'<').add(b'>').add(b'`') // fragment percent-encode set
    .add(b'#').add(b'?').add(b'{').add(b'}') // path percent-encode set
    .add(b'/').add(b'%');

/// Error body returned by the engine for any non-2xx response.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

pub struct EngineClient {
    config: EngineConfig,
    runtime: Runtime,
}

impl EngineClient {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        // Requests are issued one at a time, so a single-threaded runtime is
        // all the transport needs.
        let runtime = Builder::new_current_thread()
            .enable_io()
            .build()
            .map_err(EngineError::Runtime)?;

        Ok(Self { config, runtime })
    }

    fn restart_path(
        &self,
        target: &str,
        timeout: Option<Duration>,
    ) -> Result<String, EngineError> {
        if target.is_empty() {
            return Err(EngineError::InvalidTarget {
                target: target.to_owned(),
            });
        }

        let mut path = format!(
            "/v{}/containers/{}/restart",
            self.config.api_version,
            percent_encode(target.as_bytes(), PATH_SEGMENT_ENCODE_SET)
        );
        if let Some(timeout) = timeout {
            path.push_str(&format!("?t={}", timeout.as_secs()));
        }
        Ok(path)
    }

    async fn post(&self, target: &str, path: &str) -> Result<(), EngineError> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::HOST, "localhost")
            .body(Empty::<Bytes>::new())
            .map_err(|source| EngineError::Request {
                target: target.to_owned(),
                source,
            })?;

        let stream = UnixStream::connect(&self.config.socket)
            .await
            .map_err(|source| EngineError::Unreachable {
                socket: self.config.socket.clone(),
                source,
            })?;

        let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream)).await?;
        tokio::spawn(async move {
            if let Err(err) = conn.await {
                tracing::debug!("engine connection closed: {}", err);
            }
        });

        tracing::trace!("POST {}", path);
        let response = sender.send_request(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.into_body().collect().await?.to_bytes();
        let message = error_message(status, &body);
        tracing::debug!(status = status.as_u16(), "engine rejected {}: {}", path, message);

        if status == StatusCode::NOT_FOUND {
            Err(EngineError::NotFound { message })
        } else {
            Err(EngineError::Response {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl Restarter for EngineClient {
    type Error = EngineError;

    fn restart(&self, target: &str, timeout: Option<Duration>) -> Result<(), EngineError> {
        let path = self.restart_path(target, timeout)?;
        self.runtime.block_on(self.post(target, &path))
    }
}

fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(response) = serde_json::from_slice::<ErrorResponse>(body) {
        return response.message;
    }

    let text = String::from_utf8_lossy(body).trim().to_owned();
    if !text.is_empty() {
        return text;
    }

    status
        .canonical_reason()
        .map(str::to_owned)
        .unwrap_or_else(|| status.to_string())
}
