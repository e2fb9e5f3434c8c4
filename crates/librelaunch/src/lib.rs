pub mod batch;
pub mod config;
pub mod engine;
pub mod error;

pub use batch::{AggregateError, BatchResult, Restarter, TargetFailure};
pub use config::EngineConfig;
pub use engine::EngineClient;
pub use error::{ConfigError, EngineError};
