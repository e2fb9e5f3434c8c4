//! Restart a batch of containers, one after another, without letting a
//! single failure stop the rest of the batch.
use std::fmt;
use std::io::Write;
use std::time::Duration;

/// Something that can restart a single container.
pub trait Restarter {
    type Error;

    /// Restart `target`. `timeout` is how long the engine waits for the
    /// container to stop before killing it; `None` leaves it to the engine.
    fn restart(&self, target: &str, timeout: Option<Duration>) -> Result<(), Self::Error>;
}

impl<R: Restarter + ?Sized> Restarter for &R {
    type Error = R::Error;

    fn restart(&self, target: &str, timeout: Option<Duration>) -> Result<(), Self::Error> {
        (**self).restart(target, timeout)
    }
}

#[derive(Debug)]
pub struct TargetFailure<E> {
    pub target: String,
    pub error: E,
}

/// Outcome of one batch. Both lists follow the order of the input targets.
#[derive(Debug)]
pub struct BatchResult<E> {
    pub succeeded: Vec<String>,
    pub failures: Vec<TargetFailure<E>>,
}

impl<E> Default for BatchResult<E> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<E> BatchResult<E> {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Collapse the batch into a single result. Any failure turns the whole
    /// batch into an [`AggregateError`].
    pub fn into_result(self) -> Result<Vec<String>, AggregateError<E>> {
        if self.failures.is_empty() {
            Ok(self.succeeded)
        } else {
            Err(AggregateError {
                failures: self.failures,
            })
        }
    }
}

/// One or more targets of a batch failed. Displays as the failure messages
/// joined by newlines, in the order they happened.
#[derive(Debug)]
pub struct AggregateError<E> {
    failures: Vec<TargetFailure<E>>,
}

impl<E> AggregateError<E> {
    pub fn failures(&self) -> &[TargetFailure<E>] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<TargetFailure<E>> {
        self.failures
    }
}

impl<E: fmt::Display> fmt::Display for AggregateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", failure.error)?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for AggregateError<E> {}

/// Restart every target in order. Each success is written to `out` as soon
/// as it happens; failures are collected and never stop the batch.
pub fn execute<R, W>(
    targets: &[String],
    timeout: Option<Duration>,
    restarter: R,
    out: &mut W,
) -> BatchResult<R::Error>
where
    R: Restarter,
    R::Error: fmt::Display,
    W: Write + ?Sized,
{
    let mut result = BatchResult::default();

    for target in targets {
        tracing::debug!(?timeout, "restarting container {}", target);
        match restarter.restart(target, timeout) {
            Ok(()) => {
                if let Err(err) = writeln!(out, "{target}").and_then(|_| out.flush()) {
                    tracing::warn!("failed to report restart of {}: {}", target, err);
                }
                result.succeeded.push(target.to_owned());
            }
            Err(error) => {
                tracing::debug!("failed to restart container {}: {}", target, error);
                result.failures.push(TargetFailure {
                    target: target.to_owned(),
                    error,
                });
            }
        }
    }

    result
}
