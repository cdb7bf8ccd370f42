use std::time::Duration;

use crate::config::toml_config::SquareConfig;
use crate::utils::error::{Result, ToolkitError};

pub const DEFAULT_SQUARE_DELAY: Duration = Duration::from_millis(1000);

pub const NEGATIVE_INPUT_MESSAGE: &str = "Negative number not allowed";

/// Squares `n` after [`DEFAULT_SQUARE_DELAY`].
pub async fn square_async(n: f64) -> Result<f64> {
    square_after(n, DEFAULT_SQUARE_DELAY).await
}

/// Waits `delay`, then squares `n`. Negative input fails with
/// [`ToolkitError::InvalidArgument`] once the delay has elapsed.
pub async fn square_after(n: f64, delay: Duration) -> Result<f64> {
    tracing::debug!("Squaring {} after {:?}", n, delay);
    tokio::time::sleep(delay).await;

    if n < 0.0 {
        tracing::debug!("Rejected negative input {}", n);
        return Err(ToolkitError::invalid_argument(NEGATIVE_INPUT_MESSAGE));
    }
    Ok(n * n)
}

#[derive(Debug, Clone, Copy)]
pub struct DelayedSquarer {
    delay: Duration,
}

impl DelayedSquarer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &SquareConfig) -> Self {
        Self::new(config.delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn square(&self, n: f64) -> Result<f64> {
        square_after(n, self.delay).await
    }
}

impl Default for DelayedSquarer {
    fn default() -> Self {
        Self::new(DEFAULT_SQUARE_DELAY)
    }
}
