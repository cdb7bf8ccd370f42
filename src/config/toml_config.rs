use crate::core::ratings::MIN_RATING;
use crate::core::square::DEFAULT_SQUARE_DELAY;
use crate::utils::error::{Result, ToolkitError};
use crate::utils::validation::{validate_finite, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MAX_SQUARE_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    pub square: SquareConfig,
    pub ratings: RatingsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SquareConfig {
    pub delay_ms: u64,
}

impl SquareConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for SquareConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_SQUARE_DELAY.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingsConfig {
    pub min_rating: f64,
}

impl Default for RatingsConfig {
    fn default() -> Self {
        Self {
            min_rating: MIN_RATING,
        }
    }
}

impl ToolkitConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ToolkitError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ToolkitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads `path` when given, otherwise the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides and re-checks the merged values.
    pub fn with_overrides(mut self, min_rating: Option<f64>, delay_ms: Option<u64>) -> Result<Self> {
        if let Some(min_rating) = min_rating {
            self.ratings.min_rating = min_rating;
        }
        if let Some(delay_ms) = delay_ms {
            self.square.delay_ms = delay_ms;
        }
        self.validate()?;
        Ok(self)
    }
}

impl Validate for ToolkitConfig {
    fn validate(&self) -> Result<()> {
        validate_range("square.delay_ms", self.square.delay_ms, 0, MAX_SQUARE_DELAY_MS)?;
        validate_finite("ratings.min_rating", self.ratings.min_rating)?;
        Ok(())
    }
}
