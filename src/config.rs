use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Word count a generated summary is padded up to unless configured otherwise.
pub const DEFAULT_WORD_TARGET: usize = 350;

/// Largest accepted word target.
pub const MAX_WORD_TARGET: usize = 1_000_000;

/// Configuration for the summary generator.
///
/// Use [`Config::builder()`] to construct a new configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
#[non_exhaustive]
pub struct Config {
    /// Minimum number of words the substantive summary is padded to.
    /// Zero disables padding.
    pub word_target: usize,
}

impl Config {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use research_summary::Config;
    ///
    /// let config = Config::builder()
    ///     .word_target(200)
    ///     .build()
    ///     .expect("valid configuration");
    /// assert_eq!(config.word_target, 200);
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parses and validates a configuration from a JSON document.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON for [`Config`]
    /// or if validation fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the word target exceeds [`MAX_WORD_TARGET`].
    pub fn validate(&self) -> Result<()> {
        if self.word_target > MAX_WORD_TARGET {
            return Err(Error::config(format!(
                "word_target ({}) must not exceed {}",
                self.word_target, MAX_WORD_TARGET
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_target: DEFAULT_WORD_TARGET,
        }
    }
}

/// Wire form of [`Config`], accepting signed targets so they can be clamped.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    word_target: Option<i64>,
}

impl TryFrom<RawConfig> for Config {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(target) = raw.word_target {
            builder = builder.word_target(target);
        }
        builder.build()
    }
}

/// Builder for creating a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    word_target: Option<i64>,
}

impl ConfigBuilder {
    /// Sets the word target.
    ///
    /// Negative values are clamped to zero, which disables padding.
    #[must_use]
    pub fn word_target(mut self, target: i64) -> Self {
        self.word_target = Some(target);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn build(self) -> Result<Config> {
        let word_target = match self.word_target {
            None => DEFAULT_WORD_TARGET,
            Some(target) if target < 0 => {
                tracing::warn!(
                    "word_target {} is negative, clamping to 0 (padding disabled)",
                    target
                );
                0
            }
            Some(target) => usize::try_from(target).map_err(|_| {
                Error::config(format!("word_target ({target}) does not fit in usize"))
            })?,
        };

        let config = Config { word_target };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::builder().build().unwrap();
        assert_eq!(config.word_target, DEFAULT_WORD_TARGET);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_negative_target_is_clamped() {
        let config = Config::builder().word_target(-25).build().unwrap();
        assert_eq!(config.word_target, 0);
    }

    #[test]
    fn test_zero_target_is_accepted() {
        let config = Config::builder().word_target(0).build().unwrap();
        assert_eq!(config.word_target, 0);
    }

    #[test]
    fn test_oversized_target_is_rejected() {
        let result = Config::builder().word_target(5_000_000).build();
        assert!(result.unwrap_err().is_config());
    }

    #[test]
    fn test_from_json() {
        let config = Config::from_json(r#"{"word_target": 120}"#).unwrap();
        assert_eq!(config.word_target, 120);

        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.word_target, DEFAULT_WORD_TARGET);
    }

    #[test]
    fn test_from_json_clamps_negative_target() {
        let from_json = Config::from_json(r#"{"word_target": -3}"#).unwrap();
        let from_builder = Config::builder().word_target(-3).build().unwrap();

        assert_eq!(from_json.word_target, 0);
        assert_eq!(from_json, from_builder);
    }

    #[test]
    fn test_deserialize_goes_through_builder() {
        let config: Config = serde_json::from_str(r#"{"word_target": -40}"#).unwrap();
        assert_eq!(config.word_target, 0);

        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        assert!(serde_json::from_str::<Config>(r#"{"word_target": 2000000}"#).is_err());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Config::from_json("not json").unwrap_err().is_serialization());
        assert!(Config::from_json(r#"{"word_target": "many"}"#).unwrap_err().is_serialization());
        assert!(
            Config::from_json(r#"{"word_target": 2000000}"#)
                .unwrap_err()
                .is_config()
        );
    }
}
