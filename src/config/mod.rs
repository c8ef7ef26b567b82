//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `QUIZ_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use quiz_question::config::QuizConfig;
//! use quiz_question::domain::question::QuestionFactory;
//!
//! let config = QuizConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init().expect("Invalid log filter");
//!
//! let factory = QuestionFactory::new(config.defaults);
//! let question = factory.create("What is 2 + 2?").expect("valid title");
//! println!("Created question {}", question.id());
//! ```

mod error;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;
use std::path::Path;

use crate::domain::question::QuestionDefaults;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizConfig {
    /// Defaults applied by `QuestionFactory::create`
    #[serde(default)]
    pub defaults: QuestionDefaults,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl QuizConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `QUIZ` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `QUIZ__DEFAULTS__POINTS=5` -> `defaults.points = 5`
    /// - `QUIZ__LOGGING__JSON=true` -> `logging.json = true`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables taking precedence
    ///
    /// The format is inferred from the file extension (e.g. `quiz.toml`).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.defaults.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix("QUIZ")
        .separator("__")
        .try_parsing(true)
}
