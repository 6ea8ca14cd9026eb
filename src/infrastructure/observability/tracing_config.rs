use std::path::PathBuf;

use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
    pub file: Option<PathBuf>,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        Self {
            environment: environment.as_str().to_string(),
            level: settings.level.clone(),
            json_format: settings.json_format,
            file: settings.file.clone(),
        }
    }
}
