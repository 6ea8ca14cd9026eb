use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ::config::{Config, File};

use super::{ConfigError, Environment, Settings};

const ENV_PREFIX: &str = "PDFQA";
const ENV_SEPARATOR: &str = "__";

/// Plain variable names still honoured as fallbacks for the credentials.
const LEGACY_VARIABLES: [(&str, &str); 2] = [
    ("OPENAI_API_KEY", "openai.api_key"),
    ("SLACK_BOT_TOKEN", "slack.bot_token"),
];

/// Layers, lowest priority first: plain credential variables, `{dir}/default.toml`,
/// `{dir}/{environment}.toml`, the explicit config file, then `PDFQA__*`
/// environment variables.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    environment: Environment,
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
    env_source: Option<HashMap<String, String>>,
}

impl SettingsLoader {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            config_dir: PathBuf::from("config"),
            config_file: None,
            env_source: None,
        }
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    pub fn with_config_file(mut self, path: Option<&Path>) -> Self {
        self.config_file = path.map(Path::to_path_buf);
        self
    }

    /// Reads variables from `vars` instead of the process environment.
    pub fn with_env_source(mut self, vars: HashMap<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn load(&self) -> Result<Settings, ConfigError> {
        let mut builder = Config::builder();

        for (variable, key) in LEGACY_VARIABLES {
            if let Some(value) = self.lookup(variable) {
                builder = builder.set_default(key, value)?;
            }
        }

        builder = builder
            .add_source(File::from(self.config_dir.join("default.toml")).required(false))
            .add_source(
                File::from(
                    self.config_dir
                        .join(format!("{}.toml", self.environment.as_str())),
                )
                .required(false),
            );

        if let Some(path) = &self.config_file {
            tracing::debug!(path = %path.display(), "Reading configuration file");
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        let env = ::config::Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(self.env_source.clone());

        let settings: Settings = builder.add_source(env).build()?.try_deserialize()?;
        Ok(settings)
    }

    fn lookup(&self, variable: &str) -> Option<String> {
        match &self.env_source {
            Some(vars) => vars.get(variable).cloned(),
            None => std::env::var(variable).ok(),
        }
        .filter(|v| !v.is_empty())
    }
}

/// Loads `.env`, resolves the environment from `APP_ENVIRONMENT` and reads
/// every configuration layer.
pub fn load_settings(config_file: Option<&Path>) -> Result<(Settings, Environment), ConfigError> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = SettingsLoader::new(environment)
        .with_config_file(config_file)
        .load()?;
    Ok((settings, environment))
}
