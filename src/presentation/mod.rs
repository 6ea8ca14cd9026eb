pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod questions;

pub use bootstrap::{AppPipeline, BootstrapError, build_pipeline};
pub use cli::Cli;
pub use self::config::{ConfigError, Environment, Settings};
