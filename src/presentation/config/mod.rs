mod environment;
mod error;
mod loader;
mod settings;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::{SettingsLoader, load_settings};
pub use settings::{
    EmbeddingProvider, LoggingSettings, OpenAiSettings, PdfSettings, PipelineSettings, Settings,
    SlackSettings, VectorStoreSettings,
};
