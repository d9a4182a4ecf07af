mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{DemoSettings, LogSettings, Settings};

/// Loads the configuration from the default file and environment variables.
/// Merges the configuration with default values.
/// Returns a `Settings` struct containing the log and demo configurations.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        log: LogSettings {
            level: partial
                .log
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.log.level),
        },
        demo: DemoSettings {
            topic: partial
                .demo
                .as_ref()
                .and_then(|d| d.topic.clone())
                .unwrap_or(default.demo.topic),
            payload: partial
                .demo
                .as_ref()
                .and_then(|d| d.payload.clone())
                .unwrap_or(default.demo.payload),
        },
    })
}

#[cfg(test)]
mod tests;
