use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Covers logging and the demo run driven by `main`.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub log: LogSettings,
    pub demo: DemoSettings,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

/// Configuration for the demo publish/subscribe round trip.
///
/// Defines the topic subscribed to and the payload published to it.
#[derive(Debug, Deserialize, Clone)]
pub struct DemoSettings {
    pub topic: String,
    pub payload: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled
/// using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub log: Option<PartialLogSettings>,
    pub demo: Option<PartialDemoSettings>,
}

/// Partial logging settings.
#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

/// Partial demo settings.
#[derive(Debug, Deserialize)]
pub struct PartialDemoSettings {
    pub topic: Option<String>,
    pub payload: Option<String>,
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is
/// provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            log: LogSettings {
                level: "info".to_string(),
            },
            demo: DemoSettings {
                topic: "foo".to_string(),
                payload: "hello world".to_string(),
            },
        }
    }
}
