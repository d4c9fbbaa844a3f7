//! Settings structs for the webcfg demo application.
//!
//! The root [`AppConfig`] has three sections. Each section registers its
//! fields with [`webcfg::section!`]; the root registers its sections and
//! their hooks with [`webcfg::settings!`]. Hooks are methods of the root, so
//! the database hook can also read the feature flags.
//!
//! | Section    | Shows                                                         |
//! |------------|---------------------------------------------------------------|
//! | `database` | metadata strings, a readonly field, an `updated` hook          |
//! | `features` | checkboxes and an unsigned integer                            |
//! | `advanced` | a custom codec, a float, a textarea, an `initialize` hook      |

use std::time::Duration;

use webcfg::{CodecError, HookError, Notification, Notifier, TextCodec};

#[derive(Debug, Default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub features: FeatureFlags,
    pub advanced: AdvancedSettings,
}

impl AppConfig {
    fn database_updated(&mut self, notifier: &mut dyn Notifier) -> Result<(), HookError> {
        let db = &self.database;
        if db.host.is_empty() {
            return Err("database host must not be empty".into());
        }
        notifier.notify(Notification::new(
            format!(
                "Reconnecting to {}:{} with {} workers",
                db.host, db.port, self.features.max_workers
            ),
            "info",
        ));
        Ok(())
    }

    fn advanced_initialize(&mut self, notifier: &mut dyn Notifier) -> Result<(), HookError> {
        if self.advanced.threshold == 0.0 {
            self.advanced.threshold = 0.95;
            notifier.notify(Notification::success("Threshold defaulted to 0.95"));
        }
        Ok(())
    }
}

webcfg::settings! {
    AppConfig {
        database (updated = AppConfig::database_updated),
        features,
        advanced (initialize = AppConfig::advanced_initialize),
    }
}

#[derive(Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub version: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            username: "admin".into(),
            password: String::new(),
            version: "15.4".into(),
        }
    }
}

webcfg::section! {
    DatabaseConfig {
        host => "host,Host Name,text,server,,Database server hostname",
        port => "port,Port Number,number,hashtag",
        username => "username,User Name,text,user",
        password => "password,Password,password,key",
        version (readonly) => "version,Server Version,text,info-circle",
    }
}

#[derive(Debug)]
pub struct FeatureFlags {
    pub enable_feature_a: bool,
    pub enable_feature_b: bool,
    pub max_workers: u32,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_feature_a: true,
            enable_feature_b: false,
            max_workers: 4,
        }
    }
}

webcfg::section! {
    FeatureFlags {
        enable_feature_a => "EnableFeatureA,Enable Feature A",
        enable_feature_b => "EnableFeatureB,Enable Feature B",
        max_workers => "MaxWorkers,Maximum Workers,number,users",
    }
}

/// A timeout written as whole seconds with an `s` suffix, e.g. `30s`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeout(pub Duration);

impl TextCodec for Timeout {
    fn encode_text(&self) -> Result<String, CodecError> {
        Ok(format!("{}s", self.0.as_secs()))
    }

    fn decode_text(&mut self, text: &str) -> Result<(), CodecError> {
        let secs = text.trim().strip_suffix('s').unwrap_or(text.trim());
        self.0 = Duration::from_secs(secs.parse()?);
        Ok(())
    }
}

webcfg::custom_codec!(Timeout);

#[derive(Debug)]
pub struct AdvancedSettings {
    pub timeout: Timeout,
    pub threshold: f64,
    pub retries: u32,
    pub description: String,
    pub tags: Vec<String>,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self {
            timeout: Timeout(Duration::from_secs(30)),
            threshold: 0.0,
            retries: 3,
            description: String::new(),
            tags: vec!["demo".into()],
        }
    }
}

webcfg::section! {
    AdvancedSettings {
        timeout => "timeout,Timeout,text,clock,,Whole seconds such as 30s",
        threshold => "threshold,Threshold,number,sliders-h",
        retries => "Retries,Maximum Retries,number,redo",
        description => "description,Description,textarea",
        tags (readonly) => "tags,Tags",
    }
}
