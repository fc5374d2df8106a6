//! Configuration management
//!
//! Settings live in a `settings.json` file in the taskdeck directory:
//! ```json
//! {
//!   "app": { "demoUrl": "https://example.com/api/demo-tasks" }
//! }
//! ```
//! Unmanaged fields are preserved across saves.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_url: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Taskdeck configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Demo task feed endpoint; the built-in provider is used when unset
    pub demo_url: Option<String>,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Config {
    /// Load config from the taskdeck directory
    ///
    /// The demo endpoint can be set via:
    /// 1. Settings file
    /// 2. Environment variable TASKDECK_DEMO_URL (for CI/testing)
    pub fn load(taskdeck_dir: &Path) -> Result<Self> {
        let settings_path = taskdeck_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let demo_url = match std::env::var("TASKDECK_DEMO_URL").ok() {
            Some(url) if !url.trim().is_empty() => Some(url),
            _ => raw.app.demo_url.clone(),
        };

        Ok(Self {
            demo_url,
            _raw_settings: raw,
        })
    }

    /// Save config to the taskdeck directory
    ///
    /// Preserves settings this crate does not manage.
    pub fn save(&self, taskdeck_dir: &Path) -> Result<()> {
        let settings_path = taskdeck_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.demo_url = self.demo_url.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}
