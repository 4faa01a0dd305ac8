use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;

use config::{Config, File};

use serde::Deserialize;
use serde_aux::prelude::*;

/// Application settings wrapper
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub database: DatabaseSettings,
}

impl Settings {
    /// Load application settings from the settings directory
    pub fn load() -> anyhow::Result<Self> {
        let path = env::current_dir()?.join("settings");
        Self::load_from(&path)
    }
    /// Load application settings from a specified path.
    ///
    /// Every setting has a built-in default, so the `base` file is optional.
    pub fn load_from(base_path: &Path) -> anyhow::Result<Self> {
        Config::builder()
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 8080_i64)?
            .set_default("app.static_dir", "public")?
            .set_default("app.log_filter", "info")?
            .set_default("database.filename", "citas.db")?
            .add_source(File::from(base_path.join("base")).required(false))
            .build()?
            .try_deserialize()
            .context("Failed to load/deserialize settings")
    }
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    port: u16,
    static_dir: PathBuf,
    log_filter: String,
}

impl ApplicationSettings {
    /// The application address to bind to
    pub fn addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
    /// The directory holding the front-end files
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
    /// The tracing filter directive
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    filename: PathBuf,
}

impl DatabaseSettings {
    /// Path of the SQLite file
    pub fn path(&self) -> &Path {
        &self.filename
    }
}
