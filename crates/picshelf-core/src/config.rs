//! Configuration module
//!
//! Settings are read from the process environment (a `.env` file is honoured
//! through `dotenvy`). Every value has a default so the service starts with no
//! configuration at all.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;

use crate::constants::{
    DEFAULT_MAX_FILES_PER_UPLOAD, DEFAULT_MAX_FILE_SIZE_MB, DEFAULT_MAX_IMAGE_DIMENSION,
    DEFAULT_METADATA_FILE, DEFAULT_PORT, DEFAULT_THUMBNAIL_SIZE, DEFAULT_UPLOAD_DIR,
    MAX_FILES_PER_UPLOAD_LIMIT, THUMBNAIL_SUBDIR,
};

/// Output format of the log subscriber
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" | "" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!(
                "Unknown log format '{}', expected 'text' or 'json'",
                other
            )),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    /// Full-size images are written here; thumbnails go to `thumbs/` below it.
    pub upload_dir: PathBuf,
    /// JSON ledger of upload records.
    pub metadata_file: PathBuf,
    pub max_file_size_bytes: usize,
    pub max_files_per_upload: usize,
    pub max_image_dimension: u32,
    pub thumbnail_size: u32,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            environment: "development".to_string(),
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            metadata_file: PathBuf::from(DEFAULT_METADATA_FILE),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_MB * 1024 * 1024,
            max_files_per_upload: DEFAULT_MAX_FILES_PER_UPLOAD,
            max_image_dimension: DEFAULT_MAX_IMAGE_DIMENSION,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or(defaults.environment);

        let max_file_size_mb: usize =
            parse_or(&lookup, "MAX_FILE_SIZE_MB", DEFAULT_MAX_FILE_SIZE_MB)?;

        Ok(Config {
            server_port: parse_or(&lookup, "PORT", defaults.server_port)?,
            environment,
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            metadata_file: lookup("METADATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.metadata_file),
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            max_files_per_upload: parse_or(
                &lookup,
                "MAX_FILES_PER_UPLOAD",
                defaults.max_files_per_upload,
            )?,
            max_image_dimension: parse_or(
                &lookup,
                "MAX_IMAGE_DIMENSION",
                defaults.max_image_dimension,
            )?,
            thumbnail_size: parse_or(&lookup, "THUMBNAIL_SIZE", defaults.thumbnail_size)?,
            log_format: parse_or(&lookup, "LOG_FORMAT", defaults.log_format)?,
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }

        if self.max_files_per_upload == 0 || self.max_files_per_upload > MAX_FILES_PER_UPLOAD_LIMIT
        {
            return Err(anyhow::anyhow!(
                "MAX_FILES_PER_UPLOAD must be between 1 and {}",
                MAX_FILES_PER_UPLOAD_LIMIT
            ));
        }

        if self.max_image_dimension == 0 || self.thumbnail_size == 0 {
            return Err(anyhow::anyhow!(
                "MAX_IMAGE_DIMENSION and THUMBNAIL_SIZE must be greater than 0"
            ));
        }

        if self.thumbnail_size > self.max_image_dimension {
            return Err(anyhow::anyhow!(
                "THUMBNAIL_SIZE ({}) cannot exceed MAX_IMAGE_DIMENSION ({})",
                self.thumbnail_size,
                self.max_image_dimension
            ));
        }

        if self.upload_dir.as_os_str().is_empty() || self.metadata_file.as_os_str().is_empty() {
            return Err(anyhow::anyhow!(
                "UPLOAD_DIR and METADATA_FILE cannot be empty"
            ));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn thumbnail_dir(&self) -> PathBuf {
        self.upload_dir.join(THUMBNAIL_SUBDIR)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, anyhow::Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("Invalid value for {}: '{}'", key, raw)),
        None => Ok(default),
    }
}
