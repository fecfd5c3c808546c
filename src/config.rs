//! Configuration management for Supatask
//!
//! This module handles loading, parsing, and validating configuration from
//! a YAML file with environment variable overrides.

use crate::error::{Result, SupataskError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Supatask
///
/// Currently this is just the Supabase project settings; the struct is the
/// single place new sections would be added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Supabase project configuration
    #[serde(default)]
    pub supabase: SupabaseConfig,
}

/// Supabase project configuration
///
/// Both fields default to empty strings so that a missing or partial config
/// file still parses; [`Config::validate`] is where an unusable value is
/// turned into an error, and client construction never fails on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://abcdefgh.supabase.co`
    #[serde(default)]
    pub url: String,

    /// Public anon key, sent as the `apikey` header on every request
    #[serde(default)]
    pub anon_key: String,
}

impl Config {
    /// Load configuration from file with environment overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SupataskError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| SupataskError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(url) = std::env::var("SUPATASK_URL") {
            self.supabase.url = url;
        }

        if let Ok(anon_key) = std::env::var("SUPATASK_ANON_KEY") {
            self.supabase.anon_key = anon_key;
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`SupataskError::Config`] when the base URL is unset, not a
    /// parseable URL, not http(s), or when the anon key is unset.
    pub fn validate(&self) -> Result<()> {
        if self.supabase.url.is_empty() {
            return Err(SupataskError::Config(
                "supabase.url is not set (config file or SUPATASK_URL)".to_string(),
            )
            .into());
        }

        let parsed = url::Url::parse(&self.supabase.url)
            .map_err(|e| SupataskError::Config(format!("supabase.url is invalid: {}", e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(SupataskError::Config(format!(
                "supabase.url must use http or https, got {}",
                parsed.scheme()
            ))
            .into());
        }

        if self.supabase.anon_key.is_empty() {
            return Err(SupataskError::Config(
                "supabase.anon_key is not set (config file or SUPATASK_ANON_KEY)".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
