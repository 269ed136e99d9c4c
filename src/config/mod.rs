mod types;

pub use types::*;

use anyhow::{Context, Result};
use scenesplit_common::Error;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./scenesplit.toml", "~/.config/scenesplit/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.encode.mp4.is_empty() || config.encode.avi.is_empty() {
        anyhow::bail!("Encoder arguments cannot be empty");
    }

    for path in [&config.tools.ffmpeg_path, &config.tools.ffprobe_path]
        .into_iter()
        .flatten()
    {
        if !path.exists() {
            tracing::warn!("Configured tool does not exist, falling back to PATH: {:?}", path);
        }
    }

    Ok(())
}

impl RunConfig {
    /// Combine command-line values with file settings.
    ///
    /// # Errors
    ///
    /// [`Error::DestinationMissing`] unless `destination` is an existing folder.
    pub fn new(
        source_pattern: String,
        destination: &Path,
        tolerate_out_of_order_dates: bool,
        dry_run: bool,
        settings: Config,
    ) -> std::result::Result<Self, Error> {
        if !destination.is_dir() {
            return Err(Error::DestinationMissing {
                path: destination.to_path_buf(),
            });
        }

        let destination = std::path::absolute(destination)?;

        Ok(Self {
            source_pattern,
            destination,
            tolerate_out_of_order_dates,
            dry_run,
            settings,
        })
    }
}
