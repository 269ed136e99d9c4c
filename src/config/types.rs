use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings read from the optional TOML file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub encode: EncodeConfig,

    #[serde(default)]
    pub metadata: MetadataConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    /// Custom path to ffmpeg
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,

    /// Custom path to ffprobe
    #[serde(default)]
    pub ffprobe_path: Option<PathBuf>,
}

/// Encoder arguments placed between the cut range and the output file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EncodeConfig {
    /// Used for every source that is not an AVI capture
    #[serde(default = "scenesplit_av::actions::default_progressive_args")]
    pub mp4: Vec<String>,

    /// Used for AVI captures
    #[serde(default = "scenesplit_av::actions::default_avi_args")]
    pub avi: Vec<String>,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            mp4: scenesplit_av::actions::default_progressive_args(),
            avi: scenesplit_av::actions::default_avi_args(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetadataConfig {
    /// Keywords written onto every clip
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

fn default_keywords() -> Vec<String> {
    vec!["Video8".to_string()]
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
        }
    }
}

/// Everything one invocation needs, fixed before the first file is touched.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Glob pattern naming the recordings to split
    pub source_pattern: String,

    /// Folder the scenes are written to
    pub destination: PathBuf,

    /// Accept kept segments whose dates go backwards
    pub tolerate_out_of_order_dates: bool,

    /// Plan and report without running ffmpeg
    pub dry_run: bool,

    pub settings: Config,
}
