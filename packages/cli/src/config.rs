use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "mtt.config.json";

/// MTT configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing the model files, relative to the current directory.
    /// Defaults to the current directory itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,

    /// Directory the interfaces are written to. Cleared before each run
    /// unless it defaults to the current directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convert_directory: Option<String>,

    /// Start every generated file with an auto-generated banner
    #[serde(default = "default_true")]
    pub auto_generated_tag: bool,

    /// Suffix stripped from model file names
    #[serde(default = "default_name_suffix")]
    pub name_suffix: Option<String>,

    /// Only read files with these extensions; empty reads every file
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Map `DateTime` members to `Date`
    #[serde(default = "default_true")]
    pub map_date_time: bool,

    /// Extension of generated files
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
}

fn default_true() -> bool {
    true
}

fn default_name_suffix() -> Option<String> {
    Some(mtt_parser::loader::DEFAULT_NAME_SUFFIX.to_string())
}

fn default_output_extension() -> String {
    "ts".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Absolute path of the working directory
    pub fn get_working_dir(&self, cwd: &str) -> PathBuf {
        match &self.working_directory {
            Some(dir) => PathBuf::from(cwd).join(dir),
            None => PathBuf::from(cwd),
        }
    }

    /// Absolute path of the convert directory, and whether it was configured
    /// explicitly (only an explicit directory is ever cleared)
    pub fn get_convert_dir(&self, cwd: &str) -> (PathBuf, bool) {
        match &self.convert_directory {
            Some(dir) => (PathBuf::from(cwd).join(dir), true),
            None => (PathBuf::from(cwd), false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            working_directory: None,
            convert_directory: None,
            auto_generated_tag: true,
            name_suffix: default_name_suffix(),
            extensions: vec![],
            map_date_time: true,
            output_extension: default_output_extension(),
        }
    }
}
