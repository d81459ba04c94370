use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{QUEUE_PROGRAM, TRANSLATOR_PROGRAM};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Optional defaults read from the user's config file
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) band: Option<String>,
    #[serde(default)]
    pub(crate) instrument: Option<String>,
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Program name or path of the MSB translator
    #[serde(default)]
    pub(crate) translator: Option<String>,
    /// Program name or path of the queue tool
    #[serde(default)]
    pub(crate) queue_tool: Option<String>,
    /// File the values were read from
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_path(&path) {
                Ok(config) => return config,
                Err(e) => eprintln!("Warning: Failed to parse {}: {}", path.display(), e),
            }
        }

        Self::default()
    }

    pub(crate) fn from_path(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let mut config = toml::from_str::<Config>(&content).map_err(|e| e.to_string())?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    pub(crate) fn translator_program(&self) -> &str {
        self.translator.as_deref().unwrap_or(TRANSLATOR_PROGRAM)
    }

    pub(crate) fn queue_program(&self) -> &str {
        self.queue_tool.as_deref().unwrap_or(QUEUE_PROGRAM)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/observe-backup-msbs/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(".config")
                    .join("observe-backup-msbs")
                    .join("config.toml"),
            );
        }

        // 2. Platform config dir (macOS Application Support)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("observe-backup-msbs").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.observe-backup-msbs.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".observe-backup-msbs.toml"));
        }

        paths
    }
}
