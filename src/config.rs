use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub framework: FrameworkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Test source directory, relative to `base_path`
    #[serde(default = "default_output_root")]
    pub root: String,

    /// Project base directory (defaults to the current directory)
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// File extension of generated test sources, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_output_root(),
            base_path: default_base_path(),
            extension: default_extension(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of stub variants emitted per public method (default: 1)
    #[serde(default = "default_variants")]
    pub variants_per_method: usize,

    /// Separator used when joining generated text and terminating written lines
    #[serde(default = "default_line_separator")]
    pub line_separator: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            variants_per_method: default_variants(),
            line_separator: default_line_separator(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkConfig {
    #[serde(default = "default_test_import")]
    pub test_import: String,
    #[serde(default = "default_setup_import")]
    pub setup_import: String,
    #[serde(default = "default_test_annotation")]
    pub test_annotation: String,
    #[serde(default = "default_setup_annotation")]
    pub setup_annotation: String,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            test_import: default_test_import(),
            setup_import: default_setup_import(),
            test_annotation: default_test_annotation(),
            setup_annotation: default_setup_annotation(),
        }
    }
}

fn default_output_root() -> String {
    "src/test/java".to_string()
}

fn default_base_path() -> String {
    ".".to_string()
}

fn default_extension() -> String {
    "java".to_string()
}

fn default_variants() -> usize {
    1
}

fn default_line_separator() -> String {
    "\n".to_string()
}

fn default_test_import() -> String {
    "org.junit.jupiter.api.Test".to_string()
}

fn default_setup_import() -> String {
    "org.junit.jupiter.api.BeforeEach".to_string()
}

fn default_test_annotation() -> String {
    "@Test".to_string()
}

fn default_setup_annotation() -> String {
    "@BeforeEach".to_string()
}

impl Config {
    /// Load config from the working directory or user config directory
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path)
                .with_context(|| format!("Failed to load config from {}", config_path));
        }

        // Per-project config wins over the user one
        if let Ok(config) = Self::load_from_path("testgen.toml") {
            debug!("Loaded config from ./testgen.toml");
            return Ok(config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("testgen").join("config.toml");
            if let Ok(config) = Self::load_from_path(&config_path) {
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
