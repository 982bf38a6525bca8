use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Default locations used when nothing else is configured
pub mod defaults {
    pub const INPUT_PATH: &str = "qrcode_base64.txt";
    pub const OUTPUT_DIR: &str = ".";
    pub const OUTPUT_STEM: &str = "qrcode_recovered";
}

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub input: PathBuf,
}

/// Where the recovered file lands: `<dir>/<stem>.png` or `<dir>/<stem>_raw.bin`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub stem: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                input: PathBuf::from(defaults::INPUT_PATH),
            },
            output: OutputConfig {
                dir: PathBuf::from(defaults::OUTPUT_DIR),
                stem: defaults::OUTPUT_STEM.to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("paths.input", defaults::INPUT_PATH)?
            .set_default("output.dir", defaults::OUTPUT_DIR)?
            .set_default("output.stem", defaults::OUTPUT_STEM)?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Flat env var names are clearer than the nested separator form
        if let Ok(input) = env::var("RECOVERY_INPUT_PATH") {
            app_config.paths.input = PathBuf::from(input);
        }

        if let Ok(dir) = env::var("RECOVERY_OUTPUT_DIR") {
            app_config.output.dir = PathBuf::from(dir);
        }

        if let Ok(stem) = env::var("RECOVERY_OUTPUT_STEM") {
            app_config.output.stem = stem;
        }

        app_config.validate()?;
        Ok(app_config)
    }

    /// Reject output stems that would escape the output directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        let stem = self.output.stem.trim();
        if stem.is_empty() {
            return Err(ConfigError::Message(
                "Output stem is empty. Set output.stem in config.toml or RECOVERY_OUTPUT_STEM"
                    .to_string(),
            ));
        }

        if stem.contains('/') || stem.contains('\\') {
            return Err(ConfigError::Message(format!(
                "Output stem must be a bare file name, got '{}'",
                self.output.stem
            )));
        }

        Ok(())
    }
}
