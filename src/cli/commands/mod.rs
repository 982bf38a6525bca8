pub mod inspect;
pub mod recover;

use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

/// Load configuration and resolve the input path, CLI argument first
pub(crate) fn resolve_input(input: &Option<PathBuf>) -> AppResult<(AppConfig, PathBuf)> {
    let config = AppConfig::load()
        .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;
    let input = input.clone().unwrap_or_else(|| config.paths.input.clone());
    Ok((config, input))
}
