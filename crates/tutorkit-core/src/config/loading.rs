//! Configuration loading and merging logic.
//!
//! Missing config files are expected and skipped; unreadable or malformed
//! files are errors.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::types::{TutorkitConfig, ValidationConfig};
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".tutorkit";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from defaults, `~/.tutorkit/config.toml` and
/// `./.tutorkit/config.toml`, in that order.
pub fn load_hierarchy() -> Result<TutorkitConfig, ConfigError> {
    let user_dir = dirs::home_dir();
    let project_dir = std::env::current_dir()?;
    load_hierarchy_from(user_dir.as_deref(), &project_dir)
}

/// Same as [`load_hierarchy`] with explicit user and project base directories.
pub fn load_hierarchy_from(
    user_dir: Option<&Path>,
    project_dir: &Path,
) -> Result<TutorkitConfig, ConfigError> {
    let mut config = TutorkitConfig::default();

    for base in user_dir.into_iter().chain(std::iter::once(project_dir)) {
        let path = base.join(CONFIG_DIR).join(CONFIG_FILE);
        if let Some(layer) = load_config_file(&path)? {
            config = merge_configs(config, layer);
        }
    }

    Ok(config)
}

/// Load one config file; `Ok(None)` if it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<TutorkitConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(event = "core.config.file_missing", path = %path.display());
            return Ok(None);
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(Some(config))
}

/// Merge two configurations, with `override_config` taking precedence
/// wherever it sets a value.
pub fn merge_configs(base: TutorkitConfig, override_config: TutorkitConfig) -> TutorkitConfig {
    TutorkitConfig {
        validation: ValidationConfig {
            strict_document: override_config
                .validation
                .strict_document
                .or(base.validation.strict_document),
        },
    }
}
