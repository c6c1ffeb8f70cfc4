//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! [validation]
//! strict_document = false
//! ```

use serde::{Deserialize, Serialize};

use crate::schema::ValidationOptions;

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorkitConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Document validation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Reject unknown top-level document keys.
    /// Default: false (unknown keys are ignored).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_document: Option<bool>,
}

impl ValidationConfig {
    pub fn strict_document(&self) -> bool {
        self.strict_document.unwrap_or(false)
    }
}

impl TutorkitConfig {
    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            strict_document: self.validation.strict_document(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: TutorkitConfig = toml::from_str("").unwrap();
        assert_eq!(config, TutorkitConfig::default());
        assert!(!config.validation_options().strict_document);
    }

    #[test]
    fn test_strict_document_from_toml() {
        let config: TutorkitConfig = toml::from_str(
            r#"
[validation]
strict_document = true
"#,
        )
        .unwrap();
        assert!(config.validation_options().strict_document);
    }
}
