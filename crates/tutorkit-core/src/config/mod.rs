//! # Configuration System
//!
//! Hierarchical TOML configuration for the TutorKit tools. This configures
//! how documents are validated; it is not the validated document itself.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.tutorkit/config.toml` (global user preferences)
//! 3. **Project config** - `./.tutorkit/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ./.tutorkit/config.toml
//! [validation]
//! strict_document = true
//! ```
//!
//! ```rust,no_run
//! use tutorkit_core::config::TutorkitConfig;
//!
//! fn example() -> Result<(), tutorkit_core::errors::ConfigError> {
//!     let config = TutorkitConfig::load_hierarchy()?;
//!     let options = config.validation_options();
//!     Ok(())
//! }
//! ```

pub mod loading;
pub mod types;

pub use types::{TutorkitConfig, ValidationConfig};

impl TutorkitConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }
}
