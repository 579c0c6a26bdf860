//! Configuration module for prime-pages
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PRIME_PAGES_*)
//! 3. Explicit `--config` file, or project config (./prime-pages.toml)
//! 4. User config (<config dir>/prime-pages/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, load_layered, resolve, user_config_path, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, OutputConfig, TableConfig, Verbosity};
