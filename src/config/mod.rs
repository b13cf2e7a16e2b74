//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FaqConfig (validated, immutable)
//!     → consumed once by HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    FaqConfig, ListenerConfig, ObservabilityConfig, SecurityConfig, TimeoutConfig,
    TranslationConfig, UploadConfig,
};
pub use validation::{validate_config, ValidationError};
