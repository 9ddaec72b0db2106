//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SubmitterConfig (validated, immutable)
//!     → handed to the handler, transports and presenter
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError};
pub use schema::SubmitterConfig;
pub use schema::{
    EndpointConfig, FormConfig, ObservabilityConfig, OpaquePolicy, PresenterConfig, TimeoutConfig,
};
