// Public modules
pub mod config;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod prompt;
pub mod rewrite;
pub mod skeleton;

// Internal modules - not part of public API
pub(crate) mod slugify;
pub(crate) mod tty;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use generator::GeneratedPackage;
