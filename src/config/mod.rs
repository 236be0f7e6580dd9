//! Configuration module for prorata-cli
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ProrataPaths;
pub use settings::Settings;
