pub mod generator;
pub mod models;
pub mod settings;
pub mod utils;

#[cfg(feature = "web-api")]
pub mod web_handlers;

// Re-export the core conversion operations for easier access
pub use generator::{convert_entries, derive_identifier, generate, rewrite_url, GeneratedFragments};

// Re-export the core model types
pub use models::{ConvertedEntry, FragmentConfig, TargetFormat};

pub use settings::Settings;
