//! Core data models for the converter
//!
//! This module contains the primary data structures used throughout the
//! application, separated from the logic that operates on them.

mod entry;
mod fragment_config;
mod target;

pub use entry::ConvertedEntry;
pub use fragment_config::{
    FragmentConfig, DEFAULT_HEALTH_CHECK_INTERVAL, DEFAULT_HEALTH_CHECK_URL,
    DEFAULT_REFRESH_INTERVAL,
};
pub use target::TargetFormat;
