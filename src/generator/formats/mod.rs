//! Per-format rendering of configuration text
//!
//! Each format module produces plain text in the exact syntax its consumer
//! parses; field names, indentation and ordering are fixed.

pub mod clash;
pub mod surge;
