//! Application ports

/// Type registration tables
pub mod registry;
