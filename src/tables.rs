//! Table component
//!
//! This module provides access to blitz-table, which mounts header, body and
//! footer fragments into a container and re-renders the body for filter,
//! sort and reset operations.

// Re-export all blitz-table functionality
pub use blitz_table::*;
