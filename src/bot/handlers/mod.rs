//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions other than commands.

/// Autocomplete handlers for course names, batches and assignments
pub mod autocomplete;
