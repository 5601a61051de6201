//! Command-line presentation
//!
//! Board rendering, greeting and rules text, and outcome announcements used by
//! the interactive binary. Input parsing lives with the human combatant in
//! `crate::player::cli`.

pub mod interface;

// Re-export interface functions
pub use interface::*;
