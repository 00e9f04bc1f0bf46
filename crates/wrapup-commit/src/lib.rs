//! Commit types for Wrapup.
//!
//! This crate provides the core commit types used throughout Wrapup:
//! - [`CommitRecord`]: A commit as retrieved from Git, with its diff statistics
//! - [`CommitType`] and [`TypeProfile`]: The fixed classification table
//! - [`ParsedCommit`]: The classification derived from a commit message
//! - [`AnalyzedCommit`]: A record paired with its classification
//! - [`MergedEntry`]: One report line standing for one or more commits

mod kind;
mod merged;
mod parsed;
mod raw;

pub use kind::{CommitType, TypeProfile};
pub use merged::MergedEntry;
pub use parsed::{AnalyzedCommit, ParsedCommit};
pub use raw::{CommitRecord, DiffStats, SMALL_CHANGE_THRESHOLD};
