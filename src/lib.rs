//! Username Forge - themed username and handle generation
//!
//! A simple CLI tool and library for composing randomized usernames from
//! themed word lists with optional affixes, casing rules, numeric suffixes,
//! and length/character constraints.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod history;
pub mod types;

// Re-export commonly used types
pub use error::{Result, UsernameForgeError};
pub use types::{Casing, Category, HistoryItem, StylePreset, StyleRule, UsernameOptions};

// Re-export main functionality
pub use engine::{generate_batch, generate_batch_with_rng, NameComposer};
pub use history::History;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
