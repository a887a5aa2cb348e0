//! Shared test fixtures for Datemark crates.
//!
//! This crate provides corpora and profile builders for testing.
//! It does NOT depend on `datemark-solver` to avoid circular dependencies.
//!
//! - [`diary`] - A small diary corpus with known answers
//! - [`profiles`] - Profiles in a given solved or partial state
//! - [`shuffle`] - Seeded record reordering
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! datemark-test = { workspace = true }
//! ```

pub mod diary;
pub mod profiles;
pub mod shuffle;

pub use diary::{diary_corpus, DIARY, DIARY_MATCHES};
pub use profiles::{profile_of, solved_profile};
pub use shuffle::shuffled;
