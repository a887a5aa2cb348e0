//! Datemark Core - Core types for ambiguous date-notation resolution
//!
//! This crate provides the data model shared by the solver crates:
//! - Raw date notations and their slot positions
//! - Calendar components and the 3-bit candidate set
//! - Per-entity deduction profiles
//! - Record parsing and the corpus of dated records
//! - Calendar helpers (century pivot, days in month)

pub mod calendar;
pub mod component;
pub mod error;
pub mod notation;
pub mod profile;
pub mod record;

pub use component::{Component, ComponentSet};
pub use error::DatemarkError;
pub use notation::{DateNotation, Slot};
pub use profile::{EntityProfile, ProfileStatus};
pub use record::{Corpus, EntityId, ParseError, ParseErrorKind, Record};
