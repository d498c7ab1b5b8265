//! sitepulse-state — durable last-known-status store for SitePulse.
//!
//! A `StatusStore` maps each site url to the `Status` it had at the end of
//! the previous monitoring cycle. The transition engine reads it to tell a
//! repeat from a change, and rewrites it in full once per cycle.
//!
//! # Architecture
//!
//! The persisted form is a single flat JSON object (url → status label),
//! human-readable and stable across runs. Loading never fails: a missing,
//! empty, or damaged file degrades to an empty baseline and the next save
//! rewrites it. Saving replaces the file atomically via a sibling
//! temporary file and a rename.

pub mod error;
pub mod store;
pub mod types;

pub use error::{StateError, StateResult};
pub use store::StatusStore;
pub use types::Status;
