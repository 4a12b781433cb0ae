//! Trait definitions for Gutendex operations.
//!
//! Each entity type implements the traits its endpoints support.

mod get;
mod list;

pub use get::Get;
pub use list::{List, DEFAULT_MAX_PAGES};
