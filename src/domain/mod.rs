//! Domain helpers.
//!
//! Pure functions over domain values, kept free of I/O so they can be
//! exercised exhaustively in unit tests.

pub mod slug;

pub use slug::{assign_slugs, slugify};
