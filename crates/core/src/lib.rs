//! Shared domain types for the Leaf Link plant tracker.
//!
//! No I/O lives here: only ids, timestamps, the domain error enum, the
//! upload MIME lookup, and validation helpers.

pub mod error;
pub mod media;
pub mod types;
pub mod validation;
