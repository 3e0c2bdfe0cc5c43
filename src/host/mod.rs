//! Browser bindings for the core logic.
//!
//! - [`entries`] - Dropped file/directory entries for the flattener
//! - [`xhr`] - The multipart upload request

pub mod entries;
pub mod xhr;
