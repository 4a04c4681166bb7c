// src/filtering/mod.rs

//! Filters applied to files after the ignore matcher.
//!
//! `FileSelector` is the include/exclude glob pass composed after the walk;
//! the text detection helper is used by the processing stage to drop
//! binary files.

mod selector;
mod text_detection;

pub use selector::{accepts, FileSelector};
pub use text_detection::is_likely_text_from_buffer;
