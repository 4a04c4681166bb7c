//! The `dircollect` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use dircollect::prelude::*;
//! # fn main() -> Result<()> {
//! let store = PatternStore::parse("target/\n*.log\n");
//! let matcher = Matcher::new(&store);
//! assert!(matcher.is_excluded(&CandidatePath::new("target", true)));
//!
//! let config = ConfigBuilder::new().input_path(".").max_depth(1).build()?;
//! assert_eq!(config.discovery.mode, WalkMode::Recursive { max_depth: Some(1) });
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder, OutputDestination};
pub use crate::core_types::{CandidatePath, FileInfo};
pub use crate::discovery::{discover_files, discover_with_patterns, WalkMode, Walker};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{is_likely_text_from_buffer, FileSelector};
pub use crate::patterns::{IgnorePattern, MatchStrategy, Matcher, PatternStore};
pub use crate::{discover, format, format_paths, process, run};
