//! Ignore-file patterns and the matcher that applies them.
//!
//! Patterns are literal shell globs with two extras: a trailing `/` scopes a
//! pattern to directories (and everything beneath them), and a leading `./`
//! is stripped before matching. Negation and `**` are not supported.

mod matcher;
mod store;

pub use matcher::{is_excluded, Matcher};
pub use store::{IgnorePattern, MatchStrategy, PatternStore};
