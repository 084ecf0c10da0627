//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod path;
mod protected_paths;

pub use config_warning::ConfigWarning;
pub use path::{ancestors_below, is_self_or_parent_marker, normalize_lexically};
pub use protected_paths::ProtectedPaths;
