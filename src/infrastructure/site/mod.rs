//! Site Implementations
//!
//! Concrete implementations of the Site port:
//! - StaticSite: outputs registered in code
//! - ManifestSite: outputs read from a manifest file

mod manifest;
mod memory;

pub use manifest::{parse_manifest, ManifestSite};
pub use memory::StaticSite;
