//! Domain Layer
//!
//! The core of sitesweep: path-set reasoning without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Build output items
//! - `value_objects/` - Path normalization, protected paths, config warnings
//! - `services/` - Obsolete detection, request path resolution
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Filesystem questions are answered through ports or
//!    injected predicates
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
