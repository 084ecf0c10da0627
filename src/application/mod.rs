//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CleanUseCase` - Lists the destination, computes obsolete paths,
//!   fires the pre-deletion hook and deletes

pub mod clean;

pub use clean::{CleanOptions, CleanReport, CleanUseCase};
