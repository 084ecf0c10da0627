//! Domain Entities
//!
//! - `OutputItem` - A file the current build will write

mod output_item;

pub use output_item::OutputItem;
