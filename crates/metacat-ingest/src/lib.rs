//! metacat ingest library
//!
//! Offline tooling around document feeds:
//!
//! - **generator**: seeded sample feeds in the localized source vocabulary
//! - **commands**: `check` and `import` over local feed files

pub mod commands;
pub mod generator;

pub use generator::{generate_feed, write_feed};
