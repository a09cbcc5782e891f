//! metacat common library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared domain types, the localized vocabulary, error types and logging
//! setup used by every metacat workspace member.
//!
//! - **Types**: [`DocumentRecord`] and the canonical enumerations
//! - **Vocabulary**: source-token tables and the enumeration mapper
//! - **Errors**: [`ValidationError`] for field contracts, [`MetacatError`] for the rest
//! - **Logging**: `tracing` subscriber setup driven by `LOG_*` variables
//!
//! # Example
//!
//! ```
//! use metacat_common::vocabulary::{map_token, IMPORTANCE_TOKENS};
//! use metacat_common::Importance;
//!
//! let importance = map_token("augsts", IMPORTANCE_TOKENS, "importance").unwrap();
//! assert_eq!(importance, Importance::High);
//! ```

pub mod error;
pub mod logging;
pub mod types;
pub mod vocabulary;

pub use error::{MetacatError, Result, ValidationError};
pub use types::{Category, DocumentRecord, FileType, Importance};
