pub mod import;

pub use import::{ImportDocumentsCommand, ImportDocumentsError, ImportDocumentsResponse};
