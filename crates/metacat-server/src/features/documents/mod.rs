pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{ImportDocumentsCommand, ImportDocumentsError, ImportDocumentsResponse};
pub use queries::{GetFeedFileError, ListDocumentsError, ListDocumentsQuery};
pub use routes::documents_routes;
