pub mod feed_file;
pub mod list;

pub use feed_file::GetFeedFileError;
pub use list::{ListDocumentsError, ListDocumentsQuery};
