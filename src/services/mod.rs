//! Application service layer.
//!
//! Services contain business logic and sit between the HTTP handlers
//! and the search index. They provide the validation and error-mapping
//! boundary the transport layer relies on.

mod directory_service;

pub use directory_service::{DirectoryService, DirectoryServiceImpl};
