// Service exports
pub mod catalog;
pub mod session;

pub use catalog::{CatalogClient, CatalogError};
pub use session::{SessionError, SessionStore};
