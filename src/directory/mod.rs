//! # User Directory
//!
//! In-memory record store and user model. The store owns all records for the
//! process lifetime; there is no persistence.

pub mod errors;
pub mod store;
pub mod user;

pub use errors::{DirectoryError, DirectoryResult};
pub use store::UserStore;
pub use user::{CreateUserRequest, User};
