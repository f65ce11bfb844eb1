//! userdir - A minimal in-memory user directory HTTP service
//!
//! CRUD operations over a single collection of user records held in process
//! memory. No persistence, no authentication; data lives for the process
//! lifetime only.

pub mod cli;
pub mod directory;
pub mod http_server;
