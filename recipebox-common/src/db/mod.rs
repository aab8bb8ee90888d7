//! Database initialization for the SQLite document store

pub mod init;

pub use init::*;
