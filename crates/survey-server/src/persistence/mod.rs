//! Persistence layer for the survey server.
//!
//! SQLite-backed storage for estates and their trees.

pub mod db;
pub mod estates;
pub mod trees;

pub use db::{init_database, Database};
