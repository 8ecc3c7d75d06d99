//! Pure domain logic for the Laberinto Airtable import.
//!
//! Nothing in this crate touches the database, the filesystem or an async
//! runtime. The `laberinto-db` and `laberinto-import` crates build on it.

pub mod airtable;
pub mod error;
pub mod slug;
pub mod types;
pub mod vocabulary;
