//! `laberinto-import` library crate.
//!
//! Moves an Airtable export (one JSON file per table) into the booking
//! database in a single sequential pass:
//!
//! - [`reader`] loads the per-table export files
//! - [`mapper`] turns Airtable fields into destination DTOs
//! - [`resolver`] swaps Airtable record links for destination ids
//! - [`store`] is the write/lookup seam in front of the database
//! - [`importers`] hold one import step per entity
//! - [`driver`] clears the destination and runs the steps in dependency order
//!
//! The binary entrypoint lives in `main.rs`.

pub mod columns;
pub mod config;
pub mod driver;
pub mod error;
pub mod importers;
pub mod mapper;
pub mod reader;
pub mod resolver;
pub mod store;
pub mod summary;
