//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create or upsert DTO used by the import pipeline
//!
//! Every imported row keeps the Airtable record id it came from in
//! `source_id`. That column exists only so later import steps can resolve
//! cross-references; nothing reads it at query time afterwards.

pub mod booking;
pub mod catalog;
pub mod customer;
pub mod event;
pub mod experience;
pub mod location;
pub mod product;
pub mod sale;
pub mod wine;
