//! Customer entity model and DTOs.

use laberinto_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `customers` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
    pub id: DbId,
    pub source_id: Option<String>,
    pub email: String,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub rut: Option<String>,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting or overwriting a customer, keyed by `email`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertCustomer {
    pub source_id: Option<String>,
    pub email: String,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub rut: Option<String>,
    pub role: String,
}
