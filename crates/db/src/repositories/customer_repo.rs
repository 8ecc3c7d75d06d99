//! Repository for the `customers` table.

use sqlx::PgPool;

use crate::models::customer::{Customer, UpsertCustomer};

/// Column list shared across queries.
const COLUMNS: &str = "id, source_id, email, name, first_name, last_name, phone, rut, role, \
                       created_at, updated_at";

/// Provides upsert and lookup operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a customer, or overwrite the mutable fields of the customer
    /// that already has the same email.
    pub async fn upsert(pool: &PgPool, input: &UpsertCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (source_id, email, name, first_name, last_name, phone, rut, role)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (email) DO UPDATE SET
                source_id = EXCLUDED.source_id,
                name = EXCLUDED.name,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                phone = EXCLUDED.phone,
                rut = EXCLUDED.rut,
                role = EXCLUDED.role
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.source_id)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.phone)
            .bind(&input.rut)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find the customer imported from the given Airtable record.
    pub async fn find_by_source_id(
        pool: &PgPool,
        source_id: &str,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM customers WHERE source_id = $1 ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(source_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a customer by email (case-sensitive).
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE email = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Count all customers.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
