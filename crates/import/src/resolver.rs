//! Resolves Airtable record links to rows imported earlier in the run.

use laberinto_db::models::customer::Customer;
use laberinto_db::models::experience::Experience;
use laberinto_db::models::wine::Wine;

use crate::error::ImportResult;
use crate::mapper::normalize_email;
use crate::store::ImportStore;

/// Outcome of a cross-reference lookup.
///
/// `Unresolved` is an expected outcome, not an error: the caller skips the
/// dependent record and moves on.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Resolved(T),
    Unresolved,
}

impl<T> Resolution<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

impl<T> From<Option<T>> for Resolution<T> {
    fn from(row: Option<T>) -> Self {
        match row {
            Some(row) => Resolution::Resolved(row),
            None => Resolution::Unresolved,
        }
    }
}

/// Looks destination rows up by the Airtable id they were imported from.
///
/// Every lookup reads the store; nothing is cached, so a row written a
/// moment earlier in the same run is always visible.
pub struct CrossRefResolver<'a, S: ImportStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ImportStore + ?Sized> CrossRefResolver<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn customer(&self, source_id: &str) -> ImportResult<Resolution<Customer>> {
        Ok(self.store.find_customer_by_source_id(source_id).await?.into())
    }

    /// Customers are matched on their normalized email.
    pub async fn customer_by_email(&self, email: &str) -> ImportResult<Resolution<Customer>> {
        let email = normalize_email(email);
        Ok(self.store.find_customer_by_email(&email).await?.into())
    }

    pub async fn wine(&self, source_id: &str) -> ImportResult<Resolution<Wine>> {
        Ok(self.store.find_wine_by_source_id(source_id).await?.into())
    }

    pub async fn experience(&self, source_id: &str) -> ImportResult<Resolution<Experience>> {
        Ok(self.store.find_experience_by_source_id(source_id).await?.into())
    }
}
