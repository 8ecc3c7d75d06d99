//! Write and lookup seam between the importers and the destination.
//!
//! [`PgStore`] is the production implementation over the `laberinto_db`
//! repositories. Tests run the same importers against an in-memory store
//! with identical upsert semantics.

use async_trait::async_trait;

use laberinto_db::models::booking::{Booking, CreateBooking};
use laberinto_db::models::catalog::{WineCategory, WineRegion};
use laberinto_db::models::customer::{Customer, UpsertCustomer};
use laberinto_db::models::event::{CreateEvent, Event};
use laberinto_db::models::experience::{Experience, UpsertExperience};
use laberinto_db::models::location::{Location, UpsertLocation};
use laberinto_db::models::product::{CreateProduct, Product};
use laberinto_db::models::sale::{CreateSale, CreateSaleItem, Sale, SaleItem};
use laberinto_db::models::wine::{UpsertWine, Wine};

use crate::error::StoreError;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ImportStore: Send + Sync {
    /// Delete every imported row, children first. Returns `(table, rows)` pairs.
    async fn clear_imported(&self) -> StoreResult<Vec<(&'static str, u64)>>;

    // -- reference data --

    async fn ensure_region(&self, name: &str, country: &str) -> StoreResult<WineRegion>;

    async fn ensure_category(&self, name: &str, slug: &str) -> StoreResult<WineCategory>;

    // -- customers --

    /// Insert or update by email.
    async fn upsert_customer(&self, input: &UpsertCustomer) -> StoreResult<Customer>;

    async fn find_customer_by_source_id(&self, source_id: &str) -> StoreResult<Option<Customer>>;

    async fn find_customer_by_email(&self, email: &str) -> StoreResult<Option<Customer>>;

    // -- wines --

    /// Update the row matching the code, else the row matching the slug, else insert.
    async fn upsert_wine(&self, input: &UpsertWine) -> StoreResult<Wine>;

    async fn find_wine_by_source_id(&self, source_id: &str) -> StoreResult<Option<Wine>>;

    // -- locations / experiences --

    /// Insert or update by name.
    async fn upsert_location(&self, input: &UpsertLocation) -> StoreResult<Location>;

    async fn first_location(&self) -> StoreResult<Option<Location>>;

    /// Insert or update by slug.
    async fn upsert_experience(&self, input: &UpsertExperience) -> StoreResult<Experience>;

    async fn first_experience(&self) -> StoreResult<Option<Experience>>;

    async fn find_experience_by_source_id(
        &self,
        source_id: &str,
    ) -> StoreResult<Option<Experience>>;

    // -- events / products / sales / bookings: always inserted --

    async fn create_event(&self, input: &CreateEvent) -> StoreResult<Event>;

    /// Event with the earliest start time.
    async fn earliest_event(&self) -> StoreResult<Option<Event>>;

    async fn create_product(&self, input: &CreateProduct) -> StoreResult<Product>;

    async fn create_sale(&self, input: &CreateSale) -> StoreResult<Sale>;

    async fn create_sale_item(&self, input: &CreateSaleItem) -> StoreResult<SaleItem>;

    async fn create_booking(&self, input: &CreateBooking) -> StoreResult<Booking>;
}
