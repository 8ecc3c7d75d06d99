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
use laberinto_db::repositories::{
    BookingRepo, CatalogRepo, CustomerRepo, EventRepo, ExperienceRepo, LocationRepo, ProductRepo,
    ResetRepo, SaleRepo, WineRepo,
};
use laberinto_db::DbPool;

use super::{ImportStore, StoreResult};

/// [`ImportStore`] backed by Postgres through the `laberinto_db` repositories.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImportStore for PgStore {
    async fn clear_imported(&self) -> StoreResult<Vec<(&'static str, u64)>> {
        Ok(ResetRepo::clear_imported(&self.pool).await?)
    }

    async fn ensure_region(&self, name: &str, country: &str) -> StoreResult<WineRegion> {
        Ok(CatalogRepo::ensure_region(&self.pool, name, country).await?)
    }

    async fn ensure_category(&self, name: &str, slug: &str) -> StoreResult<WineCategory> {
        Ok(CatalogRepo::ensure_category(&self.pool, name, slug).await?)
    }

    async fn upsert_customer(&self, input: &UpsertCustomer) -> StoreResult<Customer> {
        Ok(CustomerRepo::upsert(&self.pool, input).await?)
    }

    async fn find_customer_by_source_id(&self, source_id: &str) -> StoreResult<Option<Customer>> {
        Ok(CustomerRepo::find_by_source_id(&self.pool, source_id).await?)
    }

    async fn find_customer_by_email(&self, email: &str) -> StoreResult<Option<Customer>> {
        Ok(CustomerRepo::find_by_email(&self.pool, email).await?)
    }

    async fn upsert_wine(&self, input: &UpsertWine) -> StoreResult<Wine> {
        Ok(WineRepo::upsert(&self.pool, input).await?)
    }

    async fn find_wine_by_source_id(&self, source_id: &str) -> StoreResult<Option<Wine>> {
        Ok(WineRepo::find_by_source_id(&self.pool, source_id).await?)
    }

    async fn upsert_location(&self, input: &UpsertLocation) -> StoreResult<Location> {
        Ok(LocationRepo::upsert(&self.pool, input).await?)
    }

    async fn first_location(&self) -> StoreResult<Option<Location>> {
        Ok(LocationRepo::first(&self.pool).await?)
    }

    async fn upsert_experience(&self, input: &UpsertExperience) -> StoreResult<Experience> {
        Ok(ExperienceRepo::upsert(&self.pool, input).await?)
    }

    async fn first_experience(&self) -> StoreResult<Option<Experience>> {
        Ok(ExperienceRepo::first(&self.pool).await?)
    }

    async fn find_experience_by_source_id(
        &self,
        source_id: &str,
    ) -> StoreResult<Option<Experience>> {
        Ok(ExperienceRepo::find_by_source_id(&self.pool, source_id).await?)
    }

    async fn create_event(&self, input: &CreateEvent) -> StoreResult<Event> {
        Ok(EventRepo::create(&self.pool, input).await?)
    }

    async fn earliest_event(&self) -> StoreResult<Option<Event>> {
        Ok(EventRepo::earliest(&self.pool).await?)
    }

    async fn create_product(&self, input: &CreateProduct) -> StoreResult<Product> {
        Ok(ProductRepo::create(&self.pool, input).await?)
    }

    async fn create_sale(&self, input: &CreateSale) -> StoreResult<Sale> {
        Ok(SaleRepo::create(&self.pool, input).await?)
    }

    async fn create_sale_item(&self, input: &CreateSaleItem) -> StoreResult<SaleItem> {
        Ok(SaleRepo::create_item(&self.pool, input).await?)
    }

    async fn create_booking(&self, input: &CreateBooking) -> StoreResult<Booking> {
        Ok(BookingRepo::create(&self.pool, input).await?)
    }
}
