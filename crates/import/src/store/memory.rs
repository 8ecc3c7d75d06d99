//! In-memory [`ImportStore`] for pipeline tests.
//!
//! Mirrors the unique keys of the Postgres schema (customer email, wine
//! code and slug, location name, experience slug, region name, category
//! slug) so upsert and conflict behaviour match the real store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use laberinto_core::types::DbId;
use laberinto_db::models::booking::{Booking, CreateBooking};
use laberinto_db::models::catalog::{WineCategory, WineRegion};
use laberinto_db::models::customer::{Customer, UpsertCustomer};
use laberinto_db::models::event::{CreateEvent, Event};
use laberinto_db::models::experience::{Experience, UpsertExperience};
use laberinto_db::models::location::{Location, UpsertLocation};
use laberinto_db::models::product::{CreateProduct, Product};
use laberinto_db::models::sale::{CreateSale, CreateSaleItem, Sale, SaleItem};
use laberinto_db::models::wine::{UpsertWine, Wine};
use laberinto_db::repositories::reset_repo::CLEAR_ORDER;

use super::{ImportStore, StoreResult};
use crate::error::StoreError;

#[derive(Debug, Default)]
struct Tables {
    next_id: DbId,
    regions: Vec<WineRegion>,
    categories: Vec<WineCategory>,
    customers: Vec<Customer>,
    wines: Vec<Wine>,
    locations: Vec<Location>,
    experiences: Vec<Experience>,
    events: Vec<Event>,
    products: Vec<Product>,
    sales: Vec<Sale>,
    sale_items: Vec<SaleItem>,
    bookings: Vec<Booking>,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn clear(&mut self, table: &str) -> u64 {
        fn drain<T>(rows: &mut Vec<T>) -> u64 {
            let n = rows.len() as u64;
            rows.clear();
            n
        }
        match table {
            "sale_items" => drain(&mut self.sale_items),
            "sales" => drain(&mut self.sales),
            "bookings" => drain(&mut self.bookings),
            "events" => drain(&mut self.events),
            "experiences" => drain(&mut self.experiences),
            "products" => drain(&mut self.products),
            "locations" => drain(&mut self.locations),
            "wines" => drain(&mut self.wines),
            "customers" => drain(&mut self.customers),
            _ => 0,
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unreachable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database went away.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    fn tables(&self) -> StoreResult<std::sync::MutexGuard<'_, Tables>> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self.tables.lock().unwrap())
    }

    pub fn customers(&self) -> Vec<Customer> {
        self.tables.lock().unwrap().customers.clone()
    }

    pub fn wines(&self) -> Vec<Wine> {
        self.tables.lock().unwrap().wines.clone()
    }

    pub fn locations(&self) -> Vec<Location> {
        self.tables.lock().unwrap().locations.clone()
    }

    pub fn experiences(&self) -> Vec<Experience> {
        self.tables.lock().unwrap().experiences.clone()
    }

    pub fn events(&self) -> Vec<Event> {
        self.tables.lock().unwrap().events.clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.tables.lock().unwrap().products.clone()
    }

    pub fn sales(&self) -> Vec<Sale> {
        self.tables.lock().unwrap().sales.clone()
    }

    pub fn sale_items(&self) -> Vec<SaleItem> {
        self.tables.lock().unwrap().sale_items.clone()
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.tables.lock().unwrap().bookings.clone()
    }
}

#[async_trait]
impl ImportStore for MemoryStore {
    async fn clear_imported(&self) -> StoreResult<Vec<(&'static str, u64)>> {
        let mut t = self.tables()?;
        Ok(CLEAR_ORDER
            .iter()
            .map(|table| (*table, t.clear(table)))
            .collect())
    }

    async fn ensure_region(&self, name: &str, country: &str) -> StoreResult<WineRegion> {
        let mut t = self.tables()?;
        if let Some(region) = t.regions.iter_mut().find(|r| r.name == name) {
            region.country = country.to_string();
            region.updated_at = Utc::now();
            return Ok(region.clone());
        }
        let now = Utc::now();
        let region = WineRegion {
            id: t.next_id(),
            name: name.to_string(),
            country: country.to_string(),
            created_at: now,
            updated_at: now,
        };
        t.regions.push(region.clone());
        Ok(region)
    }

    async fn ensure_category(&self, name: &str, slug: &str) -> StoreResult<WineCategory> {
        let mut t = self.tables()?;
        if let Some(category) = t.categories.iter_mut().find(|c| c.slug == slug) {
            category.name = name.to_string();
            category.updated_at = Utc::now();
            return Ok(category.clone());
        }
        let now = Utc::now();
        let category = WineCategory {
            id: t.next_id(),
            name: name.to_string(),
            slug: slug.to_string(),
            created_at: now,
            updated_at: now,
        };
        t.categories.push(category.clone());
        Ok(category)
    }

    async fn upsert_customer(&self, input: &UpsertCustomer) -> StoreResult<Customer> {
        let mut t = self.tables()?;
        let now = Utc::now();
        if let Some(c) = t.customers.iter_mut().find(|c| c.email == input.email) {
            c.source_id = input.source_id.clone();
            c.name = input.name.clone();
            c.first_name = input.first_name.clone();
            c.last_name = input.last_name.clone();
            c.phone = input.phone.clone();
            c.rut = input.rut.clone();
            c.role = input.role.clone();
            c.updated_at = now;
            return Ok(c.clone());
        }
        let customer = Customer {
            id: t.next_id(),
            source_id: input.source_id.clone(),
            email: input.email.clone(),
            name: input.name.clone(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            phone: input.phone.clone(),
            rut: input.rut.clone(),
            role: input.role.clone(),
            created_at: now,
            updated_at: now,
        };
        t.customers.push(customer.clone());
        Ok(customer)
    }

    async fn find_customer_by_source_id(&self, source_id: &str) -> StoreResult<Option<Customer>> {
        let t = self.tables()?;
        Ok(t.customers
            .iter()
            .find(|c| c.source_id.as_deref() == Some(source_id))
            .cloned())
    }

    async fn find_customer_by_email(&self, email: &str) -> StoreResult<Option<Customer>> {
        let t = self.tables()?;
        Ok(t.customers.iter().find(|c| c.email == email).cloned())
    }

    async fn upsert_wine(&self, input: &UpsertWine) -> StoreResult<Wine> {
        let mut t = self.tables()?;
        let now = Utc::now();
        let target = t
            .wines
            .iter()
            .position(|w| w.code == input.code)
            .or_else(|| t.wines.iter().position(|w| w.slug == input.slug));

        let Some(index) = target else {
            let wine = Wine {
                id: t.next_id(),
                source_id: input.source_id.clone(),
                code: input.code.clone(),
                name: input.name.clone(),
                slug: input.slug.clone(),
                category_id: input.category_id,
                region_id: input.region_id,
                producer: input.producer.clone(),
                base_price: input.base_price,
                description: input.description.clone(),
                tasting_notes: input.tasting_notes.clone(),
                pairing_notes: input.pairing_notes.clone(),
                barcode: input.barcode.clone(),
                is_active: true,
                created_at: now,
                updated_at: now,
            };
            t.wines.push(wine.clone());
            return Ok(wine);
        };

        let id = t.wines[index].id;
        if t
            .wines
            .iter()
            .any(|w| w.id != id && (w.code == input.code || w.slug == input.slug))
        {
            return Err(StoreError::Conflict(format!(
                "wine code '{}' or slug '{}' already taken",
                input.code, input.slug
            )));
        }

        let w = &mut t.wines[index];
        w.source_id = input.source_id.clone();
        w.code = input.code.clone();
        w.name = input.name.clone();
        w.slug = input.slug.clone();
        w.category_id = input.category_id;
        w.region_id = input.region_id;
        w.producer = input.producer.clone();
        w.base_price = input.base_price;
        w.description = input.description.clone();
        w.tasting_notes = input.tasting_notes.clone();
        w.pairing_notes = input.pairing_notes.clone();
        w.barcode = input.barcode.clone();
        w.updated_at = now;
        Ok(w.clone())
    }

    async fn find_wine_by_source_id(&self, source_id: &str) -> StoreResult<Option<Wine>> {
        let t = self.tables()?;
        Ok(t.wines
            .iter()
            .find(|w| w.source_id.as_deref() == Some(source_id))
            .cloned())
    }

    async fn upsert_location(&self, input: &UpsertLocation) -> StoreResult<Location> {
        let mut t = self.tables()?;
        let now = Utc::now();
        if let Some(l) = t.locations.iter_mut().find(|l| l.name == input.name) {
            l.source_id = input.source_id.clone();
            l.location_type = input.location_type.clone();
            l.address = input.address.clone();
            l.city = input.city.clone();
            l.country = input.country.clone();
            l.updated_at = now;
            return Ok(l.clone());
        }
        let location = Location {
            id: t.next_id(),
            source_id: input.source_id.clone(),
            name: input.name.clone(),
            location_type: input.location_type.clone(),
            address: input.address.clone(),
            city: input.city.clone(),
            country: input.country.clone(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        t.locations.push(location.clone());
        Ok(location)
    }

    async fn first_location(&self) -> StoreResult<Option<Location>> {
        let t = self.tables()?;
        Ok(t.locations.iter().min_by_key(|l| l.id).cloned())
    }

    async fn upsert_experience(&self, input: &UpsertExperience) -> StoreResult<Experience> {
        let mut t = self.tables()?;
        let now = Utc::now();
        if let Some(e) = t.experiences.iter_mut().find(|e| e.slug == input.slug) {
            e.source_id = input.source_id.clone();
            e.name = input.name.clone();
            e.experience_type = input.experience_type.clone();
            e.description = input.description.clone();
            e.duration_minutes = input.duration_minutes;
            e.max_participants = input.max_participants;
            e.base_price = input.base_price;
            e.location_id = input.location_id;
            e.metadata = input.metadata.clone();
            e.updated_at = now;
            return Ok(e.clone());
        }
        let experience = Experience {
            id: t.next_id(),
            source_id: input.source_id.clone(),
            name: input.name.clone(),
            slug: input.slug.clone(),
            experience_type: input.experience_type.clone(),
            description: input.description.clone(),
            duration_minutes: input.duration_minutes,
            max_participants: input.max_participants,
            base_price: input.base_price,
            location_id: input.location_id,
            metadata: input.metadata.clone(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        t.experiences.push(experience.clone());
        Ok(experience)
    }

    async fn first_experience(&self) -> StoreResult<Option<Experience>> {
        let t = self.tables()?;
        Ok(t.experiences.iter().min_by_key(|e| e.id).cloned())
    }

    async fn find_experience_by_source_id(
        &self,
        source_id: &str,
    ) -> StoreResult<Option<Experience>> {
        let t = self.tables()?;
        Ok(t.experiences
            .iter()
            .find(|e| e.source_id.as_deref() == Some(source_id))
            .cloned())
    }

    async fn create_event(&self, input: &CreateEvent) -> StoreResult<Event> {
        let mut t = self.tables()?;
        let now = Utc::now();
        let event = Event {
            id: t.next_id(),
            source_id: input.source_id.clone(),
            title: input.title.clone(),
            experience_id: input.experience_id,
            location_id: input.location_id,
            start_time: input.start_time,
            end_time: input.end_time,
            max_capacity: input.max_capacity,
            status: input.status.clone(),
            price_override: input.price_override,
            metadata: input.metadata.clone(),
            created_at: now,
            updated_at: now,
        };
        t.events.push(event.clone());
        Ok(event)
    }

    async fn earliest_event(&self) -> StoreResult<Option<Event>> {
        let t = self.tables()?;
        Ok(t.events
            .iter()
            .min_by_key(|e| (e.start_time, e.id))
            .cloned())
    }

    async fn create_product(&self, input: &CreateProduct) -> StoreResult<Product> {
        let mut t = self.tables()?;
        let now = Utc::now();
        let product = Product {
            id: t.next_id(),
            source_id: input.source_id.clone(),
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price,
            category: input.category.clone(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        t.products.push(product.clone());
        Ok(product)
    }

    async fn create_sale(&self, input: &CreateSale) -> StoreResult<Sale> {
        let mut t = self.tables()?;
        if !t.customers.iter().any(|c| c.id == input.customer_id) {
            return Err(StoreError::Conflict(format!(
                "customer {} does not exist",
                input.customer_id
            )));
        }
        let now = Utc::now();
        let sale = Sale {
            id: t.next_id(),
            source_id: input.source_id.clone(),
            customer_id: input.customer_id,
            total_amount: input.total_amount,
            sale_date: input.sale_date,
            status: input.status.clone(),
            notes: input.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        t.sales.push(sale.clone());
        Ok(sale)
    }

    async fn create_sale_item(&self, input: &CreateSaleItem) -> StoreResult<SaleItem> {
        let mut t = self.tables()?;
        let now = Utc::now();
        let item = SaleItem {
            id: t.next_id(),
            source_id: input.source_id.clone(),
            sale_id: input.sale_id,
            wine_id: input.wine_id,
            quantity: input.quantity,
            unit_price: input.unit_price,
            total_price: input.total_price,
            created_at: now,
            updated_at: now,
        };
        t.sale_items.push(item.clone());
        Ok(item)
    }

    async fn create_booking(&self, input: &CreateBooking) -> StoreResult<Booking> {
        let mut t = self.tables()?;
        let now = Utc::now();
        let booking = Booking {
            id: t.next_id(),
            source_id: input.source_id.clone(),
            organizer_id: input.organizer_id,
            event_id: input.event_id,
            total_participants: input.total_participants,
            adults_count: input.adults_count,
            children_count: input.children_count,
            non_drinkers_count: input.non_drinkers_count,
            subtotal: input.subtotal,
            total_amount: input.total_amount,
            paid_amount: input.paid_amount,
            status: input.status.clone(),
            special_requests: input.special_requests.clone(),
            notes: input.notes.clone(),
            metadata: input.metadata.clone(),
            created_at: now,
            updated_at: now,
        };
        t.bookings.push(booking.clone());
        Ok(booking)
    }
}
