//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod catalog_repo;
pub mod customer_repo;
pub mod event_repo;
pub mod experience_repo;
pub mod location_repo;
pub mod product_repo;
pub mod reset_repo;
pub mod sale_repo;
pub mod wine_repo;

pub use booking_repo::BookingRepo;
pub use catalog_repo::CatalogRepo;
pub use customer_repo::CustomerRepo;
pub use event_repo::EventRepo;
pub use experience_repo::ExperienceRepo;
pub use location_repo::LocationRepo;
pub use product_repo::ProductRepo;
pub use reset_repo::ResetRepo;
pub use sale_repo::SaleRepo;
pub use wine_repo::WineRepo;
