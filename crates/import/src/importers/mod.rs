//! One import step per destination entity.
//!
//! Each step takes the records of its export table and walks them one at a
//! time: map, resolve links, write. A record that cannot be imported is
//! counted in the step's [`EntitySummary`] and logged; only store failures
//! that are not tied to the record being written end the step with an
//! error.

use crate::error::{ImportResult, StoreError};
use crate::mapper::SkipReason;

pub mod bookings;
pub mod customers;
pub mod events;
pub mod experiences;
pub mod locations;
pub mod products;
pub mod sales;
pub mod wines;

use crate::columns::tables;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Destination entity imported by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Customers,
    Wines,
    Locations,
    Experiences,
    Events,
    Products,
    Sales,
    Bookings,
}

impl Entity {
    /// Import order. Every entity only links to entities before it.
    pub const ORDER: [Entity; 8] = [
        Entity::Customers,
        Entity::Wines,
        Entity::Locations,
        Entity::Experiences,
        Entity::Events,
        Entity::Products,
        Entity::Sales,
        Entity::Bookings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Customers => "Customers",
            Self::Wines => "Wines",
            Self::Locations => "Locations",
            Self::Experiences => "Experiences",
            Self::Events => "Events",
            Self::Products => "Products",
            Self::Sales => "Sales",
            Self::Bookings => "Bookings",
        }
    }

    /// Airtable table the entity is exported from.
    pub fn source_table(&self) -> &'static str {
        match self {
            Self::Customers => tables::CUSTOMERS,
            Self::Wines => tables::WINES,
            Self::Locations => tables::LOCATIONS,
            Self::Experiences => tables::EXPERIENCES,
            Self::Events => tables::EVENTS,
            Self::Products => tables::PRODUCTS,
            Self::Sales => tables::SALES,
            Self::Bookings => tables::BOOKINGS,
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Write outcome
// ---------------------------------------------------------------------------

/// Split a store write result into a per-record outcome or a fatal error.
///
/// Constraint violations become a [`SkipReason::Write`] for the record;
/// anything else aborts the step.
pub(crate) fn per_record<T>(result: Result<T, StoreError>) -> ImportResult<Result<T, SkipReason>> {
    match result {
        Ok(row) => Ok(Ok(row)),
        Err(err) if err.is_record_level() => Ok(Err(SkipReason::Write(err.to_string()))),
        Err(err) => Err(err.into()),
    }
}
