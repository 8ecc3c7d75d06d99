//! Field mapping from Airtable records to destination DTOs.
//!
//! Every function here is pure: it reads one [`SourceRecord`] plus any
//! already-resolved destination ids and returns either a ready-to-write
//! DTO or the [`SkipReason`] the record cannot be imported for. Absent or
//! malformed optional fields fall back to the defaults below without a
//! warning; only fields a record cannot exist without produce a skip.

use chrono::Duration;
use serde_json::{Map, Value};

use laberinto_core::airtable::SourceRecord;
use laberinto_core::slug::slugify;
use laberinto_core::types::{DbId, Pesos, Timestamp};
use laberinto_core::vocabulary::{
    BookingStatus, EventStatus, ExperienceType, CUSTOMER_ROLE, SALE_STATUS_COMPLETED,
};
use laberinto_db::models::booking::CreateBooking;
use laberinto_db::models::customer::UpsertCustomer;
use laberinto_db::models::event::CreateEvent;
use laberinto_db::models::experience::{Experience, UpsertExperience};
use laberinto_db::models::location::UpsertLocation;
use laberinto_db::models::product::CreateProduct;
use laberinto_db::models::sale::{CreateSale, CreateSaleItem};
use laberinto_db::models::wine::{UpsertWine, Wine};

use crate::columns;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Domain of synthesized customer emails.
pub const PLACEHOLDER_EMAIL_DOMAIN: &str = "laberinto-temp.com";

pub const DEFAULT_PRODUCER: &str = "Laberinto";
pub const DEFAULT_COUNTRY: &str = "Chile";
pub const DEFAULT_LOCATION_TYPE: &str = "Unknown";

/// Region every imported wine is filed under.
pub const DEFAULT_REGION: (&str, &str) = ("Chile - General", "Chile");
/// Category every imported wine is filed under, as `(name, slug)`.
pub const DEFAULT_CATEGORY: (&str, &str) = ("Vino Tinto", "vino-tinto");

pub const DEFAULT_EXPERIENCE_DURATION_MINUTES: i32 = 120;
pub const DEFAULT_MAX_PARTICIPANTS: i32 = 15;

pub const DEFAULT_GROUP_SIZE: i32 = 2;
pub const DEFAULT_ADULTS: i32 = 2;

pub const WINE_PRODUCT_CATEGORY: &str = "wine";

/// Prefix of the `source_id` given to the built-in extra products.
pub const STANDARD_PRODUCT_PREFIX: &str = "standard";

/// Extra products offered alongside the wine list:
/// `(name, description, price, category)`.
pub const STANDARD_PRODUCTS: &[(&str, &str, Pesos, &str)] = &[
    (
        "Almuerzo Premium",
        "Almuerzo de 3 tiempos maridado con nuestros vinos",
        35_000,
        "food",
    ),
    (
        "Tabla de Quesos",
        "Selección de quesos artesanales chilenos",
        15_000,
        "food",
    ),
    (
        "Transporte desde Santiago",
        "Transporte ida y vuelta desde Santiago",
        25_000,
        "transport",
    ),
    (
        "Humitas y Empanaditas",
        "Comida local tradicional chilena",
        12_000,
        "food",
    ),
];

/// Airtable fields kept in `experiences.metadata`: `(key, column)`.
pub const EXPERIENCE_METADATA: &[(&str, &str)] = &[
    ("modality", columns::experience::MODALITY),
    ("includes", columns::experience::INCLUDES),
    ("restrictions", columns::experience::RESTRICTIONS),
];

/// Airtable fields kept in `events.metadata`.
pub const EVENT_METADATA: &[(&str, &str)] = &[
    ("experience_name", columns::event::EXPERIENCE_NAME),
    ("activities", columns::event::ACTIVITIES),
    ("badge", columns::event::BADGE),
    ("internal_notes", columns::event::INTERNAL_NOTES),
];

/// Airtable fields kept in `bookings.metadata`.
pub const BOOKING_METADATA: &[(&str, &str)] = &[
    ("reservation_id", columns::booking::RESERVATION_ID),
    ("progress", columns::booking::PROGRESS),
    ("discounts", columns::booking::DISCOUNTS),
    ("deposit", columns::booking::DEPOSIT),
];

// ---------------------------------------------------------------------------
// Skip reasons
// ---------------------------------------------------------------------------

/// Why a source record was not imported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid value in '{field}': {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("'{field}' references '{reference}', which was not imported")]
    Unresolved {
        field: &'static str,
        reference: String,
    },

    #[error("no {0} available to link")]
    NothingToLink(&'static str),

    #[error("write rejected: {0}")]
    Write(String),
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn required_text(record: &SourceRecord, field: &'static str) -> Result<String, SkipReason> {
    record.text(field).ok_or(SkipReason::MissingField(field))
}

fn first_text(record: &SourceRecord, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| record.text(field))
}

/// First non-zero amount among `fields`.
fn first_pesos(record: &SourceRecord, fields: &[&str]) -> Option<Pesos> {
    fields
        .iter()
        .find_map(|field| record.pesos(field).filter(|p| *p != 0))
}

/// Positive integer field, or `default` when absent, zero or out of range.
fn positive_int(record: &SourceRecord, field: &str, default: i32) -> i32 {
    record
        .integer(field)
        .and_then(|n| i32::try_from(n).ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

/// Non-negative count field, defaulting to zero.
fn count_int(record: &SourceRecord, field: &str) -> i32 {
    record
        .integer(field)
        .and_then(|n| i32::try_from(n).ok())
        .filter(|n| *n >= 0)
        .unwrap_or(0)
}

/// Copy the listed fields verbatim into a JSON object.
///
/// Blank values are left out; `None` when nothing remains.
fn metadata(record: &SourceRecord, fields: &[(&str, &str)]) -> Option<Value> {
    let map: Map<String, Value> = fields
        .iter()
        .filter_map(|(key, field)| {
            record
                .raw(field)
                .filter(|value| !is_blank(value))
                .map(|value| (key.to_string(), value.clone()))
        })
        .collect();
    (!map.is_empty()).then_some(Value::Object(map))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn slug_for(name: &str, field: &'static str) -> Result<String, SkipReason> {
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(SkipReason::InvalidField {
            field,
            message: format!("'{name}' has no characters usable in a slug"),
        });
    }
    Ok(slug)
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

/// Email synthesized for a contact exported without one.
///
/// Airtable record ids are unique and case-sensitive, so the id is kept
/// verbatim and placeholders never collide.
pub fn placeholder_email(source_id: &str) -> String {
    format!("{source_id}@{PLACEHOLDER_EMAIL_DOMAIN}")
}

/// Normalized form of an email address used as the customer key.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn map_customer(record: &SourceRecord) -> UpsertCustomer {
    let email = record
        .text(columns::customer::EMAIL)
        .map(|e| normalize_email(&e))
        .unwrap_or_else(|| placeholder_email(&record.id));

    let first_name = record.text(columns::customer::FIRST_NAME);
    let last_name = record.text(columns::customer::LAST_NAME);

    let joined = [first_name.as_deref(), last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    let name = record
        .text(columns::customer::FULL_NAME)
        .or_else(|| (!joined.is_empty()).then_some(joined))
        .unwrap_or_else(|| email.clone());

    UpsertCustomer {
        source_id: Some(record.id.clone()),
        email,
        name,
        first_name,
        last_name,
        phone: record.text(columns::customer::PHONE),
        rut: record.text(columns::customer::RUT),
        role: CUSTOMER_ROLE.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Wines
// ---------------------------------------------------------------------------

pub fn map_wine(
    record: &SourceRecord,
    category_id: DbId,
    region_id: DbId,
) -> Result<UpsertWine, SkipReason> {
    let name = required_text(record, columns::wine::NAME)?;
    let slug = slug_for(&name, columns::wine::NAME)?;

    Ok(UpsertWine {
        source_id: Some(record.id.clone()),
        code: record
            .text(columns::wine::CODE)
            .unwrap_or_else(|| record.id.clone()),
        name,
        slug,
        category_id,
        region_id,
        producer: record
            .text(columns::wine::PRODUCER)
            .unwrap_or_else(|| DEFAULT_PRODUCER.to_string()),
        base_price: record.pesos(columns::wine::PRICE).unwrap_or(0),
        description: first_text(record, columns::wine::DESCRIPTION),
        tasting_notes: record.text(columns::wine::TASTING_NOTES),
        pairing_notes: record.text(columns::wine::PAIRING_NOTES),
        barcode: record.text(columns::wine::BARCODE),
    })
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

pub fn map_location(record: &SourceRecord) -> Result<UpsertLocation, SkipReason> {
    Ok(UpsertLocation {
        source_id: Some(record.id.clone()),
        name: required_text(record, columns::location::NAME)?,
        location_type: record
            .text(columns::location::TYPE)
            .unwrap_or_else(|| DEFAULT_LOCATION_TYPE.to_string()),
        address: record.text(columns::location::ADDRESS),
        city: record.text(columns::location::CITY),
        country: record
            .text(columns::location::COUNTRY)
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
    })
}

/// Location experiences are attached to when the export has none.
pub fn default_location() -> UpsertLocation {
    UpsertLocation {
        source_id: None,
        name: "Laberinto Vineyard".to_string(),
        location_type: "VINEYARD".to_string(),
        address: Some("Valle de Uco, Mendoza".to_string()),
        city: Some("Tunuyán".to_string()),
        country: "Argentina".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Experiences
// ---------------------------------------------------------------------------

pub fn map_experience(
    record: &SourceRecord,
    location_id: DbId,
) -> Result<UpsertExperience, SkipReason> {
    let name = required_text(record, columns::experience::NAME)?;
    let slug = slug_for(&name, columns::experience::NAME)?;
    let experience_type =
        ExperienceType::from_source(record.text(columns::experience::MODALITY).as_deref());

    Ok(UpsertExperience {
        source_id: Some(record.id.clone()),
        name,
        slug,
        experience_type: experience_type.as_str().to_string(),
        description: first_text(record, columns::experience::DESCRIPTION),
        duration_minutes: positive_int(
            record,
            columns::experience::DURATION,
            DEFAULT_EXPERIENCE_DURATION_MINUTES,
        ),
        max_participants: positive_int(
            record,
            columns::experience::MAX_PARTICIPANTS,
            DEFAULT_MAX_PARTICIPANTS,
        ),
        base_price: first_pesos(record, columns::experience::PRICE).unwrap_or(0),
        location_id,
        metadata: metadata(record, EXPERIENCE_METADATA),
    })
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Map an event onto the experience it was resolved to.
///
/// The end time defaults to start plus the experience duration when it is
/// absent, unparseable, or not after the start.
pub fn map_event(record: &SourceRecord, experience: &Experience) -> Result<CreateEvent, SkipReason> {
    let title = required_text(record, columns::event::TITLE)?;
    let start_time = record
        .timestamp(columns::event::START)
        .ok_or(SkipReason::MissingField(columns::event::START))?
        .map_err(|err| SkipReason::InvalidField {
            field: columns::event::START,
            message: err.to_string(),
        })?;

    let end_time = columns::event::END
        .iter()
        .find_map(|field| record.timestamp(field).and_then(Result::ok))
        .filter(|end| *end > start_time)
        .unwrap_or_else(|| start_time + Duration::minutes(i64::from(experience.duration_minutes)));

    let status = EventStatus::from_source(first_text(record, columns::event::STATUS).as_deref());

    Ok(CreateEvent {
        source_id: Some(record.id.clone()),
        title,
        experience_id: experience.id,
        location_id: experience.location_id,
        start_time,
        end_time,
        max_capacity: positive_int(record, columns::event::ATTENDEES, experience.max_participants),
        status: status.as_str().to_string(),
        price_override: record.pesos(columns::event::PRICE),
        metadata: metadata(record, EVENT_METADATA),
    })
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

pub fn map_product(record: &SourceRecord) -> Result<CreateProduct, SkipReason> {
    let label = required_text(record, columns::product::NAME)?;
    let price = record
        .pesos(columns::product::WINE_PRICE)
        .ok_or(SkipReason::MissingField(columns::product::WINE_PRICE))?;

    Ok(CreateProduct {
        source_id: Some(record.id.clone()),
        name: record
            .text(columns::product::WINE_NAME)
            .unwrap_or_else(|| label.clone()),
        description: Some(format!("Wine product: {label}")),
        price,
        category: WINE_PRODUCT_CATEGORY.to_string(),
    })
}

/// The built-in extras, in catalog order.
pub fn standard_products() -> Vec<CreateProduct> {
    STANDARD_PRODUCTS
        .iter()
        .map(|(name, description, price, category)| CreateProduct {
            source_id: Some(format!("{STANDARD_PRODUCT_PREFIX}-{}", slugify(name))),
            name: name.to_string(),
            description: Some(description.to_string()),
            price: *price,
            category: category.to_string(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Sales
// ---------------------------------------------------------------------------

/// Map a sale for an already-resolved customer.
///
/// `now` is used as the sale date when neither `Fecha de Venta` nor the
/// record's creation time can be read.
pub fn map_sale(record: &SourceRecord, customer_id: DbId, now: Timestamp) -> CreateSale {
    let sale_date = record
        .timestamp(columns::sale::DATE)
        .and_then(Result::ok)
        .or_else(|| record.created_at())
        .unwrap_or(now);

    CreateSale {
        source_id: Some(record.id.clone()),
        customer_id,
        total_amount: record.pesos(columns::sale::TOTAL).unwrap_or(0),
        sale_date,
        status: SALE_STATUS_COMPLETED.to_string(),
        notes: record.text(columns::sale::NUMBER),
    }
}

/// One bottle of `wine` on sale `sale_id`, priced at the wine's base price.
pub fn map_sale_item(sale_source_id: &str, sale_id: DbId, wine: &Wine) -> CreateSaleItem {
    let wine_ref = wine.source_id.as_deref().unwrap_or(&wine.code);
    CreateSaleItem {
        source_id: Some(format!("{sale_source_id}-{wine_ref}")),
        sale_id,
        wine_id: wine.id,
        quantity: 1,
        unit_price: wine.base_price,
        total_price: wine.base_price,
    }
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

/// Map a booking for a resolved organizer and event.
pub fn map_booking(record: &SourceRecord, organizer_id: DbId, event_id: DbId) -> CreateBooking {
    let total = first_pesos(record, columns::booking::TOTAL).unwrap_or(0);
    let paid = record.pesos(columns::booking::PAID).unwrap_or(0);
    let status = BookingStatus::from_source(
        record.text(columns::booking::STATUS).as_deref(),
        total,
        paid,
    );

    CreateBooking {
        source_id: Some(record.id.clone()),
        organizer_id,
        event_id,
        total_participants: positive_int(record, columns::booking::GROUP_SIZE, DEFAULT_GROUP_SIZE),
        adults_count: positive_int(record, columns::booking::DRINKERS, DEFAULT_ADULTS),
        children_count: count_int(record, columns::booking::CHILDREN),
        non_drinkers_count: count_int(record, columns::booking::NON_DRINKERS),
        subtotal: total,
        total_amount: total,
        paid_amount: paid,
        status: status.as_str().to_string(),
        special_requests: record.text(columns::booking::SPECIAL_REQUESTS),
        notes: record.text(columns::booking::NOTES),
        metadata: metadata(record, BOOKING_METADATA),
    }
}
