//! Destination vocabularies and their mapping from Airtable values.
//!
//! The Airtable base uses free-text Spanish values ("Privada",
//! "Cancelado", "Reserva realizada") where the booking schema stores a
//! small fixed set of upper-case codes. Each enum below carries its
//! database spelling plus a `from_source` lookup; values the lookup does
//! not know fall through to a default instead of failing the record.

use serde::{Deserialize, Serialize};

use crate::types::Pesos;

// ---------------------------------------------------------------------------
// Experience type
// ---------------------------------------------------------------------------

/// Kind of tasting experience offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceType {
    WineTasting,
    PrivateTasting,
    GroupTasting,
}

impl ExperienceType {
    /// Return the type name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WineTasting => "WINE_TASTING",
            Self::PrivateTasting => "PRIVATE_TASTING",
            Self::GroupTasting => "GROUP_TASTING",
        }
    }

    /// Parse a stored type name. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "WINE_TASTING" => Some(Self::WineTasting),
            "PRIVATE_TASTING" => Some(Self::PrivateTasting),
            "GROUP_TASTING" => Some(Self::GroupTasting),
            _ => None,
        }
    }

    /// Map the Airtable `Modalidad` column.
    ///
    /// `Privada` is a private tasting, any other modality is a group
    /// tasting, and a blank modality is a plain wine tasting.
    pub fn from_source(modalidad: Option<&str>) -> Self {
        match modalidad.map(str::trim) {
            Some(m) if m.eq_ignore_ascii_case("privada") => Self::PrivateTasting,
            Some(m) if !m.is_empty() => Self::GroupTasting,
            _ => Self::WineTasting,
        }
    }

    /// All valid type values.
    pub const ALL: &'static [&'static str] = &["WINE_TASTING", "PRIVATE_TASTING", "GROUP_TASTING"];
}

impl std::fmt::Display for ExperienceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Event status
// ---------------------------------------------------------------------------

/// Lifecycle status of a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "SCHEDULED" => Some(Self::Scheduled),
            "COMPLETED" => Some(Self::Completed),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Map the Airtable event state (`Estado Evento` / `Estado`).
    pub fn from_source(estado: Option<&str>) -> Self {
        match estado.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("cancelado") => Self::Cancelled,
            Some("pasado") => Self::Completed,
            _ => Self::Scheduled,
        }
    }

    pub const ALL: &'static [&'static str] = &["SCHEDULED", "COMPLETED", "CANCELLED"];
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Booking status
// ---------------------------------------------------------------------------

/// Payment/lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    PartiallyPaid,
    Paid,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::PartiallyPaid => "PARTIALLY_PAID",
            Self::Paid => "PAID",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "PARTIALLY_PAID" => Some(Self::PartiallyPaid),
            "PAID" => Some(Self::Paid),
            "COMPLETED" => Some(Self::Completed),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Derive a booking status from the Airtable `Estado` text and the
    /// amounts paid so far.
    ///
    /// The state text wins ("…realizada" is completed, "…abandonada" is
    /// cancelled); otherwise the payment ratio decides.
    pub fn from_source(estado: Option<&str>, total: Pesos, paid: Pesos) -> Self {
        let estado = estado.map(str::to_lowercase).unwrap_or_default();
        if estado.contains("realizada") {
            Self::Completed
        } else if estado.contains("abandonada") {
            Self::Cancelled
        } else if total > 0 && paid >= total {
            Self::Paid
        } else if paid > 0 {
            Self::PartiallyPaid
        } else {
            Self::Pending
        }
    }

    pub const ALL: &'static [&'static str] =
        &["PENDING", "PARTIALLY_PAID", "PAID", "COMPLETED", "CANCELLED"];
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Sale status / customer role
// ---------------------------------------------------------------------------

/// Status of a wine sale. Imported sales are always completed.
pub const SALE_STATUS_COMPLETED: &str = "COMPLETED";

/// Role assigned to every imported contact.
pub const CUSTOMER_ROLE: &str = "CUSTOMER";
