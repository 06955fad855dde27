//! Reservation entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use jezera_core::reservation::Platform;
use jezera_core::types::{Day, DbId, Timestamp};

/// Full reservation row from the `reservations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub guest_name: String,
    pub platform: Platform,
    pub check_in: Day,
    pub check_out: Day,
    pub adults: i32,
    pub children: i32,
    pub special_requests: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new reservation. `id` and `created_at` are assigned by
/// the database.
#[derive(Debug, Deserialize)]
pub struct CreateReservation {
    pub guest_name: String,
    pub platform: Platform,
    pub check_in: Day,
    pub check_out: Day,
    pub adults: i32,
    #[serde(default)]
    pub children: i32,
    pub special_requests: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing reservation. Every mutable field is replaced;
/// `id` and `created_at` are never touched.
#[derive(Debug, Deserialize)]
pub struct UpdateReservation {
    pub guest_name: String,
    pub platform: Platform,
    pub check_in: Day,
    pub check_out: Day,
    pub adults: i32,
    #[serde(default)]
    pub children: i32,
    pub special_requests: Option<String>,
    pub notes: Option<String>,
}

/// Wire record for the machine-readable listing endpoint.
///
/// Exactly these nine keys, no more -- external consumers depend on the key
/// set, so `created_at` is deliberately absent. Dates serialize as
/// `YYYY-MM-DD` (chrono's `NaiveDate` ISO form).
#[derive(Debug, Serialize)]
pub struct ReservationExport {
    pub id: DbId,
    pub guest_name: String,
    pub platform: Platform,
    pub check_in: Day,
    pub check_out: Day,
    pub adults: i32,
    pub children: i32,
    pub special_requests: Option<String>,
    pub notes: Option<String>,
}

impl From<Reservation> for ReservationExport {
    fn from(r: Reservation) -> Self {
        ReservationExport {
            id: r.id,
            guest_name: r.guest_name,
            platform: r.platform,
            check_in: r.check_in,
            check_out: r.check_out,
            adults: r.adults,
            children: r.children,
            special_requests: r.special_requests,
            notes: r.notes,
        }
    }
}
