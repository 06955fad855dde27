//! Reservation domain rules: the booking platform enum and the pure
//! validation functions applied before every create/update.
//!
//! Handlers call these before touching the store; a failed rule means the
//! candidate write is rejected and the store is never touched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Day;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a guest name in characters.
pub const MAX_GUEST_NAME_LENGTH: usize = 100;

/// Upper bound on adults and children per reservation. Values above this are
/// nonsense input, not a real booking.
pub const MAX_PARTY_SIZE: i32 = 50;

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// The booking channel a reservation originated from.
///
/// Serialized lowercase (`"airbnb"` / `"booking"`) both over the wire and in
/// the `platform` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum Platform {
    Airbnb,
    Booking,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Airbnb => "airbnb",
            Platform::Booking => "booking",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "airbnb" => Ok(Platform::Airbnb),
            "booking" => Ok(Platform::Booking),
            other => Err(format!(
                "Invalid platform '{other}'. Must be one of: airbnb, booking"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a guest name: non-empty after trimming, within the length limit.
pub fn validate_guest_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Guest name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_GUEST_NAME_LENGTH {
        return Err(format!(
            "Guest name exceeds maximum length of {MAX_GUEST_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate the stay interval: check-out must be strictly after check-in.
pub fn validate_stay_dates(check_in: Day, check_out: Day) -> Result<(), String> {
    if check_out <= check_in {
        return Err("Check-out date must be after check-in date".to_string());
    }
    Ok(())
}

/// Validate the party size: at least one adult, children non-negative, both
/// within the sanity bound.
pub fn validate_party(adults: i32, children: i32) -> Result<(), String> {
    if adults < 1 {
        return Err("At least one adult is required".to_string());
    }
    if children < 0 {
        return Err("Children count cannot be negative".to_string());
    }
    if adults > MAX_PARTY_SIZE || children > MAX_PARTY_SIZE {
        return Err(format!(
            "Party size exceeds the maximum of {MAX_PARTY_SIZE} per reservation"
        ));
    }
    Ok(())
}
