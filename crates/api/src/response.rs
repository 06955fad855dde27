//! Shared response envelope for API handlers.
//!
//! Authenticated endpoints wrap their payload in `{ "data": ... }`. The one
//! exception is the export endpoint, whose bare-array shape is part of its
//! contract with external consumers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
