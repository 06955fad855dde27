//! Repository for the `reservations` table.

use sqlx::PgPool;

use jezera_core::types::DbId;

use crate::models::reservation::{CreateReservation, Reservation, UpdateReservation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, guest_name, platform, check_in, check_out, \
                       adults, children, special_requests, notes, created_at";

/// Provides CRUD operations for reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a new reservation, returning the created row with its assigned
    /// id and creation timestamp.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReservation,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations
                (guest_name, platform, check_in, check_out, adults, children,
                 special_requests, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(&input.guest_name)
            .bind(input.platform)
            .bind(input.check_in)
            .bind(input.check_out)
            .bind(input.adults)
            .bind(input.children)
            .bind(&input.special_requests)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a reservation by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all reservations ordered by check-in date ascending. Ties are
    /// broken by id, which is monotonic and therefore insertion order.
    pub async fn list_ordered(pool: &PgPool) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations ORDER BY check_in ASC, id ASC");
        sqlx::query_as::<_, Reservation>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace all mutable fields of an existing reservation. `created_at`
    /// is never updated.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReservation,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!(
            "UPDATE reservations SET
                guest_name = $2,
                platform = $3,
                check_in = $4,
                check_out = $5,
                adults = $6,
                children = $7,
                special_requests = $8,
                notes = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(&input.guest_name)
            .bind(input.platform)
            .bind(input.check_in)
            .bind(input.check_out)
            .bind(input.adults)
            .bind(input.children)
            .bind(&input.special_requests)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a reservation by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all reservations.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reservations")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
