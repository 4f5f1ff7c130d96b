//! Repository for the `pvz` table.

use pvz_core::listing::ListFilter;
use pvz_core::pickup_point::PickupPoint;
use pvz_core::types::EntityId;
use sqlx::PgPool;

use crate::models::pvz::PvzRow;

const COLUMNS: &str = "id, registration_date, city";

pub struct PvzRepo;

impl PvzRepo {
    pub async fn create(pool: &PgPool, point: &PickupPoint) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO pvz (id, registration_date, city) VALUES ($1, $2, $3)")
            .bind(point.id)
            .bind(point.registration_date)
            .bind(point.city.as_str())
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn find_by_id(pool: &PgPool, id: EntityId) -> Result<Option<PvzRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pvz WHERE id = $1");
        sqlx::query_as::<_, PvzRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of pickup points in registration order.
    ///
    /// With no date bounds every point is eligible; otherwise a point needs
    /// at least one reception opened inside the (inclusive) window. A
    /// missing bound leaves that side open.
    pub async fn list_with_filter(
        pool: &PgPool,
        filter: &ListFilter,
    ) -> Result<Vec<PvzRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pvz p
             WHERE ($1::timestamptz IS NULL AND $2::timestamptz IS NULL)
                OR EXISTS (
                    SELECT 1 FROM receptions r
                    WHERE r.pvz_id = p.id
                      AND ($1::timestamptz IS NULL OR r.date_time >= $1)
                      AND ($2::timestamptz IS NULL OR r.date_time <= $2)
                )
             ORDER BY p.registration_date, p.seq
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, PvzRow>(&query)
            .bind(filter.range.start)
            .bind(filter.range.end)
            .bind(filter.pagination.limit())
            .bind(filter.pagination.offset())
            .fetch_all(pool)
            .await
    }
}
