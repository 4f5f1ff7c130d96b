//! Repository for the `receptions` table.

use pvz_core::reception::{Reception, ReceptionStatus, STATUS_CLOSED, STATUS_IN_PROGRESS};
use pvz_core::types::EntityId;
use sqlx::PgPool;

use crate::models::reception::ReceptionRow;

const COLUMNS: &str = "id, date_time, pvz_id, status";

pub struct ReceptionRepo;

impl ReceptionRepo {
    /// Insert a reception. A second in-progress reception for the same
    /// pickup point violates `uq_receptions_one_in_progress`.
    pub async fn create(pool: &PgPool, reception: &Reception) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO receptions (id, date_time, pvz_id, status) VALUES ($1, $2, $3, $4)",
        )
        .bind(reception.id)
        .bind(reception.date_time)
        .bind(reception.pvz_id)
        .bind(reception.status.as_str())
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Most recently opened reception of a pickup point with the given status.
    pub async fn get_last_for_pvz(
        pool: &PgPool,
        pvz_id: EntityId,
        status: ReceptionStatus,
    ) -> Result<Option<ReceptionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM receptions
             WHERE pvz_id = $1 AND status = $2
             ORDER BY date_time DESC, seq DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, ReceptionRow>(&query)
            .bind(pvz_id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Flip an in-progress reception to closed.
    ///
    /// Returns `None` if the reception does not exist or is already closed.
    pub async fn close(pool: &PgPool, id: EntityId) -> Result<Option<ReceptionRow>, sqlx::Error> {
        let query = format!(
            "UPDATE receptions SET status = $2
             WHERE id = $1 AND status = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReceptionRow>(&query)
            .bind(id)
            .bind(STATUS_CLOSED)
            .bind(STATUS_IN_PROGRESS)
            .fetch_optional(pool)
            .await
    }

    /// All receptions of a pickup point, oldest first.
    pub async fn list_for_pvz(
        pool: &PgPool,
        pvz_id: EntityId,
    ) -> Result<Vec<ReceptionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM receptions WHERE pvz_id = $1 ORDER BY date_time, seq"
        );
        sqlx::query_as::<_, ReceptionRow>(&query)
            .bind(pvz_id)
            .fetch_all(pool)
            .await
    }
}
