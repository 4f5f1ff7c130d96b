//! Repository for the `products` table.
//!
//! Writes lock the owning reception row (`FOR UPDATE`) so that a product
//! can never be appended to, or removed from, a reception that is being
//! closed concurrently.

use pvz_core::product::Product;
use pvz_core::reception::STATUS_IN_PROGRESS;
use pvz_core::types::EntityId;
use sqlx::{PgConnection, PgPool};

use crate::models::product::ProductRow;

const COLUMNS: &str = "id, seq, date_time, type, reception_id";

/// Outcome of [`ProductRepo::delete_last_for_reception`].
#[derive(Debug)]
pub enum TailDelete {
    /// The reception is missing or no longer in progress.
    ReceptionClosed,
    /// The reception has no products.
    Empty,
    Removed(ProductRow),
}

pub struct ProductRepo;

impl ProductRepo {
    /// Append a product to an in-progress reception.
    ///
    /// Returns `false` without writing if the reception is not in progress.
    pub async fn add(pool: &PgPool, product: &Product) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !Self::lock_in_progress(&mut tx, product.reception_id).await? {
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO products (id, date_time, type, reception_id) VALUES ($1, $2, $3, $4)",
        )
        .bind(product.id)
        .bind(product.date_time)
        .bind(product.product_type.as_str())
        .bind(product.reception_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Remove the most recently appended product of an in-progress reception.
    pub async fn delete_last_for_reception(
        pool: &PgPool,
        reception_id: EntityId,
    ) -> Result<TailDelete, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !Self::lock_in_progress(&mut tx, reception_id).await? {
            return Ok(TailDelete::ReceptionClosed);
        }

        let query = format!(
            "DELETE FROM products
             WHERE id = (
                 SELECT id FROM products
                 WHERE reception_id = $1
                 ORDER BY seq DESC
                 LIMIT 1
             )
             RETURNING {COLUMNS}"
        );
        let removed = sqlx::query_as::<_, ProductRow>(&query)
            .bind(reception_id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(removed.map_or(TailDelete::Empty, TailDelete::Removed))
    }

    /// Products of a reception in append order.
    pub async fn list_for_reception(
        pool: &PgPool,
        reception_id: EntityId,
    ) -> Result<Vec<ProductRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE reception_id = $1 ORDER BY seq");
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(reception_id)
            .fetch_all(pool)
            .await
    }

    /// Lock the reception row and report whether it is still in progress.
    async fn lock_in_progress(
        conn: &mut PgConnection,
        reception_id: EntityId,
    ) -> Result<bool, sqlx::Error> {
        let status: Option<(String,)> =
            sqlx::query_as("SELECT status FROM receptions WHERE id = $1 FOR UPDATE")
                .bind(reception_id)
                .fetch_optional(&mut *conn)
                .await?;
        Ok(matches!(status, Some((s,)) if s == STATUS_IN_PROGRESS))
    }
}
