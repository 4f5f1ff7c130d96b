//! Row model for the `products` table.

use pvz_core::error::StoreError;
use pvz_core::product::{Product, ProductType};
use pvz_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

use crate::error::corrupt_row;

/// Row from `products`. `seq` orders the append sequence of a reception.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: EntityId,
    pub seq: i64,
    pub date_time: Timestamp,
    #[sqlx(rename = "type")]
    pub product_type: String,
    pub reception_id: EntityId,
}

impl TryFrom<ProductRow> for Product {
    type Error = StoreError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let product_type: ProductType = row
            .product_type
            .parse()
            .map_err(|e| corrupt_row("products", e))?;
        Ok(Product {
            id: row.id,
            date_time: row.date_time,
            product_type,
            reception_id: row.reception_id,
        })
    }
}
