//! Row model for the `pvz` table.

use pvz_core::error::StoreError;
use pvz_core::pickup_point::{City, PickupPoint};
use pvz_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

use crate::error::corrupt_row;

#[derive(Debug, Clone, FromRow)]
pub struct PvzRow {
    pub id: EntityId,
    pub registration_date: Timestamp,
    pub city: String,
}

impl TryFrom<PvzRow> for PickupPoint {
    type Error = StoreError;

    fn try_from(row: PvzRow) -> Result<Self, Self::Error> {
        let city: City = row.city.parse().map_err(|e| corrupt_row("pvz", e))?;
        Ok(PickupPoint {
            id: row.id,
            registration_date: row.registration_date,
            city,
        })
    }
}
