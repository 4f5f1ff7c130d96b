//! Row model for the `receptions` table.

use pvz_core::error::StoreError;
use pvz_core::reception::{Reception, ReceptionStatus};
use pvz_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

use crate::error::corrupt_row;

#[derive(Debug, Clone, FromRow)]
pub struct ReceptionRow {
    pub id: EntityId,
    pub date_time: Timestamp,
    pub pvz_id: EntityId,
    pub status: String,
}

impl TryFrom<ReceptionRow> for Reception {
    type Error = StoreError;

    fn try_from(row: ReceptionRow) -> Result<Self, Self::Error> {
        let status: ReceptionStatus = row
            .status
            .parse()
            .map_err(|e| corrupt_row("receptions", e))?;
        Ok(Reception {
            id: row.id,
            date_time: row.date_time,
            pvz_id: row.pvz_id,
            status,
        })
    }
}
