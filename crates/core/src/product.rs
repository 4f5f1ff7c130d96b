//! Products and the LIFO intake ledger of an in-progress reception.
//!
//! Products are appended to the tail of the active reception's sequence and
//! only the tail may be removed. The sequence itself lives in the store; the
//! functions here decide whether an append or a delete is legal and build
//! the entity to write.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::reception::{Reception, ReceptionState};
use crate::types::{new_id, now, EntityId, Timestamp};

pub const TYPE_ELECTRONICS: &str = "электроника";
pub const TYPE_CLOTHES: &str = "одежда";
pub const TYPE_SHOES: &str = "обувь";

/// All accepted product types.
pub const VALID_PRODUCT_TYPES: &[&str] = &[TYPE_ELECTRONICS, TYPE_CLOTHES, TYPE_SHOES];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "электроника")]
    Electronics,
    #[serde(rename = "одежда")]
    Clothes,
    #[serde(rename = "обувь")]
    Shoes,
}

impl ProductType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Electronics => TYPE_ELECTRONICS,
            ProductType::Clothes => TYPE_CLOTHES,
            ProductType::Shoes => TYPE_SHOES,
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TYPE_ELECTRONICS => Ok(ProductType::Electronics),
            TYPE_CLOTHES => Ok(ProductType::Clothes),
            TYPE_SHOES => Ok(ProductType::Shoes),
            other => Err(CoreError::Validation(format!(
                "invalid product type '{other}'. Must be one of: {}",
                VALID_PRODUCT_TYPES.join(", ")
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub date_time: Timestamp,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub reception_id: EntityId,
}

/// Build the next product for the active reception of `pickup_point_id`.
///
/// The reception check comes before type validation, so a bad type against
/// an idle point reports the missing reception.
pub fn append(
    state: &ReceptionState,
    pickup_point_id: EntityId,
    product_type: &str,
) -> Result<Product, CoreError> {
    let reception = state.active(pickup_point_id)?;
    let product_type: ProductType = product_type.parse()?;
    Ok(Product {
        id: new_id(),
        date_time: now(),
        product_type,
        reception_id: reception.id,
    })
}

/// The reception whose tail product a delete-last should remove.
pub fn delete_target(
    state: &ReceptionState,
    pickup_point_id: EntityId,
) -> Result<&Reception, CoreError> {
    state.active(pickup_point_id)
}

/// Turn the store's answer to "remove the tail" into a result.
pub fn deleted_or_empty(
    removed: Option<Product>,
    reception_id: EntityId,
) -> Result<Product, CoreError> {
    removed.ok_or_else(|| {
        CoreError::EmptyState(format!("nothing to delete in reception {reception_id}"))
    })
}
