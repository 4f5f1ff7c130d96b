//! Persistence contracts consumed by the workflow.
//!
//! Implementations must report absence as `Ok(None)` and constraint
//! violations as [`StoreError::Conflict`]. Two constraints are load-bearing:
//!
//! - [`ReceptionStore::create`] must refuse a second in-progress reception
//!   for the same pickup point, atomically with the insert.
//! - [`ProductStore::add`] and [`ProductStore::delete_last_for_reception`]
//!   must refuse to touch a reception that is no longer in progress.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::listing::ListFilter;
use crate::pickup_point::PickupPoint;
use crate::product::Product;
use crate::reception::{Reception, ReceptionStatus};
use crate::types::EntityId;
use crate::user::User;

/// Constraint name reported when a second reception would be in progress.
pub const UQ_ONE_IN_PROGRESS: &str = "uq_receptions_one_in_progress";

/// Constraint name reported when an email is already registered.
pub const UQ_USER_EMAIL: &str = "uq_users_email";

/// Constraint name reported when a product write hits a closed reception.
pub const CK_RECEPTION_IN_PROGRESS: &str = "ck_products_reception_in_progress";

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn create(&self, user: &User) -> Result<(), StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait PickupPointDirectory: Send + Sync {
    async fn create(&self, point: &PickupPoint) -> Result<(), StoreError>;

    /// One page of pickup points matching the filter, in registration order.
    async fn list_with_filter(&self, filter: &ListFilter) -> Result<Vec<PickupPoint>, StoreError>;

    async fn find_by_id(&self, id: EntityId) -> Result<Option<PickupPoint>, StoreError>;
}

#[async_trait]
pub trait ReceptionStore: Send + Sync {
    async fn create(&self, reception: &Reception) -> Result<(), StoreError>;

    /// Most recently opened reception of the pickup point with `status`.
    async fn get_last_for_pickup_point(
        &self,
        pickup_point_id: EntityId,
        status: ReceptionStatus,
    ) -> Result<Option<Reception>, StoreError>;

    /// Close an in-progress reception. `None` when it is missing or was
    /// already closed.
    async fn close(&self, id: EntityId) -> Result<Option<Reception>, StoreError>;

    /// All receptions of the pickup point, oldest first.
    async fn list_for_pickup_point(
        &self,
        pickup_point_id: EntityId,
    ) -> Result<Vec<Reception>, StoreError>;
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn add(&self, product: &Product) -> Result<(), StoreError>;

    /// Remove and return the most recently appended product, `None` when
    /// the reception has none.
    async fn delete_last_for_reception(
        &self,
        reception_id: EntityId,
    ) -> Result<Option<Product>, StoreError>;

    /// Products of the reception in append order.
    async fn list_for_reception(&self, reception_id: EntityId) -> Result<Vec<Product>, StoreError>;
}
