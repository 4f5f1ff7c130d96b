use async_trait::async_trait;
use pvz_core::error::StoreError;
use pvz_core::listing::ListFilter;
use pvz_core::pickup_point::PickupPoint;
use pvz_core::product::Product;
use pvz_core::reception::{Reception, ReceptionStatus};
use pvz_core::store::{
    PickupPointDirectory, ProductStore, ReceptionStore, UserDirectory, CK_RECEPTION_IN_PROGRESS,
};
use pvz_core::types::EntityId;
use pvz_core::user::User;

use crate::error::classify;
use crate::repositories::{ProductRepo, PvzRepo, ReceptionRepo, TailDelete, UserRepo};
use crate::DbPool;

/// Adapter exposing the repositories through the core store contracts.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn convert_all<R, T>(rows: Vec<R>) -> Result<Vec<T>, StoreError>
where
    T: TryFrom<R, Error = StoreError>,
{
    rows.into_iter().map(T::try_from).collect()
}

#[async_trait]
impl UserDirectory for PgStore {
    async fn create(&self, user: &User) -> Result<(), StoreError> {
        UserRepo::create(&self.pool, user).await.map_err(classify)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        UserRepo::find_by_email(&self.pool, email)
            .await
            .map_err(classify)?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, StoreError> {
        UserRepo::find_by_id(&self.pool, id)
            .await
            .map_err(classify)?
            .map(User::try_from)
            .transpose()
    }
}

#[async_trait]
impl PickupPointDirectory for PgStore {
    async fn create(&self, point: &PickupPoint) -> Result<(), StoreError> {
        PvzRepo::create(&self.pool, point).await.map_err(classify)
    }

    async fn list_with_filter(&self, filter: &ListFilter) -> Result<Vec<PickupPoint>, StoreError> {
        let rows = PvzRepo::list_with_filter(&self.pool, filter)
            .await
            .map_err(classify)?;
        convert_all(rows)
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<PickupPoint>, StoreError> {
        PvzRepo::find_by_id(&self.pool, id)
            .await
            .map_err(classify)?
            .map(PickupPoint::try_from)
            .transpose()
    }
}

#[async_trait]
impl ReceptionStore for PgStore {
    async fn create(&self, reception: &Reception) -> Result<(), StoreError> {
        ReceptionRepo::create(&self.pool, reception)
            .await
            .map_err(classify)
    }

    async fn get_last_for_pickup_point(
        &self,
        pickup_point_id: EntityId,
        status: ReceptionStatus,
    ) -> Result<Option<Reception>, StoreError> {
        ReceptionRepo::get_last_for_pvz(&self.pool, pickup_point_id, status)
            .await
            .map_err(classify)?
            .map(Reception::try_from)
            .transpose()
    }

    async fn close(&self, id: EntityId) -> Result<Option<Reception>, StoreError> {
        ReceptionRepo::close(&self.pool, id)
            .await
            .map_err(classify)?
            .map(Reception::try_from)
            .transpose()
    }

    async fn list_for_pickup_point(
        &self,
        pickup_point_id: EntityId,
    ) -> Result<Vec<Reception>, StoreError> {
        let rows = ReceptionRepo::list_for_pvz(&self.pool, pickup_point_id)
            .await
            .map_err(classify)?;
        convert_all(rows)
    }
}

#[async_trait]
impl ProductStore for PgStore {
    async fn add(&self, product: &Product) -> Result<(), StoreError> {
        let written = ProductRepo::add(&self.pool, product)
            .await
            .map_err(classify)?;
        if written {
            Ok(())
        } else {
            Err(StoreError::Conflict {
                constraint: CK_RECEPTION_IN_PROGRESS.to_string(),
            })
        }
    }

    async fn delete_last_for_reception(
        &self,
        reception_id: EntityId,
    ) -> Result<Option<Product>, StoreError> {
        match ProductRepo::delete_last_for_reception(&self.pool, reception_id)
            .await
            .map_err(classify)?
        {
            TailDelete::Removed(row) => Product::try_from(row).map(Some),
            TailDelete::Empty => Ok(None),
            TailDelete::ReceptionClosed => Err(StoreError::Conflict {
                constraint: CK_RECEPTION_IN_PROGRESS.to_string(),
            }),
        }
    }

    async fn list_for_reception(&self, reception_id: EntityId) -> Result<Vec<Product>, StoreError> {
        let rows = ProductRepo::list_for_reception(&self.pool, reception_id)
            .await
            .map_err(classify)?;
        convert_all(rows)
    }
}
