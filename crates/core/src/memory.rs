//! In-process implementation of every store contract.
//!
//! All tables sit behind one `RwLock`, so each write sees and updates a
//! consistent snapshot. Used for tests and for running the server without
//! a database.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::listing::{select_page, ListFilter};
use crate::pickup_point::PickupPoint;
use crate::product::Product;
use crate::reception::{Reception, ReceptionStatus};
use crate::store::{
    PickupPointDirectory, ProductStore, ReceptionStore, UserDirectory, CK_RECEPTION_IN_PROGRESS,
    UQ_ONE_IN_PROGRESS, UQ_USER_EMAIL,
};
use crate::types::EntityId;
use crate::user::User;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    pickup_points: Vec<PickupPoint>,
    receptions: Vec<Reception>,
    products: Vec<Product>,
}

impl Tables {
    fn reception_in_progress(&self, reception_id: EntityId) -> bool {
        self.receptions
            .iter()
            .any(|r| r.id == reception_id && r.is_in_progress())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn conflict(constraint: &str) -> StoreError {
    StoreError::Conflict {
        constraint: constraint.to_string(),
    }
}

#[async_trait]
impl UserDirectory for MemoryStore {
    async fn create(&self, user: &User) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(conflict(UQ_USER_EMAIL));
        }
        tables.users.push(user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl PickupPointDirectory for MemoryStore {
    async fn create(&self, point: &PickupPoint) -> Result<(), StoreError> {
        self.tables.write().await.pickup_points.push(point.clone());
        Ok(())
    }

    async fn list_with_filter(&self, filter: &ListFilter) -> Result<Vec<PickupPoint>, StoreError> {
        let tables = self.tables.read().await;
        Ok(select_page(&tables.pickup_points, &tables.receptions, filter))
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<PickupPoint>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.pickup_points.iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl ReceptionStore for MemoryStore {
    async fn create(&self, reception: &Reception) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let busy = reception.is_in_progress()
            && tables
                .receptions
                .iter()
                .any(|r| r.pvz_id == reception.pvz_id && r.is_in_progress());
        if busy {
            return Err(conflict(UQ_ONE_IN_PROGRESS));
        }
        tables.receptions.push(reception.clone());
        Ok(())
    }

    async fn get_last_for_pickup_point(
        &self,
        pickup_point_id: EntityId,
        status: ReceptionStatus,
    ) -> Result<Option<Reception>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .receptions
            .iter()
            .rev()
            .find(|r| r.pvz_id == pickup_point_id && r.status == status)
            .cloned())
    }

    async fn close(&self, id: EntityId) -> Result<Option<Reception>, StoreError> {
        let mut tables = self.tables.write().await;
        let closed = tables
            .receptions
            .iter_mut()
            .find(|r| r.id == id && r.is_in_progress())
            .map(|r| {
                r.status = ReceptionStatus::Closed;
                r.clone()
            });
        Ok(closed)
    }

    async fn list_for_pickup_point(
        &self,
        pickup_point_id: EntityId,
    ) -> Result<Vec<Reception>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .receptions
            .iter()
            .filter(|r| r.pvz_id == pickup_point_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn add(&self, product: &Product) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.reception_in_progress(product.reception_id) {
            return Err(conflict(CK_RECEPTION_IN_PROGRESS));
        }
        tables.products.push(product.clone());
        Ok(())
    }

    async fn delete_last_for_reception(
        &self,
        reception_id: EntityId,
    ) -> Result<Option<Product>, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.reception_in_progress(reception_id) {
            return Err(conflict(CK_RECEPTION_IN_PROGRESS));
        }
        let last = tables
            .products
            .iter()
            .rposition(|p| p.reception_id == reception_id);
        Ok(last.map(|idx| tables.products.remove(idx)))
    }

    async fn list_for_reception(&self, reception_id: EntityId) -> Result<Vec<Product>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .iter()
            .filter(|p| p.reception_id == reception_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::pickup_point::City;
    use crate::reception::ReceptionState;
    use crate::roles::Role;

    #[tokio::test]
    async fn test_second_in_progress_reception_is_conflict() {
        let store = MemoryStore::new();
        let point = PickupPoint::register(City::Moscow);
        let first = ReceptionState::NoActiveReception.open(point.id).unwrap();
        let second = ReceptionState::NoActiveReception.open(point.id).unwrap();

        ReceptionStore::create(&store, &first).await.unwrap();
        assert_matches!(
            ReceptionStore::create(&store, &second).await,
            Err(StoreError::Conflict { constraint }) if constraint == UQ_ONE_IN_PROGRESS
        );
    }

    #[tokio::test]
    async fn test_close_twice_returns_none() {
        let store = MemoryStore::new();
        let r = ReceptionState::NoActiveReception
            .open(crate::types::new_id())
            .unwrap();
        ReceptionStore::create(&store, &r).await.unwrap();

        let closed = store.close(r.id).await.unwrap().unwrap();
        assert_eq!(closed.status, ReceptionStatus::Closed);
        assert!(store.close(r.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let store = MemoryStore::new();
        UserDirectory::create(&store, &User::new("a@b.c", "h", Role::Employee))
            .await
            .unwrap();
        assert_matches!(
            UserDirectory::create(&store, &User::new("a@b.c", "h2", Role::Moderator)).await,
            Err(StoreError::Conflict { .. })
        );
    }

    #[tokio::test]
    async fn test_user_lookup_by_id_and_email() {
        let store = MemoryStore::new();
        let user = User::new("clerk@pvz.test", "hash", Role::Employee);
        UserDirectory::create(&store, &user).await.unwrap();

        let by_id = UserDirectory::find_by_id(&store, user.id).await.unwrap();
        assert_eq!(by_id.as_ref(), Some(&user));

        let by_email = store.find_by_email("clerk@pvz.test").await.unwrap();
        assert_eq!(by_email, Some(user));

        let missing = UserDirectory::find_by_id(&store, crate::types::new_id())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_product_on_closed_reception_is_refused() {
        let store = MemoryStore::new();
        let r = ReceptionState::NoActiveReception
            .open(crate::types::new_id())
            .unwrap();
        ReceptionStore::create(&store, &r).await.unwrap();
        store.close(r.id).await.unwrap();

        let state = ReceptionState::resolve(Some(Reception {
            status: ReceptionStatus::InProgress,
            ..r.clone()
        }));
        let product = crate::product::append(&state, r.pvz_id, "обувь").unwrap();
        assert_matches!(store.add(&product).await, Err(StoreError::Conflict { .. }));
    }
}
