//! Workflow service: the public entry points of the reception engine.
//!
//! Every entry point authorizes the caller first, resolves the current
//! reception state from the store, applies one state-machine or ledger
//! transition, and persists it with a single write. Store conflicts are
//! translated into the domain taxonomy here; backend failures pass through
//! untouched as [`CoreError::Store`].

use std::sync::Arc;

use futures::future::try_join_all;

use crate::error::{CoreError, StoreError};
use crate::listing::{ListFilter, PickupPointView, ReceptionView};
use crate::pickup_point::{City, PickupPoint};
use crate::policy::{authorize, Action};
use crate::product::{self, Product};
use crate::reception::{Reception, ReceptionState, ReceptionStatus};
use crate::roles::Role;
use crate::store::{PickupPointDirectory, ProductStore, ReceptionStore};
use crate::types::EntityId;

#[derive(Clone)]
pub struct WorkflowService {
    pickup_points: Arc<dyn PickupPointDirectory>,
    receptions: Arc<dyn ReceptionStore>,
    products: Arc<dyn ProductStore>,
}

impl WorkflowService {
    pub fn new(
        pickup_points: Arc<dyn PickupPointDirectory>,
        receptions: Arc<dyn ReceptionStore>,
        products: Arc<dyn ProductStore>,
    ) -> Self {
        Self {
            pickup_points,
            receptions,
            products,
        }
    }

    /// Build a service whose three stores are the same backend.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: PickupPointDirectory + ReceptionStore + ProductStore + 'static,
    {
        Self::new(store.clone(), store.clone(), store)
    }

    // -----------------------------------------------------------------------
    // Pickup points
    // -----------------------------------------------------------------------

    pub async fn create_pickup_point(
        &self,
        role: Role,
        city: &str,
    ) -> Result<PickupPoint, CoreError> {
        authorize(role, Action::CreatePickupPoint)?;
        let city: City = city.parse()?;
        let point = PickupPoint::register(city);
        self.pickup_points.create(&point).await?;
        Ok(point)
    }

    pub async fn list_pickup_points(
        &self,
        role: Role,
        filter: &ListFilter,
    ) -> Result<Vec<PickupPointView>, CoreError> {
        authorize(role, Action::ListPickupPoints)?;
        let points = self.pickup_points.list_with_filter(filter).await?;
        try_join_all(points.into_iter().map(|p| self.load_view(p, filter))).await
    }

    async fn load_view(
        &self,
        point: PickupPoint,
        filter: &ListFilter,
    ) -> Result<PickupPointView, CoreError> {
        let receptions = self.receptions.list_for_pickup_point(point.id).await?;
        let receptions = try_join_all(
            receptions
                .into_iter()
                .filter(|r| filter.range.contains(r.date_time))
                .map(|reception| async move {
                    let products = self.products.list_for_reception(reception.id).await?;
                    Ok::<_, CoreError>(ReceptionView {
                        reception,
                        products,
                    })
                }),
        )
        .await?;
        Ok(PickupPointView {
            pvz: point,
            receptions,
        })
    }

    // -----------------------------------------------------------------------
    // Receptions
    // -----------------------------------------------------------------------

    pub async fn open_reception(
        &self,
        role: Role,
        pickup_point_id: EntityId,
    ) -> Result<Reception, CoreError> {
        authorize(role, Action::OpenReception)?;
        self.require_pickup_point(pickup_point_id).await?;

        let state = self.current_state(pickup_point_id).await?;
        let reception = state.open(pickup_point_id)?;
        match self.receptions.create(&reception).await {
            Ok(()) => Ok(reception),
            // Lost a race with a concurrent open.
            Err(StoreError::Conflict { .. }) => Err(CoreError::Conflict(format!(
                "a reception is already in progress for pickup point {pickup_point_id}"
            ))),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn close_last_reception(
        &self,
        role: Role,
        pickup_point_id: EntityId,
    ) -> Result<Reception, CoreError> {
        authorize(role, Action::CloseReception)?;
        self.require_pickup_point(pickup_point_id).await?;

        let state = self.current_state(pickup_point_id).await?;
        let target = state.close(pickup_point_id)?;
        self.receptions
            .close(target.id)
            .await?
            .ok_or_else(|| CoreError::no_active_reception(pickup_point_id))
    }

    // -----------------------------------------------------------------------
    // Products
    // -----------------------------------------------------------------------

    pub async fn add_product(
        &self,
        role: Role,
        pickup_point_id: EntityId,
        product_type: &str,
    ) -> Result<Product, CoreError> {
        authorize(role, Action::AddProduct)?;
        self.require_pickup_point(pickup_point_id).await?;

        let state = self.current_state(pickup_point_id).await?;
        let product = product::append(&state, pickup_point_id, product_type)?;
        match self.products.add(&product).await {
            Ok(()) => Ok(product),
            // The reception was closed between lookup and insert.
            Err(StoreError::Conflict { .. }) => {
                Err(CoreError::no_active_reception(pickup_point_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete_last_product(
        &self,
        role: Role,
        pickup_point_id: EntityId,
    ) -> Result<Product, CoreError> {
        authorize(role, Action::DeleteLastProduct)?;
        self.require_pickup_point(pickup_point_id).await?;

        let state = self.current_state(pickup_point_id).await?;
        let reception_id = product::delete_target(&state, pickup_point_id)?.id;
        match self.products.delete_last_for_reception(reception_id).await {
            Ok(removed) => product::deleted_or_empty(removed, reception_id),
            Err(StoreError::Conflict { .. }) => {
                Err(CoreError::no_active_reception(pickup_point_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn require_pickup_point(&self, id: EntityId) -> Result<PickupPoint, CoreError> {
        self.pickup_points
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "PickupPoint",
                id,
            })
    }

    async fn current_state(&self, pickup_point_id: EntityId) -> Result<ReceptionState, CoreError> {
        let current = self
            .receptions
            .get_last_for_pickup_point(pickup_point_id, ReceptionStatus::InProgress)
            .await?;
        Ok(ReceptionState::resolve(current))
    }
}
