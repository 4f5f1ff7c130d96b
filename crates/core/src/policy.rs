//! Authorization policy: which role may perform which workflow action.
//!
//! Pure and total. Every mutating entry point of
//! [`WorkflowService`](crate::workflow::WorkflowService) calls [`authorize`]
//! before it reads or writes any state.

use crate::error::CoreError;
use crate::roles::Role;

/// Every action the workflow exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CreatePickupPoint,
    ListPickupPoints,
    OpenReception,
    CloseReception,
    AddProduct,
    DeleteLastProduct,
    /// Register a pickup point and open its first reception in one step.
    /// Spans both roles' responsibilities, so neither role holds it.
    CreatePickupPointAndReceptionCombo,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::CreatePickupPoint,
        Action::ListPickupPoints,
        Action::OpenReception,
        Action::CloseReception,
        Action::AddProduct,
        Action::DeleteLastProduct,
        Action::CreatePickupPointAndReceptionCombo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::CreatePickupPoint => "create_pickup_point",
            Action::ListPickupPoints => "list_pickup_points",
            Action::OpenReception => "open_reception",
            Action::CloseReception => "close_reception",
            Action::AddProduct => "add_product",
            Action::DeleteLastProduct => "delete_last_product",
            Action::CreatePickupPointAndReceptionCombo => {
                "create_pickup_point_and_reception_combo"
            }
        }
    }
}

/// Decide whether `role` may perform `action`.
pub fn permit(role: Role, action: Action) -> bool {
    match role {
        Role::Moderator => matches!(
            action,
            Action::CreatePickupPoint | Action::ListPickupPoints
        ),
        Role::Employee => matches!(
            action,
            Action::OpenReception
                | Action::CloseReception
                | Action::AddProduct
                | Action::DeleteLastProduct
                | Action::ListPickupPoints
        ),
    }
}

/// [`permit`] lifted into the error taxonomy.
pub fn authorize(role: Role, action: Action) -> Result<(), CoreError> {
    if permit(role, action) {
        Ok(())
    } else {
        Err(CoreError::AccessDenied(format!(
            "role '{role}' may not {}",
            action.as_str()
        )))
    }
}
