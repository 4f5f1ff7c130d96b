//! Pickup-point reception engine.
//!
//! Domain types, the authorization policy, the reception state machine, the
//! LIFO product ledger, the listing engine, and the [`workflow::WorkflowService`]
//! that ties them to the store contracts in [`store`]. No I/O and no logging
//! happen in this crate; persistence is supplied by the caller.

pub mod error;
pub mod listing;
pub mod memory;
pub mod pickup_point;
pub mod policy;
pub mod product;
pub mod reception;
pub mod roles;
pub mod store;
pub mod types;
pub mod user;
pub mod workflow;
