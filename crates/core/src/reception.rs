//! Reception lifecycle for a single pickup point.
//!
//! A pickup point is either idle ([`ReceptionState::NoActiveReception`]) or
//! has exactly one reception in progress ([`ReceptionState::InProgress`]).
//! `open` is legal only from the idle state, `close` only from the active
//! one. A closed reception is terminal and returns the point to idle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{new_id, now, EntityId, Timestamp};

pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_CLOSED: &str = "close";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReceptionStatus {
    #[serde(rename = "in_progress")]
    InProgress,
    #[serde(rename = "close")]
    Closed,
}

impl ReceptionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReceptionStatus::InProgress => STATUS_IN_PROGRESS,
            ReceptionStatus::Closed => STATUS_CLOSED,
        }
    }
}

impl fmt::Display for ReceptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReceptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_IN_PROGRESS => Ok(ReceptionStatus::InProgress),
            STATUS_CLOSED => Ok(ReceptionStatus::Closed),
            other => Err(format!("Unknown reception status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reception {
    pub id: EntityId,
    pub date_time: Timestamp,
    pub pvz_id: EntityId,
    pub status: ReceptionStatus,
}

impl Reception {
    pub fn is_in_progress(&self) -> bool {
        self.status == ReceptionStatus::InProgress
    }
}

/// Lifecycle state of one pickup point, resolved from the store on every
/// request rather than cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceptionState {
    NoActiveReception,
    InProgress(Reception),
}

impl ReceptionState {
    /// Resolve from the most recent in-progress reception, if any.
    ///
    /// A closed reception handed in by mistake still resolves to idle.
    pub fn resolve(current: Option<Reception>) -> Self {
        match current {
            Some(r) if r.is_in_progress() => ReceptionState::InProgress(r),
            _ => ReceptionState::NoActiveReception,
        }
    }

    /// The active reception, or the "no active reception" error.
    pub fn active(&self, pickup_point_id: EntityId) -> Result<&Reception, CoreError> {
        match self {
            ReceptionState::InProgress(r) => Ok(r),
            ReceptionState::NoActiveReception => {
                Err(CoreError::no_active_reception(pickup_point_id))
            }
        }
    }

    /// Transition `NoActiveReception -> InProgress`.
    ///
    /// Returns the new reception to persist. Never reuses an active one.
    pub fn open(&self, pickup_point_id: EntityId) -> Result<Reception, CoreError> {
        match self {
            ReceptionState::NoActiveReception => Ok(Reception {
                id: new_id(),
                date_time: now(),
                pvz_id: pickup_point_id,
                status: ReceptionStatus::InProgress,
            }),
            ReceptionState::InProgress(active) => Err(CoreError::Conflict(format!(
                "reception {} is already in progress for pickup point {pickup_point_id}",
                active.id
            ))),
        }
    }

    /// Transition `InProgress -> NoActiveReception`.
    ///
    /// Returns the reception as it should look once closed.
    pub fn close(self, pickup_point_id: EntityId) -> Result<Reception, CoreError> {
        match self {
            ReceptionState::InProgress(mut r) => {
                r.status = ReceptionStatus::Closed;
                Ok(r)
            }
            ReceptionState::NoActiveReception => {
                Err(CoreError::no_active_reception(pickup_point_id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn in_progress(pvz_id: EntityId) -> Reception {
        Reception {
            id: new_id(),
            date_time: now(),
            pvz_id,
            status: ReceptionStatus::InProgress,
        }
    }

    #[test]
    fn test_open_from_idle_creates_in_progress_reception() {
        let pvz = new_id();
        let r = ReceptionState::NoActiveReception.open(pvz).unwrap();
        assert_eq!(r.pvz_id, pvz);
        assert_eq!(r.status, ReceptionStatus::InProgress);
    }

    #[test]
    fn test_open_while_active_conflicts() {
        let pvz = new_id();
        let state = ReceptionState::resolve(Some(in_progress(pvz)));
        assert_matches!(state.open(pvz), Err(CoreError::Conflict(_)));
    }

    #[test]
    fn test_close_active_marks_closed() {
        let pvz = new_id();
        let active = in_progress(pvz);
        let closed = ReceptionState::resolve(Some(active.clone()))
            .close(pvz)
            .unwrap();
        assert_eq!(closed.id, active.id);
        assert_eq!(closed.status, ReceptionStatus::Closed);
    }

    #[test]
    fn test_close_idle_is_empty_state() {
        assert_matches!(
            ReceptionState::NoActiveReception.close(new_id()),
            Err(CoreError::EmptyState(_))
        );
    }

    #[test]
    fn test_closed_reception_resolves_to_idle() {
        let pvz = new_id();
        let mut r = in_progress(pvz);
        r.status = ReceptionStatus::Closed;
        assert_eq!(
            ReceptionState::resolve(Some(r)),
            ReceptionState::NoActiveReception
        );
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!("in_progress".parse(), Ok(ReceptionStatus::InProgress));
        assert_eq!("close".parse(), Ok(ReceptionStatus::Closed));
        assert!("closed".parse::<ReceptionStatus>().is_err());
        assert_eq!(
            serde_json::to_string(&ReceptionStatus::Closed).unwrap(),
            "\"close\""
        );
    }
}
