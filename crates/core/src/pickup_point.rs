//! Pickup points (PVZ) and the closed set of cities they may open in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{new_id, now, EntityId, Timestamp};

pub const CITY_MOSCOW: &str = "Москва";
pub const CITY_SAINT_PETERSBURG: &str = "Санкт-Петербург";
pub const CITY_KAZAN: &str = "Казань";

/// All cities a pickup point may be registered in.
pub const VALID_CITIES: &[&str] = &[CITY_MOSCOW, CITY_SAINT_PETERSBURG, CITY_KAZAN];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "Москва")]
    Moscow,
    #[serde(rename = "Санкт-Петербург")]
    SaintPetersburg,
    #[serde(rename = "Казань")]
    Kazan,
}

impl City {
    pub fn as_str(self) -> &'static str {
        match self {
            City::Moscow => CITY_MOSCOW,
            City::SaintPetersburg => CITY_SAINT_PETERSBURG,
            City::Kazan => CITY_KAZAN,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CITY_MOSCOW => Ok(City::Moscow),
            CITY_SAINT_PETERSBURG => Ok(City::SaintPetersburg),
            CITY_KAZAN => Ok(City::Kazan),
            other => Err(CoreError::Validation(format!(
                "Invalid city '{other}'. Must be one of: {}",
                VALID_CITIES.join(", ")
            ))),
        }
    }
}

/// A registered pickup point. Never deleted; the city never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupPoint {
    pub id: EntityId,
    pub registration_date: Timestamp,
    pub city: City,
}

impl PickupPoint {
    /// Build a new pickup point with a fresh id and registration stamp.
    pub fn register(city: City) -> Self {
        Self {
            id: new_id(),
            registration_date: now(),
            city,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_cities_parse_from_wire_names() {
        assert_eq!("Москва".parse::<City>().unwrap(), City::Moscow);
        assert_eq!(
            "Санкт-Петербург".parse::<City>().unwrap(),
            City::SaintPetersburg
        );
        assert_eq!("Казань".parse::<City>().unwrap(), City::Kazan);
    }

    #[test]
    fn test_unknown_city_is_validation_error() {
        assert_matches!("Новосибирск".parse::<City>(), Err(CoreError::Validation(_)));
        assert_matches!("Moscow".parse::<City>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_pickup_point_serializes_camel_case() {
        let point = PickupPoint::register(City::Kazan);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["city"], "Казань");
        assert!(json["registrationDate"].is_string());
        assert_eq!(json["id"], point.id.to_string());
    }
}
