//! Branch records and geofence draft defaults.

use serde::{Deserialize, Deserializer, Serialize};

use crate::geo::{Coordinate, DEFAULT_CENTER};

/// Geofence radius assigned to a branch that is being drafted from scratch.
pub const DEFAULT_RADIUS_METERS: u32 = 100;

/// A physical branch location with its circular geofence.
///
/// `id == None` denotes a branch that has not been created on the backend
/// yet. The coordinate is flattened on the wire, so the serialized form is
/// the flat `name`/`address`/`latitude`/`longitude`/`radius_meters` record
/// the persistence collaborator expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    #[serde(deserialize_with = "radius_from_number")]
    pub radius_meters: u32,
}

impl Branch {
    /// A fresh draft for the "add branch" flow: empty fields, the fixed
    /// default center, and a 100 m geofence.
    #[must_use]
    pub fn draft() -> Self {
        Self {
            id: None,
            name: String::new(),
            address: String::new(),
            coordinate: DEFAULT_CENTER,
            radius_meters: DEFAULT_RADIUS_METERS,
        }
    }
}

/// The backend historically stored the radius in a float column, so stored
/// branches may arrive as `150.0` while this crate writes integers. Accept
/// both, but keep the positivity invariant.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn radius_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || raw < 1.0 {
        return Err(serde::de::Error::custom(format!(
            "radius_meters must be a positive number of meters, got {raw}"
        )));
    }
    Ok(raw.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_uses_fixed_defaults() {
        let draft = Branch::draft();
        assert!(draft.id.is_none());
        assert_eq!(draft.radius_meters, 100);
        assert!((draft.coordinate.latitude - 14.5995).abs() < f64::EPSILON);
        assert!((draft.coordinate.longitude - 120.9842).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_to_flat_wire_record() {
        let mut branch = Branch::draft();
        branch.name = "Main Branch".to_string();
        let json = serde_json::to_value(&branch).expect("serialize");

        assert!(json.get("id").is_none(), "draft must not carry an id");
        assert_eq!(json["name"].as_str(), Some("Main Branch"));
        assert!(json["latitude"].is_number());
        assert!(json["longitude"].is_number());
        assert_eq!(json["radius_meters"].as_u64(), Some(100));
    }

    #[test]
    fn deserializes_float_radius_from_stored_records() {
        let branch: Branch = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Makati",
            "address": "Ayala Ave",
            "latitude": 14.5547,
            "longitude": 121.0244,
            "radius_meters": 150.0
        }))
        .expect("deserialize stored branch");

        assert_eq!(branch.id, Some(7));
        assert_eq!(branch.radius_meters, 150);
    }

    #[test]
    fn rejects_zero_radius_on_the_wire() {
        let result = serde_json::from_value::<Branch>(serde_json::json!({
            "name": "Bad",
            "latitude": 0.0,
            "longitude": 0.0,
            "radius_meters": 0
        }));
        assert!(result.is_err(), "zero radius must not deserialize");
    }
}
