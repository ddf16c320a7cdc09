//! Records stored and served by the API

use chrono::{DateTime, Utc};
use ewaste_classifiers::{ClassificationSource, LegacyFields, ProfileMatch};
use ewaste_core::{ClassificationResult, Error, HazardLevel, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of a submitted device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    #[default]
    Detected,
    Recycled,
    Disposed,
}

/// A classified device owned by one user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub category: String,

    #[serde(flatten)]
    pub legacy: LegacyFields,

    #[serde(flatten)]
    pub classification: ClassificationResult,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub status: DeviceStatus,

    /// Knowledge base profile the device resolved to
    pub detailed_data: ProfileMatch,

    pub analysis_source: ClassificationSource,

    pub created_at: DateTime<Utc>,
}

impl DeviceRecord {
    pub fn hazard_level(&self) -> HazardLevel {
        self.classification.hazard_level
    }
}

/// Body of `POST /api/devices/classify`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Opaque reference to an already-stored image
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Admin-curated hazard knowledge
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardRecord {
    pub id: Uuid,
    /// e.g. "Lithium Battery"
    pub component: String,
    pub hazard_description: String,
    /// e.g. "Toxic", "Flammable"
    pub classification: String,
    pub disposal_guide: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHazard {
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub hazard_description: String,
    #[serde(default)]
    pub classification: String,
    #[serde(default)]
    pub disposal_guide: String,
}

impl NewHazard {
    pub fn into_record(self) -> Result<HazardRecord> {
        require("component", &self.component)?;
        require("hazardDescription", &self.hazard_description)?;
        require("classification", &self.classification)?;
        require("disposalGuide", &self.disposal_guide)?;

        Ok(HazardRecord {
            id: Uuid::new_v4(),
            component: self.component,
            hazard_description: self.hazard_description,
            classification: self.classification,
            disposal_guide: self.disposal_guide,
            created_at: Utc::now(),
        })
    }
}

/// GeoJSON point, coordinates are `[longitude, latitude]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type", default = "point_type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: point_type(),
            coordinates: [longitude, latitude],
        }
    }

    fn validate(&self) -> Result<()> {
        let [longitude, latitude] = self.coordinates;
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::validation(format!("longitude {} out of range", longitude)));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::validation(format!("latitude {} out of range", latitude)));
        }
        Ok(())
    }
}

fn point_type() -> String {
    "Point".to_string()
}

/// A disposal facility
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecyclingCenter {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub accepted_waste: Vec<String>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCenter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub accepted_waste: Vec<String>,
    #[serde(default)]
    pub rating: f64,
}

impl NewCenter {
    pub fn into_record(self) -> Result<RecyclingCenter> {
        require("name", &self.name)?;
        require("address", &self.address)?;
        if let Some(location) = &self.location {
            location.validate()?;
        }

        Ok(RecyclingCenter {
            id: Uuid::new_v4(),
            name: self.name,
            address: self.address,
            location: self.location,
            contact: self.contact,
            accepted_waste: self.accepted_waste,
            rating: self.rating,
            created_at: Utc::now(),
        })
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hazard_requires_fields() {
        let hazard = NewHazard {
            component: "Lithium Battery".to_string(),
            hazard_description: String::new(),
            classification: "Flammable".to_string(),
            disposal_guide: "E-waste facility".to_string(),
        };
        let err = hazard.into_record().unwrap_err();
        assert!(err.to_string().contains("hazardDescription"));
    }

    #[test]
    fn test_center_coordinates_validated() {
        let center = NewCenter {
            name: "Depot".to_string(),
            address: "1 Main St".to_string(),
            location: Some(GeoPoint::new(200.0, 12.0)),
            contact: None,
            accepted_waste: vec![],
            rating: 0.0,
        };
        assert!(matches!(center.into_record(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_geo_point_defaults_type() {
        let point: GeoPoint = serde_json::from_str(r#"{"coordinates": [77.59, 12.97]}"#).unwrap();
        assert_eq!(point.kind, "Point");
        assert!(point.validate().is_ok());
    }

    #[test]
    fn test_device_status_wire_format() {
        assert_eq!(serde_json::to_value(DeviceStatus::default()).unwrap(), "detected");
    }
}
