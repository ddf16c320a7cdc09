//! Seed hazards and recycling centers

use chrono::Utc;
use ewaste_core::Result;
use tracing::info;
use uuid::Uuid;

use crate::models::{GeoPoint, HazardRecord, RecyclingCenter};
use crate::store::DocumentStore;

pub fn seed_hazards() -> Vec<HazardRecord> {
    [
        (
            "Lithium-ion Battery",
            "Highly flammable and toxic if punctured.",
            "Flammable/Toxic",
            "Do not throw in regular trash. Take to dedicated e-waste facility.",
        ),
        (
            "Lead-acid Battery",
            "Contains corrosive acid and toxic lead.",
            "Corrosive/Toxic",
            "Must be recycled at automotive or specialized recycling centers.",
        ),
        (
            "Mercuric Oxide Battery",
            "Contains mercury, a potent neurotoxin.",
            "Toxic",
            "Hazardous waste collection only.",
        ),
    ]
    .into_iter()
    .map(|(component, description, classification, guide)| HazardRecord {
        id: Uuid::new_v4(),
        component: component.to_string(),
        hazard_description: description.to_string(),
        classification: classification.to_string(),
        disposal_guide: guide.to_string(),
        created_at: Utc::now(),
    })
    .collect()
}

pub fn seed_centers() -> Vec<RecyclingCenter> {
    vec![
        RecyclingCenter {
            id: Uuid::new_v4(),
            name: "Green Earth Recycling".to_string(),
            address: "123 Eco Lane, Tech City".to_string(),
            location: Some(GeoPoint::new(77.5946, 12.9716)),
            contact: Some("555-0101".to_string()),
            accepted_waste: vec!["E-waste".to_string(), "Plastic".to_string(), "Metal".to_string()],
            rating: 4.5,
            created_at: Utc::now(),
        },
        RecyclingCenter {
            id: Uuid::new_v4(),
            name: "Urban Waste Solutions".to_string(),
            address: "456 Sustain Blvd, Green Town".to_string(),
            location: Some(GeoPoint::new(77.6413, 12.9279)),
            contact: Some("555-0102".to_string()),
            accepted_waste: vec!["Hazardous".to_string(), "E-waste".to_string()],
            rating: 4.8,
            created_at: Utc::now(),
        },
    ]
}

/// Replace hazards and centers with the seed set
pub async fn seed_store(store: &dyn DocumentStore) -> Result<()> {
    let hazards = seed_hazards();
    let centers = seed_centers();
    info!("Seeding {} hazards and {} recycling centers", hazards.len(), centers.len());
    store.replace_seed(hazards, centers).await
}
