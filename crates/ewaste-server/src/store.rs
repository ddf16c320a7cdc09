//! Document store for devices, hazards, and recycling centers

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ewaste_core::{HazardLevel, Result};
use parking_lot::RwLock;

use crate::models::{DeviceRecord, HazardRecord, RecyclingCenter};

/// Persistence collaborator for the API
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_device(&self, device: DeviceRecord) -> Result<DeviceRecord>;

    /// Devices owned by a user, newest first
    async fn devices_for_user(&self, user_id: &str) -> Result<Vec<DeviceRecord>>;

    /// Count a user's devices, optionally only those at one hazard level
    async fn count_devices(&self, user_id: &str, level: Option<HazardLevel>) -> Result<usize>;

    /// Creation times of a user's devices at or after `since`
    async fn device_times_since(&self, user_id: &str, since: DateTime<Utc>) -> Result<Vec<DateTime<Utc>>>;

    async fn list_hazards(&self) -> Result<Vec<HazardRecord>>;

    async fn insert_hazard(&self, hazard: HazardRecord) -> Result<HazardRecord>;

    async fn list_centers(&self) -> Result<Vec<RecyclingCenter>>;

    async fn insert_center(&self, center: RecyclingCenter) -> Result<RecyclingCenter>;

    /// Drop all hazards and centers and load the given ones
    async fn replace_seed(&self, hazards: Vec<HazardRecord>, centers: Vec<RecyclingCenter>) -> Result<()>;
}

/// Process-local store
#[derive(Default)]
pub struct InMemoryStore {
    devices: RwLock<Vec<DeviceRecord>>,
    hazards: RwLock<Vec<HazardRecord>>,
    centers: RwLock<Vec<RecyclingCenter>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert_device(&self, device: DeviceRecord) -> Result<DeviceRecord> {
        self.devices.write().push(device.clone());
        Ok(device)
    }

    async fn devices_for_user(&self, user_id: &str) -> Result<Vec<DeviceRecord>> {
        let mut devices: Vec<_> = self
            .devices
            .read()
            .iter()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect();

        // Stable sort keeps insertion order for equal timestamps, so reverse first
        devices.reverse();
        devices.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(devices)
    }

    async fn count_devices(&self, user_id: &str, level: Option<HazardLevel>) -> Result<usize> {
        Ok(self
            .devices
            .read()
            .iter()
            .filter(|d| d.user_id == user_id)
            .filter(|d| level.map_or(true, |level| d.hazard_level() == level))
            .count())
    }

    async fn device_times_since(&self, user_id: &str, since: DateTime<Utc>) -> Result<Vec<DateTime<Utc>>> {
        Ok(self
            .devices
            .read()
            .iter()
            .filter(|d| d.user_id == user_id && d.created_at >= since)
            .map(|d| d.created_at)
            .collect())
    }

    async fn list_hazards(&self) -> Result<Vec<HazardRecord>> {
        Ok(self.hazards.read().clone())
    }

    async fn insert_hazard(&self, hazard: HazardRecord) -> Result<HazardRecord> {
        self.hazards.write().push(hazard.clone());
        Ok(hazard)
    }

    async fn list_centers(&self) -> Result<Vec<RecyclingCenter>> {
        Ok(self.centers.read().clone())
    }

    async fn insert_center(&self, center: RecyclingCenter) -> Result<RecyclingCenter> {
        self.centers.write().push(center.clone());
        Ok(center)
    }

    async fn replace_seed(&self, hazards: Vec<HazardRecord>, centers: Vec<RecyclingCenter>) -> Result<()> {
        *self.hazards.write() = hazards;
        *self.centers.write() = centers;
        Ok(())
    }
}
