//! Per-user dashboard statistics

use chrono::{DateTime, Duration, NaiveDate, Utc};
use ewaste_core::{HazardLevel, Result};
use serde::Serialize;

use crate::store::DocumentStore;

/// Estimated kg of CO2 saved per recycled device
const CO2_PER_DEVICE_KG: f64 = 2.5;

const IMPACT_PER_DEVICE: u64 = 50;
const IMPACT_PER_HIGH_HAZARD: u64 = 100;

/// Days covered by `dailyActivity`, today included
const ACTIVITY_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_devices: usize,
    pub high_hazard_devices: usize,
    pub co2_saved: f64,
    pub impact_score: u64,
    /// Oldest day first
    pub daily_activity: Vec<DayActivity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayActivity {
    /// Short weekday name ("Mon")
    pub name: String,
    pub count: usize,
}

pub async fn user_stats(store: &dyn DocumentStore, user_id: &str, now: DateTime<Utc>) -> Result<UserStats> {
    let total = store.count_devices(user_id, None).await?;
    let high = store.count_devices(user_id, Some(HazardLevel::High)).await?;

    let today = now.date_naive();
    let first_day = today - Duration::days(ACTIVITY_DAYS - 1);
    let since = first_day
        .and_hms_opt(0, 0, 0)
        .map(|start| start.and_utc())
        .unwrap_or(now);

    let times = store.device_times_since(user_id, since).await?;

    Ok(UserStats {
        total_devices: total,
        high_hazard_devices: high,
        co2_saved: total as f64 * CO2_PER_DEVICE_KG,
        impact_score: total as u64 * IMPACT_PER_DEVICE + high as u64 * IMPACT_PER_HIGH_HAZARD,
        daily_activity: bucket_by_day(first_day, &times),
    })
}

fn bucket_by_day(first_day: NaiveDate, times: &[DateTime<Utc>]) -> Vec<DayActivity> {
    (0..ACTIVITY_DAYS)
        .map(|offset| {
            let day = first_day + Duration::days(offset);
            DayActivity {
                name: day.format("%a").to_string(),
                count: times.iter().filter(|t| t.date_naive() == day).count(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_buckets_are_oldest_first() {
        // 2024-06-02 was a Sunday
        let first = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let times = vec![
            Utc.with_ymd_and_hms(2024, 6, 2, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 8, 23, 59, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 8, 0, 0, 0).unwrap(),
        ];

        let buckets = bucket_by_day(first, &times);
        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[0], DayActivity { name: "Sun".to_string(), count: 1 });
        assert_eq!(buckets[6], DayActivity { name: "Sat".to_string(), count: 2 });
        assert_eq!(buckets[3].count, 0);
    }
}
