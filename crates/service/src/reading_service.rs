use std::sync::Arc;

use sensor_gateway_core::{
    chronological, DashboardSelector, DashboardSeries, DeviceReading, DeviceSnapshot,
    HistoryPoint, NewReading, Reading, DASHBOARD_ALL_LIMIT, DASHBOARD_SINGLE_LIMIT,
    HISTORY_MAX_LIMIT, HISTORY_MIN_LIMIT,
};
use sensor_gateway_storage::ReadingStore;

use crate::ServiceError;

const MISSING_VALUE: &str = "Missing 'value' query parameter";
const SENSOR_NOT_FOUND: &str = "Sensor not found";

/// Parses the `value` query parameter of an insert.
///
/// Absent, unparsable and non-finite values are all rejected.
pub fn parse_reading_value(raw: Option<&str>) -> Result<f64, ServiceError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty());
    let Some(raw) = raw else {
        return Err(ServiceError::InvalidInput(MISSING_VALUE.to_owned()));
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ServiceError::InvalidInput(format!("Invalid 'value' query parameter: {raw}"))),
    }
}

/// History window: defaults to the maximum, explicit requests are clamped into range.
#[must_use]
pub fn clamp_history_limit(requested: Option<u32>) -> u32 {
    requested.map_or(HISTORY_MAX_LIMIT, |n| n.clamp(HISTORY_MIN_LIMIT, HISTORY_MAX_LIMIT))
}

pub struct ReadingService {
    store: Arc<dyn ReadingStore>,
}

impl ReadingService {
    #[must_use]
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        Self { store }
    }

    pub async fn insert_reading(
        &self,
        sensor_id: i32,
        raw_value: Option<&str>,
        unit: Option<String>,
    ) -> Result<Reading, ServiceError> {
        let value = parse_reading_value(raw_value)?;
        let unit = unit.map(|u| u.trim().to_owned()).filter(|u| !u.is_empty());
        let reading = NewReading { sensor_id, value, unit };
        let stored = self.store.insert_reading(&reading).await?;
        tracing::info!(sensor_id, value, "reading stored");
        Ok(stored)
    }

    pub async fn list_device_ids(&self) -> Result<Vec<i32>, ServiceError> {
        Ok(self.store.list_sensor_ids().await?)
    }

    pub async fn latest_per_device(&self) -> Result<Vec<DeviceReading>, ServiceError> {
        let latest = self.store.latest_per_sensor().await?;
        Ok(latest.iter().map(|(_, reading)| DeviceReading::from(reading)).collect())
    }

    /// Latest reading of every device with its name, for the device list page.
    pub async fn device_overview(&self) -> Result<Vec<DeviceSnapshot>, ServiceError> {
        let latest = self.store.latest_per_sensor().await?;
        Ok(latest
            .into_iter()
            .map(|(device, reading)| DeviceSnapshot::new(device, &reading))
            .collect())
    }

    pub async fn latest_reading(&self, sensor_id: i32) -> Result<DeviceSnapshot, ServiceError> {
        match self.store.latest_reading(sensor_id).await? {
            Some((device, reading)) => Ok(DeviceSnapshot::new(device, &reading)),
            None => {
                tracing::debug!(sensor_id, "no readings for sensor");
                Err(ServiceError::NotFound(SENSOR_NOT_FOUND.to_owned()))
            },
        }
    }

    /// Oldest-first history. Unknown sensors yield an empty list, not an error.
    pub async fn reading_history(
        &self,
        sensor_id: i32,
        limit: Option<u32>,
    ) -> Result<Vec<HistoryPoint>, ServiceError> {
        let limit = clamp_history_limit(limit);
        let newest_first = self.store.recent_readings(sensor_id, limit).await?;
        Ok(chronological(newest_first).iter().map(HistoryPoint::from).collect())
    }

    pub async fn dashboard_series(
        &self,
        selector: DashboardSelector,
    ) -> Result<DashboardSeries, ServiceError> {
        let series = match selector {
            DashboardSelector::All => {
                let recent = self.store.recent_readings_all(DASHBOARD_ALL_LIMIT).await?;
                DashboardSeries::for_all_sensors(recent)
            },
            DashboardSelector::Sensor(sensor_id) => {
                let recent = self.store.recent_readings(sensor_id, DASHBOARD_SINGLE_LIMIT).await?;
                DashboardSeries::for_sensor(sensor_id, recent)
            },
        };
        tracing::debug!(%selector, datasets = series.datasets.len(), "dashboard series built");
        Ok(series)
    }

    /// Parses a raw `<id|all>` path segment before building the series.
    pub async fn dashboard_for(&self, raw_selector: &str) -> Result<DashboardSeries, ServiceError> {
        let selector = raw_selector
            .parse::<DashboardSelector>()
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;
        self.dashboard_series(selector).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use sensor_gateway_storage::MemoryReadingStore;

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn service_with(store: Arc<MemoryReadingStore>) -> ReadingService {
        ReadingService::new(store)
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_reading_value(Some("21.5")).unwrap(), 21.5);
        assert_eq!(parse_reading_value(Some(" -3 ")).unwrap(), -3.0);
        assert!(matches!(parse_reading_value(None), Err(ServiceError::InvalidInput(_))));
        assert!(matches!(parse_reading_value(Some("")), Err(ServiceError::InvalidInput(_))));
        assert!(matches!(parse_reading_value(Some("warm")), Err(ServiceError::InvalidInput(_))));
        assert!(matches!(parse_reading_value(Some("NaN")), Err(ServiceError::InvalidInput(_))));
        assert!(matches!(parse_reading_value(Some("inf")), Err(ServiceError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_value_message() {
        let err = parse_reading_value(None).unwrap_err();
        assert_eq!(err.to_string(), "Missing 'value' query parameter");
    }

    #[test]
    fn test_history_limit_clamping() {
        assert_eq!(clamp_history_limit(None), 50);
        assert_eq!(clamp_history_limit(Some(1)), 10);
        assert_eq!(clamp_history_limit(Some(25)), 25);
        assert_eq!(clamp_history_limit(Some(500)), 50);
    }

    #[tokio::test]
    async fn test_insert_without_value_writes_nothing() {
        let store = Arc::new(MemoryReadingStore::new());
        let service = service_with(Arc::clone(&store));

        let err = service.insert_reading(3, None, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_insert_then_latest() {
        let store = Arc::new(MemoryReadingStore::new());
        let service = service_with(Arc::clone(&store));
        let before = Utc::now();

        let stored = service.insert_reading(3, Some("21.5"), Some("C".to_owned())).await.unwrap();
        assert_eq!(stored.sensor_id, 3);
        assert!(stored.created_at >= before);

        let snapshot = service.latest_reading(3).await.unwrap();
        assert_eq!(snapshot.value, 21.5);
        assert_eq!(snapshot.unit, "C");
        assert_eq!(snapshot.name, "Sensor 3");
    }

    #[tokio::test]
    async fn test_blank_unit_is_dropped() {
        let store = Arc::new(MemoryReadingStore::new());
        let service = service_with(Arc::clone(&store));
        let stored = service.insert_reading(1, Some("1"), Some("  ".to_owned())).await.unwrap();
        assert_eq!(stored.unit, None);
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_message() {
        let service = service_with(Arc::new(MemoryReadingStore::failing("could not connect")));
        let err = service.insert_reading(1, Some("1.0"), None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
        assert_eq!(err.to_string(), "could not connect");
    }

    #[tokio::test]
    async fn test_unknown_sensor_is_consistent() {
        let service = service_with(Arc::new(MemoryReadingStore::new()));
        assert!(service.latest_reading(42).await.unwrap_err().is_not_found());
        assert!(service.reading_history(42, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_limited_and_chronological() {
        let store = Arc::new(MemoryReadingStore::new());
        for i in 0..60 {
            store.push(Reading::new(7, f64::from(i), None, at(i64::from(i)))).await;
        }
        let service = service_with(store);

        let history = service.reading_history(7, None).await.unwrap();
        assert_eq!(history.len(), 50);
        assert_eq!(history.first().unwrap().value, 10.0);
        assert_eq!(history.last().unwrap().value, 59.0);
        assert!(history.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

        let short = service.reading_history(7, Some(12)).await.unwrap();
        assert_eq!(short.len(), 12);
        assert_eq!(short.last().unwrap().value, 59.0);
    }

    #[tokio::test]
    async fn test_dashboard_all_counts_distinct_sensors_in_window() {
        let store = Arc::new(MemoryReadingStore::new());
        // Sensor 9 only appears before the 100-row window.
        store.push(Reading::new(9, 0.0, None, at(0))).await;
        for i in 1..=100 {
            let sensor_id = (i % 4) + 1;
            store.push(Reading::new(sensor_id, f64::from(i), None, at(i64::from(i)))).await;
        }
        let service = service_with(store);

        let series = service.dashboard_series(DashboardSelector::All).await.unwrap();
        assert_eq!(series.rows.len(), 100);
        assert_eq!(series.datasets.len(), 4);
        assert!(series.datasets.iter().all(|d| d.sensor_id != 9));
    }

    #[tokio::test]
    async fn test_dashboard_single_sensor_last_ten() {
        let store = Arc::new(MemoryReadingStore::new());
        for i in 0..15 {
            store.push(Reading::new(2, f64::from(i), None, at(i64::from(i)))).await;
        }
        let service = service_with(store);

        let series = service.dashboard_for("2").await.unwrap();
        assert_eq!(series.datasets.len(), 1);
        let data = &series.datasets[0].data;
        assert_eq!(data.len(), 10);
        assert_eq!(data.first().copied(), Some(5.0));
        assert_eq!(data.last().copied(), Some(14.0));
    }

    #[tokio::test]
    async fn test_dashboard_rejects_bad_selector() {
        let service = service_with(Arc::new(MemoryReadingStore::new()));
        let err = service.dashboard_for("everything").await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_device_ids_and_overview() {
        let store = Arc::new(MemoryReadingStore::new());
        store.push(Reading::new(5, 1.0, None, at(1))).await;
        store.push(Reading::new(2, 2.0, Some("%".to_owned()), at(2))).await;
        store.push(Reading::new(5, 3.0, None, at(3))).await;
        store.name_device(2, "Humidity").await;
        let service = service_with(store);

        assert_eq!(service.list_device_ids().await.unwrap(), vec![2, 5]);

        let latest = service.latest_per_device().await.unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[1].value, 3.0);
        assert_eq!(latest[1].unit, "");

        let overview = service.device_overview().await.unwrap();
        assert_eq!(overview[0].name, "Humidity");
    }
}
