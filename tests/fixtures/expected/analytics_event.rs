// Generated by analytics-event-gen. Do not edit.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Decode failure raised by [`AnalyticsEvent`] deserialization.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The `event_type` discriminator matched no known event.
    #[error("wrong JSON")]
    WrongJson,
}

/// Wire envelope carrying one event and the moment it was recorded.
#[derive(Debug)]
pub struct AnalyticsEvent {
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    pub event: Events,
}

impl AnalyticsEvent {
    pub fn new(timestamp: f64, event: Events) -> Self {
        Self { timestamp, event }
    }
}

impl Serialize for AnalyticsEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("event_type", self.event.event_name())?;
        if self.event.has_custom_properties() {
            map.serialize_entry("custom_properties", &self.event)?;
        }
        map.serialize_entry("event_timestamp", &self.timestamp)?;
        map.end()
    }
}

#[derive(serde::Deserialize)]
struct Wire {
    event_type: String,
    #[serde(default)]
    custom_properties: Option<serde_json::Value>,
    event_timestamp: f64,
}

impl<'de> Deserialize<'de> for AnalyticsEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = Wire::deserialize(deserializer)?;
        let event = if wire.event_type == "main_screen" {
            Events::main_screen
        } else if wire.event_type == "trip.report:tap" {
            let value = wire.custom_properties.unwrap_or(serde_json::Value::Null);
            let dto: TripReportTap = serde_json::from_value(value).map_err(de::Error::custom)?;
            Events::trip_report_tap(dto)
        } else if wire.event_type == "Report an accident tap" {
            let value = wire.custom_properties.unwrap_or(serde_json::Value::Null);
            let dto: ReportAnAccidentTap = serde_json::from_value(value).map_err(de::Error::custom)?;
            Events::report_an_accident_tap(dto)
        } else {
            return Err(de::Error::custom(DecodeError::WrongJson));
        };
        Ok(AnalyticsEvent {
            timestamp: wire.event_timestamp,
            event,
        })
    }
}
