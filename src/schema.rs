//! Tracking schema types, loading, and event descriptor parsing.
//!
//! The schema is an OpenAPI-style YAML document whose `components.schemas`
//! entries double as tracking-event declarations: an entry is an event iff
//! its `description` contains the literal marker `Event `. Everything else
//! in the document (payload field shapes included) is opaque to this crate
//! and consumed only by the external DTO generator.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::naming::{to_case_identifier, to_payload_type_name};

/// Marker distinguishing event entries from ordinary schema types.
const EVENT_MARKER: &str = "Event ";

/// The tracking schema document.
///
/// Entry order in `components.schemas` is preserved from the source file;
/// it determines both generated case order and decode tie-break order.
#[derive(Debug, Deserialize)]
pub struct TrackingSchema {
    pub components: Components,
}

/// The `components` block of the schema document.
#[derive(Debug, Deserialize)]
pub struct Components {
    /// All schema entries keyed by name, in document order.
    pub schemas: IndexMap<String, SchemaEntry>,
}

/// One `components.schemas` entry. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct SchemaEntry {
    /// Human-readable description; carries the event marker and raw name.
    #[serde(default)]
    pub description: Option<String>,

    /// Payload field declarations. Opaque here — only presence matters.
    #[serde(default)]
    pub properties: Option<serde_yaml::Value>,
}

impl SchemaEntry {
    /// Whether this entry declares a non-empty payload.
    ///
    /// A missing `properties` key, an explicit `null`, and an empty mapping
    /// all count as "no payload".
    pub fn has_properties(&self) -> bool {
        match &self.properties {
            None | Some(serde_yaml::Value::Null) => false,
            Some(serde_yaml::Value::Mapping(mapping)) => !mapping.is_empty(),
            Some(_) => true,
        }
    }
}

/// The normalized representation of one declared event.
///
/// Descriptors are immutable and live only for the duration of a
/// generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDescriptor {
    /// Exact text extracted from the description, used verbatim as the
    /// wire discriminator. Case- and punctuation-preserving.
    pub raw_event_name: String,

    /// Normalized identifier used as the generated enum case name.
    pub case_identifier: String,

    /// PascalCase payload type reference, present iff the schema entry
    /// declared a non-empty `properties` field. Name only — the payload
    /// shape is never inspected.
    pub payload_type_name: Option<String>,
}

impl EventDescriptor {
    /// Parse a descriptor from an event description.
    ///
    /// The raw event name is the remainder after a leading `Event ` prefix;
    /// when the prefix is absent (the marker appears elsewhere in the text)
    /// or the remainder is empty, the full description is used unchanged.
    pub fn parse(description: &str, has_properties: bool) -> Self {
        let raw_event_name = match description.strip_prefix(EVENT_MARKER) {
            Some(rest) if !rest.is_empty() => rest,
            _ => description,
        };
        let case_identifier = to_case_identifier(raw_event_name);
        let payload_type_name = has_properties.then(|| to_payload_type_name(&case_identifier));
        Self {
            raw_event_name: raw_event_name.to_string(),
            case_identifier,
            payload_type_name,
        }
    }
}

/// Load a tracking schema document from disk.
pub fn load_schema(path: &Path) -> Result<TrackingSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let schema: TrackingSchema = serde_yaml::from_str(&content)?;
    Ok(schema)
}

/// Extract event descriptors from a schema, in document order.
///
/// Entries without a description, or whose description lacks the event
/// marker, are silently excluded — they are ordinary schema types, not
/// errors.
pub fn event_descriptors(schema: &TrackingSchema) -> Vec<EventDescriptor> {
    schema
        .components
        .schemas
        .values()
        .filter_map(|entry| {
            let description = entry.description.as_deref()?;
            if !description.contains(EVENT_MARKER) {
                return None;
            }
            Some(EventDescriptor::parse(description, entry.has_properties()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal schema document exercising every filtering path.
    fn minimal_schema_yaml() -> &'static str {
        r#"
components:
  schemas:
    MainScreen:
      type: object
      description: Event main_screen
    TripReportTap:
      type: object
      description: "Event trip.report:tap"
      properties:
        source:
          type: string
    BackendAudit:
      type: object
      description: Internal audit record, not tracked
    Untitled:
      type: object
"#
    }

    #[test]
    fn parse_minimal_schema() {
        let schema: TrackingSchema = serde_yaml::from_str(minimal_schema_yaml()).unwrap();
        assert_eq!(schema.components.schemas.len(), 4);
    }

    #[test]
    fn filters_to_marked_entries() {
        let schema: TrackingSchema = serde_yaml::from_str(minimal_schema_yaml()).unwrap();
        let events = event_descriptors(&schema);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].raw_event_name, "main_screen");
        assert_eq!(events[1].raw_event_name, "trip.report:tap");
    }

    #[test]
    fn descriptor_without_properties() {
        let event = EventDescriptor::parse("Event Foo", false);
        assert_eq!(event.raw_event_name, "Foo");
        assert_eq!(event.case_identifier, "foo");
        assert_eq!(event.payload_type_name, None);
    }

    #[test]
    fn descriptor_with_properties() {
        let event = EventDescriptor::parse("Event trip.report:tap", true);
        assert_eq!(event.raw_event_name, "trip.report:tap");
        assert_eq!(event.case_identifier, "trip_report_tap");
        assert_eq!(event.payload_type_name.as_deref(), Some("TripReportTap"));
    }

    #[test]
    fn marker_without_prefix_falls_back_to_full_description() {
        // Qualifies as an event (contains the marker) but the prefix match
        // fails, so the whole description becomes the raw name.
        let event = EventDescriptor::parse("Logs an Event here", false);
        assert_eq!(event.raw_event_name, "Logs an Event here");
        assert_eq!(event.case_identifier, "logs_an_event_here");
    }

    #[test]
    fn empty_remainder_falls_back_to_full_description() {
        let event = EventDescriptor::parse("Event ", false);
        assert_eq!(event.raw_event_name, "Event ");
        assert_eq!(event.case_identifier, "event_");
    }

    #[test]
    fn empty_properties_mapping_counts_as_absent() {
        let yaml = r#"
components:
  schemas:
    Sparse:
      description: Event sparse
      properties: {}
    Nulled:
      description: Event nulled
      properties: null
"#;
        let schema: TrackingSchema = serde_yaml::from_str(yaml).unwrap();
        let events = event_descriptors(&schema);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].payload_type_name, None);
        assert_eq!(events[1].payload_type_name, None);
    }

    #[test]
    fn document_order_is_preserved() {
        let yaml = r#"
components:
  schemas:
    Zulu:
      description: Event zulu
    Alpha:
      description: Event alpha
    Mike:
      description: Event mike
"#;
        let schema: TrackingSchema = serde_yaml::from_str(yaml).unwrap();
        let events = event_descriptors(&schema);
        let names: Vec<&str> = events.iter().map(|e| e.raw_event_name.as_str()).collect();
        assert_eq!(names, ["zulu", "alpha", "mike"]);
    }
}
