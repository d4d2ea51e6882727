//! Event enum and envelope source generation.
//!
//! Renders two Rust source artifacts from a descriptor sequence:
//! - the event enumeration, with its discriminator table, accessors, and
//!   payload-only serialization;
//! - the `AnalyticsEvent` envelope, implementing encode and decode against
//!   the fixed wire shape.
//!
//! Rendering is pure: [`generate`] returns named artifacts and performs no
//! filesystem access; [`write_artifacts`] is the thin I/O driver. The
//! output is deterministic: identical input always produces byte-identical
//! output.
//!
//! # Wire format
//!
//! | key | type | presence |
//! |-----|------|----------|
//! | `event_type` | string | always |
//! | `custom_properties` | nested payload object | only when the event has properties |
//! | `event_timestamp` | number, seconds since epoch | always |
//!
//! Decode scans the known events in schema order and resolves the first
//! discriminator match; duplicate raw names therefore always resolve to the
//! earliest entry. Generated sources expect `serde`, `serde_json`, and
//! `thiserror` in the consuming crate, with payload types implementing
//! `Serialize`, `Deserialize`, and `Debug`.

use std::fmt::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::naming::to_module_name;
use crate::schema::EventDescriptor;

/// Name of the generated envelope type and its source file stem.
const ENVELOPE_TYPE: &str = "AnalyticsEvent";

/// A generated source file, named but not yet written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name relative to the output directory.
    pub file_name: String,
    /// Complete source text.
    pub content: String,
}

/// Render all artifacts for the given descriptor sequence.
pub fn generate(events: &[EventDescriptor], enum_name: &str) -> Vec<Artifact> {
    vec![
        Artifact {
            file_name: format!("{}.rs", to_module_name(enum_name)),
            content: generate_enum_source(events, enum_name),
        },
        Artifact {
            file_name: format!("{}.rs", to_module_name(ENVELOPE_TYPE)),
            content: generate_envelope_source(events, enum_name),
        },
    ]
}

/// Write artifacts into `output_dir`, creating directories as needed.
pub fn write_artifacts(artifacts: &[Artifact], output_dir: &Path) -> Result<()> {
    for artifact in artifacts {
        write_file(&output_dir.join(&artifact.file_name), &artifact.content)?;
    }
    Ok(())
}

// ── Event enum generation ──────────────────────────────────────────────

/// Render the event enumeration source.
pub fn generate_enum_source(events: &[EventDescriptor], enum_name: &str) -> String {
    let mut out = String::new();

    writeln!(out, "// Generated by analytics-event-gen. Do not edit.").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "use serde::ser::{{Serialize, Serializer}};").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// Analytics events declared by the tracking schema.").unwrap();
    writeln!(out, "#[allow(non_camel_case_types)]").unwrap();
    writeln!(out, "#[derive(Debug)]").unwrap();
    writeln!(out, "pub enum {enum_name} {{").unwrap();
    for event in events {
        match &event.payload_type_name {
            Some(payload) => writeln!(out, "    {}({payload}),", event.case_identifier).unwrap(),
            None => writeln!(out, "    {},", event.case_identifier).unwrap(),
        }
    }
    writeln!(out, "}}").unwrap();

    writeln!(out).unwrap();
    writeln!(
        out,
        "/// Wire discriminators for every known event, in schema order."
    )
    .unwrap();
    writeln!(out, "pub const EVENT_NAMES: &[&str] = &[").unwrap();
    for event in events {
        writeln!(out, "    \"{}\",", event.raw_event_name).unwrap();
    }
    writeln!(out, "];").unwrap();

    writeln!(out).unwrap();
    writeln!(out, "impl {enum_name} {{").unwrap();
    writeln!(
        out,
        "    /// The wire discriminator, verbatim from the schema."
    )
    .unwrap();
    writeln!(out, "    pub fn event_name(&self) -> &'static str {{").unwrap();
    writeln!(out, "        match self {{").unwrap();
    for event in events {
        writeln!(
            out,
            "            {enum_name}::{} => \"{}\",",
            case_pattern(event),
            event.raw_event_name
        )
        .unwrap();
    }
    writeln!(out, "        }}").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out).unwrap();
    writeln!(
        out,
        "    /// True when the event carries a custom-properties payload."
    )
    .unwrap();
    writeln!(out, "    pub fn has_custom_properties(&self) -> bool {{").unwrap();
    writeln!(out, "        match self {{").unwrap();
    for event in events {
        writeln!(
            out,
            "            {enum_name}::{} => {},",
            case_pattern(event),
            event.payload_type_name.is_some()
        )
        .unwrap();
    }
    writeln!(out, "        }}").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out, "}}").unwrap();

    writeln!(out).unwrap();
    writeln!(
        out,
        "/// Serializes only the payload value, flat. The envelope nests the result"
    )
    .unwrap();
    writeln!(
        out,
        "/// under `custom_properties`; the discriminator and timestamp are written"
    )
    .unwrap();
    writeln!(out, "/// by the envelope itself.").unwrap();
    writeln!(out, "impl Serialize for {enum_name} {{").unwrap();
    writeln!(
        out,
        "    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>"
    )
    .unwrap();
    writeln!(out, "    where").unwrap();
    writeln!(out, "        S: Serializer,").unwrap();
    writeln!(out, "    {{").unwrap();
    writeln!(out, "        match self {{").unwrap();
    for event in events.iter().filter(|e| e.payload_type_name.is_some()) {
        writeln!(
            out,
            "            {enum_name}::{}(dto) => dto.serialize(serializer),",
            event.case_identifier
        )
        .unwrap();
    }
    // The fallback arm is unreachable (and would not compile) when every
    // case carries a payload.
    if events.is_empty() || events.iter().any(|e| e.payload_type_name.is_none()) {
        writeln!(out, "            _ => serializer.serialize_unit(),").unwrap();
    }
    writeln!(out, "        }}").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out, "}}").unwrap();

    out
}

// ── Envelope generation ────────────────────────────────────────────────

/// Render the envelope source implementing the wire codec.
pub fn generate_envelope_source(events: &[EventDescriptor], enum_name: &str) -> String {
    let mut out = String::new();

    writeln!(out, "// Generated by analytics-event-gen. Do not edit.").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "use serde::de::{{self, Deserialize, Deserializer}};").unwrap();
    writeln!(
        out,
        "use serde::ser::{{Serialize, SerializeMap, Serializer}};"
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(
        out,
        "/// Decode failure raised by [`{ENVELOPE_TYPE}`] deserialization."
    )
    .unwrap();
    writeln!(out, "#[derive(Debug, thiserror::Error)]").unwrap();
    writeln!(out, "pub enum DecodeError {{").unwrap();
    writeln!(
        out,
        "    /// The `event_type` discriminator matched no known event."
    )
    .unwrap();
    writeln!(out, "    #[error(\"wrong JSON\")]").unwrap();
    writeln!(out, "    WrongJson,").unwrap();
    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();
    writeln!(
        out,
        "/// Wire envelope carrying one event and the moment it was recorded."
    )
    .unwrap();
    writeln!(out, "#[derive(Debug)]").unwrap();
    writeln!(out, "pub struct {ENVELOPE_TYPE} {{").unwrap();
    writeln!(out, "    /// Seconds since the Unix epoch.").unwrap();
    writeln!(out, "    pub timestamp: f64,").unwrap();
    writeln!(out, "    pub event: {enum_name},").unwrap();
    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "impl {ENVELOPE_TYPE} {{").unwrap();
    writeln!(
        out,
        "    pub fn new(timestamp: f64, event: {enum_name}) -> Self {{"
    )
    .unwrap();
    writeln!(out, "        Self {{ timestamp, event }}").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "impl Serialize for {ENVELOPE_TYPE} {{").unwrap();
    writeln!(
        out,
        "    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>"
    )
    .unwrap();
    writeln!(out, "    where").unwrap();
    writeln!(out, "        S: Serializer,").unwrap();
    writeln!(out, "    {{").unwrap();
    writeln!(out, "        let mut map = serializer.serialize_map(None)?;").unwrap();
    writeln!(
        out,
        "        map.serialize_entry(\"event_type\", self.event.event_name())?;"
    )
    .unwrap();
    writeln!(out, "        if self.event.has_custom_properties() {{").unwrap();
    writeln!(
        out,
        "            map.serialize_entry(\"custom_properties\", &self.event)?;"
    )
    .unwrap();
    writeln!(out, "        }}").unwrap();
    writeln!(
        out,
        "        map.serialize_entry(\"event_timestamp\", &self.timestamp)?;"
    )
    .unwrap();
    writeln!(out, "        map.end()").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "#[derive(serde::Deserialize)]").unwrap();
    writeln!(out, "struct Wire {{").unwrap();
    writeln!(out, "    event_type: String,").unwrap();
    writeln!(out, "    #[serde(default)]").unwrap();
    writeln!(out, "    custom_properties: Option<serde_json::Value>,").unwrap();
    writeln!(out, "    event_timestamp: f64,").unwrap();
    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "impl<'de> Deserialize<'de> for {ENVELOPE_TYPE} {{").unwrap();
    writeln!(
        out,
        "    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>"
    )
    .unwrap();
    writeln!(out, "    where").unwrap();
    writeln!(out, "        D: Deserializer<'de>,").unwrap();
    writeln!(out, "    {{").unwrap();

    if events.is_empty() {
        writeln!(out, "        let _wire = Wire::deserialize(deserializer)?;").unwrap();
        writeln!(
            out,
            "        Err(de::Error::custom(DecodeError::WrongJson))"
        )
        .unwrap();
    } else {
        writeln!(out, "        let wire = Wire::deserialize(deserializer)?;").unwrap();
        for (i, event) in events.iter().enumerate() {
            let keyword = if i == 0 { "let event = if" } else { "} else if" };
            writeln!(
                out,
                "        {keyword} wire.event_type == \"{}\" {{",
                event.raw_event_name
            )
            .unwrap();
            match &event.payload_type_name {
                Some(payload) => {
                    writeln!(
                        out,
                        "            let value = wire.custom_properties.unwrap_or(serde_json::Value::Null);"
                    )
                    .unwrap();
                    writeln!(
                        out,
                        "            let dto: {payload} = serde_json::from_value(value).map_err(de::Error::custom)?;"
                    )
                    .unwrap();
                    writeln!(out, "            {enum_name}::{}(dto)", event.case_identifier)
                        .unwrap();
                }
                None => {
                    writeln!(out, "            {enum_name}::{}", event.case_identifier).unwrap();
                }
            }
        }
        writeln!(out, "        }} else {{").unwrap();
        writeln!(
            out,
            "            return Err(de::Error::custom(DecodeError::WrongJson));"
        )
        .unwrap();
        writeln!(out, "        }};").unwrap();
        writeln!(out, "        Ok({ENVELOPE_TYPE} {{").unwrap();
        writeln!(out, "            timestamp: wire.event_timestamp,").unwrap();
        writeln!(out, "            event,").unwrap();
        writeln!(out, "        }})").unwrap();
    }

    writeln!(out, "    }}").unwrap();
    writeln!(out, "}}").unwrap();

    out
}

// ── Shared helpers ─────────────────────────────────────────────────────

/// Match pattern for one case: payload cases bind nothing but must still
/// cover the associated value.
fn case_pattern(event: &EventDescriptor) -> String {
    match &event.payload_type_name {
        Some(_) => format!("{}(_)", event.case_identifier),
        None => event.case_identifier.clone(),
    }
}

/// Write content to a file, creating parent directories as needed.
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, content).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
