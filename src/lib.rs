//! Generate a typed analytics event enum and wire envelope from a tracking schema.
//!
//! `analytics-event-gen` reads an OpenAPI-style tracking schema, filters the
//! `components.schemas` entries that declare events, and renders two Rust
//! source files: an enumeration with one case per event, and an
//! `AnalyticsEvent` envelope implementing the analytics wire codec.
//!
//! # Features
//!
//! - Filters schema entries to events by their description marker
//! - Derives stable case identifiers and payload type names from free-text
//!   event descriptions
//! - Renders a discriminator table and payload-only serialization for the enum
//! - Renders envelope encode/decode against the fixed three-field wire shape
//! - Deterministic output: byte-identical across runs
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! let schema = analytics_event_gen::schema::load_schema(Path::new("events.yaml"))?;
//! let events = analytics_event_gen::schema::event_descriptors(&schema);
//! let artifacts = analytics_event_gen::codegen::generate(&events, "Events");
//! analytics_event_gen::codegen::write_artifacts(&artifacts, Path::new("src/generated"))?;
//! # Ok::<(), analytics_event_gen::error::Error>(())
//! ```
//!
//! Payload DTO types are produced by a separate generator and referenced by
//! name only. Run this generator after the DTO generation and cleanup passes
//! so every payload type the enum references still exists.

pub mod codegen;
pub mod error;
pub mod naming;
pub mod schema;
