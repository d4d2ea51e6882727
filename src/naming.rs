//! Derives generated-code identifiers from raw event names.
//!
//! # Derivation Table
//!
//! | input | helper | output | used as |
//! |-------|--------|--------|---------|
//! | `"trip.report:tap"` | [`to_case_identifier`] | `trip_report_tap` | enum case name |
//! | `"trip_report_tap"` | [`to_payload_type_name`] | `TripReportTap` | payload DTO reference |
//! | `"AppEvents"` | [`to_module_name`] | `app_events` | generated file name |
//!
//! The raw event name itself is never rewritten — it is kept verbatim as the
//! wire discriminator, diverging deliberately from the normalized identifier.

/// Derive an enum case identifier from a raw event name.
///
/// Replaces `:`, `.`, and ` ` with `_` and lowercases the result:
/// - `"trip.report:tap"` → `"trip_report_tap"`
/// - `"Report an accident tap"` → `"report_an_accident_tap"`
///
/// Uniqueness across a schema is assumed, not checked; colliding
/// identifiers render duplicate enum cases.
pub fn to_case_identifier(raw_event_name: &str) -> String {
    raw_event_name.replace([':', '.', ' '], "_").to_lowercase()
}

/// Derive a PascalCase payload type name from a case identifier.
///
/// Splits on `_`, capitalizes each segment's first letter, and concatenates:
/// - `"trip_report_tap"` → `"TripReportTap"`
/// - `"foo"` → `"Foo"`
pub fn to_payload_type_name(case_identifier: &str) -> String {
    case_identifier
        .split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect()
}

/// Convert a PascalCase type name to a snake_case module file stem.
///
/// - `"Events"` → `"events"`
/// - `"AppEvents"` → `"app_events"`
pub fn to_module_name(type_name: &str) -> String {
    let mut out = String::new();
    for (i, c) in type_name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
