// Generated by analytics-event-gen. Do not edit.

use serde::ser::{Serialize, Serializer};

/// Analytics events declared by the tracking schema.
#[allow(non_camel_case_types)]
#[derive(Debug)]
pub enum Events {
    main_screen,
    trip_report_tap(TripReportTap),
    report_an_accident_tap(ReportAnAccidentTap),
}

/// Wire discriminators for every known event, in schema order.
pub const EVENT_NAMES: &[&str] = &[
    "main_screen",
    "trip.report:tap",
    "Report an accident tap",
];

impl Events {
    /// The wire discriminator, verbatim from the schema.
    pub fn event_name(&self) -> &'static str {
        match self {
            Events::main_screen => "main_screen",
            Events::trip_report_tap(_) => "trip.report:tap",
            Events::report_an_accident_tap(_) => "Report an accident tap",
        }
    }

    /// True when the event carries a custom-properties payload.
    pub fn has_custom_properties(&self) -> bool {
        match self {
            Events::main_screen => false,
            Events::trip_report_tap(_) => true,
            Events::report_an_accident_tap(_) => true,
        }
    }
}

/// Serializes only the payload value, flat. The envelope nests the result
/// under `custom_properties`; the discriminator and timestamp are written
/// by the envelope itself.
impl Serialize for Events {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Events::trip_report_tap(dto) => dto.serialize(serializer),
            Events::report_an_accident_tap(dto) => dto.serialize(serializer),
            _ => serializer.serialize_unit(),
        }
    }
}
