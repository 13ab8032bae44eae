//! Event inputs for annotation.
//!
//! Events are read-only: the caller (normally the remind collaborator)
//! owns them, the annotator only inspects start and duration. The message
//! and provenance ride along for display and never affect annotation.

use serde::{Deserialize, Serialize};

/// Nominal duration, in minutes, assumed for a timed event that carries no
/// explicit duration.
pub const NOMINAL_EVENT_MINUTES: u32 = 15;

/// Where an event was defined, for display in day summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSource {
    pub file: String,
    pub line: u32,
}

/// One concrete occurrence of a scheduled event on a single day.
///
/// `start_minute` is minutes since midnight; `None` means an all-day or
/// unscheduled entry, which is excluded from annotation entirely. An
/// explicit `duration_minute` of 0 is a point event and annotates the
/// sub-interval containing its start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub start_minute: Option<u32>,
    pub duration_minute: Option<u32>,
    pub message: String,
    pub source: Option<EventSource>,
}

impl Event {
    /// A timed event with an explicit duration.
    pub fn timed(start_minute: u32, duration_minute: u32, message: impl Into<String>) -> Self {
        Self {
            start_minute: Some(start_minute),
            duration_minute: Some(duration_minute),
            message: message.into(),
            source: None,
        }
    }

    /// An all-day/unscheduled entry; never touches the bar.
    pub fn unscheduled(message: impl Into<String>) -> Self {
        Self {
            start_minute: None,
            duration_minute: None,
            message: message.into(),
            source: None,
        }
    }

    /// Duration used for annotation and display when the event has a start.
    pub fn effective_duration(&self) -> u32 {
        self.duration_minute.unwrap_or(NOMINAL_EVENT_MINUTES)
    }
}
