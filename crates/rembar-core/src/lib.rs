//! # rembar-core
//!
//! Render a day's scheduled events into a fixed-width free/busy bar: one
//! glyph per 15-minute slot of an agenda window, showing whether the slot
//! is free, occupied, spans an event boundary, or holds an overlap no
//! single glyph can represent (a conflict).
//!
//! ## Quick start
//!
//! ```rust
//! use rembar_core::{annotate, render, AgendaWindow, Event};
//!
//! let window = AgendaWindow::new(9, 12).unwrap();
//! let events = vec![Event::timed(10 * 60, 60, "standup")];
//! let bar = render(&annotate(&window, &events));
//! assert_eq!(bar, ".   [==].   .");
//! ```
//!
//! ## Modules
//!
//! - [`window`] — the agenda window (visible hour range, slot count)
//! - [`event`] — read-only event inputs
//! - [`annotate`] — the sub-interval state machine and fold
//! - [`glyph`] — the rendered glyph alphabet and legend
//! - [`error`] — error types

pub mod annotate;
pub mod error;
pub mod event;
pub mod glyph;
pub mod window;

pub use annotate::{annotate, Annotator};
pub use error::AgendaError;
pub use event::{Event, EventSource, NOMINAL_EVENT_MINUTES};
pub use glyph::{render, Glyph, LEGEND};
pub use window::AgendaWindow;
