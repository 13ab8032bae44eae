//! The agenda window — the clock-hour range a day's bar covers.
//!
//! A window is a pure value object: it fixes the visible time range and,
//! from it, the number of 15-minute slots in the rendered bar. It owns no
//! event data and is created once per render by the caller.

use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};
use crate::glyph::Glyph;

/// Minutes per rendered slot.
pub const SLOT_MINUTES: u32 = 15;

/// Minutes per sub-interval (a third of a slot).
pub const SUB_MINUTES: u32 = 5;

/// A day's visible time range, in whole clock hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaWindow {
    start_hour: u32,
    end_hour: u32,
}

impl AgendaWindow {
    /// Build a window from clock hours.
    ///
    /// # Errors
    /// Returns [`AgendaError::InvalidWindow`] unless
    /// `start_hour < end_hour <= 24`. An invalid window is a caller
    /// contract violation, rejected here before any annotation runs.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(AgendaError::InvalidWindow {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Minute-of-day where the window opens.
    pub fn start_minute(&self) -> u32 {
        self.start_hour * 60
    }

    /// Minute-of-day where the window closes.
    pub fn end_minute(&self) -> u32 {
        self.end_hour * 60
    }

    /// Number of slots in the bar: four per hour plus one trailing marker
    /// slot for the window's closing boundary.
    pub fn slot_count(&self) -> usize {
        ((self.end_hour - self.start_hour) * 4 + 1) as usize
    }

    /// The initial glyph sequence before any event is folded in.
    ///
    /// Slots on an hour boundary (index divisible by 4, which includes the
    /// trailing marker slot) get the hour-mark free glyph `.`; the rest get
    /// the mid-hour free glyph ` `.
    pub fn slots(&self) -> Vec<Glyph> {
        (0..self.slot_count())
            .map(|i| {
                if i % 4 == 0 {
                    Glyph::FreeHour
                } else {
                    Glyph::FreeMidHour
                }
            })
            .collect()
    }

    /// Header row with hour numbers left-aligned over each hour's four
    /// slots. Display only; not part of the annotation contract.
    ///
    /// With `twelve_hour`, hours above 12 wrap (13 → 1).
    pub fn hour_ruler(&self, twelve_hour: bool) -> String {
        let mut ruler = String::new();
        for hour in self.start_hour..=self.end_hour {
            let shown = if twelve_hour && hour > 12 {
                hour - 12
            } else {
                hour
            };
            ruler.push_str(&format!("{:<4}", shown));
        }
        ruler
    }
}
