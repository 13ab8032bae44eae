//! The rendered glyph alphabet.
//!
//! One glyph per 15-minute slot. The legend is an externally visible
//! contract (scripts parse these characters), so the alphabet must stay
//! stable:
//!
//! - `[` / `]` — a boundary where one event occupies more than 5 minutes
//!   of the slot without fully filling it
//! - `*` — an isolated short event entirely inside the slot
//! - `#` — an event exactly filling one 15-minute slot
//! - `+` — two different events share the slot without conflict
//! - `=` — slot fully interior to one ongoing event
//! - `X` — conflict: the slot's 15 minutes cannot represent all occupying
//!   events unambiguously
//! - `.` — free at an hour boundary
//! - ` ` — free mid-hour

use std::fmt;

use serde::{Deserialize, Serialize};

/// The display character for one slot of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    /// Free slot on an hour boundary.
    FreeHour,
    /// Free slot mid-hour.
    FreeMidHour,
    /// An event begins and ends within this slot, under 15 minutes.
    Isolated,
    /// An event exactly fills this 15-minute slot.
    FullSlot,
    /// An event begins in this slot and continues past it.
    Begin,
    /// An event ends in this slot, having started before it.
    End,
    /// Two events share the slot without conflict.
    Shared,
    /// Slot is interior to one ongoing event.
    Interior,
    /// Two events overlap in a way one glyph cannot represent.
    Conflict,
}

impl Glyph {
    pub const fn as_char(self) -> char {
        match self {
            Glyph::FreeHour => '.',
            Glyph::FreeMidHour => ' ',
            Glyph::Isolated => '*',
            Glyph::FullSlot => '#',
            Glyph::Begin => '[',
            Glyph::End => ']',
            Glyph::Shared => '+',
            Glyph::Interior => '=',
            Glyph::Conflict => 'X',
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Render a glyph sequence as the bar string shown to the user.
pub fn render(glyphs: &[Glyph]) -> String {
    glyphs.iter().map(|g| g.as_char()).collect()
}

/// The documented free/busy marker legend, printed by the CLI's `-m` flag.
pub const LEGEND: &str = "\
Only one event uses any of the 15 minute slot:
    [   begin an event taking any portion of this slot and lasting
        more than 15 minutes
    ]   end an event taking any portion of this slot and lasting
        more than 15 minutes
    *   event begins and ends within this slot and lasts less than 15
        minutes
    #   event begins and ends within this slot and lasts 15 minutes

Two events use parts of the 15 minute slot but there is no conflict:
    +   end an event and begin an event sharing this slot

Two events use parts of the 15 minute slot and there is a conflict:
    X   minutes taken by ending event and minutes taken by beginning
        event add up to more than 15.

Free slots:
    .   free at an hour boundary
        free mid-hour (blank)
";
