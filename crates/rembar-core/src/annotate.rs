//! Fold a day's events into per-slot occupancy state and glyphs.
//!
//! Each 15-minute slot tracks three 5-minute sub-intervals. An event's
//! clamped occupancy is written as begin/interior/end/isolated codes into
//! the sub-intervals it touches; a glyph lookup then renders each touched
//! slot. When two events claim the same sub-interval, the slot degrades to
//! the sticky conflict glyph `X`. Conflict is a valid annotation telling
//! the reader the slot needs manual inspection, not an error.
//!
//! The fold is pure and per-day: every [`Annotator`] owns its own state,
//! so independent days can be annotated in any order (or in parallel by
//! the caller).

use tracing::{debug, trace};

use crate::event::Event;
use crate::glyph::Glyph;
use crate::window::{AgendaWindow, SLOT_MINUTES, SUB_MINUTES};

/// Occupancy code for one 5-minute sub-interval of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubCode {
    /// Untouched by any event.
    Free,
    /// Interior to an event that neither starts nor ends here.
    Interior,
    /// An event begins here and continues beyond the slot.
    Begin,
    /// An event ends here, having started before the slot.
    End,
    /// An event both begins and ends within this sub-interval.
    Isolated,
}

/// One event's pending writes: `(slot, third, code)`.
///
/// The plan is assembled in full before it is applied, so an event that
/// overwrites its own interior code (an end falling exactly on a slot
/// boundary) resolves inside the plan and is never mistaken for a
/// cross-event conflict.
type WritePlan = Vec<(usize, usize, SubCode)>;

fn plan_set(plan: &mut WritePlan, slot: usize, third: usize, code: SubCode) {
    if let Some(entry) = plan.iter_mut().find(|(s, t, _)| *s == slot && *t == third) {
        entry.2 = code;
    } else {
        plan.push((slot, third, code));
    }
}

/// Incremental slot annotator for one day's bar.
///
/// Fold events in arrival order with [`fold`](Annotator::fold); the glyph
/// sequence is valid after every fold. All state is scratch, created fresh
/// per day and discarded after rendering.
#[derive(Debug, Clone)]
pub struct Annotator {
    window: AgendaWindow,
    codes: Vec<[SubCode; 3]>,
    conflict: Vec<bool>,
    glyphs: Vec<Glyph>,
}

impl Annotator {
    pub fn new(window: &AgendaWindow) -> Self {
        let slot_count = window.slot_count();
        Self {
            window: *window,
            codes: vec![[SubCode::Free; 3]; slot_count],
            conflict: vec![false; slot_count],
            glyphs: window.slots(),
        }
    }

    /// The bar as annotated so far.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn into_glyphs(self) -> Vec<Glyph> {
        self.glyphs
    }

    /// Fold one event into the bar.
    ///
    /// Events without a start minute are ignored. Occupancy is clamped to
    /// the window; an event with no in-window occupancy is a no-op. A
    /// zero-length event is annotated at its start point whenever that
    /// point lies within the window.
    pub fn fold(&mut self, event: &Event) {
        let Some(start) = event.start_minute else {
            return;
        };
        let duration = event.effective_duration();

        let eff_start = start.max(self.window.start_minute());
        let eff_end = (start + duration).min(self.window.end_minute());
        if eff_start > eff_end || (eff_start == eff_end && duration > 0) {
            trace!(start, duration, "event outside agenda window; skipped");
            return;
        }

        let rel_start = eff_start - self.window.start_minute();
        let rel_end = eff_end - self.window.start_minute();
        let start_slot = (rel_start / SLOT_MINUTES) as usize;
        let start_third = ((rel_start % SLOT_MINUTES) / SUB_MINUTES) as usize;
        let end_slot = (rel_end / SLOT_MINUTES) as usize;
        let end_third = ((rel_end % SLOT_MINUTES) / SUB_MINUTES) as usize;

        let mut plan: WritePlan = Vec::new();

        if start_slot == end_slot {
            if start_third == end_third {
                plan_set(&mut plan, start_slot, start_third, SubCode::Isolated);
            } else {
                plan_set(&mut plan, start_slot, start_third, SubCode::Begin);
                plan_set(&mut plan, start_slot, end_third, SubCode::End);
                if start_third == 0 && end_third == 2 {
                    // Spans the whole slot: boundaries plus implied interior.
                    plan_set(&mut plan, start_slot, 1, SubCode::Interior);
                }
            }
        } else {
            for third in start_third..3 {
                let code = if third == start_third {
                    SubCode::Begin
                } else {
                    SubCode::Interior
                };
                plan_set(&mut plan, start_slot, third, code);
            }
            for slot in start_slot + 1..end_slot {
                for third in 0..3 {
                    plan_set(&mut plan, slot, third, SubCode::Interior);
                }
            }
            match end_third {
                // Ends exactly on a slot boundary: the end marker belongs
                // to the previous slot.
                0 => plan_set(&mut plan, end_slot - 1, 2, SubCode::End),
                1 => plan_set(&mut plan, end_slot, 0, SubCode::End),
                _ => {
                    plan_set(&mut plan, end_slot, 0, SubCode::Interior);
                    plan_set(&mut plan, end_slot, 1, SubCode::End);
                }
            }
        }

        // Apply. A write onto a sub-interval another event already holds
        // degrades the slot to conflict; conflict is sticky and is never
        // cleared by later events or lookups.
        for &(slot, third, code) in &plan {
            if self.codes[slot][third] != SubCode::Free {
                self.conflict[slot] = true;
            } else {
                self.codes[slot][third] = code;
            }
        }

        if start_slot == end_slot && !self.conflict[start_slot] {
            // Tentative; the lookup below may refine it.
            self.glyphs[start_slot] = Glyph::Isolated;
        }

        for slot in start_slot..=end_slot {
            if self.conflict[slot] {
                self.glyphs[slot] = Glyph::Conflict;
            } else if let Some(glyph) = lookup(self.codes[slot]) {
                self.glyphs[slot] = glyph;
            } else if self.codes[slot] != [SubCode::Free; 3] {
                // Known gap: the table does not model this combination.
                // Keep the most recently assigned glyph.
                debug!(
                    slot,
                    codes = ?self.codes[slot],
                    "no glyph table entry; keeping previous glyph"
                );
            }
        }
    }
}

/// Annotate one day's events into a glyph sequence of `window.slot_count()`
/// entries.
///
/// Events may be empty, unsorted, and may overlap arbitrarily. The fold is
/// deterministic and hides no global state: annotating the same list twice
/// yields identical sequences.
pub fn annotate(window: &AgendaWindow, events: &[Event]) -> Vec<Glyph> {
    let mut annotator = Annotator::new(window);
    for event in events {
        annotator.fold(event);
    }
    annotator.into_glyphs()
}

/// The sub-interval triple → glyph table.
///
/// Triples not listed here keep the slot's previously assigned glyph (a
/// documented fallback for combinations the table does not model, e.g.
/// three events meeting in one slot).
fn lookup(codes: [SubCode; 3]) -> Option<Glyph> {
    use SubCode::{Begin, End, Free, Interior, Isolated};
    Some(match codes {
        [Interior, Interior, Interior] => Glyph::Interior,
        [Interior, Interior, End] => Glyph::End,
        [Begin, Interior, Interior] => Glyph::Begin,
        [Free, Begin, Interior] => Glyph::Begin,
        [Interior, End, Free] => Glyph::End,
        [Free, Free, Begin] => Glyph::Begin,
        [End, Free, Free] => Glyph::End,
        [End, Begin, Interior] => Glyph::Shared,
        [Isolated, Begin, Interior] => Glyph::Shared,
        [Interior, End, Begin] => Glyph::Shared,
        [Interior, End, Isolated] => Glyph::Shared,
        [End, Free, Begin] => Glyph::Shared,
        [Isolated, Free, Free] => Glyph::Isolated,
        [Free, Isolated, Free] => Glyph::Isolated,
        [Free, Free, Isolated] => Glyph::Isolated,
        [Free, Isolated, Begin] => Glyph::Shared,
        [End, Isolated, Free] => Glyph::Shared,
        [Begin, End, Free] => Glyph::Isolated,
        [Free, Begin, End] => Glyph::Isolated,
        [Begin, Interior, End] => Glyph::FullSlot,
        _ => return None,
    })
}
