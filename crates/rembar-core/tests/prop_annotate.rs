//! Property-based tests for the slot annotator using proptest.
//!
//! These verify invariants that must hold for *any* window and event list,
//! not just the worked examples in `annotate_tests.rs`.

use proptest::prelude::*;
use rembar_core::{annotate, AgendaWindow, Event, Glyph};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_window() -> impl Strategy<Value = AgendaWindow> {
    (0u32..=23).prop_flat_map(|start| {
        (start + 1..=24).prop_map(move |end| {
            AgendaWindow::new(start, end).expect("strategy only builds valid windows")
        })
    })
}

/// Events with arbitrary (possibly absent) starts and durations, including
/// zero-length points and spans reaching past the window.
fn arb_event() -> impl Strategy<Value = Event> {
    (
        prop::option::of(0u32..1620),
        prop::option::of(0u32..360),
    )
        .prop_map(|(start_minute, duration_minute)| Event {
            start_minute,
            duration_minute,
            message: "event".to_string(),
            source: None,
        })
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(arb_event(), 0..8)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn conflict_slots(bar: &[Glyph]) -> Vec<usize> {
    bar.iter()
        .enumerate()
        .filter(|(_, glyph)| **glyph == Glyph::Conflict)
        .map(|(i, _)| i)
        .collect()
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: The bar always has exactly slot_count glyphs
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn bar_length_matches_slot_count(window in arb_window(), events in arb_events()) {
        prop_assert_eq!(annotate(&window, &events).len(), window.slot_count());
    }
}

// ---------------------------------------------------------------------------
// Property 2: Annotation is pure — same inputs, same bar
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn annotation_is_idempotent(window in arb_window(), events in arb_events()) {
        let first = annotate(&window, &events);
        let second = annotate(&window, &events);
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 3: A single event never conflicts or shares
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn single_event_never_conflicts(window in arb_window(), event in arb_event()) {
        let bar = annotate(&window, std::slice::from_ref(&event));
        for glyph in &bar {
            prop_assert_ne!(*glyph, Glyph::Conflict, "one event cannot conflict with itself");
            prop_assert_ne!(*glyph, Glyph::Shared, "sharing needs two events");
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Conflict slots do not depend on fold order
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn conflict_slots_are_order_independent(window in arb_window(), events in arb_events()) {
        let forward = annotate(&window, &events);

        let mut reordered = events.clone();
        reordered.reverse();
        let reversed = annotate(&window, &reordered);
        prop_assert_eq!(conflict_slots(&forward), conflict_slots(&reversed));

        if !reordered.is_empty() {
            reordered.rotate_left(1);
            let rotated = annotate(&window, &reordered);
            prop_assert_eq!(conflict_slots(&forward), conflict_slots(&rotated));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Annotation is local — slots outside an event's clamped span
// keep their initial free glyphs
// ---------------------------------------------------------------------------

/// The inclusive slot span an event occupies, mirroring the clamp rules;
/// `None` when the event never touches the window.
fn occupied_span(window: &AgendaWindow, event: &Event) -> Option<(usize, usize)> {
    let start = event.start_minute?;
    let duration = event.effective_duration();
    let eff_start = start.max(window.start_minute());
    let eff_end = (start + duration).min(window.end_minute());
    if eff_start > eff_end || (eff_start == eff_end && duration > 0) {
        return None;
    }
    let rel_start = (eff_start - window.start_minute()) as usize;
    let rel_end = (eff_end - window.start_minute()) as usize;
    Some((rel_start / 15, rel_end / 15))
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn annotation_is_local_to_the_event_span(window in arb_window(), event in arb_event()) {
        let bar = annotate(&window, std::slice::from_ref(&event));
        let initial = window.slots();
        let span = occupied_span(&window, &event);
        for (i, (got, init)) in bar.iter().zip(initial.iter()).enumerate() {
            if span.map_or(true, |(lo, hi)| i < lo || i > hi) {
                prop_assert_eq!(got, init, "slot {} outside the event span changed", i);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Unscheduled events never touch the bar
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn unscheduled_events_leave_the_bar_free(window in arb_window(), count in 0usize..6) {
        let events: Vec<Event> = (0..count)
            .map(|i| Event::unscheduled(format!("note {}", i)))
            .collect();
        prop_assert_eq!(annotate(&window, &events), window.slots());
    }
}

// ---------------------------------------------------------------------------
// Property 7: Annotation never panics, whatever the inputs
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn annotation_never_panics(window in arb_window(), events in arb_events()) {
        let _bar = annotate(&window, &events);
    }
}
