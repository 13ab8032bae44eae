//! Tests for the agenda window value object.

use rembar_core::{render, AgendaWindow, Glyph};

#[test]
fn slot_count_is_four_per_hour_plus_trailing_marker() {
    // (end - start) * 4 + 1, for the reference CLI default and others.
    assert_eq!(AgendaWindow::new(6, 22).unwrap().slot_count(), 65);
    assert_eq!(AgendaWindow::new(7, 21).unwrap().slot_count(), 57);
    assert_eq!(AgendaWindow::new(0, 24).unwrap().slot_count(), 97);
    assert_eq!(AgendaWindow::new(9, 10).unwrap().slot_count(), 5);
}

#[test]
fn initial_slots_alternate_hour_marks_and_mid_hour_blanks() {
    let window = AgendaWindow::new(9, 11).unwrap();
    let slots = window.slots();

    assert_eq!(slots.len(), window.slot_count());
    for (i, glyph) in slots.iter().enumerate() {
        if i % 4 == 0 {
            assert_eq!(*glyph, Glyph::FreeHour, "slot {} is an hour boundary", i);
        } else {
            assert_eq!(*glyph, Glyph::FreeMidHour, "slot {} is mid-hour", i);
        }
    }
    // The trailing marker slot is always the hour mark.
    assert_eq!(*slots.last().unwrap(), Glyph::FreeHour);
    assert_eq!(render(&slots), ".   .   .");
}

#[test]
fn invalid_windows_are_rejected() {
    assert!(AgendaWindow::new(10, 10).is_err(), "empty window");
    assert!(AgendaWindow::new(12, 8).is_err(), "inverted window");
    assert!(AgendaWindow::new(0, 25).is_err(), "end beyond midnight");
}

#[test]
fn window_minute_bounds() {
    let window = AgendaWindow::new(7, 21).unwrap();
    assert_eq!(window.start_minute(), 420);
    assert_eq!(window.end_minute(), 1260);
}

#[test]
fn hour_ruler_left_aligns_hours_on_four_column_stops() {
    let window = AgendaWindow::new(7, 10).unwrap();
    assert_eq!(window.hour_ruler(false), "7   8   9   10  ");
}

#[test]
fn hour_ruler_wraps_past_noon_on_a_twelve_hour_dial() {
    let window = AgendaWindow::new(10, 14).unwrap();
    assert_eq!(window.hour_ruler(true), "10  11  12  1   2   ");
    assert_eq!(window.hour_ruler(false), "10  11  12  13  14  ");
}
