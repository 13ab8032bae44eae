//! Assemble the multi-day terminal output.
//!
//! Per day: a short label plus the annotated bar, and a text summary of
//! the day's events. Across days: a centered title banner, the hour ruler
//! over the stacked bars, and the view parts in the order requested.

use chrono::NaiveDate;
use regex::Regex;
use rembar_core::{annotate, render, AgendaWindow, Event};

/// Width of the gutter holding the `DD Aaa ` day label, which the hour
/// ruler must skip to line up with the bars.
const LABEL_GUTTER: usize = 7;

/// Everything one render run needs, resolved from config and flags.
pub struct RenderOptions {
    pub window: AgendaWindow,
    pub view: String,
    pub twelve_hour: bool,
    pub fileinfo: bool,
    pub search: Option<Regex>,
}

/// One day's rendered pieces.
pub struct DayOutput {
    /// `DD Aaa <bar>` row for the free/busy view.
    pub bar_row: String,
    /// `Aaa, DD Mon:` header plus one line per (matching) event.
    pub summary: String,
    /// Whether any event matched the search (always true for a non-empty
    /// day without a search).
    pub found: bool,
}

/// Annotate and summarize one day. `events` is `None` for a day with no
/// reminders at all; the bar is still produced (entirely free).
pub fn day_output(date: NaiveDate, events: Option<&[Event]>, opts: &RenderOptions) -> DayOutput {
    let events = events.unwrap_or(&[]);
    let glyphs = annotate(&opts.window, events);
    let bar_row = format!("{} {}", date.format("%d %a"), render(&glyphs));

    let mut summary = format!("{}:\n", date.format("%a, %d %b"));
    let mut found = false;
    for event in events {
        let line = event_line(event, opts.twelve_hour);
        let matches = match &opts.search {
            Some(pattern) => pattern.is_match(&line),
            None => true,
        };
        if !matches {
            continue;
        }
        found = true;
        match (&event.source, opts.fileinfo) {
            (Some(source), true) => summary.push_str(&format!(
                "    {} [{}:{}]\n",
                line.trim_start(),
                source.file,
                source.line
            )),
            _ => summary.push_str(&format!("    {}\n", line)),
        }
    }

    DayOutput {
        bar_row,
        summary,
        found,
    }
}

/// `HH:MM - HH:MM message` for a timed event with a duration, `HH:MM
/// message` for a point event, bare message for an untimed one. Field
/// positions stay fixed, so untimed events carry extra leading spaces.
fn event_line(event: &Event, twelve_hour: bool) -> String {
    let (start, interval, end) = match event.start_minute {
        Some(start_minute) => {
            let start = format_minute(start_minute, twelve_hour);
            // A zero duration has no end to show.
            if event.effective_duration() > 0 {
                let end_minute = (start_minute + event.effective_duration()) % (24 * 60);
                (start, "-", format_minute(end_minute, twelve_hour))
            } else {
                (start, "", String::new())
            }
        }
        None => (String::new(), "", String::new()),
    };
    format!("{} {} {} {}", start, interval, end, event.message)
}

/// `HH:MM`, with the leading zero blanked on a 12-hour dial.
fn format_minute(minute: u32, twelve_hour: bool) -> String {
    let formatted = format!("{:02}:{:02}", minute / 60, minute % 60);
    if twelve_hour && formatted.starts_with('0') {
        format!(" {}", &formatted[1..])
    } else {
        formatted
    }
}

/// The banner title: one date, or a `start - end` range.
pub fn title(begin: NaiveDate, end: NaiveDate) -> String {
    if begin == end {
        format!(" {} ", begin.format("%a, %d %b %Y"))
    } else {
        format!(
            " {} - {} ",
            begin.format("%a, %d %b %Y"),
            end.format("%a, %d %b %Y")
        )
    }
}

/// Stack the per-day pieces into the final agenda text, view parts in the
/// order given, title banner once before the first part.
pub fn assemble(title: &str, days: &[DayOutput], opts: &RenderOptions) -> String {
    let agenda_width = opts.window.slot_count() + LABEL_GUTTER + 2;
    let pad = "=".repeat(agenda_width.saturating_sub(title.len()) / 2);

    let mut out = String::new();
    out.push_str(&format!("{}{}{}\n", pad, title, pad));
    for part in opts.view.chars() {
        match part {
            'f' => {
                out.push_str(&" ".repeat(LABEL_GUTTER));
                out.push_str(&opts.window.hour_ruler(opts.twelve_hour));
                out.push('\n');
                for day in days {
                    out.push_str(&day.bar_row);
                    out.push('\n');
                }
                out.push('\n');
            }
            'd' => {
                for day in days.iter().filter(|d| d.found) {
                    out.push_str(&day.summary);
                    out.push('\n');
                }
            }
            // Unknown view characters are rejected at config validation.
            _ => {}
        }
    }
    out
}

/// Search mode output: only the matching day summaries, no banner or bars.
pub fn assemble_search(days: &[DayOutput]) -> String {
    days.iter()
        .filter(|d| d.found)
        .map(|d| d.summary.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
