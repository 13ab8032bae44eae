//! The remind collaborator boundary.
//!
//! Runs the external `remind` command synchronously and parses its
//! line-oriented `-rls` output into per-day event lists. `# fileinfo`
//! lines carry provenance for the event line that follows them. Months are
//! slurped in blocks and further months are fetched lazily when a day
//! outside the slurped range is requested.

use std::collections::{HashMap, HashSet};
use std::process::Command;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use rembar_core::{Event, EventSource};
use tracing::debug;

/// Months slurped up front: the month before the start date plus the three
/// that follow it.
const INITIAL_MONTHS: u32 = 4;

/// Calendar data slurped from the remind command, keyed by day.
pub struct RemData {
    remind_cmd: String,
    remfile: String,
    data: HashMap<(i32, u32, u32), Vec<Event>>,
    slurped: HashSet<(i32, u32)>,
}

impl RemData {
    /// Slurp an initial block of months around `today`.
    ///
    /// # Errors
    /// Fails when the remind command cannot be run or its output cannot be
    /// parsed. There is no retry: failures here belong to the collaborator.
    pub fn new(remind_cmd: String, remfile: String, today: NaiveDate) -> Result<Self> {
        let mut data = Self {
            remind_cmd,
            remfile,
            data: HashMap::new(),
            slurped: HashSet::new(),
        };
        let (year, month) = previous_month(today.year(), today.month());
        data.slurp(year, month, INITIAL_MONTHS)?;
        Ok(data)
    }

    /// The events of one day, slurping its month on demand. `None` means
    /// the day has no reminders at all.
    pub fn day(&mut self, date: NaiveDate) -> Result<Option<&[Event]>> {
        if !self.slurped.contains(&(date.year(), date.month())) {
            self.slurp(date.year(), date.month(), 1)?;
        }
        Ok(self
            .data
            .get(&(date.year(), date.month(), date.day()))
            .map(|events| events.as_slice()))
    }

    /// `remind -n` output (the next occurrence of every reminder), sorted
    /// chronologically with dates reformatted for reading.
    pub fn next_occurrences(&self) -> Result<String> {
        let output = Command::new(&self.remind_cmd)
            .arg("-n")
            .arg(&self.remfile)
            .output()
            .with_context(|| format!("Failed to run remind command: {}", self.remind_cmd))?;
        if !output.status.success() {
            bail!(
                "remind exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        format_next_occurrences(&String::from_utf8_lossy(&output.stdout))
    }

    /// Run remind for `months` months starting at `year`/`month` and fold
    /// the output into the day map.
    fn slurp(&mut self, year: i32, month: u32, months: u32) -> Result<()> {
        let month_name = NaiveDate::from_ymd_opt(year, month, 1)
            .with_context(|| format!("Invalid slurp month: {}/{}", year, month))?
            .format("%b")
            .to_string();
        debug!(year, month, months, "slurping remind output");

        let output = Command::new(&self.remind_cmd)
            .arg("-b2")
            .arg(format!("-rls{}", months))
            .arg(&self.remfile)
            .arg(&month_name)
            .arg(year.to_string())
            .output()
            .with_context(|| format!("Failed to run remind command: {}", self.remind_cmd))?;
        if !output.status.success() {
            bail!(
                "remind exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        self.ingest(&String::from_utf8_lossy(&output.stdout))?;

        let (mut y, mut m) = (year, month);
        for _ in 0..months {
            self.slurped.insert((y, m));
            (y, m) = next_month(y, m);
        }
        Ok(())
    }

    /// Parse `remind -rls` output lines into the day map.
    fn ingest(&mut self, text: &str) -> Result<()> {
        let mut pending_source: Option<EventSource> = None;

        for line in text.lines() {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }
            if parts[0] == "REMIND" {
                bail!("Fatal error running remind command: {}", line.trim());
            }
            if parts.len() >= 4 && parts[1] == "fileinfo" {
                pending_source = Some(EventSource {
                    line: parts[2]
                        .parse()
                        .with_context(|| format!("Error parsing remind output: {}", line))?,
                    file: parts[3].to_string(),
                });
                continue;
            }
            if parts.len() < 5 {
                bail!("Error parsing remind output: {}", line);
            }

            let (year, month, day) = parse_date(parts[0])
                .with_context(|| format!("Error parsing remind output: {}", line))?;
            // parts[1] (special) and parts[2] (tag) are display-only fields
            // of the remind format and do not affect the agenda.
            let duration_raw = parts[3];
            let start_raw = parts[4];

            let start_minute = if start_raw == "*" {
                None
            } else {
                Some(start_raw.parse::<u32>().with_context(|| {
                    format!("Error parsing remind output: {}", line)
                })?)
            };
            let duration_minute = match (duration_raw, start_minute) {
                // A start-only reminder: a point event at its start minute.
                ("*", Some(_)) => Some(0),
                ("*", None) => None,
                (raw, _) => Some(raw.parse::<u32>().with_context(|| {
                    format!("Error parsing remind output: {}", line)
                })?),
            };

            self.data
                .entry((year, month, day))
                .or_default()
                .push(Event {
                    start_minute,
                    duration_minute,
                    message: parts[5..].join(" "),
                    source: pending_source.take(),
                });
        }
        Ok(())
    }
}

fn parse_date(raw: &str) -> Result<(i32, u32, u32)> {
    let mut fields = raw.split('/');
    let year = fields.next().context("missing year")?.parse()?;
    let month = fields.next().context("missing month")?.parse()?;
    let day = fields.next().context("missing day")?.parse()?;
    Ok((year, month, day))
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Sort `remind -n` lines and reformat the leading date of each.
fn format_next_occurrences(text: &str) -> Result<String> {
    let mut lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    // Y/M/D date prefixes sort lexicographically in chronological order.
    lines.sort_unstable();

    let mut formatted = Vec::with_capacity(lines.len());
    for line in lines {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let (year, month, day) = parse_date(parts[0])
            .with_context(|| format!("Error parsing remind output: {}", line))?;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .with_context(|| format!("Error parsing remind output: {}", line))?;
        formatted.push(format!(
            "{} {}",
            date.format("%a %d %b %Y"),
            parts[1..].join(" ")
        ));
    }
    Ok(formatted.join("\n"))
}
