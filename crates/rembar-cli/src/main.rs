//! `rembar` CLI — free/busy agenda bars and daily agendas for remind
//! schedules.
//!
//! ## Usage
//!
//! ```sh
//! # One day's bar and agenda for the default 6..22 window
//! rembar -r ~/.reminders
//!
//! # A week of bars only, on a 7..21 window
//! rembar -r work.rem -d 7 -v f --agenda-start-hour 7 --agenda-end-hour 21
//!
//! # Case-insensitive search over the next 30 days
//! rembar -r work.rem -d 30 -s dentist
//!
//! # Next occurrence of every reminder
//! rembar -r work.rem -n
//!
//! # The free/busy marker legend
//! rembar -m
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use clap::Parser;
use regex::RegexBuilder;
use rembar_core::{AgendaWindow, LEGEND};
use tracing_subscriber::EnvFilter;

mod config;
mod remdata;
mod render;

use config::Config;
use remdata::RemData;
use render::{assemble, assemble_search, day_output, title, DayOutput, RenderOptions};

#[derive(Parser)]
#[command(
    name = "rembar",
    version,
    about = "Render remind schedules as free/busy agenda bars",
    after_long_help = LEGEND
)]
struct Cli {
    /// Name of the remind binary (overrides config; default /usr/bin/remind)
    #[arg(long)]
    remind: Option<String>,

    /// Name of the Remfile to parse
    #[arg(short, long, required_unless_present = "markerinfo")]
    remfile: Option<String>,

    /// Starting date (default: today)
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    begin: Option<NaiveDate>,

    /// Number of days to display/search
    #[arg(short, long)]
    days: Option<u32>,

    /// Hour in day agenda starts
    #[arg(long)]
    agenda_start_hour: Option<u32>,

    /// Hour in day agenda ends
    #[arg(long)]
    agenda_end_hour: Option<u32>,

    /// View [f]ree/busy schedule and/or [d]aily agenda
    #[arg(short, long)]
    view: Option<String>,

    /// Search for a pattern (case-insensitive regex) within DAYS
    #[arg(short, long)]
    search: Option<String>,

    /// Append file name and line number information
    #[arg(short, long)]
    fileinfo: bool,

    /// List the next occurrence of each reminder (ignores other options)
    #[arg(short, long)]
    next_occurrences: bool,

    /// Show the free/busy marker legend and exit
    #[arg(short, long)]
    markerinfo: bool,

    /// Display clock times on a twelve hour dial
    #[arg(long)]
    twelve_hour: bool,

    /// Path of the config file (default: ~/.rembar.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.markerinfo {
        print!("{}", LEGEND);
        return Ok(());
    }

    // Config file first, command-line flags on top, then validate the
    // merged result once.
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    if let Some(remind) = cli.remind {
        config.remind = remind;
    }
    if let Some(hour) = cli.agenda_start_hour {
        config.agenda_start_hour = hour;
    }
    if let Some(hour) = cli.agenda_end_hour {
        config.agenda_end_hour = hour;
    }
    if let Some(days) = cli.days {
        config.days = days;
    }
    if let Some(view) = cli.view {
        config.view = view;
    }
    if cli.twelve_hour {
        config.twelve_hour = true;
    }
    config.validate()?;

    let remfile = cli.remfile.context("--remfile is required")?;
    let today = Local::now().date_naive();
    let mut remdata = RemData::new(config.remind.clone(), remfile, today)?;

    if cli.next_occurrences {
        println!("{}", remdata.next_occurrences()?);
        return Ok(());
    }

    let window = AgendaWindow::new(config.agenda_start_hour, config.agenda_end_hour)?;
    let search = cli
        .search
        .as_deref()
        .filter(|pattern| !pattern.is_empty())
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
        })
        .transpose()
        .context("Invalid search pattern")?;
    let opts = RenderOptions {
        window,
        view: config.view.clone(),
        twelve_hour: config.twelve_hour,
        fileinfo: cli.fileinfo,
        search,
    };

    let begin = cli.begin.unwrap_or(today);
    let mut days: Vec<DayOutput> = Vec::with_capacity(config.days as usize);
    let mut date = begin;
    for _ in 0..config.days {
        let events = remdata.day(date)?;
        days.push(day_output(date, events, &opts));
        date = date.succ_opt().context("Date out of range")?;
    }
    let end = begin + Duration::days(i64::from(config.days) - 1);

    if opts.search.is_some() {
        print!("{}", assemble_search(&days));
    } else {
        print!("{}", assemble(&title(begin, end), &days, &opts));
    }
    Ok(())
}
