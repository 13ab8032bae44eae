//! Error types for agenda rendering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Invalid agenda window: start hour {start_hour} must be below end hour {end_hour} (both within 0..=24)")]
    InvalidWindow { start_hour: u32, end_hour: u32 },
}

pub type Result<T> = std::result::Result<T, AgendaError>;
