use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrimeError>;

#[derive(Error, Debug)]
pub enum PrimeError {
    #[error("no bound given on stdin")]
    MissingInput,
    #[error("invalid bound: {0:?} is not an integer")]
    InvalidBound(String),
    #[error("failed to read stdin")]
    ReadInput(#[source] io::Error),
    #[error("failed to create thread: {}", os_code(.0))]
    Spawn(#[source] io::Error),
    #[error("worker thread panicked")]
    WorkerPanicked,
    #[error("failed to write output")]
    Output(#[source] io::Error),
}

impl PrimeError {
    /// Process exit status for this error. Input problems share clap's usage code.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrimeError::MissingInput | PrimeError::InvalidBound(_) | PrimeError::ReadInput(_) => 2,
            PrimeError::Spawn(_) | PrimeError::WorkerPanicked | PrimeError::Output(_) => 1,
        }
    }
}

fn os_code(e: &io::Error) -> String {
    match e.raw_os_error() {
        Some(code) => code.to_string(),
        None => e.to_string(),
    }
}
