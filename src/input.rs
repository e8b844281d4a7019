use std::io::BufRead;

use log::debug;

use crate::error::{PrimeError, Result};

/// Parse a single bound token. Surrounding whitespace is ignored.
pub fn parse_bound(token: &str) -> Result<i64> {
    let token = token.trim();
    token
        .parse::<i64>()
        .map_err(|_| PrimeError::InvalidBound(token.to_string()))
}

/// Read the first whitespace-delimited token from `reader` and parse it.
///
/// Blank lines are skipped and reading stops at the first line holding a
/// token, so an interactive stdin does not need to be closed. Anything after
/// that token is never read.
pub fn read_bound<R: BufRead>(reader: R) -> Result<i64> {
    for line in reader.lines() {
        let line = line.map_err(PrimeError::ReadInput)?;
        if let Some(token) = line.split_whitespace().next() {
            debug!("read bound token {:?} from stdin", token);
            return parse_bound(token);
        }
    }
    Err(PrimeError::MissingInput)
}
