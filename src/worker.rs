//! The scanning worker and the thread that runs it.

use std::io::{self, Write};
use std::thread;

use log::debug;

use crate::error::{PrimeError, Result};
use crate::prime::is_prime;

/// How primes are laid out on the output stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// `2 3 5 7 ` followed by a newline.
    #[default]
    Inline,
    /// One prime per line, then a blank line.
    Lines,
}

/// Write every prime in `2..=bound` to `out`, returning how many were written.
pub fn scan<W: Write>(bound: i64, layout: Layout, out: &mut W) -> io::Result<usize> {
    let mut count = 0;
    for i in 2..=bound {
        if is_prime(i) {
            match layout {
                Layout::Inline => write!(out, "{} ", i)?,
                Layout::Lines => writeln!(out, "{}", i)?,
            }
            count += 1;
        }
    }
    writeln!(out)?;
    out.flush()?;
    Ok(count)
}

/// Run `scan` on a dedicated thread writing to stdout, and wait for it.
///
/// The bound is moved into the worker. The only failure before the scan
/// starts is the thread failing to spawn. Returns the number of primes
/// written, or `None` when the reader closed stdout before the scan ended.
pub fn run(bound: i64, layout: Layout) -> Result<Option<usize>> {
    spawn_with(bound, layout, || io::BufWriter::new(io::stdout().lock()))
}

/// Like [`run`] but with a caller-supplied sink, built on the worker thread.
pub fn spawn_with<W, F>(bound: i64, layout: Layout, make_sink: F) -> Result<Option<usize>>
where
    W: Write,
    F: FnOnce() -> W + Send + 'static,
{
    let handle = thread::Builder::new()
        .name("prime-worker".into())
        .spawn(move || {
            debug!("worker started, bound {}", bound);
            let mut sink = make_sink();
            let res = scan(bound, layout, &mut sink);
            debug!("worker finished");
            res
        })
        .map_err(PrimeError::Spawn)?;

    match handle.join() {
        Ok(Ok(count)) => Ok(Some(count)),
        Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(None),
        Ok(Err(e)) => Err(PrimeError::Output(e)),
        Err(_) => Err(PrimeError::WorkerPanicked),
    }
}
