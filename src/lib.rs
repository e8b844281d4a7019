//! Print the primes up to a bound from a single worker thread.

pub mod cli;
pub mod error;
pub mod input;
pub mod prime;
pub mod worker;

pub use error::{PrimeError, Result};
pub use prime::{is_prime, primes_up_to};
pub use worker::{scan, Layout};
