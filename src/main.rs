use std::io;
use std::process;

use anyhow::Context;
use log::{debug, info};

use prime_thread::cli::{Options, LOG_ENV, LOG_STYLE_ENV};
use prime_thread::{input, worker, PrimeError};

fn run(opts: &Options) -> anyhow::Result<()> {
    let bound = match opts.bound {
        Some(b) => {
            debug!("bound {} from command line", b);
            b
        }
        None => input::read_bound(io::stdin().lock()).context("reading bound")?,
    };

    match worker::run(bound, opts.layout)? {
        Some(count) => info!("printed {} primes up to {}", count, bound),
        None => debug!("stdout closed before the scan finished"),
    }
    Ok(())
}

fn main() {
    let opts = Options::parse();

    let env = env_logger::Env::new()
        .filter_or(LOG_ENV, opts.default_log_filter())
        .write_style(LOG_STYLE_ENV);
    env_logger::init_from_env(env);
    info!("options: {:?}", opts);

    if let Err(err) = run(&opts) {
        let prime_err = err.downcast_ref::<PrimeError>();
        match prime_err {
            // Matches the plain diagnostic of the exercise.
            Some(PrimeError::Spawn(_)) => eprintln!("{}", err),
            _ => eprintln!("[error] {:#}", err),
        }
        process::exit(prime_err.map_or(1, PrimeError::exit_code));
    }
}
