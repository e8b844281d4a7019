use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::worker::Layout;

/// Environment variable holding the env_logger filter.
pub const LOG_ENV: &str = "PRIMES_LOG";
pub const LOG_STYLE_ENV: &str = "PRIMES_LOG_STYLE";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Bound given on the command line; stdin is read when absent.
    pub bound: Option<i64>,
    pub layout: Layout,
    pub debug: bool,
}

pub fn command() -> Command {
    Command::new("prime_thread")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints the primes up to a bound from a worker thread")
        .arg(
            Arg::new("bound")
                .value_name("BOUND")
                .help("Inclusive upper bound; read from stdin when omitted")
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true),
        )
        .arg(
            Arg::new("lines")
                .short('l')
                .long("lines")
                .action(ArgAction::SetTrue)
                .help("Print one prime per line"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enable debug logging on stderr"),
        )
}

impl Options {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let layout = if matches.get_flag("lines") {
            Layout::Lines
        } else {
            Layout::Inline
        };
        Options {
            bound: matches.get_one::<i64>("bound").copied(),
            layout,
            debug: matches.get_flag("debug"),
        }
    }

    pub fn parse() -> Self {
        Self::from_matches(&command().get_matches())
    }

    /// Default log filter when `PRIMES_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "warn" }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Options {
        let matches = command()
            .try_get_matches_from(std::iter::once("prime_thread").chain(args.iter().copied()))
            .unwrap();
        Options::from_matches(&matches)
    }

    #[test]
    fn defaults() {
        let opts = parse(&[]);
        assert_eq!(opts, Options::default());
        assert_eq!(opts.default_log_filter(), "warn");
    }

    #[test]
    fn bound_and_flags() {
        let opts = parse(&["-l", "--debug", "25"]);
        assert_eq!(opts.bound, Some(25));
        assert_eq!(opts.layout, Layout::Lines);
        assert!(opts.debug);
        assert_eq!(opts.default_log_filter(), "debug");
    }

    #[test]
    fn negative_bound() {
        assert_eq!(parse(&["-4"]).bound, Some(-4));
    }

    #[test]
    fn rejects_non_numeric_bound() {
        assert!(command()
            .try_get_matches_from(["prime_thread", "many"])
            .is_err());
    }

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }
}
