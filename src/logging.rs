//! Diagnostic logging
//!
//! stdout belongs to the plugin protocol, so logs only ever go to stderr.

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(StructOpt, Debug, Clone, Copy, Default)]
pub struct Verbosity {
    #[structopt(
        short = "v",
        long = "verbose",
        parse(from_occurrences),
        help = "Log what the check is doing to stderr. Repeat for more detail."
    )]
    pub verbose: u8,
}

impl Verbosity {
    fn directive(self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Install the stderr subscriber
///
/// `-v` flags win over `RUST_LOG`, which wins over the default of warnings only.
pub fn init(verbosity: Verbosity) {
    let filter = if verbosity.verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()))
    } else {
        EnvFilter::new(verbosity.directive())
    };
    // a second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod test {
    use structopt::StructOpt;

    use super::Verbosity;

    #[test]
    fn repeated_flags_raise_the_level() {
        let levels: Vec<&str> = [
            vec!["check"],
            vec!["check", "-v"],
            vec!["check", "-vv"],
            vec!["check", "-v", "-v", "-v"],
        ]
        .iter()
        .map(|argv| Verbosity::from_iter(argv.iter()).directive())
        .collect();
        assert_eq!(levels, vec!["warn", "debug", "trace", "trace"]);
    }

    #[test]
    fn init_twice_is_harmless() {
        super::init(Verbosity { verbose: 2 });
        super::init(Verbosity::default());
    }
}
