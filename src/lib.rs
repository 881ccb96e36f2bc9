//! OpenStack plugins: strongly typed monitoring checks for Ceph, Glance and
//! Gnocchi.
//!
//! Every check is a small binary in `src/bin/` that speaks the Nagios/Sensu
//! plugin protocol: one line on stdout and an exit code of 0, 1, 2 or 3 for
//! OK, WARNING, CRITICAL and UNKNOWN.
//!
//! The library holds the pieces the checks share:
//!
//! * [`Status`] and the [`check`] module, the result contract: timing,
//!   formatting and exit codes
//! * [`threshold`], percentage limits for capacity style checks
//! * [`lookup`], find a resource by id, falling back to a unique name
//! * thin clients for the services: [`openstack`] (Keystone sessions),
//!   [`glance`], [`gnocchi`] and [`ceph`]
//!
//! See the [`scripts`] module for documentation of the checks themselves.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::process;

use structopt::clap::{self, ErrorKind};
use structopt::StructOpt;

pub mod ceph;
pub mod check;
pub mod error;
pub mod glance;
pub mod gnocchi;
pub mod logging;
pub mod lookup;
pub mod openstack;
pub mod scripts;
pub mod threshold;

use crate::check::{one_line, CheckResult};
pub use crate::error::ClientError;

/// The result of a check, ordered from least to most severe
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// The process exit code a monitoring supervisor expects for this status
    pub fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    #[cfg_attr(test, allow(dead_code))]
    pub fn exit(self) -> ! {
        process::exit(self.code())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match *self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// Why the command line did not produce arguments
#[derive(Debug)]
pub enum BadArgs {
    /// `--help` or `--version` was asked for
    Info(clap::Error),
    /// Anything else, reported like any other check result
    Invalid(CheckResult),
}

/// Parse `argv`, turning invalid arguments into an UNKNOWN result
pub fn args_from<A, I>(argv: I) -> Result<A, BadArgs>
where
    A: StructOpt,
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    A::from_iter_safe(argv).map_err(|e| match e.kind {
        ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => BadArgs::Info(e),
        _ => {
            // the usage block repeats what --help says
            let text = e.message.split("USAGE:").next().unwrap_or("");
            let text = text.trim_start().trim_start_matches("error:");
            let message = match one_line(text) {
                ref m if m.is_empty() => "invalid arguments".to_owned(),
                m => m,
            };
            BadArgs::Invalid(CheckResult::unknown(message))
        }
    })
}

/// Parse the process's command line, reporting UNKNOWN if it is invalid
///
/// clap exits with 1 on bad arguments, which a supervisor would read as a
/// WARNING about the monitored service. `--help` and `--version` still exit 0.
pub fn parse_args<A: StructOpt>(check_name: &str) -> A {
    match args_from(env::args_os()) {
        Ok(args) => args,
        Err(BadArgs::Info(e)) => e.exit(),
        Err(BadArgs::Invalid(result)) => result.report(check_name),
    }
}
