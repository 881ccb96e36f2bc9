//! The result of running a check, and how it is reported
//!
//! A check produces a [`Verdict`] (status, message and optional performance
//! data) inside [`CheckResult::timed`], which measures how long the calls to
//! the service took whether they succeeded or not. [`CheckResult::report`]
//! prints the single line a supervisor reads and exits with the matching code.

use std::fmt;
use std::time::{Duration, Instant};

use crate::{ClientError, Status};

/// One performance data entry, rendered as `label=value[uom][;warn;crit]`
#[derive(Debug, Clone, PartialEq)]
pub struct PerfDatum {
    pub label: String,
    pub value: f64,
    pub uom: &'static str,
    pub warn: Option<f64>,
    pub crit: Option<f64>,
    /// Decimal places for `value`
    pub precision: usize,
}

impl PerfDatum {
    pub fn new<S: Into<String>>(label: S, value: f64, uom: &'static str) -> PerfDatum {
        PerfDatum {
            label: label.into(),
            value,
            uom,
            warn: None,
            crit: None,
            precision: 2,
        }
    }

    /// A plain counter, rendered without decimals
    pub fn count<S: Into<String>>(label: S, value: u64) -> PerfDatum {
        PerfDatum {
            precision: 0,
            ..PerfDatum::new(label, value as f64, "")
        }
    }

    pub fn with_thresholds(mut self, warn: f64, crit: f64) -> PerfDatum {
        self.warn = Some(warn);
        self.crit = Some(crit);
        self
    }
}

impl fmt::Display for PerfDatum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}={:.*}{}", self.label, self.precision, self.value, self.uom)?;
        if self.warn.is_some() || self.crit.is_some() {
            write!(
                f,
                ";{};{}",
                self.warn.map_or(String::new(), |w| w.to_string()),
                self.crit.map_or(String::new(), |c| c.to_string())
            )?;
        }
        Ok(())
    }
}

/// What a check decided, before timing is attached
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub status: Status,
    pub message: String,
    pub perf: Vec<PerfDatum>,
}

impl Verdict {
    pub fn new<S: Into<String>>(status: Status, message: S) -> Verdict {
        Verdict {
            status,
            message: message.into(),
            perf: Vec::new(),
        }
    }

    pub fn ok<S: Into<String>>(message: S) -> Verdict {
        Verdict::new(Status::Ok, message)
    }

    pub fn warning<S: Into<String>>(message: S) -> Verdict {
        Verdict::new(Status::Warning, message)
    }

    pub fn critical<S: Into<String>>(message: S) -> Verdict {
        Verdict::new(Status::Critical, message)
    }

    pub fn with_perf(mut self, datum: PerfDatum) -> Verdict {
        self.perf.push(datum);
        self
    }
}

/// A service client could not even be built
pub fn setup_failed(service: &str, err: &ClientError) -> Verdict {
    Verdict::critical(format!("Failed to create {} client: {}", service, err))
}

/// The full outcome of one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub verdict: Verdict,
    pub elapsed: Duration,
}

impl CheckResult {
    pub fn new(verdict: Verdict, elapsed: Duration) -> CheckResult {
        CheckResult { verdict, elapsed }
    }

    /// The check could not run at all, e.g. its arguments were invalid
    pub fn unknown<S: Into<String>>(message: S) -> CheckResult {
        CheckResult::new(Verdict::new(Status::Unknown, message), Duration::from_secs(0))
    }

    /// Run `check`, recording how long it took
    ///
    /// `check` should contain the connection and the query and nothing else.
    pub fn timed<F>(check: F) -> CheckResult
    where
        F: FnOnce() -> Verdict,
    {
        let (verdict, elapsed) = timed(check);
        CheckResult::new(verdict, elapsed)
    }

    pub fn status(&self) -> Status {
        self.verdict.status
    }

    /// The line printed for the supervisor
    pub fn line(&self, check_name: &str) -> String {
        let mut out = format!(
            "{} [{}]: {} | time={:.6}s",
            self.verdict.status,
            check_name,
            one_line(&self.verdict.message),
            self.elapsed.as_secs_f64()
        );
        for datum in &self.verdict.perf {
            out.push(' ');
            out.push_str(&datum.to_string());
        }
        out
    }

    #[cfg_attr(test, allow(dead_code))]
    pub fn report(self, check_name: &str) -> ! {
        println!("{}", self.line(check_name));
        self.verdict.status.exit()
    }
}

/// Run `f`, returning its value and the wall clock time it took
pub fn timed<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Error bodies from services routinely contain newlines and html, but
/// plugins only get one line
pub(crate) fn one_line(message: &str) -> String {
    message.split_whitespace().collect::<Vec<_>>().join(" ")
}
