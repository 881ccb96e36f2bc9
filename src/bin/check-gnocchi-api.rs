//! Check that the Gnocchi API is responding

use structopt::StructOpt;

use openstack_plugins::check::{setup_failed, CheckResult, PerfDatum, Verdict};
use openstack_plugins::gnocchi::{Gnocchi, MetricService};
use openstack_plugins::logging::{self, Verbosity};
use openstack_plugins::openstack::{self, AuthArgs};
use openstack_plugins::parse_args;

const NAME: &str = "check-gnocchi-api";

/// Check that the Gnocchi API is responding, and report its processing backlog
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-gnocchi-api (part of openstack-plugins)",
    setting = structopt::clap::AppSettings::ColoredHelp
)]
struct Args {
    #[structopt(flatten)]
    auth: AuthArgs,
    #[structopt(long = "os-tdb-api-version", default_value = "1")]
    tdb_api_version: String,
    #[structopt(flatten)]
    verbosity: Verbosity,
}

fn do_check<S: MetricService>(gnocchi: &S) -> Verdict {
    match gnocchi.status() {
        Ok(status) => {
            let summary = status.storage.summary;
            Verdict::ok(format!(
                "Time series DB status: Found {} metrics and {} measures",
                summary.metrics, summary.measures
            ))
            .with_perf(PerfDatum::count("metrics", summary.metrics))
            .with_perf(PerfDatum::count("measures", summary.measures))
        }
        Err(e) => Verdict::critical(format!("Failed to get DB status: {}", e)),
    }
}

fn run(args: &Args) -> Verdict {
    let session = match openstack::connect(&args.auth) {
        Ok(session) => session,
        Err(e) => return setup_failed("Gnocchi", &e),
    };
    match Gnocchi::new(&session, &args.tdb_api_version) {
        Ok(gnocchi) => do_check(&gnocchi),
        Err(e) => setup_failed("Gnocchi", &e),
    }
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args: Args = parse_args(NAME);
    logging::init(args.verbosity);
    CheckResult::timed(|| run(&args)).report(NAME);
}
