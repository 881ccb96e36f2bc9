//! Check that a Gnocchi resource type exists

use structopt::StructOpt;

use openstack_plugins::check::{setup_failed, CheckResult, Verdict};
use openstack_plugins::gnocchi::{Gnocchi, MetricService};
use openstack_plugins::logging::{self, Verbosity};
use openstack_plugins::openstack::{self, AuthArgs};
use openstack_plugins::{parse_args, ClientError};

const NAME: &str = "check-gnocchi-resource-type-exists";

/// Check that a resource type is defined in Gnocchi
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-gnocchi-resource-type-exists (part of openstack-plugins)",
    setting = structopt::clap::AppSettings::ColoredHelp
)]
struct Args {
    #[structopt(flatten)]
    auth: AuthArgs,
    #[structopt(long = "os-tdb-api-version", default_value = "1")]
    tdb_api_version: String,
    #[structopt(long = "resource-type", default_value = "generic")]
    resource_type: String,
    #[structopt(flatten)]
    verbosity: Verbosity,
}

fn do_check<S: MetricService>(gnocchi: &S, name: &str) -> Verdict {
    match gnocchi.resource_type(name) {
        Ok(found) => Verdict::ok(format!(
            "Found resource type \"{}\" - state: {}, attributes: {}",
            found.name,
            found.state,
            serde_json::Value::Object(found.attributes)
        )),
        Err(ClientError::NotFound(_)) => {
            Verdict::critical(format!("Failed to get resource type: {}", name))
        }
        Err(e) => Verdict::critical(format!("Unknown error appeared: {}", e)),
    }
}

fn run(args: &Args) -> Verdict {
    let session = match openstack::connect(&args.auth) {
        Ok(session) => session,
        Err(e) => return setup_failed("Gnocchi", &e),
    };
    match Gnocchi::new(&session, &args.tdb_api_version) {
        Ok(gnocchi) => do_check(&gnocchi, &args.resource_type),
        Err(e) => setup_failed("Gnocchi", &e),
    }
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args: Args = parse_args(NAME);
    logging::init(args.verbosity);
    CheckResult::timed(|| run(&args)).report(NAME);
}
