//! Check how full a Ceph cluster is

use structopt::StructOpt;

use openstack_plugins::ceph::{CephArgs, ClusterStatsSource, Rados};
use openstack_plugins::check::{CheckResult, PerfDatum, Verdict};
use openstack_plugins::logging::{self, Verbosity};
use openstack_plugins::threshold::{kb_to_gb, ThresholdPolicy};
use openstack_plugins::parse_args;

const NAME: &str = "check-ceph-df";

/// Check used space of the Ceph cluster
///
/// Usage is the percentage of the cluster's total space in use. If the used
/// and available space reported by the cluster don't add up to its total the
/// check warns, whatever the usage.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-ceph-df (part of openstack-plugins)",
    setting = structopt::clap::AppSettings::ColoredHelp
)]
struct Args {
    #[structopt(flatten)]
    ceph: CephArgs,
    #[structopt(
        long = "metric-warning",
        default_value = "80",
        help = "Percent used to warn at"
    )]
    metric_warning: f64,
    #[structopt(
        long = "metric-critical",
        default_value = "90",
        help = "Percent used to go critical at"
    )]
    metric_critical: f64,
    #[structopt(flatten)]
    verbosity: Verbosity,
}

fn do_check<S: ClusterStatsSource>(ceph: &S, policy: &ThresholdPolicy) -> Verdict {
    let stats = match ceph.cluster_stats() {
        Ok(stats) => stats,
        Err(e) if e.is_transport() => {
            return Verdict::critical(format!("Failed to connect to Ceph cluster: {}", e))
        }
        Err(e) => return Verdict::critical(format!("Failed to get Ceph status: {}", e)),
    };

    let capacity = stats.capacity();
    let message = format!(
        "{:.2}Gb used out of {:.2}Gb available of total {:.2}Gb",
        kb_to_gb(capacity.used_kb),
        kb_to_gb(capacity.available_kb),
        kb_to_gb(capacity.total_kb)
    );
    let verdict = Verdict::new(policy.classify(&capacity), message);
    match capacity.percent_used() {
        Some(percent) => verdict.with_perf(
            PerfDatum::new("used", percent, "%").with_thresholds(policy.warning(), policy.critical()),
        ),
        None => verdict,
    }
}

fn policy(args: &Args) -> Result<ThresholdPolicy, CheckResult> {
    ThresholdPolicy::new(args.metric_warning, args.metric_critical)
        .map_err(|e| CheckResult::unknown(e.to_string()))
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args: Args = parse_args(NAME);
    logging::init(args.verbosity);
    let policy = match policy(&args) {
        Ok(policy) => policy,
        Err(result) => result.report(NAME),
    };
    let rados = Rados::from_args(&args.ceph);
    CheckResult::timed(|| do_check(&rados, &policy)).report(NAME);
}
