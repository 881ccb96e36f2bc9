//! Check that a Ceph cluster answers, and report how many objects it holds

use structopt::StructOpt;

use openstack_plugins::ceph::{CephArgs, ClusterStatsSource, Rados};
use openstack_plugins::check::{CheckResult, Verdict};
use openstack_plugins::logging::{self, Verbosity};
use openstack_plugins::parse_args;

const NAME: &str = "check-ceph-status";

/// Check that the Ceph cluster is reachable and reports its statistics
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-ceph-status (part of openstack-plugins)",
    setting = structopt::clap::AppSettings::ColoredHelp
)]
struct Args {
    #[structopt(flatten)]
    ceph: CephArgs,
    #[structopt(flatten)]
    verbosity: Verbosity,
}

fn do_check<S: ClusterStatsSource>(ceph: &S) -> Verdict {
    match ceph.cluster_stats() {
        Ok(stats) => Verdict::ok(format!("Found total {} objects", stats.num_objects)),
        Err(e) if e.is_transport() => {
            Verdict::critical(format!("Failed to connect to Ceph cluster: {}", e))
        }
        Err(e) => Verdict::critical(format!("Failed to get Ceph status: {}", e)),
    }
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args: Args = parse_args(NAME);
    logging::init(args.verbosity);
    let rados = Rados::from_args(&args.ceph);
    CheckResult::timed(|| do_check(&rados)).report(NAME);
}

#[cfg(test)]
mod test {
    use structopt::StructOpt;

    use openstack_plugins::ceph::{ClusterStats, ClusterStatsSource};
    use openstack_plugins::{ClientError, Status};

    use super::{do_check, Args};

    struct FakeCeph(Result<ClusterStats, ClientError>);

    impl ClusterStatsSource for FakeCeph {
        fn cluster_stats(&self) -> Result<ClusterStats, ClientError> {
            self.0.clone()
        }
    }

    #[test]
    fn default_config_path() {
        let args = Args::from_iter(vec!["check-ceph-status"].into_iter());
        assert_eq!(args.ceph.config.to_str(), Some("/etc/ceph/ceph.conf"));
    }

    #[test]
    fn reports_object_count() {
        let verdict = do_check(&FakeCeph(Ok(ClusterStats {
            kb: 100,
            kb_used: 10,
            kb_avail: 90,
            num_objects: 4242,
        })));
        assert_eq!(verdict.status, Status::Ok);
        assert_eq!(verdict.message, "Found total 4242 objects");
    }

    #[test]
    fn unreachable_cluster_is_critical() {
        let verdict = do_check(&FakeCeph(Err(ClientError::Transport(
            "error connecting to the cluster".into(),
        ))));
        assert_eq!(verdict.status, Status::Critical);
        assert_eq!(
            verdict.message,
            "Failed to connect to Ceph cluster: error connecting to the cluster"
        );
    }

    #[test]
    fn bad_output_is_critical() {
        let verdict = do_check(&FakeCeph(Err(ClientError::Decode("expected value".into()))));
        assert_eq!(verdict.status, Status::Critical);
        assert_eq!(
            verdict.message,
            "Failed to get Ceph status: invalid response: expected value"
        );
    }
}
