//! Check that the Glance API is responding

use structopt::StructOpt;

use openstack_plugins::check::{setup_failed, CheckResult, Verdict};
use openstack_plugins::glance::{Glance, ImageService};
use openstack_plugins::logging::{self, Verbosity};
use openstack_plugins::openstack::{self, AuthArgs};
use openstack_plugins::parse_args;

const NAME: &str = "check-glance-api";

/// Check that the Glance API is responding by listing images
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-glance-api (part of openstack-plugins)",
    setting = structopt::clap::AppSettings::ColoredHelp
)]
struct Args {
    #[structopt(flatten)]
    auth: AuthArgs,
    #[structopt(long = "os-image-api-version", default_value = "2")]
    image_api_version: String,
    #[structopt(
        long = "limit",
        name = "COUNT",
        help = "List at most this many images. Default: all of them."
    )]
    limit: Option<usize>,
    #[structopt(flatten)]
    verbosity: Verbosity,
}

fn do_check<S: ImageService>(glance: &S, limit: Option<usize>) -> Verdict {
    match glance.images(limit) {
        Ok(images) => Verdict::ok(format!("Found {} images", images.len())),
        Err(e) => Verdict::critical(format!("Failed to list images: {}", e)),
    }
}

fn run(args: &Args) -> Verdict {
    let session = match openstack::connect(&args.auth) {
        Ok(session) => session,
        Err(e) => return setup_failed("Glance", &e),
    };
    match Glance::new(&session, &args.image_api_version) {
        Ok(glance) => do_check(&glance, args.limit),
        Err(e) => setup_failed("Glance", &e),
    }
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args: Args = parse_args(NAME);
    logging::init(args.verbosity);
    CheckResult::timed(|| run(&args)).report(NAME);
}

#[cfg(test)]
mod test {
    use structopt::StructOpt;

    use openstack_plugins::glance::{Image, ImageService};
    use openstack_plugins::{ClientError, Status};

    use super::{do_check, run, Args};

    struct FakeGlance(Result<Vec<Image>, ClientError>);

    impl ImageService for FakeGlance {
        fn image(&self, id: &str) -> Result<Image, ClientError> {
            Err(ClientError::NotFound(format!("image {}", id)))
        }

        fn images(&self, limit: Option<usize>) -> Result<Vec<Image>, ClientError> {
            self.0.clone().map(|mut images| {
                if let Some(limit) = limit {
                    images.truncate(limit);
                }
                images
            })
        }
    }

    fn image(id: &str) -> Image {
        Image {
            id: id.to_owned(),
            name: None,
            status: Some("active".into()),
        }
    }

    fn build_args(extra: Vec<&str>) -> Args {
        let mut argv = vec![
            "check-glance-api",
            "--os-auth-url",
            "http://127.0.0.1:1/v3",
            "--os-username",
            "nagios",
            "--os-password",
            "secret",
            "--os-project-name",
            "monitoring",
        ];
        argv.extend(extra);
        Args::from_iter(argv.into_iter())
    }

    #[test]
    fn flags() {
        let args = build_args(vec![]);
        assert_eq!(args.image_api_version, "2");
        assert_eq!(args.limit, None);

        let args = build_args(vec!["--limit", "5", "--os-image-api-version", "2.1"]);
        assert_eq!(args.limit, Some(5));
        assert_eq!(args.image_api_version, "2.1");
    }

    #[test]
    fn counts_images() {
        let glance = FakeGlance(Ok(vec![image("a"), image("b"), image("c")]));
        let verdict = do_check(&glance, None);
        assert_eq!(verdict.status, Status::Ok);
        assert_eq!(verdict.message, "Found 3 images");

        assert_eq!(do_check(&glance, Some(1)).message, "Found 1 images");
    }

    #[test]
    fn listing_failure_is_critical() {
        let glance = FakeGlance(Err(ClientError::Api {
            status: 503,
            body: "Service Unavailable".into(),
        }));
        let verdict = do_check(&glance, None);
        assert_eq!(verdict.status, Status::Critical);
        assert_eq!(
            verdict.message,
            "Failed to list images: HTTP 503: Service Unavailable"
        );
    }

    #[test]
    fn unreachable_keystone_is_critical() {
        let verdict = run(&build_args(vec![]));
        assert_eq!(verdict.status, Status::Critical);
        assert!(
            verdict.message.starts_with("Failed to create Glance client: "),
            "{}",
            verdict.message
        );
    }
}
