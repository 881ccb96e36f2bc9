//! Check that a Glance image exists

use structopt::StructOpt;

use openstack_plugins::check::{setup_failed, CheckResult, Verdict};
use openstack_plugins::glance::{Glance, ImageService};
use openstack_plugins::logging::{self, Verbosity};
use openstack_plugins::lookup::{find_by_id_or_name, Lookup};
use openstack_plugins::openstack::{self, AuthArgs};
use openstack_plugins::parse_args;

const NAME: &str = "check-glance-image-exists";

/// Check that an image exists in Glance
///
/// IMAGE_NAME is tried as an image id first. If there is no image with that
/// id, all images are listed and exactly one of them must have that name.
/// Several images with the name is a warning.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "check-glance-image-exists (part of openstack-plugins)",
    setting = structopt::clap::AppSettings::ColoredHelp
)]
struct Args {
    #[structopt(flatten)]
    auth: AuthArgs,
    #[structopt(long = "os-image-api-version", default_value = "2")]
    image_api_version: String,
    #[structopt(name = "IMAGE_NAME", help = "Id or name of the image")]
    image_name: String,
    #[structopt(flatten)]
    verbosity: Verbosity,
}

fn do_check<S: ImageService>(glance: &S, image_name: &str) -> Verdict {
    let lookup = find_by_id_or_name(image_name, |id| glance.image(id), || glance.images(None));
    match lookup {
        Ok(Lookup::Found(image)) => Verdict::ok(format!(
            "Found image {} with id {}",
            image.name.as_deref().unwrap_or("<unnamed>"),
            image.id
        )),
        Ok(Lookup::Missing) => {
            Verdict::critical(format!("Image named {} does not exist.", image_name))
        }
        Ok(Lookup::Ambiguous(_)) => {
            Verdict::warning(format!("Too many matches for image name {}", image_name))
        }
        Err(e) => Verdict::critical(format!("Failed to list images: {}", e)),
    }
}

fn run(args: &Args) -> Verdict {
    let session = match openstack::connect(&args.auth) {
        Ok(session) => session,
        Err(e) => return setup_failed("Glance", &e),
    };
    match Glance::new(&session, &args.image_api_version) {
        Ok(glance) => do_check(&glance, &args.image_name),
        Err(e) => setup_failed("Glance", &e),
    }
}

#[cfg_attr(test, allow(dead_code))]
fn main() {
    let args: Args = parse_args(NAME);
    logging::init(args.verbosity);
    CheckResult::timed(|| run(&args)).report(NAME);
}
