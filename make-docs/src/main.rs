//! Regenerate `src/scripts.rs` from the `--help` of every check
//!
//! Run from the repository root after `cargo build`:
//!
//! ```plain
//! cargo run -p make-docs > src/scripts.rs
//! ```

use std::process::{self, Command};

struct Check {
    name: &'static str,
    about: &'static str,
}

const CHECKS: &[Check] = &[
    Check {
        name: "check-ceph-status",
        about: "Requires the `rados` tool and a client keyring for the cluster.",
    },
    Check {
        name: "check-ceph-df",
        about: "Requires the `rados` tool and a client keyring for the cluster.",
    },
    Check {
        name: "check-glance-api",
        about: "Requires Keystone credentials, usually from an openrc file.",
    },
    Check {
        name: "check-glance-image-exists",
        about: "Requires Keystone credentials, usually from an openrc file.",
    },
    Check {
        name: "check-gnocchi-api",
        about: "Requires Keystone credentials, usually from an openrc file.",
    },
    Check {
        name: "check-gnocchi-resource-type-exists",
        about: "Requires Keystone credentials, usually from an openrc file.",
    },
];

fn main() {
    let preamble = "Documentation about the various scripts contained herein\n";

    let mut out: String = cp(preamble.split('\n'));
    out.push('\n');
    out.push_str(&cp(CHECKS.iter().map(|c| format!("- [{0}](#{0})", c.name))));
    out.push('\n');
    for check in CHECKS {
        out.push_str(&format!(
            "\
//!
//! # {0}
//!
//! {1}
//!
//! ```plain
//! $ {0} --help
",
            check.name, check.about
        ));
        match help_text(check.name) {
            Ok(help) => out.push_str(&cp(help.split('\n'))),
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
        out.push_str("\n//! ```\n");
    }
    out.push('\n');
    print!("{}", out);
}

fn help_text(name: &str) -> Result<String, String> {
    let output = Command::new(format!("target/debug/{}", name))
        .arg("--help")
        .env("TERM", "dumb")
        .output()
        .map_err(|e| format!("Couldn't execute command {}: {}", name, e))?;
    String::from_utf8(output.stdout)
        .map_err(|e| format!("Couldn't convert command {} help to utf8: {}", name, e))
}

/// Comment each line in the iterator
fn cp<S: AsRef<str>, I: Iterator<Item = S>>(s: I) -> String {
    s.map(|s| format!("//! {}", s.as_ref()))
        .map(|s| s.trim().into())
        .collect::<Vec<String>>()
        .join("\n")
}
