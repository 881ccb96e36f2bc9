//! Cluster statistics from Ceph, through the `rados` command line tool
//!
//! `rados df --format=json` reports the same cluster wide figures as
//! librados' `rados_cluster_stat`, and `rados` is installed wherever a
//! client keyring is.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use structopt::StructOpt;
use tracing::debug;

use crate::threshold::Capacity;
use crate::ClientError;

#[derive(StructOpt, Debug, Clone)]
pub struct CephArgs {
    #[structopt(
        long = "ceph-config",
        default_value = "/etc/ceph/ceph.conf",
        parse(from_os_str)
    )]
    pub config: PathBuf,
    #[structopt(long = "ceph-id", help = "Client to connect as, e.g. 'admin'")]
    pub id: Option<String>,
    #[structopt(long = "ceph-keyring", parse(from_os_str))]
    pub keyring: Option<PathBuf>,
    #[structopt(
        long = "ceph-timeout",
        value_name = "SECONDS",
        help = "Give up connecting to the monitors after this many seconds"
    )]
    pub timeout: Option<u64>,
    #[structopt(
        long = "rados-bin",
        default_value = "rados",
        parse(from_os_str),
        help = "The rados executable to run"
    )]
    pub rados_bin: PathBuf,
}

/// Cluster wide usage, in kilobytes
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ClusterStats {
    #[serde(rename = "total_space", deserialize_with = "number")]
    pub kb: u64,
    #[serde(rename = "total_used", deserialize_with = "number")]
    pub kb_used: u64,
    #[serde(rename = "total_avail", deserialize_with = "number")]
    pub kb_avail: u64,
    #[serde(rename = "total_objects", deserialize_with = "number")]
    pub num_objects: u64,
}

impl ClusterStats {
    pub fn capacity(&self) -> Capacity {
        Capacity {
            total_kb: self.kb,
            used_kb: self.kb_used,
            available_kb: self.kb_avail,
        }
    }
}

/// Some releases quote the totals
fn number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

pub trait ClusterStatsSource {
    fn cluster_stats(&self) -> Result<ClusterStats, ClientError>;
}

/// Runs `rados df` against one cluster
#[derive(Debug, Clone)]
pub struct Rados {
    program: PathBuf,
    args: Vec<OsString>,
}

impl Rados {
    pub fn from_args(args: &CephArgs) -> Rados {
        let mut argv: Vec<OsString> = vec!["--conf".into(), args.config.clone().into()];
        if let Some(ref id) = args.id {
            argv.push("--id".into());
            argv.push(id.into());
        }
        if let Some(ref keyring) = args.keyring {
            argv.push("--keyring".into());
            argv.push(keyring.clone().into());
        }
        if let Some(secs) = args.timeout {
            for option in &["--client_mount_timeout", "--rados_mon_op_timeout"] {
                argv.push(option.into());
                argv.push(secs.to_string().into());
            }
        }
        argv.push("df".into());
        argv.push("--format=json".into());
        Rados {
            program: args.rados_bin.clone(),
            args: argv,
        }
    }
}

impl ClusterStatsSource for Rados {
    fn cluster_stats(&self) -> Result<ClusterStats, ClientError> {
        debug!("running {} {:?}", self.program.display(), self.args);
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| {
                ClientError::Transport(format!("cannot run {}: {}", self.program.display(), e))
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr.trim();
            return Err(ClientError::Transport(if reason.is_empty() {
                format!("{} exited with {}", self.program.display(), output.status)
            } else {
                reason.to_owned()
            }));
        }
        Ok(serde_json::from_slice(&output.stdout)?)
    }
}
