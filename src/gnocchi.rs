//! A minimal Gnocchi (time series database) v1 client

use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

use crate::openstack::{join_segments, versioned_url, Session};
use crate::ClientError;

/// The part of `GET /v1/status` the checks report on
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DbStatus {
    pub storage: Storage,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Storage {
    pub summary: Summary,
}

/// Metrics and measures waiting to be processed
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Summary {
    pub metrics: u64,
    pub measures: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ResourceType {
    pub name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

pub trait MetricService {
    fn status(&self) -> Result<DbStatus, ClientError>;
    fn resource_type(&self, name: &str) -> Result<ResourceType, ClientError>;
}

/// Map `--os-tdb-api-version` to the url path segment
pub fn api_path(version: &str) -> Result<&'static str, ClientError> {
    match version.trim() {
        "1" | "1.0" => Ok("v1"),
        other => Err(ClientError::UnsupportedVersion(other.to_owned())),
    }
}

pub struct Gnocchi<'a> {
    session: &'a Session,
    base: Url,
}

impl<'a> Gnocchi<'a> {
    pub fn new(session: &'a Session, version: &str) -> Result<Gnocchi<'a>, ClientError> {
        let path = api_path(version)?;
        let base = versioned_url(&session.endpoint("metric")?, path)?;
        Ok(Gnocchi { session, base })
    }
}

impl<'a> MetricService for Gnocchi<'a> {
    fn status(&self) -> Result<DbStatus, ClientError> {
        let url = join_segments(&self.base, &["status"])?;
        self.session.get_json(url, "status")
    }

    fn resource_type(&self, name: &str) -> Result<ResourceType, ClientError> {
        let url = join_segments(&self.base, &["resource_type", name])?;
        self.session
            .get_json(url, &format!("resource type {}", name))
    }
}

#[cfg(test)]
mod test {
    use mockito::Server;
    use serde_json::json;

    use super::*;
    use crate::openstack::test::session_for;

    #[test]
    fn status_reads_the_storage_summary() {
        let mut server = Server::new();
        let session = session_for("metric", &server.url());
        server
            .mock("GET", "/v1/status")
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"storage": {"summary": {"metrics": 12, "measures": 3400}},
                    "metricd": {"processors": ["host-1.0"], "statistics": {}}}"#,
            )
            .create();

        let gnocchi = Gnocchi::new(&session, "1").unwrap();
        assert_eq!(
            gnocchi.status().unwrap(),
            DbStatus {
                storage: Storage {
                    summary: Summary {
                        metrics: 12,
                        measures: 3400,
                    },
                },
            }
        );
    }

    #[test]
    fn resource_type_is_looked_up_by_name() {
        let mut server = Server::new();
        let session = session_for("metric", &server.url());
        server
            .mock("GET", "/v1/resource_type/instance_disk")
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"name": "instance_disk", "state": "active",
                    "attributes": {"name": {"type": "string", "required": true}}}"#,
            )
            .create();

        let gnocchi = Gnocchi::new(&session, "1").unwrap();
        let found = gnocchi.resource_type("instance_disk").unwrap();
        assert_eq!(found.name, "instance_disk");
        assert_eq!(found.state, "active");
        assert_eq!(
            Value::Object(found.attributes),
            json!({"name": {"type": "string", "required": true}})
        );
    }

    #[test]
    fn missing_resource_type_is_not_found() {
        let mut server = Server::new();
        let session = session_for("metric", &server.url());
        server
            .mock("GET", "/v1/resource_type/nope")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code": 404, "description": "Resource type nope does not exist", "title": "Not Found"}"#)
            .create();

        let gnocchi = Gnocchi::new(&session, "1").unwrap();
        assert_eq!(
            gnocchi.resource_type("nope").unwrap_err(),
            ClientError::NotFound("resource type nope".into())
        );
    }

    #[test]
    fn only_v1_is_supported() {
        assert_eq!(api_path("1"), Ok("v1"));
        assert!(api_path("2").is_err());
        let session = session_for("metric", "http://gnocchi:8041");
        assert!(Gnocchi::new(&session, "2").is_err());
    }

    #[test]
    fn missing_metric_service_is_a_catalog_error() {
        let session = session_for("image", "http://glance:9292");
        match Gnocchi::new(&session, "1") {
            Err(ClientError::Catalog(_)) => {}
            Err(e) => panic!("unexpected {:?}", e),
            Ok(_) => panic!("there is no metric service"),
        }
    }
}
