//! The Keystone service catalog

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::ClientError;

/// One service in the catalog, e.g. `image` or `metric`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Service {
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub interface: String,
    #[serde(default)]
    pub region_id: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    pub url: String,
}

impl Endpoint {
    fn in_region(&self, region: &str) -> bool {
        self.region_id.as_deref() == Some(region) || self.region.as_deref() == Some(region)
    }
}

/// `publicURL` is the v2 spelling of `public`, people still configure it
fn normalize_interface(interface: &str) -> &str {
    interface.trim_end_matches("URL")
}

/// Pick the url for `service_type` on `interface`, in `region` if given
pub fn endpoint_for(
    catalog: &[Service],
    service_type: &str,
    interface: &str,
    region: Option<&str>,
) -> Result<Url, ClientError> {
    let interface = normalize_interface(interface);
    let endpoint = catalog
        .iter()
        .filter(|service| service.service_type == service_type)
        .flat_map(|service| service.endpoints.iter())
        .filter(|endpoint| endpoint.interface == interface)
        .find(|endpoint| region.map_or(true, |r| endpoint.in_region(r)));

    match endpoint {
        Some(endpoint) => {
            debug!(
                "using {} endpoint {} for {}",
                interface, endpoint.url, service_type
            );
            Ok(Url::parse(&endpoint.url)?)
        }
        None => Err(ClientError::Catalog(format!(
            "no {} endpoint for service type {}{} in the service catalog",
            interface,
            service_type,
            region.map_or(String::new(), |r| format!(" in region {}", r))
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn catalog() -> Vec<Service> {
        serde_json::from_str(
            r#"[
                {
                    "type": "image",
                    "name": "glance",
                    "endpoints": [
                        {"interface": "internal", "region_id": "RegionOne", "url": "http://glance.internal:9292"},
                        {"interface": "public", "region_id": "RegionOne", "url": "https://glance.one.example.com"},
                        {"interface": "public", "region_id": "RegionTwo", "region": "RegionTwo", "url": "https://glance.two.example.com"}
                    ]
                },
                {
                    "type": "metric",
                    "name": "gnocchi",
                    "endpoints": [
                        {"interface": "public", "region_id": "RegionOne", "url": "https://gnocchi.example.com"}
                    ]
                },
                {
                    "type": "placement",
                    "name": "placement"
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn picks_by_type_and_interface() {
        let url = endpoint_for(&catalog(), "image", "internal", None).unwrap();
        assert_eq!(url.as_str(), "http://glance.internal:9292/");
    }

    #[test]
    fn region_narrows_the_choice() {
        let url = endpoint_for(&catalog(), "image", "public", Some("RegionTwo")).unwrap();
        assert_eq!(url.as_str(), "https://glance.two.example.com/");
    }

    #[test]
    fn v2_interface_names_are_accepted() {
        let url = endpoint_for(&catalog(), "metric", "publicURL", None).unwrap();
        assert_eq!(url.host_str(), Some("gnocchi.example.com"));
    }

    #[test]
    fn missing_service_is_a_catalog_error() {
        match endpoint_for(&catalog(), "metric", "admin", Some("RegionOne")) {
            Err(ClientError::Catalog(msg)) => assert_eq!(
                msg,
                "no admin endpoint for service type metric in region RegionOne in the service catalog"
            ),
            other => panic!("unexpected {:?}", other),
        }
        assert!(endpoint_for(&catalog(), "placement", "public", None).is_err());
    }
}
