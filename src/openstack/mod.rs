//! Keystone authentication and authenticated requests to OpenStack services
//!
//! Checks flatten [`AuthArgs`] into their own arguments and call [`connect`]
//! to get a [`Session`]: a token plus the service catalog it was issued with.
//! Service clients ([`crate::glance`], [`crate::gnocchi`]) borrow the session
//! to find their endpoint and make requests.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use reqwest::{Certificate, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use structopt::StructOpt;
use tracing::debug;
use url::Url;

use crate::ClientError;

pub mod catalog;

pub use self::catalog::{endpoint_for, Endpoint, Service};

/// How to reach and authenticate to Keystone
///
/// Every option falls back to the usual `OS_*` environment variable, so an
/// `openrc` file works unchanged.
#[derive(StructOpt, Debug, Clone)]
pub struct AuthArgs {
    #[structopt(
        long = "os-auth-url",
        env = "OS_AUTH_URL",
        help = "Keystone v3 url, e.g. https://keystone.example.com:5000/v3"
    )]
    pub auth_url: Url,
    #[structopt(long = "os-username", env = "OS_USERNAME")]
    pub username: String,
    #[structopt(long = "os-password", env = "OS_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[structopt(long = "os-project-name", env = "OS_PROJECT_NAME")]
    pub project_name: String,
    #[structopt(
        long = "os-user-domain-name",
        env = "OS_USER_DOMAIN_NAME",
        default_value = "Default"
    )]
    pub user_domain_name: String,
    #[structopt(
        long = "os-project-domain-name",
        env = "OS_PROJECT_DOMAIN_NAME",
        default_value = "Default"
    )]
    pub project_domain_name: String,
    #[structopt(long = "os-region-name", env = "OS_REGION_NAME")]
    pub region_name: Option<String>,
    #[structopt(
        long = "os-interface",
        env = "OS_INTERFACE",
        default_value = "public",
        help = "Which catalog endpoints to use: public, internal or admin"
    )]
    pub interface: String,
    #[structopt(
        long = "os-cacert",
        env = "OS_CACERT",
        parse(from_os_str),
        help = "PEM bundle to verify TLS certificates with"
    )]
    pub cacert: Option<PathBuf>,
    #[structopt(long = "insecure", help = "Do not verify TLS certificates")]
    pub insecure: bool,
    #[structopt(
        long = "os-timeout",
        value_name = "SECONDS",
        help = "Timeout for each HTTP request. Default 30."
    )]
    pub timeout: Option<u64>,
}

/// An authenticated session
#[derive(Debug, Clone)]
pub struct Session {
    http: Client,
    token: String,
    catalog: Vec<Service>,
    interface: String,
    region: Option<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: Token,
}

#[derive(Deserialize)]
struct Token {
    #[serde(default)]
    catalog: Vec<Service>,
}

/// Authenticate with a password, scoped to a project
pub fn connect(args: &AuthArgs) -> Result<Session, ClientError> {
    let http = build_client(args)?;
    let url = tokens_url(&args.auth_url)?;
    let body = json!({
        "auth": {
            "identity": {
                "methods": ["password"],
                "password": {
                    "user": {
                        "name": args.username,
                        "domain": {"name": args.user_domain_name},
                        "password": args.password,
                    }
                }
            },
            "scope": {
                "project": {
                    "name": args.project_name,
                    "domain": {"name": args.project_domain_name},
                }
            }
        }
    });

    debug!("requesting token for {} from {}", args.username, url);
    let response = http.post(url).json(&body).send()?;
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ClientError::Auth(error_text(response)));
    }
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            body: error_text(response),
        });
    }

    let token = response
        .headers()
        .get("x-subject-token")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .ok_or_else(|| ClientError::Decode("Keystone sent no X-Subject-Token header".into()))?;
    let issued: TokenResponse = response.json()?;
    debug!("token issued with {} catalog entries", issued.token.catalog.len());

    Ok(Session::new(
        http,
        token,
        issued.token.catalog,
        &args.interface,
        args.region_name.clone(),
    ))
}

fn build_client(args: &AuthArgs) -> Result<Client, ClientError> {
    let mut builder = Client::builder().danger_accept_invalid_certs(args.insecure);
    if let Some(ref path) = args.cacert {
        let pem = fs::read(path)
            .map_err(|e| ClientError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        builder = builder.add_root_certificate(Certificate::from_pem(&pem)?);
    }
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// `<auth_url>/auth/tokens`, adding the `v3` that people often leave off
fn tokens_url(auth_url: &Url) -> Result<Url, ClientError> {
    let has_version = auth_url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        == Some("v3");
    let mut segments = vec!["auth", "tokens"];
    if !has_version {
        segments.insert(0, "v3");
    }
    join_segments(auth_url, &segments)
}

/// Append escaped path segments to `base`
pub fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, ClientError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ClientError::Config(format!("{} cannot be a base url", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// The root of a versioned API under `endpoint`, always ending in a slash
///
/// Catalogs differ on whether the version is part of the endpoint, so it is
/// only added if it is missing.
pub fn versioned_url(endpoint: &Url, version: &str) -> Result<Url, ClientError> {
    let has_version = endpoint
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        == Some(version);
    if has_version {
        join_segments(endpoint, &[""])
    } else {
        join_segments(endpoint, &[version, ""])
    }
}

/// The most useful part of an error response
///
/// Keystone nests a message under `error`, Gnocchi uses `description` and
/// Glance sends plain text.
fn error_text(response: Response) -> String {
    #[derive(Deserialize)]
    struct Nested {
        message: String,
    }
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<Nested>,
        description: Option<String>,
    }

    let status = response.status();
    let text = match response.text() {
        Ok(text) => text,
        Err(e) => return format!("{} (unreadable body: {})", status, e),
    };
    match serde_json::from_str::<ErrorBody>(&text) {
        Ok(ErrorBody {
            error: Some(nested),
            ..
        }) => nested.message,
        Ok(ErrorBody {
            description: Some(description),
            ..
        }) => description,
        _ if text.trim().is_empty() => status.to_string(),
        _ => text.trim().to_owned(),
    }
}

impl Session {
    /// A session for a token obtained elsewhere
    pub fn new(
        http: Client,
        token: String,
        catalog: Vec<Service>,
        interface: &str,
        region: Option<String>,
    ) -> Session {
        Session {
            http,
            token,
            catalog,
            interface: interface.to_owned(),
            region,
        }
    }

    /// The catalog url for `service_type` on this session's interface and region
    pub fn endpoint(&self, service_type: &str) -> Result<Url, ClientError> {
        endpoint_for(
            &self.catalog,
            service_type,
            &self.interface,
            self.region.as_deref(),
        )
    }

    /// GET `url` and decode the JSON body
    ///
    /// A 404 becomes [`ClientError::NotFound`] naming `what`.
    pub fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T, ClientError> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .header("X-Auth-Token", self.token.as_str())
            .header(ACCEPT, "application/json")
            .send()?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(what.to_owned()));
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::Auth(error_text(response)));
        }
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body: error_text(response),
            });
        }
        Ok(response.json()?)
    }
}
