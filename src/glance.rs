//! A minimal Glance (image service) v2 client

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::lookup::Named;
use crate::openstack::{join_segments, versioned_url, Session};
use crate::ClientError;

/// Images requested per page when listing
const PAGE_SIZE: usize = 100;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Image {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Named for Image {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// The image operations the checks need
pub trait ImageService {
    /// Get one image by id
    fn image(&self, id: &str) -> Result<Image, ClientError>;
    /// List images, at most `limit` if given, otherwise all of them
    fn images(&self, limit: Option<usize>) -> Result<Vec<Image>, ClientError>;
}

#[derive(Deserialize)]
struct ImagePage {
    images: Vec<Image>,
    #[serde(default)]
    next: Option<String>,
}

/// Map `--os-image-api-version` to the url path segment
pub fn api_path(version: &str) -> Result<&'static str, ClientError> {
    match version.trim() {
        "2" | "2.0" => Ok("v2"),
        v if v.len() > 2 && v.starts_with("2.") && v[2..].chars().all(|c| c.is_ascii_digit()) => Ok("v2"),
        other => Err(ClientError::UnsupportedVersion(other.to_owned())),
    }
}

pub struct Glance<'a> {
    session: &'a Session,
    endpoint: Url,
    base: Url,
}

impl<'a> Glance<'a> {
    pub fn new(session: &'a Session, version: &str) -> Result<Glance<'a>, ClientError> {
        let path = api_path(version)?;
        let endpoint = session.endpoint("image")?;
        let base = versioned_url(&endpoint, path)?;
        Ok(Glance {
            session,
            endpoint,
            base,
        })
    }

    /// Glance's `next` links are paths relative to the endpoint, which may
    /// itself have a path (`https://cloud/image`)
    fn next_url(&self, next: &str) -> Result<Url, ClientError> {
        let root = self.endpoint.as_str().trim_end_matches('/');
        let rest = next.trim_start_matches('/');
        let root_has_version = self.base.as_str().trim_end_matches('/') == root;
        let joined = if root_has_version {
            // the endpoint already ends in /v2 and so does the link
            let unversioned = root.rsplitn(2, '/').nth(1).unwrap_or(root);
            format!("{}/{}", unversioned, rest)
        } else {
            format!("{}/{}", root, rest)
        };
        Ok(Url::parse(&joined)?)
    }
}

impl<'a> ImageService for Glance<'a> {
    fn image(&self, id: &str) -> Result<Image, ClientError> {
        let url = join_segments(&self.base, &["images", id])?;
        self.session.get_json(url, &format!("image {}", id))
    }

    fn images(&self, limit: Option<usize>) -> Result<Vec<Image>, ClientError> {
        let page_size = limit.map_or(PAGE_SIZE, |l| l.min(PAGE_SIZE).max(1));
        let mut url = join_segments(&self.base, &["images"])?;
        url.query_pairs_mut()
            .append_pair("limit", &page_size.to_string());

        let mut images = Vec::new();
        let mut fetched = HashSet::new();
        loop {
            let page: ImagePage = self.session.get_json(url.clone(), "images")?;
            fetched.insert(url);
            let empty = page.images.is_empty();
            images.extend(page.images);
            if let Some(limit) = limit {
                if images.len() >= limit {
                    images.truncate(limit);
                    break;
                }
            }
            let next = match page.next {
                Some(ref next) if !empty => self.next_url(next)?,
                _ => break,
            };
            if fetched.contains(&next) {
                warn!("image listing links back to {}, stopping", next);
                break;
            }
            url = next;
        }
        debug!("listed {} images", images.len());
        Ok(images)
    }
}
