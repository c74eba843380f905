//! DTOs for the link listing endpoint.

use serde::Serialize;

use crate::domain::entities::Link;

/// JSON representation of a directory link.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl From<Link> for LinkItem {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            title: link.title,
            url: link.url,
            description: link.description,
            icon: link.icon,
        }
    }
}

/// Per-link availability flag, keyed by the link's URL.
#[derive(Debug, Serialize)]
pub struct LinkActiveItem {
    pub link: String,
    pub active: bool,
}

/// Response for `GET /api/links`.
///
/// The `linksActive` key keeps the wire name the front end already consumes.
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub success: bool,
    pub links: Vec<LinkItem>,
    #[serde(rename = "linksActive")]
    pub links_active: Vec<LinkActiveItem>,
}
