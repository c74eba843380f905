//! Link entity representing one directory entry.

use sqlx::FromRow;
use url::Url;

/// A single entry of the link directory.
///
/// Links are read-only from this service's point of view: the table is
/// curated externally and fetched wholesale for display.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Link {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub description: String,
    pub icon: Option<String>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        title: String,
        url: String,
        description: String,
        icon: Option<String>,
    ) -> Self {
        Self {
            id,
            title,
            url,
            description,
            icon,
        }
    }

    /// Returns the hostname of the link's URL, if it parses as one.
    pub fn host(&self) -> Option<String> {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }
}
