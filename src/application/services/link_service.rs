//! Link listing service.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service for listing the link directory.
///
/// Applies the configured ignore-list so links pointing at internal or
/// staging hosts never reach the display layer.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    ignored_domains: Vec<String>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>, ignored_domains: Vec<String>) -> Self {
        Self {
            repository,
            ignored_domains,
        }
    }

    /// Returns all displayable links.
    ///
    /// Links whose URL host appears in the ignore-list are filtered out.
    /// Links whose URL does not parse keep their place; filtering is about
    /// hiding known hosts, not validating data.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        let links = self.repository.list_all().await?;

        if self.ignored_domains.is_empty() {
            return Ok(links);
        }

        Ok(links
            .into_iter()
            .filter(|link| match link.host() {
                Some(host) => !self.ignored_domains.iter().any(|d| d == &host),
                None => true,
            })
            .collect())
    }

    /// Counts links in the directory. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;

    fn link(id: i64, url: &str) -> Link {
        Link::new(id, format!("link-{id}"), url.to_string(), String::new(), None)
    }

    #[tokio::test]
    async fn test_list_links_passthrough_without_ignore_list() {
        let mut repo = MockLinkRepository::new();
        repo.expect_list_all()
            .returning(|| Ok(vec![link(1, "https://github.com/x")]));

        let service = LinkService::new(Arc::new(repo), Vec::new());
        let links = service.list_links().await.unwrap();
        assert_eq!(links.len(), 1);
    }

    #[tokio::test]
    async fn test_list_links_filters_ignored_hosts() {
        let mut repo = MockLinkRepository::new();
        repo.expect_list_all().returning(|| {
            Ok(vec![
                link(1, "https://github.com/x"),
                link(2, "https://internal.etran.dev/admin"),
            ])
        });

        let service = LinkService::new(Arc::new(repo), vec!["internal.etran.dev".to_string()]);
        let links = service.list_links().await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].id, 1);
    }

    #[tokio::test]
    async fn test_list_links_keeps_unparseable_urls() {
        let mut repo = MockLinkRepository::new();
        repo.expect_list_all()
            .returning(|| Ok(vec![link(1, "not a url")]));

        let service = LinkService::new(Arc::new(repo), vec!["etran.dev".to_string()]);
        let links = service.list_links().await.unwrap();
        assert_eq!(links.len(), 1);
    }
}
