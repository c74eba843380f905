//! Host entities sourced from the proxy-admin directory.

/// The alias set of a single proxy or redirect rule record.
///
/// One administrative record may cover several domain-name aliases. Membership
/// checks treat "any alias of any entry matches" as a hit. No uniqueness is
/// enforced beyond what the upstream admin system guarantees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub domain_names: Vec<String>,
}

impl HostEntry {
    pub fn new(domain_names: Vec<String>) -> Self {
        Self { domain_names }
    }

    /// The record's primary alias, used for display listings.
    pub fn primary_alias(&self) -> Option<&str> {
        self.domain_names.first().map(String::as_str)
    }
}

/// A host alias annotated with an up/down flag for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostStatus {
    pub domain: String,
    pub active: bool,
}
