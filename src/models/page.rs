//! Crawl task descriptor.

/// One page to be fetched, with its distance from the crawl root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    /// Absolute URL of the page
    pub url: String,

    /// Link hops from the root page (root = 0)
    pub depth: usize,
}

impl PageDescriptor {
    /// Create a root descriptor at depth 0.
    pub fn root(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            depth: 0,
        }
    }

    /// Create a descriptor for a page discovered from this one.
    pub fn child(&self, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            depth: self.depth + 1,
        }
    }
}
