//! Storage abstractions for the generated site.
//!
//! ## Directory Structure
//!
//! ```text
//! site/
//! ├── manifest.json         # Page list with content digests
//! ├── sitemap.xml           # One <url> per page
//! ├── index.html
//! ├── about/index.html
//! └── app/
//!     ├── dashboard/index.html
//!     └── audit/
//!         ├── index.html
//!         ├── {module}/index.html
//!         └── category/{category}/index.html
//! ```

pub mod local;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use local::LocalStorage;

/// Storage key of the manifest.
pub const MANIFEST_KEY: &str = "manifest.json";

/// One written page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub route: String,
    pub path: String,
    pub title: String,
    /// SHA-256 hex of the page bytes
    pub digest: String,
}

/// Record of the last build, written next to the pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteManifest {
    pub generated_at: DateTime<Utc>,
    pub site_name: String,
    pub page_count: usize,
    pub pages: Vec<PageEntry>,
}

impl SiteManifest {
    pub fn new(
        site_name: impl Into<String>,
        pages: Vec<PageEntry>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            generated_at,
            site_name: site_name.into(),
            page_count: pages.len(),
            pages,
        }
    }

    /// Entry stored at `path`.
    pub fn page_at(&self, path: &str) -> Option<&PageEntry> {
        self.pages.iter().find(|p| p.path == path)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.page_at(path).is_some()
    }
}

/// Trait for site storage backends.
#[async_trait]
pub trait SiteStorage: Send + Sync {
    /// Write one page (or any other site file) at `key`.
    async fn write_page(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Read a page, `None` if it was never written.
    async fn read_page(&self, key: &str) -> Result<Option<Vec<u8>>>;

    async fn exists(&self, key: &str) -> Result<bool>;

    async fn write_manifest(&self, manifest: &SiteManifest) -> Result<()>;

    /// Manifest of the previous build, if any.
    async fn load_manifest(&self) -> Result<Option<SiteManifest>>;
}
