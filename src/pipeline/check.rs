// src/pipeline/check.rs

//! Internal link checker for a built site.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::storage::{SiteManifest, SiteStorage};
use crate::utils::{internal_route, route_to_path};

const LINK_SELECTOR: &str = "a[href]";

/// A link whose target is not a page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// Storage key of the page containing the link
    pub page: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    pub pages_checked: usize,
    pub links_checked: usize,
    /// Manifest entries with no file behind them
    pub missing_pages: Vec<String>,
    pub broken: Vec<BrokenLink>,
}

impl LinkReport {
    pub fn is_ok(&self) -> bool {
        self.missing_pages.is_empty() && self.broken.is_empty()
    }
}

/// Check every internal `<a href>` of every page listed in `manifest`.
pub async fn check_links(storage: &dyn SiteStorage, manifest: &SiteManifest) -> Result<LinkReport> {
    let mut report = LinkReport::default();

    for entry in &manifest.pages {
        let Some(bytes) = storage.read_page(&entry.path).await? else {
            log::warn!("Listed page is missing: {}", entry.path);
            report.missing_pages.push(entry.path.clone());
            continue;
        };
        report.pages_checked += 1;

        let html = String::from_utf8_lossy(&bytes);
        for href in internal_links(&html)? {
            report.links_checked += 1;
            let Some(route) = internal_route(&href) else {
                continue;
            };
            if !manifest.contains_path(&route_to_path(&route)) {
                log::warn!("Broken link in {}: {}", entry.path, href);
                report.broken.push(BrokenLink {
                    page: entry.path.clone(),
                    href,
                });
            }
        }
    }

    log::info!(
        "Checked {} links across {} pages: {} broken",
        report.links_checked,
        report.pages_checked,
        report.broken.len()
    );
    Ok(report)
}

/// `href` values of anchors that point inside the site.
fn internal_links(html: &str) -> Result<Vec<String>> {
    let selector = Selector::parse(LINK_SELECTOR)
        .map_err(|e| AppError::selector(LINK_SELECTOR, format!("{e:?}")))?;
    let document = Html::parse_document(html);
    Ok(document
        .select(&selector)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| internal_route(href).is_some())
        .map(str::to_string)
        .collect())
}
