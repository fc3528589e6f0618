// src/pipeline/build.rs

//! Site build pipeline.

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt, TryStreamExt};

use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::models::Config;
use crate::render::{Page, RenderContext, render_site};
use crate::storage::{PageEntry, SiteManifest, SiteStorage};
use crate::utils::digest::sha256_hex;

use super::sitemap::{SITEMAP_KEY, render_sitemap};

/// Per-run switches that are not part of the configuration file.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Rewrite pages even when their digest is unchanged
    pub force: bool,
}

/// What a build did.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub pages: usize,
    pub written: usize,
    pub unchanged: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BuildSummary {
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

/// Build the site with default options.
pub async fn run_build(
    config: &Config,
    catalog: &Catalog,
    storage: &dyn SiteStorage,
    now: DateTime<Utc>,
) -> Result<BuildSummary> {
    run_build_with_options(config, catalog, storage, now, &BuildOptions::default()).await
}

/// Render every page, write changed ones, then the sitemap and manifest.
///
/// `now` is the reference time for relative timestamps and the manifest's
/// `generated_at`.
pub async fn run_build_with_options(
    config: &Config,
    catalog: &Catalog,
    storage: &dyn SiteStorage,
    now: DateTime<Utc>,
    options: &BuildOptions,
) -> Result<BuildSummary> {
    let started_at = Utc::now();
    config.validate()?;
    for warning in catalog.validate()?.into_result()? {
        log::warn!("Catalog: {}", warning);
    }

    let ctx = RenderContext::new(config, catalog, now);
    let pages = render_site(&ctx)?;
    log::info!("Rendered {} pages", pages.len());

    let previous = if config.output.skip_unchanged && !options.force {
        match storage.load_manifest().await {
            Ok(manifest) => manifest,
            Err(e) => {
                log::warn!("Ignoring unreadable manifest: {}", e);
                None
            }
        }
    } else {
        None
    };
    let previous = previous.as_ref();

    let concurrency = config.output.max_concurrent_writes.max(1);
    let outcomes: Vec<(PageEntry, bool)> = stream::iter(pages.iter())
        .map(|page| async move {
            let entry = page_entry(page);
            let unchanged = match previous.and_then(|m| m.page_at(&entry.path)) {
                Some(old) if old.digest == entry.digest => storage.exists(&entry.path).await?,
                _ => false,
            };

            if unchanged {
                log::debug!("Unchanged: {}", entry.path);
            } else {
                storage.write_page(&entry.path, page.html.as_bytes()).await?;
                log::debug!("Wrote {}", entry.path);
            }
            Ok::<_, AppError>((entry, !unchanged))
        })
        .buffer_unordered(concurrency)
        .try_collect()
        .await?;

    let written = outcomes.iter().filter(|(_, wrote)| *wrote).count();
    let unchanged = outcomes.len() - written;

    // Manifest lists pages in render order.
    let mut entries: Vec<PageEntry> = outcomes.into_iter().map(|(entry, _)| entry).collect();
    entries.sort_by_key(|entry| {
        pages
            .iter()
            .position(|p| p.path == entry.path)
            .unwrap_or(usize::MAX)
    });

    if config.output.sitemap {
        let base = config.site.base_url()?;
        let xml = render_sitemap(&base, pages.iter().map(|p| p.route.as_str()), &now)?;
        storage.write_page(SITEMAP_KEY, xml.as_bytes()).await?;
        log::debug!("Wrote {}", SITEMAP_KEY);
    }

    let manifest = SiteManifest::new(config.site.name.clone(), entries, now);
    storage.write_manifest(&manifest).await?;

    let summary = BuildSummary {
        pages: pages.len(),
        written,
        unchanged,
        started_at,
        finished_at: Utc::now(),
    };
    log::info!(
        "Build complete: {} pages ({} written, {} unchanged) in {}ms",
        summary.pages,
        summary.written,
        summary.unchanged,
        summary.elapsed_ms()
    );
    Ok(summary)
}

fn page_entry(page: &Page) -> PageEntry {
    PageEntry {
        route: page.route.clone(),
        path: page.path.clone(),
        title: page.title.clone(),
        digest: sha256_hex(page.html.as_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalStorage;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 22, 10, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn test_build_writes_site() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();

        let summary = run_build(&config, &catalog, &storage, now()).await.unwrap();
        assert_eq!(summary.pages, 24);
        assert_eq!(summary.written, 24);
        assert_eq!(summary.unchanged, 0);

        assert!(tmp.path().join("index.html").exists());
        assert!(tmp.path().join("app/audit/eeat-trust/index.html").exists());
        assert!(tmp.path().join("sitemap.xml").exists());

        let manifest = storage.load_manifest().await.unwrap().unwrap();
        assert_eq!(manifest.page_count, 24);
        assert_eq!(manifest.pages[0].path, "index.html");
        assert_eq!(manifest.generated_at, now());
    }

    #[tokio::test]
    async fn test_rebuild_skips_unchanged() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();

        run_build(&config, &catalog, &storage, now()).await.unwrap();
        let again = run_build(&config, &catalog, &storage, now()).await.unwrap();
        assert_eq!(again.written, 0);
        assert_eq!(again.unchanged, 24);

        // a deleted page is rewritten even though its digest matches
        std::fs::remove_file(tmp.path().join("about/index.html")).unwrap();
        let repaired = run_build(&config, &catalog, &storage, now()).await.unwrap();
        assert_eq!(repaired.written, 1);
        assert!(tmp.path().join("about/index.html").exists());

        let forced = run_build_with_options(
            &config,
            &catalog,
            &storage,
            now(),
            &BuildOptions { force: true },
        )
        .await
        .unwrap();
        assert_eq!(forced.written, 24);
    }

    #[tokio::test]
    async fn test_build_rejects_invalid_catalog() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let config = Config::default();
        let mut catalog = Catalog::builtin().unwrap();
        let duplicate = catalog.modules[1].clone();
        catalog.modules.push(duplicate);

        let result = run_build(&config, &catalog, &storage, now()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(storage.load_manifest().await.unwrap().is_none());
        assert!(!tmp.path().join("index.html").exists());
    }

    #[tokio::test]
    async fn test_sitemap_disabled() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let mut config = Config::default();
        config.output.sitemap = false;
        let catalog = Catalog::builtin().unwrap();

        run_build(&config, &catalog, &storage, now()).await.unwrap();
        assert!(!tmp.path().join("sitemap.xml").exists());
    }
}
