// src/pipeline/sitemap.rs

//! `sitemap.xml` generation.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use url::Url;

use crate::error::Result;
use crate::render::markup::html_escape;

/// Storage key of the sitemap.
pub const SITEMAP_KEY: &str = "sitemap.xml";

/// Sitemap with one `<url>` per route, resolved against `base`.
pub fn render_sitemap<'r>(
    base: &Url,
    routes: impl IntoIterator<Item = &'r str>,
    lastmod: &DateTime<Utc>,
) -> Result<String> {
    let lastmod = lastmod.format("%Y-%m-%d");
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for route in routes {
        let loc = base.join(route.trim_start_matches('/'))?;
        let _ = writeln!(
            out,
            "  <url><loc>{}</loc><lastmod>{lastmod}</lastmod></url>",
            html_escape(loc.as_str())
        );
    }
    out.push_str("</urlset>\n");
    Ok(out)
}
