//! Pipeline entry points for site operations.
//!
//! - `run_build`: Render every page and write it with a manifest and sitemap
//! - `run_validate`: Check configuration and catalog consistency
//! - `check_links`: Verify internal links of a built site

pub mod build;
pub mod check;
pub mod sitemap;
pub mod validate;

pub use build::{BuildOptions, BuildSummary, run_build, run_build_with_options};
pub use check::{BrokenLink, LinkReport, check_links};
pub use sitemap::{SITEMAP_KEY, render_sitemap};
pub use validate::run_validate;
