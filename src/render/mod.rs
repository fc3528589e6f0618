// src/render/mod.rs

//! Page rendering.
//!
//! Every page is a pure function of a [`RenderContext`] (and, for the audit
//! browser, a [`BrowserState`]). Renderers never touch storage; the build
//! pipeline decides what gets written where.
//!
//! ## Routes
//!
//! ```text
//! /                                  home
//! /about/                            about
//! /platform/                         platform
//! /app/dashboard/                    dashboard
//! /app/audit/                        audit browser (default module)
//! /app/audit/{module}/               audit browser (module selected)
//! /app/audit/category/{category}/    audit browser (category filter)
//! /app/audit/category/{category}/{module}/
//!                                    audit browser (filter + selection)
//! /app/architecture/                 architecture explainer
//! ```

pub mod format;
pub mod layout;
pub mod markup;
pub mod pages;
pub mod primitives;
pub mod text;
pub mod theme;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::browser::{BrowserState, CategoryFilter};
use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::models::Config;
use crate::utils::route_to_path;

/// Route constructors.
pub mod routes {
    use crate::models::ModuleCategory;

    pub const HOME: &str = "/";
    pub const ABOUT: &str = "/about/";
    pub const PLATFORM: &str = "/platform/";
    pub const DASHBOARD: &str = "/app/dashboard/";
    pub const AUDIT: &str = "/app/audit/";
    pub const ARCHITECTURE: &str = "/app/architecture/";

    pub fn audit_module(module_id: &str) -> String {
        format!("{AUDIT}{module_id}/")
    }

    pub fn audit_category(category: ModuleCategory) -> String {
        format!("{AUDIT}category/{}/", category.as_str())
    }

    pub fn audit_category_module(category: ModuleCategory, module_id: &str) -> String {
        format!("{}{module_id}/", audit_category(category))
    }
}

/// Everything a renderer may read.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub catalog: &'a Catalog,
    /// Reference time for relative timestamps
    pub now: DateTime<Utc>,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, catalog: &'a Catalog, now: DateTime<Utc>) -> Self {
        Self {
            config,
            catalog,
            now,
        }
    }
}

/// A rendered page ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub route: String,
    /// Storage key relative to the output root
    pub path: String,
    pub title: String,
    pub html: String,
}

impl Page {
    pub fn new(route: impl Into<String>, title: impl Into<String>, html: String) -> Self {
        let route = route.into();
        Self {
            path: route_to_path(&route),
            route,
            title: title.into(),
            html,
        }
    }
}

/// Render every page of the site.
pub fn render_site(ctx: &RenderContext<'_>) -> Result<Vec<Page>> {
    let catalog = ctx.catalog;
    let default_module = &ctx.config.audit.default_module;
    if catalog.module(default_module).is_none() {
        return Err(AppError::render(
            routes::AUDIT,
            format!("default module '{default_module}' is not in the catalog"),
        ));
    }

    let mut rendered = vec![
        pages::home::render(ctx),
        pages::about::render(ctx),
        pages::platform::render(ctx),
        pages::dashboard::render(ctx)?,
    ];

    let default_state = BrowserState {
        selected_module: Some(default_module.clone()),
        ..BrowserState::default()
    };
    rendered.push(pages::audit::render(ctx, &default_state, routes::AUDIT));

    for module in &catalog.modules {
        let state = BrowserState {
            selected_module: Some(module.id.clone()),
            ..BrowserState::default()
        };
        rendered.push(pages::audit::render(
            ctx,
            &state,
            &routes::audit_module(&module.id),
        ));
    }

    for category in catalog.populated_categories() {
        let state = BrowserState {
            category: CategoryFilter::Only(category),
            ..BrowserState::default()
        };
        rendered.push(pages::audit::render(
            ctx,
            &state,
            &routes::audit_category(category),
        ));

        for module in catalog.modules_in(category) {
            let state = BrowserState {
                selected_module: Some(module.id.clone()),
                category: CategoryFilter::Only(category),
                ..BrowserState::default()
            };
            rendered.push(pages::audit::render(
                ctx,
                &state,
                &routes::audit_category_module(category, &module.id),
            ));
        }
    }

    rendered.push(pages::architecture::render(ctx));

    log::debug!("Rendered {} pages", rendered.len());
    Ok(rendered)
}
