//! Document shell, navigation bars and footer.

use super::markup::{Element, el};
use super::{RenderContext, routes};
use crate::utils::resolve_url;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Which navigation a page is framed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    /// Public pages: logo, one text link, dashboard button, footer
    Marketing,
    /// Dashboard pages: app navigation, no footer
    App,
}

/// Wrap page content in a complete HTML document.
pub fn document(
    ctx: &RenderContext<'_>,
    route: &str,
    title: &str,
    chrome: Chrome,
    content: Vec<Element>,
) -> String {
    let site = &ctx.config.site;
    let canonical = site.base_url().ok().map(|base| {
        el("link")
            .attr("rel", "canonical")
            .href(resolve_url(&base, route))
    });

    let head = el("head")
        .child(el("meta").attr("charset", "utf-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(
            el("meta")
                .attr("name", "description")
                .attr("content", site.tagline.as_str()),
        )
        .child(el("title").text(format!("{title} | {}", site.name)))
        .child_opt(canonical)
        .child(el("script").attr("src", TAILWIND_CDN));

    let frame = match chrome {
        Chrome::Marketing => el("div")
            .class("min-h-screen bg-white")
            .child(marketing_nav(ctx, route))
            .children(content)
            .child(footer(ctx)),
        Chrome::App => el("div")
            .class("min-h-screen bg-gray-50")
            .child(app_nav(ctx, route))
            .child(el("main").children(content)),
    };

    let html = el("html")
        .attr("lang", "en")
        .child(head)
        .child(el("body").attr("data-route", route).child(frame));

    format!("<!DOCTYPE html>\n{}\n", html.to_html())
}

fn logo(ctx: &RenderContext<'_>) -> Element {
    el("a")
        .class("logo text-2xl font-bold text-gray-900")
        .href(routes::HOME)
        .text(ctx.config.site.name.as_str())
}

/// Top bar for public pages. On the platform page the text link points home.
pub fn marketing_nav(ctx: &RenderContext<'_>, route: &str) -> Element {
    let (link_href, link_text) = if route == routes::PLATFORM {
        (routes::HOME, "Home")
    } else {
        (routes::PLATFORM, "Platform")
    };

    el("nav").class("border-b border-gray-200").child(
        el("div").class("max-w-7xl mx-auto px-6 py-4").child(
            el("div")
                .class("flex items-center justify-between")
                .child(logo(ctx))
                .child(
                    el("div")
                        .class("flex items-center gap-6")
                        .child(
                            el("a")
                                .class("text-sm font-medium text-gray-600 hover:text-gray-900")
                                .href(link_href)
                                .text(link_text),
                        )
                        .child(
                            el("a")
                                .class("px-4 py-2 bg-blue-600 text-white text-sm font-medium rounded-lg hover:bg-blue-700")
                                .href(routes::DASHBOARD)
                                .text("View Dashboard"),
                        ),
                ),
        ),
    )
}

/// Top bar for dashboard pages; the active section carries `aria-current`.
pub fn app_nav(ctx: &RenderContext<'_>, route: &str) -> Element {
    let sections = [
        (routes::DASHBOARD, "Dashboard"),
        (routes::AUDIT, "Audit"),
        (routes::ARCHITECTURE, "Architecture"),
    ];

    let links = sections.into_iter().map(|(href, label)| {
        let active = route.starts_with(href);
        let link = el("a")
            .class(if active {
                "nav-link flex items-center gap-2 text-sm font-medium text-blue-600"
            } else {
                "nav-link flex items-center gap-2 text-sm font-medium text-gray-700 hover:text-blue-600"
            })
            .href(href)
            .text(label);
        if active {
            link.attr("aria-current", "page")
        } else {
            link
        }
    });

    el("nav")
        .class("app-nav bg-white border-b border-gray-200 sticky top-0 z-50")
        .child(
            el("div").class("max-w-7xl mx-auto px-6 py-4").child(
                el("div")
                    .class("flex items-center justify-between")
                    .child(logo(ctx))
                    .child(
                        el("div")
                            .class("flex items-center gap-6")
                            .children(links)
                            .child(
                                el("a")
                                    .class("flex items-center gap-2 text-sm text-gray-600 hover:text-gray-900")
                                    .href(routes::HOME)
                                    .text("Home"),
                            ),
                    ),
            ),
        )
}

pub fn footer(ctx: &RenderContext<'_>) -> Element {
    let site = &ctx.config.site;
    el("footer").class("border-t border-gray-200 py-8 px-6").child(
        el("div")
            .class("max-w-7xl mx-auto text-center text-gray-600")
            .child(el("p").class("text-sm").text(format!(
                "© {} {}. {}.",
                site.copyright_year,
                site.name,
                site.tagline.trim_end_matches('.')
            ))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::Config;
    use chrono::Utc;

    #[test]
    fn test_document_shell() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        let ctx = RenderContext::new(&config, &catalog, Utc::now());

        let html = document(
            &ctx,
            routes::ABOUT,
            "About",
            Chrome::Marketing,
            vec![el("section").text("body")],
        );
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>About | Kasparro</title>"));
        assert!(html.contains(r#"rel="canonical""#));
        assert!(html.contains("https://kasparro.example/about/"));
        assert!(html.contains("© 2024 Kasparro. AI-Native Brand Intelligence Platform."));
    }

    #[test]
    fn test_marketing_nav_swaps_link_on_platform() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        let ctx = RenderContext::new(&config, &catalog, Utc::now());

        let home = marketing_nav(&ctx, routes::HOME).to_html();
        assert!(home.contains(">Platform</a>"));

        let platform = marketing_nav(&ctx, routes::PLATFORM).to_html();
        assert!(platform.contains(">Home</a>"));
        assert!(!platform.contains(">Platform</a>"));
    }

    #[test]
    fn test_app_nav_marks_active_section() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        let ctx = RenderContext::new(&config, &catalog, Utc::now());

        let html = app_nav(&ctx, "/app/audit/eeat-trust/").to_html();
        assert!(html.contains(r#"href="/app/audit/" aria-current="page""#));
        assert_eq!(html.matches("aria-current").count(), 1);
    }
}
