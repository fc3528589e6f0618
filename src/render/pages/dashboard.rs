//! Dashboard: headline scores for the tracked brand.

use crate::error::{AppError, Result};
use crate::models::{ColorTag, ModuleIcon};
use crate::render::format::format_relative_time;
use crate::render::layout::{Chrome, document};
use crate::render::markup::{Element, el};
use crate::render::primitives::{ScoreCard, info_item, score_card};
use crate::render::{Page, RenderContext, routes};

pub fn render(ctx: &RenderContext<'_>) -> Result<Page> {
    let catalog = ctx.catalog;
    let data = &catalog.dashboard;
    let brand = catalog.dashboard_brand().ok_or_else(|| {
        AppError::render(
            routes::DASHBOARD,
            format!("dashboard brand '{}' is not in the catalog", data.brand_id),
        )
    })?;

    let brand_picker = el("select")
        .class("brand-picker text-sm font-medium text-gray-700 bg-transparent border-none outline-none cursor-pointer")
        .attr("name", "brand")
        .attr("aria-label", "Brand")
        .children(catalog.brands.iter().map(|b| {
            el("option")
                .attr("value", b.id.as_str())
                .flag("selected", b.id == brand.id)
                .text(b.name.as_str())
        }));

    let header = el("div")
        .class("mb-8")
        .child(
            el("div")
                .class("flex items-center justify-between mb-2")
                .child(el("h1").class("text-3xl font-bold text-gray-900").text("Dashboard"))
                .child(
                    el("div")
                        .class("px-4 py-2 bg-white border border-gray-200 rounded-lg")
                        .child(brand_picker),
                ),
        )
        .child(el("p").class("last-audit text-gray-600").text(format!(
            "Last audit: {}",
            format_relative_time(&data.last_audit, &ctx.now)
        )));

    let cards = [
        ScoreCard {
            label: "AI Visibility Score",
            icon: ModuleIcon::Eye.glyph(),
            score: data.visibility_score,
            trend: data.trends.visibility,
            accent: ColorTag::Blue,
            subtitle: None,
        },
        ScoreCard {
            label: "Trust Score (E-E-A-T)",
            icon: ModuleIcon::Shield.glyph(),
            score: data.trust_score,
            trend: data.trends.trust,
            accent: ColorTag::Green,
            subtitle: None,
        },
        ScoreCard {
            label: "Keyword Coverage",
            icon: "◎",
            score: data.keyword_coverage,
            trend: data.trends.keywords,
            accent: ColorTag::Purple,
            subtitle: Some(format!(
                "{} of {} keywords",
                data.covered_keywords, data.total_keywords
            )),
        },
    ];

    let quick_actions = el("div")
        .class("quick-actions bg-white rounded-xl border border-gray-200 p-6")
        .child(el("h2").class("text-lg font-semibold text-gray-900 mb-4").text("Quick Actions"))
        .child(
            el("div")
                .class("grid grid-cols-1 md:grid-cols-2 gap-4")
                .child(action_link(
                    routes::AUDIT,
                    "View Detailed Audit",
                    "Explore module-by-module analysis",
                ))
                .child(action_link(
                    routes::ARCHITECTURE,
                    "System Architecture",
                    &format!("Understand how {} analyzes your brand", ctx.config.site.name),
                )),
        );

    let brand_info = el("div")
        .class("brand-info mt-8 bg-white rounded-xl border border-gray-200 p-6")
        .child(el("h2").class("text-lg font-semibold text-gray-900 mb-4").text("Brand Information"))
        .child(
            el("div")
                .class("grid grid-cols-2 md:grid-cols-4 gap-4")
                .child(info_item("Domain", &brand.domain))
                .child(info_item("Industry", &brand.industry))
                .child(info_item("Total Keywords", &data.total_keywords.to_string()))
                .child(info_item(
                    "Platforms Tracked",
                    &ctx.config.audit.platforms_tracked.to_string(),
                )),
        );

    let content = vec![el("div").class("p-8").child(
        el("div")
            .class("max-w-7xl mx-auto")
            .child(header)
            .child(
                el("div")
                    .class("scores grid grid-cols-1 md:grid-cols-3 gap-6 mb-8")
                    .children(cards.iter().map(score_card)),
            )
            .child(quick_actions)
            .child(brand_info),
    )];

    let html = document(ctx, routes::DASHBOARD, "Dashboard", Chrome::App, content);
    Ok(Page::new(routes::DASHBOARD, "Dashboard", html))
}

fn action_link(href: &str, title: &str, description: &str) -> Element {
    el("a")
        .class("action block p-4 border border-gray-200 rounded-lg hover:border-blue-500 hover:bg-blue-50")
        .href(href)
        .child(el("h3").class("font-semibold text-gray-900 mb-1").text(format!("{title} →")))
        .child(el("p").class("text-sm text-gray-600").text(description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::Config;
    use chrono::{DateTime, TimeZone, Utc};
    use scraper::{Html, Selector};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 20, 15, 30, 0).unwrap()
    }

    #[test]
    fn test_dashboard_scores() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        let ctx = RenderContext::new(&config, &catalog, now());

        let page = render(&ctx).unwrap();
        assert_eq!(page.path, "app/dashboard/index.html");

        let doc = Html::parse_document(&page.html);
        let values = Selector::parse(".score-card .score-value").unwrap();
        let scores: Vec<String> = doc
            .select(&values)
            .map(|v| v.text().collect::<String>())
            .collect();
        assert_eq!(scores, vec!["87", "92", "67"]);

        assert!(page.html.contains("157 of 234 keywords"));
        assert!(page.html.contains("Last audit: 5 hours ago"));
        assert!(page.html.contains("acmecorp.com"));

        let selected = Selector::parse("select.brand-picker option[selected]").unwrap();
        let picked: Vec<_> = doc.select(&selected).collect();
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].value().attr("value"), Some("brand-1"));
    }

    #[test]
    fn test_platforms_tracked_from_config() {
        let mut config = Config::default();
        config.audit.platforms_tracked = 9;
        let catalog = Catalog::builtin().unwrap();
        let ctx = RenderContext::new(&config, &catalog, now());

        let html = render(&ctx).unwrap().html;
        assert!(html.contains("Platforms Tracked</p><p class=\"font-semibold text-gray-900\">9</p>"));
    }

    #[test]
    fn test_missing_brand_is_render_error() {
        let config = Config::default();
        let mut catalog = Catalog::builtin().unwrap();
        catalog.dashboard.brand_id = "brand-404".to_string();
        let ctx = RenderContext::new(&config, &catalog, now());

        let err = render(&ctx).unwrap_err();
        assert!(err.to_string().contains("brand-404"));
    }
}
