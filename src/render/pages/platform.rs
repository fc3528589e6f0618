//! Platform overview: data flow, module deep dive and deliverables.

use crate::render::layout::{Chrome, document};
use crate::render::markup::{Element, el};
use crate::render::primitives::{call_to_action, module_detail_card};
use crate::render::theme::accent_classes;
use crate::render::{Page, RenderContext, routes};
use super::section_title;

const DELIVERABLES: [(&str, &str); 3] = [
    (
        "Comprehensive Scores",
        "Quantified metrics across AI visibility, trust, content quality, and technical signals",
    ),
    (
        "Detailed Insights",
        "Deep analysis of how AI models perceive and represent your brand across platforms",
    ),
    (
        "Actionable Recommendations",
        "Prioritized action items with estimated impact to improve AI brand perception",
    ),
];

pub fn render(ctx: &RenderContext<'_>) -> Page {
    let catalog = ctx.catalog;

    let flow_cards = catalog.architecture.stages.iter().map(|stage| {
        el("div")
            .class("flow-card bg-white p-6 rounded-xl border-2 border-gray-200 text-center hover:shadow-lg")
            .attr("data-stage-id", stage.id.as_str())
            .child(
                el("div")
                    .class(format!("inline-flex p-4 rounded-lg mb-4 {}", accent_classes(stage.color)))
                    .text(stage.name.chars().next().map(String::from).unwrap_or_default()),
            )
            .child(el("h3").class("text-lg font-semibold text-gray-900 mb-2").text(stage.name.as_str()))
            .child(el("p").class("text-sm text-gray-600").text(stage.summary.as_str()))
    });

    let content = vec![
        el("section").class("hero pt-16 pb-12 px-6").child(
            el("div")
                .class("max-w-7xl mx-auto text-center")
                .child(el("h1").class("text-5xl font-bold text-gray-900 mb-6").text("The Platform"))
                .child(
                    el("p")
                        .class("text-xl text-gray-600 max-w-3xl mx-auto")
                        .text("A comprehensive AI-native intelligence system that analyzes how AI models understand, represent, and communicate about your brand."),
                ),
        ),
        el("section").class("py-16 bg-gray-50 px-6").child(
            el("div")
                .class("max-w-7xl mx-auto")
                .child(section_title(&format!(
                    "How Data Flows Through {}",
                    ctx.config.site.name
                )))
                .child(
                    el("div")
                        .class("flow grid md:grid-cols-4 gap-6 max-w-6xl mx-auto")
                        .children(flow_cards),
                )
                .child(
                    el("div").class("mt-8 text-center").child(
                        el("a")
                            .class("inline-flex items-center gap-2 text-blue-600 font-semibold hover:text-blue-700")
                            .href(routes::ARCHITECTURE)
                            .text("View Detailed Architecture →"),
                    ),
                ),
        ),
        el("section").class("py-16 px-6").child(
            el("div")
                .class("max-w-7xl mx-auto")
                .child(section_title(&format!(
                    "{} Specialized Analysis Modules",
                    catalog.modules.len()
                )))
                .child(
                    el("div").class("module-details space-y-6").children(
                        catalog.modules.iter().enumerate().map(|(i, module)| {
                            module_detail_card(module, i + 1, &routes::audit_module(&module.id))
                        }),
                    ),
                ),
        ),
        deliverables(),
        call_to_action(
            "See the Platform in Action",
            "Explore a live dashboard with real audit data and insights",
            routes::DASHBOARD,
            "View Dashboard",
        ),
    ];

    let html = document(ctx, routes::PLATFORM, "Platform", Chrome::Marketing, content);
    Page::new(routes::PLATFORM, "Platform", html)
}

fn deliverables() -> Element {
    el("section").class("py-16 bg-gray-50 px-6").child(
        el("div")
            .class("max-w-7xl mx-auto")
            .child(section_title("What You Get"))
            .child(
                el("div")
                    .class("grid md:grid-cols-3 gap-8")
                    .children(DELIVERABLES.iter().map(|(title, text)| {
                        el("div")
                            .class("bg-white p-6 rounded-xl border border-gray-200")
                            .child(el("h3").class("text-lg font-semibold text-gray-900 mb-2").text(*title))
                            .child(el("p").class("text-gray-600").text(*text))
                    })),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::Config;
    use chrono::Utc;
    use scraper::{Html, Selector};

    #[test]
    fn test_platform_numbers_modules_in_order() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        let ctx = RenderContext::new(&config, &catalog, Utc::now());

        let page = render(&ctx);
        let doc = Html::parse_document(&page.html);

        let cards = Selector::parse(".module-details .module-detail").unwrap();
        let ids: Vec<_> = doc
            .select(&cards)
            .filter_map(|c| c.value().attr("data-module-id"))
            .collect();
        let expected: Vec<_> = catalog.modules.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, expected);

        assert!(page.html.contains("Module 1"));
        assert!(page.html.contains("Module 7"));
        assert!(page.html.contains(r#"href="/app/audit/ai-visibility/""#));

        let flow = Selector::parse(".flow .flow-card").unwrap();
        assert_eq!(doc.select(&flow).count(), 4);
    }

    #[test]
    fn test_platform_nav_links_home() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        let ctx = RenderContext::new(&config, &catalog, Utc::now());

        let html = render(&ctx).html;
        assert!(html.contains(">Home</a>"));
    }
}
