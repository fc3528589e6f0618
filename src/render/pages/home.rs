//! Landing page.

use crate::render::layout::{Chrome, document};
use crate::render::markup::{Element, el};
use crate::render::primitives::{call_to_action, module_teaser};
use crate::render::{Page, RenderContext, routes};
use super::{bullet, section_title};

const TRADITIONAL: [&str; 5] = [
    "Focus on keyword rankings",
    "Optimize for search engine crawlers",
    "Track position in search results",
    "Link building for PageRank",
    "Meta tags and on-page factors",
];

const AI_NATIVE: [&str; 5] = [
    "Focus on mention frequency & context",
    "Optimize for AI model understanding",
    "Track presence in AI responses",
    "Build trust signals (E-E-A-T)",
    "Semantic relevance & entity relationships",
];

pub fn render(ctx: &RenderContext<'_>) -> Page {
    let module_count = ctx.catalog.modules.len();

    let content = vec![
        hero(ctx),
        comparison(),
        el("section").class("py-16 px-6").child(
            el("div")
                .class("max-w-7xl mx-auto")
                .child(
                    el("div")
                        .class("text-center mb-12")
                        .child(
                            el("h2")
                                .class("text-3xl font-bold text-gray-900 mb-4")
                                .text(format!("{module_count} Core Analysis Modules")),
                        )
                        .child(
                            el("p")
                                .class("text-lg text-gray-600 max-w-2xl mx-auto")
                                .text("Comprehensive AI brand intelligence across every dimension that matters"),
                        ),
                )
                .child(
                    el("div")
                        .class("module-grid grid md:grid-cols-2 lg:grid-cols-3 gap-6")
                        .children(ctx.catalog.modules.iter().map(module_teaser)),
                ),
        ),
        how_it_works(ctx),
        call_to_action(
            "Ready to See How AI Understands Your Brand?",
            "Explore our platform and see real AI-native brand intelligence in action",
            routes::DASHBOARD,
            "View Dashboard",
        ),
    ];

    let html = document(ctx, routes::HOME, "Home", Chrome::Marketing, content);
    Page::new(routes::HOME, "Home", html)
}

fn hero(ctx: &RenderContext<'_>) -> Element {
    el("section").class("hero pt-20 pb-16 px-6").child(
        el("div")
            .class("max-w-7xl mx-auto text-center")
            .child(
                el("div")
                    .class("inline-flex items-center gap-2 px-4 py-2 bg-blue-50 border border-blue-200 rounded-full mb-6")
                    .child(
                        el("span")
                            .class("text-sm font-medium text-blue-600")
                            .text("AI-Native SEO Intelligence"),
                    ),
            )
            .child(
                el("h1")
                    .class("text-5xl md:text-6xl font-bold text-gray-900 mb-6 leading-tight")
                    .text("Understand How AI")
                    .child(el("br"))
                    .text("Sees Your Brand"),
            )
            .child(el("p").class("text-xl text-gray-600 mb-8 max-w-3xl mx-auto").text(format!(
                "{} analyzes how AI platforms like ChatGPT, Claude, and Perplexity understand and represent your brand across billions of queries.",
                ctx.config.site.name
            )))
            .child(
                el("div")
                    .class("flex items-center justify-center gap-4")
                    .child(
                        el("a")
                            .class("px-6 py-3 bg-blue-600 text-white font-semibold rounded-lg hover:bg-blue-700")
                            .href(routes::DASHBOARD)
                            .text("View Live Dashboard →"),
                    )
                    .child(
                        el("a")
                            .class("px-6 py-3 border border-gray-300 text-gray-700 font-semibold rounded-lg hover:border-gray-400")
                            .href(routes::PLATFORM)
                            .text("Learn More"),
                    ),
            ),
    )
}

fn comparison() -> Element {
    let column = |title: &str, items: &[&str], highlight: bool| {
        el("div")
            .class(if highlight {
                "comparison-column bg-blue-50 p-8 rounded-xl border-2 border-blue-500"
            } else {
                "comparison-column bg-white p-8 rounded-xl border border-gray-200"
            })
            .child(el("h3").class("text-xl font-bold text-gray-900 mb-4").text(title))
            .child(
                el("ul")
                    .class("space-y-3")
                    .children(items.iter().map(|item| bullet(item, highlight))),
            )
    };

    el("section").class("py-16 bg-gray-50 px-6").child(
        el("div")
            .class("max-w-7xl mx-auto")
            .child(section_title("Why AI-SEO is Different from Traditional SEO"))
            .child(
                el("div")
                    .class("grid md:grid-cols-2 gap-8 max-w-5xl mx-auto")
                    .child(column("Traditional SEO", &TRADITIONAL, false))
                    .child(column("AI-Native SEO", &AI_NATIVE, true)),
            ),
    )
}

fn how_it_works(ctx: &RenderContext<'_>) -> Element {
    let module_count = ctx.catalog.modules.len();
    let steps = [
        (
            "Data Collection",
            "Gather signals from AI platforms, knowledge graphs, and content sources".to_string(),
        ),
        (
            "AI Analysis",
            format!("Process through {module_count} specialized modules to understand AI perception"),
        ),
        (
            "Actionable Insights",
            "Receive prioritized recommendations to improve AI visibility".to_string(),
        ),
    ];

    el("section").class("py-16 bg-gray-50 px-6").child(
        el("div")
            .class("max-w-7xl mx-auto")
            .child(section_title(&format!("How {} Works", ctx.config.site.name)))
            .child(
                el("div")
                    .class("steps grid md:grid-cols-3 gap-8 max-w-5xl mx-auto")
                    .children(steps.into_iter().enumerate().map(|(i, (title, text))| {
                        el("div")
                            .class("step text-center")
                            .child(
                                el("div")
                                    .class("inline-flex items-center justify-center w-16 h-16 bg-blue-600 text-white rounded-full mb-4 text-2xl font-bold")
                                    .text((i + 1).to_string()),
                            )
                            .child(el("h3").class("text-xl font-semibold text-gray-900 mb-2").text(title))
                            .child(el("p").class("text-gray-600").text(text))
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
    fn test_home_lists_every_module() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        let ctx = RenderContext::new(&config, &catalog, Utc::now());

        let page = render(&ctx);
        assert_eq!(page.path, "index.html");

        let doc = Html::parse_document(&page.html);
        let teasers = Selector::parse(".module-grid .module-teaser").unwrap();
        assert_eq!(doc.select(&teasers).count(), catalog.modules.len());

        assert!(page.html.contains("7 Core Analysis Modules"));
        assert!(page.html.contains("E-E-A-T &amp; Trust Signals"));
        assert!(page.html.contains("Build trust signals (E-E-A-T)"));

        let steps = Selector::parse(".steps .step").unwrap();
        assert_eq!(doc.select(&steps).count(), 3);
    }
}
