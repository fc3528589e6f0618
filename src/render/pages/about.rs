//! About page: mission, product philosophy and vision.

use crate::render::layout::{Chrome, document};
use crate::render::markup::{Element, el};
use crate::render::primitives::call_to_action;
use crate::render::{Page, RenderContext, routes};

const PHILOSOPHY: [(&str, &str); 3] = [
    (
        "AI-Native from the Ground Up",
        "We don't retrofit old SEO tools for AI. We built Kasparro specifically for understanding how AI systems process, understand, and surface brands.",
    ),
    (
        "Modular Intelligence",
        "Rather than a single \"AI SEO score,\" we provide granular insights across 7 specialized modules—from visibility to trust signals to technical readiness.",
    ),
    (
        "Actionable Over Vanity Metrics",
        "Every insight comes with specific recommendations and estimated impact. We help brands improve, not just observe.",
    ),
];

pub fn render(ctx: &RenderContext<'_>) -> Page {
    let name = ctx.config.site.name.as_str();

    let content = vec![
        el("section").class("hero pt-20 pb-12 px-6").child(
            el("div")
                .class("max-w-4xl mx-auto text-center")
                .child(
                    el("h1")
                        .class("text-5xl font-bold text-gray-900 mb-6")
                        .text(format!("About {name}")),
                )
                .child(
                    el("p")
                        .class("text-xl text-gray-600")
                        .text("Building the intelligence layer for AI-first search"),
                ),
        ),
        block(
            "mission",
            "bg-gray-50",
            "Our Mission",
            vec![
                paragraph("As AI systems like ChatGPT, Claude, and Perplexity reshape how people discover information, traditional SEO strategies are becoming obsolete. Brands need new intelligence to understand how AI models perceive, reference, and recommend them."),
                paragraph(&format!("{name} exists to provide that intelligence—giving brands visibility into their AI search presence and actionable insights to optimize for the AI-first era.")),
            ],
        ),
        block(
            "philosophy",
            "",
            "Product Philosophy",
            PHILOSOPHY
                .iter()
                .map(|(title, text)| {
                    el("div")
                        .child(el("h3").class("font-semibold text-gray-900 mb-2").text(*title))
                        .child(paragraph(text))
                })
                .collect(),
        ),
        block(
            "vision",
            "bg-gray-50",
            "Vision for AI-First Search",
            vec![
                paragraph("We believe that within 3-5 years, the majority of information discovery will happen through conversational AI interfaces rather than traditional search engines."),
                paragraph(&format!("Brands that optimize for AI understanding today will have a massive advantage tomorrow. {name} is building the tools to make that possible—starting with visibility and intelligence, expanding into optimization and automation.")),
                paragraph("This is the future of brand presence. We're building the infrastructure for it.")
                    .class("text-lg text-gray-700 leading-relaxed font-medium"),
            ],
        ),
        call_to_action(
            &format!("See {name} in Action"),
            "Explore our platform and understand how AI perceives your brand",
            routes::DASHBOARD,
            "View Dashboard",
        ),
    ];

    let html = document(ctx, routes::ABOUT, "About", Chrome::Marketing, content);
    Page::new(routes::ABOUT, "About", html)
}

fn paragraph(text: &str) -> Element {
    el("p")
        .class("text-lg text-gray-700 leading-relaxed mb-4")
        .text(text)
}

fn block(id: &str, background: &str, title: &str, body: Vec<Element>) -> Element {
    el("section")
        .id(id)
        .class(format!("py-16 px-6 {background}").trim_end().to_string())
        .child(
            el("div").class("max-w-4xl mx-auto").child(
                el("h2")
                    .class("text-3xl font-bold text-gray-900 mb-4")
                    .text(title),
            )
            .children(body),
        )
}
