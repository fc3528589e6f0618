//! Architecture explainer.

use crate::render::layout::{Chrome, document};
use crate::render::markup::{Element, el};
use crate::render::primitives::{characteristic, stage_card, stage_node};
use crate::render::{Page, RenderContext, routes};

pub fn render(ctx: &RenderContext<'_>) -> Page {
    let architecture = &ctx.catalog.architecture;

    let mut diagram: Vec<Element> = Vec::with_capacity(architecture.stages.len() * 2);
    for (i, stage) in architecture.stages.iter().enumerate() {
        if i > 0 {
            diagram.push(
                el("span")
                    .class("arrow text-3xl text-gray-400 rotate-90 md:rotate-0")
                    .attr("aria-hidden", "true")
                    .text("→"),
            );
        }
        diagram.push(stage_node(stage));
    }

    let content = vec![el("div").class("p-8").child(
        el("div")
            .class("max-w-7xl mx-auto")
            .child(
                el("div")
                    .class("mb-8")
                    .child(
                        el("h1")
                            .class("text-3xl font-bold text-gray-900 mb-2")
                            .text("System Architecture"),
                    )
                    .child(el("p").class("text-gray-600").text(format!(
                        "How {} processes and analyzes AI brand intelligence",
                        ctx.config.site.name
                    ))),
            )
            .child(
                el("div")
                    .class("diagram bg-white rounded-xl border border-gray-200 p-8 mb-8")
                    .child(
                        el("h2")
                            .class("text-xl font-semibold text-gray-900 mb-6")
                            .text("Data Processing Pipeline"),
                    )
                    .child(
                        el("div")
                            .class("flex flex-col md:flex-row items-center justify-between gap-8")
                            .children(diagram),
                    ),
            )
            .child(
                el("div")
                    .class("components grid md:grid-cols-2 gap-6")
                    .children(architecture.stages.iter().map(stage_card)),
            )
            .child(
                el("div")
                    .class("characteristics mt-8 bg-white rounded-xl border border-gray-200 p-6")
                    .child(
                        el("h2")
                            .class("text-xl font-semibold text-gray-900 mb-4")
                            .text("Key Technical Characteristics"),
                    )
                    .child(
                        el("div")
                            .class("grid md:grid-cols-3 gap-6")
                            .children(architecture.characteristics.iter().map(characteristic)),
                    ),
            ),
    )];

    let html = document(ctx, routes::ARCHITECTURE, "Architecture", Chrome::App, content);
    Page::new(routes::ARCHITECTURE, "Architecture", html)
}
