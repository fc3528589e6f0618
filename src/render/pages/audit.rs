//! Audit browser page.
//!
//! The page is a snapshot of one [`BrowserState`]: the search box shows the
//! query, the category select shows the filter, the module list is the
//! filtered view and the detail panel shows the selected result. Each
//! selectable state the site links to is rendered as its own page.
//!
//! Every module card is emitted; those outside the filter are `hidden`. A
//! small inline script re-applies the same filter rule (case-insensitive
//! name or description match, then category) as the search box and
//! category select change.

use crate::browser::{AuditBrowser, BrowserState, CategoryFilter};
use crate::models::{AuditModule, AuditResult};
use crate::render::layout::{Chrome, document};
use crate::render::markup::{Element, el};
use crate::render::primitives::{
    empty_state, icon, insight_item, issue_item, metric_tile, module_card, recommendation_item,
    status_badge,
};
use crate::render::{Page, RenderContext, routes};

pub const NO_MODULES: &str = "No modules found.";
pub const NO_SELECTION: &str = "Select a module to view details";

const FILTER_SCRIPT: &str = r#"(function () {
  var form = document.querySelector("form.search");
  if (!form) return;
  var input = form.querySelector("input[name=q]");
  var select = form.querySelector("select[name=category]");
  var entries = document.querySelectorAll(".module-list .module-entry");
  var empty = document.querySelector(".module-list .no-modules");
  function apply() {
    var q = input.value.toLowerCase();
    var category = select.value;
    var shown = 0;
    entries.forEach(function (entry) {
      var text = entry.dataset.name.indexOf(q) !== -1 || entry.dataset.description.indexOf(q) !== -1;
      var match = text && (category === "all" || entry.dataset.category === category);
      entry.hidden = !match;
      if (match) shown += 1;
    });
    empty.hidden = shown > 0;
  }
  form.addEventListener("submit", function (event) { event.preventDefault(); apply(); });
  input.addEventListener("input", apply);
  select.addEventListener("change", apply);
})();"#;

/// Render the audit browser for `state` at `route`.
pub fn render(ctx: &RenderContext<'_>, state: &BrowserState, route: &str) -> Page {
    let browser = AuditBrowser::with_state(ctx.catalog, state.clone());

    let title = match browser.selected_module() {
        Some(module) => format!("{} Audit", module.name),
        None if state.category != CategoryFilter::All => {
            format!("{} Modules", state.category.label())
        }
        None => "Audit Modules".to_string(),
    };

    let content = vec![el("div").class("p-8").child(
        el("div")
            .class("max-w-7xl mx-auto")
            .child(
                el("div")
                    .class("mb-8")
                    .child(
                        el("h1")
                            .class("text-3xl font-bold text-gray-900 mb-2")
                            .text("Audit Modules"),
                    )
                    .child(
                        el("p")
                            .class("text-gray-600")
                            .text("Module-based analysis of brand AI perception"),
                    ),
            )
            .child(filter_bar(ctx, &browser))
            .child(
                el("div")
                    .class("grid lg:grid-cols-3 gap-6")
                    .child(module_list(&browser))
                    .child(detail_panel(&browser)),
            ),
    )
    .child(el("script").raw(FILTER_SCRIPT))];

    let html = document(ctx, route, &title, Chrome::App, content);
    Page::new(route, title, html)
}

fn filter_bar(ctx: &RenderContext<'_>, browser: &AuditBrowser<'_>) -> Element {
    let state = browser.state();

    let select = el("select")
        .class("category-select p-2 border rounded-md")
        .attr("name", "category")
        .attr("aria-label", "Category")
        .children(CategoryFilter::options().map(|option| {
            el("option")
                .attr("value", option.as_str())
                .flag("selected", option == state.category)
                .text(option.label())
        }));

    let search = el("form")
        .class("search flex flex-col md:flex-row gap-4 flex-1")
        .attr("role", "search")
        .child(
            el("input")
                .class("flex-1 p-2 border rounded-md")
                .attr("type", "search")
                .attr("name", "q")
                .attr("placeholder", "Search modules...")
                .attr("value", state.search_query.as_str()),
        )
        .child(select);

    // Only categories with modules get a page to link to.
    let categories = std::iter::once(CategoryFilter::All)
        .chain(
            ctx.catalog
                .populated_categories()
                .into_iter()
                .map(CategoryFilter::Only),
        )
        .map(|filter| {
            let href = match filter {
                CategoryFilter::All => routes::AUDIT.to_string(),
                CategoryFilter::Only(category) => routes::audit_category(category),
            };
            let active = filter == state.category;
            let link = el("a")
                .class(if active {
                    "category-link px-3 py-1 rounded-full text-sm bg-blue-600 text-white"
                } else {
                    "category-link px-3 py-1 rounded-full text-sm bg-white border border-gray-200 text-gray-700 hover:border-blue-300"
                })
                .href(href)
                .attr("data-category", filter.as_str())
                .text(filter.label());
            if active {
                link.attr("aria-current", "true")
            } else {
                link
            }
        });

    el("div")
        .class("filters mb-6 space-y-4")
        .child(search)
        .child(
            el("nav")
                .class("category-links flex flex-wrap gap-2")
                .attr("aria-label", "Categories")
                .children(categories),
        )
}

fn module_list(browser: &AuditBrowser<'_>) -> Element {
    let catalog = browser.catalog();
    let state = browser.state();
    let visible: Vec<&str> = browser
        .filtered_modules()
        .into_iter()
        .map(|m| m.id.as_str())
        .collect();

    // Selection keeps the category filter when one is active.
    let href = |module: &AuditModule| match state.category {
        CategoryFilter::All => routes::audit_module(&module.id),
        CategoryFilter::Only(category) => routes::audit_category_module(category, &module.id),
    };

    let entries = catalog.modules.iter().map(|module| {
        el("div")
            .class("module-entry")
            .attr("data-category", module.category.as_str())
            .attr("data-name", module.name.to_lowercase())
            .attr("data-description", module.description.to_lowercase())
            .flag("hidden", !visible.contains(&module.id.as_str()))
            .child(module_card(
                module,
                catalog.result(&module.id),
                browser.is_selected(&module.id),
                &href(module),
            ))
    });

    el("div")
        .class("module-list lg:col-span-1")
        .attr("data-count", visible.len().to_string())
        .children(entries)
        .child(
            el("div")
                .class("no-modules")
                .flag("hidden", !visible.is_empty())
                .child(empty_state(NO_MODULES)),
        )
}

fn detail_panel(browser: &AuditBrowser<'_>) -> Element {
    let panel = el("div").class("detail-panel lg:col-span-2");
    match (browser.selected_module(), browser.selected_result()) {
        (module, Some(result)) => panel.child(result_detail(browser, module, result)),
        _ => panel.child(
            el("div")
                .class("bg-white rounded-xl border border-gray-200 p-12 text-center")
                .child(empty_state(NO_SELECTION)),
        ),
    }
}

fn section(title: &str, class: &'static str, items: Vec<Element>) -> Option<Element> {
    if items.is_empty() {
        return None;
    }
    Some(
        el("section")
            .class(class)
            .child(el("h3").class("text-lg font-semibold text-gray-900 mb-4").text(title))
            .child(el("div").class("space-y-3").children(items)),
    )
}

fn result_detail(
    browser: &AuditBrowser<'_>,
    module: Option<&AuditModule>,
    result: &AuditResult,
) -> Element {
    let header = el("div")
        .class("flex items-start justify-between mb-4")
        .child(
            el("div")
                .class("flex items-center gap-3")
                .child_opt(module.map(|m| icon(m.icon)))
                .child(
                    el("h2")
                        .class("text-2xl font-bold text-gray-900")
                        .text(result.module_name.as_str()),
                ),
        )
        .child(
            el("div")
                .class("flex items-center gap-3")
                .child(status_badge(result.status))
                .child(
                    el("span")
                        .class("detail-score text-3xl font-bold text-gray-900")
                        .text(result.score.to_string()),
                ),
        );

    let metrics = (!result.metrics.is_empty()).then(|| {
        el("div")
            .class("metrics grid grid-cols-2 md:grid-cols-4 gap-4 mb-6")
            .children(result.metrics.iter().map(metric_tile))
    });

    let recommendations = result
        .recommendations
        .iter()
        .map(|rec| recommendation_item(rec, browser.is_expanded(&rec.id)))
        .collect();

    el("article")
        .class("result bg-white rounded-xl border border-gray-200 p-6 space-y-6")
        .attr("data-module-id", result.module_id.as_str())
        .child(header)
        .child(el("p").class("summary text-gray-700").text(result.summary.as_str()))
        .child_opt(metrics)
        .child_opt(section(
            "Key Insights",
            "insights",
            result.insights.iter().map(insight_item).collect(),
        ))
        .child_opt(section(
            "Issues Detected",
            "issues",
            result.issues.iter().map(issue_item).collect(),
        ))
        .child_opt(section("Recommendations", "recommendations", recommendations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{Config, ModuleCategory};
    use chrono::Utc;
    use scraper::{Html, Selector};

    fn card_ids(html: &str) -> Vec<String> {
        let doc = Html::parse_document(html);
        let cards = Selector::parse(".module-entry:not([hidden]) .module-card").unwrap();
        doc.select(&cards)
            .filter_map(|c| c.value().attr("data-module-id").map(str::to_string))
            .collect()
    }

    fn selected(id: &str) -> BrowserState {
        BrowserState {
            selected_module: Some(id.to_string()),
            ..BrowserState::default()
        }
    }

    #[test]
    fn test_selected_module_detail() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        let ctx = RenderContext::new(&config, &catalog, Utc::now());

        let page = render(&ctx, &selected("eeat-trust"), "/app/audit/eeat-trust/");
        assert_eq!(page.path, "app/audit/eeat-trust/index.html");
        assert_eq!(card_ids(&page.html).len(), catalog.modules.len());

        let doc = Html::parse_document(&page.html);
        let current = Selector::parse(".module-card[aria-current]").unwrap();
        let current: Vec<_> = doc.select(&current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].value().attr("data-module-id"), Some("eeat-trust"));

        let article = Selector::parse("article.result").unwrap();
        let article = doc.select(&article).next().unwrap();
        assert_eq!(article.value().attr("data-module-id"), Some("eeat-trust"));

        // nothing expanded by default
        let open = Selector::parse("details.recommendation[open]").unwrap();
        assert_eq!(doc.select(&open).count(), 0);
    }

    #[test]
    fn test_expanded_recommendation_renders_open() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        let ctx = RenderContext::new(&config, &catalog, Utc::now());

        let result = catalog.result("ai-visibility").unwrap();
        let rec_id = result.recommendations[0].id.clone();
        let state = BrowserState {
            expanded_recommendation: Some(rec_id.clone()),
            ..selected("ai-visibility")
        };

        let page = render(&ctx, &state, "/app/audit/ai-visibility/");
        let doc = Html::parse_document(&page.html);
        let open = Selector::parse("details.recommendation[open]").unwrap();
        let open: Vec<_> = doc.select(&open).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(
            open[0].value().attr("data-recommendation-id"),
            Some(rec_id.as_str())
        );
    }

    #[test]
    fn test_category_page_filters_list() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        let ctx = RenderContext::new(&config, &catalog, Utc::now());

        let state = BrowserState {
            category: CategoryFilter::Only(ModuleCategory::Technical),
            ..BrowserState::default()
        };
        let page = render(&ctx, &state, "/app/audit/category/technical/");

        let expected: Vec<String> = catalog
            .modules_in(ModuleCategory::Technical)
            .map(|m| m.id.clone())
            .collect();
        assert_eq!(card_ids(&page.html), expected);
        assert!(page.html.contains(NO_SELECTION));

        let doc = Html::parse_document(&page.html);
        let option = Selector::parse("select.category-select option[selected]").unwrap();
        let option = doc.select(&option).next().unwrap();
        assert_eq!(option.value().attr("value"), Some("technical"));
    }

    #[test]
    fn test_empty_list_and_unknown_selection() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        let ctx = RenderContext::new(&config, &catalog, Utc::now());

        let state = BrowserState {
            search_query: "<no such module>".to_string(),
            ..selected("does-not-exist")
        };
        let page = render(&ctx, &state, routes::AUDIT);

        assert!(card_ids(&page.html).is_empty());
        let doc = Html::parse_document(&page.html);
        let empty = Selector::parse(".no-modules:not([hidden])").unwrap();
        let empty = doc.select(&empty).next().unwrap();
        assert!(empty.text().any(|t| t.contains(NO_MODULES)));
        assert!(page.html.contains(NO_SELECTION));
        // query is echoed escaped
        assert!(page.html.contains(r#"value="&lt;no such module&gt;""#));
    }

    #[test]
    fn test_search_hides_non_matching_modules() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        let ctx = RenderContext::new(&config, &catalog, Utc::now());

        let state = BrowserState {
            search_query: "TRUST".to_string(),
            ..BrowserState::default()
        };
        let page = render(&ctx, &state, routes::AUDIT);
        assert_eq!(card_ids(&page.html), vec!["eeat-trust".to_string()]);

        // every module is still on the page for the filter script
        let doc = Html::parse_document(&page.html);
        let entries = Selector::parse(".module-list .module-entry").unwrap();
        assert_eq!(doc.select(&entries).count(), catalog.modules.len());

        let entry = Selector::parse(r#".module-entry[data-category="trust"]"#).unwrap();
        let entry = doc.select(&entry).next().unwrap();
        assert_eq!(entry.value().attr("data-name"), Some("e-e-a-t & trust signals"));

        let empty = Selector::parse(".no-modules[hidden]").unwrap();
        assert_eq!(doc.select(&empty).count(), 1);

        let form = Selector::parse("form.search").unwrap();
        let form = doc.select(&form).next().unwrap();
        assert_eq!(form.value().attr("action"), None);

        let script = Selector::parse("script:not([src])").unwrap();
        let script: String = doc.select(&script).next().unwrap().text().collect();
        assert!(script.contains("dataset.description"));
        assert!(script.contains("preventDefault"));
    }

    #[test]
    fn test_category_page_keeps_filter_on_selection() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();
        let ctx = RenderContext::new(&config, &catalog, Utc::now());

        let state = BrowserState {
            selected_module: Some("eeat-trust".to_string()),
            category: CategoryFilter::Only(ModuleCategory::Trust),
            ..BrowserState::default()
        };
        let page = render(&ctx, &state, "/app/audit/category/trust/eeat-trust/");
        assert_eq!(page.path, "app/audit/category/trust/eeat-trust/index.html");
        assert_eq!(card_ids(&page.html), vec!["eeat-trust".to_string()]);
        assert!(page
            .html
            .contains(r#"href="/app/audit/category/trust/eeat-trust/""#));

        let doc = Html::parse_document(&page.html);
        let article = Selector::parse("article.result").unwrap();
        assert_eq!(doc.select(&article).count(), 1);
    }
}
