//! Stateless presentation primitives.
//!
//! Each function maps one record to an [`Element`]. The only logic here is
//! the color classification from [`theme`](super::theme) and sign-prefixing
//! of percent deltas.

use crate::models::{
    AuditModule, AuditResult, Characteristic, ColorTag, Insight, Issue, Metric, ModuleIcon,
    PipelineStage, Recommendation, ScoreStatus,
};

use super::format::format_delta;
use super::markup::{Element, el};
use super::theme;

/// Group name shared by recommendation disclosures so at most one is open.
pub const RECOMMENDATION_GROUP: &str = "recommendations";

pub fn icon(icon: ModuleIcon) -> Element {
    el("span")
        .class("icon")
        .attr("data-icon", icon.as_str())
        .attr("aria-hidden", "true")
        .text(icon.glyph())
}

pub fn status_badge(status: ScoreStatus) -> Element {
    el("span")
        .class(format!(
            "status-badge px-2 py-1 rounded text-xs font-medium border {}",
            theme::status_classes(status)
        ))
        .attr("data-status", status.as_str())
        .text(status.as_str().to_uppercase())
}

/// Small uppercase badge for impact, severity or priority.
///
/// `data_attr` names the attribute carrying the raw value, e.g. `data-impact`.
pub fn level_badge(data_attr: &'static str, value: &str, classes: &str) -> Element {
    el("span")
        .class(format!("level-badge px-2 py-1 rounded text-xs font-medium border {classes}"))
        .attr(data_attr, value)
        .text(value.to_uppercase())
}

pub fn category_chip(text: &str) -> Element {
    el("span")
        .class("category-chip text-xs px-2 py-1 bg-gray-100 text-gray-600 rounded")
        .text(text)
}

/// Selectable card in the audit browser's module list.
pub fn module_card(
    module: &AuditModule,
    result: Option<&AuditResult>,
    selected: bool,
    href: &str,
) -> Element {
    let frame = if selected {
        "module-card selected block w-full text-left p-4 rounded-lg mb-2 bg-blue-50 border-2 border-blue-500 shadow-sm"
    } else {
        "module-card block w-full text-left p-4 rounded-lg mb-2 bg-white border border-gray-200 hover:border-blue-300 hover:bg-gray-50"
    };
    let icon_frame = if selected {
        "p-2 rounded-lg bg-blue-100 text-blue-600"
    } else {
        "p-2 rounded-lg bg-gray-100 text-gray-600"
    };

    let mut card = el("a")
        .class(frame)
        .href(href)
        .attr("data-module-id", module.id.as_str());
    if selected {
        card = card.attr("aria-current", "true");
    }

    card.child(el("div").class(icon_frame).child(icon(module.icon)))
        .child(
            el("div")
                .class("flex-1 min-w-0")
                .child(
                    el("div")
                        .class("flex items-center justify-between mb-1")
                        .child(
                            el("h3")
                                .class("font-semibold text-sm text-gray-900")
                                .text(module.name.as_str()),
                        )
                        .child_opt(result.map(|r| {
                            el("span")
                                .class("module-score text-lg font-bold text-gray-900")
                                .text(r.score.to_string())
                        })),
                )
                .child(
                    el("p")
                        .class("text-xs text-gray-600 line-clamp-2")
                        .text(module.description.as_str()),
                )
                .child(el("div").class("mt-2").child(category_chip(module.category.as_str()))),
        )
}

/// Module card used on the home page grid.
pub fn module_teaser(module: &AuditModule) -> Element {
    el("div")
        .class("module-teaser bg-white p-6 rounded-xl border border-gray-200 hover:border-blue-500 hover:shadow-lg")
        .attr("data-module-id", module.id.as_str())
        .child(
            el("div")
                .class(format!(
                    "inline-flex p-3 rounded-lg mb-4 {}",
                    theme::accent_classes(module.color)
                ))
                .child(icon(module.icon)),
        )
        .child(
            el("h3")
                .class("text-lg font-semibold text-gray-900 mb-2")
                .text(module.name.as_str()),
        )
        .child(
            el("p")
                .class("text-sm text-gray-600")
                .text(module.description.as_str()),
        )
}

/// Numbered module card used on the platform page.
pub fn module_detail_card(module: &AuditModule, index: usize, href: &str) -> Element {
    el("div")
        .class("module-detail bg-white p-6 rounded-xl border border-gray-200 hover:border-blue-500")
        .attr("data-module-id", module.id.as_str())
        .child(
            el("div")
                .class("flex items-start gap-4")
                .child(
                    el("div")
                        .class("w-12 h-12 bg-blue-50 rounded-lg flex items-center justify-center")
                        .child(icon(module.icon)),
                )
                .child(
                    el("div")
                        .class("flex-1")
                        .child(
                            el("div")
                                .class("flex items-start justify-between mb-2")
                                .child(
                                    el("h3").class("text-xl font-semibold text-gray-900").child(
                                        el("a").href(href).text(module.name.as_str()),
                                    ),
                                )
                                .child(
                                    el("span")
                                        .class("text-sm font-medium text-gray-500")
                                        .text(format!("Module {index}")),
                                ),
                        )
                        .child(el("p").class("text-gray-600").text(module.description.as_str()))
                        .child(el("div").class("mt-3").child(category_chip(module.category.as_str()))),
                ),
        )
}

pub fn metric_tile(metric: &Metric) -> Element {
    let change = metric.change.map(|delta| {
        el("p")
            .class(format!("metric-change text-xs {}", theme::trend_classes(delta)))
            .child(el("span").class("font-medium").text(format_delta(delta)))
            .child_opt(
                metric
                    .change_label
                    .as_deref()
                    .map(|label| el("span").class("text-gray-500 ml-1").text(label)),
            )
    });

    el("div")
        .class("metric-tile bg-gray-50 rounded-lg p-4")
        .child(el("p").class("text-xs text-gray-500 mb-1").text(metric.label.as_str()))
        .child(
            el("p")
                .class("metric-value text-xl font-bold text-gray-900")
                .text(metric.value.to_string()),
        )
        .child_opt(change)
}

/// Dashboard score card.
pub struct ScoreCard<'a> {
    pub label: &'a str,
    pub icon: &'a str,
    pub score: u8,
    pub trend: i32,
    pub accent: ColorTag,
    pub subtitle: Option<String>,
}

pub fn score_card(card: &ScoreCard<'_>) -> Element {
    let trend_arrow = if card.trend > 0 { "▲" } else { "▼" };

    el("div")
        .class("score-card bg-white rounded-xl border border-gray-200 p-6")
        .child(
            el("div")
                .class(format!(
                    "inline-flex p-3 rounded-lg mb-4 {}",
                    theme::accent_classes(card.accent)
                ))
                .attr("aria-hidden", "true")
                .text(card.icon),
        )
        .child(el("h3").class("text-sm font-medium text-gray-600 mb-2").text(card.label))
        .child(
            el("div")
                .class("flex items-end gap-2 mb-2")
                .child(
                    el("span")
                        .class("score-value text-4xl font-bold text-gray-900")
                        .text(card.score.to_string()),
                )
                .child(el("span").class("text-lg text-gray-500 mb-1").text("/100")),
        )
        .child_opt(
            card.subtitle
                .as_deref()
                .map(|s| el("p").class("text-sm text-gray-500 mb-2").text(s)),
        )
        .child(
            el("div")
                .class("flex items-center gap-1 text-sm")
                .child(
                    el("span")
                        .class(format!("trend font-medium {}", theme::trend_classes(card.trend)))
                        .text(format!("{trend_arrow} {}", format_delta(card.trend))),
                )
                .child(el("span").class("text-gray-500 ml-1").text("vs last audit")),
        )
}

pub fn insight_item(insight: &Insight) -> Element {
    el("div")
        .class("insight border border-gray-200 rounded-lg p-4")
        .attr("data-insight-id", insight.id.as_str())
        .child(
            el("div")
                .class("flex items-start justify-between mb-2")
                .child(el("h4").class("font-semibold text-gray-900").text(insight.title.as_str()))
                .child(level_badge(
                    "data-impact",
                    insight.impact.as_str(),
                    theme::impact_classes(insight.impact),
                )),
        )
        .child(el("p").class("text-sm text-gray-600").text(insight.description.as_str()))
}

pub fn issue_item(issue: &Issue) -> Element {
    let entities = (!issue.affected_entities.is_empty()).then(|| {
        el("ul")
            .class("affected flex flex-wrap gap-2 mt-2")
            .children(
                issue
                    .affected_entities
                    .iter()
                    .map(|e| el("li").child(category_chip(e))),
            )
    });

    el("div")
        .class("issue border border-gray-200 rounded-lg p-4")
        .attr("data-issue-id", issue.id.as_str())
        .child(
            el("div")
                .class("flex items-start justify-between mb-2")
                .child(el("h4").class("font-semibold text-gray-900").text(issue.title.as_str()))
                .child(level_badge(
                    "data-severity",
                    issue.severity.as_str(),
                    theme::severity_classes(issue.severity),
                )),
        )
        .child(el("p").class("text-sm text-gray-600").text(issue.description.as_str()))
        .child_opt(entities)
}

/// Disclosure for one recommendation; `expanded` renders it open.
pub fn recommendation_item(rec: &Recommendation, expanded: bool) -> Element {
    el("details")
        .class("recommendation border border-gray-200 rounded-lg p-4")
        .attr("name", RECOMMENDATION_GROUP)
        .attr("data-recommendation-id", rec.id.as_str())
        .flag("open", expanded)
        .child(
            el("summary")
                .class("flex items-start justify-between cursor-pointer")
                .child(el("span").class("font-semibold text-gray-900").text(rec.title.as_str()))
                .child(level_badge(
                    "data-priority",
                    rec.priority.as_str(),
                    theme::priority_classes(rec.priority),
                )),
        )
        .child(el("p").class("text-sm text-gray-600 mt-2").text(rec.description.as_str()))
        .child(
            el("p")
                .class("estimated-impact text-sm font-medium text-green-700 mt-2")
                .text(rec.estimated_impact.as_str()),
        )
        .child(
            el("ol")
                .class("action-items list-decimal pl-5 mt-2 text-sm text-gray-700")
                .children(rec.action_items.iter().map(|item| el("li").text(item.as_str()))),
        )
}

pub fn info_item(label: &str, value: &str) -> Element {
    el("div")
        .class("info-item")
        .child(el("p").class("text-sm text-gray-500 mb-1").text(label))
        .child(el("p").class("font-semibold text-gray-900").text(value))
}

/// Diagram node for a pipeline stage.
pub fn stage_node(stage: &PipelineStage) -> Element {
    el("div")
        .class("stage-node flex-1 text-center")
        .attr("data-stage-id", stage.id.as_str())
        .child(
            el("div")
                .class(format!(
                    "inline-flex p-4 rounded-xl mb-3 border-2 {}",
                    theme::accent_classes(stage.color)
                ))
                .text(stage.name.chars().next().map(String::from).unwrap_or_default()),
        )
        .child(el("h3").class("font-semibold text-gray-900 mb-1").text(stage.name.as_str()))
        .child(el("p").class("text-sm text-gray-600").text(stage.summary.as_str()))
}

/// Component card listing a stage's features.
pub fn stage_card(stage: &PipelineStage) -> Element {
    el("div")
        .class("stage-card bg-white rounded-xl border border-gray-200 p-6")
        .attr("data-stage-id", stage.id.as_str())
        .child(el("h3").class("text-lg font-semibold text-gray-900 mb-2").text(stage.name.as_str()))
        .child(el("p").class("text-sm text-gray-600 mb-4").text(stage.description.as_str()))
        .child(
            el("ul").class("space-y-2").children(stage.components.iter().map(|c| {
                el("li")
                    .class("flex items-start gap-2 text-sm text-gray-700")
                    .child(el("span").class("text-blue-600").text("•"))
                    .child(el("span").text(c.as_str()))
            })),
        )
}

pub fn characteristic(item: &Characteristic) -> Element {
    info_item(&item.label, &item.value)
}

pub fn empty_state(message: &str) -> Element {
    el("p").class("empty-state text-gray-500 col-span-full").text(message)
}

/// Headline, paragraph and a single call-to-action button.
pub fn call_to_action(title: &str, text: &str, href: &str, label: &str) -> Element {
    el("section").class("cta py-20 px-6").child(
        el("div")
            .class("max-w-4xl mx-auto text-center")
            .child(el("h2").class("text-4xl font-bold text-gray-900 mb-6").text(title))
            .child(el("p").class("text-xl text-gray-600 mb-8").text(text))
            .child(
                el("a")
                    .class("inline-flex items-center gap-2 px-8 py-4 bg-blue-600 text-white text-lg font-semibold rounded-lg hover:bg-blue-700")
                    .href(href)
                    .text(format!("{label} →")),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Impact, MetricValue, Priority, Severity};

    #[test]
    fn test_metric_tile_delta() {
        let metric = Metric {
            label: "Content Quality Score".to_string(),
            value: MetricValue::Text("78/100".to_string()),
            change: Some(-2),
            change_label: Some("vs last audit".to_string()),
        };
        let html = metric_tile(&metric).to_html();
        assert!(html.contains("78/100"));
        assert!(html.contains("-2%"));
        assert!(html.contains("text-red-600"));

        let plain = Metric {
            label: "Recognized Entities".to_string(),
            value: MetricValue::Number(47),
            change: None,
            change_label: None,
        };
        let html = metric_tile(&plain).to_html();
        assert!(html.contains(">47<"));
        assert!(!html.contains("metric-change"));
    }

    #[test]
    fn test_recommendation_expansion() {
        let rec = Recommendation {
            id: "rec-1".to_string(),
            title: "Optimize <Comparison> Content".to_string(),
            description: "d".to_string(),
            priority: Priority::High,
            estimated_impact: "+18% visibility".to_string(),
            action_items: vec!["one".to_string(), "two".to_string()],
        };
        let open = recommendation_item(&rec, true).to_html();
        assert!(open.starts_with("<details"));
        assert!(open.contains(" open>"));
        assert!(open.contains("&lt;Comparison&gt;"));
        assert!(open.contains("<li>one</li><li>two</li>"));

        let closed = recommendation_item(&rec, false).to_html();
        assert!(!closed.contains(" open>"));
    }

    #[test]
    fn test_badges() {
        let html = status_badge(ScoreStatus::Warning).to_html();
        assert!(html.contains("WARNING"));
        assert!(html.contains("yellow"));

        let insight = Insight {
            id: "ins-1".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            impact: Impact::High,
        };
        assert!(insight_item(&insight).to_html().contains(r#"data-impact="high""#));

        let issue = Issue {
            id: "iss-1".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            severity: Severity::Critical,
            affected_entities: vec![],
        };
        let html = issue_item(&issue).to_html();
        assert!(html.contains(r#"data-severity="critical""#));
        assert!(!html.contains("affected"));
    }

    #[test]
    fn test_score_card_trend() {
        let card = ScoreCard {
            label: "Trust Score (E-E-A-T)",
            icon: "⛨",
            score: 92,
            trend: 3,
            accent: ColorTag::Green,
            subtitle: None,
        };
        let html = score_card(&card).to_html();
        assert!(html.contains("+3%"));
        assert!(html.contains("text-green-600"));
        assert!(html.contains("E-E-A-T"));
    }
}
