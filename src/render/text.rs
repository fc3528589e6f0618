//! Plain-text views of the audit browser and dashboard for the terminal.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::browser::AuditBrowser;
use crate::catalog::Catalog;

use super::format::{format_delta, format_relative_time, truncate_graphemes};

const DESCRIPTION_WIDTH: usize = 60;

/// One row per filtered module; the selected one is marked with `>`.
pub fn module_table(browser: &AuditBrowser<'_>) -> String {
    let modules = browser.filtered_modules();
    if modules.is_empty() {
        return format!("{}\n", super::pages::audit::NO_MODULES);
    }

    let catalog = browser.catalog();
    let id_width = modules.iter().map(|m| m.id.len()).max().unwrap_or(0).max(2);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:<id_width$}  {:<10}  {:>5}  {}",
        "ID", "CATEGORY", "SCORE", "DESCRIPTION"
    );
    for module in modules {
        let marker = if browser.is_selected(&module.id) { '>' } else { ' ' };
        let score = catalog
            .result(&module.id)
            .map(|r| r.score.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{marker} {:<id_width$}  {:<10}  {:>5}  {}",
            module.id,
            module.category.as_str(),
            score,
            truncate_graphemes(&module.description, DESCRIPTION_WIDTH)
        );
    }
    out
}

/// Full detail of the selected result with the expanded recommendation's
/// action items listed.
pub fn result_detail(browser: &AuditBrowser<'_>) -> String {
    let Some(result) = browser.selected_result() else {
        return format!("{}\n", super::pages::audit::NO_SELECTION);
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} [{}] {}/100",
        result.module_name,
        result.status.as_str().to_uppercase(),
        result.score
    );
    let _ = writeln!(out, "{}", result.summary);

    if !result.metrics.is_empty() {
        let _ = writeln!(out, "\nMetrics");
        for metric in &result.metrics {
            let change = match (metric.change, metric.change_label.as_deref()) {
                (Some(delta), Some(label)) => format!(" ({} {label})", format_delta(delta)),
                (Some(delta), None) => format!(" ({})", format_delta(delta)),
                (None, _) => String::new(),
            };
            let _ = writeln!(out, "  {}: {}{change}", metric.label, metric.value);
        }
    }

    if !result.insights.is_empty() {
        let _ = writeln!(out, "\nKey Insights");
        for insight in &result.insights {
            let _ = writeln!(out, "  [{}] {}", insight.impact.as_str(), insight.title);
        }
    }

    if !result.issues.is_empty() {
        let _ = writeln!(out, "\nIssues Detected");
        for issue in &result.issues {
            let _ = writeln!(out, "  [{}] {}", issue.severity.as_str(), issue.title);
            if !issue.affected_entities.is_empty() {
                let _ = writeln!(out, "      affects: {}", issue.affected_entities.join(", "));
            }
        }
    }

    if !result.recommendations.is_empty() {
        let _ = writeln!(out, "\nRecommendations");
        for rec in &result.recommendations {
            let expanded = browser.is_expanded(&rec.id);
            let marker = if expanded { 'v' } else { '>' };
            let _ = writeln!(
                out,
                "  {marker} {} [{}] {} ({})",
                rec.id,
                rec.priority.as_str(),
                rec.title,
                rec.estimated_impact
            );
            if expanded {
                let _ = writeln!(out, "      {}", rec.description);
                for (i, item) in rec.action_items.iter().enumerate() {
                    let _ = writeln!(out, "      {}. {item}", i + 1);
                }
            }
        }
    }

    out
}

/// Headline dashboard numbers for the tracked brand.
pub fn dashboard_summary(catalog: &Catalog, now: &DateTime<Utc>) -> String {
    let data = &catalog.dashboard;
    let brand_name = catalog
        .dashboard_brand()
        .map(|b| b.name.as_str())
        .unwrap_or(data.brand_id.as_str());

    let mut out = String::new();
    let _ = writeln!(out, "{brand_name}");
    let _ = writeln!(
        out,
        "Last audit: {}",
        format_relative_time(&data.last_audit, now)
    );
    let rows = [
        ("AI Visibility Score", data.visibility_score, data.trends.visibility),
        ("Trust Score (E-E-A-T)", data.trust_score, data.trends.trust),
        ("Keyword Coverage", data.keyword_coverage, data.trends.keywords),
    ];
    for (label, score, trend) in rows {
        let _ = writeln!(
            out,
            "  {label:<22} {score:>3}/100  {:>5} vs last audit",
            format_delta(trend)
        );
    }
    let _ = writeln!(
        out,
        "  {} of {} keywords covered",
        data.covered_keywords, data.total_keywords
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::CategoryFilter;
    use crate::models::ModuleCategory;
    use chrono::TimeZone;

    #[test]
    fn test_module_table_marks_selection() {
        let catalog = Catalog::builtin().unwrap();
        let mut browser = AuditBrowser::new(&catalog);
        browser.set_category_filter(CategoryFilter::Only(ModuleCategory::Trust));
        browser.select_module("eeat-trust");

        let table = module_table(&browser);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("SCORE"));
        assert!(lines[1].starts_with("> eeat-trust"));
    }

    #[test]
    fn test_module_table_empty() {
        let catalog = Catalog::builtin().unwrap();
        let mut browser = AuditBrowser::new(&catalog);
        browser.set_search_query("zzz-nothing");
        assert_eq!(module_table(&browser), "No modules found.\n");
    }

    #[test]
    fn test_result_detail_expansion() {
        let catalog = Catalog::builtin().unwrap();
        let mut browser = AuditBrowser::new(&catalog);
        assert_eq!(
            result_detail(&browser),
            "Select a module to view details\n"
        );

        browser.select_module("ai-visibility");
        let result = catalog.result("ai-visibility").unwrap();
        let rec = &result.recommendations[0];
        browser.toggle_recommendation(rec.id.clone());

        let text = result_detail(&browser);
        assert!(text.starts_with("AI Visibility ["));
        assert!(text.contains(&format!("v {}", rec.id)));
        assert!(text.contains(&format!("1. {}", rec.action_items[0])));
    }

    #[test]
    fn test_dashboard_summary() {
        let catalog = Catalog::builtin().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 12, 22, 10, 30, 0).unwrap();

        let text = dashboard_summary(&catalog, &now);
        assert!(text.starts_with("Acme Corporation\n"));
        assert!(text.contains("Last audit: 2 days ago"));
        assert!(text.contains("+5%"));
        assert!(text.contains("157 of 234 keywords covered"));
    }
}
