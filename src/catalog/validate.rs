//! Catalog integrity checks.
//!
//! Errors break a relationship the renderers rely on (duplicate ids, dangling
//! foreign keys, impossible counts). Warnings flag authored data that is
//! merely inconsistent, such as a status that disagrees with its score.

use std::collections::HashSet;

use regex::Regex;

use super::Catalog;
use crate::error::{AppError, Result};

const SLUG_PATTERN: &str = r"^[a-z0-9]+(?:-[a-z0-9]+)*$";

/// Outcome of validating a catalog.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Turn the report into an error when it holds any errors.
    pub fn into_result(self) -> Result<Vec<String>> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(AppError::validation(self.errors.join("; ")))
        }
    }

    fn error(&mut self, message: String) {
        self.errors.push(message);
    }

    fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }
}

impl Catalog {
    /// Check ids, foreign keys and counts.
    pub fn validate(&self) -> Result<ValidationReport> {
        let slug = Regex::new(SLUG_PATTERN)?;
        let mut report = ValidationReport::default();

        if self.modules.is_empty() {
            report.error("module table is empty".to_string());
        }

        let mut module_ids = HashSet::new();
        for module in &self.modules {
            if !slug.is_match(&module.id) {
                report.error(format!("module id '{}' is not a lowercase slug", module.id));
            }
            if !module_ids.insert(module.id.as_str()) {
                report.error(format!("duplicate module id '{}'", module.id));
            }
            if module.name.trim().is_empty() {
                report.error(format!("module '{}' has an empty name", module.id));
            }
            if !self.results.contains_key(&module.id) {
                report.warn(format!("module '{}' has no audit result", module.id));
            }
        }

        for (key, result) in &self.results {
            if key != &result.module_id {
                report.error(format!(
                    "result keyed '{}' declares moduleId '{}'",
                    key, result.module_id
                ));
            }
            if !module_ids.contains(result.module_id.as_str()) {
                report.error(format!(
                    "result '{}' references unknown module",
                    result.module_id
                ));
            }
            if result.score > 100 {
                report.error(format!(
                    "result '{}' score {} is outside 0-100",
                    result.module_id, result.score
                ));
            }
            if !result.status_is_consistent() {
                report.warn(format!(
                    "result '{}' score {} implies '{}' but status is '{}'",
                    result.module_id,
                    result.score,
                    result.derived_status(),
                    result.status
                ));
            }

            let mut rec_ids = HashSet::new();
            for rec in &result.recommendations {
                if !rec_ids.insert(rec.id.as_str()) {
                    report.error(format!(
                        "result '{}' has duplicate recommendation id '{}'",
                        result.module_id, rec.id
                    ));
                }
            }
        }

        let mut brand_ids = HashSet::new();
        for brand in &self.brands {
            if !brand_ids.insert(brand.id.as_str()) {
                report.error(format!("duplicate brand id '{}'", brand.id));
            }
        }

        let dashboard = &self.dashboard;
        if !brand_ids.contains(dashboard.brand_id.as_str()) {
            report.error(format!(
                "dashboard references unknown brand '{}'",
                dashboard.brand_id
            ));
        }
        if dashboard.covered_keywords > dashboard.total_keywords {
            report.error(format!(
                "dashboard covers {} of only {} keywords",
                dashboard.covered_keywords, dashboard.total_keywords
            ));
        }
        for (label, score) in [
            ("visibilityScore", dashboard.visibility_score),
            ("trustScore", dashboard.trust_score),
            ("keywordCoverage", dashboard.keyword_coverage),
        ] {
            if score > 100 {
                report.error(format!("dashboard {label} {score} is outside 0-100"));
            }
        }
        if let Some(computed) = dashboard.computed_coverage() {
            if computed.abs_diff(dashboard.keyword_coverage) > 1 {
                report.warn(format!(
                    "dashboard keywordCoverage {}% disagrees with {}/{} keywords ({}%)",
                    dashboard.keyword_coverage,
                    dashboard.covered_keywords,
                    dashboard.total_keywords,
                    computed
                ));
            }
        }

        let mut stage_ids = HashSet::new();
        for stage in &self.architecture.stages {
            if !stage_ids.insert(stage.id.as_str()) {
                report.error(format!("duplicate pipeline stage id '{}'", stage.id));
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_no_errors() {
        let catalog = Catalog::builtin().unwrap();
        let report = catalog.validate().unwrap();
        assert!(report.is_ok(), "errors: {:?}", report.errors);
    }

    #[test]
    fn test_builtin_status_warnings() {
        let catalog = Catalog::builtin().unwrap();
        let report = catalog.validate().unwrap();

        // Authored statuses that disagree with the score ladder.
        for id in [
            "ai-visibility",
            "entity-coverage",
            "citation-analysis",
            "technical-signals",
            "brand-sentiment",
        ] {
            assert!(
                report.warnings.iter().any(|w| w.contains(id)),
                "expected a warning for {id}"
            );
        }
        assert!(!report.warnings.iter().any(|w| w.contains("eeat-trust")));
    }

    #[test]
    fn test_duplicate_module_id() {
        let mut catalog = Catalog::builtin().unwrap();
        let copy = catalog.modules[0].clone();
        catalog.modules.push(copy);

        let report = catalog.validate().unwrap();
        assert!(report.errors.iter().any(|e| e.contains("duplicate module id")));
        assert!(report.into_result().is_err());
    }

    #[test]
    fn test_dangling_result() {
        let mut catalog = Catalog::builtin().unwrap();
        catalog.modules.retain(|m| m.id != "brand-sentiment");

        let report = catalog.validate().unwrap();
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("'brand-sentiment' references unknown module"))
        );
    }

    #[test]
    fn test_keyword_counts() {
        let mut catalog = Catalog::builtin().unwrap();
        catalog.dashboard.covered_keywords = catalog.dashboard.total_keywords + 1;

        let report = catalog.validate().unwrap();
        assert!(report.errors.iter().any(|e| e.contains("keywords")));
    }

    #[test]
    fn test_bad_slug() {
        let mut catalog = Catalog::builtin().unwrap();
        catalog.modules[0].id = "AI Visibility".to_string();

        let report = catalog.validate().unwrap();
        assert!(report.errors.iter().any(|e| e.contains("lowercase slug")));
    }
}
