//! Audit result records and their nested findings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scored, annotated outcome for one audit module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// Foreign key into the module table
    pub module_id: String,

    /// Module display name at the time of the audit
    pub module_name: String,

    /// Score in [0, 100]
    pub score: u8,

    /// Authored status band
    pub status: ScoreStatus,

    /// One-sentence summary
    pub summary: String,

    #[serde(default)]
    pub insights: Vec<Insight>,

    #[serde(default)]
    pub issues: Vec<Issue>,

    #[serde(default)]
    pub recommendations: Vec<Recommendation>,

    #[serde(default)]
    pub metrics: Vec<Metric>,
}

impl AuditResult {
    /// Status band implied by the score alone.
    pub fn derived_status(&self) -> ScoreStatus {
        ScoreStatus::from_score(f64::from(self.score))
    }

    /// Whether the authored status agrees with the score thresholds.
    pub fn status_is_consistent(&self) -> bool {
        self.status == self.derived_status()
    }

    /// Look up a recommendation by id.
    pub fn recommendation(&self, id: &str) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.id == id)
    }
}

/// Four-level status band derived from a score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ScoreStatus {
    Critical,
    Warning,
    Good,
    Excellent,
}

impl ScoreStatus {
    /// Classify a score: >= 90 excellent, >= 75 good, >= 50 warning, else critical.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ScoreStatus::Excellent
        } else if score >= 75.0 {
            ScoreStatus::Good
        } else if score >= 50.0 {
            ScoreStatus::Warning
        } else {
            ScoreStatus::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreStatus::Excellent => "excellent",
            ScoreStatus::Good => "good",
            ScoreStatus::Warning => "warning",
            ScoreStatus::Critical => "critical",
        }
    }
}

impl fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positive finding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insight {
    pub id: String,
    pub title: String,
    pub description: String,
    pub impact: Impact,
}

/// A problem detected by the audit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    #[serde(default)]
    pub affected_entities: Vec<String>,
}

/// A suggested action with ordered steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub estimated_impact: String,
    #[serde(default)]
    pub action_items: Vec<String>,
}

/// A labelled figure with an optional signed percent change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub label: String,
    pub value: MetricValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_label: Option<String>,
}

/// Metric values are either plain counts or preformatted text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{n}"),
            MetricValue::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! level_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

level_enum!(
    /// Impact of an insight.
    Impact { High => "high", Medium => "medium", Low => "low" }
);

level_enum!(
    /// Severity of an issue.
    Severity { Critical => "critical", Warning => "warning", Info => "info" }
);

level_enum!(
    /// Priority of a recommendation.
    Priority { High => "high", Medium => "medium", Low => "low" }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_bands() {
        assert_eq!(ScoreStatus::from_score(95.0), ScoreStatus::Excellent);
        assert_eq!(ScoreStatus::from_score(80.0), ScoreStatus::Good);
        assert_eq!(ScoreStatus::from_score(60.0), ScoreStatus::Warning);
        assert_eq!(ScoreStatus::from_score(10.0), ScoreStatus::Critical);
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(ScoreStatus::from_score(90.0), ScoreStatus::Excellent);
        assert_eq!(ScoreStatus::from_score(75.0), ScoreStatus::Good);
        assert_eq!(ScoreStatus::from_score(50.0), ScoreStatus::Warning);
        assert_eq!(ScoreStatus::from_score(89.9), ScoreStatus::Good);
        assert_eq!(ScoreStatus::from_score(49.99), ScoreStatus::Critical);
    }

    #[test]
    fn test_classification_is_monotonic() {
        let mut previous = ScoreStatus::from_score(0.0);
        for score in 0..=100 {
            let status = ScoreStatus::from_score(f64::from(score));
            assert!(status >= previous, "band dropped at {score}");
            previous = status;
        }
    }

    #[test]
    fn test_metric_value_untagged() {
        let metrics: Vec<Metric> = serde_json::from_str(
            r#"[
                {"label": "Trust Score", "value": "92/100", "change": 3, "changeLabel": "vs last audit"},
                {"label": "Expert Contributors", "value": 8}
            ]"#,
        )
        .unwrap();

        assert_eq!(metrics[0].value, MetricValue::Text("92/100".to_string()));
        assert_eq!(metrics[0].change, Some(3));
        assert_eq!(metrics[1].value, MetricValue::Number(8));
        assert_eq!(metrics[1].change_label, None);
        assert_eq!(metrics[1].value.to_string(), "8");
    }

    #[test]
    fn test_status_consistency() {
        let result = AuditResult {
            module_id: "technical-signals".to_string(),
            module_name: "Technical Signals".to_string(),
            score: 74,
            status: ScoreStatus::Good,
            summary: String::new(),
            insights: vec![],
            issues: vec![],
            recommendations: vec![],
            metrics: vec![],
        };
        assert_eq!(result.derived_status(), ScoreStatus::Warning);
        assert!(!result.status_is_consistent());
    }
}
