//! Brand and dashboard snapshot records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub industry: String,
    pub last_audit_date: DateTime<Utc>,
}

/// Headline numbers shown on the dashboard for one brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Foreign key into the brand table
    pub brand_id: String,
    pub visibility_score: u8,
    pub trust_score: u8,
    /// Covered keywords as a percentage of the total
    pub keyword_coverage: u8,
    pub total_keywords: u32,
    pub covered_keywords: u32,
    pub last_audit: DateTime<Utc>,
    pub trends: Trends,
}

impl DashboardSnapshot {
    /// Keyword coverage recomputed from the raw counts, rounded to a whole percent.
    pub fn computed_coverage(&self) -> Option<u8> {
        if self.total_keywords == 0 {
            return None;
        }
        let percent =
            (f64::from(self.covered_keywords) * 100.0 / f64::from(self.total_keywords)).round();
        Some(percent.clamp(0.0, 100.0) as u8)
    }
}

/// Percent deltas against the previous audit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Trends {
    pub visibility: i32,
    pub trust: i32,
    pub keywords: i32,
}
