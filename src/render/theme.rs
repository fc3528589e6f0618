//! Color classes for statuses, levels and module accents.

use crate::models::{ColorTag, Impact, Priority, ScoreStatus, Severity};

/// Badge classes for a status band.
pub fn status_classes(status: ScoreStatus) -> &'static str {
    match status {
        ScoreStatus::Excellent => "text-green-600 bg-green-50 border-green-200",
        ScoreStatus::Good => "text-blue-600 bg-blue-50 border-blue-200",
        ScoreStatus::Warning => "text-yellow-600 bg-yellow-50 border-yellow-200",
        ScoreStatus::Critical => "text-red-600 bg-red-50 border-red-200",
    }
}

pub fn severity_classes(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "bg-red-100 text-red-700 border-red-200",
        Severity::Warning => "bg-yellow-100 text-yellow-700 border-yellow-200",
        Severity::Info => "bg-blue-100 text-blue-700 border-blue-200",
    }
}

pub fn impact_classes(impact: Impact) -> &'static str {
    match impact {
        Impact::High => "bg-green-100 text-green-700 border-green-200",
        Impact::Medium => "bg-blue-100 text-blue-700 border-blue-200",
        Impact::Low => "bg-gray-100 text-gray-700 border-gray-200",
    }
}

pub fn priority_classes(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "bg-red-100 text-red-700 border-red-200",
        Priority::Medium => "bg-yellow-100 text-yellow-700 border-yellow-200",
        Priority::Low => "bg-gray-100 text-gray-700 border-gray-200",
    }
}

/// Accent classes for a module or pipeline stage color.
pub fn accent_classes(color: ColorTag) -> String {
    let c = color.as_str();
    format!("bg-{c}-50 text-{c}-600 border-{c}-200")
}

/// Trend text color: green for gains, red otherwise.
pub fn trend_classes(delta: i32) -> &'static str {
    if delta > 0 {
        "text-green-600"
    } else {
        "text-red-600"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        assert!(status_classes(ScoreStatus::Excellent).contains("green"));
        assert!(status_classes(ScoreStatus::Good).contains("blue"));
        assert!(status_classes(ScoreStatus::Warning).contains("yellow"));
        assert!(status_classes(ScoreStatus::Critical).contains("red"));
    }

    #[test]
    fn test_accent_classes() {
        assert_eq!(
            accent_classes(ColorTag::Cyan),
            "bg-cyan-50 text-cyan-600 border-cyan-200"
        );
    }
}
