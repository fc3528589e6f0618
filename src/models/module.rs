//! Audit module definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// One of the fixed analysis dimensions shown in the audit browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditModule {
    /// Unique slug, also the key into the result table
    pub id: String,

    /// Display name
    pub name: String,

    /// One-paragraph description
    pub description: String,

    /// Icon shown next to the module name
    pub icon: ModuleIcon,

    /// Category used by the category filter
    pub category: ModuleCategory,

    /// Accent color of the module card
    pub color: ColorTag,
}

impl AuditModule {
    /// Case-insensitive match of `needle` against name or description.
    ///
    /// `needle` must already be lowercased; an empty needle always matches.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Module category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    Visibility,
    Trust,
    Content,
    Technical,
}

impl ModuleCategory {
    /// Every category, in display order.
    pub const ALL: [ModuleCategory; 4] = [
        ModuleCategory::Visibility,
        ModuleCategory::Trust,
        ModuleCategory::Content,
        ModuleCategory::Technical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleCategory::Visibility => "visibility",
            ModuleCategory::Trust => "trust",
            ModuleCategory::Content => "content",
            ModuleCategory::Technical => "technical",
        }
    }

    /// Capitalized label for select boxes.
    pub fn label(&self) -> &'static str {
        match self {
            ModuleCategory::Visibility => "Visibility",
            ModuleCategory::Trust => "Trust",
            ModuleCategory::Content => "Content",
            ModuleCategory::Technical => "Technical",
        }
    }
}

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "visibility" => Ok(ModuleCategory::Visibility),
            "trust" => Ok(ModuleCategory::Trust),
            "content" => Ok(ModuleCategory::Content),
            "technical" => Ok(ModuleCategory::Technical),
            other => Err(AppError::validation(format!(
                "unknown module category '{other}'"
            ))),
        }
    }
}

/// Icon names understood by the renderers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ModuleIcon {
    Eye,
    Shield,
    FileText,
    Network,
    Link,
    Code,
    TrendingUp,
}

impl ModuleIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleIcon::Eye => "Eye",
            ModuleIcon::Shield => "Shield",
            ModuleIcon::FileText => "FileText",
            ModuleIcon::Network => "Network",
            ModuleIcon::Link => "Link",
            ModuleIcon::Code => "Code",
            ModuleIcon::TrendingUp => "TrendingUp",
        }
    }

    /// Single-glyph stand-in used in terminal output and as icon fallback text.
    pub fn glyph(&self) -> &'static str {
        match self {
            ModuleIcon::Eye => "◉",
            ModuleIcon::Shield => "⛨",
            ModuleIcon::FileText => "▤",
            ModuleIcon::Network => "⋈",
            ModuleIcon::Link => "⛓",
            ModuleIcon::Code => "⌘",
            ModuleIcon::TrendingUp => "↗",
        }
    }
}

/// Accent color tags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Green,
    Purple,
    Orange,
    Cyan,
    Gray,
    Pink,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Blue => "blue",
            ColorTag::Green => "green",
            ColorTag::Purple => "purple",
            ColorTag::Orange => "orange",
            ColorTag::Cyan => "cyan",
            ColorTag::Gray => "gray",
            ColorTag::Pink => "pink",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_module() -> AuditModule {
        AuditModule {
            id: "eeat-trust".to_string(),
            name: "E-E-A-T & Trust Signals".to_string(),
            description: "Evaluates Experience and Expertise signals.".to_string(),
            icon: ModuleIcon::Shield,
            category: ModuleCategory::Trust,
            color: ColorTag::Green,
        }
    }

    #[test]
    fn test_matches_lowercase() {
        let module = sample_module();
        assert!(module.matches_lowercase(""));
        assert!(module.matches_lowercase("trust"));
        assert!(module.matches_lowercase("expertise"));
        assert!(!module.matches_lowercase("citation"));
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "Technical".parse::<ModuleCategory>().unwrap(),
            ModuleCategory::Technical
        );
        assert!("all".parse::<ModuleCategory>().is_err());
    }

    #[test]
    fn test_module_deserialize() {
        let json = r#"{
            "id": "ai-visibility",
            "name": "AI Visibility",
            "description": "Measures mentions.",
            "icon": "TrendingUp",
            "category": "visibility",
            "color": "cyan"
        }"#;
        let module: AuditModule = serde_json::from_str(json).unwrap();
        assert_eq!(module.icon, ModuleIcon::TrendingUp);
        assert_eq!(module.category, ModuleCategory::Visibility);
        assert_eq!(module.color, ColorTag::Cyan);
    }
}
