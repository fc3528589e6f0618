//! Category filter for the module list.

use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, Result};
use crate::models::{AuditModule, ModuleCategory};

/// Category predicate; `All` disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ModuleCategory),
}

impl CategoryFilter {
    /// Every filter value in select-box order.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ModuleCategory::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn accepts(&self, module: &AuditModule) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => module.category == *category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl From<ModuleCategory> for CategoryFilter {
    fn from(category: ModuleCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<ModuleCategory>().map(CategoryFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "trust".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(ModuleCategory::Trust)
        );
        assert!("seo".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_options_order() {
        let names: Vec<_> = CategoryFilter::options().map(|f| f.as_str()).collect();
        assert_eq!(names, ["all", "visibility", "trust", "content", "technical"]);
    }
}
