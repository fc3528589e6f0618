// src/catalog/mod.rs

//! The static catalog every page reads from.
//!
//! The built-in catalog is embedded at compile time from `data/catalog.json`.
//! A replacement file with the same shape can be loaded at runtime; nothing
//! writes back to a catalog once it is loaded.
//!
//! ## File Layout
//!
//! ```text
//! {
//!   "modules":      [AuditModule, ...],       // ordered
//!   "results":      { "<module id>": AuditResult, ... },
//!   "brands":       [Brand, ...],
//!   "dashboard":    DashboardSnapshot,
//!   "architecture": { "stages": [...], "characteristics": [...] }
//! }
//! ```

mod validate;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{
    Architecture, AuditModule, AuditResult, Brand, DashboardSnapshot, ModuleCategory,
};

pub use validate::ValidationReport;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// In-memory catalog of modules, results, brands and dashboard data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    /// Module table in display order
    pub modules: Vec<AuditModule>,

    /// Result table keyed by module id
    #[serde(default)]
    pub results: BTreeMap<String, AuditResult>,

    #[serde(default)]
    pub brands: Vec<Brand>,

    pub dashboard: DashboardSnapshot,

    #[serde(default)]
    pub architecture: Architecture,
}

impl Catalog {
    /// Parse the catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG, "built-in catalog")
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(text: &str, context: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| AppError::catalog(context, e))
    }

    /// Load a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text, &path.display().to_string())
    }

    /// Load `path` when given, otherwise the built-in catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading catalog from {}", path.display());
                Self::load(path)
            }
            None => Self::builtin(),
        }
    }

    /// Look up a module by id.
    pub fn module(&self, id: &str) -> Option<&AuditModule> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Look up a result by module id. Unknown ids yield `None`.
    pub fn result(&self, module_id: &str) -> Option<&AuditResult> {
        self.results.get(module_id)
    }

    /// Look up a brand by id.
    pub fn brand(&self, id: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == id)
    }

    /// Brand the dashboard snapshot belongs to.
    pub fn dashboard_brand(&self) -> Option<&Brand> {
        self.brand(&self.dashboard.brand_id)
    }

    /// Modules tagged with `category`, in table order.
    pub fn modules_in(&self, category: ModuleCategory) -> impl Iterator<Item = &AuditModule> {
        self.modules.iter().filter(move |m| m.category == category)
    }

    /// Categories that have at least one module, in display order.
    pub fn populated_categories(&self) -> Vec<ModuleCategory> {
        ModuleCategory::ALL
            .into_iter()
            .filter(|c| self.modules_in(*c).next().is_some())
            .collect()
    }
}
