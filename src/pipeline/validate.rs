// src/pipeline/validate.rs

use crate::catalog::{Catalog, ValidationReport};
use crate::error::Result;
use crate::models::Config;

/// Validate configuration against itself and the catalog.
///
/// Configuration errors are returned as `Err`; catalog problems are collected
/// in the report so every one of them can be shown at once.
pub fn run_validate(config: &Config, catalog: &Catalog) -> Result<ValidationReport> {
    log::info!("Validating configuration...");
    config.validate()?;
    log::info!("✓ Config OK (site '{}')", config.site.name);

    log::info!(
        "Validating catalog: {} modules, {} results, {} brands",
        catalog.modules.len(),
        catalog.results.len(),
        catalog.brands.len()
    );
    let mut report = catalog.validate()?;

    let default_module = &config.audit.default_module;
    if catalog.module(default_module).is_none() {
        report.errors.push(format!(
            "audit.default_module '{default_module}' is not in the catalog"
        ));
    }

    for warning in &report.warnings {
        log::warn!("{warning}");
    }
    for error in &report.errors {
        log::error!("{error}");
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_passes() {
        let config = Config::default();
        let catalog = Catalog::builtin().unwrap();

        let report = run_validate(&config, &catalog).unwrap();
        assert!(report.is_ok(), "{:?}", report.errors);
    }

    #[test]
    fn test_unknown_default_module() {
        let mut config = Config::default();
        config.audit.default_module = "missing-module".to_string();
        let catalog = Catalog::builtin().unwrap();

        let report = run_validate(&config, &catalog).unwrap();
        assert!(!report.is_ok());
        assert!(report.errors[0].contains("missing-module"));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let mut config = Config::default();
        config.output.max_concurrent_writes = 0;
        let catalog = Catalog::builtin().unwrap();

        assert!(run_validate(&config, &catalog).is_err());
    }
}
