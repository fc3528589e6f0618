// src/models/mod.rs

//! Domain models for the site generator.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod architecture;
mod brand;
mod config;
mod module;
mod result;

// Re-export all public types
pub use architecture::{Architecture, Characteristic, PipelineStage};
pub use brand::{Brand, DashboardSnapshot, Trends};
pub use config::{AuditConfig, Config, LoggingConfig, OutputConfig, SiteConfig};
pub use module::{AuditModule, ColorTag, ModuleCategory, ModuleIcon};
pub use result::{
    AuditResult, Impact, Insight, Issue, Metric, MetricValue, Priority, Recommendation,
    ScoreStatus, Severity,
};
