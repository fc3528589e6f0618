//! Kasparro CLI
//!
//! Builds the static site and browses the audit catalog from the terminal.

use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use kasparro::{
    browser::{AuditBrowser, CategoryFilter},
    catalog::Catalog,
    error::{AppError, Result},
    models::Config,
    pipeline::{self, BuildOptions},
    render::text,
    storage::{LocalStorage, SiteStorage},
};

/// Kasparro - AI-native brand intelligence front-end
#[derive(Parser, Debug)]
#[command(
    name = "kasparro",
    version,
    about = "Static site generator and audit browser for Kasparro"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "kasparro.toml")]
    config: PathBuf,

    /// Catalog JSON file replacing the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render and write the site
    Build {
        /// Output directory (default: output.dir from config)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Rewrite pages even if unchanged
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration and catalog
    Validate,

    /// Check internal links of a built site
    Check {
        /// Site directory (default: output.dir from config)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List audit modules
    Modules {
        /// Case-insensitive match on name or description
        #[arg(short, long, default_value = "")]
        search: String,

        /// all, visibility, trust, content or technical
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },

    /// Show the audit result of one module
    Show {
        /// Module id, e.g. eeat-trust
        module: String,

        /// Recommendation id to expand
        #[arg(long)]
        expand: Option<String>,
    },

    /// Show the dashboard snapshot
    Dashboard,

    /// Show built site info
    Info {
        /// Site directory (default: output.dir from config)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, configured: Option<&str>) {
    let level = if verbose {
        "debug"
    } else {
        configured.unwrap_or("info")
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load(&cli.config);
    init_logging(
        cli.verbose,
        loaded.as_ref().ok().map(|c| c.logging.level.as_str()),
    );
    let mut config = loaded.unwrap_or_else(|e| {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        );
        Config::default()
    });

    let catalog = Catalog::load_or_builtin(cli.catalog.as_deref())?;
    let now = Utc::now();

    match cli.command {
        Command::Build { out, force } => {
            if let Some(out) = out {
                config.output.dir = out.display().to_string();
            }
            let storage = LocalStorage::new(config.output.dir_path());
            log::info!("Building site into {}", storage.root().display());

            let summary = pipeline::run_build_with_options(
                &config,
                &catalog,
                &storage,
                now,
                &BuildOptions { force },
            )
            .await?;
            log::info!(
                "Wrote {} of {} pages to {}",
                summary.written,
                summary.pages,
                storage.root().display()
            );
        }

        Command::Validate => {
            let report = pipeline::run_validate(&config, &catalog)?;
            if !report.is_ok() {
                return Err(AppError::validation(format!(
                    "{} catalog error(s)",
                    report.errors.len()
                )));
            }
            log::info!(
                "All validations passed ({} warning(s))",
                report.warnings.len()
            );
        }

        Command::Check { out } => {
            let dir = out.unwrap_or_else(|| config.output.dir_path());
            let storage = LocalStorage::new(&dir);
            let Some(manifest) = storage.load_manifest().await? else {
                return Err(AppError::not_found(format!(
                    "manifest.json in {}. Run 'build' first.",
                    dir.display()
                )));
            };

            let report = pipeline::check_links(&storage, &manifest).await?;
            if !report.is_ok() {
                for link in &report.broken {
                    log::error!("{}: broken link {}", link.page, link.href);
                }
                for page in &report.missing_pages {
                    log::error!("{}: listed in manifest but missing", page);
                }
                return Err(AppError::validation(format!(
                    "{} broken link(s), {} missing page(s)",
                    report.broken.len(),
                    report.missing_pages.len()
                )));
            }
            log::info!("✓ All internal links resolve");
        }

        Command::Modules { search, category } => {
            let mut browser = AuditBrowser::new(&catalog);
            browser.set_search_query(search);
            browser.set_category_filter(category);
            print!("{}", text::module_table(&browser));
        }

        Command::Show { module, expand } => {
            let mut browser = AuditBrowser::new(&catalog);
            browser.select_module(module.as_str());
            if browser.selected_result().is_none() {
                log::warn!("No audit result for module '{}'", module);
            }
            if let Some(rec) = expand {
                browser.toggle_recommendation(rec.as_str());
                if browser.expanded_recommendation().is_none() {
                    log::warn!("Module '{}' has no recommendation '{}'", module, rec);
                }
            }
            print!("{}", text::result_detail(&browser));
        }

        Command::Dashboard => {
            print!("{}", text::dashboard_summary(&catalog, &now));
        }

        Command::Info { out } => {
            let dir = out.unwrap_or_else(|| config.output.dir_path());
            let storage = LocalStorage::new(&dir);
            println!("Output directory: {}", dir.display());
            match storage.load_manifest().await? {
                Some(manifest) => {
                    println!("Site: {}", manifest.site_name);
                    println!("Generated at: {}", manifest.generated_at.to_rfc3339());
                    println!("Pages: {}", manifest.page_count);
                    let sitemap = storage.exists(pipeline::SITEMAP_KEY).await?;
                    println!("Sitemap: {}", if sitemap { "present" } else { "not found" });
                }
                None => println!("No manifest found yet. Run 'build' first."),
            }
        }
    }

    Ok(())
}
