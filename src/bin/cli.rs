//! TraceVibe CLI
//!
//! Searches social platforms for a username, one request at a time.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracevibe::{
    error::Result,
    models::{Config, Status},
    pipeline::{self, ExportFormat, ReportFilter},
    storage::{LocalStorage, ResultCache},
    utils::{console, http::ReqwestFetcher},
};

/// TraceVibe - trace usernames across platforms
#[derive(Parser, Debug)]
#[command(name = "tracevibe", version, about = "OSINT tool for username search")]
struct Cli {
    /// Path to storage directory containing config and cache files
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress the results report
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search platforms for one or more usernames
    Search {
        /// Usernames to search for
        usernames: Vec<String>,

        /// File with usernames (one per line)
        #[arg(short, long)]
        input_file: Option<PathBuf>,

        /// Only show results with this status
        #[arg(long, value_enum)]
        status: Option<StatusFilter>,

        /// Only show results for this platform (case-insensitive)
        #[arg(long)]
        platform: Option<String>,

        /// Export all results to this file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Export format
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// List the platform catalog
    Platforms,

    /// Validate configuration files
    Validate,

    /// Show storage and cache info
    Info,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StatusFilter {
    Found,
    NotFound,
}

impl From<StatusFilter> for Status {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::Found => Status::Found,
            StatusFilter::NotFound => Status::NotFound,
        }
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    console::init(cli.quiet);

    let config_path = cli.storage_dir.join("config.toml");
    let config = Config::load_or_default(&config_path);
    let storage = LocalStorage::new(&cli.storage_dir);

    match cli.command {
        Command::Search {
            usernames,
            input_file,
            status,
            platform,
            export,
            format,
        } => {
            config.validate()?;

            let usernames = pipeline::clean_usernames(usernames.iter().map(String::as_str));
            let usernames = match input_file {
                Some(path) if usernames.is_empty() => pipeline::read_usernames(&path),
                Some(_) => {
                    log::warn!("Ignoring --input-file since usernames were given");
                    usernames
                }
                None => usernames,
            };

            let fetcher = Arc::new(ReqwestFetcher::from_config(&config.prober)?);
            let outcome = pipeline::run_search(&config, &storage, fetcher, &usernames).await?;

            let filter = ReportFilter {
                status: status.map(Status::from),
                platform,
            };
            console::print_block(&pipeline::render_report(&outcome.profiles, &filter));
            console::summary(
                "Search",
                &[
                    ("Usernames", outcome.username_total.to_string()),
                    ("From cache", outcome.cache_hits.to_string()),
                    ("Results", outcome.profiles.len().to_string()),
                    ("Found", outcome.found_total.to_string()),
                ],
            );

            if let Some(path) = export {
                if outcome.profiles.is_empty() {
                    log::warn!("Nothing to export");
                } else {
                    pipeline::export_to_file(&path, &outcome.profiles, format)?;
                }
            }
        }

        Command::Platforms => {
            let catalog = config.catalog()?;
            console::header(&format!("{} platforms", catalog.len()));
            let rows: Vec<Vec<String>> = catalog
                .platforms()
                .iter()
                .map(|p| {
                    vec![
                        p.name.clone(),
                        p.url_template.clone(),
                        p.not_found_signatures.len().to_string(),
                    ]
                })
                .collect();
            console::print_block(&console::format_table(
                &["Platform", "URL template", "Signatures"],
                &rows,
            ));
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK ({} platforms)", config.platforms.len());
        }

        Command::Info => {
            let cache = ResultCache::load(&storage, &config.paths.cache_file).await;
            let cache_path = storage.path(&config.paths.cache_file);
            console::summary(
                "Storage",
                &[
                    ("Directory", cli.storage_dir.display().to_string()),
                    (
                        "Config",
                        if config_path.exists() {
                            config_path.display().to_string()
                        } else {
                            "defaults".to_string()
                        },
                    ),
                    ("Cache", cache_path.display().to_string()),
                    ("Cached usernames", cache.len().to_string()),
                ],
            );
            if cache.is_empty() {
                log::info!("No cached searches yet.");
            }
        }
    }

    Ok(())
}
