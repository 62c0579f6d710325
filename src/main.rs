use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use voicegrade::config::Config;
use voicegrade::input::{self, Submission};
use voicegrade::models::ContentItem;
use voicegrade::output::{markdown, terminal};
use voicegrade::scoring::consistency::ConsistencyAnalyzer;
use voicegrade::text::tokenize::tokenize;
use voicegrade::ConsistencyError;

/// Voicegrade: score how consistent your brand voice is across platforms.
///
/// Compares the tone, formality, and key messages of content written for
/// different platforms and suggests where they drift apart.
#[derive(Parser)]
#[command(name = "voicegrade", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a set of platform content for consistency
    Analyze {
        /// JSON submission file ({"brandName": ..., "contentItems": [...]})
        #[arg(long, conflicts_with_all = ["brand", "item"])]
        input: Option<PathBuf>,

        /// Brand name (when passing items individually)
        #[arg(long)]
        brand: Option<String>,

        /// Content item as PLATFORM=FILE (repeat for each platform)
        #[arg(long = "item", value_name = "PLATFORM=FILE")]
        item: Vec<String>,

        /// Print the result as JSON instead of the colored summary
        #[arg(long)]
        json: bool,

        /// Write a markdown report (to the given path, or VOICEGRADE_REPORT_DIR)
        #[arg(long, num_args = 0..=1, value_name = "PATH")]
        report: Option<Option<PathBuf>>,

        /// Skip brand/length/duplicate checks and go straight to scoring
        #[arg(long)]
        skip_validation: bool,
    },

    /// Show the metrics extracted from a single text file
    Inspect {
        /// Text file to inspect
        file: PathBuf,
    },

    /// Show the active sentiment and formality word lists
    Lexicon,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("voicegrade=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            input: submission_path,
            brand,
            item,
            json,
            report,
            skip_validation,
        } => {
            let submission = match submission_path {
                Some(path) => Submission::load(&path)?,
                None => submission_from_args(brand.unwrap_or_default(), &item)?,
            };

            for content in &submission.content_items {
                if !input::is_known_platform(&content.platform) {
                    warn!(platform = %content.platform, "Unrecognized platform label");
                }
            }

            if !skip_validation {
                let issues = input::validate_submission(
                    &submission.brand_name,
                    &submission.content_items,
                    config.min_content_chars,
                );
                if !issues.is_empty() {
                    eprintln!("{}", "Submission has problems:".red().bold());
                    for issue in &issues {
                        eprintln!("  - {issue}");
                    }
                    anyhow::bail!(
                        "{} validation issue(s); fix them or pass --skip-validation",
                        issues.len()
                    );
                }
            }

            let analyzer = ConsistencyAnalyzer::new(config.lexicon()?)
                .with_empty_keyword_policy(config.empty_keyword_policy);

            let progress = if json { None } else { Some(spinner()) };
            let outcome = analyzer.analyze(&submission.content_items);
            if let Some(pb) = progress {
                pb.finish_and_clear();
            }

            let result = match outcome {
                Ok(result) => result,
                Err(err @ ConsistencyError::InsufficientInput { .. }) => {
                    eprintln!(
                        "{}",
                        "Add content from at least two platforms to compare.".yellow()
                    );
                    return Err(err.into());
                }
                Err(err) => return Err(err).context("Consistency analysis failed"),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_result(
                    &submission.brand_name,
                    &submission.content_items,
                    &result,
                );
            }

            if let Some(explicit) = report {
                let path = explicit.unwrap_or_else(|| {
                    config
                        .report_dir
                        .join(markdown::default_report_name(&submission.brand_name))
                });
                markdown::write_report(
                    &path,
                    &submission.brand_name,
                    &submission.content_items,
                    &result,
                )?;
                if !json {
                    println!("Report written to: {}", path.display());
                }
            }
        }

        Commands::Inspect { file } => {
            let text = read_text(&file)?;
            let analyzer = ConsistencyAnalyzer::new(config.lexicon()?);
            let metrics = analyzer.item_metrics(&text);
            terminal::display_item_metrics(
                &file.display().to_string(),
                tokenize(&text).len(),
                &metrics,
            );
        }

        Commands::Lexicon => {
            let lexicon = config.lexicon()?;
            let source = match &config.lexicon_path {
                Some(path) => path.display().to_string(),
                None => "built-in".to_string(),
            };
            terminal::display_lexicon(&lexicon, &source);
        }
    }

    Ok(())
}

/// Assemble a submission from `--brand` and repeated `--item PLATFORM=FILE`.
fn submission_from_args(brand_name: String, item_specs: &[String]) -> Result<Submission> {
    let mut content_items = Vec::with_capacity(item_specs.len());
    for spec in item_specs {
        let (platform, path) = input::parse_item_spec(spec)?;
        let text = read_text(Path::new(&path))?;
        content_items.push(ContentItem::new(platform, text));
    }

    if content_items.is_empty() {
        warn!("No content items given; pass --input FILE or --item PLATFORM=FILE");
    }
    info!(items = content_items.len(), "Loaded content items");

    Ok(Submission {
        brand_name,
        content_items,
    })
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Analyzing content consistency...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
