//! citeanchor CLI: resolve citation quotes against extracted page text.
//!
//! Usage:
//!   citeanchor anchors --quote <text> (--page-text <text> | --pages <file> --page <n>)
//!   citeanchor group --citations <file>
//!   citeanchor resolve --pages <file> --citation <json>

use citeanchor::{
    group_citations, AnchorResolver, ChatAnswer, Citation, MemoryPages, PageTextProvider,
    RecordingViewer, ResolverConfig,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "citeanchor",
    version,
    about = "Resolve AI-quoted citations to verbatim page anchors"
)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the anchors found for a quote
    Anchors {
        /// The quoted excerpt
        #[arg(long)]
        quote: String,
        /// Raw page text to search
        #[arg(long, conflicts_with = "pages")]
        page_text: Option<String>,
        /// JSON pages file (list of fragment lists, page 1 first)
        #[arg(long, requires = "page")]
        pages: Option<PathBuf>,
        /// 1-based page number within --pages
        #[arg(long)]
        page: Option<u32>,
    },
    /// Group the citations of a chat answer by source
    Group {
        /// Chat answer JSON or a bare JSON array of citations
        #[arg(long)]
        citations: PathBuf,
    },
    /// Run a full resolution against a recording viewer
    Resolve {
        /// JSON pages file (list of fragment lists, page 1 first)
        #[arg(long)]
        pages: PathBuf,
        /// Citation record as JSON
        #[arg(long)]
        citation: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CITEANCHOR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Default config location (~/.config/citeanchor/config.yaml)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("citeanchor").join("config.yaml"))
}

fn load_config(explicit: Option<PathBuf>) -> Result<ResolverConfig, String> {
    if let Some(path) = explicit {
        return ResolverConfig::load(&path)
            .map_err(|e| format!("failed to load config {}: {}", path.display(), e));
    }
    match default_config_path() {
        Some(path) if path.is_file() => ResolverConfig::load(&path)
            .map_err(|e| format!("failed to load config {}: {}", path.display(), e)),
        _ => Ok(ResolverConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to create tokio runtime: {}", e))
}

fn load_pages(path: &Path) -> Result<MemoryPages, String> {
    MemoryPages::load(path).map_err(|e| format!("failed to read pages {}: {}", path.display(), e))
}

fn cmd_anchors(
    config: &ResolverConfig,
    quote: &str,
    page_text: Option<String>,
    pages: Option<PathBuf>,
    page: Option<u32>,
) -> Result<i32, String> {
    let search = config.window_search().map_err(|e| e.to_string())?;
    let text = match (page_text, pages, page) {
        (Some(text), _, _) => text,
        (None, Some(path), Some(page)) => {
            let pages = load_pages(&path)?;
            runtime()?
                .block_on(pages.page_text(page))
                .map_err(|e| e.to_string())?
                .concatenated()
        }
        _ => return Err("either --page-text or --pages with --page is required".to_string()),
    };
    Ok(print_json(&search.search(quote, &text)))
}

fn cmd_group(config: &ResolverConfig, path: &Path) -> Result<i32, String> {
    let body = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| e.to_string())?;
    // A bare array is treated as the citation list of an empty answer
    let value = if value.is_array() {
        json!({ "answer": "", "citations": value })
    } else {
        value
    };
    let answer = ChatAnswer::from_value(&value, config.max_citations).map_err(|e| e.to_string())?;
    Ok(print_json(&group_citations(&answer.citations)))
}

fn cmd_resolve(config: &ResolverConfig, pages: &Path, citation: &str) -> Result<i32, String> {
    let pages = load_pages(pages)?;
    let record: serde_json::Value = serde_json::from_str(citation).map_err(|e| e.to_string())?;
    let citation = Citation::from_value(&record).map_err(|e| e.to_string())?;

    let viewer = Arc::new(RecordingViewer::new());
    let resolver = AnchorResolver::new(Arc::new(pages), viewer.clone(), viewer.clone())
        .with_config(config)
        .map_err(|e| e.to_string())?;
    runtime()?.block_on(resolver.resolve_and_highlight(&citation));

    Ok(print_json(&json!({
        "status": resolver.last_status(),
        "calls": viewer.calls(),
    })))
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = match load_config(cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Anchors {
            quote,
            page_text,
            pages,
            page,
        } => cmd_anchors(&config, &quote, page_text, pages, page),
        Commands::Group { citations } => cmd_group(&config, &citations),
        Commands::Resolve { pages, citation } => cmd_resolve(&config, &pages, &citation),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };
    std::process::exit(code);
}
