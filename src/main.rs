use anyhow::{Context, Result};
use clap::Parser;
use daily_digest::app::{create_http_client, App};
use daily_digest::config::Config;
use daily_digest::digest::{to_markdown, Category};
use daily_digest::feed::{DocumentOrigin, FeedLoader};
use daily_digest::ui::{render_page, MemoryView, TerminalPlatform, UiEvent};
use std::path::PathBuf;

/// Get the config file path (~/.config/daily-digest/config.toml)
fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("daily-digest")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(
    name = "digest",
    about = "Render the daily AI-biomed / microfluidics / bioinformatics digest"
)]
struct Args {
    /// Date key to load (YYYY-MM-DD); defaults to today in the configured timezone
    #[arg(long)]
    date: Option<String>,

    /// Config file (defaults to ~/.config/daily-digest/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Site root the digest is published under (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Tab to show: ai_biomed, microfluidics or bioinfo
    #[arg(long)]
    category: Option<Category>,

    /// Search query applied to every category
    #[arg(long, short)]
    query: Option<String>,

    /// Write the rendered page to this file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Copy the day's published markdown to the clipboard
    #[arg(long)]
    copy_markdown: bool,

    /// Open the written page in the browser for printing (requires --out)
    #[arg(long)]
    print: bool,

    /// Write markdown generated from the loaded document to this file
    #[arg(long, value_name = "FILE")]
    export_markdown: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout may carry the page
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }

    let client =
        create_http_client(config.request_timeout()).context("Failed to build HTTP client")?;
    let loader = FeedLoader::new(
        client,
        &config.base_url,
        &config.data_dir,
        config.request_timeout(),
    )
    .with_context(|| format!("Invalid base URL: {}", config.base_url))?;

    let mut app = App::new(
        loader,
        &config,
        MemoryView::default(),
        TerminalPlatform::new(),
    )
    .context("Invalid configuration")?;

    let loaded = app.boot(args.date.as_deref()).await;
    match (loaded.origin, loaded.date_key.as_deref()) {
        (DocumentOrigin::Fallback, Some(key)) => {
            eprintln!("Requested digest not published yet, showing {}", key)
        }
        (DocumentOrigin::Empty, _) => {
            eprintln!("No digest available for the requested day or the day before")
        }
        _ => {}
    }

    if let Some(category) = args.category {
        app.dispatch(UiEvent::TabClicked(category)).await;
    }
    if let Some(query) = &args.query {
        app.dispatch(UiEvent::SearchInput(query.clone())).await;
    }

    let page = render_page(app.view(), app.state()).into_string();
    match &args.out {
        Some(path) => {
            std::fs::write(path, &page)
                .with_context(|| format!("Failed to write page to {}", path.display()))?;
            eprintln!("Wrote {} ({} items)", path.display(), app.view().total);
            let absolute = path.canonicalize().unwrap_or_else(|_| path.clone());
            app.platform_mut().set_page(absolute);
        }
        None => println!("{}", page),
    }

    if let Some(path) = &args.export_markdown {
        std::fs::write(path, to_markdown(app.document()))
            .with_context(|| format!("Failed to write markdown to {}", path.display()))?;
        eprintln!("Wrote {}", path.display());
    }

    if args.copy_markdown {
        app.dispatch(UiEvent::CopyMarkdownClicked).await;
    }
    if args.print {
        app.dispatch(UiEvent::PrintClicked).await;
    }

    Ok(())
}
