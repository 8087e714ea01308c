use std::fs;
use std::sync::Arc;

use clap::Parser;
use log::info;

use portfolio::cli::{CacheAction, Cli, Commands};
use portfolio::config::Config;
use portfolio::domain::{PlatformSpecs, Profile};
use portfolio::errors::PortfolioResult;
use portfolio::render;
use portfolio::services::cache_service::format_age;
use portfolio::services::{CacheService, PageService};
use portfolio::sources::{CachingFetcher, Fetcher, HttpFetcher, MediumSource};
use portfolio::storage::{SqliteResponseCache, SqliteStorage};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> PortfolioResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize response cache
    info!("Using cache at {}", config.cache_path);
    let storage = SqliteStorage::new(&config.cache_path)?;

    match cli.command {
        Commands::Render {
            output,
            profile,
            no_cache,
        } => cmd_render(&config, storage, output, profile, no_cache),
        Commands::Articles { no_cache } => cmd_articles(&config, storage, no_cache),
        Commands::Stats { no_cache } => cmd_stats(&config, storage, no_cache),
        Commands::Cache { action } => cmd_cache(storage, action),
    }
}

fn fetcher(storage: SqliteStorage, no_cache: bool) -> PortfolioResult<Arc<dyn Fetcher>> {
    let fetcher: Arc<dyn Fetcher> = Arc::new(
        CachingFetcher::new(HttpFetcher::new()?, SqliteResponseCache::new(storage))
            .bypass_reads(no_cache),
    );
    Ok(fetcher)
}

fn cmd_render(
    config: &Config,
    storage: SqliteStorage,
    output: Option<String>,
    profile: Option<String>,
    no_cache: bool,
) -> PortfolioResult<()> {
    let profile = match profile {
        Some(path) => Profile::from_file(path)?,
        None => Profile::default(),
    };

    let service = PageService::from_config(config, fetcher(storage, no_cache)?)?;
    let page = service.assemble(profile)?;
    let html = render::render_page(&page);

    match output {
        Some(path) => {
            fs::write(&path, &html)?;
            println!("Rendered portfolio to {}", path);
        }
        None => {
            print!("{}", html);
        }
    }

    Ok(())
}

fn cmd_articles(config: &Config, storage: SqliteStorage, no_cache: bool) -> PortfolioResult<()> {
    let source = MediumSource::from_config(fetcher(storage, no_cache)?, config);
    let articles = source.fetch_articles()?;

    if articles.is_empty() {
        println!("No articles found.");
        return Ok(());
    }

    for article in articles {
        println!("{}", article.title);
        if let Some(published) = article.published {
            println!("  Published: {}", published.format("%Y-%m-%d"));
        }
        println!("  Link: {}", article.link);
        println!("  {}", article.description);
        println!();
    }

    Ok(())
}

fn print_specs(platform: &str, specs: &PlatformSpecs) {
    println!("{}: {} ({})", platform, specs.title, specs.link);
    for spec in &specs.specs {
        println!("  {:>12} {}", spec.count, spec.label);
    }
    println!();
}

fn cmd_stats(config: &Config, storage: SqliteStorage, no_cache: bool) -> PortfolioResult<()> {
    let service = PageService::from_config(config, fetcher(storage, no_cache)?)?;
    let (github, youtube) = service.stats()?;

    print_specs("GitHub", &github);
    print_specs("YouTube", &youtube);

    Ok(())
}

fn cmd_cache(storage: SqliteStorage, action: CacheAction) -> PortfolioResult<()> {
    let service = CacheService::new(SqliteResponseCache::new(storage));

    match action {
        CacheAction::List => {
            let entries = service.entries()?;

            if entries.is_empty() {
                println!("Cache is empty.");
                return Ok(());
            }

            println!("Cached responses:\n");
            for entry in entries {
                println!(
                    "  {} ({} bytes, fetched {} ago)",
                    entry.cache_key,
                    entry.size,
                    format_age(entry.age)
                );
            }
        }
        CacheAction::Clear => {
            let removed = service.clear()?;
            println!("Removed {} cached responses.", removed);
        }
    }

    Ok(())
}
