use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use dd_fetch::dd::{Locale, Set, Version};
use dd_fetch::fetcher::url::{locale_for_url, set_name_for_url};
use dd_fetch::utils::files::{document_file_name, ensure_directory, write_json};
use dd_fetch::{Fetcher, FetcherConfig, TracingLogger, DATA_DRAGON_URL};
use futures::stream::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Fetch Legends of Runeterra Data Dragon documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Data Dragon host to fetch from
    #[arg(long, global = true, default_value = DATA_DRAGON_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct Release {
    /// Locale of the documents, e.g. en_US
    #[arg(short, long, default_value = "en_US")]
    locale: Locale,

    /// Game version, e.g. 4.9.1
    #[arg(short, long)]
    version: Version,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the globals document
    Globals {
        #[command(flatten)]
        release: Release,

        /// File to write the document to, prints a summary when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fetch the cards of one set
    SetCards {
        #[command(flatten)]
        release: Release,

        /// Set directory name, e.g. Set1
        #[arg(short, long)]
        set: String,

        /// File to write the cards to, prints a summary when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fetch globals and the cards of every set they list
    AllSets {
        #[command(flatten)]
        release: Release,

        /// Directory where to save the documents
        #[arg(short, long, default_value = "dd-data")]
        path: PathBuf,

        /// Number of sets fetched at once
        #[arg(short, long, default_value_t = 4)]
        concurrency: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = FetcherConfig {
        base_url: cli.base_url,
        timeout: cli.timeout.map(Duration::from_secs),
        ..Default::default()
    };

    let mut fetcher = Fetcher::with_config(config, Arc::new(TracingLogger))
        .context("Failed to create fetcher")?;

    let result = match cli.command {
        Commands::Globals { release, output } => {
            fetch_globals(&fetcher, &release, output.as_deref()).await
        }
        Commands::SetCards { release, set, output } => {
            fetch_set_cards(&fetcher, &release, &set, output.as_deref()).await
        }
        Commands::AllSets {
            release,
            path,
            concurrency,
        } => fetch_all_sets(&fetcher, &release, &path, concurrency).await,
    };

    fetcher.close();

    result
}

async fn fetch_globals(
    fetcher: &Fetcher,
    release: &Release,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let Some(globals) = fetcher
        .fetch_globals(&release.locale, &release.version)
        .await?
    else {
        anyhow::bail!(
            "Globals for {} {} are unavailable",
            release.locale,
            release.version
        );
    };

    match output {
        Some(path) => {
            write_json(path, &globals).await?;
            println!("Successfully downloaded: {}", path.display());
        }

        None => {
            println!("Regions: {}", globals.regions.len());
            println!("Keywords: {}", globals.keywords.len());
            println!("Sets:");

            for set in &globals.sets {
                println!(
                    "  - {} ({})",
                    set.name,
                    set.name_ref.as_deref().unwrap_or("no directory")
                );
            }
        }
    }

    Ok(())
}

async fn fetch_set_cards(
    fetcher: &Fetcher,
    release: &Release,
    set: &str,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let set = Set::new(set, Some(set));

    let Some(cards) = fetcher
        .fetch_set_cards(&release.locale, &release.version, &set)
        .await?
    else {
        anyhow::bail!("Cards of set {} are unavailable", set.name);
    };

    match output {
        Some(path) => {
            write_json(path, &cards).await?;
            println!("Successfully downloaded: {}", path.display());
        }

        None => {
            let collectible = cards.iter().filter(|card| card.collectible).count();

            println!("Found {} cards ({} collectible)", cards.len(), collectible);
        }
    }

    Ok(())
}

async fn fetch_all_sets(
    fetcher: &Fetcher,
    release: &Release,
    path: &Path,
    concurrency: usize,
) -> anyhow::Result<()> {
    ensure_directory(path).await?;

    let locale = locale_for_url(&release.locale);

    let Some(globals) = fetcher
        .fetch_globals(&release.locale, &release.version)
        .await?
    else {
        anyhow::bail!(
            "Globals for {} {} are unavailable",
            release.locale,
            release.version
        );
    };

    let globals_path = path.join(document_file_name("globals", &locale));
    write_json(&globals_path, &globals).await?;
    println!("Successfully downloaded: {}", globals_path.display());

    let (sets, skipped): (Vec<&Set>, Vec<&Set>) = globals
        .sets
        .iter()
        .partition(|set| set.name_ref.is_some());

    let pb = ProgressBar::new(sets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} sets ({eta})",
            )?
            .progress_chars("#>-"),
    );

    let results = futures::stream::iter(sets.into_iter().map(|set| {
        let pb = &pb;
        let locale = &locale;

        async move {
            let cards = fetcher
                .fetch_set_cards(&release.locale, &release.version, set)
                .await;
            pb.inc(1);

            let cards = match cards {
                Ok(Some(cards)) => cards,
                Ok(None) => return Err(format!("{} is unavailable", set.name)),
                Err(e) => return Err(e.to_string()),
            };

            // Sets in `sets` always carry a directory name
            let name = set_name_for_url(set).unwrap_or_default();
            let file = path.join(document_file_name(&name, locale));

            write_json(&file, &cards)
                .await
                .map(|file| (file, cards.len()))
                .map_err(|e| e.to_string())
        }
    }))
    .buffer_unordered(concurrency.max(1))
    .collect::<Vec<_>>()
    .await;

    pb.finish_with_message("Done");

    println!("\nDownloaded JSON files:");

    let mut failed = 0;

    for result in results {
        match result {
            Ok((file, count)) => println!("  - {} ({} cards)", file.display(), count),
            Err(e) => {
                failed += 1;
                eprintln!("Error fetching set: {}", e);
            }
        }
    }

    if !skipped.is_empty() {
        println!("Skipped {} sets without a directory name", skipped.len());
    }

    if failed > 0 {
        anyhow::bail!("{} sets could not be fetched", failed);
    }

    Ok(())
}
