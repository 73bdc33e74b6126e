mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mlprice")]
#[command(about = "Search listings and write a price-sorted report")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Crawl every results page for a product and write the price report
    Search {
        /// Search term, e.g. "notebook gamer"
        #[arg(long)]
        product: String,

        /// Report file path (defaults to MLPRICE_OUTPUT_PATH)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Maximum number of results pages to read (defaults to MLPRICE_MAX_PAGES)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        max_pages: Option<u64>,

        /// Print the report to stdout instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = mlprice_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Search {
            product,
            output,
            max_pages,
            dry_run,
        }) => {
            let max_pages = max_pages
                .map(usize::try_from)
                .transpose()?
                .unwrap_or(config.max_pages);
            let request = search::SearchRequest {
                product: &product,
                output: output.as_deref().unwrap_or(config.output_path.as_path()),
                max_pages,
                dry_run,
            };
            search::run_search(&config, &request).await?;
        }
        None => println!("mlprice: run `mlprice search --product <TERM>`"),
    }

    Ok(())
}
