use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dialoguer::Input;
use pixabay_fetch::models::{RawSearchParameters, SearchParameters};
use pixabay_fetch::utils::config::{self, Config};
use pixabay_fetch::utils::logging;
use pixabay_fetch::ImageSourceClient;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pixabay-fetch", version, about = "Search Pixabay and download images with credits")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report how many images match a search
    Search(SearchArgs),
    /// Save the search results and download every image not already on disk
    Download {
        #[command(flatten)]
        search: SearchArgs,
        /// Reuse the saved results instead of searching again
        #[arg(long)]
        no_refresh: bool,
    },
}

#[derive(Args, Debug, Clone)]
struct SearchArgs {
    /// Search term; prompts for every field when omitted
    term: Option<String>,
    /// [a]ll, [h]orizontal, [v]ertical
    #[arg(short, long, default_value = "")]
    orientation: String,
    /// [a]ll, [p]hoto, [i]llustration, [v]ector
    #[arg(short = 't', long = "type", default_value = "")]
    image_type: String,
    /// Comma separated list of colors
    #[arg(short, long, default_value = "")]
    colors: String,
    #[arg(long, default_value = "")]
    category: String,
    #[arg(long, default_value = "")]
    min_width: String,
    #[arg(long, default_value = "")]
    min_height: String,
}

fn ask(prompt: &str) -> Result<String> {
    let answer: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read input")?;
    Ok(answer)
}

impl SearchArgs {
    fn raw(&self) -> RawSearchParameters {
        RawSearchParameters {
            orientation: self.orientation.clone(),
            category: self.category.clone(),
            min_width: self.min_width.clone(),
            min_height: self.min_height.clone(),
            image_type: self.image_type.clone(),
            colors: self.colors.clone(),
        }
    }

    /// Fills every field from the terminal when no term was given.
    fn resolve(self, with_colors: bool) -> Result<(String, RawSearchParameters)> {
        if let Some(term) = self.term.clone() {
            return Ok((term, self.raw()));
        }
        let term = ask("Image search term")?;
        let orientation = ask("Image orientation > [a]ll, [h]orizontal, [v]ertical")?;
        let image_type = ask("Image type > [a]ll, [p]hoto, [i]llustration, [v]ector")?;
        let colors = if with_colors { ask("Colors (optional)")? } else { String::new() };
        let category = ask("Narrow by image category (optional)")?;
        let min_width = ask("Minimum image width (optional)")?;
        let min_height = ask("Minimum image height (optional)")?;
        Ok((
            term,
            RawSearchParameters {
                orientation,
                category,
                min_width,
                min_height,
                image_type,
                colors,
            },
        ))
    }
}

fn main() -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    config::load_dotenv(&cwd).context("Failed to read .env file")?;
    logging::init();

    let cli = Cli::parse();
    let cfg = Config::from_env();
    info!("Asset root: {:?}", cfg.data);
    let client = ImageSourceClient::new(cfg).context("Failed to create HTTP client")?;

    match cli.command {
        Command::Search(args) => {
            let (term, raw) = args.resolve(false)?;
            let params = SearchParameters::normalize(&raw);
            let count = client
                .preview_search(&term, &params)
                .context("Failed to fetch search results, sorry.")?;
            println!("{}", count);
        }
        Command::Download { search, no_refresh } => {
            let (term, raw) = search.resolve(true)?;
            if !no_refresh {
                let params = SearchParameters::normalize(&raw);
                let stored = client
                    .fetch_and_persist(&term, &params)
                    .context("Failed to collect search results")?;
                println!("Saved {} of {} results to {}", stored.hits.len(), stored.total_hits, stored.path.display());
            }
            let report = client
                .download_assets(&term)
                .with_context(|| format!("Failed to download images for {:?}", term))?;
            println!(
                "Downloads completed for {} images: {} saved, {} already present, {} failed",
                report.total(),
                report.downloaded.len(),
                report.skipped.len(),
                report.failed.len()
            );
            for failed in &report.failed {
                println!(" - {}: {}", failed.url, failed.reason);
            }
        }
    }
    Ok(())
}
