use std::{path::PathBuf, process::exit, time::Duration};

use clap::Parser as _;
use clap_derive::Parser;
use human_panic::setup_panic;
use indicatif::{ProgressBar, ProgressStyle};

use guess_that_country::{
    args::DEFAULT_DATASET,
    scrape::{extract_countries, fetch_listing, write_dataset, ScrapeError, LISTING_URL},
};

/// The arguments to the scraper.
#[derive(Parser)]
struct ScrapeArgs {
    #[arg(short, long, default_value = DEFAULT_DATASET)]
    /// Where to write the scraped dataset.
    output: PathBuf,
    #[arg(long, default_value_t = LISTING_URL.to_string())]
    /// The listing page to scrape.
    url: String,
}

fn run(args: &ScrapeArgs, spinner: &ProgressBar) -> Result<usize, ScrapeError> {
    spinner.set_message(format!("Fetching {}", args.url));
    let html = fetch_listing(&args.url)?;
    spinner.set_message("Extracting countries");
    let countries = extract_countries(&html)?;
    spinner.set_message(format!("Writing {}", args.output.display()));
    write_dataset(&args.output, &countries)?;
    Ok(countries.len())
}

fn main() {
    setup_panic!();
    let args = ScrapeArgs::parse();
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("[{elapsed_precise}] {spinner} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    match run(&args, &spinner) {
        Ok(count) => {
            spinner.finish_with_message(format!(
                "Wrote {} countries to {}",
                count,
                args.output.display()
            ));
        }
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("Scrape failed: {}", e);
            exit(1);
        }
    }
}
