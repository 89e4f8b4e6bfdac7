use std::{
    env,
    io::{stdin, IsTerminal},
    process::exit,
    time::Duration,
};

use clap::Parser as _;
use human_panic::setup_panic;

use guess_that_country::{
    args::Args,
    country::Country,
    dataset::{choose_random_country, load_country_dataset},
    game::{self, RoundOptions},
};

/// How long the welcome banner lingers before the first round.
const WELCOME_PAUSE: Duration = Duration::from_secs(6);

/// Main function. This is the entry point of the game.
///
/// # Process
///
/// 1. Reads the arguments, either from the command line or interactively.
/// 2. Loads the dataset into a list of raw records.
/// 3. Forever (or for `--rounds` rounds): picks a random record, parses it
///    into a [Country] and runs one interactive round against it.
///
/// A record that fails to parse is reported and skipped; the game only gives
/// up when every record in the dataset has been rejected in a row.
fn main() {
    setup_panic!();
    let args = if env::args().len() < 2 && stdin().is_terminal() {
        Args::get_from_user()
    } else {
        Args::parse()
    };
    let options = RoundOptions {
        browser: !args.no_browser,
        pacing: !args.no_pacing,
    };
    println!("{}", game::WELCOME);
    game::pause(&options, WELCOME_PAUSE);
    let records = match load_country_dataset(&args.dataset) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Unable to load {}: {}", args.dataset.display(), e);
            exit(1);
        }
    };
    let mut played = 0;
    let mut rejected = 0;
    loop {
        // the loader guarantees at least one record
        let Some(record) = choose_random_country(&records) else {
            break;
        };
        let country = match Country::from_record(record) {
            Ok(country) => {
                rejected = 0;
                country
            }
            Err(e) => {
                eprintln!("Skipping malformed record {:?}: {}", record, e);
                rejected += 1;
                if rejected >= records.len() {
                    eprintln!("No parseable records in {}", args.dataset.display());
                    exit(1);
                }
                continue;
            }
        };
        if let Err(e) = game::run_round(country, &options) {
            eprintln!("Round aborted: {}", e);
            exit(1);
        }
        played += 1;
        if args.rounds.is_some_and(|rounds| played >= rounds) {
            break;
        }
    }
}
