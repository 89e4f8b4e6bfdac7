//! Guess-that-Country: an interactive clue-by-clue guessing game over a flat
//! country dataset, plus the scraper that produces that dataset.
//!
//! The game binary loads a headerless CSV of countries, picks one at random
//! and runs a [session::Session] against it, revealing up to seven
//! [clue::Clue] disclosures while the player guesses the name. The
//! `scrape_countries` binary regenerates the dataset from the
//! worldometers.info alphabetical country listing.

/// Command line argument handling for the game binary.
pub mod args;

/// The fixed clue menu and clue rendering.
pub mod clue;

/// The country record and its parser.
pub mod country;

/// Loading and random selection of raw dataset records.
pub mod dataset;

/// The interactive round loop.
pub mod game;

/// The companion scraper that produces the dataset.
pub mod scrape;

/// The clue/guess session engine.
pub mod session;
