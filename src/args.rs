use std::{
    error, fs,
    path::{Path, PathBuf},
};

use clap_derive::Parser;
use derive_more::Display;
use dialoguer::{Completion, Confirm, Input};

/// The extension dataset files are expected to carry.
const DATASET_EXTENSION: &str = "csv";

/// The dataset path used when none is given, matching what
/// `scrape_countries` writes by default.
pub const DEFAULT_DATASET: &str = "scraped_countries.csv";

/// A [Completion] struct for dataset file names, that also acts as a list of
/// csv files in the current directory.
struct DatasetFileCompletion {
    dataset_files: Vec<String>,
}

impl Default for DatasetFileCompletion {
    fn default() -> Self {
        let mut res = Vec::new();
        let path = Path::new(".");
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(path) {
                for entry in entries.flatten() {
                    let entry = entry.path();
                    if entry.is_file() {
                        if let Some(ext) = entry.extension() {
                            if ext == DATASET_EXTENSION {
                                res.push(entry.to_string_lossy().into_owned());
                            }
                        }
                    }
                }
            }
        }
        DatasetFileCompletion { dataset_files: res }
    }
}

impl Completion for DatasetFileCompletion {
    fn get(&self, input: &str) -> Option<String> {
        self.dataset_files
            .iter()
            .find(|x| x.contains(input))
            .cloned()
    }
}

#[derive(Debug, Display)]
enum InvalidPath {
    #[display("invalid path (does not exist)")]
    InvalidPath,
    #[display("not a file")]
    NotAFile,
}

impl error::Error for InvalidPath {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

/// A function to validate the dataset path input.
fn validate_file_path(input: &String) -> Result<(), InvalidPath> {
    if input.is_empty() {
        return Ok(());
    }
    let p = Path::new(input);
    if p.exists() {
        if p.is_file() {
            Ok(())
        } else {
            Err(InvalidPath::NotAFile)
        }
    } else {
        Err(InvalidPath::InvalidPath)
    }
}

/// A function to parse the dataset path argument.
fn parse_path_arg(input: &str) -> Result<PathBuf, &'static str> {
    let p = PathBuf::from(input);
    if p.exists() {
        Ok(p)
    } else {
        Err("Invalid path")
    }
}

/// The arguments to the game.
#[derive(Parser)]
pub struct Args {
    #[arg(default_value = DEFAULT_DATASET, value_parser = parse_path_arg)]
    /// The path to the country dataset produced by scrape_countries.
    pub dataset: PathBuf,
    #[arg(short, long, default_value = None)]
    /// The number of rounds to play before exiting. Plays until interrupted if not set.
    pub rounds: Option<u32>,
    #[arg(long, default_value_t = false)]
    /// A flag that tells the game not to open the flag page when a round ends.
    pub no_browser: bool,
    #[arg(long, default_value_t = false)]
    /// A flag that tells the game to skip the short pauses between messages.
    pub no_pacing: bool,
}

impl Args {
    /// Create the object based on user input.
    pub fn get_from_user() -> Self {
        println!("Tab autocompletes the dataset query and enter confirms the selection.");
        let completion = DatasetFileCompletion::default();
        let dataset = Input::<String>::new()
            .with_prompt("Enter the dataset path")
            .validate_with(validate_file_path)
            .with_initial_text(
                completion
                    .dataset_files
                    .first()
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_DATASET.to_string()),
            )
            .completion_with(&completion)
            .allow_empty(true)
            .interact_text()
            .map(|x| {
                if x.is_empty() {
                    PathBuf::from(DEFAULT_DATASET)
                } else {
                    PathBuf::from(x)
                }
            })
            .unwrap();
        let browser = Confirm::new()
            .with_prompt("Open the country's flag in a browser when a round ends?")
            .default(true)
            .interact()
            .unwrap();
        Args {
            dataset,
            rounds: None,
            no_browser: !browser,
            no_pacing: false,
        }
    }
}
