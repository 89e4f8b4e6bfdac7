use std::{error, fs::read_to_string, io, path::Path};

use derive_more::{Display, From};
use rand::seq::IndexedRandom;

/// The header row the companion scraper writes. The loader skips it so both
/// scraped and hand-written datasets load the same way.
pub const CSV_HEADER: &str = "country,population,land_area,density";

/// An error that can occur when loading the country dataset.
#[derive(Debug, From, Display)]
pub enum DatasetError {
    IoError(io::Error),
    #[display("dataset contains no records")]
    Empty,
}

impl error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            DatasetError::IoError(e) => Some(e),
            DatasetError::Empty => None,
        }
    }
}

/// Load the dataset into an ordered list of raw records.
///
/// Blank lines and the scraper's header row are skipped; no other validation
/// happens here. Record parsing is deferred to
/// [Country::from_record](super::country::Country::from_record) so one bad
/// line cannot take down the whole dataset.
pub fn load_country_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DatasetError> {
    let contents = read_to_string(path)?;
    let records: Vec<String> = contents
        .lines()
        .filter(|line| !line.trim().is_empty() && line.trim_end() != CSV_HEADER)
        .map(|line| line.to_string())
        .collect();
    if records.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(records)
}

/// Pick a record uniformly at random. Returns [None] only for an empty list,
/// which [load_country_dataset] never produces.
pub fn choose_random_country(records: &[String]) -> Option<&String> {
    records.choose(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_dataset(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_blank_lines_skipped() {
        let file = write_dataset("Spain,47000000,505990,93\n\n\nFrance,65273511,547557,119\n");
        let records = load_country_dataset(file.path()).unwrap();
        assert_eq!(
            records,
            [
                "Spain,47000000,505990,93",
                "France,65273511,547557,119"
            ]
        );
    }

    #[test]
    fn test_header_row_skipped() {
        let file = write_dataset("country,population,land_area,density\nSpain,47000000,505990,93\n");
        let records = load_country_dataset(file.path()).unwrap();
        assert_eq!(records, ["Spain,47000000,505990,93"]);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = load_country_dataset("no/such/dataset.csv");
        assert!(matches!(result, Err(DatasetError::IoError(_))));
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let file = write_dataset("\n\n");
        assert!(matches!(
            load_country_dataset(file.path()),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn test_random_choice_comes_from_the_list() {
        let records = vec![
            "Spain,47000000,505990,93".to_string(),
            "France,65273511,547557,119".to_string(),
        ];
        for _ in 0..20 {
            let picked = choose_random_country(&records).unwrap();
            assert!(records.contains(picked));
        }
        assert_eq!(choose_random_country(&[]), None);
    }
}
