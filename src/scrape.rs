use std::{error, io, path::Path, time::Duration};

use derive_more::{Display, From};
use reqwest::blocking::Client;
use serde::Serialize;

/// The public listing the dataset is scraped from.
pub const LISTING_URL: &str =
    "https://www.worldometers.info/geography/alphabetical-list-of-countries/";

/// How long to wait for the listing page before giving up.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("guess_that_country/", env!("CARGO_PKG_VERSION"));

/// The number of table cells a country row carries:
/// row number, name, population, land area, density.
const ROW_CELLS: usize = 5;

/// An error that can occur while scraping the country listing.
#[derive(Debug, From, Display)]
pub enum ScrapeError {
    HttpError(reqwest::Error),
    #[display("server returned status {_0}")]
    StatusError(u16),
    #[display("unexpected page layout: {_0}")]
    LayoutError(&'static str),
    CsvError(csv::Error),
    IoError(io::Error),
}

impl error::Error for ScrapeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ScrapeError::HttpError(e) => Some(e),
            ScrapeError::CsvError(e) => Some(e),
            ScrapeError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

/// One row of the scraped listing, in the dataset's column order.
///
/// All values are kept as text; the game never does arithmetic on them.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ScrapedCountry {
    pub country: String,
    pub population: String,
    pub land_area: String,
    pub density: String,
}

/// Fetch the listing page and return its HTML.
pub fn fetch_listing(url: &str) -> Result<String, ScrapeError> {
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;
    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(ScrapeError::StatusError(response.status().as_u16()));
    }
    Ok(response.text()?)
}

/// Extract the country rows from the listing HTML.
///
/// The extraction is layout-based, not a structured API contract: the first
/// `<tbody>` is taken to be the country table and every `<tr>` with the
/// expected cell count becomes a record. Rows that do not fit are skipped.
pub fn extract_countries(html: &str) -> Result<Vec<ScrapedCountry>, ScrapeError> {
    let body = slice_between(html, "<tbody", "</tbody>")
        .ok_or(ScrapeError::LayoutError("no table body found"))?;
    let mut countries = Vec::new();
    let mut from = 0;
    while let Some((start, end)) = next_tag_inner(body, "<tr", "</tr>", from) {
        from = end;
        if let Some(country) = parse_row(&body[start..end]) {
            countries.push(country);
        }
    }
    if countries.is_empty() {
        return Err(ScrapeError::LayoutError("no country rows found"));
    }
    Ok(countries)
}

/// Write the records as the game's dataset, header row included.
pub fn write_dataset<P: AsRef<Path>>(
    path: P,
    countries: &[ScrapedCountry],
) -> Result<(), ScrapeError> {
    let mut writer = csv::Writer::from_path(path)?;
    for country in countries {
        writer.serialize(country)?;
    }
    writer.flush()?;
    Ok(())
}

fn parse_row(row: &str) -> Option<ScrapedCountry> {
    let mut cells = Vec::new();
    let mut from = 0;
    while let Some((start, end)) = next_tag_inner(row, "<td", "</td>", from) {
        from = end;
        cells.push(strip_tags(&row[start..end]));
    }
    if cells.len() != ROW_CELLS {
        return None;
    }
    Some(ScrapedCountry {
        country: clean_name(&cells[1]),
        population: clean_number(&cells[2]),
        land_area: clean_number(&cells[3]),
        density: clean_number(&cells[4]),
    })
}

/// Find the content between an opening tag (with attributes) and its closing
/// tag, case-insensitive on ASCII tag names.
fn slice_between<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = s.to_ascii_lowercase();
    let open_idx = lc.find(open_pat)?;
    let after_open = s[open_idx..].find('>')? + open_idx + 1;
    let close_rel = lc[after_open..].find(close_pat)?;
    Some(&s[after_open..after_open + close_rel])
}

/// Find the inner span of the next `open_tag`..`close_tag` block from `from`
/// onwards. Returns byte offsets into `s`.
fn next_tag_inner(s: &str, open_tag: &str, close_tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = s.to_ascii_lowercase();
    let start = lc.get(from..)?.find(open_tag)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let close_rel = lc[open_end..].find(close_tag)?;
    Some((open_end, open_end + close_rel))
}

/// Remove all `<...>` tags, decode the common entities and collapse
/// whitespace.
fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip the thousands separators the listing uses in its numeric columns.
fn clean_number(raw: &str) -> String {
    raw.trim().replace(',', "")
}

/// Normalize a listing name into the dataset's name format: no quotes or
/// commas, spaces as underscores, `fmr.`/`formerly` markers dropped.
fn clean_name(raw: &str) -> String {
    raw.trim()
        .replace(['"', '\'', ','], "")
        .replace(' ', "_")
        .replace("fmr._", "")
        .replace("formerly_", "")
}

#[cfg(test)]
mod tests {
    use tempfile::NamedTempFile;

    use super::{
        super::{country::Country, dataset},
        *,
    };

    const LISTING_FIXTURE: &str = r#"
        <html><body>
        <table>
        <thead><tr><th>#</th><th>Country</th><th>Population</th><th>Land Area</th><th>Density</th></tr></thead>
        <TBODY>
        <tr><td>1</td><td><a href="/spain">Spain</a></td><td>46,754,778</td><td>498,800</td><td>94</td></tr>
        <tr><td>2</td><td>United States</td><td>331,002,651</td><td>9,147,420</td><td>36</td></tr>
        <tr><td colspan="5">advertisement</td></tr>
        <tr><td>3</td><td>C&amp;ocirc;te d'Ivoire</td><td>26,378,274</td><td>318,000</td><td>83</td></tr>
        </TBODY>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_extracts_rows() {
        let countries = extract_countries(LISTING_FIXTURE).unwrap();
        assert_eq!(countries.len(), 3);
        assert_eq!(
            countries[0],
            ScrapedCountry {
                country: "Spain".to_string(),
                population: "46754778".to_string(),
                land_area: "498800".to_string(),
                density: "94".to_string(),
            }
        );
        assert_eq!(countries[1].country, "United_States");
    }

    #[test]
    fn test_missing_tbody_is_an_error() {
        assert!(matches!(
            extract_countries("<html><table></table></html>"),
            Err(ScrapeError::LayoutError(_))
        ));
    }

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("United States"), "United_States");
        assert_eq!(clean_name("Macedonia (fmr. Yugoslavia)"), "Macedonia_(Yugoslavia)");
        assert_eq!(clean_name("Cote d'Ivoire"), "Cote_dIvoire");
        assert_eq!(clean_name(" Chad "), "Chad");
    }

    #[test]
    fn test_clean_number() {
        assert_eq!(clean_number("331,002,651"), "331002651");
        assert_eq!(clean_number(" 94 "), "94");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags("<a href=\"/spain\"><b>Spain</b></a>&nbsp; "),
            "Spain"
        );
    }

    #[test]
    fn test_dataset_round_trip() {
        let countries = extract_countries(LISTING_FIXTURE).unwrap();
        let file = NamedTempFile::new().unwrap();
        write_dataset(file.path(), &countries).unwrap();
        let records = dataset::load_country_dataset(file.path()).unwrap();
        assert_eq!(records.len(), countries.len());
        let parsed = Country::from_record(&records[1]).unwrap();
        assert_eq!(parsed.name(), "United States");
        assert_eq!(parsed.population(), "331002651");
    }
}
