use std::error;

use derive_more::Display;

/// The number of comma separated fields a dataset record must carry.
const RECORD_FIELDS: usize = 4;

/// An error that can occur when parsing a raw dataset record.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum RecordError {
    #[display("expected 4 comma separated fields, found {_0}")]
    MissingFields(usize),
    #[display("record has an empty name field")]
    EmptyName,
}

impl error::Error for RecordError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

/// A single country as parsed from one raw dataset record.
///
/// The numeric attributes are carried as raw text, exactly as they appear in
/// the dataset. The loader's only contract with the scraper is the field
/// layout, so no numeric validation is performed here.
///
/// The derived attributes ([Country::name_length], [Country::first_letter],
/// [Country::last_letter]) are recomputed from the name on every call rather
/// than stored, so they can never disagree with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    name: String,
    aka: Option<String>,
    population: String,
    land_area: String,
    density: String,
}

impl Country {
    /// Parse a single `name,population,land_area,density` record.
    ///
    /// Underscores in the name become spaces. A parenthesized suffix in the
    /// name field is split off into the alternate name, with the closing
    /// parentheses stripped. The density field strips trailing whitespace so
    /// records read straight out of a file parse cleanly.
    pub fn from_record(record: &str) -> Result<Country, RecordError> {
        let fields: Vec<&str> = record.split(',').collect();
        if fields.len() < RECORD_FIELDS {
            return Err(RecordError::MissingFields(fields.len()));
        }
        let raw_name = fields[0].replace('_', " ");
        let (name, aka) = match raw_name.split_once('(') {
            Some((primary, alternate)) => (
                primary.trim().to_string(),
                Some(alternate.replace(')', "").trim().to_string()).filter(|a| !a.is_empty()),
            ),
            None => (raw_name.trim().to_string(), None),
        };
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        Ok(Country {
            name,
            aka,
            population: fields[1].to_string(),
            land_area: fields[2].to_string(),
            density: fields[3].trim_end().to_string(),
        })
    }

    /// The primary country name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The alternate name, if the record carried one.
    pub fn aka(&self) -> Option<&str> {
        self.aka.as_deref()
    }

    pub fn population(&self) -> &str {
        &self.population
    }

    pub fn land_area(&self) -> &str {
        &self.land_area
    }

    pub fn density(&self) -> &str {
        &self.density
    }

    /// The number of characters in the primary name.
    pub fn name_length(&self) -> usize {
        self.name.chars().count()
    }

    /// The first character of the primary name.
    pub fn first_letter(&self) -> char {
        // the name is validated non-empty on construction
        self.name.chars().next().unwrap_or_default()
    }

    /// The last character of the primary name.
    pub fn last_letter(&self) -> char {
        self.name.chars().last().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_record() {
        let country = Country::from_record("Spain,47000000,505990,93").unwrap();
        assert_eq!(country.name(), "Spain");
        assert_eq!(country.aka(), None);
        assert_eq!(country.population(), "47000000");
        assert_eq!(country.land_area(), "505990");
        assert_eq!(country.density(), "93");
        assert_eq!(country.name_length(), 5);
        assert_eq!(country.first_letter(), 'S');
        assert_eq!(country.last_letter(), 'n');
    }

    #[test]
    fn test_alternate_name() {
        let country = Country::from_record("Macedonia_(fmr)),2083000,25713,81").unwrap();
        assert_eq!(country.name(), "Macedonia");
        assert_eq!(country.aka(), Some("fmr"));
        assert_eq!(country.name_length(), 9);
    }

    #[test]
    fn test_underscores_become_spaces() {
        let country = Country::from_record("United_States,331002651,9147420,36").unwrap();
        assert_eq!(country.name(), "United States");
        assert_eq!(country.first_letter(), 'U');
        assert_eq!(country.last_letter(), 's');
        assert_eq!(country.name_length(), 13);
    }

    #[test]
    fn test_trailing_newline_stripped() {
        let country = Country::from_record("Spain,47000000,505990,93\n").unwrap();
        assert_eq!(country.density(), "93");
    }

    #[test]
    fn test_derived_fields_match_name() {
        let country = Country::from_record("Congo_(Congo-Brazzaville),5518000,341500,16").unwrap();
        assert_eq!(country.name_length(), country.name().chars().count());
        assert_eq!(country.first_letter(), country.name().chars().next().unwrap());
        assert_eq!(country.last_letter(), country.name().chars().last().unwrap());
        assert_eq!(country.aka(), Some("Congo-Brazzaville"));
    }

    #[test]
    fn test_too_few_fields() {
        assert_eq!(
            Country::from_record("Spain,47000000"),
            Err(RecordError::MissingFields(2))
        );
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            Country::from_record(",47000000,505990,93"),
            Err(RecordError::EmptyName)
        );
    }

    #[test]
    fn test_malformed_numbers_carried_as_is() {
        let country = Country::from_record("Spain,lots,many,93").unwrap();
        assert_eq!(country.population(), "lots");
        assert_eq!(country.land_area(), "many");
    }
}
