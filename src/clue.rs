use derive_more::Display;

use super::country::Country;

/// One of the seven fixed disclosures about the target country.
///
/// The [Display] text is the menu label shown to the player; [Clue::render]
/// produces the actual disclosure for a given country.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Clue {
    #[display("Number of characters")]
    NameLength,
    #[display("Population")]
    Population,
    #[display("Land area")]
    LandArea,
    #[display("Density")]
    Density,
    #[display("First letter")]
    FirstLetter,
    #[display("Last letter")]
    LastLetter,
    #[display("Also known as...")]
    AlsoKnownAs,
}

impl Clue {
    /// The fixed clue menu, in presentation order.
    pub const ALL: [Clue; 7] = [
        Clue::NameLength,
        Clue::Population,
        Clue::LandArea,
        Clue::Density,
        Clue::FirstLetter,
        Clue::LastLetter,
        Clue::AlsoKnownAs,
    ];

    /// Look up a clue by its 1-based menu index.
    pub fn from_index(index: usize) -> Option<Clue> {
        Clue::ALL.get(index.checked_sub(1)?).copied()
    }

    /// Render the disclosure this clue makes about `country`.
    pub fn render(&self, country: &Country) -> String {
        match self {
            Clue::NameLength => format!("Number of characters: {}", country.name_length()),
            Clue::Population => format!("Population: {} (yr 2020)", country.population()),
            Clue::LandArea => format!("Land area: {} (sq.km)", country.land_area()),
            Clue::Density => format!("Density: {} (P/sq.km)", country.density()),
            Clue::FirstLetter => format!("First letter: {}", country.first_letter()),
            Clue::LastLetter => format!("Last letter: {}", country.last_letter()),
            Clue::AlsoKnownAs => match country.aka() {
                Some(aka) => format!("Also known as...: {}", aka),
                None => "No other names known.".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spain() -> Country {
        Country::from_record("Spain,47000000,505990,93").unwrap()
    }

    #[test]
    fn test_menu_order() {
        assert_eq!(Clue::from_index(1), Some(Clue::NameLength));
        assert_eq!(Clue::from_index(7), Some(Clue::AlsoKnownAs));
        assert_eq!(Clue::from_index(0), None);
        assert_eq!(Clue::from_index(8), None);
    }

    #[test]
    fn test_render_spain() {
        let country = spain();
        assert_eq!(
            Clue::NameLength.render(&country),
            "Number of characters: 5"
        );
        assert_eq!(
            Clue::Population.render(&country),
            "Population: 47000000 (yr 2020)"
        );
        assert_eq!(
            Clue::LandArea.render(&country),
            "Land area: 505990 (sq.km)"
        );
        assert_eq!(Clue::Density.render(&country), "Density: 93 (P/sq.km)");
        assert_eq!(Clue::FirstLetter.render(&country), "First letter: S");
        assert_eq!(Clue::LastLetter.render(&country), "Last letter: n");
    }

    #[test]
    fn test_render_no_alternate_name() {
        assert_eq!(
            Clue::AlsoKnownAs.render(&spain()),
            "No other names known."
        );
    }

    #[test]
    fn test_render_alternate_name() {
        let country = Country::from_record("Macedonia_(fmr)),2083000,25713,81").unwrap();
        assert_eq!(
            Clue::AlsoKnownAs.render(&country),
            "Also known as...: fmr"
        );
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = Clue::ALL.iter().map(Clue::to_string).collect();
        assert_eq!(
            labels,
            [
                "Number of characters",
                "Population",
                "Land area",
                "Density",
                "First letter",
                "Last letter",
                "Also known as..."
            ]
        );
    }
}
