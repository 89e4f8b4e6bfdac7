use super::{clue::Clue, country::Country};

/// The number of counted guesses a player gets, one per clue.
pub const MAX_GUESSES: usize = Clue::ALL.len();

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player guessed the country name.
    Won,
    /// The player ran out of guesses.
    Exhausted,
}

/// The result of asking the session to reveal a clue.
#[derive(Debug, PartialEq, Eq)]
pub enum ClueResponse {
    /// The clue was revealed for the first time; the disclosure text is attached.
    Revealed(String),
    /// The clue was revealed earlier this round. Nothing changes.
    AlreadyRevealed,
    /// The round already ended.
    RoundOver,
}

/// The result of submitting a guess.
#[derive(Debug, PartialEq, Eq)]
pub enum GuessResponse {
    Correct,
    Incorrect,
    /// The same text was guessed earlier this round. No attempt is consumed.
    Duplicate,
    /// The round already ended.
    RoundOver,
}

/// The state of a single guessing round against one [Country].
///
/// A session is created at round start, mutated by clue and guess actions
/// and discarded once [Session::outcome] becomes terminal. Duplicates never
/// consume anything: re-selecting a revealed clue and re-submitting an
/// earlier guess are both no-ops, so the guess count only ever grows by
/// distinct guesses and is bounded by [MAX_GUESSES].
pub struct Session {
    country: Country,
    revealed: Vec<(Clue, String)>,
    guesses: Vec<String>,
    outcome: Option<Outcome>,
}

impl Session {
    pub fn new(country: Country) -> Self {
        Session {
            country,
            revealed: Vec::new(),
            guesses: Vec::new(),
            outcome: None,
        }
    }

    /// The country this round is played against.
    pub fn country(&self) -> &Country {
        &self.country
    }

    /// The terminal state of the round, if it has one yet.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Every distinct guess submitted so far, in submission order.
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// The number of counted guesses made so far.
    pub fn guesses_made(&self) -> usize {
        self.guesses.len()
    }

    /// The disclosure texts revealed so far, in reveal order.
    pub fn revealed(&self) -> impl Iterator<Item = &str> {
        self.revealed.iter().map(|(_, text)| text.as_str())
    }

    /// The clues that have not been revealed yet, in menu order.
    pub fn available_clues(&self) -> Vec<Clue> {
        Clue::ALL
            .iter()
            .copied()
            .filter(|clue| !self.is_revealed(*clue))
            .collect()
    }

    fn is_revealed(&self, clue: Clue) -> bool {
        self.revealed.iter().any(|(revealed, _)| *revealed == clue)
    }

    /// Reveal a clue. Each clue reveals at most once per round.
    pub fn reveal(&mut self, clue: Clue) -> ClueResponse {
        if self.outcome.is_some() {
            return ClueResponse::RoundOver;
        }
        if self.is_revealed(clue) {
            return ClueResponse::AlreadyRevealed;
        }
        let text = clue.render(&self.country);
        self.revealed.push((clue, text.clone()));
        ClueResponse::Revealed(text)
    }

    /// Submit a guess.
    ///
    /// The comparison is case-insensitive on both the win check and the
    /// duplicate check. A correct guess ends the round as [Outcome::Won]
    /// within the same attempt; the [MAX_GUESSES]th counted incorrect guess
    /// ends it as [Outcome::Exhausted].
    pub fn submit_guess(&mut self, guess: &str) -> GuessResponse {
        if self.outcome.is_some() {
            return GuessResponse::RoundOver;
        }
        let normalized = guess.to_lowercase();
        if self
            .guesses
            .iter()
            .any(|earlier| earlier.to_lowercase() == normalized)
        {
            return GuessResponse::Duplicate;
        }
        self.guesses.push(guess.to_string());
        if normalized == self.country.name().to_lowercase() {
            self.outcome = Some(Outcome::Won);
            GuessResponse::Correct
        } else {
            if self.guesses.len() >= MAX_GUESSES {
                self.outcome = Some(Outcome::Exhausted);
            }
            GuessResponse::Incorrect
        }
    }
}
