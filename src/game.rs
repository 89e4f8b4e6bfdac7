use std::{
    error,
    io::{stdin, IsTerminal},
    thread,
    time::Duration,
};

use derive_more::{Display, From};
use dialoguer::{Input, Select};

use super::{
    clue::Clue,
    country::Country,
    session::{ClueResponse, GuessResponse, Outcome, Session},
};

/// The banner printed once at startup.
pub const WELCOME: &str = "
Welcome to GUESS-THAT-COUNTRY!
You have 7 chances to guess the correct answer.
Select your clues and play away!
";

/// How long a win message lingers before the flag page opens.
const WIN_PAUSE: Duration = Duration::from_secs(5);
/// How long the game dwells on an incorrect or losing message.
const MISS_PAUSE: Duration = Duration::from_secs(4);

/// An error that can occur while running a round.
#[derive(Debug, From, Display)]
pub enum GameError {
    PromptError(dialoguer::Error),
}

impl error::Error for GameError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            GameError::PromptError(e) => Some(e),
        }
    }
}

/// Knobs for the cosmetic parts of a round.
pub struct RoundOptions {
    /// Open the flag search page in a browser when the round ends.
    pub browser: bool,
    /// Insert the short pacing sleeps between messages.
    pub pacing: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        RoundOptions {
            browser: true,
            pacing: true,
        }
    }
}

/// Sleep for `duration`, unless pacing is disabled.
pub fn pause(options: &RoundOptions, duration: Duration) {
    if options.pacing {
        thread::sleep(duration);
    }
}

/// Print the running tally of the round so far.
fn print_tracker(session: &Session) {
    println!("MATCH HISTORY:");
    println!("    Guesses made: {}", session.guesses_made());
    println!("    Answers given: {:?}", session.guesses());
    println!(
        "    Clues available: {:?}",
        session.revealed().collect::<Vec<_>>()
    );
    println!();
}

/// Open a web search for the country's flag.
///
/// This is an observable but non-essential side effect, so a failure to open
/// the browser is reported and otherwise ignored.
fn show_flag(country: &Country, options: &RoundOptions) {
    if !options.browser || !stdin().is_terminal() {
        return;
    }
    let url = format!("https://google.com/search?q={}+flag", country.name());
    if let Err(e) = open::that(url) {
        eprintln!("Unable to open the flag page: {}", e);
    }
}

/// Run one interactive round against `country`.
///
/// Each turn offers the not-yet-revealed clues, reveals the selection and
/// prompts for a guess. Invalid input never aborts the round; the prompt
/// library re-prompts on the failure path. Should the player burn through
/// all seven clues on duplicate guesses, the remaining turns are guess-only.
pub fn run_round(country: Country, options: &RoundOptions) -> Result<Outcome, GameError> {
    let mut session = Session::new(country);
    let outcome = loop {
        print_tracker(&session);
        let available = session.available_clues();
        if available.is_empty() {
            println!("No clues left, keep guessing!\n");
        } else {
            let labels: Vec<String> = available.iter().map(Clue::to_string).collect();
            let selection = Select::new()
                .with_prompt("Select clue")
                .items(&labels)
                .default(0)
                .interact()?;
            if let ClueResponse::Revealed(text) = session.reveal(available[selection]) {
                println!("\n{}\n", text);
            }
        }
        let guess: String = Input::new().with_prompt("Guess").interact_text()?;
        let guess = guess.trim().to_string();
        match session.submit_guess(&guess) {
            GuessResponse::Correct => {
                println!(
                    "You guessed it RIGHT! The country we are looking for is >>> {} <<<",
                    session.country().name()
                );
                pause(options, WIN_PAUSE);
                show_flag(session.country(), options);
                println!();
            }
            GuessResponse::Incorrect => {
                println!("The country we are looking for is NOT {}. >>>\n", guess);
                pause(options, MISS_PAUSE);
            }
            GuessResponse::Duplicate => {
                println!("You already tried {}.\n", guess);
            }
            GuessResponse::RoundOver => {}
        }
        if let Some(outcome) = session.outcome() {
            break outcome;
        }
    };
    if outcome == Outcome::Exhausted {
        println!("You are out of guesses. The country we are looking for is ... >>>\n");
        pause(options, MISS_PAUSE);
        show_flag(session.country(), options);
    }
    Ok(outcome)
}
