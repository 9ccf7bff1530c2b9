use thiserror::Error;

use super::Card;

/// This is the core error type for the hand odds library.
/// It uses `thiserror` to provide readable error messages
#[derive(Error, Debug)]
pub enum HandOddsError {
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Unable to parse value")]
    UnexpectedValue,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Card already added to set {0}")]
    DuplicateCard(Card),
    #[error("A deck needs at least seven cards to deal a river, found {0}")]
    DeckTooSmall(usize),
    #[error("Card {0} is not in the deck")]
    CardNotInDeck(Card),
    #[error("Starting hands hold two cards, found {0}")]
    StartingHandSize(usize),
    #[error("No entry in the table for {0}")]
    MissingKey(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
