//! Hand odds walks every way a hold'em deal can run out and reports, for
//! each partial deal, how often each of ten hand categories is reachable
//! by the river.
//!
//! The categories are not a ranking. A full house also counts as a three
//! card and a two pair, and every hand counts as a high card.
//!
//! ```
//! use hand_odds::core::{CardSet, Deck, HandCategory};
//! use hand_odds::holdem::{Enumerator, ProbabilityTable};
//!
//! // A short deck keeps the walk small.
//! let cards: CardSet = "C1C10C11C12C13D2H5S7".parse().unwrap();
//! let deck = Deck::with_cards(cards.iter().collect()).unwrap();
//!
//! let mut table = ProbabilityTable::new();
//! Enumerator::new(&deck)
//!     .expand_pair("C1C13".parse().unwrap(), &mut table)
//!     .unwrap();
//!
//! let royal = table.get_key("C1C10C11C12C13D2H5").unwrap();
//! assert_eq!(1.0, royal[HandCategory::Royal]);
//! ```

/// Cards, sets of cards, the deck, and the five card classifier.
/// Everything in core is agnostic to how deals are enumerated.
pub mod core;
/// The enumeration engine and the probability table.
pub mod holdem;
