//! This is the core module. It exports the cards, sets of cards, and the
//! five card hand classifier. Nothing in here knows about enumerating deals.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Fixed width set of cards.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter, SubsetIter};

/// Unordered card sets and their canonical keys.
mod card_set;
pub use self::card_set::CardSet;

/// We want to be able to iterate over combinations of cards.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::CardIter;

/// Deck is the ordered deck the enumeration is run over.
mod deck;
/// Export `Deck`
pub use self::deck::{Deck, MIN_DECK_SIZE};

/// Hand categories and maps keyed by them.
mod category;
pub use self::category::{CATEGORY_COUNT, CategoryMap, HandCategory};

/// 5 Card hand classification code.
mod classify;
/// Export the trait and the function.
pub use self::classify::{Classifiable, classify};

mod error;
pub use self::error::HandOddsError;
