//! Everything that deals hold'em hands out to the river: starting hands,
//! the enumeration engine, and the table it fills in.

/// Export the starting hand generation code
mod starting_hand;
pub use self::starting_hand::StartingHand;

/// Category counters behind every probability.
mod tally;
pub use self::tally::Tally;

/// Card set keys to category probabilities.
mod table;
pub use self::table::{Probabilities, ProbabilityTable};

/// The deal enumerator.
mod enumerate;
pub use self::enumerate::{DEAL_SIZE, Enumerator, HOLE_CARDS, Traversal};
