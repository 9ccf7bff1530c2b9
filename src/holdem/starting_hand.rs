use std::fmt;

use crate::core::{Card, CardIter, CardSet, Deck};

/// The two hole cards every deal grows from.
///
/// `first` always sits earlier in the deck than `second`.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct StartingHand {
    pub first: Card,
    pub second: Card,
}

impl StartingHand {
    /// Both cards as a set.
    pub fn cards(&self) -> CardSet {
        CardSet::new_with_cards(vec![self.first, self.second])
    }

    /// Every unordered pair of distinct cards in the deck.
    ///
    /// Pairs come out ascending by the deck position of the first card and
    /// then of the second, 1326 of them for the standard deck.
    ///
    /// ```
    /// use hand_odds::core::Deck;
    /// use hand_odds::holdem::StartingHand;
    ///
    /// let pairs = StartingHand::all(&Deck::new());
    /// assert_eq!(1326, pairs.len());
    /// assert_eq!("C1C2", pairs[0].cards().key());
    /// ```
    pub fn all(deck: &Deck) -> Vec<StartingHand> {
        CardIter::new(deck.cards(), 2)
            .map(|pair| StartingHand {
                first: pair[0],
                second: pair[1],
            })
            .collect()
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card1:{}, card2:{}", self.first, self.second)
    }
}
