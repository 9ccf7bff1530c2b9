use std::ops::Index;
use std::slice::Iter;

use super::{Card, CardBitSet, HandOddsError, Suit, Value};

/// The fewest cards a deck can hold and still complete a seven card deal.
pub const MIN_DECK_SIZE: usize = 7;

/// An ordered, read only deck of cards.
///
/// The order of the deck is significant: starting pairs are produced in
/// ascending deck position and every extension card during enumeration is
/// tried in deck order. The deck is built once and then only borrowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage in deal order.
    cards: Vec<Card>,
    /// Used to figure out quickly if this card is in the deck.
    members: CardBitSet,
}

impl Deck {
    /// Create the standard 52 card deck.
    ///
    /// Suits go clubs, diamonds, hearts, spades and within each suit the
    /// values run Ace through King.
    ///
    /// ```
    /// use hand_odds::core::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(52, deck.len());
    /// assert_eq!("C1", deck[0].to_string());
    /// assert_eq!("S13", deck[51].to_string());
    /// ```
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::suits() {
            for v in Value::values() {
                cards.push(Card::new(v, s));
            }
        }
        let members = cards.iter().copied().collect();
        Self { cards, members }
    }

    /// Build a deck from every combination of the given suits and values,
    /// suits outermost, keeping the standard ordering.
    pub fn with_suits_and_values(suits: &[Suit], values: &[Value]) -> Result<Self, HandOddsError> {
        let mut suits = suits.to_vec();
        suits.sort();
        suits.dedup();
        let mut values = values.to_vec();
        values.sort();
        values.dedup();

        let cards = suits
            .iter()
            .flat_map(|s| values.iter().map(move |v| Card::new(*v, *s)))
            .collect();
        Self::with_cards(cards)
    }

    /// Build a deck holding exactly these cards in this order.
    ///
    /// Reduced decks keep exhaustive runs tractable. Every card must be
    /// distinct and there must be enough cards for a full seven card deal.
    pub fn with_cards(cards: Vec<Card>) -> Result<Self, HandOddsError> {
        let mut members = CardBitSet::new();
        for card in &cards {
            if members.contains(*card) {
                return Err(HandOddsError::DuplicateCard(*card));
            }
            members.insert(*card);
        }
        if cards.len() < MIN_DECK_SIZE {
            return Err(HandOddsError::DeckTooSmall(cards.len()));
        }
        Ok(Self { cards, members })
    }

    /// Given a card, is it in the deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.members.contains(*c)
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get an iterator from this deck in deal order.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    /// The cards as a slice in deal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Deck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
