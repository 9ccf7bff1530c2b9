use std::fmt::Debug;
use std::ops::{BitOr, BitXor};

use super::Card;

/// This struct is a bitset for cards
/// Each card is represented by a bit in a 64 bit integer
///
/// The bit is set if the card present
/// The bit is unset if the card not in the set
///
/// Bits are laid out by `Card::index`, so walking the set from the
/// lowest bit upward visits cards sorted by suit and then by value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardBitSet {
    // The bitset
    cards: u64,
}

impl CardBitSet {
    /// Create a new empty bitset
    ///
    /// ```
    /// use hand_odds::core::CardBitSet;
    /// let cards = CardBitSet::new();
    /// assert!(cards.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self { cards: 0 }
    }

    /// This does what it says on the tin it insertes a card into the bitset
    ///
    /// ```
    /// use hand_odds::core::{Card, CardBitSet, Suit, Value};
    /// let mut cards = CardBitSet::new();
    ///
    /// cards.insert(Card::new(Value::Six, Suit::Club));
    /// cards.insert(Card::new(Value::King, Suit::Club));
    /// cards.insert(Card::new(Value::Ace, Suit::Club));
    /// assert_eq!(3, cards.count());
    /// ```
    pub fn insert(&mut self, card: Card) {
        self.cards |= 1 << u8::from(card);
    }

    /// Remove a card from the bitset
    pub fn remove(&mut self, card: Card) {
        self.cards &= !(1 << u8::from(card));
    }

    /// Is the card in the bitset ?
    ///
    /// ```
    /// use hand_odds::core::{Card, CardBitSet, Suit, Value};
    ///
    /// let mut cards = CardBitSet::new();
    /// cards.insert(Card::from(17));
    ///
    /// assert!(cards.contains(Card::new(Value::Five, Suit::Diamond)));
    /// ```
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1 << u8::from(card))) != 0
    }

    /// Is the bitset empty ?
    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// How many cards are in the bitset ?
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    /// Every subset of this set, including the empty set and the set
    /// itself. Visits `2^count` sets.
    pub fn subsets(self) -> SubsetIter {
        SubsetIter {
            full: self.cards,
            next: Some(0),
        }
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

impl BitOr<CardBitSet> for CardBitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitOr<Card> for CardBitSet {
    type Output = Self;

    fn bitor(self, rhs: Card) -> Self::Output {
        Self {
            cards: self.cards | (1 << u8::from(rhs)),
        }
    }
}

impl BitXor for CardBitSet {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards ^ rhs.cards,
        }
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = CardBitSet::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

/// The iterator for the CardBitSet
/// It iterates over the cards in the bitset
pub struct CardBitSetIter(u64);

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let card = self.0.trailing_zeros();
        self.0 &= !(1 << card);

        Some(Card::from(card as u8))
    }
}

/// Walks every subset of a bitset using the usual
/// `(sub - full) & full` trick, starting from the empty set.
pub struct SubsetIter {
    full: u64,
    next: Option<u64>,
}

impl Iterator for SubsetIter {
    type Item = CardBitSet;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let following = current.wrapping_sub(self.full) & self.full;
        self.next = if following == 0 { None } else { Some(following) };
        Some(CardBitSet { cards: current })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::core::{Deck, Suit, Value};

    use super::*;

    #[test]
    fn test_empty() {
        let cards = CardBitSet::new();
        assert!(cards.is_empty());
        assert_eq!(0, cards.count());
    }

    #[test]
    fn test_insert_all() {
        let mut all_cards = CardBitSet::new();
        for card in Deck::new().iter() {
            let mut single_card = CardBitSet::new();

            single_card.insert(*card);
            all_cards = all_cards | single_card;

            assert!(single_card.contains(*card));
        }

        assert_eq!(52, all_cards.count());
    }

    #[test]
    fn test_remove() {
        let mut cards: CardBitSet = Deck::new().iter().copied().collect();
        let ace = Card::new(Value::Ace, Suit::Heart);
        assert!(cards.contains(ace));
        cards.remove(ace);
        assert!(!cards.contains(ace));
        assert_eq!(51, cards.count());
        assert_eq!(CardBitSet::new() | ace, cards ^ (cards | ace));
    }

    #[test]
    fn test_iter_is_key_order() {
        let cards: CardBitSet = [
            Card::new(Value::Two, Suit::Spade),
            Card::new(Value::King, Suit::Club),
            Card::new(Value::Ace, Suit::Heart),
            Card::new(Value::Ace, Suit::Club),
        ]
        .into_iter()
        .collect();

        let order: Vec<Card> = cards.into_iter().collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, order);
        assert_eq!(Card::new(Value::Ace, Suit::Club), order[0]);
    }

    #[test]
    fn test_formatting_cards() {
        let mut cards = CardBitSet::new();
        cards.insert(Card::new(Value::Ace, Suit::Club));
        cards.insert(Card::new(Value::King, Suit::Diamond));
        cards.insert(Card::new(Value::Three, Suit::Heart));

        assert_eq!(
            format!("{:?}", cards),
            "{Card { suit: Club, value: Ace }, Card { suit: Diamond, value: King }, Card { suit: Heart, value: Three }}"
        );
    }

    #[test]
    fn test_subsets() {
        let cards: CardBitSet = (0..5u8).map(Card::from).collect();
        let subsets: Vec<CardBitSet> = cards.subsets().collect();
        assert_eq!(32, subsets.len());

        let unique: HashSet<CardBitSet> = subsets.iter().copied().collect();
        assert_eq!(32, unique.len());

        for s in subsets {
            assert_eq!(cards, s | cards);
        }
    }

    #[test]
    fn test_subsets_of_empty() {
        assert_eq!(1, CardBitSet::new().subsets().count());
    }

    #[test]
    fn test_xor_is_difference_of_subset() {
        let full: CardBitSet = (0..7u8).map(Card::from).collect();
        let part: CardBitSet = (0..2u8).map(Card::from).collect();
        let rest = full ^ part;
        assert_eq!(5, rest.count());
        assert!(!rest.contains(Card::from(0)));
        assert!(rest.contains(Card::from(6)));
    }
}
