use std::fmt;
use std::str::FromStr;

use super::{Card, CardBitSet, CardBitSetIter, HandOddsError, Suit, Value};

/// An unordered set of distinct cards: hole cards, a partial board, or a
/// complete seven card deal.
///
/// Two sets are equal exactly when they hold the same cards, no matter
/// the order those cards were added in. The same holds for `key()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardSet(CardBitSet);

impl CardSet {
    /// Create a new empty set
    ///
    /// # Examples
    ///
    /// ```
    /// use hand_odds::core::CardSet;
    ///
    /// let set = CardSet::new();
    ///
    /// assert!(set.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self(CardBitSet::new())
    }

    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }

    /// Given a card, is it in the current set?
    ///
    /// # Examples
    ///
    /// ```
    /// use hand_odds::core::{Card, CardSet, Suit, Value};
    ///
    /// let mut set = CardSet::new();
    ///
    /// let card = Card::new(Value::Ace, Suit::Club);
    /// assert!(!set.contains(&card));
    ///
    /// set.insert(card);
    /// assert!(set.contains(&card));
    /// ```
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(*c)
    }

    /// Remove a card from the set, returning whether it was there.
    pub fn remove(&mut self, c: &Card) -> bool {
        let contains = self.contains(c);
        self.0.remove(*c);
        contains
    }

    /// Add a card, returning false if it was already present.
    pub fn insert(&mut self, c: Card) -> bool {
        let contains = self.contains(&c);
        self.0.insert(c);
        !contains
    }

    /// This set with one more card in it.
    pub fn with(self, c: Card) -> Self {
        Self(self.0 | c)
    }

    pub fn count(&self) -> usize {
        self.0.count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cards in canonical order: by suit, then by value.
    pub fn iter(&self) -> CardBitSetIter {
        self.0.into_iter()
    }

    pub fn bits(&self) -> CardBitSet {
        self.0
    }

    /// The canonical key of this set.
    ///
    /// Members are sorted by suit (clubs, diamonds, hearts, spades) and then
    /// by value, and their names are concatenated with no separator.
    ///
    /// ```
    /// use hand_odds::core::{Card, CardSet, Suit, Value};
    ///
    /// let set = CardSet::new_with_cards(vec![
    ///     Card::new(Value::King, Suit::Club),
    ///     Card::new(Value::Two, Suit::Heart),
    ///     Card::new(Value::Ace, Suit::Club),
    /// ]);
    /// assert_eq!("C1C13H2", set.key());
    /// ```
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl Default for CardSet {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CardBitSet> for CardSet {
    fn from(bits: CardBitSet) -> Self {
        Self(bits)
    }
}

impl From<CardSet> for CardBitSet {
    fn from(val: CardSet) -> Self {
        val.0
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Card> for CardSet {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.insert(card);
        }
    }
}

impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self.iter() {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Parse a run of card names such as `C1C13H2`.
///
/// The names may come in any order; the parsed set is the same either way.
/// Every name is a suit symbol followed by a face number from 1 to 13.
impl FromStr for CardSet {
    type Err = HandOddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars().peekable();
        let mut set = CardSet::new();

        while let Some(sc) = chars.next() {
            let suit = Suit::from_char(sc).ok_or(HandOddsError::UnexpectedSuitChar)?;
            let first = chars
                .next()
                .ok_or(HandOddsError::TooFewChars)?
                .to_digit(10)
                .ok_or(HandOddsError::UnexpectedValue)?;

            // Only 10 through 13 take a second digit.
            let mut number = first;
            if first == 1 {
                if let Some(second) = chars.peek().and_then(|c| c.to_digit(10)) {
                    chars.next();
                    number = 10 + second;
                }
            }

            let value = u8::try_from(number)
                .ok()
                .and_then(Value::from_number)
                .ok_or(HandOddsError::UnexpectedValue)?;
            let card = Card::new(value, suit);
            if !set.insert(card) {
                return Err(HandOddsError::DuplicateCard(card));
            }
        }

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;

    use super::*;
    use crate::core::Deck;

    #[test]
    fn test_insert() {
        let mut set = CardSet::new();
        for i in 1..7 {
            let c = Card::from(i);
            assert!(set.insert(c));
            assert!(set.contains(&c));
            assert_eq!(set.count(), usize::from(i));
        }
        assert!(!set.insert(Card::from(1)));
    }

    #[test]
    fn test_remove() {
        let mut set = CardSet::new_with_cards(vec![Card::from(3), Card::from(40)]);
        assert!(set.remove(&Card::from(3)));
        assert!(!set.remove(&Card::from(3)));
        assert_eq!(1, set.count());
    }

    #[test]
    fn test_key_sorts_by_suit_then_value() {
        let set: CardSet = "S1H13C13D2C1C10".parse().unwrap();
        assert_eq!("C1C10C13D2H13S1", set.key());
    }

    #[test]
    fn test_key_is_order_independent() {
        let mut rng = rand::rng();
        let deck = Deck::new();
        let mut cards: Vec<Card> = deck.iter().copied().step_by(7).take(7).collect();
        let expected = CardSet::new_with_cards(cards.clone()).key();

        for _ in 0..50 {
            cards.shuffle(&mut rng);
            let mut set = CardSet::new();
            for c in &cards {
                set.insert(*c);
            }
            assert_eq!(expected, set.key());
        }
    }

    #[test]
    fn test_keys_differ_by_one_card() {
        let deck = Deck::new();
        let base: CardSet = "C1C13".parse().unwrap();
        let mut keys = std::collections::HashSet::new();
        for card in deck.iter().filter(|c| !base.contains(c)) {
            assert!(keys.insert(base.with(*card).key()));
        }
        assert_eq!(50, keys.len());
    }

    #[test]
    fn test_parse_round_trip_all_cards() {
        let deck = Deck::new();
        let all: CardSet = deck.iter().copied().collect();
        let parsed: CardSet = all.key().parse().unwrap();
        assert_eq!(all, parsed);
    }

    #[test]
    fn test_parse_ambiguous_tens() {
        let set: CardSet = "C11C1".parse().unwrap();
        assert_eq!(2, set.count());
        assert!(set.contains(&Card::new(Value::Jack, Suit::Club)));
        assert!(set.contains(&Card::new(Value::Ace, Suit::Club)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "X1".parse::<CardSet>(),
            Err(HandOddsError::UnexpectedSuitChar)
        ));
        assert!(matches!(
            "C".parse::<CardSet>(),
            Err(HandOddsError::TooFewChars)
        ));
        assert!(matches!(
            "C0".parse::<CardSet>(),
            Err(HandOddsError::UnexpectedValue)
        ));
        assert!(matches!(
            "C14".parse::<CardSet>(),
            Err(HandOddsError::UnexpectedValue)
        ));
        assert!(matches!(
            "CH".parse::<CardSet>(),
            Err(HandOddsError::UnexpectedValue)
        ));
        assert!(matches!(
            "C5C5".parse::<CardSet>(),
            Err(HandOddsError::DuplicateCard(_))
        ));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(CardSet::default().is_empty());
    }

    #[test]
    fn test_empty_parse() {
        let set: CardSet = "".parse().unwrap();
        assert!(set.is_empty());
        assert_eq!("", set.key());
    }
}
