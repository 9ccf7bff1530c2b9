use std::fmt;

/// Card rank or value.
///
/// The discriminant is the face number used in card names, with the Ace
/// counted low (1) and the court cards as 11, 12 and 13.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// A
    Ace = 1,
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
}

/// Constant of all the values in ascending face number.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Ace,
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
];

impl Value {
    /// Get all of the `Value`'s that are possible, Ace first.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Convert a face number (1 through 13) into a value.
    ///
    /// ```
    /// use hand_odds::core::Value;
    ///
    /// assert_eq!(Some(Value::Ace), Value::from_number(1));
    /// assert_eq!(Some(Value::King), Value::from_number(13));
    /// assert_eq!(None, Value::from_number(14));
    /// ```
    pub fn from_number(n: u8) -> Option<Value> {
        match n {
            1..=13 => Some(VALUES[usize::from(n - 1)]),
            _ => None,
        }
    }

    /// The face number of this value. Ace is 1.
    pub const fn number(self) -> u8 {
        self as u8
    }
}

/// Enum for the four different suits.
///
/// The ordering here is the one used when building canonical keys:
/// clubs sort first and spades last.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are, in key order.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Parse the upper case suit symbol used in card names.
    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'C' => Some(Suit::Club),
            'D' => Some(Suit::Diamond),
            'H' => Some(Suit::Heart),
            'S' => Some(Suit::Spade),
            _ => None,
        }
    }

    /// The symbol that prefixes every card name of this suit.
    pub const fn to_char(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// The derived ordering compares suit before value, which is exactly
/// the order cards appear in a canonical key.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of this card.
    pub suit: Suit,
    /// The face value of this card.
    pub value: Value,
}

impl Card {
    /// Create a new card
    ///
    /// ```
    /// use hand_odds::core::{Card, Suit, Value};
    ///
    /// let card = Card::new(Value::King, Suit::Heart);
    /// assert_eq!("H13", card.to_string());
    /// ```
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { suit, value }
    }

    /// Dense position of this card in the standard deck.
    ///
    /// Suits are laid out one after another, thirteen values each.
    pub const fn index(self) -> u8 {
        (self.suit as u8) * 13 + (self.value as u8 - 1)
    }
}

/// The canonical name: suit symbol followed by the face number.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.to_char(), self.value.number())
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.index()
    }
}

/// Inverse of `Card::index`. Anything past the last card of the deck
/// is a programming error.
impl From<u8> for Card {
    fn from(idx: u8) -> Self {
        assert!(idx < 52, "card index {idx} is outside the deck");
        Self {
            suit: SUITS[usize::from(idx / 13)],
            value: VALUES[usize::from(idx % 13)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card::new(Value::Three, Suit::Spade);
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Value::Three, Suit::Club);
        let c2 = Card::new(Value::Four, Suit::Club);
        let c3 = Card::new(Value::Two, Suit::Spade);

        assert!(c1 == c1);
        // Same suit sorts by value
        assert!(c1 < c2);
        // Suit wins over value
        assert!(c3 > c2);
    }

    #[test]
    fn test_value_cmp() {
        assert!(Value::Ace < Value::Two);
        assert!(Value::Queen < Value::King);
        assert_eq!(Value::Two, Value::Two);
    }

    #[test]
    fn test_names() {
        assert_eq!("C1", Card::new(Value::Ace, Suit::Club).to_string());
        assert_eq!("D10", Card::new(Value::Ten, Suit::Diamond).to_string());
        assert_eq!("H13", Card::new(Value::King, Suit::Heart).to_string());
        assert_eq!("S12", Card::new(Value::Queen, Suit::Spade).to_string());
    }

    #[test]
    fn test_index_round_trip() {
        for idx in 0..52u8 {
            assert_eq!(idx, u8::from(Card::from(idx)));
        }
        assert_eq!(Card::new(Value::Ace, Suit::Club), Card::from(0));
        assert_eq!(Card::new(Value::King, Suit::Spade), Card::from(51));
    }

    #[test]
    fn test_index_follows_card_order() {
        let mut prev = Card::from(0);
        for idx in 1..52u8 {
            let card = Card::from(idx);
            assert!(prev < card);
            prev = card;
        }
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_deck() {
        let _ = Card::from(52);
    }

    #[test]
    fn test_from_number() {
        for (i, v) in Value::values().iter().enumerate() {
            assert_eq!(Some(*v), Value::from_number(i as u8 + 1));
        }
        assert_eq!(None, Value::from_number(0));
    }

    #[test]
    fn test_suit_chars() {
        for s in Suit::suits() {
            assert_eq!(Some(s), Suit::from_char(s.to_char()));
        }
        assert_eq!(None, Suit::from_char('x'));
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 4);
    }
}
