use super::{Card, CardSet, CategoryMap, HandCategory, Value};

/// Value bits for Ten, Jack, Queen, King and Ace.
const BROADWAY: u16 = 1 << (Value::Ace as u16)
    | 1 << (Value::Ten as u16)
    | 1 << (Value::Jack as u16)
    | 1 << (Value::Queen as u16)
    | 1 << (Value::King as u16);

/// Five consecutive value bits starting at the lowest.
const RUN_OF_FIVE: u16 = 0b1_1111;

/// The facts about a five card hand that every category is decided from.
#[derive(Debug, Clone, Copy)]
struct Shape {
    /// Bit `n` is set when a card with face number `n` is present.
    value_set: u16,
    /// Bit `s` is set when a card of suit `s` is present.
    suit_set: u8,
    /// How many distinct values there are.
    distinct: u32,
    /// Largest number of cards sharing one value.
    max_count: u8,
    /// How many values are held two or more times.
    pairs: u8,
}

impl Shape {
    fn new(cards: CardSet) -> Self {
        let mut value_set = 0u16;
        let mut suit_set = 0u8;
        let mut counts = [0u8; 14];
        for c in cards.iter() {
            value_set |= 1 << c.value.number();
            suit_set |= 1 << (c.suit as u8);
            counts[usize::from(c.value.number())] += 1;
        }

        Self {
            value_set,
            suit_set,
            distinct: value_set.count_ones(),
            max_count: counts.iter().copied().max().unwrap_or(0),
            pairs: counts.iter().filter(|c| **c >= 2).count() as u8,
        }
    }

    fn is_flush(&self) -> bool {
        self.suit_set.count_ones() == 1
    }

    fn is_broadway(&self) -> bool {
        self.value_set == BROADWAY
    }

    /// Five consecutive face numbers, or Ten through Ace with the Ace high.
    /// Ace through Five is consecutive as it stands.
    fn is_straight(&self) -> bool {
        let low = self.value_set.trailing_zeros();
        (self.distinct == 5 && self.value_set >> low == RUN_OF_FIVE) || self.is_broadway()
    }
}

/// Which categories a five card hand belongs to.
///
/// Each category is tested on its own; the answers overlap. A full house
/// is also a three card and a two pair, a royal is also a straight flush,
/// and every hand is a high card.
///
/// # Panics
///
/// Panics when not given exactly five distinct cards.
///
/// ```
/// use hand_odds::core::{classify, CardSet, HandCategory};
///
/// let full_house: CardSet = "C9D9S9C1D1".parse().unwrap();
/// let categories = classify(&full_house.iter().collect::<Vec<_>>());
/// assert!(categories[HandCategory::FullHouse]);
/// assert!(categories[HandCategory::ThreeCard]);
/// assert!(categories[HandCategory::TwoPair]);
/// assert!(!categories[HandCategory::Quads]);
/// ```
pub fn classify(cards: &[Card]) -> CategoryMap<bool> {
    assert_eq!(5, cards.len(), "hands are classified five cards at a time");
    let set: CardSet = cards.iter().copied().collect();
    assert_eq!(5, set.count(), "duplicate card in {cards:?}");
    classify_set(set)
}

fn classify_set(set: CardSet) -> CategoryMap<bool> {
    let shape = Shape::new(set);
    let flush = shape.is_flush();
    let straight = shape.is_straight();
    let three = shape.max_count == 3;

    CategoryMap::from_fn(|category| match category {
        HandCategory::Royal => flush && shape.is_broadway(),
        HandCategory::StraightFlush => flush && straight,
        HandCategory::Quads => shape.max_count == 4,
        HandCategory::FullHouse => shape.distinct == 2 && three,
        HandCategory::Flush => flush,
        HandCategory::Straight => straight,
        HandCategory::ThreeCard => three,
        HandCategory::TwoPair => shape.pairs >= 2,
        HandCategory::OnePair => shape.pairs >= 1,
        HandCategory::HighCard => true,
    })
}

/// Anything that can be sorted into hand categories.
pub trait Classifiable {
    fn categories(&self) -> CategoryMap<bool>;
}

/// Implementation for `CardSet`
impl Classifiable for CardSet {
    /// # Panics
    ///
    /// Panics unless the set holds exactly five cards.
    fn categories(&self) -> CategoryMap<bool> {
        assert_eq!(5, self.count(), "hands are classified five cards at a time");
        classify_set(*self)
    }
}

impl Classifiable for [Card] {
    fn categories(&self) -> CategoryMap<bool> {
        classify(self)
    }
}
