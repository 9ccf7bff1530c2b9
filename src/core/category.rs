use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// The ten hand categories the tables report on.
///
/// These are not a ranking. A single five card hand can belong to several
/// categories at once; see `classify`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum HandCategory {
    /// Ten through Ace, all one suit.
    Royal = 0,
    /// Five in a row, all one suit.
    StraightFlush = 1,
    /// Four of the same value.
    Quads = 2,
    /// Three of one value and two of another value
    FullHouse = 3,
    /// Five cards of the same suit
    Flush = 4,
    /// Five cards in a sequence
    Straight = 5,
    /// Three of the same value.
    ThreeCard = 6,
    /// Two different values each seen at least twice.
    TwoPair = 7,
    /// Some value seen at least twice.
    OnePair = 8,
    /// Every hand.
    HighCard = 9,
}

/// Number of categories, and the length of every `CategoryMap`.
pub const CATEGORY_COUNT: usize = 10;

const CATEGORIES: [HandCategory; CATEGORY_COUNT] = [
    HandCategory::Royal,
    HandCategory::StraightFlush,
    HandCategory::Quads,
    HandCategory::FullHouse,
    HandCategory::Flush,
    HandCategory::Straight,
    HandCategory::ThreeCard,
    HandCategory::TwoPair,
    HandCategory::OnePair,
    HandCategory::HighCard,
];

impl HandCategory {
    /// All the categories, strongest first.
    pub const fn categories() -> [HandCategory; CATEGORY_COUNT] {
        CATEGORIES
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::Royal => "Royal",
            HandCategory::StraightFlush => "StraightFlush",
            HandCategory::Quads => "Quads",
            HandCategory::FullHouse => "FullHouse",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeCard => "ThreeCard",
            HandCategory::TwoPair => "TwoPair",
            HandCategory::OnePair => "OnePair",
            HandCategory::HighCard => "HighCard",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HandCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATEGORIES
            .iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| format!("unknown hand category {s}"))
    }
}

/// A value for every hand category.
///
/// Backed by a fixed array so there is never a missing or extra category.
/// Used for occurrence counters (`CategoryMap<u64>`), probabilities
/// (`CategoryMap<f64>`) and classifier output (`CategoryMap<bool>`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryMap<T>([T; CATEGORY_COUNT]);

impl<T> CategoryMap<T> {
    /// Build a map by asking for the value of each category.
    pub fn from_fn<F: FnMut(HandCategory) -> T>(mut f: F) -> Self {
        Self(std::array::from_fn(|i| f(CATEGORIES[i])))
    }

    /// Category and value pairs, strongest category first.
    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, &T)> {
        CATEGORIES.iter().copied().zip(self.0.iter())
    }

    /// Apply `f` to every value.
    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> CategoryMap<U> {
        CategoryMap(std::array::from_fn(|i| f(&self.0[i])))
    }
}

impl<T: Default> Default for CategoryMap<T> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| T::default()))
    }
}

impl<T> Index<HandCategory> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: HandCategory) -> &T {
        &self.0[category as usize]
    }
}

impl<T> IndexMut<HandCategory> for CategoryMap<T> {
    fn index_mut(&mut self, category: HandCategory) -> &mut T {
        &mut self.0[category as usize]
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for CategoryMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT))?;
        for (category, value) in self.iter() {
            map.serialize_entry(category.name(), value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct CategoryMapVisitor<T>(std::marker::PhantomData<T>);

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::de::Visitor<'de> for CategoryMapVisitor<T> {
    type Value = CategoryMap<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map holding every hand category exactly once")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        use serde::de::Error;

        let mut values: [Option<T>; CATEGORY_COUNT] = std::array::from_fn(|_| None);
        while let Some(name) = access.next_key::<String>()? {
            let category = name.parse::<HandCategory>().map_err(A::Error::custom)?;
            let slot = &mut values[category as usize];
            if slot.is_some() {
                return Err(A::Error::custom(format!("duplicate hand category {name}")));
            }
            *slot = Some(access.next_value()?);
        }

        let mut out = Vec::with_capacity(CATEGORY_COUNT);
        for (category, value) in CATEGORIES.iter().zip(values) {
            out.push(value.ok_or_else(|| A::Error::missing_field(category.name()))?);
        }
        let array: [T; CATEGORY_COUNT] = out
            .try_into()
            .map_err(|_| A::Error::custom("wrong number of hand categories"))?;
        Ok(CategoryMap(array))
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for CategoryMap<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(CategoryMapVisitor(std::marker::PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_complete() {
        let map: CategoryMap<u64> = CategoryMap::default();
        assert_eq!(CATEGORY_COUNT, map.iter().count());
        assert!(map.iter().all(|(_, v)| *v == 0));
    }

    #[test]
    fn test_index_matches_iteration_order() {
        let map = CategoryMap::from_fn(|c| c as usize);
        for (category, value) in map.iter() {
            assert_eq!(category as usize, *value);
            assert_eq!(map[category], *value);
        }
    }

    #[test]
    fn test_index_mut() {
        let mut map: CategoryMap<u64> = CategoryMap::default();
        map[HandCategory::Flush] += 3;
        assert_eq!(3, map[HandCategory::Flush]);
        assert_eq!(0, map[HandCategory::Straight]);
    }

    #[test]
    fn test_names_parse() {
        for category in HandCategory::categories() {
            assert_eq!(Ok(category), category.name().parse());
            assert_eq!(category.name(), category.to_string());
        }
        assert!("Kicker".parse::<HandCategory>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_keys_are_names() {
        let mut map: CategoryMap<f64> = CategoryMap::default();
        map[HandCategory::Royal] = 1.0;
        let json = serde_json::to_string(&map).unwrap();
        assert!(json.starts_with("{\"Royal\":1.0,\"StraightFlush\":0.0"));
        assert!(json.ends_with("\"HighCard\":0.0}"));

        let back: CategoryMap<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_missing_category_rejected() {
        let json = r#"{"Royal":1.0}"#;
        assert!(serde_json::from_str::<CategoryMap<f64>>(json).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_unknown_category_rejected() {
        let mut map: CategoryMap<u64> = CategoryMap::default();
        map[HandCategory::OnePair] = 2;
        let json = serde_json::to_string(&map).unwrap().replace("OnePair", "Kicker");
        assert!(serde_json::from_str::<CategoryMap<u64>>(&json).is_err());
    }
}
