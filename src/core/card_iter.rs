use super::Card;

/// Iterates every `num_cards` sized combination of a list of cards.
///
/// Combinations come out in lexicographic order of their positions in the
/// source list, so for pairs that is ascending `(i, j)` with `i < j`.
#[derive(Debug)]
pub struct CardIter<'a> {
    // All the possible cards that can be dealt
    possible_cards: &'a [Card],

    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,

    // Set once the last combination has been handed out.
    done: bool,
}

impl<'a> CardIter<'a> {
    /// Create a new iterator over `num_cards` sized combinations.
    ///
    /// ```
    /// use hand_odds::core::{Card, CardIter};
    ///
    /// let cards: Vec<Card> = (0..7u8).map(Card::from).collect();
    /// assert_eq!(21, CardIter::new(&cards, 2).count());
    /// assert_eq!(21, CardIter::new(&cards, 5).count());
    /// ```
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> CardIter<'a> {
        CardIter {
            possible_cards,
            idx: (0..num_cards).collect(),
            done: num_cards > possible_cards.len(),
        }
    }

    /// Step the offsets to the next combination, or mark the iterator done.
    fn advance(&mut self) {
        let n = self.possible_cards.len();
        let k = self.idx.len();

        // Find the right most offset that still has room to move.
        let mut level = k;
        while level > 0 {
            level -= 1;
            if self.idx[level] < n - (k - level) {
                self.idx[level] += 1;
                for after in level + 1..k {
                    self.idx[after] = self.idx[after - 1] + 1;
                }
                return;
            }
        }
        self.done = true;
    }
}

impl Iterator for CardIter<'_> {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }

        let result_cards: Vec<Card> = self.idx.iter().map(|i| self.possible_cards[*i]).collect();

        // The empty combination only happens once.
        if self.idx.is_empty() {
            self.done = true;
        } else {
            self.advance();
        }
        Some(result_cards)
    }
}
