use std::collections::HashMap;

use tracing::{Level, event, trace_span};

use super::{Probabilities, ProbabilityTable, StartingHand, Tally};
use crate::core::{Card, CardSet, CategoryMap, Classifiable, Deck, HandOddsError};

/// Cards in a starting hand.
pub const HOLE_CARDS: usize = 2;
/// Hole cards plus a full five card board.
pub const DEAL_SIZE: usize = 7;

/// How the deals between a starting hand and the river are walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Traversal {
    /// Every distinct board is dealt once. Partial deals report the share
    /// of their distinct completions that reach each category.
    #[default]
    Combinations,
    /// One card at a time in deck order, along every insertion order, with
    /// a single tally folded through the whole walk.
    Paths,
}

/// Walks every deal reachable from a starting hand over a fixed deck and
/// records category probabilities for each card set it passes through.
#[derive(Debug, Clone, Copy)]
pub struct Enumerator<'a> {
    deck: &'a Deck,
    traversal: Traversal,
}

impl<'a> Enumerator<'a> {
    pub fn new(deck: &'a Deck) -> Self {
        Self {
            deck,
            traversal: Traversal::default(),
        }
    }

    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    pub fn deck(&self) -> &'a Deck {
        self.deck
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Which categories a complete seven card deal can make.
    ///
    /// Every five card hand left after taking out a pair of the seven is
    /// classified, and a category counts as reached if any of the 21 hands
    /// reaches it.
    ///
    /// # Panics
    ///
    /// Panics unless `deal` holds exactly seven cards.
    pub fn river(&self, deal: CardSet) -> CategoryMap<bool> {
        assert_eq!(DEAL_SIZE, deal.count(), "a river deal is seven cards");
        let mut cards = [Card::from(0); DEAL_SIZE];
        for (slot, card) in cards.iter_mut().zip(deal.iter()) {
            *slot = card;
        }

        let mut present: CategoryMap<bool> = CategoryMap::default();
        for i in 0..DEAL_SIZE {
            for j in i + 1..DEAL_SIZE {
                let mut hand = deal;
                hand.remove(&cards[i]);
                hand.remove(&cards[j]);
                for (category, hit) in hand.categories().iter() {
                    present[category] |= *hit;
                }
            }
        }
        present
    }

    /// Grow `set` one deck card at a time until it holds seven cards.
    ///
    /// Each seven card deal reached records its categories in `tally` and
    /// writes a 0 or 1 probability for every category. Smaller sets are
    /// written after all of their extensions with `tally`'s running ratio.
    /// The same tally is carried through every call in deck order, so a
    /// partial deal's ratio includes everything counted before it in the
    /// walk.
    ///
    /// # Panics
    ///
    /// Panics if `set` holds fewer than two or more than seven cards.
    pub fn expand(&self, set: CardSet, tally: &mut Tally, table: &mut ProbabilityTable) {
        let size = set.count();
        assert!(
            (HOLE_CARDS..=DEAL_SIZE).contains(&size),
            "cannot expand a set of {size} cards"
        );

        if size == DEAL_SIZE {
            let present = self.river(set);
            tally.record(&present);
            event!(Level::TRACE, key = %set, "river");
            table.insert(set, certainty(&present));
            return;
        }

        for card in self.deck.iter() {
            if set.contains(card) {
                continue;
            }
            self.expand(set.with(*card), tally, table);
        }

        event!(Level::DEBUG, key = %set, visits = tally.visits, "partial deal");
        table.insert(set, tally.probabilities());
    }

    /// Probabilities for a starting hand and every set between it and the
    /// river, each distinct board dealt exactly once.
    ///
    /// Boards are grown from a cursor into the rest of the deck so cards
    /// are only ever added in deck order. Each finished deal is folded into
    /// the tally of every partial deal it completes, which makes a partial
    /// deal's probabilities a true ratio over its distinct completions.
    pub fn completions(&self, hole: CardSet) -> ProbabilityTable {
        assert_eq!(HOLE_CARDS, hole.count(), "starting hands are two cards");
        let rest: Vec<Card> = self.deck.iter().copied().filter(|c| !hole.contains(c)).collect();

        let mut tallies: HashMap<CardSet, Tally> = HashMap::new();
        let mut table = ProbabilityTable::new();
        self.descend(hole, hole, &rest, &mut tallies, &mut table);

        for (set, tally) in tallies {
            event!(Level::DEBUG, key = %set, visits = tally.visits, "partial deal");
            table.insert(set, tally.probabilities());
        }
        table
    }

    fn descend(
        &self,
        hole: CardSet,
        set: CardSet,
        rest: &[Card],
        tallies: &mut HashMap<CardSet, Tally>,
        table: &mut ProbabilityTable,
    ) {
        let needed = DEAL_SIZE - set.count();
        if needed == 0 {
            let present = self.river(set);
            event!(Level::TRACE, key = %set, "river");
            table.insert(set, certainty(&present));

            let board = set.bits() ^ hole.bits();
            for sub in board.subsets().filter(|sub| sub.count() < board.count()) {
                tallies
                    .entry(CardSet::from(hole.bits() | sub))
                    .or_default()
                    .record(&present);
            }
            return;
        }
        if rest.len() < needed {
            return;
        }

        for (i, card) in rest.iter().enumerate() {
            self.descend(hole, set.with(*card), &rest[i + 1..], tallies, table);
        }
    }

    /// Run one starting hand into `table` using this enumerator's traversal.
    pub fn expand_pair(
        &self,
        hole: CardSet,
        table: &mut ProbabilityTable,
    ) -> Result<(), HandOddsError> {
        self.check_hole(hole)?;

        let span = trace_span!("Enumerator::expand_pair", hole = %hole);
        let _enter = span.enter();

        match self.traversal {
            Traversal::Paths => {
                let mut tally = Tally::new();
                self.expand(hole, &mut tally, table);
            }
            Traversal::Combinations => table.merge(self.completions(hole)),
        }
        Ok(())
    }

    fn check_hole(&self, hole: CardSet) -> Result<(), HandOddsError> {
        if hole.count() != HOLE_CARDS {
            return Err(HandOddsError::StartingHandSize(hole.count()));
        }
        for card in hole.iter() {
            if !self.deck.contains(&card) {
                return Err(HandOddsError::CardNotInDeck(card));
            }
        }
        Ok(())
    }

    /// Run every starting hand of the deck, in deck order, into one table.
    pub fn build_table(&self) -> ProbabilityTable {
        let span = trace_span!("Enumerator::build_table", cards = self.deck.len());
        let _enter = span.enter();

        let pairs = StartingHand::all(self.deck);
        let mut table = ProbabilityTable::new();
        match self.traversal {
            Traversal::Paths => {
                for pair in &pairs {
                    let mut tally = Tally::new();
                    self.expand(pair.cards(), &mut tally, &mut table);
                    finished(pair, &table);
                }
            }
            Traversal::Combinations => self.build_combinations(&pairs, &mut table),
        }
        table
    }

    /// Starting hands are worked on in parallel, a batch at a time, and
    /// merged back in deck order.
    #[cfg(feature = "parallel")]
    fn build_combinations(&self, pairs: &[StartingHand], table: &mut ProbabilityTable) {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

        let batch_size = rayon::current_num_threads().max(1);
        for batch in pairs.chunks(batch_size) {
            let locals = batch
                .par_iter()
                .map(|pair| self.completions(pair.cards()))
                .collect::<Vec<ProbabilityTable>>();
            for (pair, local) in batch.iter().zip(locals) {
                table.merge(local);
                finished(pair, table);
            }
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn build_combinations(&self, pairs: &[StartingHand], table: &mut ProbabilityTable) {
        for pair in pairs {
            table.merge(self.completions(pair.cards()));
            finished(pair, table);
        }
    }
}

/// A river is fully dealt, so every reachable category is certain.
fn certainty(present: &CategoryMap<bool>) -> Probabilities {
    present.map(|hit| if *hit { 1.0 } else { 0.0 })
}

fn finished(pair: &StartingHand, table: &ProbabilityTable) {
    event!(Level::INFO, entries = table.len(), "{}", pair);
}
