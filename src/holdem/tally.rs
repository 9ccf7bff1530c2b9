use crate::core::CategoryMap;

/// Running counts behind a probability map.
///
/// `occurrences[c]` is how many recorded deals could reach category `c`
/// and `visits` is how many deals were recorded in total.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tally {
    pub occurrences: CategoryMap<u64>,
    pub visits: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished deal.
    pub fn record(&mut self, present: &CategoryMap<bool>) {
        for (category, hit) in present.iter() {
            if *hit {
                self.occurrences[category] += 1;
            }
        }
        self.visits += 1;
    }

    /// Occurrences over visits for every category.
    ///
    /// A tally that has never recorded a deal reports zero everywhere
    /// rather than dividing by zero.
    pub fn probabilities(&self) -> CategoryMap<f64> {
        if self.visits == 0 {
            return CategoryMap::default();
        }
        let visits = self.visits as f64;
        self.occurrences.map(|n| *n as f64 / visits)
    }
}
