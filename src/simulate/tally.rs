use crate::Utility;
use crate::cards::HandRanking;
use crate::cards::Hole;

/// Accumulated statistics for one worker's share of a run. Workers each own
/// a Tally and the session folds them together after the join, so no field
/// needs synchronization.
pub struct Tally {
    deals: u64,
    rankings: [u64; 9],
    profits: [Utility; 169],
    samples: [u64; 169],
}

impl Default for Tally {
    fn default() -> Self {
        Self {
            deals: 0,
            rankings: [0; 9],
            profits: [0.0; 169],
            samples: [0; 169],
        }
    }
}

impl Tally {
    pub fn deal(&mut self) {
        self.deals += 1;
    }
    pub fn record(&mut self, ranking: HandRanking) {
        self.rankings[u8::from(ranking) as usize] += 1;
    }
    pub fn credit(&mut self, class: usize, profit: Utility) {
        debug_assert!(class < Hole::classes());
        self.profits[class] += profit;
        self.samples[class] += 1;
    }

    /// element-wise merge, used as the rayon reduction operator
    pub fn absorb(mut self, other: Tally) -> Self {
        self.deals += other.deals;
        for (a, b) in self.rankings.iter_mut().zip(other.rankings) {
            *a += b;
        }
        for (a, b) in self.profits.iter_mut().zip(other.profits) {
            *a += b;
        }
        for (a, b) in self.samples.iter_mut().zip(other.samples) {
            *a += b;
        }
        self
    }

    //

    pub fn deals(&self) -> u64 {
        self.deals
    }
    pub fn count(&self, ranking: HandRanking) -> u64 {
        self.rankings[u8::from(ranking) as usize]
    }
    pub fn frequency(&self, ranking: HandRanking) -> f64 {
        match self.deals {
            0 => 0.0,
            n => self.count(ranking) as f64 / n as f64,
        }
    }
    pub fn samples(&self, class: usize) -> u64 {
        self.samples[class]
    }
    /// mean profit per deal for a hole class, None until it has been seen
    pub fn ev(&self, class: usize) -> Option<Utility> {
        match self.samples[class] {
            0 => None,
            n => Some(self.profits[class] / n as Utility),
        }
    }
}
