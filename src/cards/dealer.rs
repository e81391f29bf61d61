use super::card::Card;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Draws distinct cards uniformly without replacement by rejection
/// sampling against a per-deal marker array. Owns its RNG stream, so each
/// worker thread gets an independent, reproducible Dealer from its seed.
/// n <= 52 is a contract precondition, not a runtime error.
pub struct Dealer {
    rng: SmallRng,
    dealt: [bool; 52],
}

impl Dealer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            dealt: [false; 52],
        }
    }

    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        debug_assert!(n <= 52);
        self.dealt = [false; 52];
        (0..n).map(|_| self.draw()).collect()
    }

    /// in-place variant for hot loops
    pub fn deal_into(&mut self, cards: &mut [Card]) {
        debug_assert!(cards.len() <= 52);
        self.dealt = [false; 52];
        for slot in cards.iter_mut() {
            *slot = self.draw();
        }
    }

    fn draw(&mut self) -> Card {
        loop {
            let n = self.rng.random_range(0..52u8);
            if !self.dealt[n as usize] {
                self.dealt[n as usize] = true;
                return Card::from(n);
            }
        }
    }
}
