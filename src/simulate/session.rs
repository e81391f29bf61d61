use super::algorithm::Algorithm;
use super::tally::Tally;
use crate::cards::Card;
use crate::cards::Dealer;
use crate::cards::HandRanking;
use crate::cards::HandValue;
use crate::cards::Hole;
use crate::cards::OmahaClasses;
use crate::cards::classify;
use crate::cards::classify_holdem;
use crate::cards::classify_omaha;
use crate::cards::classify_value;
use crate::tree::Odds;
use crate::tree::Tree;
use rayon::prelude::*;

/// decorrelates per-worker RNG streams derived from one session seed
const STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// One Monte-Carlo run: a deal count split across worker threads, each with
/// its own Dealer stream, reduced into a single Tally (and Tree, for EV
/// runs) after the join. Reruns with the same seed and worker count
/// reproduce the same totals.
pub struct Session {
    pub deals: u64,
    pub players: usize,
    pub seed: u64,
    pub workers: usize,
    pub algorithm: Algorithm,
}

impl Session {
    pub fn new(deals: u64, players: usize, seed: u64, algorithm: Algorithm) -> Self {
        Self {
            deals,
            players,
            seed,
            workers: num_cpus::get().max(1),
            algorithm,
        }
    }

    fn dealer(&self, worker: usize) -> Dealer {
        Dealer::new(self.seed ^ (worker as u64 + 1).wrapping_mul(STRIDE))
    }

    /// this worker's share of the deal count; shares sum to the total
    fn share(&self, worker: usize) -> u64 {
        let base = self.deals / self.workers as u64;
        let extra = self.deals % self.workers as u64;
        base + u64::from((worker as u64) < extra)
    }

    //

    /// deal 7-card hands and classify each, one independent hand per seat
    pub fn rankings(&self) -> Tally {
        log::info!(
            "classifying {} deals x {} hands on {} workers ({})",
            self.deals,
            self.players,
            self.workers,
            self.algorithm
        );
        (0..self.workers)
            .into_par_iter()
            .map(|worker| self.rankings_worker(worker))
            .reduce(Tally::default, Tally::absorb)
    }

    fn rankings_worker(&self, worker: usize) -> Tally {
        let mut tally = Tally::default();
        let mut dealer = self.dealer(worker);
        let mut cards = [Card::from(0u8); 7];
        for _ in 0..self.share(worker) {
            for _ in 0..self.players {
                dealer.deal_into(&mut cards);
                tally.deal();
                match self.algorithm {
                    Algorithm::None => {}
                    Algorithm::Slow => {
                        tally.record(classify(&cards).expect("dealt cards are distinct").ranking)
                    }
                    Algorithm::Fast | Algorithm::Fastest => tally.record(
                        classify_value(&cards)
                            .expect("dealt cards are distinct")
                            .ranking(),
                    ),
                }
            }
        }
        tally
    }

    /// deal 4-card holes on 5-card boards, classify two-from-hole
    /// three-from-board, and bucket each hole by its canonical class
    pub fn omaha(&self, classes: &OmahaClasses) -> (Tally, Vec<u64>) {
        log::info!(
            "classifying {} omaha deals x {} hands on {} workers",
            self.deals,
            self.players,
            self.workers
        );
        (0..self.workers)
            .into_par_iter()
            .map(|worker| self.omaha_worker(worker, classes))
            .reduce(
                || (Tally::default(), vec![0u64; classes.classes()]),
                |(tally, mut counts), (other, theirs)| {
                    for (a, b) in counts.iter_mut().zip(theirs) {
                        *a += b;
                    }
                    (tally.absorb(other), counts)
                },
            )
    }

    fn omaha_worker(&self, worker: usize, classes: &OmahaClasses) -> (Tally, Vec<u64>) {
        let mut tally = Tally::default();
        let mut counts = vec![0u64; classes.classes()];
        let mut dealer = self.dealer(worker);
        let mut cards = [Card::from(0u8); 9];
        for _ in 0..self.share(worker) {
            for _ in 0..self.players {
                dealer.deal_into(&mut cards);
                let hole: [Card; 4] = cards[..4].try_into().expect("four hole cards");
                let board: &[Card; 5] = cards[4..].try_into().expect("five board cards");
                tally.deal();
                counts[classes.index(hole)] += 1;
                if self.algorithm != Algorithm::None {
                    tally.record(
                        classify_omaha(&hole, board)
                            .expect("dealt cards are distinct")
                            .ranking,
                    );
                }
            }
        }
        (tally, counts)
    }

    //

    /// deal full hands into per-worker copies of the betting tree, then
    /// merge the trees' accumulators and the per-class profit tallies
    pub fn evaluate(&self, sblind: u8, bblind: u8, raises: u8, odds: &[Odds]) -> (Tree, Tally) {
        assert!(odds.len() >= self.players);
        log::info!(
            "evaluating {} deals for {} players ({} raises) on {} workers",
            self.deals,
            self.players,
            raises,
            self.workers
        );
        let mut parts = (0..self.workers)
            .into_par_iter()
            .map(|worker| self.evaluate_worker(worker, sblind, bblind, raises, odds))
            .collect::<Vec<_>>()
            .into_iter();
        let (mut tree, mut tally) = parts.next().expect("at least one worker");
        for (t, part) in parts {
            tree.absorb(t);
            tally = tally.absorb(part);
        }
        (tree, tally)
    }

    fn evaluate_worker(
        &self,
        worker: usize,
        sblind: u8,
        bblind: u8,
        raises: u8,
        odds: &[Odds],
    ) -> (Tree, Tally) {
        let mut tree = Tree::new(self.players, sblind, bblind, raises);
        let mut tally = Tally::default();
        let mut dealer = self.dealer(worker);
        let mut cards = vec![Card::from(0u8); 2 * self.players + 5];
        let mut values = vec![HandValue::new(HandRanking::HighCard, 0); self.players];
        for _ in 0..self.share(worker) {
            dealer.deal_into(&mut cards);
            let board: &[Card; 5] = cards[2 * self.players..]
                .try_into()
                .expect("five board cards");
            for seat in 0..self.players {
                let hole = [cards[2 * seat], cards[2 * seat + 1]];
                values[seat] = match self.algorithm {
                    Algorithm::Slow => HandValue::from(
                        classify_holdem(&hole, board).expect("dealt cards are distinct"),
                    ),
                    _ => {
                        let seven = [
                            hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
                        ];
                        classify_value(&seven).expect("dealt cards are distinct")
                    }
                };
            }
            let ev = tree.accumulate(&values, odds, 1.0);
            tally.deal();
            for seat in 0..self.players {
                let class = Hole::from((cards[2 * seat], cards[2 * seat + 1])).index();
                tally.credit(class, ev[seat]);
            }
        }
        (tree, tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(deals: u64, players: usize, algorithm: Algorithm) -> Session {
        let mut session = Session::new(deals, players, 0xbeef, algorithm);
        session.workers = 2;
        session
    }

    #[test]
    fn shares_sum_to_total() {
        let mut s = session(1_000_003, 2, Algorithm::Fast);
        s.workers = 7;
        let total: u64 = (0..s.workers).map(|w| s.share(w)).sum();
        assert!(total == s.deals);
    }

    #[test]
    fn rankings_count_every_hand() {
        let s = session(500, 3, Algorithm::Fast);
        let tally = s.rankings();
        assert!(tally.deals() == 1500);
        let classified: u64 = HandRanking::all().iter().map(|r| tally.count(*r)).sum();
        assert!(classified == 1500);
    }

    #[test]
    fn slow_and_fast_paths_agree_on_totals() {
        let slow = session(400, 1, Algorithm::Slow).rankings();
        let fast = session(400, 1, Algorithm::Fast).rankings();
        for ranking in HandRanking::all() {
            assert!(slow.count(ranking) == fast.count(ranking));
        }
    }

    #[test]
    fn none_deals_without_classifying() {
        let tally = session(200, 2, Algorithm::None).rankings();
        assert!(tally.deals() == 400);
        let classified: u64 = HandRanking::all().iter().map(|r| tally.count(*r)).sum();
        assert!(classified == 0);
    }

    #[test]
    fn seven_card_frequencies_are_plausible() {
        let tally = session(20_000, 1, Algorithm::Fast).rankings();
        // pair is the modal 7-card hand at ~44%, high card ~17%
        assert!(tally.frequency(HandRanking::Pair) > 0.35);
        assert!(tally.frequency(HandRanking::Pair) < 0.55);
        assert!(tally.frequency(HandRanking::HighCard) > 0.10);
        assert!(tally.frequency(HandRanking::HighCard) < 0.25);
        assert!(tally.frequency(HandRanking::StraightFlush) < 0.01);
    }

    #[test]
    fn omaha_buckets_every_hole() {
        let classes = OmahaClasses::build();
        let s = session(200, 2, Algorithm::Fast);
        let (tally, counts) = s.omaha(&classes);
        assert!(tally.deals() == 400);
        assert!(counts.iter().sum::<u64>() == 400);
    }

    #[test]
    fn evaluate_is_zero_sum_over_classes() {
        let s = session(2_000, 3, Algorithm::Fast);
        let odds = vec![Odds::uniform(); 3];
        let (tree, tally) = s.evaluate(1, 2, 1, &odds);
        assert!(tally.deals() == 2_000);
        assert!((tree.activity() - 2_000.0).abs() < 1e-6);
        let total: f64 = tree.evs().iter().sum();
        assert!(total.abs() < 1e-6);
    }

    #[test]
    fn reruns_reproduce_totals() {
        let odds = vec![Odds::uniform(); 2];
        let (a, _) = session(300, 2, Algorithm::Fast).evaluate(1, 2, 1, &odds);
        let (b, _) = session(300, 2, Algorithm::Fast).evaluate(1, 2, 1, &odds);
        for player in 0..2 {
            assert!((a.evs()[player] - b.evs()[player]).abs() < 1e-12);
        }
    }
}
