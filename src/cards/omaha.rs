use super::card::Card;
use std::collections::HashMap;

/// all 4! relabelings of the four suits
const PERMUTATIONS: [[u8; 4]; 24] = [
    [0, 1, 2, 3],
    [0, 1, 3, 2],
    [0, 2, 1, 3],
    [0, 2, 3, 1],
    [0, 3, 1, 2],
    [0, 3, 2, 1],
    [1, 0, 2, 3],
    [1, 0, 3, 2],
    [1, 2, 0, 3],
    [1, 2, 3, 0],
    [1, 3, 0, 2],
    [1, 3, 2, 0],
    [2, 0, 1, 3],
    [2, 0, 3, 1],
    [2, 1, 0, 3],
    [2, 1, 3, 0],
    [2, 3, 0, 1],
    [2, 3, 1, 0],
    [3, 0, 1, 2],
    [3, 0, 2, 1],
    [3, 1, 0, 2],
    [3, 1, 2, 0],
    [3, 2, 0, 1],
    [3, 2, 1, 0],
];

const DECK: usize = 52;
const SPACE: usize = DECK * DECK * DECK * DECK;

/// Canonical classes for 4-card Omaha hole hands.
///
/// Two hole hands are equivalent iff one is a suit relabeling of the other;
/// the canonical form is the minimum packed encoding over all 24 suit
/// permutations. The full 52^4 address space is swept once at startup and
/// each sorted combination is assigned a dense class index, numbered in
/// first-seen order. Built explicitly by the caller and passed by reference;
/// there is no lazy global.
pub struct OmahaClasses {
    index: Vec<u32>,
    classes: usize,
}

impl OmahaClasses {
    pub fn build() -> Self {
        let mut index = vec![u32::MAX; SPACE];
        let mut memo = HashMap::<u32, u32>::new();
        for a in 0..DECK as u8 {
            for b in a + 1..DECK as u8 {
                for c in b + 1..DECK as u8 {
                    for d in c + 1..DECK as u8 {
                        let combo = [a, b, c, d];
                        let canon = Self::canonize(combo);
                        let next = memo.len() as u32;
                        let class = *memo.entry(canon).or_insert(next);
                        index[Self::key(combo)] = class;
                    }
                }
            }
        }
        log::debug!("built omaha canonicalization, {} classes", memo.len());
        Self {
            index,
            classes: memo.len(),
        }
    }

    pub fn classes(&self) -> usize {
        self.classes
    }

    /// dense class index of any 4 distinct cards
    pub fn index(&self, cards: [Card; 4]) -> usize {
        let mut bytes = cards.map(u8::from);
        bytes.sort();
        let class = self.index[Self::key(bytes)];
        assert!(class != u32::MAX, "cards must be distinct");
        class as usize
    }

    fn key(sorted: [u8; 4]) -> usize {
        sorted
            .iter()
            .fold(0usize, |k, card| k * DECK + *card as usize)
    }

    /// minimum packed encoding over the suit-permutation orbit
    fn canonize(cards: [u8; 4]) -> u32 {
        PERMUTATIONS
            .iter()
            .map(|permutation| {
                let mut relabeled = cards.map(|card| {
                    let rank = card >> 2;
                    let suit = permutation[(card & 3) as usize];
                    rank << 2 | suit
                });
                relabeled.sort();
                relabeled.iter().fold(0u32, |k, card| k << 8 | *card as u32)
            })
            .min()
            .expect("24 permutations")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::dealer::Dealer;

    fn table() -> &'static OmahaClasses {
        static TABLE: std::sync::OnceLock<OmahaClasses> = std::sync::OnceLock::new();
        TABLE.get_or_init(OmahaClasses::build)
    }

    #[test]
    fn invariant_under_suit_relabeling() {
        let table = table();
        let mut dealer = Dealer::new(0x0aaa);
        for _ in 0..1_000 {
            let cards = dealer.deal(4);
            let cards = [cards[0], cards[1], cards[2], cards[3]];
            for permutation in PERMUTATIONS.iter() {
                let relabeled = cards.map(|card| {
                    let byte = u8::from(card);
                    Card::from(byte >> 2 << 2 | permutation[(byte & 3) as usize])
                });
                assert!(table.index(cards) == table.index(relabeled));
            }
        }
    }

    #[test]
    fn numbering_is_first_seen() {
        let table = table();
        let first = [Card::from(0u8), Card::from(1u8), Card::from(2u8), Card::from(3u8)];
        assert!(table.index(first) == 0);
    }

    #[test]
    fn collapses_far_below_combination_count() {
        let table = table();
        assert!(table.classes() > 10_000);
        assert!(table.classes() < 20_000);
    }
}
