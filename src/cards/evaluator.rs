use super::card::Card;
use super::classify::gather;
use super::evals::HandError;
use super::hand::Hand;
use super::rank::Rank;
use super::ranking::HandRanking;
use super::suit::Suit;
use super::value::HandValue;

/// Bit-packed fast classification of 5 to 9 distinct cards.
/// Observably equivalent to the reference classifier; the packed value
/// carries the same total order.
pub fn classify_value(cards: &[Card]) -> Result<HandValue, HandError> {
    gather(cards).map(|hand| Evaluator::from(hand).value())
}

/// A lazy evaluator over the Hand's per-suit rank masks.
///
/// Categories are searched strongest first with bitwise operations only;
/// the first hit wins, so each finder may assume everything above it missed.
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Evaluator {
    pub fn value(&self) -> HandValue {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("at least five cards")
    }

    //

    fn find_straight_flush(&self) -> Option<HandValue> {
        Suit::all()
            .iter()
            .filter_map(|suit| Self::straight_top(self.0.of(*suit)))
            .max()
            .map(|top| HandValue::new(HandRanking::StraightFlush, top))
    }
    fn find_4_oak(&self) -> Option<HandValue> {
        self.find_n_oak(4, u32::MAX).map(|quad| {
            let kicks = self.kickers(1 << quad, 1);
            HandValue::new(HandRanking::FourOfAKind, quad << 14 | kicks)
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<HandValue> {
        self.find_n_oak(3, u32::MAX).and_then(|trips| {
            self.find_n_oak(2, trips)
                .map(|pair| HandValue::new(HandRanking::FullHouse, trips << 4 | pair))
        })
    }
    fn find_flush(&self) -> Option<HandValue> {
        self.flush_suit().map(|suit| {
            let bits = self.0.of(suit) & Rank::physical();
            HandValue::new(HandRanking::Flush, Self::top_k(bits, 5))
        })
    }
    fn find_straight(&self) -> Option<HandValue> {
        Self::straight_top(self.0.ranks()).map(|top| HandValue::new(HandRanking::Straight, top))
    }
    fn find_3_oak(&self) -> Option<HandValue> {
        self.find_n_oak(3, u32::MAX).map(|trips| {
            let kicks = self.kickers(1 << trips, 2);
            HandValue::new(HandRanking::Set, trips << 14 | kicks)
        })
    }
    fn find_2_oak_2_oak(&self) -> Option<HandValue> {
        self.find_n_oak(2, u32::MAX).and_then(|hi| {
            self.find_n_oak(2, hi).map(|lo| {
                let kicks = self.kickers(1 << hi | 1 << lo, 1);
                HandValue::new(HandRanking::TwoPair, hi << 18 | lo << 14 | kicks)
            })
        })
    }
    fn find_2_oak(&self) -> Option<HandValue> {
        self.find_n_oak(2, u32::MAX).map(|pair| {
            let kicks = self.kickers(1 << pair, 3);
            HandValue::new(HandRanking::Pair, pair << 14 | kicks)
        })
    }
    fn find_1_oak(&self) -> Option<HandValue> {
        Some(HandValue::new(HandRanking::HighCard, self.kickers(0, 5)))
    }

    //

    /// top bit of any 5-in-a-row run; the ace's low bit makes the wheel
    /// fall out of the same fold with Five on top
    fn straight_top(mask: u16) -> Option<u32> {
        let mut bits = mask;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        match bits {
            0 => None,
            b => Some(u8::from(Rank::hi(b)) as u32),
        }
    }
    /// highest physical rank held by at least n suits, skipping one rank
    fn find_n_oak(&self, n: u32, skip: u32) -> Option<u32> {
        (u8::from(Rank::Two) as u32..=u8::from(Rank::Ace) as u32)
            .rev()
            .filter(|r| *r != skip)
            .find(|r| self.count(*r) >= n)
    }
    fn count(&self, r: u32) -> u32 {
        Suit::all()
            .iter()
            .map(|suit| (self.0.of(*suit) >> r) as u32 & 1)
            .sum()
    }
    fn flush_suit(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| (self.0.of(*suit) & Rank::physical()).count_ones() >= 5)
    }
    /// the k highest remaining ranks as a mask, dropping from the bottom
    fn kickers(&self, exclude: u16, k: u32) -> u32 {
        let mut bits = self.0.ranks() & Rank::physical() & !exclude;
        while bits.count_ones() > k {
            bits &= bits - 1;
        }
        bits as u32
    }
    /// keep only the k highest bits of a mask
    fn top_k(mask: u16, k: u32) -> u32 {
        let mut bits = mask;
        while bits.count_ones() > k {
            bits &= bits - 1;
        }
        bits as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::classify::classify;
    use crate::cards::dealer::Dealer;

    fn value(s: &str) -> HandValue {
        let cards = s.split_whitespace().map(Card::from).collect::<Vec<_>>();
        classify_value(&cards).unwrap()
    }

    #[test]
    fn wheel_straight_flush() {
        let v = value("As 2s 3s 4s 5s");
        assert!(v.ranking() == HandRanking::StraightFlush);
        assert!(v.extras() == u8::from(Rank::Five) as u32);
    }

    #[test]
    fn full_house_degrades_lower_trips() {
        let v = value("Ks Kh Kd 7c 7s 7h 2d");
        assert!(v.ranking() == HandRanking::FullHouse);
        let trips = 12;
        let pair = 6;
        assert!(v.extras() == trips << 4 | pair);
    }

    #[test]
    fn rejects_duplicates() {
        let cards = "As Kh Qd Jc As"
            .split_whitespace()
            .map(Card::from)
            .collect::<Vec<_>>();
        assert!(classify_value(&cards) == Err(HandError::Duplicate(Card::from("As"))));
    }

    #[test]
    fn agrees_with_reference_on_seven() {
        let mut dealer = Dealer::new(0x5eed);
        let mut cards = [Card::from(0u8); 7];
        for _ in 0..100_000 {
            dealer.deal_into(&mut cards);
            let slow = classify(&cards).unwrap();
            let fast = classify_value(&cards).unwrap();
            assert!(
                fast == HandValue::from(slow),
                "disagree on {:?}: {:?} vs {}",
                cards,
                slow,
                fast
            );
        }
    }

    /// full-strength sweep, seconds in release: `cargo test --release -- --ignored`
    #[test]
    #[ignore]
    fn agrees_with_reference_on_ten_million() {
        let mut dealer = Dealer::new(0xd1ff);
        let mut cards = [Card::from(0u8); 7];
        for _ in 0..10_000_000 {
            dealer.deal_into(&mut cards);
            let slow = classify(&cards).unwrap();
            let fast = classify_value(&cards).unwrap();
            assert!(
                fast == HandValue::from(slow),
                "disagree on {:?}: {:?} vs {}",
                cards,
                slow,
                fast
            );
        }
    }

    #[test]
    fn agrees_with_reference_on_five_and_nine() {
        let mut dealer = Dealer::new(0xface);
        for _ in 0..20_000 {
            for n in [5usize, 6, 8, 9] {
                let cards = dealer.deal(n);
                let slow = classify(&cards).unwrap();
                let fast = classify_value(&cards).unwrap();
                assert!(fast == HandValue::from(slow));
            }
        }
    }

    #[test]
    fn order_preserved_between_categories() {
        let quads = value("As Ah Ad Ac Ks");
        let boat = value("Ks Kh Kd 7c 7s");
        let flush = value("As Ks Qs Js 9s");
        assert!(boat < quads);
        assert!(flush < boat);
    }
}
