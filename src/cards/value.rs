use super::evals::HandEval;
use super::rank::Rank;
use super::ranking::HandRanking;

/// A hand's value packed into a single u32 so comparison is one integer
/// compare: category in the high bits, category-specific tie-break extras
/// in the low 26. The packing preserves exactly the lexicographic order of
/// HandEval, which the differential tests pin down.
///
/// extras by category:
///   HighCard/Flush     14-bit mask of the best five ranks
///   Straight(Flush)    high rank of the run (Five for the wheel)
///   Pair               pair rank << 14 | mask of three kickers
///   TwoPair            hi << 18 | lo << 14 | mask of one kicker
///   Set                trips rank << 14 | mask of two kickers
///   FullHouse          trips rank << 4 | pair rank
///   FourOfAKind        quad rank << 14 | mask of one kicker
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct HandValue(u32);

impl HandValue {
    const SHIFT: u32 = 26;

    pub fn new(ranking: HandRanking, extras: u32) -> Self {
        assert!(extras < (1 << Self::SHIFT));
        Self((u8::from(ranking) as u32) << Self::SHIFT | extras)
    }
    pub fn ranking(&self) -> HandRanking {
        HandRanking::from((self.0 >> Self::SHIFT) as u8)
    }
    pub fn extras(&self) -> u32 {
        self.0 & ((1 << Self::SHIFT) - 1)
    }

    /// kicker ranks folded into a mask; AceLow padding contributes nothing
    pub fn mask(ranks: &[Rank]) -> u32 {
        ranks
            .iter()
            .filter(|r| **r != Rank::AceLow)
            .fold(0u32, |a, r| a | 1 << u8::from(*r))
    }
}

impl From<HandValue> for u32 {
    fn from(v: HandValue) -> u32 {
        v.0
    }
}

impl From<HandEval> for HandValue {
    fn from(eval: HandEval) -> Self {
        let r = eval.ranks;
        let rank = |i: usize| u8::from(r[i]) as u32;
        let extras = match eval.ranking {
            HandRanking::HighCard | HandRanking::Flush => Self::mask(&r),
            HandRanking::Straight | HandRanking::StraightFlush => rank(0),
            HandRanking::Pair => rank(0) << 14 | Self::mask(&r[1..4]),
            HandRanking::TwoPair => rank(0) << 18 | rank(1) << 14 | Self::mask(&r[2..3]),
            HandRanking::Set => rank(0) << 14 | Self::mask(&r[1..3]),
            HandRanking::FullHouse => rank(0) << 4 | rank(1),
            HandRanking::FourOfAKind => rank(0) << 14 | Self::mask(&r[1..2]),
        };
        Self::new(eval.ranking, extras)
    }
}

impl std::fmt::Display for HandValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({:#010x})", self.ranking(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_dominates_extras() {
        let lo = HandValue::new(HandRanking::Flush, (1 << 26) - 1);
        let hi = HandValue::new(HandRanking::FullHouse, 0);
        assert!(lo < hi);
    }

    #[test]
    fn wheel_below_six_high() {
        let wheel = HandValue::new(HandRanking::Straight, u8::from(Rank::Five) as u32);
        let sixes = HandValue::new(HandRanking::Straight, u8::from(Rank::Six) as u32);
        assert!(wheel < sixes);
    }

    #[test]
    fn mask_ignores_padding() {
        assert!(HandValue::mask(&[Rank::King, Rank::AceLow]) == 1 << 12);
    }
}
