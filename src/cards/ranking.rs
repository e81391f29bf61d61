/// The nine hand categories, weakest to strongest.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum HandRanking {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    Set = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandRanking {
    pub const fn all() -> [Self; 9] {
        [
            Self::HighCard,
            Self::Pair,
            Self::TwoPair,
            Self::Set,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::FourOfAKind,
            Self::StraightFlush,
        ]
    }
}

impl From<u8> for HandRanking {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::HighCard,
            1 => Self::Pair,
            2 => Self::TwoPair,
            3 => Self::Set,
            4 => Self::Straight,
            5 => Self::Flush,
            6 => Self::FullHouse,
            7 => Self::FourOfAKind,
            8 => Self::StraightFlush,
            _ => panic!("Invalid ranking u8: {}", n),
        }
    }
}
impl From<HandRanking> for u8 {
    fn from(r: HandRanking) -> u8 {
        r as u8
    }
}

impl std::fmt::Display for HandRanking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::HighCard => "High Card",
                Self::Pair => "Pair",
                Self::TwoPair => "Two Pair",
                Self::Set => "Set",
                Self::Straight => "Straight",
                Self::Flush => "Flush",
                Self::FullHouse => "Full House",
                Self::FourOfAKind => "Four of a Kind",
                Self::StraightFlush => "Straight Flush",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_order() {
        let all = HandRanking::all();
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
