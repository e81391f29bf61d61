/// The ace appears twice: once below Two for wheel straights, once above
/// King as the usual high card. A physical ace is always constructed as
/// Rank::Ace; the AceLow variant exists so rank masks can set both bits
/// and so tie-break tuples have a padding value below every real rank.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    AceLow = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
    Ace = 13,
}

impl Rank {
    /// all 14 bits, AceLow through Ace
    pub const fn mask() -> u16 {
        0b11_1111_1111_1111
    }
    /// the 13 bits of physically distinct ranks, Two through Ace
    pub const fn physical() -> u16 {
        0b11_1111_1111_1110
    }
    /// index in an ace-low ordering of the 13 physical ranks.
    /// this is the rank component of the packed Card byte.
    pub const fn low_index(&self) -> u8 {
        (*self as u8) % 13
    }
    /// highest set bit of a rank mask
    pub fn hi(bits: u16) -> Self {
        assert!(bits & Self::mask() != 0);
        Self::from((16 - 1 - (bits & Self::mask()).leading_zeros()) as u8)
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::AceLow,
            1 => Rank::Two,
            2 => Rank::Three,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            8 => Rank::Nine,
            9 => Rank::Ten,
            10 => Rank::Jack,
            11 => Rank::Queen,
            12 => Rank::King,
            13 => Rank::Ace,
            _ => panic!("Invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// u16 injection
///
/// an Ace contributes both its high and its low bit,
/// so straight detection can treat it as wrapping low.
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        match r {
            Rank::Ace | Rank::AceLow => (1 << 13) | 1,
            r => 1 << u8::from(r),
        }
    }
}

/// str isomorphism
impl From<&str> for Rank {
    fn from(s: &str) -> Self {
        match s {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => panic!("Invalid rank str: {}", s),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::AceLow => "A",
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}
