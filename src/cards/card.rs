use super::rank::Rank;
use super::suit::Suit;

/// A physical playing card. An ace is always held as Rank::Ace;
/// the AceLow representation only appears inside rank masks.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        let rank = match rank {
            Rank::AceLow => Rank::Ace,
            rank => rank,
        };
        Self { rank, suit }
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

/// total order consistent with the packed byte,
/// which is what unique-card sets and sorted combinations use
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        u8::from(*self).cmp(&u8::from(*other))
    }
}
impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// u8 isomorphism
/// (rank_ace_low << 2) | suit, in [0, 52). the ace packs under its low index.
/// Ts
/// 0b00100111
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        (c.rank.low_index() << 2) | u8::from(c.suit)
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52, "Invalid card u8: {}", n);
        Self::new(
            match n >> 2 {
                0 => Rank::Ace,
                r => Rank::from(r),
            },
            Suit::from(n & 3),
        )
    }
}

/// str isomorphism
/// "Ah" "Tc" "5s"
impl From<&str> for Card {
    fn from(s: &str) -> Self {
        assert!(s.len() == 2, "Invalid card str: {}", s);
        Self::new(Rank::from(&s[0..1]), Suit::from(&s[1..2]))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..52u8 {
            assert!(n == u8::from(Card::from(n)));
        }
    }

    #[test]
    fn ace_packs_low() {
        let card = Card::from("As");
        assert!(card.rank() == Rank::Ace);
        assert!(u8::from(card) == 3);
    }

    #[test]
    fn order_follows_byte() {
        let a = Card::from("2c");
        let b = Card::from("Kh");
        assert!(Card::from("As") < a);
        assert!(a < b);
    }
}
