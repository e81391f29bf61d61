use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Hand represents an unordered set of Cards as one rank mask per suit.
/// Each mask holds 14 bits; an ace sets both its high and its low bit so
/// straight detection can treat it as wrapping below Two. Building a Hand
/// is a per-suit bitwise OR, which makes it associative and commutative.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand([u16; 4]);

impl Hand {
    pub fn empty() -> Self {
        Self([0; 4])
    }
    pub fn insert(&mut self, card: Card) {
        self.0[card.suit() as usize] |= u16::from(card.rank());
    }
    pub fn contains(&self, card: Card) -> bool {
        self.of(card.suit()) & (1 << u8::from(card.rank())) != 0
    }
    /// number of physical cards; an ace counts once despite its two bits
    pub fn size(&self) -> usize {
        self.0
            .iter()
            .map(|bits| (bits & Rank::physical()).count_ones() as usize)
            .sum()
    }
    /// 14-bit rank mask of one suit
    pub fn of(&self, suit: Suit) -> u16 {
        self.0[suit as usize]
    }
    /// 14-bit rank mask across all suits
    pub fn ranks(&self) -> u16 {
        self.0.iter().fold(0, |a, b| a | b)
    }
    /// how many suits hold the given physical rank
    pub fn count(&self, rank: Rank) -> usize {
        let bit = 1 << u8::from(rank);
        self.0.iter().filter(|bits| *bits & bit != 0).count()
    }
}

/// set union
impl std::ops::BitOr for Hand {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self([
            self.0[0] | rhs.0[0],
            self.0[1] | rhs.0[1],
            self.0[2] | rhs.0[2],
            self.0[3] | rhs.0[3],
        ])
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        let mut hand = Self::empty();
        hand.insert(card);
        hand
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        cards.iter().copied().collect()
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |mut hand, card| {
            hand.insert(card);
            hand
        })
    }
}

/// str isomorphism
/// "As Kh 2c"
impl From<&str> for Hand {
    fn from(s: &str) -> Self {
        s.split_whitespace().map(Card::from).collect()
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        let mut cards = Vec::with_capacity(hand.size());
        for suit in Suit::all() {
            let mut bits = hand.of(suit) & Rank::physical();
            while bits > 0 {
                let rank = Rank::from(bits.trailing_zeros() as u8);
                cards.push(Card::new(rank, suit));
                bits &= bits - 1;
            }
        }
        cards.sort();
        cards
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in Vec::<Card>::from(*self) {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
