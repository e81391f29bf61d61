use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// A two-card hole hand, held with the higher rank first.
///
/// Suit identity is irrelevant to preflop statistics beyond suitedness, so
/// normalize() relabels suits to a canonical representative: 1326 concrete
/// combinations collapse into 169 classes (13 pairs, 78 suited, 78 offsuit).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hole {
    hi: Card,
    lo: Card,
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b);
        let key = |c: &Card| (std::cmp::Reverse(c.rank()), c.suit());
        if key(&a) <= key(&b) {
            Self { hi: a, lo: b }
        } else {
            Self { hi: b, lo: a }
        }
    }
}

impl Hole {
    pub fn hi(&self) -> Card {
        self.hi
    }
    pub fn lo(&self) -> Card {
        self.lo
    }
    pub fn suited(&self) -> bool {
        self.hi.suit() == self.lo.suit()
    }
    pub fn cards(&self) -> [Card; 2] {
        [self.hi, self.lo]
    }

    /// canonical representative: higher card on suit 0, the other on suit 0
    /// if suited else suit 1. deterministic and idempotent.
    pub fn normalize(&self) -> Self {
        Self {
            hi: Card::new(self.hi.rank(), Suit::Club),
            lo: Card::new(
                self.lo.rank(),
                if self.suited() {
                    Suit::Club
                } else {
                    Suit::Diamond
                },
            ),
        }
    }

    /// canonical class index in [0, 169): a 13x13 grid with pairs on the
    /// diagonal, suited hands below it, offsuit hands above
    pub fn index(&self) -> usize {
        let h = (u8::from(self.hi.rank()) - 1) as usize;
        let l = (u8::from(self.lo.rank()) - 1) as usize;
        if h == l || self.suited() {
            h * 13 + l
        } else {
            l * 13 + h
        }
    }

    pub const fn classes() -> usize {
        169
    }

    /// class label for an index, e.g. "QQ", "AKs", "T9o"
    pub fn label(index: usize) -> String {
        let row = index / 13;
        let col = index % 13;
        let rank = |i: usize| Rank::from(i as u8 + 1);
        match row.cmp(&col) {
            std::cmp::Ordering::Equal => format!("{}{}", rank(row), rank(col)),
            std::cmp::Ordering::Greater => format!("{}{}s", rank(row), rank(col)),
            std::cmp::Ordering::Less => format!("{}{}o", rank(col), rank(row)),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.hi, self.lo)
    }
}
