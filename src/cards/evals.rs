use super::card::Card;
use super::rank::Rank;
use super::ranking::HandRanking;

/// The readable result of classification: a category plus exactly five
/// tie-break ranks in significance order, padded with AceLow where the
/// category needs fewer. Lexicographic comparison of (ranking, ranks) is
/// the reference total order; HandValue packs the same order into a u32.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct HandEval {
    pub ranking: HandRanking,
    pub ranks: [Rank; 5],
}

impl From<(HandRanking, [Rank; 5])> for HandEval {
    fn from((ranking, ranks): (HandRanking, [Rank; 5])) -> Self {
        Self { ranking, ranks }
    }
}

impl std::fmt::Display for HandEval {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<15}", self.ranking)?;
        for rank in self.ranks {
            write!(f, " {}", rank)?;
        }
        Ok(())
    }
}

/// The classifier's only recoverable failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HandError {
    #[error("duplicate card: {0}")]
    Duplicate(Card),
    #[error("hand must hold 5 to 9 cards, got {0}")]
    Size(usize),
}
