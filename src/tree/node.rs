use crate::Chips;

pub const MAX_PLAYERS: usize = 10;

/// arena sentinel for an absent child
pub(crate) const NIL: u32 = u32::MAX;

/// Every betting spot is exactly one of these, tested in this order.
/// A lone surviving player beats the showdown test even when the betting
/// is also closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// terminal: one active player scoops uncontested
    LastManStanding,
    /// terminal: bets matched, hands compared externally
    Showdown,
    /// pass-through: the player to act already folded
    Skip,
    /// raises exhausted, two options
    FoldCall,
    /// three options
    FoldCallRaise,
}

/// The mutable betting state during tree construction. Transitions are the
/// rules of limit betting: fixed raise increment, capped raise count, a
/// raise reopening the action for every other active player.
#[derive(Debug, Clone, Copy)]
pub struct Spot {
    pub n: usize,
    pub active: u16,
    pub actor: usize,
    pub to_call: u8,
    pub raises: u8,
    pub pots: [u8; MAX_PLAYERS],
}

impl Spot {
    /// blinds posted, everyone owes action (the big blind keeps its option)
    pub fn root(n: usize, sblind: u8, bblind: u8, raises: u8) -> Self {
        assert!((2..=MAX_PLAYERS).contains(&n), "players out of range: {}", n);
        assert!(sblind <= bblind);
        let mut pots = [0u8; MAX_PLAYERS];
        pots[0] = sblind;
        pots[1] = bblind;
        Self {
            n,
            active: (1 << n) - 1,
            actor: 2 % n,
            to_call: n as u8,
            raises,
            pots,
        }
    }

    pub fn kind(&self) -> NodeKind {
        if self.active.count_ones() == 1 {
            NodeKind::LastManStanding
        } else if self.to_call == 0 {
            NodeKind::Showdown
        } else if self.active & (1 << self.actor) == 0 {
            NodeKind::Skip
        } else if self.raises == 0 {
            NodeKind::FoldCall
        } else {
            NodeKind::FoldCallRaise
        }
    }

    pub fn pot(&self) -> Chips {
        self.pots[..self.n].iter().map(|p| *p as Chips).sum()
    }
    fn bet(&self) -> u8 {
        *self.pots[..self.n].iter().max().expect("players")
    }

    pub fn skip(self) -> Self {
        self.advance()
    }
    pub fn fold(mut self) -> Self {
        self.active &= !(1 << self.actor);
        self.to_call -= 1;
        self.advance()
    }
    pub fn call(mut self) -> Self {
        self.pots[self.actor] = self.bet();
        self.to_call -= 1;
        self.advance()
    }
    pub fn raise(mut self, increment: u8) -> Self {
        self.pots[self.actor] = self.bet() + increment;
        self.raises -= 1;
        self.to_call = self.active.count_ones() as u8 - 1;
        self.advance()
    }
    fn advance(mut self) -> Self {
        self.actor = (self.actor + 1) % self.n;
        self
    }
}

/// One decision point in the arena. Children are arena indices ordered
/// fold, call, raise; absent options are NIL.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    pub kind: NodeKind,
    pub actor: usize,
    pub active: u16,
    pub pots: [u8; MAX_PLAYERS],
    pub pot: Chips,
    pub(crate) children: [u32; 3],
}

impl From<&Spot> for Node {
    fn from(spot: &Spot) -> Self {
        Self {
            kind: spot.kind(),
            actor: spot.actor,
            active: spot.active,
            pots: spot.pots,
            pot: spot.pot(),
            children: [NIL; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_priority() {
        let mut spot = Spot::root(3, 1, 2, 2);
        assert!(spot.kind() == NodeKind::FoldCallRaise);
        spot.raises = 0;
        assert!(spot.kind() == NodeKind::FoldCall);
        spot.active = 0b001;
        // lone player wins before the showdown test applies
        spot.to_call = 0;
        assert!(spot.kind() == NodeKind::LastManStanding);
        spot.active = 0b011;
        assert!(spot.kind() == NodeKind::Showdown);
        spot.to_call = 1;
        spot.active = 0b011;
        spot.actor = 2;
        assert!(spot.kind() == NodeKind::Skip);
    }

    #[test]
    fn raise_reopens_action() {
        let spot = Spot::root(3, 1, 2, 2);
        let raised = spot.raise(2);
        assert!(raised.to_call == 2);
        assert!(raised.raises == 1);
        assert!(raised.pots[2] == 4);
        assert!(raised.actor == 0);
    }

    #[test]
    fn call_matches_the_bet() {
        let spot = Spot::root(2, 1, 2, 1);
        let called = spot.call();
        assert!(called.pots[0] == 2);
        assert!(called.to_call == 1);
        assert!(called.pot() == 4);
    }

    #[test]
    fn fold_removes_from_bitmap() {
        let spot = Spot::root(3, 1, 2, 1);
        let folded = spot.fold();
        assert!(folded.active == 0b011);
        assert!(folded.to_call == 2);
    }
}
