use super::node::MAX_PLAYERS;
use super::node::NIL;
use super::node::Node;
use super::node::NodeKind;
use super::node::Spot;
use super::odds::Odds;
use crate::Chips;
use crate::Probability;
use crate::Utility;
use crate::cards::HandValue;

/// Running accumulators beside each node: how much probability mass has
/// reached it, and each player's mass-weighted profit conditional on the
/// hands evaluated so far.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeEval {
    pub activity: Probability,
    pub profit: [Utility; MAX_PLAYERS],
}

/// The full decision tree of one limit betting round, built eagerly into an
/// arena with children referenced by index. The shape is fixed by (players,
/// blinds, raise cap); accumulators are updated once per evaluated hand.
///
/// Tree size is exponential in players and raise cap; practical
/// configurations keep both small.
pub struct Tree {
    n: usize,
    increment: u8,
    nodes: Vec<Node>,
    evals: Vec<NodeEval>,
}

impl Tree {
    pub fn new(players: usize, sblind: u8, bblind: u8, raises: u8) -> Self {
        let mut tree = Self {
            n: players,
            increment: bblind,
            nodes: Vec::new(),
            evals: Vec::new(),
        };
        tree.grow(Spot::root(players, sblind, bblind, raises));
        tree.evals = vec![NodeEval::default(); tree.nodes.len()];
        log::debug!(
            "built betting tree: {} players, {} raises, {} nodes",
            players,
            raises,
            tree.nodes.len()
        );
        tree
    }

    fn grow(&mut self, spot: Spot) -> u32 {
        let index = self.nodes.len() as u32;
        self.nodes.push(Node::from(&spot));
        let children = match spot.kind() {
            NodeKind::LastManStanding | NodeKind::Showdown => [NIL; 3],
            NodeKind::Skip => [self.grow(spot.skip()), NIL, NIL],
            NodeKind::FoldCall => [self.grow(spot.fold()), self.grow(spot.call()), NIL],
            NodeKind::FoldCallRaise => [
                self.grow(spot.fold()),
                self.grow(spot.call()),
                self.grow(spot.raise(self.increment)),
            ],
        };
        self.nodes[index as usize].children = children;
        index
    }

    //

    pub fn players(&self) -> usize {
        self.n
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }
    pub fn eval(&self, index: usize) -> &NodeEval {
        &self.evals[index]
    }
    pub fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes[index]
            .children
            .iter()
            .filter(|c| **c != NIL)
            .map(|c| *c as usize)
    }
    /// each player's accumulated expected profit at the root
    pub fn evs(&self) -> [Utility; MAX_PLAYERS] {
        self.evals[0].profit
    }
    pub fn activity(&self) -> Probability {
        self.evals[0].activity
    }

    /// per-player empirical profit of each option, summed over every
    /// decision node where that player acts. feeds the strategy adjuster.
    pub fn option_profits(&self) -> [[Utility; 3]; MAX_PLAYERS] {
        let mut profits = [[0.0; 3]; MAX_PLAYERS];
        for node in self.nodes.iter() {
            if matches!(node.kind, NodeKind::FoldCall | NodeKind::FoldCallRaise) {
                for (option, child) in node.children.iter().enumerate() {
                    if *child != NIL {
                        profits[node.actor][option] +=
                            self.evals[*child as usize].profit[node.actor];
                    }
                }
            }
        }
        profits
    }

    /// merge accumulators from a worker's identically shaped tree
    pub fn absorb(&mut self, other: Tree) {
        assert!(self.len() == other.len());
        for (mine, theirs) in self.evals.iter_mut().zip(other.evals) {
            mine.activity += theirs.activity;
            for (a, b) in mine.profit.iter_mut().zip(theirs.profit) {
                *a += b;
            }
        }
    }

    //

    /// Walk the tree once for one dealt hand. `values` are the players'
    /// externally classified hand values (only read at showdown leaves),
    /// `odds` each player's mixed strategy, `weight` the probability mass
    /// of this deal (1.0 for Monte-Carlo samples). Returns the root EV
    /// vector for this hand.
    pub fn accumulate(
        &mut self,
        values: &[HandValue],
        odds: &[Odds],
        weight: Probability,
    ) -> [Utility; MAX_PLAYERS] {
        assert!(values.len() >= self.n);
        assert!(odds.len() >= self.n);
        self.descend(0, weight, values, odds)
    }

    fn descend(
        &mut self,
        index: u32,
        reach: Probability,
        values: &[HandValue],
        odds: &[Odds],
    ) -> [Utility; MAX_PLAYERS] {
        let node = self.nodes[index as usize];
        let ev = match node.kind {
            NodeKind::LastManStanding => Self::settle_uncontested(&node, self.n),
            NodeKind::Showdown => Self::settle_showdown(&node, self.n, values),
            NodeKind::Skip => self.descend(node.children[0], reach, values, odds),
            NodeKind::FoldCall => {
                let (f, c) = odds[node.actor].capped();
                let fold = self.descend(node.children[0], reach * f, values, odds);
                let call = self.descend(node.children[1], reach * c, values, odds);
                std::array::from_fn(|i| f * fold[i] + c * call[i])
            }
            NodeKind::FoldCallRaise => {
                let Odds { fold: f, call: c, raise: r } = odds[node.actor];
                let fold = self.descend(node.children[0], reach * f, values, odds);
                let call = self.descend(node.children[1], reach * c, values, odds);
                let raise = self.descend(node.children[2], reach * r, values, odds);
                std::array::from_fn(|i| f * fold[i] + c * call[i] + r * raise[i])
            }
        };
        let eval = &mut self.evals[index as usize];
        eval.activity += reach;
        for (sum, contribution) in eval.profit.iter_mut().zip(ev) {
            *sum += reach * contribution;
        }
        ev
    }

    /// the last active player scoops everything the others put in
    fn settle_uncontested(node: &Node, n: usize) -> [Utility; MAX_PLAYERS] {
        let winner = node.active.trailing_zeros() as usize;
        let mut ev = [0.0; MAX_PLAYERS];
        for i in 0..n {
            ev[i] = -(node.pots[i] as Utility);
        }
        ev[winner] = (node.pot - node.pots[winner] as Chips) as Utility;
        ev
    }

    /// winners split the pot evenly; zero-sum across all players
    fn settle_showdown(node: &Node, n: usize, values: &[HandValue]) -> [Utility; MAX_PLAYERS] {
        let best = (0..n)
            .filter(|i| node.active & (1 << i) != 0)
            .map(|i| values[i])
            .max()
            .expect("at least two active players");
        let winners = (0..n)
            .filter(|i| node.active & (1 << i) != 0)
            .filter(|i| values[*i] == best)
            .count();
        let share = node.pot as Utility / winners as Utility;
        let mut ev = [0.0; MAX_PLAYERS];
        for i in 0..n {
            let won = node.active & (1 << i) != 0 && values[i] == best;
            ev[i] = match won {
                true => share - node.pots[i] as Utility,
                false => -(node.pots[i] as Utility),
            };
        }
        ev
    }
}
