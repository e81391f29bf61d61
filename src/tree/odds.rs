use crate::Probability;

/// A player's mixed strategy over one betting decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Odds {
    pub fold: Probability,
    pub call: Probability,
    pub raise: Probability,
}

impl Odds {
    pub fn uniform() -> Self {
        Self {
            fold: 1.0 / 3.0,
            call: 1.0 / 3.0,
            raise: 1.0 / 3.0,
        }
    }

    /// fold/call distribution when raising is unavailable
    pub fn capped(&self) -> (Probability, Probability) {
        match self.fold + self.call {
            sum if sum > 0.0 => (self.fold / sum, self.call / sum),
            _ => (0.5, 0.5),
        }
    }
}

impl From<Odds> for [Probability; 3] {
    fn from(odds: Odds) -> Self {
        [odds.fold, odds.call, odds.raise]
    }
}
impl From<[Probability; 3]> for Odds {
    fn from([fold, call, raise]: [Probability; 3]) -> Self {
        Self { fold, call, raise }
    }
}

impl std::fmt::Display for Odds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "f {:.3} c {:.3} r {:.3}",
            self.fold, self.call, self.raise
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_renormalizes() {
        let odds = Odds {
            fold: 0.2,
            call: 0.3,
            raise: 0.5,
        };
        let (fold, call) = odds.capped();
        assert!((fold - 0.4).abs() < 1e-12);
        assert!((call - 0.6).abs() < 1e-12);
    }
}
