use crate::Probability;
use crate::Utility;

/// No option's probability is ever clamped below this.
pub const FLOOR: Probability = 1e-6;

/// Shift probability mass toward the options that earned more.
///
/// Empirical per-option profits are shifted so the worst is zero,
/// normalized into weights, padded by `leeway` so the worst option is not
/// zeroed outright, and multiplied into the current policy, which is then
/// renormalized and floored. A multiplicative-weights-style heuristic:
/// repeated application is only stable at a true optimum.
pub fn adjust(policy: &mut [Probability], profits: &[Utility], leeway: f64) {
    assert!(policy.len() == profits.len());
    assert!(!policy.is_empty());
    assert!(leeway >= 0.0);
    let n = policy.len() as f64;
    let min = profits.iter().copied().fold(f64::INFINITY, f64::min);
    let shifted = profits.iter().map(|p| p - min).collect::<Vec<_>>();
    let sum = shifted.iter().sum::<f64>();
    let weights = match sum {
        s if s > 0.0 => shifted.iter().map(|p| p / s + leeway).collect::<Vec<_>>(),
        _ => vec![1.0 / n + leeway; policy.len()],
    };
    for (p, w) in policy.iter_mut().zip(weights.iter()) {
        *p *= w;
    }
    match policy.iter().sum::<f64>() {
        total if total > 0.0 => {
            for p in policy.iter_mut() {
                *p /= total;
            }
        }
        _ => {
            for p in policy.iter_mut() {
                *p = 1.0 / n;
            }
        }
    }
    let mut shortfall = 0.0;
    for p in policy.iter_mut() {
        if *p < FLOOR {
            shortfall += FLOOR - *p;
            *p = FLOOR;
        }
    }
    if shortfall > 0.0 {
        let argmax = policy
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).expect("finite probabilities"))
            .map(|(i, _)| i)
            .expect("non-empty policy");
        policy[argmax] -= shortfall;
    }
}
