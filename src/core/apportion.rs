use std::cmp::Ordering;

use tracing::warn;

/// Splits `total` into integer shares proportional to `weights`.
///
/// Greedy largest-remainder method: every share starts at the floor of its
/// proportional target (at least 1), then single units are handed out, or
/// taken back, walking shares by descending fractional remainder and cycling
/// through that ranking as often as needed. Ties keep input order.
///
/// The result sums exactly to `total` whenever `total >= weights.len()`.
/// Below that every share is already at its floor of 1; the removal pass
/// stops after a full sweep without progress and the shares sum to
/// `weights.len()`.
#[must_use]
pub fn apportion_largest_remainder(weights: &[f64], total: usize) -> Vec<usize> {
    if weights.is_empty() {
        return Vec::new();
    }

    let weight_sum: f64 = weights.iter().sum();
    let targets: Vec<f64> = if weight_sum > 0.0 && weight_sum.is_finite() {
        weights
            .iter()
            .map(|weight| weight / weight_sum * total as f64)
            .collect()
    } else {
        let even = total as f64 / weights.len() as f64;
        vec![even; weights.len()]
    };

    let mut shares: Vec<usize> = targets
        .iter()
        .map(|target| (target.floor() as usize).max(1))
        .collect();

    let ranking = remainder_ranking(&targets);
    let assigned: usize = shares.iter().sum();

    if assigned < total {
        let mut missing = total - assigned;
        for &index in ranking.iter().cycle() {
            if missing == 0 {
                break;
            }
            shares[index] += 1;
            missing -= 1;
        }
    } else if assigned > total {
        let mut excess = assigned - total;
        let mut cursor = 0usize;
        let mut idle_steps = 0usize;
        while excess > 0 {
            let index = ranking[cursor % ranking.len()];
            if shares[index] > 1 {
                shares[index] -= 1;
                excess -= 1;
                idle_steps = 0;
            } else {
                idle_steps += 1;
                if idle_steps >= ranking.len() {
                    warn!(
                        total,
                        shares = shares.len(),
                        unresolved = excess,
                        "apportionment cannot drop below one unit per share"
                    );
                    break;
                }
            }
            cursor += 1;
        }
    }

    shares
}

/// Share indices ordered by descending fractional remainder.
fn remainder_ranking(targets: &[f64]) -> Vec<usize> {
    let mut ranking: Vec<usize> = (0..targets.len()).collect();
    ranking.sort_by(|&a, &b| {
        let frac_a = targets[a] - targets[a].floor();
        let frac_b = targets[b] - targets[b].floor();
        frac_b.partial_cmp(&frac_a).unwrap_or(Ordering::Equal)
    });
    ranking
}
