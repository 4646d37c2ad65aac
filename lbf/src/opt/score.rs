use std::fmt::Display;

use ordered_float::NotNan;

use rollpack::entities::PackingResult;

use crate::config::ScoreWeights;

/// Score of a packing result, higher is better.
/// Compared lexicographically: the number of placed items comes first,
/// so a result which places more items always beats one which places fewer.
/// Among results placing equally many items, the weighted quality decides.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug)]
pub struct PackScore {
    pub n_placed: usize,
    /// Weighted sum of the placed volume fraction, the placed count fraction and the used weight capacity
    pub quality: NotNan<f32>,
}

impl PackScore {
    pub fn new(
        result: &PackingResult,
        n_input: usize,
        input_volume: f32,
        max_weight: f32,
        weights: &ScoreWeights,
    ) -> Self {
        let volume_frac = fraction(result.placed_volume(), input_volume);
        let count_frac = fraction(result.n_placed() as f32, n_input as f32);
        let weight_frac = fraction(result.total_weight, max_weight);

        let quality =
            weights.volume * volume_frac + weights.count * count_frac + weights.weight * weight_frac;

        PackScore {
            n_placed: result.n_placed(),
            quality: NotNan::new(quality).expect("quality is NaN"),
        }
    }
}

fn fraction(part: f32, whole: f32) -> f32 {
    match whole > 0.0 {
        true => part / whole,
        false => 0.0,
    }
}

impl Display for PackScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {:.4})", self.n_placed, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollpack::entities::Strategy;

    fn score(n_placed: usize, quality: f32) -> PackScore {
        PackScore {
            n_placed,
            quality: NotNan::new(quality).unwrap(),
        }
    }

    #[test]
    fn more_items_always_win() {
        assert!(score(5, 0.1) > score(4, 0.99));
        assert!(score(4, 0.6) > score(4, 0.5));
    }

    #[test]
    fn empty_result_scores_zero() {
        let result = PackingResult {
            placed_items: vec![],
            unplaced: vec![],
            total_weight: 0.0,
            utilization: 0.0,
            strategy: Strategy::InputOrder,
            strategy_index: 0,
            timed_out: false,
        };
        let s = PackScore::new(&result, 0, 0.0, 300.0, &ScoreWeights::default());
        assert_eq!(s, score(0, 0.0));
    }
}
