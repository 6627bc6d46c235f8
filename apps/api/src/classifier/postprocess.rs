//! Caller-side policy over raw classifier output: percentage formatting,
//! fixed-size prefixes, and zero-score filtering. These are presentation
//! decisions, not part of the classifier contract.

use serde::{Deserialize, Serialize};

use crate::classifier::EmotionScore;

/// Prefix size for the listing-wide emotional summary.
pub const AGGREGATE_TOP_N: usize = 5;
/// Prefix size for a single comment's emotional breakdown.
pub const COMMENT_TOP_N: usize = 3;

/// An emotion label with its confidence rendered as a truncated integer
/// percentage, e.g. `"93%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionPercent {
    pub label: String,
    pub score: String,
}

/// Converts confidences to percentage strings, truncating (not rounding)
/// toward zero. Order is preserved exactly as the model returned it.
fn to_percentages(raw: &[EmotionScore]) -> Vec<EmotionPercent> {
    raw.iter()
        .map(|emotion| EmotionPercent {
            label: emotion.label.clone(),
            score: format!("{}%", (emotion.score * 100.0).trunc() as i64),
        })
        .collect()
}

/// Keeps the first `top_n` entries of the model-ordered result, then drops
/// entries that truncate to zero percent. The prefix is taken before the
/// filter, so fewer than `top_n` entries may survive.
pub fn top_emotions(raw: &[EmotionScore], top_n: usize) -> Vec<EmotionPercent> {
    let mut percentages = to_percentages(raw);
    percentages.truncate(top_n);
    percentages.retain(|emotion| emotion.score != "0%");
    percentages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(label: &str, score: f64) -> EmotionScore {
        EmotionScore {
            label: label.into(),
            score,
        }
    }

    #[test]
    fn test_percentages_truncate_not_round() {
        let raw = vec![score("joy", 0.999), score("love", 0.305)];
        let out = top_emotions(&raw, 5);
        assert_eq!(out[0].score, "99%");
        assert_eq!(out[1].score, "30%");
    }

    #[test]
    fn test_zero_percent_entries_are_dropped() {
        let raw = vec![score("joy", 0.8), score("grief", 0.004)];
        let out = top_emotions(&raw, 5);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label, "joy");
    }

    #[test]
    fn test_prefix_is_taken_before_the_zero_filter() {
        // Five entries, the first three of which truncate to zero: a top-3
        // request filters all of them even though later entries are non-zero.
        let raw = vec![
            score("a", 0.001),
            score("b", 0.002),
            score("c", 0.003),
            score("d", 0.5),
            score("e", 0.4),
        ];
        let out = top_emotions(&raw, COMMENT_TOP_N);
        assert!(out.is_empty());
    }

    #[test]
    fn test_model_order_is_preserved() {
        let raw = vec![
            score("admiration", 0.6),
            score("joy", 0.3),
            score("approval", 0.1),
        ];
        let out = top_emotions(&raw, AGGREGATE_TOP_N);
        let labels: Vec<&str> = out.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["admiration", "joy", "approval"]);
    }

    #[test]
    fn test_post_processing_is_deterministic() {
        let raw = vec![score("joy", 0.42), score("anger", 0.13)];
        assert_eq!(top_emotions(&raw, 5), top_emotions(&raw, 5));
    }
}
