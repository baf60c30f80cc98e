//! Behavior-based probability scorer.
//!
//! Maps the savings ratio and expense volatility to a discrete outcome
//! distribution through a bounded integer score. A step function over
//! auditable buckets, not a statistical model: every bucket is traceable
//! to a threshold rule.

use serde::{Deserialize, Serialize};

/// Outcome distribution over {loss, neutral, gain}. Rows of the fixed
/// lookup table sum to 1.00 by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeProbabilities {
    pub loss: f64,
    pub neutral: f64,
    pub gain: f64,
}

impl OutcomeProbabilities {
    pub fn sum(&self) -> f64 {
        self.loss + self.neutral + self.gain
    }
}

const SCORE_FLOOR: i8 = -2;
const SCORE_CEILING: i8 = 2;

/// Additive behavior score. Savings contribute up to +2, volatility
/// penalizes up to -2. The clamp is redundant for these two contributions
/// but guards future scoring rules against drifting out of the table.
fn behavior_score(savings_ratio: f64, expense_volatility: f64) -> i8 {
    let mut score: i8 = 0;

    if savings_ratio >= 0.20 {
        score += 2;
    } else if savings_ratio >= 0.10 {
        score += 1;
    }

    if expense_volatility > 0.30 {
        score -= 2;
    } else if expense_volatility > 0.15 {
        score -= 1;
    }

    score.clamp(SCORE_FLOOR, SCORE_CEILING)
}

/// Look up the outcome distribution for a savings/volatility pair.
pub fn stability_probability(savings_ratio: f64, expense_volatility: f64) -> OutcomeProbabilities {
    match behavior_score(savings_ratio, expense_volatility) {
        2 => OutcomeProbabilities {
            loss: 0.15,
            neutral: 0.25,
            gain: 0.60,
        },
        1 => OutcomeProbabilities {
            loss: 0.25,
            neutral: 0.35,
            gain: 0.40,
        },
        0 => OutcomeProbabilities {
            loss: 0.40,
            neutral: 0.35,
            gain: 0.25,
        },
        -1 => OutcomeProbabilities {
            loss: 0.55,
            neutral: 0.30,
            gain: 0.15,
        },
        _ => OutcomeProbabilities {
            loss: 0.70,
            neutral: 0.20,
            gain: 0.10,
        },
    }
}
