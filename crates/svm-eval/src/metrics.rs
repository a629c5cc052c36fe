//! Binary classification losses over aligned prediction/label sequences.

use crate::error::EvalError;
use crate::types::{EvalParameter, LossSummary};

/// Map a raw score to a predicted label: `+1` when `x >= 0`, `-1` otherwise.
///
/// NaN compares false and therefore maps to `-1`.
pub fn sign(x: f64) -> f64 {
    if x >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Hinge loss `max(0, 1 - p·t)` of score `p` against label `t`.
pub fn hinge(prediction: f64, label: f64) -> f64 {
    let margin_gap = 1.0 - prediction * label;
    if margin_gap < 0.0 {
        0.0
    } else {
        margin_gap
    }
}

/// Accumulate misclassifications and hinge loss over aligned pairs.
///
/// Both averages divide by the full sequence length, including under
/// [`LoopStart::SkipFirst`](crate::LoopStart::SkipFirst).
pub fn aggregate_loss(
    predictions: &[f64],
    labels: &[f64],
    param: &EvalParameter,
) -> Result<LossSummary, EvalError> {
    if predictions.len() != labels.len() {
        return Err(EvalError::LengthMismatch {
            predictions: predictions.len(),
            labels: labels.len(),
        });
    }

    let n = labels.len();
    let start = param.loop_start.offset().min(n);
    let considered = n - start;
    if considered == 0 {
        return Err(EvalError::InsufficientData {
            examples: n,
            considered,
        });
    }

    let mut mistakes = 0usize;
    let mut hinge_total = 0.0;
    let mut unusual_labels = 0usize;

    for (&pred, &label) in predictions[start..].iter().zip(labels[start..].iter()) {
        if label != 1.0 && label != -1.0 {
            unusual_labels += 1;
        }
        if sign(pred) != label {
            mistakes += 1;
        }
        hinge_total += hinge(pred, label);
    }

    if unusual_labels > 0 {
        log::warn!(
            "{} of {} labels are outside {{+1, -1}} and always count as mistakes",
            unusual_labels,
            considered
        );
    }

    let n_f = n as f64;
    let summary = LossSummary {
        examples: n,
        considered,
        mistakes,
        hinge_total,
        mean_hinge_loss: hinge_total / n_f,
        miss_rate: mistakes as f64 / n_f,
    };
    log::debug!(
        "aggregated {} of {} pairs: {} mistakes, hinge total {}",
        considered,
        n,
        mistakes,
        hinge_total
    );
    Ok(summary)
}

/// Miss rate only; see [`aggregate_loss`].
pub fn miss_rate(
    predictions: &[f64],
    labels: &[f64],
    param: &EvalParameter,
) -> Result<f64, EvalError> {
    aggregate_loss(predictions, labels, param).map(|summary| summary.miss_rate)
}
