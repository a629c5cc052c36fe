//! Property-based tests for svm-eval-rs using proptest.
//!
//! These tests verify core invariants:
//! - `sign` only yields ±1 and `hinge` is non-negative with the margin cut-off
//! - the miss rate stays in `[0, 1]` and is zero exactly when every sign agrees
//! - jointly permuting predictions and labels leaves both averages unchanged

use proptest::prelude::*;
use svm_eval_rs::metrics::{aggregate_loss, hinge, sign};
use svm_eval_rs::{EvalError, EvalParameter, LoopStart};

fn label() -> impl Strategy<Value = f64> {
    prop_oneof![Just(1.0), Just(-1.0)]
}

/// Aligned, non-empty prediction/label pairs.
fn pairs() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((-10.0f64..10.0, label()), 1..64)
        .prop_map(|pairs| pairs.into_iter().unzip())
}

proptest! {
    #[test]
    fn sign_is_plus_or_minus_one(x in any::<f64>()) {
        let s = sign(x);
        prop_assert!(s == 1.0 || s == -1.0);
    }

    #[test]
    fn hinge_is_non_negative_and_zero_past_margin(p in -1e6f64..1e6, t in label()) {
        let loss = hinge(p, t);
        prop_assert!(loss >= 0.0);
        prop_assert_eq!(loss == 0.0, p * t >= 1.0);
    }

    #[test]
    fn miss_rate_is_a_fraction((predictions, labels) in pairs()) {
        let summary = aggregate_loss(&predictions, &labels, &EvalParameter::default()).unwrap();
        prop_assert!((0.0..=1.0).contains(&summary.miss_rate));
        prop_assert!(summary.mean_hinge_loss >= 0.0);

        let all_agree = predictions.iter().zip(&labels).all(|(&p, &t)| sign(p) == t);
        prop_assert_eq!(summary.miss_rate == 0.0, all_agree);
    }

    #[test]
    fn joint_permutation_leaves_losses_unchanged(
        (predictions, labels) in pairs(),
        seed in any::<u64>()
    ) {
        let n = predictions.len();
        let mut order: Vec<usize> = (0..n).collect();
        let mut state = seed | 1;
        for i in (1..n).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            order.swap(i, (state as usize) % (i + 1));
        }
        let permuted_predictions: Vec<f64> = order.iter().map(|&i| predictions[i]).collect();
        let permuted_labels: Vec<f64> = order.iter().map(|&i| labels[i]).collect();

        let param = EvalParameter::default();
        let original = aggregate_loss(&predictions, &labels, &param).unwrap();
        let permuted = aggregate_loss(&permuted_predictions, &permuted_labels, &param).unwrap();

        prop_assert_eq!(original.mistakes, permuted.mistakes);
        prop_assert_eq!(original.miss_rate, permuted.miss_rate);
        prop_assert!((original.mean_hinge_loss - permuted.mean_hinge_loss).abs() < 1e-9);
    }

    #[test]
    fn skip_first_never_counts_more_mistakes((predictions, labels) in pairs()) {
        let full = aggregate_loss(&predictions, &labels, &EvalParameter::default()).unwrap();
        let legacy = aggregate_loss(
            &predictions,
            &labels,
            &EvalParameter { loop_start: LoopStart::SkipFirst },
        );
        match legacy {
            Ok(legacy) => {
                prop_assert!(legacy.mistakes <= full.mistakes);
                prop_assert_eq!(legacy.examples, full.examples);
                prop_assert_eq!(legacy.considered + 1, full.considered);
            }
            Err(EvalError::InsufficientData { examples, considered }) => {
                prop_assert_eq!(examples, 1);
                prop_assert_eq!(considered, 0);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn mismatched_lengths_always_fail(
        predictions in prop::collection::vec(-1.0f64..1.0, 0..16),
        labels in prop::collection::vec(label(), 0..16)
    ) {
        prop_assume!(predictions.len() != labels.len());
        let is_length_mismatch = matches!(
            aggregate_loss(&predictions, &labels, &EvalParameter::default()),
            Err(EvalError::LengthMismatch { .. })
        );
        prop_assert!(is_length_mismatch);
    }
}
