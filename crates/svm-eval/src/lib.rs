//! # svm-eval-rs
//!
//! Evaluation helpers for binary SVM/linear classifiers whose scores were
//! written one per line and whose true labels live in an
//! SVM-Light/LIBSVM sparse file.
//!
//! - [`metrics`]: `sign`, hinge loss and the miss-rate/hinge aggregator.
//! - [`io`]: prediction, label and model-dump readers.
//! - [`report`]: paired train/test evaluation and the results ledger.
//!
//! ## Loop start
//!
//! The historical evaluation scripts started their loop at index 1 and so
//! ignored the first example while still dividing by the full count.
//! [`LoopStart::FirstExample`] (the default) visits every pair;
//! [`LoopStart::SkipFirst`] reproduces the old numbers.

pub mod types;
pub mod error;
pub mod io;
pub mod metrics;
pub mod report;
pub mod util;

pub use error::EvalError;
pub use types::*;
pub use util::init_logging;
