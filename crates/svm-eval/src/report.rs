//! Train/test evaluation and the append-only results ledger.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::EvalError;
use crate::io::{format_12g, format_g, load_labels, load_model_dump, load_predictions};
use crate::metrics::aggregate_loss;
use crate::types::{EvalParameter, LossSummary, ModelDump, SummaryLine};

/// Inputs for one paired train/test evaluation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Scores predicted on the training split.
    pub train_predictions: PathBuf,
    /// SVM-Light file holding the training labels.
    pub train_labels: PathBuf,
    /// Scores predicted on the test split.
    pub test_predictions: PathBuf,
    /// SVM-Light file holding the test labels.
    pub test_labels: PathBuf,
    /// Model dump whose records give the support size.
    pub model_dump: PathBuf,
    /// Run label written as the first ledger field.
    pub label: String,
    /// Results ledger, opened in append mode.
    pub output: PathBuf,
    /// Aggregation settings shared by both splits.
    pub param: EvalParameter,
}

/// Number of stored support examples in `dump`.
pub fn support_size(dump: &ModelDump) -> usize {
    dump.support_size()
}

/// Load a prediction file and its SVM-Light labels, then aggregate.
pub fn evaluate_split(
    predictions_path: &Path,
    labels_path: &Path,
    param: &EvalParameter,
) -> Result<LossSummary, EvalError> {
    let predictions = load_predictions(predictions_path)?;
    let labels = load_labels(labels_path)?;
    aggregate_loss(&predictions, &labels, param)
}

/// Evaluate both splits and count the model's support examples.
///
/// Does not touch the ledger; see [`append_summary`].
pub fn evaluate_run(config: &RunConfig) -> Result<SummaryLine, EvalError> {
    let train = evaluate_split(&config.train_predictions, &config.train_labels, &config.param)?;
    let test = evaluate_split(&config.test_predictions, &config.test_labels, &config.param)?;
    let dump = load_model_dump(&config.model_dump)?;

    log::info!(
        "train miss rate = {} ({}/{}), test miss rate = {} ({}/{}), support size = {}",
        format_g(train.miss_rate),
        train.mistakes,
        train.examples,
        format_g(test.miss_rate),
        test.mistakes,
        test.examples,
        dump.support_size()
    );

    Ok(SummaryLine {
        label: config.label.clone(),
        test_miss_rate: test.miss_rate,
        train_miss_rate: train.miss_rate,
        support_size: support_size(&dump),
    })
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.label,
            format_12g(self.test_miss_rate),
            format_12g(self.train_miss_rate),
            self.support_size
        )
    }
}

/// Write one newline-terminated ledger line to any writer.
pub fn write_summary_to_writer(mut w: impl Write, line: &SummaryLine) -> Result<(), EvalError> {
    writeln!(w, "{}", line)?;
    w.flush()?;
    Ok(())
}

/// Append one ledger line to `path`, creating the file if needed.
///
/// The line is buffered and written in one go; the file is closed when the
/// writer goes out of scope, on success and error alike.
pub fn append_summary(path: &Path, line: &SummaryLine) -> Result<(), EvalError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| EvalError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    write_summary_to_writer(BufWriter::new(file), line)
        .map_err(|e| e.in_file(path))
}
