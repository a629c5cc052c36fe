use std::path::PathBuf;

/// Errors returned by svm-eval-rs operations.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// A parse error occurred while reading a predictions, labels or model file.
    #[error("parse error at line {line}: {message}")]
    ParseError {
        /// 1-based line number where the error occurred.
        line: usize,
        /// Description of the parse failure.
        message: String,
    },

    /// An error raised while reading a specific file.
    #[error("{}: {source}", .path.display())]
    InFile {
        /// File being read when the error occurred.
        path: PathBuf,
        /// Underlying failure.
        source: Box<EvalError>,
    },

    /// A required input or output file could not be opened.
    #[error("can't open file {}: {source}", .path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Predictions and labels are not index-aligned.
    #[error("length mismatch: {predictions} predictions but {labels} labels")]
    LengthMismatch {
        /// Number of prediction scores.
        predictions: usize,
        /// Number of true labels.
        labels: usize,
    },

    /// Too few examples to compute averaged statistics.
    #[error("insufficient data: {examples} examples, {considered} considered")]
    InsufficientData {
        /// Length of the input sequences.
        examples: usize,
        /// Pairs actually visited by the aggregation loop.
        considered: usize,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EvalError {
    /// Attach the path of the file being read.
    pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Self {
        EvalError::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
