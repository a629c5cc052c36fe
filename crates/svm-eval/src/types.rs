/// A single sparse feature: `index:value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvmNode {
    /// Feature index as written in the file.
    pub index: i32,
    /// Feature value.
    pub value: f64,
}

/// A labelled dataset read from an SVM-Light/LIBSVM sparse file.
///
/// Evaluation only consumes `labels`; the instances are kept so a loaded
/// problem stays a faithful view of the file.
#[derive(Debug, Clone, PartialEq)]
pub struct SvmProblem {
    /// True label per instance, expected in `{+1, -1}`.
    pub labels: Vec<f64>,
    /// Sparse feature vectors, one per instance.
    pub instances: Vec<Vec<SvmNode>>,
}

/// Maximum length in bytes of [`ModelRecord::example`].
pub const MAX_EXAMPLE_LEN: usize = 1024;

/// One stored support example from a model dump: `bias weight example`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRecord {
    /// Bias term stored alongside the example.
    pub bias: f64,
    /// Weight (dual coefficient) of the example.
    pub weight: f64,
    /// Example identifier, at most [`MAX_EXAMPLE_LEN`] bytes.
    pub example: String,
}

/// A model dump: the collection of stored support examples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelDump {
    /// Records in file order. Order does not affect the support size.
    pub records: Vec<ModelRecord>,
}

impl ModelDump {
    /// Number of stored support examples.
    pub fn support_size(&self) -> usize {
        self.records.len()
    }
}

/// Index at which the aggregation loop starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LoopStart {
    /// Visit every pair, starting at index 0.
    #[default]
    FirstExample,
    /// Legacy behavior: start at index 1, ignoring the first pair while
    /// still dividing by the full sequence length.
    SkipFirst,
}

impl LoopStart {
    /// First index visited by the aggregation loop.
    pub fn offset(self) -> usize {
        match self {
            LoopStart::FirstExample => 0,
            LoopStart::SkipFirst => 1,
        }
    }
}

/// Parameters controlling loss aggregation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvalParameter {
    /// Where the loop over aligned pairs begins.
    pub loop_start: LoopStart,
}

impl EvalParameter {
    /// Parameters reproducing the legacy scripts bit for bit.
    pub fn legacy() -> Self {
        Self {
            loop_start: LoopStart::SkipFirst,
        }
    }
}

/// Result of one pass of the loss aggregator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossSummary {
    /// Length of the prediction/label sequences.
    pub examples: usize,
    /// Pairs visited by the loop.
    pub considered: usize,
    /// Pairs where `sign(prediction) != label`.
    pub mistakes: usize,
    /// Sum of hinge terms over the visited pairs.
    pub hinge_total: f64,
    /// `hinge_total / examples`.
    pub mean_hinge_loss: f64,
    /// `mistakes / examples`, in `[0, 1]`.
    pub miss_rate: f64,
}

/// One line of the results ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    /// Free-form run label, written first.
    pub label: String,
    /// Miss rate on the test split.
    pub test_miss_rate: f64,
    /// Miss rate on the train split.
    pub train_miss_rate: f64,
    /// Support size of the model dump.
    pub support_size: usize,
}
