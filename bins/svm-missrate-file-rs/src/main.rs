use clap::Parser;
use std::path::PathBuf;
use std::process;
use svm_eval_rs::report::{append_summary, evaluate_run, RunConfig};
use svm_eval_rs::{EvalError, EvalParameter, LoopStart};

/// Evaluate train and test predictions and append a summary line to a
/// results file: `<label> <test_miss_rate> <train_miss_rate> <support_size>`.
#[derive(Parser, Debug)]
#[command(name = "svm-missrate-file", version)]
struct Args {
    /// Predicted scores on the training split.
    train_predictions: PathBuf,

    /// SVM-Light file with the training labels.
    train_labels: PathBuf,

    /// Predicted scores on the test split.
    test_predictions: PathBuf,

    /// SVM-Light file with the test labels.
    test_labels: PathBuf,

    /// Model dump: `bias weight example` per line.
    model_dump: PathBuf,

    /// Label written as the first field of the summary line.
    result_label: String,

    /// Results file, appended to.
    output_file: PathBuf,

    /// Start at the second example, as the historical scripts did.
    #[arg(long)]
    skip_first: bool,

    /// Quiet mode (no diagnostics).
    #[arg(short)]
    quiet: bool,
}

impl Args {
    fn into_config(self) -> RunConfig {
        let loop_start = if self.skip_first {
            LoopStart::SkipFirst
        } else {
            LoopStart::FirstExample
        };
        RunConfig {
            train_predictions: self.train_predictions,
            train_labels: self.train_labels,
            test_predictions: self.test_predictions,
            test_labels: self.test_labels,
            model_dump: self.model_dump,
            label: self.result_label,
            output: self.output_file,
            param: EvalParameter { loop_start },
        }
    }
}

fn run(config: &RunConfig) -> Result<(), EvalError> {
    let line = evaluate_run(config)?;
    append_summary(&config.output, &line)?;
    log::info!("appended \"{}\" to {}", line, config.output.display());
    Ok(())
}

fn main() {
    let args = Args::parse();
    svm_eval_rs::init_logging(args.quiet);
    let config = args.into_config();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
