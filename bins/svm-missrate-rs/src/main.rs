use clap::Parser;
use std::path::PathBuf;
use std::process;
use svm_eval_rs::io::{format_fixed6, load_labels, load_predictions};
use svm_eval_rs::metrics::aggregate_loss;
use svm_eval_rs::{EvalError, EvalParameter, LoopStart, LossSummary};

/// Hinge loss and miss rate of one prediction file against SVM-Light labels.
#[derive(Parser, Debug)]
#[command(name = "svm-missrate", version)]
struct Args {
    /// Predicted scores, one per line.
    predictions: PathBuf,

    /// SVM-Light/LIBSVM file holding the true labels.
    labels: PathBuf,

    /// Start at the second example, as the historical scripts did.
    #[arg(long)]
    skip_first: bool,

    /// Quiet mode (no diagnostics).
    #[arg(short)]
    quiet: bool,
}

fn run(args: &Args) -> Result<LossSummary, EvalError> {
    let param = EvalParameter {
        loop_start: if args.skip_first {
            LoopStart::SkipFirst
        } else {
            LoopStart::FirstExample
        },
    };
    let predictions = load_predictions(&args.predictions)?;
    let labels = load_labels(&args.labels)?;
    aggregate_loss(&predictions, &labels, &param)
}

fn main() {
    let args = Args::parse();
    svm_eval_rs::init_logging(args.quiet);

    let summary = run(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    log::info!(
        "{} mistakes over {} examples ({} considered)",
        summary.mistakes,
        summary.examples,
        summary.considered
    );
    println!("Hinge Loss={}", format_fixed6(summary.mean_hinge_loss));
    println!("Miss Loss={}", format_fixed6(summary.miss_rate));
}
