use clap::Parser;
use std::path::PathBuf;
use std::process;
use svm_eval_rs::io::load_model_dump;
use svm_eval_rs::report::support_size;

/// Print the number of stored support examples in a model dump.
#[derive(Parser, Debug)]
#[command(name = "svm-support-size", version)]
struct Args {
    /// Model dump: `bias weight example` per line.
    model_dump: PathBuf,

    /// Quiet mode (no diagnostics).
    #[arg(short)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    svm_eval_rs::init_logging(args.quiet);

    let dump = load_model_dump(&args.model_dump).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    println!("{}", support_size(&dump));
}
