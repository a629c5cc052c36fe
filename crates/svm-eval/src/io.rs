//! I/O routines for prediction files, SVM-Light label files and model dumps.
//!
//! Every loader comes in two flavours: a path-taking function that names the
//! file in its errors, and a `*_from_reader` function over any `BufRead`.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::EvalError;
use crate::types::*;

// ─── C-compatible %g formatting ─────────────────────────────────────
//
// C's printf `%.Pg` format strips trailing zeros and picks fixed vs.
// scientific notation based on the exponent of the *rounded* value:
//   - Use scientific if exponent < -4 or exponent >= precision
//   - Otherwise use fixed notation
//   - Strip trailing zeros (and trailing decimal point)
//
// Ledger fields are `%.12g` with `.0` appended when the result would
// otherwise read as an integer, which is how the historical result files
// spell floats (`0.333333333333`, `1.0`, `1e+15`).

/// Formats `f64` like C's `%.Pg`.
struct Gfmt {
    value: f64,
    precision: usize,
}

impl Gfmt {
    fn new(value: f64, precision: usize) -> Self {
        Self {
            value,
            precision: precision.max(1),
        }
    }
}

impl fmt::Display for Gfmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.value;
        let p = self.precision;

        if v.is_nan() {
            return write!(f, "nan");
        }
        if v.is_infinite() {
            return write!(f, "{}", if v > 0.0 { "inf" } else { "-inf" });
        }
        if v == 0.0 {
            // Preserve sign of -0.0
            return write!(f, "{}", if v.is_sign_negative() { "-0" } else { "0" });
        }

        // Round to `p` significant digits first so that e.g. 999999999999.5
        // picks its notation from the rounded exponent, as C does.
        let s = format!("{:.prec$e}", v, prec = p - 1);
        let (mantissa, exponent) = match s.split_once('e') {
            Some(parts) => parts,
            None => return write!(f, "{}", s),
        };
        let exp: i32 = exponent.parse().unwrap_or(0);

        if exp < -4 || exp >= p as i32 {
            let mantissa = trim_fraction(mantissa);
            // C zero-pads exponent to at least 2 digits (e-05 not e-5).
            let exp_str = if exp < 0 {
                format!("-{:02}", -exp)
            } else {
                format!("+{:02}", exp)
            };
            write!(f, "{}e{}", mantissa, exp_str)
        } else {
            let decimal_places = (p as i32 - 1 - exp) as usize;
            let s = format!("{:.prec$}", v, prec = decimal_places);
            write!(f, "{}", trim_fraction(&s))
        }
    }
}

/// Strip trailing zeros after a decimal point, then the point itself.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Format a float like C's `%g` (6 significant digits).
pub fn format_g(v: f64) -> String {
    Gfmt::new(v, 6).to_string()
}

/// Format a ledger float: `%.12g`, with `.0` appended to integral results.
pub fn format_12g(v: f64) -> String {
    let mut s = Gfmt::new(v, 12).to_string();
    if v.is_finite() && !s.contains('.') && !s.contains('e') {
        s.push_str(".0");
    }
    s
}

/// Format a float like C's `%f` (six digits after the decimal point).
pub fn format_fixed6(v: f64) -> String {
    format!("{:.6}", v)
}

// ─── Shared helpers ──────────────────────────────────────────────────

fn open_reader(path: &Path) -> Result<BufReader<File>, EvalError> {
    let file = File::open(path).map_err(|source| EvalError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Drop a trailing `# comment` and surrounding whitespace.
fn strip_comment(line: &str) -> &str {
    match line.split_once('#') {
        Some((data, _)) => data.trim(),
        None => line.trim(),
    }
}

/// Split off the first whitespace-delimited token, returning it and the
/// remainder with leading whitespace removed.
fn split_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    Some((&s[..end], s[end..].trim_start()))
}

fn parse_f64(token: &str, line: usize, field: &str) -> Result<f64, EvalError> {
    token.parse().map_err(|_| EvalError::ParseError {
        line,
        message: format!("invalid {}: {}", field, token),
    })
}

// ─── Predictions ─────────────────────────────────────────────────────

/// Load a prediction vector: whitespace-separated real scores, usually one
/// per line.
pub fn load_predictions(path: &Path) -> Result<Vec<f64>, EvalError> {
    let reader = open_reader(path)?;
    load_predictions_from_reader(reader).map_err(|e| e.in_file(path))
}

/// Load a prediction vector from any buffered reader.
pub fn load_predictions_from_reader(reader: impl BufRead) -> Result<Vec<f64>, EvalError> {
    let mut predictions = Vec::new();

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = strip_comment(&line);
        for token in line.split_whitespace() {
            predictions.push(parse_f64(token, line_idx + 1, "prediction")?);
        }
    }

    log::debug!("loaded {} predictions", predictions.len());
    Ok(predictions)
}

// ─── SVM-Light problems ──────────────────────────────────────────────

/// Load a labelled problem from a file in SVM-Light/LIBSVM sparse format.
///
/// Format: `<label> [qid:<n>] <index1>:<value1> <index2>:<value2> ... [# comment]`
pub fn load_problem(path: &Path) -> Result<SvmProblem, EvalError> {
    let reader = open_reader(path)?;
    load_problem_from_reader(reader).map_err(|e| e.in_file(path))
}

/// Load a labelled problem from any buffered reader.
pub fn load_problem_from_reader(reader: impl BufRead) -> Result<SvmProblem, EvalError> {
    let mut labels = Vec::new();
    let mut instances = Vec::new();

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = strip_comment(&line);
        if line.is_empty() {
            continue;
        }

        let line_num = line_idx + 1;
        let mut parts = line.split_whitespace();

        let label_str = parts.next().ok_or_else(|| EvalError::ParseError {
            line: line_num,
            message: "missing label".into(),
        })?;
        let label = parse_f64(label_str, line_num, "label")?;

        // Features must be in ascending index order
        let mut nodes = Vec::new();
        let mut prev_index: i32 = 0;
        for token in parts {
            let (idx_str, val_str) = token.split_once(':').ok_or_else(|| EvalError::ParseError {
                line: line_num,
                message: format!("expected index:value, got: {}", token),
            })?;
            if idx_str == "qid" {
                val_str.parse::<i64>().map_err(|_| EvalError::ParseError {
                    line: line_num,
                    message: format!("invalid qid: {}", val_str),
                })?;
                continue;
            }
            let index: i32 = idx_str.parse().map_err(|_| EvalError::ParseError {
                line: line_num,
                message: format!("invalid index: {}", idx_str),
            })?;
            if !nodes.is_empty() && index <= prev_index {
                return Err(EvalError::ParseError {
                    line: line_num,
                    message: format!(
                        "feature indices must be ascending: {} follows {}",
                        index, prev_index
                    ),
                });
            }
            let value = parse_f64(val_str, line_num, "value")?;
            prev_index = index;
            nodes.push(SvmNode { index, value });
        }

        labels.push(label);
        instances.push(nodes);
    }

    log::debug!("loaded {} labelled instances", labels.len());
    Ok(SvmProblem { labels, instances })
}

/// Load only the label column of an SVM-Light file.
pub fn load_labels(path: &Path) -> Result<Vec<f64>, EvalError> {
    load_problem(path).map(|problem| problem.labels)
}

// ─── Model dumps ─────────────────────────────────────────────────────

/// Load a model dump: one `bias weight example` record per line.
pub fn load_model_dump(path: &Path) -> Result<ModelDump, EvalError> {
    let reader = open_reader(path)?;
    load_model_dump_from_reader(reader).map_err(|e| e.in_file(path))
}

/// Load a model dump from any buffered reader.
///
/// Every record has exactly three whitespace-separated columns; the example
/// is a single token such as `[1:0.5,3:-1]`. Identifiers longer than
/// [`MAX_EXAMPLE_LEN`] bytes are truncated.
pub fn load_model_dump_from_reader(reader: impl BufRead) -> Result<ModelDump, EvalError> {
    let mut records = Vec::new();

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line = strip_comment(&line);
        if line.is_empty() {
            continue;
        }
        let line_num = line_idx + 1;

        let (bias_str, rest) = split_token(line).ok_or_else(|| EvalError::ParseError {
            line: line_num,
            message: "missing bias".into(),
        })?;
        let bias = parse_f64(bias_str, line_num, "bias")?;

        let (weight_str, rest) = split_token(rest).ok_or_else(|| EvalError::ParseError {
            line: line_num,
            message: "missing weight".into(),
        })?;
        let weight = parse_f64(weight_str, line_num, "weight")?;

        if rest.is_empty() {
            return Err(EvalError::ParseError {
                line: line_num,
                message: "missing example".into(),
            });
        }
        let columns = 2 + rest.split_whitespace().count();
        if columns != 3 {
            return Err(EvalError::ParseError {
                line: line_num,
                message: format!("wrong number of columns: expected 3, got {}", columns),
            });
        }

        let mut cut = rest.len().min(MAX_EXAMPLE_LEN);
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        if cut < rest.len() {
            log::warn!(
                "line {}: example truncated from {} to {} bytes",
                line_num,
                rest.len(),
                cut
            );
        }

        records.push(ModelRecord {
            bias,
            weight,
            example: rest[..cut].to_string(),
        });
    }

    log::debug!("loaded {} model records", records.len());
    Ok(ModelDump { records })
}

// ─── Tests ───────────────────────────────────────────────────────────
