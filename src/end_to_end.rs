//! Code to configure and run the syntax checker on input files holding one
//! lambda calculus expression per line.

use std::fs;

use clap::Parser;

use crate::lexical_analysis::{token_stream_to_string, validate_and_tokenize, RejectionReason, Token};
use crate::parse_tree_impl::parse_tree_ast::tree_to_string;
use crate::parse_tree_impl::parse_tree_construction::build_tree;

/// Config for the checker. Instantiate via `CheckerConfig::parse()`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CheckerConfig {
    /// The input filepaths to check. Each line is checked on its own.
    #[arg(short, long, num_args = 1..)]
    pub src_filepaths: Vec<String>,

    /// Also print the parse tree of every accepted line.
    #[arg(short, long)]
    pub print_trees: bool,
}

/// Errors that may be thrown when running the checker.
#[derive(Debug)]
pub enum RunError {
    ConfigError(String),
    InputFileError(std::io::Error),
}

/// Display trait implementation for RunError.
impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigError(config_err_string) => {
                return write!(f, "Checker configuration error: {}", config_err_string);
            }

            Self::InputFileError(io_err) => {
                return write!(f, "Input file error: {}", io_err);
            }
        }
    }
}

/// Type conversions for errors.
impl From<std::io::Error> for RunError {
    fn from(value: std::io::Error) -> Self {
        return Self::InputFileError(value);
    }
}

/// What happened to a single line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LineOutcome {
    Accepted(Vec<Token>),
    Rejected(RejectionReason),
    Blank,
}

/// The outcome of one line, along with its 1-based line number and text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LineReport {
    pub line_num: usize,
    pub line: String,
    pub outcome: LineOutcome,
}

/// The outcomes of a batch of lines, in input order.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct BatchReport {
    pub line_reports: Vec<LineReport>,
}

impl BatchReport {
    pub fn num_accepted(&self) -> usize {
        return self
            .line_reports
            .iter()
            .filter(|line_report| matches!(line_report.outcome, LineOutcome::Accepted(_)))
            .count();
    }

    /// True only if every line was accepted. Blank lines are not accepted.
    pub fn all_valid(&self) -> bool {
        return self.num_accepted() == self.line_reports.len();
    }
}

/// Reads a file into lines, stripping trailing whitespace from each.
pub fn read_lines_from_file(filepath: &str) -> Result<Vec<String>, RunError> {
    let file_contents = fs::read_to_string(filepath)?;

    return Ok(file_contents
        .lines()
        .map(|line| String::from(line.trim_end()))
        .collect());
}

/// Checks every line independently; a rejected line never affects the others.
pub fn check_lines(lines: &[String]) -> BatchReport {
    let line_reports = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let outcome = match validate_and_tokenize(line.as_str()) {
                Ok(tokens) if tokens.is_empty() => LineOutcome::Blank,
                Ok(tokens) => LineOutcome::Accepted(tokens),
                Err(rejection) => LineOutcome::Rejected(rejection),
            };

            return LineReport {
                line_num: idx + 1,
                line: line.clone(),
                outcome,
            };
        })
        .collect();

    return BatchReport { line_reports };
}

/// Converts a BatchReport to a String, optionally followed by the parse tree
/// of each accepted line.
pub fn report_to_string(report: &BatchReport, print_trees: bool) -> String {
    let mut out = vec![];

    for line_report in &report.line_reports {
        match &line_report.outcome {
            LineOutcome::Accepted(tokens) => {
                out.push(format!(
                    "The tokenized string for input string {} is {}",
                    line_report.line,
                    token_stream_to_string(tokens)
                ));
            }

            LineOutcome::Rejected(rejection) => {
                out.push(format!("Line {} rejected: {}", line_report.line_num, rejection));
            }

            LineOutcome::Blank => {
                out.push(format!("Line {} is blank.", line_report.line_num));
            }
        }
    }

    if report.all_valid() {
        out.push(String::from("All lines are valid"));
    }

    if print_trees {
        for line_report in &report.line_reports {
            if let LineOutcome::Accepted(tokens) = &line_report.outcome {
                out.push(format!("\nParse tree for {}:", line_report.line));
                out.push(String::from(tree_to_string(&build_tree(tokens)).trim_end()));
            }
        }
    }

    return out.join("\n");
}

/// Run the checker on every file named by the given config, returning the
/// combined report text.
pub fn run_checker(config: &CheckerConfig) -> Result<String, RunError> {
    if config.src_filepaths.is_empty() {
        return Err(RunError::ConfigError(String::from(
            "No input filepaths were given",
        )));
    }

    let mut out = vec![];

    for src_filepath in &config.src_filepaths {
        let lines = read_lines_from_file(src_filepath)?;
        let report = check_lines(&lines);

        out.push(format!("Checking {}...", src_filepath));
        out.push(report_to_string(&report, config.print_trees));
    }

    return Ok(out.join("\n"));
}
