//! Check every line of the given files for valid lambda calculus syntax and
//! print the resulting token streams (and optionally parse trees).
//!
//! Example usage:
//!
//!     cargo run -- \
//!         --src-filepaths test_inputs/valid_examples.txt test_inputs/invalid_examples.txt \
//!         --print-trees

use clap::Parser;
use lambda_syntax_check::end_to_end::{run_checker, CheckerConfig};

fn main() {
    let checker_config = CheckerConfig::parse();

    let checker_result = run_checker(&checker_config);

    match checker_result {
        Ok(report_string) => {
            println!("{}", report_string);
        }

        Err(run_error) => {
            eprintln!("{}", run_error);
            std::process::exit(1);
        }
    }
}
