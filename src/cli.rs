//! Command line handling.
//!
//! `subnet-compact <input> <output>` reads a prefix list, compacts it and
//! writes the result, one CIDR per line.

use crate::input::read_input;
use crate::output::{print_summary, write_output, ReductionSummary};
use crate::{compact_parsed, CompactOutcome};
use colored::Colorize;
use std::error::Error;

/// Positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub input: String,
    pub output: String,
}

/// Usage line for the given program name.
pub fn usage(program: &str) -> String {
    format!("Usage: {program} <input_file> <output_file>")
}

/// Accept exactly two positional arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<CliArgs, Box<dyn Error>> {
    let program = args.first().map(String::as_str).unwrap_or("subnet-compact");
    match args {
        [_, input, output] => Ok(CliArgs {
            input: input.clone(),
            output: output.clone(),
        }),
        _ => Err(usage(program).into()),
    }
}

/// Outcome of a full run.
#[derive(Debug)]
pub struct RunReport {
    pub summary: ReductionSummary,
    pub rejected: usize,
}

/// Read, compact and write. Fails before processing if the input is missing.
pub fn run(args: &CliArgs) -> Result<RunReport, Box<dyn Error>> {
    log::info!(
        "#Start run() {} -> {}",
        args.input.on_blue(),
        args.output.on_blue()
    );

    let parsed = read_input(&args.input)?;
    let CompactOutcome {
        networks,
        rejected,
        summary,
    } = compact_parsed(parsed);

    write_output(&args.output, &networks)?;
    print_summary(&summary, rejected.len());

    Ok(RunReport {
        summary,
        rejected: rejected.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_two_positionals() {
        let parsed = parse_args(&args(&["subnet-compact", "in.txt", "out.txt"])).unwrap();
        assert_eq!(parsed.input, "in.txt");
        assert_eq!(parsed.output, "out.txt");
    }

    #[test]
    fn test_parse_args_wrong_count() {
        for bad in [
            args(&["subnet-compact"]),
            args(&["subnet-compact", "in.txt"]),
            args(&["subnet-compact", "a", "b", "c"]),
        ] {
            let err = parse_args(&bad).unwrap_err();
            assert_eq!(err.to_string(), "Usage: subnet-compact <input_file> <output_file>");
        }
    }

    #[test]
    fn test_parse_args_no_program_name() {
        let err = parse_args(&[]).unwrap_err();
        assert!(err.to_string().starts_with("Usage:"));
    }

    #[test]
    fn test_run_missing_input() {
        let cli = CliArgs {
            input: "src/tests/test_data/missing.txt".to_string(),
            output: "unused.txt".to_string(),
        };
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        assert!(!std::path::Path::new("unused.txt").exists());
    }
}
