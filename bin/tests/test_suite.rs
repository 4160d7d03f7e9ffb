use interpreter::{InterpretError, Interpreter};
use itertools::Itertools;
use lazy_regex::regex;
use test_suite_proc_macro::generate_tests;

use pretty_assertions::assert_eq;

/// What running a single line produced. Output written before a runtime error is kept.
#[derive(Debug, Default, PartialEq)]
struct Outcome {
    output: Vec<String>,
    runtime_error: Option<String>,
    errors: Vec<String>,
}

fn run_line(line: &str) -> Outcome {
    let mut output = Vec::new();
    let result = Interpreter::new().run_source(line, &mut output);

    let mut outcome = Outcome {
        output: String::from_utf8(output).unwrap().lines().map(str::to_string).collect_vec(),
        ..Default::default()
    };

    match result {
        Ok(()) => (),
        Err(InterpretError::RuntimeError(e)) => outcome.runtime_error = Some(e.to_string()),
        Err(InterpretError::CompileError(diagnostics)) => {
            outcome.errors = diagnostics.iter().map(|d| d.to_string()).collect_vec()
        }
        Err(e) => panic!("Unexpected error: {:?}", e),
    }

    outcome
}

/// Expectations trail the code as comments, several can be chained:
/// `1; 2 // expect: 1 // expect: 2`. The scanner skips them like any other comment.
fn expected_outcome(line: &str) -> Outcome {
    let expectation_regex = regex!(r"^(expect|runtime error|error): (.*)$");

    let mut outcome = Outcome::default();
    for comment in line.split(" // ").skip(1) {
        let Some(cap) = expectation_regex.captures(comment) else {
            continue;
        };
        let text = cap[2].to_string();
        match &cap[1] {
            "expect" => outcome.output.push(text),
            "runtime error" => outcome.runtime_error = Some(text),
            _ => outcome.errors.push(text),
        }
    }
    outcome
}

/// Runs every line of `code` as its own independent source and checks it against the
/// expectations in its trailing comments.
pub fn lox_expect(code: &str) {
    for (i, line) in code.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        assert_eq!(
            run_line(line),
            expected_outcome(line),
            "Actual outcome (left) does not match expected outcome (right) in line {}: {}",
            i + 1,
            line
        );
    }
}

#[test]
fn expectations_are_parsed_from_comments() {
    assert_eq!(
        expected_outcome("1; 2 // expect: 1 // expect: 2"),
        Outcome { output: vec!["1".to_string(), "2".to_string()], ..Default::default() }
    );
    assert_eq!(
        expected_outcome("1, -nil // runtime error: Operand must be a number."),
        Outcome {
            runtime_error: Some("Operand must be a number.".to_string()),
            ..Default::default()
        }
    );
    assert_eq!(expected_outcome("// just a comment"), Outcome::default());
}

generate_tests!("suite");
