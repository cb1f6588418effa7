// Copyright (c) The laplace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use det_calc::DetCalcApp;
use laplace::errors::SessionError;
use std::io::Cursor;

fn exec(args: &[&str], input: &str) -> (color_eyre::Result<f64>, String) {
    let app = DetCalcApp::try_parse_from(std::iter::once("det-calc").chain(args.iter().copied()))
        .expect("arguments are valid");
    let mut output = Vec::new();
    let result = app.exec_with(Cursor::new(input.as_bytes()), &mut output);
    (result, String::from_utf8(output).expect("output is UTF-8"))
}

#[test]
fn test_default_session() {
    let (result, output) = exec(&[], "3\n1\n2\n3\n4\n5\n6\n7\n8\n10\n");
    assert_eq!(result.unwrap(), -3.0);
    assert!(output.ends_with("det(A) = -3\n"));
}

#[test]
fn test_flags() {
    let (result, output) = exec(
        &["--max-rank", "2", "--invalid-message", "bad", "--show-matrix"],
        "3\n2\n2\n0\n0\n0.5\n",
    );
    assert_eq!(result.unwrap(), 1.0);
    assert_eq!(
        output,
        "Matrix rank: bad\nMatrix rank: a[1, 1] = a[1, 2] = a[2, 1] = a[2, 2] = \
         A =\n  2  0\n  0  0.5\ndet(A) = 1\n"
    );
}

#[test]
fn test_precision_flag() {
    let (result, output) = exec(&["--show-matrix", "--precision", "2"], "1
-1.5
");
    assert_eq!(result.unwrap(), -1.5);
    assert!(output.ends_with("A =\n  -1.50\ndet(A) = -1.5\n"));
}

#[test]
fn test_invalid_max_rank() {
    for max_rank in ["0", "13"] {
        let (result, output) = exec(&["--max-rank", max_rank], "1\n1\n");
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains("--max-rank must be between 1 and 12"),
            "unexpected error: {}",
            err
        );
        assert!(output.is_empty(), "nothing is prompted");
    }
}

#[test]
fn test_end_of_input_is_an_error() {
    let (result, output) = exec(&[], "2\n1\n");
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SessionError>(),
        Some(SessionError::EndOfInput { prompt }) if prompt == "a[1, 2] = "
    ));
    assert!(!output.contains("det(A)"));
}
